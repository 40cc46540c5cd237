use crate::domain::Post;
use maud::{html, Markup, DOCTYPE};

const SITE_NAME: &str = "Blog";

fn layout(title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (SITE_NAME) " - " (title) }
                link rel="stylesheet" href="/static/css/main.css";
            }
            body {
                header.site-header {
                    nav {
                        a.brand href="/" { (SITE_NAME) }
                    }
                }
                main.container {
                    (content)
                }
            }
        }
    }
}

fn post_summary(post: &Post) -> Markup {
    html! {
        article.post {
            h2 {
                a href={ "/posts/" (post.id) } { (post.title) }
            }
            p.post-meta {
                "By " (post.author) " on " (post.date_posted)
            }
            p.post-content { (post.content) }
        }
    }
}

pub fn home(posts: &[Post]) -> Markup {
    layout(
        "Home",
        html! {
            h1 { "Latest Posts" }
            @if posts.is_empty() {
                p.empty { "No posts yet." }
            } @else {
                @for post in posts {
                    (post_summary(post))
                }
            }
        },
    )
}

pub fn post_detail(post: &Post) -> Markup {
    layout(
        &post.page_title(),
        html! {
            article.post.post-detail {
                h1 { (post.title) }
                p.post-meta {
                    "By " (post.author) " on " (post.date_posted)
                }
                div.post-content { (post.content) }
            }
            a href="/" { "Back to all posts" }
        },
    )
}

pub fn error_page(title: &str, status_code: u16, message: &str) -> Markup {
    layout(
        title,
        html! {
            section.error {
                h1 { (status_code) }
                p.error-message { (message) }
                a href="/" { "Go back home" }
            }
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post() -> Post {
        Post {
            id: 7,
            title: "<script>alert(1)</script>".into(),
            content: "Body text".into(),
            author: "Writer".into(),
            date_posted: "April 20, 2024".into(),
        }
    }

    #[test]
    fn home_links_every_post() {
        let page = home(&[post()]).into_string();

        assert!(page.contains("href=\"/posts/7\""));
        assert!(page.contains("By Writer on April 20, 2024"));
        assert!(page.contains("<title>Blog - Home</title>"));
    }

    #[test]
    fn home_without_posts_says_so() {
        assert!(home(&[]).into_string().contains("No posts yet."));
    }

    #[test]
    fn post_content_is_escaped() {
        let page = post_detail(&post()).into_string();

        assert!(!page.contains("<script>"));
        assert!(page.contains("&lt;script&gt;"));
    }

    #[test]
    fn error_page_shows_status_and_message() {
        let page = error_page("404 Error", 404, "Not Found").into_string();

        assert!(page.contains("<h1>404</h1>"));
        assert!(page.contains("Not Found"));
    }
}
