use chrono::Local;
use serde::{Deserialize, Serialize};

/// Format of `date_posted`, e.g. "April 20, 2024".
pub const DATE_FORMAT: &str = "%B %d, %Y";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub author: String,
    pub date_posted: String,
}

/// A post payload that already passed field validation.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreatePostRequest {
    pub title: String,
    pub content: String,
    pub author: String,
}

impl Post {
    pub fn new(id: i64, req: CreatePostRequest, date_posted: String) -> Self {
        Self {
            id,
            title: req.title,
            content: req.content,
            author: req.author,
            date_posted,
        }
    }

    /// Title shortened for the browser tab.
    pub fn page_title(&self) -> String {
        self.title.chars().take(50).collect()
    }
}

/// Today's local date in [`DATE_FORMAT`].
pub fn today() -> String {
    Local::now().format(DATE_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn date_format_matches_seed_style() {
        let date = NaiveDate::from_ymd_opt(2024, 4, 2).unwrap();
        assert_eq!(date.format(DATE_FORMAT).to_string(), "April 02, 2024");
    }

    #[test]
    fn page_title_is_truncated_to_fifty_chars() {
        let post = Post::new(
            1,
            CreatePostRequest {
                title: "é".repeat(60),
                content: "body".into(),
                author: "someone".into(),
            },
            today(),
        );

        assert_eq!(post.page_title().chars().count(), 50);
    }
}
