use anyhow::Result;
use blog_client::{BlogClient, Post};
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Base URL of the blog server
    #[arg(short, long, default_value = "http://localhost:8000")]
    server: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List all posts
    List,

    /// Show a single post
    Get {
        #[arg(short, long)]
        id: i64,
    },

    /// Publish a new post
    Create {
        #[arg(short, long)]
        title: String,

        #[arg(short, long)]
        content: String,

        #[arg(short, long)]
        author: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let client = BlogClient::new(cli.server);

    println!("🔌 Connecting to: {}", client.base_url());

    match &cli.command {
        Commands::List => {
            println!("📋 Listing posts");

            match client.list_posts().await {
                Ok(posts) => {
                    println!("✅ Found {} posts", posts.len());
                    println!();

                    if posts.is_empty() {
                        println!("   No posts found");
                        println!("   Tip: Create your first post: blog-cli create --title \"My Post\" --content \"Hello\" --author \"Me\"");
                    } else {
                        for (i, post) in posts.iter().enumerate() {
                            println!("   {}. [{}] {}", i + 1, post.id, post.title);
                            println!("      By {} on {}", post.author, post.date_posted);
                            println!("      Content: {}", truncate(&post.content, 50));
                            println!();
                        }
                    }
                }
                Err(e) => {
                    println!("❌ Failed to list posts: {}", e);
                    std::process::exit(1);
                }
            }
        }

        Commands::Get { id } => {
            println!("🔍 Getting post #{}", id);

            match client.get_post(*id).await {
                Ok(post) => {
                    println!("✅ Post retrieved:");
                    print_post(&post);
                }
                Err(e) => {
                    if e.is_not_found() {
                        println!("❌ Post #{} not found", id);
                        println!("   Tip: Use 'list' command to see available posts");
                    } else {
                        println!("❌ Error: {}", e);
                    }
                    std::process::exit(1);
                }
            }
        }

        Commands::Create {
            title,
            content,
            author,
        } => {
            println!("📝 Creating new post...");

            match client.create_post(title, content, author).await {
                Ok(post) => {
                    println!("✅ Post created successfully!");
                    print_post(&post);
                }
                Err(e) => {
                    println!("❌ Failed to create post: {}", e);
                    std::process::exit(1);
                }
            }
        }
    }

    Ok(())
}

fn print_post(post: &Post) {
    println!("   ID: {}", post.id);
    println!("   Title: {}", post.title);
    println!("   Content: {}", post.content);
    println!("   Author: {}", post.author);
    println!("   Posted: {}", post.date_posted);
}

fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        format!("{}...", s.chars().take(max_len).collect::<String>())
    }
}
