use crate::domain::post::{today, CreatePostRequest};
use crate::domain::{DomainError, Post};
use async_trait::async_trait;
use tokio::sync::RwLock;

#[async_trait]
pub trait PostRepository: Send + Sync {
    async fn create(&self, req: CreatePostRequest) -> Post;
    async fn find_by_id(&self, id: i64) -> Result<Post, DomainError>;
    async fn list(&self) -> Vec<Post>;
}

#[derive(Debug)]
struct PostTable {
    posts: Vec<Post>,
    next_id: i64,
}

/// Process-local post storage. Posts are kept in insertion order.
#[derive(Debug)]
pub struct InMemoryPostRepository {
    table: RwLock<PostTable>,
}

impl InMemoryPostRepository {
    pub fn new() -> Self {
        Self::with_posts(Vec::new())
    }

    /// Store pre-filled with the three demo posts.
    pub fn seeded() -> Self {
        Self::with_posts(seed_posts())
    }

    fn with_posts(posts: Vec<Post>) -> Self {
        let next_id = posts.iter().map(|post| post.id).max().unwrap_or(0) + 1;

        Self {
            table: RwLock::new(PostTable { posts, next_id }),
        }
    }
}

impl Default for InMemoryPostRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn create(&self, req: CreatePostRequest) -> Post {
        // id allocation and append happen under one write lock
        let mut table = self.table.write().await;

        let post = Post::new(table.next_id, req, today());
        table.next_id += 1;
        table.posts.push(post.clone());

        tracing::debug!("Stored post id={}, total={}", post.id, table.posts.len());

        post
    }

    async fn find_by_id(&self, id: i64) -> Result<Post, DomainError> {
        self.table
            .read()
            .await
            .posts
            .iter()
            .find(|post| post.id == id)
            .cloned()
            .ok_or(DomainError::PostNotFound(id))
    }

    async fn list(&self) -> Vec<Post> {
        self.table.read().await.posts.clone()
    }
}

fn seed_posts() -> Vec<Post> {
    [
        (1, "First Post", "first", "April 20, 2024"),
        (2, "Second Post", "second", "April 21, 2024"),
        (3, "Third Post", "third", "April 22, 2024"),
    ]
    .into_iter()
    .map(|(id, title, ordinal, date_posted)| Post {
        id,
        title: title.to_string(),
        content: format!("This is the content of the {} post.", ordinal),
        author: "Elghonemy".to_string(),
        date_posted: date_posted.to_string(),
    })
    .collect()
}
