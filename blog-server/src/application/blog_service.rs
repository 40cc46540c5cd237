use crate::data::post_repository::PostRepository;
use crate::domain::post::CreatePostRequest;
use crate::domain::{DomainError, Post};
use std::sync::Arc;

pub struct BlogService {
    post_repo: Arc<dyn PostRepository + Send + Sync>,
}

impl BlogService {
    pub fn new(post_repo: Arc<dyn PostRepository + Send + Sync>) -> Self {
        Self { post_repo }
    }

    pub async fn create_post(&self, req: CreatePostRequest) -> Post {
        let post = self.post_repo.create(req).await;

        tracing::info!("Post created: id={}, author={}", post.id, post.author);

        post
    }

    pub async fn get_post(&self, id: i64) -> Result<Post, DomainError> {
        let result = self.post_repo.find_by_id(id).await;

        if let Err(err) = &result {
            tracing::debug!("Lookup of post id={} failed: {}", id, err);
        }

        result
    }

    pub async fn list_posts(&self) -> Vec<Post> {
        self.post_repo.list().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::post_repository::InMemoryPostRepository;

    fn service() -> BlogService {
        BlogService::new(Arc::new(InMemoryPostRepository::new()))
    }

    #[tokio::test]
    async fn create_then_get_round_trips() {
        let service = service();

        let created = service
            .create_post(CreatePostRequest {
                title: "Hello".into(),
                content: "World".into(),
                author: "Me".into(),
            })
            .await;

        assert_eq!(service.get_post(created.id).await, Ok(created.clone()));
        assert_eq!(service.list_posts().await, vec![created]);
    }

    #[tokio::test]
    async fn get_missing_post_surfaces_not_found() {
        let err = service().get_post(7).await.unwrap_err();

        assert_eq!(err, DomainError::PostNotFound(7));
        assert_eq!(err.to_status_code(), 404);
        assert_eq!(err.to_string(), "Post not found");
    }
}
