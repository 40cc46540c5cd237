use crate::error::BlogClientError;
use crate::models::{CreatePostRequest, ErrorMessage, Post, ValidationErrorBody};
use reqwest::{Client, StatusCode};
use std::time::Duration;

/// Client for the blog's JSON API (`/api/posts`).
#[derive(Debug, Clone)]
pub struct BlogClient {
    client: Client,
    base_url: String,
}

impl BlogClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(10))
            .connect_timeout(Duration::from_secs(5))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            base_url: base_url.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    pub async fn list_posts(&self) -> Result<Vec<Post>, BlogClientError> {
        let url = self.url("/api/posts");
        tracing::debug!("GET {}", url);

        let response = self.client.get(&url).send().await?;
        let status = response.status();

        match status {
            StatusCode::OK => Ok(response.json::<Vec<Post>>().await?),
            _ => Err(unexpected(status, response).await),
        }
    }

    pub async fn get_post(&self, id: i64) -> Result<Post, BlogClientError> {
        let url = self.url(&format!("/api/posts/{}", id));
        tracing::debug!("GET {}", url);

        let response = self.client.get(&url).send().await?;
        self.handle_post_response(response).await
    }

    pub async fn create_post(
        &self,
        title: impl Into<String>,
        content: impl Into<String>,
        author: impl Into<String>,
    ) -> Result<Post, BlogClientError> {
        let url = self.url("/api/posts");
        let request = CreatePostRequest {
            title: title.into(),
            content: content.into(),
            author: author.into(),
        };
        tracing::debug!("POST {} title={:?}", url, request.title);

        let response = self.client.post(&url).json(&request).send().await?;
        self.handle_post_response(response).await
    }

    async fn handle_post_response(
        &self,
        response: reqwest::Response,
    ) -> Result<Post, BlogClientError> {
        let status = response.status();

        match status {
            StatusCode::OK | StatusCode::CREATED => Ok(response.json::<Post>().await?),
            StatusCode::NOT_FOUND => {
                let body = response.json::<ErrorMessage>().await?;
                Err(BlogClientError::NotFound(body.message))
            }
            StatusCode::UNPROCESSABLE_ENTITY => {
                let body = response.json::<ValidationErrorBody>().await?;
                Err(BlogClientError::Validation(body.detail))
            }
            _ => Err(unexpected(status, response).await),
        }
    }
}

async fn unexpected(status: StatusCode, response: reqwest::Response) -> BlogClientError {
    let body = match response.text().await {
        Ok(text) => text,
        Err(err) => return BlogClientError::HttpError(err),
    };

    BlogClientError::UnexpectedStatus {
        status: status.as_u16(),
        body,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_joins_without_double_slashes() {
        let client = BlogClient::new("http://localhost:8000/");
        assert_eq!(client.url("/api/posts"), "http://localhost:8000/api/posts");

        let client = BlogClient::new("http://localhost:8000");
        assert_eq!(client.url("api/posts/3"), "http://localhost:8000/api/posts/3");
    }

    #[tokio::test]
    async fn unreachable_server_is_http_error() {
        // port 9 (discard) is essentially never bound on test machines
        let client = BlogClient::new("http://127.0.0.1:9");

        let err = client.list_posts().await.unwrap_err();

        assert!(matches!(err, BlogClientError::HttpError(_)));
    }
}
