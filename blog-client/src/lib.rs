pub mod error;
pub mod http_client;
pub mod models;

pub use error::BlogClientError;
pub use http_client::BlogClient;
pub use models::{CreatePostRequest, Post};
