use crate::models::ValidationIssue;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BlogClientError {
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation failed: {}", summarize(.0))]
    Validation(Vec<ValidationIssue>),

    #[error("Unexpected response (HTTP {status}): {body}")]
    UnexpectedStatus { status: u16, body: String },
}

impl BlogClientError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, BlogClientError::NotFound(_))
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, BlogClientError::Validation(_))
    }
}

fn summarize(issues: &[ValidationIssue]) -> String {
    issues
        .iter()
        .map(|issue| format!("{} ({})", issue.loc.join("."), issue.msg))
        .collect::<Vec<_>>()
        .join(", ")
}
