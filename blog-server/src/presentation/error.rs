use crate::domain::DomainError;
use crate::presentation::views;
use actix_web::http::header::ContentType;
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde::Serialize;
use serde_json::{json, Value};
use thiserror::Error;

const DEFAULT_MESSAGE: &str = "An error occurred.";
const VALIDATION_PAGE_MESSAGE: &str = "There was a validation error with your request.";

/// How an error is presented to the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorFormat {
    Html,
    Json,
}

impl ErrorFormat {
    /// JSON for the API surface, HTML pages everywhere else.
    pub fn for_path(path: &str) -> Self {
        if path.starts_with("/api/") {
            Self::Json
        } else {
            Self::Html
        }
    }
}

/// One entry of a validation `detail` array.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldError {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub loc: Vec<String>,
    pub msg: &'static str,
    pub input: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ctx: Option<Value>,
}

impl FieldError {
    pub fn new(kind: &'static str, loc: &[&str], msg: &'static str, input: Value) -> Self {
        Self {
            kind,
            loc: loc.iter().map(|part| part.to_string()).collect(),
            msg,
            input,
            ctx: None,
        }
    }

    pub fn with_ctx(mut self, ctx: Value) -> Self {
        self.ctx = Some(ctx);
        self
    }
}

#[derive(Debug, Clone, Error)]
pub enum AppError {
    #[error("{message}")]
    Http {
        status: StatusCode,
        title: Option<String>,
        message: String,
    },

    #[error("Validation error: {} invalid field(s)", .0.len())]
    Validation(Vec<FieldError>),
}

impl AppError {
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::Http {
            status: StatusCode::NOT_FOUND,
            title: None,
            message: message.into(),
        }
    }

    /// Error for a status produced outside our handlers (unknown route, wrong method).
    pub fn from_status(status: StatusCode) -> Self {
        Self::Http {
            status,
            title: None,
            message: status
                .canonical_reason()
                .unwrap_or(DEFAULT_MESSAGE)
                .to_string(),
        }
    }

    /// Overrides the HTML page title; JSON output is unaffected.
    pub fn with_title(self, title: impl Into<String>) -> Self {
        match self {
            Self::Http {
                status, message, ..
            } => Self::Http {
                status,
                title: Some(title.into()),
                message,
            },
            other => other,
        }
    }

    pub fn render(&self, format: ErrorFormat) -> HttpResponse {
        let status = self.status_code();

        match format {
            ErrorFormat::Json => {
                let body = match self {
                    Self::Http { message, .. } => json!({ "message": message }),
                    Self::Validation(detail) => json!({ "detail": detail }),
                };
                HttpResponse::build(status).json(body)
            }
            ErrorFormat::Html => {
                let (title, message) = match self {
                    Self::Http { title, message, .. } => (
                        title
                            .clone()
                            .unwrap_or_else(|| format!("{} Error", status.as_u16())),
                        message.as_str(),
                    ),
                    Self::Validation(_) => ("Validation Error".to_string(), VALIDATION_PAGE_MESSAGE),
                };
                HttpResponse::build(status)
                    .content_type(ContentType::html())
                    .body(views::error_page(&title, status.as_u16(), message).into_string())
            }
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::Http { status, .. } => *status,
            Self::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }

    // The error middleware re-renders by request path; this is the fallback.
    fn error_response(&self) -> HttpResponse {
        self.render(ErrorFormat::Json)
    }
}

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        let status =
            StatusCode::from_u16(err.to_status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        Self::Http {
            status,
            title: None,
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;

    async fn body_string(response: HttpResponse) -> String {
        let bytes = to_bytes(response.into_body()).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[test]
    fn format_is_chosen_by_api_prefix() {
        assert_eq!(ErrorFormat::for_path("/api/posts"), ErrorFormat::Json);
        assert_eq!(ErrorFormat::for_path("/api/"), ErrorFormat::Json);
        assert_eq!(ErrorFormat::for_path("/api"), ErrorFormat::Html);
        assert_eq!(ErrorFormat::for_path("/posts/1"), ErrorFormat::Html);
        assert_eq!(ErrorFormat::for_path("/apiary"), ErrorFormat::Html);
    }

    #[actix_rt::test]
    async fn domain_not_found_renders_api_message() {
        let err = AppError::from(DomainError::PostNotFound(99));
        let response = err.render(ErrorFormat::Json);

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body: Value = serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(body, json!({ "message": "Post not found" }));
    }

    #[actix_rt::test]
    async fn http_error_renders_page_with_status_and_default_title() {
        let response = AppError::from_status(StatusCode::METHOD_NOT_ALLOWED).render(ErrorFormat::Html);

        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
        let body = body_string(response).await;
        assert!(body.contains("405 Error"));
        assert!(body.contains("Method Not Allowed"));
    }

    #[actix_rt::test]
    async fn custom_title_is_used_on_page() {
        let response = AppError::not_found("Gone.")
            .with_title("Post Not Found")
            .render(ErrorFormat::Html);

        let body = body_string(response).await;
        assert!(body.contains("Post Not Found"));
        assert!(body.contains("Gone."));
    }

    #[actix_rt::test]
    async fn validation_error_renders_detail_or_generic_page() {
        let err = AppError::Validation(vec![FieldError::new(
            "missing",
            &["body", "title"],
            "Field required",
            json!({}),
        )]);

        let api = err.render(ErrorFormat::Json);
        assert_eq!(api.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let body: Value = serde_json::from_str(&body_string(api).await).unwrap();
        assert_eq!(body["detail"][0]["type"], "missing");
        assert_eq!(body["detail"][0]["loc"], json!(["body", "title"]));
        assert!(body["detail"][0].get("ctx").is_none());

        let page = err.render(ErrorFormat::Html);
        assert_eq!(page.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let body = body_string(page).await;
        assert!(body.contains("Validation Error"));
        assert!(body.contains(VALIDATION_PAGE_MESSAGE));
    }
}
