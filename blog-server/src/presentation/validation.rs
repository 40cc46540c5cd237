use crate::domain::post::CreatePostRequest;
use crate::presentation::error::{AppError, FieldError};
use actix_web::error::{JsonPayloadError, PathError};
use actix_web::http::StatusCode;
use actix_web::{Error, HttpRequest};
use serde_json::{json, Map, Value};

/// Checks a raw `POST /api/posts` body, reporting every bad field at once.
pub fn validate_create_post(body: &Value) -> Result<CreatePostRequest, AppError> {
    let Some(fields) = body.as_object() else {
        return Err(AppError::Validation(vec![FieldError::new(
            "model_attributes_type",
            &["body"],
            "Input should be a valid dictionary or object to extract fields from",
            body.clone(),
        )]));
    };

    let mut errors = Vec::new();
    let req = CreatePostRequest {
        title: required_text(fields, "title", &mut errors),
        content: required_text(fields, "content", &mut errors),
        author: required_text(fields, "author", &mut errors),
    };

    if errors.is_empty() {
        Ok(req)
    } else {
        Err(AppError::Validation(errors))
    }
}

fn required_text(fields: &Map<String, Value>, name: &str, errors: &mut Vec<FieldError>) -> String {
    let loc = ["body", name];

    match fields.get(name) {
        None => errors.push(FieldError::new(
            "missing",
            &loc,
            "Field required",
            Value::Object(fields.clone()),
        )),
        Some(Value::String(text)) if text.is_empty() => errors.push(
            FieldError::new(
                "string_too_short",
                &loc,
                "String should have at least 1 character",
                Value::String(text.clone()),
            )
            .with_ctx(json!({ "min_length": 1 })),
        ),
        Some(Value::String(text)) => return text.clone(),
        Some(other) => errors.push(FieldError::new(
            "string_type",
            &loc,
            "Input should be a valid string",
            other.clone(),
        )),
    }

    String::new()
}

pub fn json_error_handler(err: JsonPayloadError, req: &HttpRequest) -> Error {
    tracing::debug!("Rejected body on {}: {}", req.path(), err);

    if let JsonPayloadError::Overflow { .. } | JsonPayloadError::OverflowKnownLength { .. } = err {
        return AppError::from_status(StatusCode::PAYLOAD_TOO_LARGE).into();
    }

    AppError::Validation(vec![FieldError::new(
        "json_invalid",
        &["body"],
        "JSON decode error",
        Value::Null,
    )
    .with_ctx(json!({ "error": err.to_string() }))])
    .into()
}

pub fn path_error_handler(err: PathError, req: &HttpRequest) -> Error {
    tracing::debug!("Rejected path {}: {}", req.path(), err);

    let (name, raw) = req.match_info().iter().next().unwrap_or(("id", ""));

    AppError::Validation(vec![FieldError::new(
        "int_parsing",
        &["path", name],
        "Input should be a valid integer, unable to parse string as an integer",
        Value::String(raw.to_string()),
    )])
    .into()
}
