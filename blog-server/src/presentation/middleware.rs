use crate::presentation::error::{AppError, ErrorFormat};
use actix_web::body::MessageBody;
use actix_web::dev::ServiceResponse;
use actix_web::middleware::{ErrorHandlerResponse, ErrorHandlers};

/// Middleware that renders every 4xx/5xx response for the surface it came from.
pub fn error_handlers<B: MessageBody + 'static>() -> ErrorHandlers<B> {
    ErrorHandlers::new().default_handler(render_error)
}

fn render_error<B>(res: ServiceResponse<B>) -> actix_web::Result<ErrorHandlerResponse<B>> {
    let format = ErrorFormat::for_path(res.request().path());
    let error = res
        .response()
        .error()
        .and_then(|err| err.as_error::<AppError>())
        .cloned()
        .unwrap_or_else(|| AppError::from_status(res.status()));

    if res.status().is_server_error() {
        tracing::error!("{} {} failed: {}", res.request().method(), res.request().path(), error);
    } else {
        tracing::debug!(
            "{} {} -> {}: {}",
            res.request().method(),
            res.request().path(),
            res.status(),
            error
        );
    }

    let (req, _) = res.into_parts();
    let response = ServiceResponse::new(req, error.render(format)).map_into_right_body();

    Ok(ErrorHandlerResponse::Response(response))
}

#[cfg(test)]
mod tests {
    use crate::application::BlogService;
    use crate::data::post_repository::InMemoryPostRepository;
    use crate::presentation::routes::build_app;
    use actix_web::http::StatusCode;
    use actix_web::test;
    use serde_json::{json, Value};
    use std::sync::Arc;

    fn service() -> Arc<BlogService> {
        Arc::new(BlogService::new(Arc::new(InMemoryPostRepository::seeded())))
    }

    #[actix_rt::test]
    async fn unknown_api_route_is_json_not_found() {
        let app = test::init_service(build_app(service(), None, &[])).await;

        let req = test::TestRequest::get().uri("/api/nothing-here").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, json!({ "message": "Not Found" }));
    }

    #[actix_rt::test]
    async fn unknown_page_is_html_not_found() {
        let app = test::init_service(build_app(service(), None, &[])).await;

        let req = test::TestRequest::get().uri("/nothing-here").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let content_type = resp.headers().get("content-type").unwrap().to_str().unwrap();
        assert!(content_type.starts_with("text/html"));
        let body = String::from_utf8(test::read_body(resp).await.to_vec()).unwrap();
        assert!(body.contains("404 Error"));
        assert!(body.contains("Not Found"));
    }

    #[actix_rt::test]
    async fn wrong_method_on_api_is_json() {
        let app = test::init_service(build_app(service(), None, &[])).await;

        let req = test::TestRequest::delete().uri("/api/posts/1").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, json!({ "message": "Method Not Allowed" }));
    }
}
