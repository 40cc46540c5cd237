use crate::application::BlogService;
use crate::domain::DomainError;
use crate::presentation::error::AppError;
use crate::presentation::views;
use actix_web::http::header::ContentType;
use actix_web::{web, HttpResponse};
use std::sync::Arc;

const POST_NOT_FOUND_MESSAGE: &str = "The post you are looking for does not exist.";

pub async fn home(blog_service: web::Data<Arc<BlogService>>) -> HttpResponse {
    let posts = blog_service.list_posts().await;

    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(views::home(&posts).into_string())
}

pub async fn post_detail(
    blog_service: web::Data<Arc<BlogService>>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let post_id = path.into_inner();

    let post = blog_service.get_post(post_id).await.map_err(|err| match err {
        DomainError::PostNotFound(_) => {
            AppError::not_found(POST_NOT_FOUND_MESSAGE).with_title("Post Not Found")
        }
    })?;

    Ok(HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(views::post_detail(&post).into_string()))
}
