use crate::application::BlogService;
use crate::presentation::error::AppError;
use crate::presentation::validation::validate_create_post;
use actix_web::{web, HttpResponse};
use serde_json::Value;
use std::sync::Arc;

pub async fn list_posts(blog_service: web::Data<Arc<BlogService>>) -> HttpResponse {
    let posts = blog_service.list_posts().await;

    tracing::info!("Listing {} posts", posts.len());

    HttpResponse::Ok().json(posts)
}

pub async fn get_post(
    blog_service: web::Data<Arc<BlogService>>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let post_id = path.into_inner();

    tracing::info!("Getting post with id={}", post_id);

    let post = blog_service.get_post(post_id).await?;
    Ok(HttpResponse::Ok().json(post))
}

pub async fn create_post(
    blog_service: web::Data<Arc<BlogService>>,
    body: web::Json<Value>,
) -> Result<HttpResponse, AppError> {
    let req = validate_create_post(&body)?;

    tracing::info!("Creating post for author={}", req.author);

    let post = blog_service.create_post(req).await;
    Ok(HttpResponse::Created().json(post))
}
