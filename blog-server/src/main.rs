use std::sync::Arc;

mod application;
mod data;
mod domain;
mod infrastructure;
mod presentation;

use application::BlogService;
use data::post_repository::InMemoryPostRepository;
use infrastructure::{config::AppConfig, logging::init_logging};
use presentation::routes::build_app;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    init_logging();

    // Get configuration from environment
    let config = AppConfig::from_env()?;

    tracing::info!("Starting blog server...");
    tracing::info!("HTTP server will listen on {}", config.http_addr());
    tracing::info!("Serving static files from {:?}", config.static_dir);
    tracing::info!("CORS allowed origins: {:?}", config.cors_allowed_origins);

    // Repositories
    let post_repo = if config.seed_posts {
        tracing::info!("Seeding demo posts");
        Arc::new(InMemoryPostRepository::seeded())
    } else {
        Arc::new(InMemoryPostRepository::new())
    };

    // Application services
    let blog_service = Arc::new(BlogService::new(post_repo));

    run_http_server(config, blog_service).await?;

    tracing::info!("Shutting down...");
    Ok(())
}

async fn run_http_server(config: AppConfig, blog_service: Arc<BlogService>) -> anyhow::Result<()> {
    use actix_web::{middleware::Logger, HttpServer};

    tracing::info!("Configuring HTTP server...");

    let addr = config.http_addr();
    let static_dir = config.static_dir.clone();
    let origins = config.cors_allowed_origins.clone();

    let server = HttpServer::new(move || {
        build_app(blog_service.clone(), Some(static_dir.clone()), &origins)
            .wrap(Logger::default())
    })
    .bind(&addr)?
    .run();

    tracing::info!("HTTP server running on {}", addr);

    server.await?;

    Ok(())
}
