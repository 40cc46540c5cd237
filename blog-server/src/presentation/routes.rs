use crate::application::BlogService;
use crate::presentation::middleware::error_handlers;
use crate::presentation::{api_handlers, page_handlers, validation};
use actix_cors::Cors;
use actix_files::Files;
use actix_web::body::MessageBody;
use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::http::header;
use actix_web::{web, App, Error};
use std::path::PathBuf;
use std::sync::Arc;

/// Both surfaces plus optional static files, behind the error-rendering middleware.
pub fn build_app(
    blog_service: Arc<BlogService>,
    static_dir: Option<PathBuf>,
    cors_allowed_origins: &[String],
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(web::Data::new(blog_service))
        .app_data(
            web::JsonConfig::default()
                .content_type_required(false)
                .error_handler(validation::json_error_handler),
        )
        .app_data(web::PathConfig::default().error_handler(validation::path_error_handler))
        // HTML surface
        .service(web::resource("/").route(web::get().to(page_handlers::home)))
        .service(web::resource("/posts/{id}").route(web::get().to(page_handlers::post_detail)))
        // JSON API
        .service(
            web::scope("/api")
                .service(
                    web::resource("/posts")
                        .route(web::get().to(api_handlers::list_posts))
                        .route(web::post().to(api_handlers::create_post)),
                )
                .service(web::resource("/posts/{id}").route(web::get().to(api_handlers::get_post))),
        )
        .configure(move |cfg| {
            if let Some(dir) = static_dir {
                cfg.service(Files::new("/static", dir));
            }
        })
        // CORS rejections go through the error middleware too
        .wrap(configure_cors(cors_allowed_origins))
        .wrap(error_handlers())
}

/// Configure CORS with allowed origins from .env
fn configure_cors(allowed_origins: &[String]) -> Cors {
    let mut cors = Cors::default()
        .allowed_methods(vec!["GET", "POST", "OPTIONS"])
        .allowed_headers(vec![header::ACCEPT, header::CONTENT_TYPE])
        .max_age(3600);

    for origin in allowed_origins {
        cors = cors.allowed_origin(origin);
        tracing::debug!("Added allowed CORS origin: {}", origin);
    }

    cors
}
