pub mod api_handlers;
pub mod error;
pub mod middleware;
pub mod page_handlers;
pub mod routes;
pub mod validation;
pub mod views;
