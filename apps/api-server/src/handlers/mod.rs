//! HTTP handlers and route configuration.

mod blogs;
mod health;

use actix_web::web;

use crate::middleware::error::{json_error_handler, path_error_handler};

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .app_data(web::PathConfig::default().error_handler(path_error_handler))
        .route("/health", web::get().to(health::health_check))
        .service(
            web::scope("/blogs")
                .route("", web::get().to(blogs::list_blogs))
                .route("", web::post().to(blogs::create_blog))
                .route("", web::delete().to(blogs::delete_all_blogs))
                .route("/{id}", web::get().to(blogs::get_blog))
                .route("/{id}", web::patch().to(blogs::update_blog))
                .route("/{id}", web::delete().to(blogs::delete_blog)),
        );
}
