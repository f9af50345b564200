//! # Blog API Server
//!
//! Actix-web application exposing the blog store over HTTP.

pub mod config;
pub mod handlers;
pub mod middleware;
pub mod observability;
pub mod state;
pub mod telemetry;

use std::net::TcpListener;

use actix_web::dev::Server;
use actix_web::{App, HttpServer, web};
use tracing_actix_web::TracingLogger;

use observability::RequestIdMiddleware;
use state::AppState;

/// Build the HTTP server on an already-bound listener.
///
/// The returned `Server` must be awaited (or spawned) to start serving.
pub fn run(listener: TcpListener, state: AppState) -> std::io::Result<Server> {
    let server = HttpServer::new(move || {
        App::new()
            .wrap(RequestIdMiddleware)
            .wrap(TracingLogger::default())
            .app_data(web::Data::new(state.clone()))
            .configure(handlers::configure_routes)
    })
    .listen(listener)?
    .run();

    Ok(server)
}
