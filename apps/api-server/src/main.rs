//! # Blog API Server
//!
//! The main entry point for the Actix-web HTTP server.

use std::net::TcpListener;

use anyhow::Context;

use api_server::config::AppConfig;
use api_server::state::AppState;
use api_server::telemetry::{TelemetryConfig, init_telemetry};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    init_telemetry(&TelemetryConfig::from_env());

    let config = AppConfig::from_env();

    tracing::info!("Starting Blog API Server on {}:{}", config.host, config.port);

    let state = AppState::new(config.database.as_ref()).await?;

    let listener = TcpListener::bind((config.host.as_str(), config.port))
        .with_context(|| format!("Failed to bind {}:{}", config.host, config.port))?;

    api_server::run(listener, state)?.await?;

    Ok(())
}
