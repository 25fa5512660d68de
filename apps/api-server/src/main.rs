//! # Board API Server
//!
//! The main entry point for the Actix-web HTTP server.

use actix_web::{App, HttpServer, web};
use tracing_actix_web::TracingLogger;

mod config;
mod handlers;
mod middleware;
mod observability;
mod services;
mod state;
mod telemetry;

use config::AppConfig;
use observability::RequestIdMiddleware;
use state::AppState;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    // Load configuration
    let config = AppConfig::from_env();

    telemetry::init_telemetry(&config.telemetry);

    tracing::info!(
        "Starting Board API Server on {}:{}",
        config.host,
        config.port
    );

    // Build application state
    let state = AppState::new(&config).await.map_err(|e| {
        tracing::error!("{}", e);
        std::io::Error::other(e)
    })?;

    // Start HTTP server
    HttpServer::new(move || {
        App::new()
            .wrap(RequestIdMiddleware)
            .wrap(TracingLogger::default())
            .app_data(web::Data::new(state.clone()))
            .configure(handlers::configure_routes)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
