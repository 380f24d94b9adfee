use std::sync::Arc;

use actix_web::{web, App, HttpServer};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod auth;
mod config;
mod db;
mod domain;
mod error;
mod http;
mod metrics;
mod models;
mod validate;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Initialize structured logging with environment-based filtering
    // Default to INFO level, can be overridden with RUST_LOG env var
    // Example: RUST_LOG=debug cargo run
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true).with_thread_ids(true))
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,inventory_api=debug")),
        )
        .init();

    let config = config::Config::from_env();
    tracing::info!(port = config.port, "Starting inventory API");

    // One pool for the whole process; each request borrows from it in scope.
    let pool = db::connect(&config).await?;

    let metrics = Arc::new(metrics::Metrics::new()?);

    let port = config.port;
    let state = web::Data::new(http::AppState {
        pool,
        config,
        metrics,
    });

    tracing::info!("Listening on http://0.0.0.0:{}", port);
    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .app_data(http::json_config())
            .configure(http::configure)
    })
    .bind(("0.0.0.0", port))?
    .run()
    .await?;

    Ok(())
}
