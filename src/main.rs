//! chore-tracker server entry point.
//!
//! Opens the database, applies migrations and serves the REST API.

use std::sync::Arc;

use anyhow::Context;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use chore_tracker::api;
use chore_tracker::app_state::AppState;
use chore_tracker::config::ChoreConfig;
use chore_tracker::persistence::SqliteChoreStorage;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing; LOG_FORMAT=json switches to structured output
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if std::env::var("LOG_FORMAT").is_ok_and(|format| format.eq_ignore_ascii_case("json")) {
        tracing_subscriber::fmt().json().with_env_filter(filter).init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }

    // Load configuration
    let config = ChoreConfig::from_env()?;
    tracing::info!(addr = %config.listen_addr, "starting chore-tracker");

    // Open storage
    let storage = SqliteChoreStorage::connect(
        &config.database_url,
        config.database_max_connections,
        config.connect_timeout(),
    )
    .await
    .with_context(|| format!("opening database {}", config.database_url))?;
    storage.migrate().await.context("applying migrations")?;

    let app_state = AppState::new(Arc::new(storage.clone()));

    // Build router
    let app = api::build_router()
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(app_state);

    // Start server
    let listener = tokio::net::TcpListener::bind(config.listen_addr).await?;
    tracing::info!(addr = %config.listen_addr, "server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    storage.close().await;
    tracing::info!("server stopped");
    Ok(())
}

/// Resolves when Ctrl-C is received.
async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %err, "cannot listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
