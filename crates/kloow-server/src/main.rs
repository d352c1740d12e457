//! # Kloow download server binary
//!
//! Loads configuration, builds the artifact catalog and serves it over HTTP.

use std::sync::Arc;

use kloow_server::catalog::ArtifactCatalog;
use kloow_server::AppState;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env
    dotenvy::dotenv().ok();

    let config = kloow_common::AppConfig::load()?;

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level)),
        )
        .json()
        .init();

    tracing::info!("Starting Kloow download server...");

    // The table is fixed from here on
    let catalog = ArtifactCatalog::new(&config.artifacts.root);
    tracing::info!(root = %catalog.root().display(), "Artifact catalog ready");

    let state = Arc::new(AppState::new(catalog));
    let app = kloow_server::app(state);

    let listener =
        tokio::net::TcpListener::bind((config.server.host.as_str(), config.server.port)).await?;
    tracing::info!("Listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to install CTRL+C handler: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
