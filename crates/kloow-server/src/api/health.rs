//! Health check endpoint.
//!
//! Reports whether the artifact directory can be listed. An unreadable root
//! means every download would fail, so it answers 503.

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde::Serialize;

use crate::AppState;

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .with_state(state)
}

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
    service: &'static str,
    version: &'static str,
    artifact_root: String,
    artifact_root_readable: bool,
}

async fn health_check(State(state): State<Arc<AppState>>) -> (StatusCode, Json<HealthResponse>) {
    let root = state.catalog.root();
    let readable = match tokio::fs::read_dir(root).await {
        Ok(_) => true,
        Err(e) => {
            tracing::warn!("Artifact root {} unreadable: {}", root.display(), e);
            false
        }
    };

    let (code, status) = if readable {
        (StatusCode::OK, "healthy")
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, "degraded")
    };

    (
        code,
        Json(HealthResponse {
            status,
            service: "kloow-server",
            version: env!("CARGO_PKG_VERSION"),
            artifact_root: root.display().to_string(),
            artifact_root_readable: readable,
        }),
    )
}
