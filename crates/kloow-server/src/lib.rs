//! # Kloow download server
//!
//! Serves the browser bundles and Screaming Frog jars from local disk
//! as attachments.

pub mod api;
pub mod attachment;
pub mod catalog;

use std::sync::Arc;

use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::catalog::ArtifactCatalog;

/// Shared application state available to all handlers.
pub struct AppState {
    pub catalog: ArtifactCatalog,
}

impl AppState {
    pub fn new(catalog: ArtifactCatalog) -> Self {
        Self { catalog }
    }
}

/// Full application with middleware applied.
pub fn app(state: Arc<AppState>) -> Router {
    api::router(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
