//! HTTP routes.

mod downloads;
mod health;

use crate::AppState;
use axum::Router;
use std::sync::Arc;

/// Build the router with all routes mounted at the root.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .merge(downloads::router(state.clone()))
        .merge(health::router(state))
}
