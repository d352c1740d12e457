//! Artifact download endpoints.
//!
//! Endpoints:
//!   GET /download, /download_linux, /download_mac   browser bundle, fixed name
//!   GET /download-sfss?os={platform}                 SEO Spider jar
//!   GET /download-sfla?os={platform}                 Log File Analyser jar
//!
//! No authentication. Every failure is returned as `{"error": "..."}`.

use std::io;
use std::sync::Arc;

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    response::Response,
    routing::get,
    Router,
};

use crate::attachment;
use crate::catalog::{BrowserBuild, Product};
use crate::AppState;
use kloow_common::{AppError, AppResult};

pub fn router(state: Arc<AppState>) -> Router {
    let mut router = Router::new();

    for build in BrowserBuild::ALL {
        router = router.route(
            build.route(),
            get(move |State(state): State<Arc<AppState>>| async move {
                download_browser(&state, build).await
            }),
        );
    }

    for product in Product::ALL {
        router = router.route(
            product.route(),
            get(
                move |State(state): State<Arc<AppState>>,
                      query: Result<Query<Vec<(String, String)>>, QueryRejection>| async move {
                    download_product(&state, product, query).await
                },
            ),
        );
    }

    router.with_state(state)
}

async fn download_browser(state: &AppState, build: BrowserBuild) -> AppResult<Response> {
    let artifact = state
        .catalog
        .browser(build)
        .ok_or_else(|| AppError::NotFound("File not found".into()))?;

    attachment::open(artifact).await.map_err(|e| {
        not_found_or_internal(e, &artifact.path, || "File not found".to_string())
    })
}

async fn download_product(
    state: &AppState,
    product: Product,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> AppResult<Response> {
    let Query(pairs) = query.map_err(|e| AppError::BadRequest(e.body_text()))?;

    // An empty `os=` counts as missing.
    let os = first_os(pairs)
        .filter(|os| !os.is_empty())
        .ok_or_else(|| AppError::BadRequest("Missing 'os' query parameter".into()))?;

    let artifact = state
        .catalog
        .product(product, &os)
        .ok_or_else(|| AppError::BadRequest(format!("Invalid OS type '{}'", os)))?;

    attachment::open(artifact).await.map_err(|e| {
        not_found_or_internal(e, &artifact.path, || format!("File not found for '{}'", os))
    })
}

/// First `os` value in the query string; later repeats are ignored.
fn first_os(pairs: Vec<(String, String)>) -> Option<String> {
    pairs
        .into_iter()
        .find(|(key, _)| key == "os")
        .map(|(_, value)| value)
}

fn not_found_or_internal(
    err: io::Error,
    path: &std::path::Path,
    message: impl FnOnce() -> String,
) -> AppError {
    if err.kind() == io::ErrorKind::NotFound {
        tracing::warn!("Artifact not found: {}", path.display());
        AppError::NotFound(message())
    } else {
        AppError::Internal(err)
    }
}
