use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

/// Convenient Result alias.
pub type AppResult<T> = Result<T, AppError>;

/// Application error type.
///
/// The display string is exactly what the client sees in `{"error": ...}`.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Missing or malformed request input.
    #[error("{0}")]
    BadRequest(String),

    /// The requested artifact is not on disk.
    #[error("{0}")]
    NotFound(String),

    /// Anything that went wrong while opening or reading an artifact.
    #[error("{0}")]
    Internal(#[from] std::io::Error),
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if let Self::Internal(e) = &self {
            tracing::error!(error = %e, "Request failed with internal error");
        }

        let body = json!({ "error": self.to_string() });

        (status, axum::Json(body)).into_response()
    }
}
