//! Stream an artifact from disk as a `Content-Disposition: attachment` response.

use std::io;

use axum::{
    body::Body,
    http::{header, StatusCode},
    response::Response,
};
use tokio::fs::File;
use tokio_util::io::ReaderStream;

use crate::catalog::Artifact;

/// Open the artifact and build a streaming response for it.
///
/// The open itself is the existence check, so a file removed after this
/// returns is still served from the held handle. `io::ErrorKind::NotFound`
/// is passed through for the caller to turn into a 404.
pub async fn open(artifact: &Artifact) -> io::Result<Response> {
    let file = File::open(&artifact.path).await?;
    let meta = file.metadata().await?;
    if !meta.is_file() {
        return Err(io::Error::other(format!(
            "{} is not a regular file",
            artifact.path.display()
        )));
    }

    tracing::debug!(
        path = %artifact.path.display(),
        bytes = meta.len(),
        "Streaming artifact"
    );

    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, artifact.content_type)
        .header(
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}\"", artifact.download_name),
        )
        .header(header::CONTENT_LENGTH, meta.len())
        .body(Body::from_stream(ReaderStream::new(file)))
        .map_err(io::Error::other)
}
