//! Static file route: serves a stored file by exact filename.

use std::sync::Arc;

use axum::{
    body::Body,
    extract::{Path, State},
    http::{header, StatusCode},
    response::Response,
};
use futures::StreamExt;
use picstash_core::AppError;
use picstash_storage::StorageError;

use crate::error::HttpAppError;
use crate::state::AppState;

/// Handle `GET /image/{filename}`.
///
/// Streams the file from the upload directory. Unknown names and names
/// that could traverse out of the directory both surface as 404; there
/// is no directory listing.
#[tracing::instrument(skip(state), fields(operation = "get_image"))]
pub async fn get_image(
    Path(filename): Path<String>,
    State(state): State<Arc<AppState>>,
) -> Result<Response, HttpAppError> {
    let stream = state
        .storage
        .read_stream(&filename)
        .await
        .map_err(|e| match e {
            StorageError::NotFound(_) | StorageError::InvalidName(_) => {
                AppError::NotFound(filename.clone())
            }
            other => AppError::Internal(other.to_string()),
        })?;

    let body_stream = stream.map(|result| {
        result.map_err(|e| std::io::Error::other(format!("Storage stream error: {}", e)))
    });

    let response = Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, content_type_for(&filename))
        .body(Body::from_stream(body_stream))
        .map_err(|e| AppError::Internal(e.to_string()))?;

    Ok(response)
}

/// Content type from the stored filename's extension. Stored names keep
/// the original extension, so this covers everything the intake
/// allow-list admits.
fn content_type_for(filename: &str) -> &'static str {
    let extension = std::path::Path::new(filename)
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase());

    match extension.as_deref() {
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("png") => "image/png",
        Some("webp") => "image/webp",
        Some("gif") => "image/gif",
        _ => "application/octet-stream",
    }
}
