//! Multipart image upload handler.

use std::sync::Arc;

use axum::{
    extract::{
        multipart::MultipartRejection,
        Multipart, State,
    },
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use picstash_core::{filename, AppError, FileFilter, Verdict};
use picstash_storage::StorageError;
use serde::Serialize;

use crate::error::{HttpAppError, MessageResponse};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub message: String,
    #[serde(rename = "fileUrls")]
    pub file_urls: Vec<String>,
}

/// Handle `POST /upload-image`.
///
/// Walks the multipart stream part by part: each file part must use the
/// configured field name and an allow-listed content type. Accepted
/// files are written to storage under a generated name before the
/// response is built; one rejected part fails the whole request, and
/// files already written stay on disk.
#[tracing::instrument(skip(state, multipart), fields(operation = "upload_images"))]
pub async fn upload_images(
    State(state): State<Arc<AppState>>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Response, HttpAppError> {
    // A request that is not valid multipart is still answered with the
    // JSON message shape, not the extractor's default body.
    let mut multipart = multipart.map_err(|e| AppError::Upload(e.body_text()))?;

    let filter = FileFilter::new(
        state.config.upload_field.clone(),
        state.config.allowed_mime_types.clone(),
        state.config.max_files,
    );

    let mut file_urls: Vec<String> = Vec::new();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Upload(e.body_text()))?
    {
        // Non-file form values pass through untouched.
        if field.file_name().is_none() {
            continue;
        }

        let field_name = field.name().unwrap_or_default().to_string();
        let original = field.file_name().unwrap_or("upload").to_string();
        let content_type = field.content_type().unwrap_or_default().to_string();

        match filter.check(&field_name, &content_type, file_urls.len()) {
            Verdict::Accepted => {}
            Verdict::Rejected(reason) => {
                tracing::debug!(
                    field = %field_name,
                    content_type = %content_type,
                    reason = ?reason,
                    "Rejected file part"
                );
                return Err(AppError::UnexpectedFile.into());
            }
        }

        let data = field
            .bytes()
            .await
            .map_err(|e| AppError::Upload(e.body_text()))?;

        let stored_name = filename::generate(&original);
        state
            .storage
            .save(&stored_name, data.to_vec())
            .await
            .map_err(|e| match e {
                // A hostile original filename (path separators, "..")
                // is a client fault, not a server one.
                err @ StorageError::InvalidName(_) => AppError::Upload(err.to_string()),
                other => AppError::Internal(other.to_string()),
            })?;

        file_urls.push(state.config.file_url(&stored_name));
    }

    if file_urls.is_empty() {
        return Ok((
            StatusCode::BAD_REQUEST,
            Json(MessageResponse::new(
                "No files uploaded or invalid file types.",
            )),
        )
            .into_response());
    }

    // Intake already caps at max_files, so this cannot fire; kept to
    // mirror the original service's check.
    if file_urls.len() > state.config.max_files {
        return Ok((
            StatusCode::PAYLOAD_TOO_LARGE,
            Json(MessageResponse::new("Cannot upload more than 5 images.")),
        )
            .into_response());
    }

    tracing::info!(count = file_urls.len(), "Upload successful");

    Ok((
        StatusCode::OK,
        Json(UploadResponse {
            message: "Upload successful".to_string(),
            file_urls,
        }),
    )
        .into_response())
}
