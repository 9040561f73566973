//! HTTP error response conversion
//!
//! This module converts `AppError` into HTTP responses. Every error path
//! yields a JSON body with a single `message` field, matching the wire
//! contract of the original service.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use picstash_core::AppError;
use serde::Serialize;

/// JSON body shared by error responses and the no-files rejection.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Wrapper type for AppError to implement IntoResponse
/// This is necessary because of Rust's orphan rules - we can't implement
/// IntoResponse (external trait) for AppError (external type from picstash-core)
#[derive(Debug)]
pub struct HttpAppError(pub AppError);

impl From<AppError> for HttpAppError {
    fn from(err: AppError) -> Self {
        HttpAppError(err)
    }
}

impl IntoResponse for HttpAppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            AppError::UnexpectedFile => (StatusCode::BAD_REQUEST, self.0.to_string()),
            AppError::Upload(msg) => (StatusCode::BAD_REQUEST, format!("Upload error: {}", msg)),
            AppError::NotFound(_) => (StatusCode::NOT_FOUND, self.0.to_string()),
            AppError::Internal(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Server error: {}", msg),
            ),
        };

        // Client mistakes are expected; only 5xx is operator-worthy.
        if status.is_server_error() {
            tracing::error!(error = %self.0, status = %status, "Request failed");
        } else {
            tracing::debug!(error = %self.0, status = %status, "Request rejected");
        }

        (status, Json(MessageResponse::new(message))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unexpected_file_maps_to_400() {
        let response = HttpAppError(AppError::UnexpectedFile).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_upload_error_maps_to_400() {
        let response =
            HttpAppError(AppError::Upload("stream ended early".to_string())).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_not_found_maps_to_404() {
        let response = HttpAppError(AppError::NotFound("x.png".to_string())).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_internal_maps_to_500() {
        let response = HttpAppError(AppError::Internal("disk full".to_string())).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
