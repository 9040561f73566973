//! Error types module
//!
//! The original middleware signalled rejections with a stringly-typed
//! error code; here the taxonomy is a closed set of tagged variants.
//! HTTP conversion lives in the api crate.

use std::io;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A file part was rejected at intake: wrong field name, disallowed
    /// content type, or arriving past the per-request file cap.
    #[error("Unexpected field or invalid file type.")]
    UnexpectedFile,

    /// Any other error raised by the file-receiving layer (malformed
    /// multipart, transport faults).
    #[error("{0}")]
    Upload(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("{0}")]
    Internal(String),
}

impl From<io::Error> for AppError {
    fn from(err: io::Error) -> Self {
        AppError::Internal(format!("IO error: {}", err))
    }
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::Internal(err.to_string())
    }
}
