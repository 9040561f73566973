//! Storage abstraction trait
//!
//! This module defines the Storage trait the upload and download
//! handlers work against, so neither couples to filesystem details.

use async_trait::async_trait;
use bytes::Bytes;
use futures::Stream;
use std::pin::Pin;
use thiserror::Error;

/// Storage operation errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Write failed: {0}")]
    WriteFailed(String),

    #[error("Read failed: {0}")]
    ReadFailed(String),

    #[error("File not found: {0}")]
    NotFound(String),

    #[error("Invalid filename: {0}")]
    InvalidName(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

/// Storage abstraction trait
///
/// Filenames are flat keys within the backend's root; names containing
/// path separators or `..` are rejected with `InvalidName`.
#[async_trait]
pub trait Storage: Send + Sync {
    /// Write a file under `filename`. An existing file with the same
    /// name is overwritten.
    async fn save(&self, filename: &str, data: Vec<u8>) -> StorageResult<()>;

    /// Read a file as a stream of chunks.
    async fn read_stream(
        &self,
        filename: &str,
    ) -> StorageResult<Pin<Box<dyn Stream<Item = Result<Bytes, StorageError>> + Send>>>;

    /// Check whether a file exists.
    async fn exists(&self, filename: &str) -> StorageResult<bool>;
}
