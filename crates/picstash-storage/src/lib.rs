//! Picstash Storage Library
//!
//! Storage abstraction and the local-filesystem backend. Stored names
//! are flat (no subdirectories); names must not contain `..`, `/`, or
//! `\` so a request can never address a path outside the upload
//! directory.

pub mod local;
pub mod traits;

pub use local::LocalStorage;
pub use traits::{Storage, StorageError, StorageResult};
