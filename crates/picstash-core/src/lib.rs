//! Picstash Core Library
//!
//! Domain types shared across the picstash crates: configuration, the
//! error taxonomy, filename generation, and file-intake validation.
//! This crate performs no I/O beyond reading environment variables.

pub mod config;
pub mod error;
pub mod filename;
pub mod validation;

pub use config::Config;
pub use error::AppError;
pub use validation::{FileFilter, RejectReason, Verdict};
