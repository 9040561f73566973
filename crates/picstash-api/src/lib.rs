//! Picstash API Library
//!
//! This crate provides the HTTP handlers, error mapping, and application
//! setup for the image-upload service.

mod handlers;

pub mod error;
pub mod setup;
pub mod state;
pub mod telemetry;

pub use error::MessageResponse;
pub use state::AppState;
