//! Application setup: storage, routes, server startup.

pub mod routes;
pub mod server;

use crate::state::AppState;
use anyhow::Context;
use axum::Router;
use picstash_core::Config;
use picstash_storage::LocalStorage;
use std::sync::Arc;

/// Initialize the application: create the upload directory and build the
/// router with its shared state.
pub async fn initialize_app(config: Config) -> Result<(Arc<AppState>, Router), anyhow::Error> {
    let storage = LocalStorage::new(&config.upload_dir)
        .await
        .context("Failed to initialize local storage")?;

    let state = Arc::new(AppState {
        config,
        storage: Arc::new(storage),
    });

    let router = routes::setup_routes(state.clone());

    Ok((state, router))
}
