//! Application state shared across handlers.

use picstash_core::Config;
use picstash_storage::Storage;
use std::sync::Arc;

pub struct AppState {
    pub config: Config,
    pub storage: Arc<dyn Storage>,
}
