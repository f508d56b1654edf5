use std::sync::Arc;

use pmis_store::MemStore;

use crate::background::import::ImportProcessor;
use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// The in-memory entity store.
    pub store: Arc<MemStore>,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Import processing strategy; injectable so tests can force outcomes.
    pub import_processor: Arc<dyn ImportProcessor>,
}
