use std::sync::Arc;

use portfolio_store::ProjectStoreFile;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`). The store handle
/// holds no cached document -- every request reloads from disk.
#[derive(Clone)]
pub struct AppState {
    /// Handle to the backing JSON data file.
    pub store: Arc<ProjectStoreFile>,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}
