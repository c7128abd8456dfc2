//! Server state management.

use std::sync::Arc;

use doctools_core::DocumentPipeline;

use crate::config::ServerConfig;

/// Shared application state.
///
/// Read-only after startup; cloning only bumps a reference count.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ServerConfig>,
    pub pipeline: DocumentPipeline,
}

impl AppState {
    /// Create a new application state.
    pub fn new(config: ServerConfig) -> Self {
        Self {
            config: Arc::new(config),
            pipeline: DocumentPipeline::new(),
        }
    }

    /// Upload limit in megabytes.
    pub fn max_file_mb(&self) -> f64 {
        self.config.max_file_mb
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(ServerConfig::default())
    }
}
