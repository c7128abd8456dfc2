//! Route definitions for the REST API.

mod documents;
mod health;
mod upload;

use axum::{
    routing::{get, post},
    Router,
};

use crate::state::AppState;

/// Create the main application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health::health_check))
        // Document operations
        .route("/extract-text", post(documents::extract_text))
        .route("/summary", post(documents::summary))
        .route("/word-count", post(documents::word_count))
        // Attach state
        .with_state(state)
}

pub use documents::*;
pub use health::*;
pub use upload::Upload;
