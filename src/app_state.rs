//! Shared application state injected into all Axum handlers.

use std::sync::Arc;

use crate::persistence::ChoreStorage;

/// Shared application state available to all handlers via Axum's
/// `State` extractor.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Storage handle, opened once at startup.
    pub storage: Arc<dyn ChoreStorage>,
}

impl AppState {
    /// Wraps a storage backend.
    #[must_use]
    pub fn new(storage: Arc<dyn ChoreStorage>) -> Self {
        Self { storage }
    }
}
