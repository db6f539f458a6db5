//! Application state for the API servers.

use std::sync::Arc;

/// Shared application state.
///
/// Generic over the storage handle `D`: a SQLite database for the library and
/// task manager services, the in-memory `ItemStore` for the item service.
/// Tests inject in-memory implementations through the same constructor.
pub struct AppState<D> {
    db: Arc<D>,
}

// Manual Clone impl - we only need Arc to be cloneable, not D
impl<D> Clone for AppState<D> {
    fn clone(&self) -> Self {
        Self {
            db: Arc::clone(&self.db),
        }
    }
}

impl<D> AppState<D> {
    pub fn new(db: D) -> Self {
        Self { db: Arc::new(db) }
    }

    /// Get a reference to the storage handle.
    pub fn db(&self) -> &D {
        &self.db
    }
}
