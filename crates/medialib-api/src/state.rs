//! Application state shared by all handlers.

use medialib_db::StorageConnector;

#[derive(Clone)]
pub struct AppState {
    /// Handle to the media collection; may not be ready yet.
    pub store: StorageConnector,
}

impl AppState {
    pub fn new(store: StorageConnector) -> Self {
        Self { store }
    }
}
