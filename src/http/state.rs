//! Application state for the HTTP server.

use std::sync::Arc;

use crate::source::fetch::DocumentFetcher;

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Fetcher used to retrieve source workbooks
    pub fetcher: Arc<dyn DocumentFetcher>,
}

impl AppState {
    /// Create a new application state with the given fetcher.
    pub fn new(fetcher: Arc<dyn DocumentFetcher>) -> Self {
        Self { fetcher }
    }
}
