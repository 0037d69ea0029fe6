//! Router configuration for the HTTP API.
//!
//! Sets up all routes and middleware (CORS, compression, tracing) and
//! creates the axum router ready for serving.

use axum::{routing::get, Router};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers;
use super::state::AppState;

/// Create the main application router with all routes and middleware.
pub fn create_router(state: AppState) -> Router {
    // CORS configuration - permissive for development, should be restricted in production
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_v1 = Router::new()
        .route("/schedules/groups", get(handlers::get_group_schedules))
        .route("/schedules/teachers", get(handlers::get_teacher_schedules));

    Router::new()
        .route("/health", get(handlers::health_check))
        .nest("/v1", api_v1)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use async_trait::async_trait;
    use reqwest::Url;

    use super::*;
    use crate::source::fetch::{DocumentFetcher, FetchError};

    struct NullFetcher;

    #[async_trait]
    impl DocumentFetcher for NullFetcher {
        async fn fetch(&self, _url: &Url) -> Result<Vec<u8>, FetchError> {
            Ok(Vec::new())
        }
    }

    #[test]
    fn test_router_creation() {
        let state = AppState::new(Arc::new(NullFetcher));
        let _router = create_router(state);
        // If we got here, router was created successfully
    }
}
