//! HTTP API for the match service.

mod handlers;
mod middleware;
mod types;

pub use handlers::*;
pub use middleware::logging_middleware;
pub use types::*;

use crate::steam::SteamClient;
use axum::{middleware as axum_middleware, routing::get, Router};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Steam Web API client
    pub steam: Arc<SteamClient>,
}

impl AppState {
    pub fn new(steam: SteamClient) -> Self {
        Self {
            steam: Arc::new(steam),
        }
    }
}

/// Create the API router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route("/match/latest", get(handlers::latest_match))
        .route("/heroes", get(handlers::heroes))
        .layer(axum_middleware::from_fn(logging_middleware))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
