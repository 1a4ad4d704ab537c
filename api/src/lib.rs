// ============================================================================
// IN-MEMORY POSTS & COMMENTS SERVICE
// ============================================================================

// - GET  /posts                 - all posts with their comments
// - GET  /posts/{id}/comments   - comments of one post
// - POST /posts/{id}/comments   - append a comment to one post
// Anything else answers 404 "no such endpoint".

pub mod codec;
pub mod config;
pub mod dto;
pub mod errors;
pub mod models;
pub mod routes;
pub mod state;
pub mod store;

pub use config::Config;
pub use errors::ApiError;
pub use state::AppState;
pub use store::PostStore;

use axum::Router;
use tower::limit::ConcurrencyLimitLayer;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

/// Builds the application router.
///
/// No routes are registered: the dispatcher is the fallback and performs its
/// own path resolution, so unmatched paths get the dispatcher's 404 message.
pub fn create_router(state: AppState, config: &Config) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .fallback(routes::dispatch)
        .with_state(state)
        .layer(ConcurrencyLimitLayer::new(config.max_concurrent_requests))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
