//! Router assembly

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{limit::RequestBodyLimitLayer, trace::TraceLayer};

use super::error::panic_guard;
use super::handlers;
use super::state::AppState;

/// Build the application router.
///
/// The panic guard is the outermost layer so that a panic anywhere below
/// still produces a JSON 500.
pub fn create_router(state: AppState, max_body_bytes: usize) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route("/api/generate", post(handlers::generate))
        .layer(RequestBodyLimitLayer::new(max_body_bytes))
        .layer(TraceLayer::new_for_http())
        .layer(panic_guard())
        .with_state(state)
}
