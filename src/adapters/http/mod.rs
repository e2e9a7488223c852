//! HTTP adapters - REST API implementations.
//!
//! Each domain module has its own HTTP adapter for endpoint exposure;
//! [`api_router`] merges them and adds tracing, CORS and timeout layers.

pub mod curriculum;
pub mod progress;

mod error;
mod state;

use std::time::Duration;

use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

pub use curriculum::curriculum_router;
pub use error::{ApiError, ErrorResponse};
pub use progress::progress_router;
pub use state::AppState;

/// Builds the complete API router with shared middleware.
pub fn api_router(state: AppState, request_timeout: Duration) -> Router {
    Router::new()
        .merge(curriculum_router())
        .merge(progress_router())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .layer(TimeoutLayer::new(request_timeout))
        .with_state(state)
}
