//! Route configuration for progress endpoints.

use axum::routing::{get, put};
use axum::Router;

use super::super::AppState;
use super::handlers::{get_progress, set_item_status, start_progress};

/// Creates the progress router.
///
/// Routes:
/// - `POST /api/enrollments/:id/progress` - Start progress from a program
/// - `GET /api/enrollments/:id/progress` - Read progress and summary
/// - `PUT /api/enrollments/:id/progress/items/:item_id` - Set an item's status
pub fn progress_router() -> Router<AppState> {
    Router::new()
        .route(
            "/api/enrollments/:id/progress",
            get(get_progress).post(start_progress),
        )
        .route(
            "/api/enrollments/:id/progress/items/:item_id",
            put(set_item_status),
        )
}
