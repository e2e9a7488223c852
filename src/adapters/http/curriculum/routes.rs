//! Route configuration for curriculum endpoints.

use axum::routing::{delete, get, patch, post};
use axum::Router;

use super::super::AppState;
use super::handlers::{
    add_item, attach_content, delete_item, export_curriculum, get_curriculum, get_template,
    import_curriculum, remove_content, update_item,
};

/// Creates the curriculum router with all endpoints.
///
/// Routes:
/// - `GET /api/programs/:id/curriculum` - Program with nested tree
/// - `POST /api/programs/:id/curriculum/items` - Add an item
/// - `PATCH /api/programs/:id/curriculum/items/:item_id` - Update an item
/// - `DELETE /api/programs/:id/curriculum/items/:item_id` - Delete an item and its subtree
/// - `POST /api/programs/:id/curriculum/items/:item_id/content` - Attach content
/// - `DELETE /api/programs/:id/curriculum/items/:item_id/content/:kind/:content_id` - Remove content
/// - `GET /api/programs/:id/curriculum/export` - Download as a document
/// - `POST /api/programs/:id/curriculum/import` - Replace from a document
/// - `GET /api/curriculum/template` - Download the starter document
pub fn curriculum_router() -> Router<AppState> {
    Router::new()
        .route("/api/programs/:id/curriculum", get(get_curriculum))
        .route("/api/programs/:id/curriculum/items", post(add_item))
        .route(
            "/api/programs/:id/curriculum/items/:item_id",
            patch(update_item).delete(delete_item),
        )
        .route(
            "/api/programs/:id/curriculum/items/:item_id/content",
            post(attach_content),
        )
        .route(
            "/api/programs/:id/curriculum/items/:item_id/content/:kind/:content_id",
            delete(remove_content),
        )
        .route("/api/programs/:id/curriculum/export", get(export_curriculum))
        .route("/api/programs/:id/curriculum/import", post(import_curriculum))
        .route("/api/curriculum/template", get(get_template))
}
