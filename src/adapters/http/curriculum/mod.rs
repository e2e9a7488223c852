//! HTTP adapter for curriculum authoring and import/export.

mod dto;
mod handlers;
mod routes;

pub use dto::{AddItemRequest, AttachContentRequest, CurriculumResponse, ImportResponse};
pub use routes::curriculum_router;
