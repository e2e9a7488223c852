//! Request and response bodies for curriculum endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::curriculum::{
    ContentKind, CurriculumItem, CurriculumTree, ItemType, Program, ResourceKind,
};
use crate::domain::foundation::ContentId;
use crate::domain::interchange::BuildWarning;

use crate::application::handlers::NewContent;

// ════════════════════════════════════════════════════════════════════════════════
// Requests
// ════════════════════════════════════════════════════════════════════════════════

/// Body of `POST /api/programs/:id/curriculum/items`.
#[derive(Debug, Clone, Deserialize)]
pub struct AddItemRequest {
    /// Omitted for a root Chapter.
    #[serde(default)]
    pub parent_id: Option<String>,
    #[serde(rename = "type")]
    pub item_type: ItemType,
    pub title: String,
}

/// Body of `POST /api/programs/:id/curriculum/items/:item_id/content`.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AttachContentRequest {
    StudentResource {
        title: String,
        url: String,
    },
    TeacherResource {
        title: String,
        url: String,
    },
    Assignment {
        title: String,
        url: String,
        #[serde(default)]
        instructions: Option<String>,
    },
}

impl From<AttachContentRequest> for NewContent {
    fn from(request: AttachContentRequest) -> Self {
        match request {
            AttachContentRequest::StudentResource { title, url } => NewContent::Resource {
                kind: ResourceKind::Student,
                title,
                url,
            },
            AttachContentRequest::TeacherResource { title, url } => NewContent::Resource {
                kind: ResourceKind::Teacher,
                title,
                url,
            },
            AttachContentRequest::Assignment {
                title,
                url,
                instructions,
            } => NewContent::Assignment {
                title,
                url,
                instructions,
            },
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Responses
// ════════════════════════════════════════════════════════════════════════════════

/// A program with its nested curriculum.
#[derive(Debug, Clone, Serialize)]
pub struct CurriculumResponse {
    pub program_id: String,
    pub title: String,
    pub item_count: usize,
    pub curriculum: CurriculumTree,
}

impl From<Program> for CurriculumResponse {
    fn from(program: Program) -> Self {
        Self {
            program_id: program.id.to_string(),
            title: program.title,
            item_count: program.curriculum.len(),
            curriculum: program.curriculum,
        }
    }
}

/// A single item plus the tree it now lives in.
#[derive(Debug, Clone, Serialize)]
pub struct ItemResponse {
    pub item: CurriculumItem,
    pub curriculum: CurriculumTree,
}

#[derive(Debug, Clone, Serialize)]
pub struct DeleteItemResponse {
    pub removed: usize,
    pub curriculum: CurriculumTree,
}

#[derive(Debug, Clone, Serialize)]
pub struct AttachContentResponse {
    pub content_id: ContentId,
    pub kind: ContentKind,
    pub curriculum: CurriculumTree,
}

#[derive(Debug, Clone, Serialize)]
pub struct TreeResponse {
    pub curriculum: CurriculumTree,
}

/// Outcome of an import.
#[derive(Debug, Clone, Serialize)]
pub struct ImportResponse {
    pub item_count: usize,
    /// Human-readable descriptions of skipped or altered rows.
    pub warnings: Vec<String>,
    pub curriculum: CurriculumTree,
}

impl ImportResponse {
    pub fn new(item_count: usize, warnings: &[BuildWarning], curriculum: CurriculumTree) -> Self {
        Self {
            item_count,
            warnings: warnings.iter().map(ToString::to_string).collect(),
            curriculum,
        }
    }
}
