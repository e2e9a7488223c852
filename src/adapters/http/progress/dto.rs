//! Request and response bodies for progress endpoints.

use serde::{Deserialize, Serialize};

use crate::application::handlers::{ProgressView, SetItemStatusResult};
use crate::domain::curriculum::{CurriculumTree, ItemStatus};
use crate::domain::foundation::Timestamp;
use crate::domain::progress::{CurriculumProgress, ProgressSummary};

/// Body of `POST /api/enrollments/:id/progress`.
#[derive(Debug, Clone, Deserialize)]
pub struct StartProgressRequest {
    pub program_id: String,
}

/// Body of `PUT /api/enrollments/:id/progress/items/:item_id`.
#[derive(Debug, Clone, Deserialize)]
pub struct SetStatusRequest {
    pub status: ItemStatus,
}

/// An enrollment's progress copy with summary counts.
#[derive(Debug, Clone, Serialize)]
pub struct ProgressResponse {
    pub enrollment_id: String,
    pub program_id: String,
    pub created_at: Timestamp,
    pub summary: ProgressSummary,
    pub curriculum: CurriculumTree,
}

impl From<CurriculumProgress> for ProgressResponse {
    fn from(progress: CurriculumProgress) -> Self {
        let summary = progress.summary();
        Self {
            enrollment_id: progress.enrollment_id.to_string(),
            program_id: progress.program_id.to_string(),
            created_at: progress.created_at,
            summary,
            curriculum: progress.curriculum,
        }
    }
}

/// Progress after a status change. `status_applied` is false when the item
/// has children and their aggregate replaced the requested status.
#[derive(Debug, Clone, Serialize)]
pub struct SetStatusResponse {
    pub status_applied: bool,
    #[serde(flatten)]
    pub progress: ProgressResponse,
}

impl From<SetItemStatusResult> for SetStatusResponse {
    fn from(result: SetItemStatusResult) -> Self {
        Self {
            status_applied: result.applied,
            progress: ProgressResponse::from(result.progress),
        }
    }
}

impl From<ProgressView> for ProgressResponse {
    fn from(view: ProgressView) -> Self {
        Self {
            summary: view.summary,
            ..Self::from(view.progress)
        }
    }
}
