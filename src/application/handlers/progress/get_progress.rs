//! GetProgressHandler - Query handler returning an enrollment's copy.

use std::sync::Arc;

use crate::domain::foundation::EnrollmentId;
use crate::domain::progress::{CurriculumProgress, ProgressSummary};
use crate::ports::ProgressRepository;

use super::ProgressCommandError;

/// Query for an enrollment's progress.
#[derive(Debug, Clone)]
pub struct GetProgressQuery {
    pub enrollment_id: EnrollmentId,
}

/// A progress copy with its summary counts.
#[derive(Debug, Clone)]
pub struct ProgressView {
    pub progress: CurriculumProgress,
    pub summary: ProgressSummary,
}

/// Handler for reading progress.
pub struct GetProgressHandler {
    progress_repository: Arc<dyn ProgressRepository>,
}

impl GetProgressHandler {
    pub fn new(progress_repository: Arc<dyn ProgressRepository>) -> Self {
        Self { progress_repository }
    }

    pub async fn handle(&self, query: GetProgressQuery) -> Result<ProgressView, ProgressCommandError> {
        let progress = self
            .progress_repository
            .get_progress()
            .await?
            .remove(&query.enrollment_id)
            .ok_or(ProgressCommandError::EnrollmentNotFound(query.enrollment_id))?;

        let summary = progress.summary();
        Ok(ProgressView { progress, summary })
    }
}
