//! SetItemStatusHandler - Command handler for instructor status changes.
//!
//! Applies the status to one node of an enrollment's copy, cascading
//! completion downward and re-aggregating every parent. A node with children
//! always ends up with the status its children imply, so a request can be
//! overridden; the result says whether it took effect.

use std::sync::Arc;

use crate::domain::curriculum::ItemStatus;
use crate::domain::foundation::{CurriculumItemId, EnrollmentId};
use crate::domain::progress::CurriculumProgress;
use crate::ports::ProgressRepository;

use super::ProgressCommandError;

/// Command to set one item's status.
#[derive(Debug, Clone)]
pub struct SetItemStatusCommand {
    pub enrollment_id: EnrollmentId,
    pub item_id: CurriculumItemId,
    pub status: ItemStatus,
}

/// Result of a status change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetItemStatusResult {
    pub progress: CurriculumProgress,
    /// False when aggregation replaced the requested status.
    pub applied: bool,
}

/// Handler for status changes.
pub struct SetItemStatusHandler {
    progress_repository: Arc<dyn ProgressRepository>,
}

impl SetItemStatusHandler {
    pub fn new(progress_repository: Arc<dyn ProgressRepository>) -> Self {
        Self { progress_repository }
    }

    pub async fn handle(
        &self,
        cmd: SetItemStatusCommand,
    ) -> Result<SetItemStatusResult, ProgressCommandError> {
        let mut all = self.progress_repository.get_progress().await?;

        let current = all
            .get(&cmd.enrollment_id)
            .ok_or_else(|| ProgressCommandError::EnrollmentNotFound(cmd.enrollment_id.clone()))?;
        if !current.curriculum.contains(&cmd.item_id) {
            return Err(ProgressCommandError::ItemNotFound(cmd.item_id));
        }

        let updated = current.set_status(&cmd.item_id, cmd.status);
        all.insert(cmd.enrollment_id.clone(), updated.clone());
        self.progress_repository.save_progress(&all).await?;

        let applied = updated.status_of(&cmd.item_id) == Some(cmd.status);
        tracing::info!(
            enrollment_id = %cmd.enrollment_id,
            item_id = %cmd.item_id,
            status = %cmd.status,
            applied,
            percent_complete = updated.percent_complete().value(),
            "Item status set"
        );

        Ok(SetItemStatusResult {
            progress: updated,
            applied,
        })
    }
}
