//! CurriculumProgress - one enrollment's copy of a program's curriculum.

use serde::{Deserialize, Serialize};

use crate::domain::curriculum::{CurriculumItem, CurriculumTree, ItemStatus, Program};
use crate::domain::foundation::{CurriculumItemId, EnrollmentId, Percentage, ProgramId, Timestamp};

use super::propagation;

/// Per-enrollment projection of a curriculum carrying completion status.
///
/// The copy is taken when the enrollment starts and is never reconciled
/// with later edits to the program's authoring tree. Attachments are not
/// copied; item ids match the authoring tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurriculumProgress {
    pub enrollment_id: EnrollmentId,
    pub program_id: ProgramId,
    pub created_at: Timestamp,
    pub curriculum: CurriculumTree,
}

impl CurriculumProgress {
    /// Projects a program's current tree for a new enrollment. Every node
    /// starts Locked.
    pub fn project(enrollment_id: EnrollmentId, program: &Program) -> Self {
        let curriculum = program.curriculum.map_items(|item| CurriculumItem {
            status: ItemStatus::Locked,
            ..item.without_content()
        });

        Self {
            enrollment_id,
            program_id: program.id.clone(),
            created_at: Timestamp::now(),
            curriculum,
        }
    }

    /// Returns a copy with one node's status set and propagated through the
    /// tree. Unknown ids leave the copy unchanged.
    pub fn set_status(&self, id: &CurriculumItemId, status: ItemStatus) -> Self {
        Self {
            curriculum: propagation::set_status(&self.curriculum, id, status),
            ..self.clone()
        }
    }

    pub fn status_of(&self, id: &CurriculumItemId) -> Option<ItemStatus> {
        self.curriculum.find(id).map(|item| item.status)
    }

    pub fn percent_complete(&self) -> Percentage {
        propagation::percent_complete(&self.curriculum)
    }

    /// Counts per status across every level of the copy.
    pub fn summary(&self) -> ProgressSummary {
        let mut summary = ProgressSummary {
            total: self.curriculum.len(),
            percent_complete: self.percent_complete(),
            ..ProgressSummary::default()
        };
        for (_, item) in self.curriculum.pre_order() {
            match item.status {
                ItemStatus::Locked => summary.locked += 1,
                ItemStatus::InProgress => summary.in_progress += 1,
                ItemStatus::Completed => summary.completed += 1,
            }
        }
        summary
    }
}

/// Aggregate counts for a progress copy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressSummary {
    pub total: usize,
    pub completed: usize,
    pub in_progress: usize,
    pub locked: usize,
    pub percent_complete: Percentage,
}
