//! DeleteCurriculumItemHandler - Command handler for removing a subtree.

use std::sync::Arc;

use crate::domain::curriculum::CurriculumTree;
use crate::domain::foundation::{CurriculumItemId, ProgramId};
use crate::ports::ProgramRepository;

use super::program_store::LoadedProgram;
use super::CurriculumCommandError;

/// Command to delete an item together with all of its descendants.
#[derive(Debug, Clone)]
pub struct DeleteCurriculumItemCommand {
    pub program_id: ProgramId,
    pub item_id: CurriculumItemId,
}

/// Result of successfully deleting an item.
#[derive(Debug, Clone)]
pub struct DeleteCurriculumItemResult {
    /// Number of nodes removed, the item included.
    pub removed: usize,
    pub curriculum: CurriculumTree,
}

/// Handler for deleting curriculum items.
pub struct DeleteCurriculumItemHandler {
    program_repository: Arc<dyn ProgramRepository>,
}

impl DeleteCurriculumItemHandler {
    pub fn new(program_repository: Arc<dyn ProgramRepository>) -> Self {
        Self { program_repository }
    }

    pub async fn handle(
        &self,
        cmd: DeleteCurriculumItemCommand,
    ) -> Result<DeleteCurriculumItemResult, CurriculumCommandError> {
        let loaded = LoadedProgram::load(&self.program_repository, &cmd.program_id).await?;

        if !loaded.tree().contains(&cmd.item_id) {
            return Err(CurriculumCommandError::ItemNotFound(cmd.item_id));
        }

        let before = loaded.tree().len();
        let tree = loaded.tree().delete(&cmd.item_id);
        let removed = before - tree.len();
        let curriculum = loaded.commit(&self.program_repository, tree).await?;

        tracing::info!(
            program_id = %cmd.program_id,
            item_id = %cmd.item_id,
            removed,
            "Curriculum item deleted"
        );

        Ok(DeleteCurriculumItemResult { removed, curriculum })
    }
}
