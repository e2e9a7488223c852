//! UpdateCurriculumItemHandler - Command handler for editing a node.
//!
//! Merges a partial patch into one item. A type change must stay legal for
//! the item's parent and its existing children.

use std::sync::Arc;

use crate::domain::curriculum::{validate_retype, CurriculumItem, CurriculumTree, ItemPatch};
use crate::domain::foundation::{CurriculumItemId, ProgramId};
use crate::ports::ProgramRepository;

use super::program_store::LoadedProgram;
use super::CurriculumCommandError;

/// Command to update fields of an existing item.
#[derive(Debug, Clone)]
pub struct UpdateCurriculumItemCommand {
    pub program_id: ProgramId,
    pub item_id: CurriculumItemId,
    pub patch: ItemPatch,
}

/// Result of successfully updating an item.
#[derive(Debug, Clone)]
pub struct UpdateCurriculumItemResult {
    pub item: CurriculumItem,
    pub curriculum: CurriculumTree,
}

/// Handler for updating curriculum items.
pub struct UpdateCurriculumItemHandler {
    program_repository: Arc<dyn ProgramRepository>,
}

impl UpdateCurriculumItemHandler {
    pub fn new(program_repository: Arc<dyn ProgramRepository>) -> Self {
        Self { program_repository }
    }

    pub async fn handle(
        &self,
        cmd: UpdateCurriculumItemCommand,
    ) -> Result<UpdateCurriculumItemResult, CurriculumCommandError> {
        let loaded = LoadedProgram::load(&self.program_repository, &cmd.program_id).await?;

        if !loaded.tree().contains(&cmd.item_id) {
            return Err(CurriculumCommandError::ItemNotFound(cmd.item_id));
        }
        if let Some(new_type) = cmd.patch.item_type {
            validate_retype(loaded.tree(), &cmd.item_id, new_type)?;
        }

        let tree = loaded.tree().update(&cmd.item_id, cmd.patch);
        let curriculum = loaded.commit(&self.program_repository, tree).await?;

        let item = curriculum
            .find(&cmd.item_id)
            .cloned()
            .ok_or_else(|| CurriculumCommandError::ItemNotFound(cmd.item_id.clone()))?;

        tracing::info!(
            program_id = %cmd.program_id,
            item_id = %cmd.item_id,
            "Curriculum item updated"
        );

        Ok(UpdateCurriculumItemResult { item, curriculum })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::test_support::*;
    use crate::domain::curriculum::{ItemType, ResourceLink};

    fn command(item: &str, patch: ItemPatch) -> UpdateCurriculumItemCommand {
        UpdateCurriculumItemCommand {
            program_id: program_id("p-1"),
            item_id: item_id(item),
            patch,
        }
    }

    #[tokio::test]
    async fn renames_item_and_saves() {
        let repo = Arc::new(MockProgramRepository::new(vec![sample_program()]));
        let handler = UpdateCurriculumItemHandler::new(repo.clone());

        let result = handler
            .handle(command("t2", ItemPatch::title("Nucleus and DNA")))
            .await
            .unwrap();

        assert_eq!(result.item.title, "Nucleus and DNA");
        assert_eq!(
            repo.stored("p-1").curriculum.find(&item_id("t2")).unwrap().title,
            "Nucleus and DNA"
        );
        assert_eq!(repo.save_count(), 1);
    }

    #[tokio::test]
    async fn replaces_attachment_list() {
        let repo = Arc::new(MockProgramRepository::new(vec![sample_program()]));
        let handler = UpdateCurriculumItemHandler::new(repo);

        let patch = ItemPatch {
            student_resources: Some(vec![ResourceLink::new("Video", "https://v")]),
            ..ItemPatch::default()
        };
        let result = handler.handle(command("c1", patch)).await.unwrap();

        assert_eq!(result.item.student_resources.len(), 1);
        assert_eq!(result.item.title, "Cells");
    }

    #[tokio::test]
    async fn retype_that_breaks_nesting_is_rejected() {
        let repo = Arc::new(MockProgramRepository::new(vec![sample_program()]));
        let handler = UpdateCurriculumItemHandler::new(repo.clone());

        let patch = ItemPatch {
            item_type: Some(ItemType::SubTopic),
            ..ItemPatch::default()
        };
        let result = handler.handle(command("t1", patch)).await;

        assert!(matches!(result, Err(CurriculumCommandError::InvalidHierarchy(_))));
        assert_eq!(repo.save_count(), 0);
    }

    #[tokio::test]
    async fn unknown_item_is_not_found() {
        let repo = Arc::new(MockProgramRepository::new(vec![sample_program()]));
        let handler = UpdateCurriculumItemHandler::new(repo.clone());

        let result = handler.handle(command("zz", ItemPatch::title("X"))).await;

        assert!(matches!(result, Err(CurriculumCommandError::ItemNotFound(_))));
        assert_eq!(repo.save_count(), 0);
    }
}
