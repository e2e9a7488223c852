//! AddCurriculumItemHandler - Command handler for inserting a tree node.
//!
//! Roots must be Chapters; any other node must sit exactly one level below
//! its parent. The new node is appended after its existing siblings.

use std::sync::Arc;

use crate::domain::curriculum::{validate_placement, CurriculumItem, CurriculumTree, ItemType};
use crate::domain::foundation::{CurriculumItemId, ProgramId};
use crate::ports::ProgramRepository;

use super::program_store::LoadedProgram;
use super::CurriculumCommandError;

/// Command to add a Chapter, Topic or Sub-Topic.
#[derive(Debug, Clone)]
pub struct AddCurriculumItemCommand {
    pub program_id: ProgramId,
    /// `None` adds a root Chapter.
    pub parent_id: Option<CurriculumItemId>,
    pub item_type: ItemType,
    pub title: String,
}

/// Result of successfully adding an item.
#[derive(Debug, Clone)]
pub struct AddCurriculumItemResult {
    pub item: CurriculumItem,
    pub curriculum: CurriculumTree,
}

/// Handler for adding curriculum items.
pub struct AddCurriculumItemHandler {
    program_repository: Arc<dyn ProgramRepository>,
}

impl AddCurriculumItemHandler {
    pub fn new(program_repository: Arc<dyn ProgramRepository>) -> Self {
        Self { program_repository }
    }

    pub async fn handle(
        &self,
        cmd: AddCurriculumItemCommand,
    ) -> Result<AddCurriculumItemResult, CurriculumCommandError> {
        let loaded = LoadedProgram::load(&self.program_repository, &cmd.program_id).await?;

        validate_placement(loaded.tree(), cmd.parent_id.as_ref(), cmd.item_type)?;

        let item = CurriculumItem::new(cmd.item_type, cmd.title);
        let tree = loaded.tree().insert(cmd.parent_id.as_ref(), item.clone())?;
        let curriculum = loaded.commit(&self.program_repository, tree).await?;

        tracing::info!(
            program_id = %cmd.program_id,
            item_id = %item.id,
            item_type = %item.item_type,
            "Curriculum item added"
        );

        Ok(AddCurriculumItemResult { item, curriculum })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::test_support::*;

    fn command(parent: Option<&str>, item_type: ItemType, title: &str) -> AddCurriculumItemCommand {
        AddCurriculumItemCommand {
            program_id: program_id("p-1"),
            parent_id: parent.map(item_id),
            item_type,
            title: title.to_string(),
        }
    }

    #[tokio::test]
    async fn adds_chapter_at_root() {
        let repo = Arc::new(MockProgramRepository::new(vec![sample_program()]));
        let handler = AddCurriculumItemHandler::new(repo.clone());

        let result = handler
            .handle(command(None, ItemType::Chapter, "Genetics"))
            .await
            .unwrap();

        let stored = repo.stored("p-1").curriculum;
        assert_eq!(stored.roots().len(), 2);
        assert_eq!(stored.find(&result.item.id).unwrap().title, "Genetics");
        assert_eq!(repo.save_count(), 1);
    }

    #[tokio::test]
    async fn adds_subtopic_under_topic() {
        let repo = Arc::new(MockProgramRepository::new(vec![sample_program()]));
        let handler = AddCurriculumItemHandler::new(repo.clone());

        let result = handler
            .handle(command(Some("t2"), ItemType::SubTopic, "Pores"))
            .await
            .unwrap();

        assert_eq!(result.curriculum.parent(&result.item.id), Some(&item_id("t2")));
    }

    #[tokio::test]
    async fn rejects_topic_at_root() {
        let repo = Arc::new(MockProgramRepository::new(vec![sample_program()]));
        let handler = AddCurriculumItemHandler::new(repo.clone());

        let result = handler.handle(command(None, ItemType::Topic, "Loose")).await;

        assert!(matches!(result, Err(CurriculumCommandError::InvalidHierarchy(_))));
        assert_eq!(repo.save_count(), 0);
    }

    #[tokio::test]
    async fn rejects_fourth_level() {
        let repo = Arc::new(MockProgramRepository::new(vec![sample_program()]));
        let handler = AddCurriculumItemHandler::new(repo);

        let result = handler.handle(command(Some("s1"), ItemType::SubTopic, "Deeper")).await;

        assert!(matches!(result, Err(CurriculumCommandError::InvalidHierarchy(_))));
    }

    #[tokio::test]
    async fn unknown_parent_is_item_not_found() {
        let repo = Arc::new(MockProgramRepository::new(vec![sample_program()]));
        let handler = AddCurriculumItemHandler::new(repo);

        let result = handler.handle(command(Some("zz"), ItemType::Topic, "X")).await;

        assert!(matches!(result, Err(CurriculumCommandError::ItemNotFound(id)) if id.as_str() == "zz"));
    }

    #[tokio::test]
    async fn unknown_program_is_not_found() {
        let repo = Arc::new(MockProgramRepository::new(vec![]));
        let handler = AddCurriculumItemHandler::new(repo);

        let result = handler.handle(command(None, ItemType::Chapter, "X")).await;

        assert!(matches!(result, Err(CurriculumCommandError::ProgramNotFound(_))));
    }

    #[tokio::test]
    async fn save_failure_is_surfaced() {
        let repo = Arc::new(MockProgramRepository::failing(vec![sample_program()]));
        let handler = AddCurriculumItemHandler::new(repo);

        let result = handler.handle(command(None, ItemType::Chapter, "X")).await;

        assert!(matches!(result, Err(CurriculumCommandError::Domain(_))));
    }
}
