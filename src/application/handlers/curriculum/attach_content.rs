//! AttachContentHandler - Command handler for adding resources and assignments.
//!
//! Also hosts RemoveContentHandler, its inverse.

use std::sync::Arc;

use crate::domain::curriculum::{
    AssignmentTemplate, ContentKind, CurriculumTree, ResourceKind, ResourceLink,
};
use crate::domain::foundation::{ContentId, CurriculumItemId, ProgramId};
use crate::ports::ProgramRepository;

use super::program_store::LoadedProgram;
use super::CurriculumCommandError;

/// Content to attach to a node.
#[derive(Debug, Clone)]
pub enum NewContent {
    Resource {
        kind: ResourceKind,
        title: String,
        url: String,
    },
    Assignment {
        title: String,
        url: String,
        instructions: Option<String>,
    },
}

/// Command to attach one resource link or assignment to an item.
#[derive(Debug, Clone)]
pub struct AttachContentCommand {
    pub program_id: ProgramId,
    pub item_id: CurriculumItemId,
    pub content: NewContent,
}

/// Result of successfully attaching content.
#[derive(Debug, Clone)]
pub struct AttachContentResult {
    pub content_id: ContentId,
    pub kind: ContentKind,
    pub curriculum: CurriculumTree,
}

/// Handler for attaching content.
pub struct AttachContentHandler {
    program_repository: Arc<dyn ProgramRepository>,
}

impl AttachContentHandler {
    pub fn new(program_repository: Arc<dyn ProgramRepository>) -> Self {
        Self { program_repository }
    }

    pub async fn handle(
        &self,
        cmd: AttachContentCommand,
    ) -> Result<AttachContentResult, CurriculumCommandError> {
        let loaded = LoadedProgram::load(&self.program_repository, &cmd.program_id).await?;

        if !loaded.tree().contains(&cmd.item_id) {
            return Err(CurriculumCommandError::ItemNotFound(cmd.item_id));
        }

        let (content_id, kind, tree) = match cmd.content {
            NewContent::Resource { kind, title, url } => {
                let link = ResourceLink::new(title, url);
                let id = link.id.clone();
                (id, kind.content_kind(), loaded.tree().add_resource(&cmd.item_id, kind, link))
            }
            NewContent::Assignment {
                title,
                url,
                instructions,
            } => {
                let template = AssignmentTemplate::new(title, url, instructions);
                let id = template.id.clone();
                (
                    id,
                    ContentKind::Assignment,
                    loaded.tree().add_assignment(&cmd.item_id, template),
                )
            }
        };
        let curriculum = loaded.commit(&self.program_repository, tree).await?;

        tracing::info!(
            program_id = %cmd.program_id,
            item_id = %cmd.item_id,
            content_id = %content_id,
            kind = %kind,
            "Content attached"
        );

        Ok(AttachContentResult {
            content_id,
            kind,
            curriculum,
        })
    }
}

/// Command to remove one attachment from an item.
#[derive(Debug, Clone)]
pub struct RemoveContentCommand {
    pub program_id: ProgramId,
    pub item_id: CurriculumItemId,
    pub kind: ContentKind,
    pub content_id: ContentId,
}

/// Handler for removing attachments.
///
/// A missing item or attachment leaves the tree as it was; the collection
/// is still written back.
pub struct RemoveContentHandler {
    program_repository: Arc<dyn ProgramRepository>,
}

impl RemoveContentHandler {
    pub fn new(program_repository: Arc<dyn ProgramRepository>) -> Self {
        Self { program_repository }
    }

    pub async fn handle(
        &self,
        cmd: RemoveContentCommand,
    ) -> Result<CurriculumTree, CurriculumCommandError> {
        let loaded = LoadedProgram::load(&self.program_repository, &cmd.program_id).await?;

        let tree = loaded
            .tree()
            .remove_content(&cmd.item_id, cmd.kind, &cmd.content_id);
        let curriculum = loaded.commit(&self.program_repository, tree).await?;

        tracing::info!(
            program_id = %cmd.program_id,
            item_id = %cmd.item_id,
            content_id = %cmd.content_id,
            "Content removed"
        );

        Ok(curriculum)
    }
}
