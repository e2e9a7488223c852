//! ExportCurriculumHandler - Query handler rendering a tree as a document.

use std::sync::Arc;

use crate::domain::foundation::ProgramId;
use crate::domain::interchange::{export_document, export_file_name};
use crate::ports::ProgramRepository;

use super::program_store::LoadedProgram;
use super::CurriculumCommandError;

/// Query for a program's export document.
#[derive(Debug, Clone)]
pub struct ExportCurriculumQuery {
    pub program_id: ProgramId,
}

/// A rendered document ready for download.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedDocument {
    pub file_name: String,
    pub content: String,
    /// Titles shared by several nodes. Re-importing the document links
    /// children and attachments of these to the last node with the title.
    pub duplicate_titles: Vec<String>,
}

/// Handler for exporting curricula.
pub struct ExportCurriculumHandler {
    program_repository: Arc<dyn ProgramRepository>,
}

impl ExportCurriculumHandler {
    pub fn new(program_repository: Arc<dyn ProgramRepository>) -> Self {
        Self { program_repository }
    }

    pub async fn handle(
        &self,
        query: ExportCurriculumQuery,
    ) -> Result<ExportedDocument, CurriculumCommandError> {
        let loaded = LoadedProgram::load(&self.program_repository, &query.program_id).await?;
        let program = loaded.program();

        let duplicate_titles = program.curriculum.duplicate_titles();
        if !duplicate_titles.is_empty() {
            tracing::warn!(
                program_id = %program.id,
                duplicates = ?duplicate_titles,
                "Exported curriculum has repeated titles and will not re-import faithfully"
            );
        }

        Ok(ExportedDocument {
            file_name: export_file_name(&program.title),
            content: export_document(&program.curriculum),
            duplicate_titles,
        })
    }
}
