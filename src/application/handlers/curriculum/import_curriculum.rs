//! ImportCurriculumHandler - Command handler replacing a tree from a document.
//!
//! The document is decoded and built entirely in memory. A malformed
//! document aborts before anything is written; otherwise the program's
//! tree is replaced with exactly one save.

use std::sync::Arc;

use crate::domain::curriculum::CurriculumTree;
use crate::domain::foundation::ProgramId;
use crate::domain::interchange::{import_document, BuildWarning};
use crate::ports::ProgramRepository;

use super::program_store::LoadedProgram;
use super::CurriculumCommandError;

/// Command to replace a program's curriculum with an imported document.
#[derive(Debug, Clone)]
pub struct ImportCurriculumCommand {
    pub program_id: ProgramId,
    pub document: String,
}

/// Result of a successful import.
#[derive(Debug, Clone)]
pub struct ImportCurriculumResult {
    /// Number of tree nodes created.
    pub item_count: usize,
    /// Rows skipped or altered during the build.
    pub warnings: Vec<BuildWarning>,
    pub curriculum: CurriculumTree,
}

/// Handler for importing curricula.
pub struct ImportCurriculumHandler {
    program_repository: Arc<dyn ProgramRepository>,
}

impl ImportCurriculumHandler {
    pub fn new(program_repository: Arc<dyn ProgramRepository>) -> Self {
        Self { program_repository }
    }

    pub async fn handle(
        &self,
        cmd: ImportCurriculumCommand,
    ) -> Result<ImportCurriculumResult, CurriculumCommandError> {
        let loaded = LoadedProgram::load(&self.program_repository, &cmd.program_id).await?;

        let outcome = import_document(&cmd.document).map_err(|err| {
            tracing::warn!(program_id = %cmd.program_id, error = %err, "Curriculum import rejected");
            err
        })?;

        for warning in &outcome.warnings {
            tracing::warn!(program_id = %cmd.program_id, %warning, "Curriculum import warning");
        }

        let item_count = outcome.tree.len();
        let curriculum = loaded.commit(&self.program_repository, outcome.tree).await?;

        tracing::info!(
            program_id = %cmd.program_id,
            item_count,
            warnings = outcome.warnings.len(),
            "Curriculum imported"
        );

        Ok(ImportCurriculumResult {
            item_count,
            warnings: outcome.warnings,
            curriculum,
        })
    }
}
