//! Read-full → apply-one → write-full access to the program collection.

use std::sync::Arc;

use crate::domain::curriculum::{CurriculumTree, Program};
use crate::domain::foundation::ProgramId;
use crate::ports::ProgramRepository;

use super::CurriculumCommandError;

/// The whole program collection, loaded for a single change to one program.
pub(crate) struct LoadedProgram {
    programs: Vec<Program>,
    index: usize,
}

impl LoadedProgram {
    /// Loads every program and locates `program_id`.
    pub(crate) async fn load(
        repository: &Arc<dyn ProgramRepository>,
        program_id: &ProgramId,
    ) -> Result<Self, CurriculumCommandError> {
        let programs = repository.get_programs().await?;
        let index = programs
            .iter()
            .position(|program| &program.id == program_id)
            .ok_or_else(|| CurriculumCommandError::ProgramNotFound(program_id.clone()))?;
        Ok(Self { programs, index })
    }

    pub(crate) fn program(&self) -> &Program {
        &self.programs[self.index]
    }

    pub(crate) fn tree(&self) -> &CurriculumTree {
        &self.program().curriculum
    }

    /// Replaces the program's tree and writes the whole collection back.
    pub(crate) async fn commit(
        mut self,
        repository: &Arc<dyn ProgramRepository>,
        tree: CurriculumTree,
    ) -> Result<CurriculumTree, CurriculumCommandError> {
        self.programs[self.index].curriculum = tree.clone();
        if let Err(err) = repository.save_programs(&self.programs).await {
            tracing::warn!(
                program_id = %self.programs[self.index].id,
                error = %err,
                "Failed to save programs"
            );
            return Err(err.into());
        }
        Ok(tree)
    }
}
