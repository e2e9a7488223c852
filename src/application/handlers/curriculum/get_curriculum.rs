//! GetCurriculumHandler - Query handler returning a program's tree.

use std::sync::Arc;

use crate::domain::curriculum::Program;
use crate::domain::foundation::ProgramId;
use crate::ports::ProgramRepository;

use super::program_store::LoadedProgram;
use super::CurriculumCommandError;

/// Query for one program with its authoring tree.
#[derive(Debug, Clone)]
pub struct GetCurriculumQuery {
    pub program_id: ProgramId,
}

/// Handler for reading a program's curriculum.
pub struct GetCurriculumHandler {
    program_repository: Arc<dyn ProgramRepository>,
}

impl GetCurriculumHandler {
    pub fn new(program_repository: Arc<dyn ProgramRepository>) -> Self {
        Self { program_repository }
    }

    pub async fn handle(&self, query: GetCurriculumQuery) -> Result<Program, CurriculumCommandError> {
        let loaded = LoadedProgram::load(&self.program_repository, &query.program_id).await?;
        Ok(loaded.program().clone())
    }
}
