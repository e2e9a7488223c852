//! StartProgressHandler - Command handler creating an enrollment's progress copy.
//!
//! The copy is projected from the program's tree as it stands now and is
//! not updated by later authoring edits.

use std::sync::Arc;

use crate::domain::foundation::{EnrollmentId, ProgramId};
use crate::domain::progress::CurriculumProgress;
use crate::ports::{ProgramRepository, ProgressRepository};

use super::ProgressCommandError;

/// Command to start tracking progress for an enrollment.
#[derive(Debug, Clone)]
pub struct StartProgressCommand {
    pub enrollment_id: EnrollmentId,
    pub program_id: ProgramId,
}

/// Handler for starting progress copies.
pub struct StartProgressHandler {
    program_repository: Arc<dyn ProgramRepository>,
    progress_repository: Arc<dyn ProgressRepository>,
}

impl StartProgressHandler {
    pub fn new(
        program_repository: Arc<dyn ProgramRepository>,
        progress_repository: Arc<dyn ProgressRepository>,
    ) -> Self {
        Self {
            program_repository,
            progress_repository,
        }
    }

    pub async fn handle(
        &self,
        cmd: StartProgressCommand,
    ) -> Result<CurriculumProgress, ProgressCommandError> {
        let mut all = self.progress_repository.get_progress().await?;
        if all.contains_key(&cmd.enrollment_id) {
            return Err(ProgressCommandError::ProgressAlreadyExists(cmd.enrollment_id));
        }

        let programs = self.program_repository.get_programs().await?;
        let program = programs
            .iter()
            .find(|program| program.id == cmd.program_id)
            .ok_or_else(|| ProgressCommandError::ProgramNotFound(cmd.program_id.clone()))?;

        let progress = CurriculumProgress::project(cmd.enrollment_id.clone(), program);
        all.insert(cmd.enrollment_id.clone(), progress.clone());
        self.progress_repository.save_progress(&all).await?;

        tracing::info!(
            enrollment_id = %cmd.enrollment_id,
            program_id = %cmd.program_id,
            items = progress.curriculum.len(),
            "Progress started"
        );

        Ok(progress)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::test_support::*;
    use crate::domain::curriculum::ItemStatus;

    fn command(enrollment: &str, program: &str) -> StartProgressCommand {
        StartProgressCommand {
            enrollment_id: EnrollmentId::new(enrollment).unwrap(),
            program_id: program_id(program),
        }
    }

    #[tokio::test]
    async fn projects_program_tree_for_enrollment() {
        let programs = Arc::new(MockProgramRepository::new(vec![sample_program()]));
        let progress = Arc::new(MockProgressRepository::new());
        let handler = StartProgressHandler::new(programs, progress.clone());

        let copy = handler.handle(command("e-1", "p-1")).await.unwrap();

        assert_eq!(copy.curriculum.len(), 4);
        assert_eq!(copy.status_of(&item_id("s1")), Some(ItemStatus::Locked));
        assert_eq!(progress.stored("e-1"), Some(copy));
        assert_eq!(progress.save_count(), 1);
    }

    #[tokio::test]
    async fn second_start_for_same_enrollment_fails() {
        let programs = Arc::new(MockProgramRepository::new(vec![sample_program()]));
        let progress = Arc::new(MockProgressRepository::new());
        let handler = StartProgressHandler::new(programs, progress.clone());

        handler.handle(command("e-1", "p-1")).await.unwrap();
        let result = handler.handle(command("e-1", "p-1")).await;

        assert!(matches!(result, Err(ProgressCommandError::ProgressAlreadyExists(_))));
        assert_eq!(progress.save_count(), 1);
    }

    #[tokio::test]
    async fn unknown_program_is_not_found() {
        let programs = Arc::new(MockProgramRepository::new(vec![]));
        let progress = Arc::new(MockProgressRepository::new());
        let handler = StartProgressHandler::new(programs, progress);

        let result = handler.handle(command("e-1", "p-1")).await;

        assert!(matches!(result, Err(ProgressCommandError::ProgramNotFound(_))));
    }
}
