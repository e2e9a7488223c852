//! Error type shared by progress handlers.

use thiserror::Error;

use crate::domain::foundation::{CurriculumItemId, DomainError, EnrollmentId, ProgramId};

/// Failure of a progress command or query.
#[derive(Debug, Clone, Error)]
pub enum ProgressCommandError {
    #[error("Program not found: {0}")]
    ProgramNotFound(ProgramId),

    #[error("Enrollment not found: {0}")]
    EnrollmentNotFound(EnrollmentId),

    #[error("Progress already exists for enrollment: {0}")]
    ProgressAlreadyExists(EnrollmentId),

    #[error("Curriculum item not found: {0}")]
    ItemNotFound(CurriculumItemId),

    #[error("{0}")]
    Domain(#[from] DomainError),
}
