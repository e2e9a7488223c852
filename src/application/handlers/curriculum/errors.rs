//! Error type shared by curriculum authoring handlers.

use thiserror::Error;

use crate::domain::foundation::{CurriculumItemId, DomainError, ErrorCode, ProgramId};
use crate::domain::interchange::InterchangeError;

/// Failure of a curriculum command or query.
#[derive(Debug, Clone, Error)]
pub enum CurriculumCommandError {
    #[error("Program not found: {0}")]
    ProgramNotFound(ProgramId),

    #[error("Curriculum item not found: {0}")]
    ItemNotFound(CurriculumItemId),

    #[error("Invalid hierarchy: {0}")]
    InvalidHierarchy(String),

    #[error("Import failed: {0}")]
    Import(#[from] InterchangeError),

    #[error("{0}")]
    Domain(DomainError),
}

impl From<DomainError> for CurriculumCommandError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::InvalidHierarchy => CurriculumCommandError::InvalidHierarchy(err.message),
            ErrorCode::ItemNotFound => match err
                .details
                .get("item_id")
                .and_then(|id| CurriculumItemId::new(id.as_str()).ok())
            {
                Some(id) => CurriculumCommandError::ItemNotFound(id),
                None => CurriculumCommandError::Domain(err),
            },
            _ => CurriculumCommandError::Domain(err),
        }
    }
}
