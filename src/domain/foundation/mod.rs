//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, and error types that form the
//! vocabulary of the curriculum engine.

mod errors;
mod ids;
mod percentage;
mod timestamp;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{ContentId, CurriculumItemId, EnrollmentId, ProgramId};
pub use percentage::Percentage;
pub use timestamp::Timestamp;
