//! Progress repository port.
//!
//! Persists every enrollment's progress copy as one map, written whole.

use std::collections::HashMap;

use crate::domain::foundation::{DomainError, EnrollmentId};
use crate::domain::progress::CurriculumProgress;
use async_trait::async_trait;

/// Repository port for per-enrollment progress copies.
#[async_trait]
pub trait ProgressRepository: Send + Sync {
    /// Load every progress copy keyed by enrollment.
    ///
    /// # Errors
    ///
    /// - `StorageError` if the backing store cannot be read or parsed
    async fn get_progress(&self) -> Result<HashMap<EnrollmentId, CurriculumProgress>, DomainError>;

    /// Replace the stored map with `progress`.
    ///
    /// # Errors
    ///
    /// - `StorageError` on persistence failure
    async fn save_progress(
        &self,
        progress: &HashMap<EnrollmentId, CurriculumProgress>,
    ) -> Result<(), DomainError>;
}
