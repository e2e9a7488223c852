//! Program repository port.
//!
//! Persists the whole program collection at once. Every authoring change is
//! read-full → apply-one → write-full with last-writer-wins semantics; there
//! are no node-level writes.

use crate::domain::curriculum::Program;
use crate::domain::foundation::DomainError;
use async_trait::async_trait;

/// Repository port for the collection of programs and their authoring trees.
#[async_trait]
pub trait ProgramRepository: Send + Sync {
    /// Load every program.
    ///
    /// An empty store yields an empty list.
    ///
    /// # Errors
    ///
    /// - `StorageError` if the backing store cannot be read or parsed
    async fn get_programs(&self) -> Result<Vec<Program>, DomainError>;

    /// Replace the stored collection with `programs`.
    ///
    /// # Errors
    ///
    /// - `StorageError` on persistence failure
    async fn save_programs(&self, programs: &[Program]) -> Result<(), DomainError>;
}
