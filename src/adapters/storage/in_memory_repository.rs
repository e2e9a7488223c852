//! In-Memory Repository Adapters
//!
//! Keep the program collection and the progress map in memory.
//! Useful for testing and development.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::curriculum::Program;
use crate::domain::foundation::{DomainError, EnrollmentId};
use crate::domain::progress::CurriculumProgress;
use crate::ports::{ProgramRepository, ProgressRepository};

/// In-memory storage for programs
#[derive(Debug, Clone, Default)]
pub struct InMemoryProgramRepository {
    programs: Arc<RwLock<Vec<Program>>>,
}

impl InMemoryProgramRepository {
    /// Create an empty repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository pre-populated with `programs`
    pub fn with_programs(programs: Vec<Program>) -> Self {
        Self {
            programs: Arc::new(RwLock::new(programs)),
        }
    }
}

#[async_trait]
impl ProgramRepository for InMemoryProgramRepository {
    async fn get_programs(&self) -> Result<Vec<Program>, DomainError> {
        Ok(self.programs.read().await.clone())
    }

    async fn save_programs(&self, programs: &[Program]) -> Result<(), DomainError> {
        *self.programs.write().await = programs.to_vec();
        Ok(())
    }
}

/// In-memory storage for progress copies
#[derive(Debug, Clone, Default)]
pub struct InMemoryProgressRepository {
    progress: Arc<RwLock<HashMap<EnrollmentId, CurriculumProgress>>>,
}

impl InMemoryProgressRepository {
    /// Create an empty repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear all stored data (useful for tests)
    pub async fn clear(&self) {
        self.progress.write().await.clear();
    }
}

#[async_trait]
impl ProgressRepository for InMemoryProgressRepository {
    async fn get_progress(&self) -> Result<HashMap<EnrollmentId, CurriculumProgress>, DomainError> {
        Ok(self.progress.read().await.clone())
    }

    async fn save_progress(
        &self,
        progress: &HashMap<EnrollmentId, CurriculumProgress>,
    ) -> Result<(), DomainError> {
        *self.progress.write().await = progress.clone();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::ProgramId;

    fn program(id: &str) -> Program {
        Program::new(ProgramId::new(id).unwrap(), format!("Program {}", id))
    }

    #[tokio::test]
    async fn test_in_memory_programs_start_empty() {
        let repo = InMemoryProgramRepository::new();
        assert!(repo.get_programs().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_in_memory_save_replaces_whole_collection() {
        let repo = InMemoryProgramRepository::with_programs(vec![program("a"), program("b")]);

        repo.save_programs(&[program("c")]).await.unwrap();

        let stored = repo.get_programs().await.unwrap();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].id.as_str(), "c");
    }

    #[tokio::test]
    async fn test_in_memory_clones_share_storage() {
        let repo = InMemoryProgramRepository::new();
        let other = repo.clone();

        repo.save_programs(&[program("a")]).await.unwrap();

        assert_eq!(other.get_programs().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_in_memory_progress_round_trip() {
        let repo = InMemoryProgressRepository::new();
        let enrollment = EnrollmentId::new("e-1").unwrap();
        let copy = CurriculumProgress::project(enrollment.clone(), &program("a"));

        let mut map = HashMap::new();
        map.insert(enrollment.clone(), copy.clone());
        repo.save_progress(&map).await.unwrap();

        assert_eq!(repo.get_progress().await.unwrap().get(&enrollment), Some(&copy));

        repo.clear().await;
        assert!(repo.get_progress().await.unwrap().is_empty());
    }
}
