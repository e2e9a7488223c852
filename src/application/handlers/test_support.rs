//! Mock repositories shared by handler tests.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;

use crate::domain::curriculum::{CurriculumItem, CurriculumTree, ItemType, Program};
use crate::domain::foundation::{CurriculumItemId, DomainError, EnrollmentId, ProgramId};
use crate::domain::progress::CurriculumProgress;
use crate::ports::{ProgramRepository, ProgressRepository};

pub struct MockProgramRepository {
    programs: Mutex<Vec<Program>>,
    save_count: Mutex<usize>,
    fail_save: bool,
}

impl MockProgramRepository {
    pub fn new(programs: Vec<Program>) -> Self {
        Self {
            programs: Mutex::new(programs),
            save_count: Mutex::new(0),
            fail_save: false,
        }
    }

    pub fn failing(programs: Vec<Program>) -> Self {
        Self {
            fail_save: true,
            ..Self::new(programs)
        }
    }

    pub fn save_count(&self) -> usize {
        *self.save_count.lock().unwrap()
    }

    pub fn stored(&self, id: &str) -> Program {
        self.programs
            .lock()
            .unwrap()
            .iter()
            .find(|p| p.id.as_str() == id)
            .cloned()
            .unwrap()
    }
}

#[async_trait]
impl ProgramRepository for MockProgramRepository {
    async fn get_programs(&self) -> Result<Vec<Program>, DomainError> {
        Ok(self.programs.lock().unwrap().clone())
    }

    async fn save_programs(&self, programs: &[Program]) -> Result<(), DomainError> {
        if self.fail_save {
            return Err(DomainError::storage("Simulated save failure"));
        }
        *self.programs.lock().unwrap() = programs.to_vec();
        *self.save_count.lock().unwrap() += 1;
        Ok(())
    }
}

#[derive(Default)]
pub struct MockProgressRepository {
    progress: Mutex<HashMap<EnrollmentId, CurriculumProgress>>,
    save_count: Mutex<usize>,
}

impl MockProgressRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(progress: CurriculumProgress) -> Self {
        let repo = Self::new();
        repo.progress
            .lock()
            .unwrap()
            .insert(progress.enrollment_id.clone(), progress);
        repo
    }

    pub fn save_count(&self) -> usize {
        *self.save_count.lock().unwrap()
    }

    pub fn stored(&self, enrollment: &str) -> Option<CurriculumProgress> {
        self.progress
            .lock()
            .unwrap()
            .get(&EnrollmentId::new(enrollment).unwrap())
            .cloned()
    }
}

#[async_trait]
impl ProgressRepository for MockProgressRepository {
    async fn get_progress(&self) -> Result<HashMap<EnrollmentId, CurriculumProgress>, DomainError> {
        Ok(self.progress.lock().unwrap().clone())
    }

    async fn save_progress(
        &self,
        progress: &HashMap<EnrollmentId, CurriculumProgress>,
    ) -> Result<(), DomainError> {
        *self.progress.lock().unwrap() = progress.clone();
        *self.save_count.lock().unwrap() += 1;
        Ok(())
    }
}

pub fn item_id(s: &str) -> CurriculumItemId {
    CurriculumItemId::new(s).unwrap()
}

pub fn program_id(s: &str) -> ProgramId {
    ProgramId::new(s).unwrap()
}

/// Program `p-1` "Biology": c1 "Cells" → (t1 "Membranes" → s1 "Channels", t2 "Nucleus").
pub fn sample_program() -> Program {
    let tree = CurriculumTree::new()
        .insert(None, CurriculumItem::with_id(item_id("c1"), ItemType::Chapter, "Cells"))
        .and_then(|t| {
            t.insert(Some(&item_id("c1")), CurriculumItem::with_id(item_id("t1"), ItemType::Topic, "Membranes"))
        })
        .and_then(|t| {
            t.insert(Some(&item_id("t1")), CurriculumItem::with_id(item_id("s1"), ItemType::SubTopic, "Channels"))
        })
        .and_then(|t| {
            t.insert(Some(&item_id("c1")), CurriculumItem::with_id(item_id("t2"), ItemType::Topic, "Nucleus"))
        })
        .unwrap();
    Program::new(program_id("p-1"), "Biology").with_curriculum(tree)
}
