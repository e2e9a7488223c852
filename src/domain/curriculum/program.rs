//! Program - owner of one authoring tree.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::ProgramId;

use super::CurriculumTree;

/// An education program as seen by the curriculum engine.
///
/// Other program attributes (billing, scheduling, ...) belong to
/// collaborators outside this crate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Program {
    pub id: ProgramId,
    pub title: String,
    #[serde(default)]
    pub curriculum: CurriculumTree,
}

impl Program {
    /// Creates a program with an empty curriculum.
    pub fn new(id: ProgramId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            curriculum: CurriculumTree::new(),
        }
    }

    /// Returns the program with its whole curriculum replaced.
    pub fn with_curriculum(mut self, curriculum: CurriculumTree) -> Self {
        self.curriculum = curriculum;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::curriculum::{CurriculumItem, ItemType};

    #[test]
    fn new_program_has_empty_curriculum() {
        let program = Program::new(ProgramId::new("p-1").unwrap(), "Math 101");
        assert!(program.curriculum.is_empty());
    }

    #[test]
    fn round_trips_through_yaml() {
        let tree = CurriculumTree::new()
            .insert(None, CurriculumItem::new(ItemType::Chapter, "Numbers"))
            .unwrap();
        let program = Program::new(ProgramId::new("p-1").unwrap(), "Math 101").with_curriculum(tree);

        let yaml = serde_yaml::to_string(&program).unwrap();
        let restored: Program = serde_yaml::from_str(&yaml).unwrap();

        assert_eq!(restored, program);
    }

    #[test]
    fn missing_curriculum_deserializes_as_empty() {
        let program: Program = serde_json::from_str(r#"{"id": "p-2", "title": "Art"}"#).unwrap();
        assert!(program.curriculum.is_empty());
    }
}
