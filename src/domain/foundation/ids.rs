//! Strongly-typed identifier value objects.
//!
//! Curriculum documents are user-editable, so identifiers are opaque strings
//! rather than parsed UUIDs. Freshly generated identifiers are UUID v4 text.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use super::ValidationError;

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident, $field:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Creates an identifier from existing text, rejecting blank values.
            pub fn new(id: impl Into<String>) -> Result<Self, ValidationError> {
                let id = id.into();
                if id.trim().is_empty() {
                    return Err(ValidationError::empty_field($field));
                }
                Ok(Self(id))
            }

            /// Generates a fresh random identifier.
            pub fn generate() -> Self {
                Self(Uuid::new_v4().to_string())
            }

            /// Returns the inner string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

string_id!(
    /// Identifier of a program owning one authoring tree.
    ProgramId,
    "program_id"
);

string_id!(
    /// Identifier of a student enrollment in a program.
    EnrollmentId,
    "enrollment_id"
);

string_id!(
    /// Identifier of a Chapter, Topic or Sub-Topic node.
    ///
    /// Stable between the authoring tree and every progress copy derived from it.
    CurriculumItemId,
    "item_id"
);

string_id!(
    /// Identifier of a resource link or assignment template attached to a node.
    ContentId,
    "content_id"
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_ids_are_unique() {
        let id1 = CurriculumItemId::generate();
        let id2 = CurriculumItemId::generate();
        assert_ne!(id1, id2);
    }

    #[test]
    fn generated_ids_are_uuid_text() {
        let id = ContentId::generate();
        assert!(Uuid::parse_str(id.as_str()).is_ok());
    }

    #[test]
    fn accepts_arbitrary_non_empty_text() {
        let id = CurriculumItemId::new("ch-1").unwrap();
        assert_eq!(id.as_str(), "ch-1");
        assert_eq!(id.to_string(), "ch-1");
    }

    #[test]
    fn rejects_blank_text() {
        match EnrollmentId::new("   ") {
            Err(ValidationError::EmptyField { field }) => assert_eq!(field, "enrollment_id"),
            other => panic!("Expected EmptyField error, got {:?}", other),
        }
    }

    #[test]
    fn serializes_as_plain_string() {
        let id = ProgramId::new("prog-7").unwrap();
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"prog-7\"");

        let parsed: ProgramId = serde_json::from_str("\"prog-7\"").unwrap();
        assert_eq!(parsed, id);
    }
}
