//! Starter document offered to authors before their first import.

use super::codec::encode;
use super::row::{CurriculumRow, RecordType};

/// Rows of the illustrative template: one of each record type, nested
/// Chapter → Topic → Sub-Topic. Ids are blank so an import generates them.
pub fn template_rows() -> Vec<CurriculumRow> {
    vec![
        CurriculumRow::new("", "", RecordType::Chapter, "Introduction to Programming"),
        CurriculumRow::new(
            "",
            "Introduction to Programming",
            RecordType::StudentResource,
            "Course Overview Video",
        )
        .with_url("https://example.com/videos/overview"),
        CurriculumRow::new(
            "",
            "Introduction to Programming",
            RecordType::Topic,
            "Variables and Types",
        ),
        CurriculumRow::new(
            "",
            "Variables and Types",
            RecordType::TeacherResource,
            "Teaching Notes: Variables",
        )
        .with_url("https://example.com/notes/variables"),
        CurriculumRow::new("", "Variables and Types", RecordType::SubTopic, "Integers and Floats"),
        CurriculumRow::new("", "Integers and Floats", RecordType::Assignment, "Number Practice")
            .with_url("https://example.com/assignments/numbers")
            .with_instructions("Complete exercises 1-10, then submit your answers as a single file"),
    ]
}

/// The template rendered as a document.
pub fn template_document() -> String {
    encode(&template_rows())
}
