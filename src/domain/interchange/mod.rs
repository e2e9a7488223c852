//! Interchange module - flat delimited documents for bulk editing.
//!
//! Export walks the tree into rows ([`flatten`]) and renders them
//! ([`encode`]). Import parses a document ([`decode`]) and rebuilds a tree
//! from it ([`build`]), linking rows to parents by title.

mod builder;
mod codec;
mod flatten;
mod row;
mod template;

pub use builder::{build, BuildOutcome, BuildWarning};
pub use codec::{decode, encode, InterchangeError};
pub use flatten::flatten;
pub use row::{CurriculumRow, RecordType, HEADER};
pub use template::{template_document, template_rows};

use crate::domain::curriculum::CurriculumTree;

/// Renders a tree as a complete export document.
pub fn export_document(tree: &CurriculumTree) -> String {
    encode(&flatten(tree))
}

/// Parses and builds a document in one step. Nothing is applied anywhere;
/// the caller decides what to do with the outcome.
pub fn import_document(text: &str) -> Result<BuildOutcome, InterchangeError> {
    Ok(build(&decode(text)?))
}

/// Download name for a program's export: non-alphanumeric characters become
/// `_`, with `program` standing in for a blank title.
pub fn export_file_name(program_title: &str) -> String {
    let trimmed = program_title.trim();
    let stem: String = if trimmed.is_empty() {
        "program".to_string()
    } else {
        trimmed
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
            .collect()
    };
    format!("{}_curriculum.csv", stem)
}
