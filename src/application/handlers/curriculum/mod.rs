//! Curriculum command and query handlers.
//!
//! Every command reads the whole program collection, changes one program's
//! tree and writes the whole collection back.

mod errors;
mod program_store;

// Command handlers
mod add_item;
mod attach_content;
mod delete_item;
mod import_curriculum;
mod update_item;

// Query handlers
mod export_curriculum;
mod get_curriculum;

pub use errors::CurriculumCommandError;

pub use add_item::{AddCurriculumItemCommand, AddCurriculumItemHandler, AddCurriculumItemResult};
pub use attach_content::{
    AttachContentCommand, AttachContentHandler, AttachContentResult, NewContent,
    RemoveContentCommand, RemoveContentHandler,
};
pub use delete_item::{
    DeleteCurriculumItemCommand, DeleteCurriculumItemHandler, DeleteCurriculumItemResult,
};
pub use export_curriculum::{ExportCurriculumHandler, ExportCurriculumQuery, ExportedDocument};
pub use get_curriculum::{GetCurriculumHandler, GetCurriculumQuery};
pub use import_curriculum::{
    ImportCurriculumCommand, ImportCurriculumHandler, ImportCurriculumResult,
};
pub use update_item::{
    UpdateCurriculumItemCommand, UpdateCurriculumItemHandler, UpdateCurriculumItemResult,
};
