//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Following CQRS, it separates command handlers (write) from query handlers (read).

pub mod handlers;

pub use handlers::{
    // Curriculum handlers
    AddCurriculumItemCommand, AddCurriculumItemHandler, AddCurriculumItemResult,
    AttachContentCommand, AttachContentHandler, AttachContentResult, NewContent,
    CurriculumCommandError,
    DeleteCurriculumItemCommand, DeleteCurriculumItemHandler, DeleteCurriculumItemResult,
    ExportCurriculumHandler, ExportCurriculumQuery, ExportedDocument,
    GetCurriculumHandler, GetCurriculumQuery,
    ImportCurriculumCommand, ImportCurriculumHandler, ImportCurriculumResult,
    RemoveContentCommand, RemoveContentHandler,
    UpdateCurriculumItemCommand, UpdateCurriculumItemHandler, UpdateCurriculumItemResult,
    // Progress handlers
    GetProgressHandler, GetProgressQuery, ProgressView,
    ProgressCommandError,
    SetItemStatusCommand, SetItemStatusHandler, SetItemStatusResult,
    StartProgressCommand, StartProgressHandler,
};
