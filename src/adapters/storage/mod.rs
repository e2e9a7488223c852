//! Storage Adapters
//!
//! Implementations of the `ProgramRepository` and `ProgressRepository` ports.
//!
//! ## Available Adapters
//!
//! - **FileProgramRepository / FileProgressRepository** - Store each
//!   collection as one YAML file on disk
//! - **InMemoryProgramRepository / InMemoryProgressRepository** - Store
//!   collections in memory (testing/development)
//!
//! ## Usage
//!
//! ```ignore
//! use adapters::storage::{FileProgramRepository, InMemoryProgramRepository};
//!
//! // Production: file-based storage
//! let programs = FileProgramRepository::new("./data");
//!
//! // Testing: in-memory storage
//! let programs = InMemoryProgramRepository::new();
//! ```

mod file_repository;
mod in_memory_repository;

pub use file_repository::{FileProgramRepository, FileProgressRepository};
pub use in_memory_repository::{InMemoryProgramRepository, InMemoryProgressRepository};
