//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `storage` - In-memory and YAML-file repositories
//! - `http` - Axum REST surface

pub mod http;
pub mod storage;

pub use http::{api_router, AppState};
pub use storage::{
    FileProgramRepository, FileProgressRepository, InMemoryProgramRepository,
    InMemoryProgressRepository,
};
