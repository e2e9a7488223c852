//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Persistence Ports
//!
//! - `ProgramRepository` - Whole-collection storage of programs and their trees
//! - `ProgressRepository` - Whole-map storage of per-enrollment progress copies

mod program_repository;
mod progress_repository;

pub use program_repository::ProgramRepository;
pub use progress_repository::ProgressRepository;
