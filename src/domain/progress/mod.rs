//! Progress module - per-enrollment completion tracking.
//!
//! - `propagation` - cascade and aggregate passes, percent complete
//! - `curriculum_progress` - [`CurriculumProgress`], the frozen per-enrollment copy

mod curriculum_progress;
mod propagation;

pub use curriculum_progress::{CurriculumProgress, ProgressSummary};
pub use propagation::{percent_complete, set_status};
