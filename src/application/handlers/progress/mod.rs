//! Progress command and query handlers.

mod errors;

// Command handlers
mod set_item_status;
mod start_progress;

// Query handlers
mod get_progress;

pub use errors::ProgressCommandError;

pub use get_progress::{GetProgressHandler, GetProgressQuery, ProgressView};
pub use set_item_status::{SetItemStatusCommand, SetItemStatusHandler, SetItemStatusResult};
pub use start_progress::{StartProgressCommand, StartProgressHandler};
