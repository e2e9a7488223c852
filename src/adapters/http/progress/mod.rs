//! HTTP adapter for per-enrollment progress.

mod dto;
mod handlers;
mod routes;

pub use dto::{ProgressResponse, SetStatusRequest, StartProgressRequest};
pub use routes::progress_router;
