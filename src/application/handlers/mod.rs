//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod curriculum;
pub mod progress;

#[cfg(test)]
pub(crate) mod test_support;

pub use curriculum::*;
pub use progress::*;
