//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, errors)
//! - `curriculum` - Authoring tree, content attachments and hierarchy rules
//! - `interchange` - Flat document export/import of a curriculum
//! - `progress` - Per-enrollment status projection and propagation

pub mod curriculum;
pub mod foundation;
pub mod interchange;
pub mod progress;
