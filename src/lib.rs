//! Curriculum Engine - hierarchical curriculum authoring and progress tracking
//!
//! Programs own a Chapter → Topic → Sub-Topic tree with attached resources
//! and assignments. Trees can be exported to and imported from flat
//! documents, and each enrollment tracks completion on its own copy.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
