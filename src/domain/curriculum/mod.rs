//! Curriculum module - the authoring tree of a program.
//!
//! - `tree` - arena-backed [`CurriculumTree`] with insert/update/delete/find
//! - `attachments` - resource links and assignment templates per node
//! - `hierarchy` - Chapter → Topic → Sub-Topic placement rules
//! - `program` - [`Program`], owner of exactly one tree

mod attachments;
mod content;
mod hierarchy;
mod item;
mod item_status;
mod item_type;
mod program;
mod tree;

pub use content::{AssignmentTemplate, ContentKind, ResourceKind, ResourceLink};
pub use hierarchy::{validate_placement, validate_retype};
pub use item::{CurriculumItem, ItemPatch};
pub use item_status::ItemStatus;
pub use item_type::ItemType;
pub use program::Program;
pub use tree::{CurriculumTree, OutlineNode, PreOrder};
