//! ItemType enum for the three fixed curriculum levels.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

/// Level of a node in a curriculum tree.
///
/// Only Chapter may hold Topics and only Topic may hold Sub-Topics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemType {
    Chapter,
    Topic,
    SubTopic,
}

impl ItemType {
    /// Returns all levels from top to bottom.
    pub fn all() -> &'static [ItemType] {
        &[ItemType::Chapter, ItemType::Topic, ItemType::SubTopic]
    }

    /// Returns the type a child of this level must have, or `None` for leaves.
    pub fn child_type(&self) -> Option<ItemType> {
        match self {
            ItemType::Chapter => Some(ItemType::Topic),
            ItemType::Topic => Some(ItemType::SubTopic),
            ItemType::SubTopic => None,
        }
    }

    /// Returns true if a node of type `child` may be placed under this level.
    pub fn can_contain(&self, child: ItemType) -> bool {
        self.child_type() == Some(child)
    }

    /// Returns true if this level may appear as a tree root.
    pub fn is_root_level(&self) -> bool {
        matches!(self, ItemType::Chapter)
    }

    /// Returns the label used in delimited documents.
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemType::Chapter => "Chapter",
            ItemType::Topic => "Topic",
            ItemType::SubTopic => "Sub-Topic",
        }
    }
}

impl fmt::Display for ItemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ItemType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "Chapter" => Ok(ItemType::Chapter),
            "Topic" => Ok(ItemType::Topic),
            "Sub-Topic" => Ok(ItemType::SubTopic),
            other => Err(ValidationError::invalid_format(
                "item_type",
                format!("unknown curriculum level '{}'", other),
            )),
        }
    }
}
