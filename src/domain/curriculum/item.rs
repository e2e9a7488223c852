//! CurriculumItem - the payload of one Chapter, Topic or Sub-Topic node.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::CurriculumItemId;

use super::{AssignmentTemplate, ItemStatus, ItemType, ResourceLink};

/// Data stored at one tree node.
///
/// Children are not part of the item; [`CurriculumTree`](super::CurriculumTree)
/// keeps the ordered child lists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurriculumItem {
    pub id: CurriculumItemId,
    pub title: String,
    #[serde(rename = "type")]
    pub item_type: ItemType,
    #[serde(default)]
    pub status: ItemStatus,
    #[serde(default)]
    pub student_resources: Vec<ResourceLink>,
    #[serde(default)]
    pub teacher_resources: Vec<ResourceLink>,
    #[serde(default)]
    pub assignments: Vec<AssignmentTemplate>,
}

impl CurriculumItem {
    /// Creates an item with a generated id, default status and no attachments.
    pub fn new(item_type: ItemType, title: impl Into<String>) -> Self {
        Self::with_id(CurriculumItemId::generate(), item_type, title)
    }

    pub fn with_id(id: CurriculumItemId, item_type: ItemType, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            item_type,
            status: ItemStatus::default(),
            student_resources: Vec::new(),
            teacher_resources: Vec::new(),
            assignments: Vec::new(),
        }
    }

    /// Copy of the item with every attachment removed, as kept in progress copies.
    pub fn without_content(&self) -> Self {
        Self {
            id: self.id.clone(),
            title: self.title.clone(),
            item_type: self.item_type,
            status: self.status,
            student_resources: Vec::new(),
            teacher_resources: Vec::new(),
            assignments: Vec::new(),
        }
    }

    /// Merges every field present in `patch` into this item.
    pub fn apply(&mut self, patch: ItemPatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(item_type) = patch.item_type {
            self.item_type = item_type;
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
        if let Some(resources) = patch.student_resources {
            self.student_resources = resources;
        }
        if let Some(resources) = patch.teacher_resources {
            self.teacher_resources = resources;
        }
        if let Some(assignments) = patch.assignments {
            self.assignments = assignments;
        }
    }
}

/// Partial update for a [`CurriculumItem`]. `None` fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemPatch {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default, rename = "type")]
    pub item_type: Option<ItemType>,
    #[serde(default)]
    pub status: Option<ItemStatus>,
    #[serde(default)]
    pub student_resources: Option<Vec<ResourceLink>>,
    #[serde(default)]
    pub teacher_resources: Option<Vec<ResourceLink>>,
    #[serde(default)]
    pub assignments: Option<Vec<AssignmentTemplate>>,
}

impl ItemPatch {
    pub fn title(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Self::default()
        }
    }

    pub fn status(status: ItemStatus) -> Self {
        Self {
            status: Some(status),
            ..Self::default()
        }
    }

    /// Returns true if the patch changes nothing.
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}
