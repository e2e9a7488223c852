//! Content attachments carried by curriculum nodes.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::{ContentId, ValidationError};

/// A titled URL attached to a node for student or teacher use.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceLink {
    pub id: ContentId,
    pub title: String,
    pub url: String,
}

impl ResourceLink {
    /// Creates a link with a freshly generated id.
    pub fn new(title: impl Into<String>, url: impl Into<String>) -> Self {
        Self::with_id(ContentId::generate(), title, url)
    }

    pub fn with_id(id: ContentId, title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            url: url.into(),
        }
    }
}

/// Gradable work associated with a node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssignmentTemplate {
    pub id: ContentId,
    pub title: String,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instructions: Option<String>,
}

impl AssignmentTemplate {
    /// Creates an assignment with a freshly generated id.
    pub fn new(
        title: impl Into<String>,
        url: impl Into<String>,
        instructions: Option<String>,
    ) -> Self {
        Self::with_id(ContentId::generate(), title, url, instructions)
    }

    pub fn with_id(
        id: ContentId,
        title: impl Into<String>,
        url: impl Into<String>,
        instructions: Option<String>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            url: url.into(),
            instructions: instructions.filter(|text| !text.is_empty()),
        }
    }
}

/// Audience of a resource link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceKind {
    Student,
    Teacher,
}

impl ResourceKind {
    /// Returns the attachment list this audience maps to.
    pub fn content_kind(&self) -> ContentKind {
        match self {
            ResourceKind::Student => ContentKind::StudentResource,
            ResourceKind::Teacher => ContentKind::TeacherResource,
        }
    }
}

/// Selects one of a node's three attachment lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentKind {
    StudentResource,
    TeacherResource,
    Assignment,
}

impl ContentKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentKind::StudentResource => "student_resource",
            ContentKind::TeacherResource => "teacher_resource",
            ContentKind::Assignment => "assignment",
        }
    }
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContentKind {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "student_resource" => Ok(ContentKind::StudentResource),
            "teacher_resource" => Ok(ContentKind::TeacherResource),
            "assignment" => Ok(ContentKind::Assignment),
            other => Err(ValidationError::invalid_format(
                "content_kind",
                format!("unknown content kind '{}'", other),
            )),
        }
    }
}
