//! Flat row shape shared by export and import.

use std::fmt;
use std::str::FromStr;

use crate::domain::curriculum::{ContentKind, ItemType};
use crate::domain::foundation::ValidationError;

/// Column names in document order.
pub const HEADER: [&str; 6] = ["id", "parentTitle", "record_type", "title", "url", "instructions"];

/// One line of a curriculum document.
///
/// Every field is kept as raw text so that decoding never rejects a row;
/// [`CurriculumRow::record_kind`] interprets the record type.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CurriculumRow {
    pub id: String,
    pub parent_title: String,
    pub record_type: String,
    pub title: String,
    pub url: String,
    pub instructions: String,
}

impl CurriculumRow {
    /// Creates a row for the given record type with empty url and instructions.
    pub fn new(
        id: impl Into<String>,
        parent_title: impl Into<String>,
        record_type: RecordType,
        title: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            parent_title: parent_title.into(),
            record_type: record_type.as_str().to_string(),
            title: title.into(),
            url: String::new(),
            instructions: String::new(),
        }
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    pub fn with_instructions(mut self, instructions: impl Into<String>) -> Self {
        self.instructions = instructions.into();
        self
    }

    /// Parses the record type column, `None` if it is not a known type.
    pub fn record_kind(&self) -> Option<RecordType> {
        self.record_type.parse().ok()
    }

    /// Field values in [`HEADER`] order.
    pub fn fields(&self) -> [&str; 6] {
        [
            self.id.as_str(),
            self.parent_title.as_str(),
            self.record_type.as_str(),
            self.title.as_str(),
            self.url.as_str(),
            self.instructions.as_str(),
        ]
    }

    /// Stores `value` under the named column. Unknown columns are ignored.
    pub(crate) fn set_column(&mut self, column: &str, value: String) {
        match column {
            "id" => self.id = value,
            "parentTitle" => self.parent_title = value,
            "record_type" => self.record_type = value,
            "title" => self.title = value,
            "url" => self.url = value,
            "instructions" => self.instructions = value,
            _ => {}
        }
    }
}

/// The six kinds of rows a curriculum document may contain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordType {
    Chapter,
    Topic,
    SubTopic,
    StudentResource,
    TeacherResource,
    Assignment,
}

impl RecordType {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordType::Chapter => "Chapter",
            RecordType::Topic => "Topic",
            RecordType::SubTopic => "Sub-Topic",
            RecordType::StudentResource => "StudentResource",
            RecordType::TeacherResource => "TeacherResource",
            RecordType::Assignment => "Assignment",
        }
    }

    /// Tree level for structural rows, `None` for attachments.
    pub fn item_type(&self) -> Option<ItemType> {
        match self {
            RecordType::Chapter => Some(ItemType::Chapter),
            RecordType::Topic => Some(ItemType::Topic),
            RecordType::SubTopic => Some(ItemType::SubTopic),
            _ => None,
        }
    }

    /// Attachment list for content rows, `None` for structural rows.
    pub fn content_kind(&self) -> Option<ContentKind> {
        match self {
            RecordType::StudentResource => Some(ContentKind::StudentResource),
            RecordType::TeacherResource => Some(ContentKind::TeacherResource),
            RecordType::Assignment => Some(ContentKind::Assignment),
            _ => None,
        }
    }
}

impl From<ItemType> for RecordType {
    fn from(item_type: ItemType) -> Self {
        match item_type {
            ItemType::Chapter => RecordType::Chapter,
            ItemType::Topic => RecordType::Topic,
            ItemType::SubTopic => RecordType::SubTopic,
        }
    }
}

impl From<ContentKind> for RecordType {
    fn from(kind: ContentKind) -> Self {
        match kind {
            ContentKind::StudentResource => RecordType::StudentResource,
            ContentKind::TeacherResource => RecordType::TeacherResource,
            ContentKind::Assignment => RecordType::Assignment,
        }
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RecordType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "Chapter" => Ok(RecordType::Chapter),
            "Topic" => Ok(RecordType::Topic),
            "Sub-Topic" => Ok(RecordType::SubTopic),
            "StudentResource" => Ok(RecordType::StudentResource),
            "TeacherResource" => Ok(RecordType::TeacherResource),
            "Assignment" => Ok(RecordType::Assignment),
            other => Err(ValidationError::invalid_format(
                "record_type",
                format!("unknown record type '{}'", other),
            )),
        }
    }
}
