//! ItemStatus enum for tracking completion of curriculum nodes.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Completion state of a node inside a progress projection.
///
/// In an authoring tree the status is always the default and carries no meaning.
/// Instructors may move a node between any two states; there is no automatic
/// unlocking of the next node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ItemStatus {
    #[default]
    Locked,
    InProgress,
    Completed,
}

impl ItemStatus {
    /// Returns true if the node is finished.
    pub fn is_complete(&self) -> bool {
        matches!(self, ItemStatus::Completed)
    }

    /// Returns true if work has begun on the node.
    pub fn is_started(&self) -> bool {
        !matches!(self, ItemStatus::Locked)
    }

    /// Derives a parent status from the statuses of its children.
    ///
    /// Completed when every child is Completed, InProgress when at least one
    /// child is started, Locked otherwise. Callers only aggregate nodes that
    /// have children; an empty input yields Locked.
    pub fn aggregate<I>(children: I) -> ItemStatus
    where
        I: IntoIterator<Item = ItemStatus>,
    {
        let mut seen_any = false;
        let mut all_complete = true;
        let mut any_started = false;

        for status in children {
            seen_any = true;
            all_complete &= status.is_complete();
            any_started |= status.is_started();
        }

        if seen_any && all_complete {
            ItemStatus::Completed
        } else if any_started {
            ItemStatus::InProgress
        } else {
            ItemStatus::Locked
        }
    }
}

impl fmt::Display for ItemStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ItemStatus::Locked => "Locked",
            ItemStatus::InProgress => "In Progress",
            ItemStatus::Completed => "Completed",
        };
        write!(f, "{}", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ItemStatus::*;

    #[test]
    fn default_is_locked() {
        assert_eq!(ItemStatus::default(), Locked);
    }

    #[test]
    fn aggregate_all_completed_is_completed() {
        assert_eq!(ItemStatus::aggregate([Completed, Completed]), Completed);
    }

    #[test]
    fn aggregate_mixed_completed_and_locked_is_in_progress() {
        assert_eq!(ItemStatus::aggregate([Completed, Locked]), InProgress);
    }

    #[test]
    fn aggregate_any_in_progress_is_in_progress() {
        assert_eq!(ItemStatus::aggregate([Locked, InProgress, Locked]), InProgress);
    }

    #[test]
    fn aggregate_all_locked_is_locked() {
        assert_eq!(ItemStatus::aggregate([Locked, Locked]), Locked);
    }

    #[test]
    fn aggregate_of_nothing_is_locked() {
        assert_eq!(ItemStatus::aggregate(std::iter::empty()), Locked);
    }

    #[test]
    fn display_works_correctly() {
        assert_eq!(format!("{}", InProgress), "In Progress");
        assert_eq!(format!("{}", Completed), "Completed");
    }

    #[test]
    fn serializes_to_snake_case_json() {
        assert_eq!(serde_json::to_string(&InProgress).unwrap(), "\"in_progress\"");
        let status: ItemStatus = serde_json::from_str("\"completed\"").unwrap();
        assert_eq!(status, Completed);
    }
}
