//! Rows → tree, in two passes.
//!
//! Pass 1 creates a node for every structural row and indexes it by title.
//! Pass 2 links every row to the node its `parentTitle` names. Titles are
//! matched exactly, whitespace included; when several structural rows share a
//! title the one appearing last in the document wins.

use std::collections::{HashMap, HashSet};
use std::fmt;

use crate::domain::curriculum::{
    AssignmentTemplate, ContentKind, CurriculumItem, CurriculumTree, ItemType, ResourceLink,
};
use crate::domain::foundation::{ContentId, CurriculumItemId};

use super::row::CurriculumRow;

/// Result of [`build`]: the new tree plus non-fatal issues found on the way.
#[derive(Debug, Clone)]
pub struct BuildOutcome {
    pub tree: CurriculumTree,
    pub warnings: Vec<BuildWarning>,
}

/// A skipped or altered row. `row` is the 1-based position among data rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuildWarning {
    /// The row had no title and was skipped.
    EmptyTitle { row: usize },
    /// The record type column held an unknown value; the row was skipped.
    UnknownRecordType { row: usize, record_type: String },
    /// A structural row named a parent of the wrong level; the row was skipped.
    MisplacedItem {
        row: usize,
        title: String,
        item_type: ItemType,
        parent_type: ItemType,
    },
    /// The row reused an id from an earlier row; a fresh id was generated.
    DuplicateId { row: usize, id: String },
}

impl fmt::Display for BuildWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BuildWarning::EmptyTitle { row } => write!(f, "Row {}: title is empty, row skipped", row),
            BuildWarning::UnknownRecordType { row, record_type } => write!(
                f,
                "Row {}: unknown record type '{}', row skipped",
                row, record_type
            ),
            BuildWarning::MisplacedItem {
                row,
                title,
                item_type,
                parent_type,
            } => write!(
                f,
                "Row {}: {} '{}' cannot be placed under a {}, row skipped",
                row, item_type, title, parent_type
            ),
            BuildWarning::DuplicateId { row, id } => write!(
                f,
                "Row {}: id '{}' already used by an earlier row, a new id was assigned",
                row, id
            ),
        }
    }
}

/// Rebuilds a tree from rows.
///
/// Structural rows with an empty `parentTitle` become roots only when they
/// are Chapters. Rows whose non-empty `parentTitle` matches no structural
/// row are dropped without a warning, as are nodes that end up below a
/// dropped row.
pub fn build(rows: &[CurriculumRow]) -> BuildOutcome {
    let mut warnings = Vec::new();
    let mut nodes: Vec<Option<CurriculumItem>> = vec![None; rows.len()];
    let mut by_title: HashMap<&str, usize> = HashMap::new();
    let mut used_ids: HashSet<String> = HashSet::new();
    let mut skipped = vec![false; rows.len()];

    // Pass 1: create structural nodes and index them by title.
    for (index, row) in rows.iter().enumerate() {
        let position = index + 1;

        if row.title.is_empty() {
            warnings.push(BuildWarning::EmptyTitle { row: position });
            skipped[index] = true;
            continue;
        }

        let Some(kind) = row.record_kind() else {
            warnings.push(BuildWarning::UnknownRecordType {
                row: position,
                record_type: row.record_type.clone(),
            });
            skipped[index] = true;
            continue;
        };

        let Some(item_type) = kind.item_type() else {
            continue;
        };

        let id = match CurriculumItemId::new(row.id.trim()) {
            Ok(id) if used_ids.contains(id.as_str()) => {
                warnings.push(BuildWarning::DuplicateId {
                    row: position,
                    id: id.to_string(),
                });
                CurriculumItemId::generate()
            }
            Ok(id) => id,
            Err(_) => CurriculumItemId::generate(),
        };
        used_ids.insert(id.to_string());

        nodes[index] = Some(CurriculumItem::with_id(id, item_type, row.title.as_str()));
        by_title.insert(row.title.as_str(), index);
    }

    // Pass 2: link rows to their parents.
    let mut roots: Vec<usize> = Vec::new();
    let mut children: HashMap<usize, Vec<usize>> = HashMap::new();

    for (index, row) in rows.iter().enumerate() {
        if skipped[index] {
            continue;
        }
        let Some(kind) = row.record_kind() else {
            continue;
        };

        let parent_title = row.parent_title.as_str();
        let parent = by_title.get(parent_title).copied();

        if let Some(item_type) = kind.item_type() {
            if parent_title.is_empty() {
                if item_type.is_root_level() {
                    roots.push(index);
                } else {
                    tracing::debug!(row = index + 1, title = %row.title, "Dropping non-chapter row without parent");
                }
                continue;
            }

            let Some(parent_index) = parent else {
                tracing::debug!(row = index + 1, parent = %parent_title, "Dropping row with unknown parent");
                continue;
            };

            let parent_type = match &nodes[parent_index] {
                Some(parent_item) => parent_item.item_type,
                None => continue,
            };
            if parent_type.can_contain(item_type) {
                children.entry(parent_index).or_default().push(index);
            } else {
                warnings.push(BuildWarning::MisplacedItem {
                    row: index + 1,
                    title: row.title.clone(),
                    item_type,
                    parent_type,
                });
            }
        } else if let Some(content_kind) = kind.content_kind() {
            let parent_item = match parent {
                Some(parent_index) => nodes[parent_index].as_mut(),
                None => None,
            };
            let Some(parent_item) = parent_item else {
                tracing::debug!(row = index + 1, parent = %parent_title, "Dropping content row with unknown parent");
                continue;
            };
            attach(parent_item, content_kind, row);
        }
    }

    BuildOutcome {
        tree: assemble(nodes, &roots, &children),
        warnings,
    }
}

fn attach(item: &mut CurriculumItem, kind: ContentKind, row: &CurriculumRow) {
    let id = ContentId::new(row.id.trim()).unwrap_or_else(|_| ContentId::generate());
    match kind {
        ContentKind::StudentResource => item
            .student_resources
            .push(ResourceLink::with_id(id, row.title.as_str(), row.url.as_str())),
        ContentKind::TeacherResource => item
            .teacher_resources
            .push(ResourceLink::with_id(id, row.title.as_str(), row.url.as_str())),
        ContentKind::Assignment => item.assignments.push(AssignmentTemplate::with_id(
            id,
            row.title.as_str(),
            row.url.as_str(),
            Some(row.instructions.clone()),
        )),
    }
}

/// Inserts every node reachable from `roots`, parents before children.
fn assemble(
    mut nodes: Vec<Option<CurriculumItem>>,
    roots: &[usize],
    children: &HashMap<usize, Vec<usize>>,
) -> CurriculumTree {
    let mut tree = CurriculumTree::new();
    let mut stack: Vec<(Option<CurriculumItemId>, usize)> =
        roots.iter().rev().map(|&index| (None, index)).collect();

    while let Some((parent, index)) = stack.pop() {
        let Some(item) = nodes[index].take() else {
            continue;
        };
        let id = item.id.clone();

        if let Err(err) = tree.insert_in_place(parent.as_ref(), item) {
            tracing::warn!(error = %err, "Skipping node while assembling imported tree");
            continue;
        }

        if let Some(kids) = children.get(&index) {
            for &child in kids.iter().rev() {
                stack.push((Some(id.clone()), child));
            }
        }
    }
    tree
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::interchange::RecordType;

    fn structural(id: &str, parent: &str, kind: RecordType, title: &str) -> CurriculumRow {
        CurriculumRow::new(id, parent, kind, title)
    }

    fn titles(tree: &CurriculumTree) -> Vec<String> {
        tree.pre_order().map(|(_, item)| item.title.clone()).collect()
    }

    #[test]
    fn builds_nested_tree_from_rows() {
        let rows = vec![
            structural("c1", "", RecordType::Chapter, "Intro"),
            structural("t1", "Intro", RecordType::Topic, "Basics"),
            structural("s1", "Basics", RecordType::SubTopic, "Detail"),
            structural("c2", "", RecordType::Chapter, "Next"),
        ];

        let outcome = build(&rows);

        assert!(outcome.warnings.is_empty());
        assert_eq!(titles(&outcome.tree), vec!["Intro", "Basics", "Detail", "Next"]);
        let s1 = CurriculumItemId::new("s1").unwrap();
        assert_eq!(outcome.tree.parent(&s1), Some(&CurriculumItemId::new("t1").unwrap()));
    }

    #[test]
    fn children_may_precede_their_parent_row() {
        let rows = vec![
            structural("t1", "Intro", RecordType::Topic, "Basics"),
            structural("c1", "", RecordType::Chapter, "Intro"),
        ];

        let tree = build(&rows).tree;
        assert_eq!(titles(&tree), vec!["Intro", "Basics"]);
    }

    #[test]
    fn blank_ids_are_generated() {
        let outcome = build(&[structural("", "", RecordType::Chapter, "Intro")]);
        let (_, item) = outcome.tree.pre_order().next().unwrap();
        assert!(!item.id.as_str().is_empty());
    }

    #[test]
    fn empty_title_rows_are_skipped_with_warning() {
        let rows = vec![
            structural("c1", "", RecordType::Chapter, "Intro"),
            structural("c2", "", RecordType::Chapter, ""),
        ];

        let outcome = build(&rows);

        assert_eq!(outcome.tree.len(), 1);
        assert_eq!(outcome.warnings, vec![BuildWarning::EmptyTitle { row: 2 }]);
    }

    #[test]
    fn whitespace_only_title_is_kept() {
        let rows = vec![
            structural("c1", "", RecordType::Chapter, "  "),
            structural("t1", "  ", RecordType::Topic, "Basics"),
        ];

        let outcome = build(&rows);

        assert!(outcome.warnings.is_empty());
        assert_eq!(titles(&outcome.tree), vec!["  ", "Basics"]);
    }

    #[test]
    fn titles_differing_only_in_whitespace_stay_distinct() {
        let rows = vec![
            structural("c1", "", RecordType::Chapter, "Intro"),
            structural("r1", "Intro", RecordType::StudentResource, "Slides").with_url("https://s"),
            structural("c2", "", RecordType::Chapter, "Intro "),
            structural("t1", "Intro ", RecordType::Topic, "Basics"),
        ];

        let tree = build(&rows).tree;
        let first = tree.find(&CurriculumItemId::new("c1").unwrap()).unwrap();
        let second = tree.find(&CurriculumItemId::new("c2").unwrap()).unwrap();

        assert_eq!(first.student_resources.len(), 1);
        assert!(second.student_resources.is_empty());
        assert!(tree.children(&first.id).is_empty());
        assert_eq!(tree.children(&second.id), &[CurriculumItemId::new("t1").unwrap()]);
    }

    #[test]
    fn content_rows_attach_to_parent_by_title() {
        let rows = vec![
            structural("c1", "", RecordType::Chapter, "Intro"),
            structural("r1", "Intro", RecordType::StudentResource, "Slides").with_url("https://s"),
            structural("r2", "Intro", RecordType::TeacherResource, "Guide").with_url("https://g"),
            structural("a1", "Intro", RecordType::Assignment, "Quiz")
                .with_url("https://q")
                .with_instructions("Answer all"),
        ];

        let tree = build(&rows).tree;
        let chapter = tree.find(&CurriculumItemId::new("c1").unwrap()).unwrap();

        assert_eq!(chapter.student_resources[0].title, "Slides");
        assert_eq!(chapter.student_resources[0].id.as_str(), "r1");
        assert_eq!(chapter.teacher_resources[0].url, "https://g");
        assert_eq!(chapter.assignments[0].instructions.as_deref(), Some("Answer all"));
    }

    #[test]
    fn assignment_without_instructions_has_none() {
        let rows = vec![
            structural("c1", "", RecordType::Chapter, "Intro"),
            structural("a1", "Intro", RecordType::Assignment, "Quiz"),
        ];
        let tree = build(&rows).tree;
        let chapter = tree.find(&CurriculumItemId::new("c1").unwrap()).unwrap();
        assert_eq!(chapter.assignments[0].instructions, None);
    }

    #[test]
    fn content_with_unknown_parent_is_dropped_silently() {
        let rows = vec![
            structural("c1", "", RecordType::Chapter, "Intro"),
            structural("r1", "Nowhere", RecordType::StudentResource, "Slides"),
        ];

        let outcome = build(&rows);

        assert!(outcome.warnings.is_empty());
        let chapter = outcome.tree.find(&CurriculumItemId::new("c1").unwrap()).unwrap();
        assert!(chapter.student_resources.is_empty());
    }

    #[test]
    fn structural_row_with_unknown_parent_is_not_promoted() {
        let rows = vec![
            structural("c1", "", RecordType::Chapter, "Intro"),
            structural("c2", "Ghost", RecordType::Chapter, "Orphan"),
            structural("t1", "Ghost", RecordType::Topic, "Lost"),
        ];

        let tree = build(&rows).tree;
        assert_eq!(titles(&tree), vec!["Intro"]);
    }

    #[test]
    fn topic_without_parent_title_is_dropped() {
        let tree = build(&[structural("t1", "", RecordType::Topic, "Floating")]).tree;
        assert!(tree.is_empty());
    }

    #[test]
    fn descendants_of_dropped_rows_are_discarded() {
        let rows = vec![
            structural("t1", "Ghost", RecordType::Topic, "Lost"),
            structural("s1", "Lost", RecordType::SubTopic, "Also lost"),
        ];
        assert!(build(&rows).tree.is_empty());
    }

    #[test]
    fn misplaced_levels_are_skipped_with_warning() {
        let rows = vec![
            structural("c1", "", RecordType::Chapter, "Intro"),
            structural("s1", "Intro", RecordType::SubTopic, "Too shallow"),
        ];

        let outcome = build(&rows);

        assert_eq!(titles(&outcome.tree), vec!["Intro"]);
        assert_eq!(
            outcome.warnings,
            vec![BuildWarning::MisplacedItem {
                row: 2,
                title: "Too shallow".to_string(),
                item_type: ItemType::SubTopic,
                parent_type: ItemType::Chapter,
            }]
        );
    }

    #[test]
    fn self_referencing_row_is_rejected() {
        let rows = vec![structural("t1", "Loop", RecordType::Topic, "Loop")];
        let outcome = build(&rows);
        assert!(outcome.tree.is_empty());
        assert_eq!(outcome.warnings.len(), 1);
    }

    #[test]
    fn unknown_record_types_are_skipped_with_warning() {
        let mut odd = structural("x", "", RecordType::Chapter, "Video");
        odd.record_type = "Video".to_string();

        let outcome = build(&[odd]);

        assert!(outcome.tree.is_empty());
        assert_eq!(
            outcome.warnings,
            vec![BuildWarning::UnknownRecordType {
                row: 1,
                record_type: "Video".to_string()
            }]
        );
    }

    #[test]
    fn repeated_ids_get_fresh_ones() {
        let rows = vec![
            structural("dup", "", RecordType::Chapter, "First"),
            structural("dup", "", RecordType::Chapter, "Second"),
        ];

        let outcome = build(&rows);

        assert_eq!(outcome.tree.len(), 2);
        assert_eq!(
            outcome.warnings,
            vec![BuildWarning::DuplicateId {
                row: 2,
                id: "dup".to_string()
            }]
        );
    }

    #[test]
    fn duplicate_titles_link_to_last_indexed_node() {
        let rows = vec![
            structural("c1", "", RecordType::Chapter, "Intro"),
            structural("c2", "", RecordType::Chapter, "Intro"),
            structural("r1", "Intro", RecordType::StudentResource, "Slides"),
        ];

        let outcome = build(&rows);

        assert_eq!(outcome.tree.roots().len(), 2);
        let attached: usize = outcome
            .tree
            .pre_order()
            .map(|(_, item)| item.student_resources.len())
            .sum();
        assert_eq!(attached, 1);
    }

    #[test]
    fn warnings_render_readably() {
        let warning = BuildWarning::EmptyTitle { row: 4 };
        assert_eq!(warning.to_string(), "Row 4: title is empty, row skipped");
    }
}
