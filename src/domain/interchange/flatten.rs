//! Tree → rows.

use crate::domain::curriculum::CurriculumTree;

use super::row::{CurriculumRow, RecordType};

/// Flattens a tree into document rows in pre-order.
///
/// Each node's row is followed by its student resources, teacher resources
/// and assignments, each pointing at the node's title, before any of the
/// node's children.
pub fn flatten(tree: &CurriculumTree) -> Vec<CurriculumRow> {
    let mut rows = Vec::new();

    for (_, item) in tree.pre_order() {
        let parent_title = tree
            .parent_item(&item.id)
            .map(|parent| parent.title.clone())
            .unwrap_or_default();

        rows.push(CurriculumRow::new(
            item.id.as_str(),
            parent_title,
            RecordType::from(item.item_type),
            item.title.as_str(),
        ));

        for link in &item.student_resources {
            rows.push(
                CurriculumRow::new(
                    link.id.as_str(),
                    item.title.as_str(),
                    RecordType::StudentResource,
                    link.title.as_str(),
                )
                .with_url(link.url.as_str()),
            );
        }
        for link in &item.teacher_resources {
            rows.push(
                CurriculumRow::new(
                    link.id.as_str(),
                    item.title.as_str(),
                    RecordType::TeacherResource,
                    link.title.as_str(),
                )
                .with_url(link.url.as_str()),
            );
        }
        for assignment in &item.assignments {
            rows.push(
                CurriculumRow::new(
                    assignment.id.as_str(),
                    item.title.as_str(),
                    RecordType::Assignment,
                    assignment.title.as_str(),
                )
                .with_url(assignment.url.as_str())
                .with_instructions(assignment.instructions.clone().unwrap_or_default()),
            );
        }
    }

    rows
}
