//! Content attachment operations layered on [`CurriculumTree`].
//!
//! Each operation returns a new tree. Operations addressed to an unknown
//! node return the tree unchanged; existence checks belong to the caller.

use crate::domain::foundation::{ContentId, CurriculumItemId};

use super::{AssignmentTemplate, ContentKind, CurriculumTree, ResourceKind, ResourceLink};

impl CurriculumTree {
    /// Appends a resource link to the node's student or teacher list.
    ///
    /// Duplicate titles and urls are permitted.
    pub fn add_resource(
        &self,
        node_id: &CurriculumItemId,
        kind: ResourceKind,
        link: ResourceLink,
    ) -> Self {
        self.with_item(node_id, |item| match kind {
            ResourceKind::Student => item.student_resources.push(link),
            ResourceKind::Teacher => item.teacher_resources.push(link),
        })
    }

    /// Appends an assignment template to the node.
    pub fn add_assignment(&self, node_id: &CurriculumItemId, template: AssignmentTemplate) -> Self {
        self.with_item(node_id, |item| item.assignments.push(template))
    }

    /// Removes the attachment with `content_id` from the selected list.
    pub fn remove_content(
        &self,
        node_id: &CurriculumItemId,
        kind: ContentKind,
        content_id: &ContentId,
    ) -> Self {
        self.with_item(node_id, |item| match kind {
            ContentKind::StudentResource => {
                item.student_resources.retain(|link| &link.id != content_id)
            }
            ContentKind::TeacherResource => {
                item.teacher_resources.retain(|link| &link.id != content_id)
            }
            ContentKind::Assignment => item.assignments.retain(|a| &a.id != content_id),
        })
    }
}
