//! CurriculumTree - arena-backed Chapter → Topic → Sub-Topic hierarchy.
//!
//! Nodes live in a map keyed by their stable id; each node records its parent
//! and its ordered child ids, and the tree keeps the ordered list of roots.
//! Cloning a tree copies the id map and bumps one reference count per node;
//! node payloads are shared through `Arc`. Every mutating operation borrows
//! the tree and returns a new value in which only the nodes it touches are
//! deep-copied. Values handed out earlier never observe later edits.

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use crate::domain::foundation::{CurriculumItemId, DomainError, ErrorCode};

use super::{AssignmentTemplate, CurriculumItem, ItemPatch, ItemStatus, ItemType, ResourceLink};

#[derive(Debug, Clone, PartialEq, Eq)]
struct Node {
    item: CurriculumItem,
    parent: Option<CurriculumItemId>,
    children: Vec<CurriculumItemId>,
}

/// A program's curriculum: an ordered forest of Chapters.
///
/// Type legality (Chapter → Topic → Sub-Topic) is the caller's concern;
/// the tree itself only guarantees unique ids and an acyclic shape.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "Vec<OutlineNode>", try_from = "Vec<OutlineNode>")]
pub struct CurriculumTree {
    nodes: HashMap<CurriculumItemId, Arc<Node>>,
    roots: Vec<CurriculumItemId>,
}

impl CurriculumTree {
    /// Creates an empty tree.
    pub fn new() -> Self {
        Self::default()
    }

    // ───────────────────────────────────────────────────────────────
    // Queries
    // ───────────────────────────────────────────────────────────────

    /// Total number of nodes across all levels.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn contains(&self, id: &CurriculumItemId) -> bool {
        self.nodes.contains_key(id)
    }

    /// Looks up a node by id.
    pub fn find(&self, id: &CurriculumItemId) -> Option<&CurriculumItem> {
        self.nodes.get(id).map(|node| &node.item)
    }

    /// Ids of the root Chapters, in order.
    pub fn roots(&self) -> &[CurriculumItemId] {
        &self.roots
    }

    /// Ordered child ids of a node; empty for leaves and unknown ids.
    pub fn children(&self, id: &CurriculumItemId) -> &[CurriculumItemId] {
        self.nodes
            .get(id)
            .map(|node| node.children.as_slice())
            .unwrap_or(&[])
    }

    pub fn child_items<'a>(
        &'a self,
        id: &CurriculumItemId,
    ) -> impl Iterator<Item = &'a CurriculumItem> + 'a {
        self.children(id)
            .iter()
            .filter_map(move |child| self.find(child))
    }

    /// Parent id of a node, `None` for roots and unknown ids.
    pub fn parent(&self, id: &CurriculumItemId) -> Option<&CurriculumItemId> {
        self.nodes.get(id).and_then(|node| node.parent.as_ref())
    }

    pub fn parent_item(&self, id: &CurriculumItemId) -> Option<&CurriculumItem> {
        self.parent(id).and_then(|parent| self.find(parent))
    }

    /// Depth-first pre-order walk yielding `(depth, item)`, roots at depth 0.
    pub fn pre_order(&self) -> PreOrder<'_> {
        PreOrder {
            tree: self,
            stack: self.roots.iter().rev().map(|id| (0, id)).collect(),
        }
    }

    /// Ids of every node in post-order: children before their parent.
    pub fn post_order_ids(&self) -> Vec<CurriculumItemId> {
        let mut out = Vec::with_capacity(self.nodes.len());
        let mut stack: Vec<(&CurriculumItemId, bool)> =
            self.roots.iter().rev().map(|id| (id, false)).collect();

        while let Some((id, expanded)) = stack.pop() {
            if expanded {
                out.push(id.clone());
                continue;
            }
            stack.push((id, true));
            for child in self.children(id).iter().rev() {
                stack.push((child, false));
            }
        }
        out
    }

    /// Ids of every descendant of `id` in pre-order, excluding `id` itself.
    pub fn descendant_ids(&self, id: &CurriculumItemId) -> Vec<CurriculumItemId> {
        let mut out = Vec::new();
        let mut stack: Vec<&CurriculumItemId> = self.children(id).iter().rev().collect();
        while let Some(current) = stack.pop() {
            out.push(current.clone());
            stack.extend(self.children(current).iter().rev());
        }
        out
    }

    // ───────────────────────────────────────────────────────────────
    // Mutations (each returns a new tree)
    // ───────────────────────────────────────────────────────────────

    /// Appends `item` as a new root when `parent` is `None`, otherwise as the
    /// last child of `parent`.
    ///
    /// # Errors
    ///
    /// - `ItemNotFound` if `parent` is not in the tree
    /// - `DuplicateItemId` if `item.id` is already used
    pub fn insert(
        &self,
        parent: Option<&CurriculumItemId>,
        item: CurriculumItem,
    ) -> Result<Self, DomainError> {
        let mut next = self.clone();
        next.insert_in_place(parent, item)?;
        Ok(next)
    }

    /// Merges `patch` into the node with `id`. Unknown ids leave the tree unchanged.
    pub fn update(&self, id: &CurriculumItemId, patch: ItemPatch) -> Self {
        self.with_item(id, |item| item.apply(patch))
    }

    /// Removes the node with `id` and its whole subtree. Unknown ids are a no-op.
    pub fn delete(&self, id: &CurriculumItemId) -> Self {
        let Some(node) = self.nodes.get(id) else {
            return self.clone();
        };

        let mut next = self.clone();
        match &node.parent {
            Some(parent_id) => {
                if let Some(parent) = next.nodes.get_mut(parent_id) {
                    Arc::make_mut(parent).children.retain(|child| child != id);
                }
            }
            None => next.roots.retain(|root| root != id),
        }

        for descendant in self.descendant_ids(id) {
            next.nodes.remove(&descendant);
        }
        next.nodes.remove(id);
        next
    }

    /// Returns a copy of the tree with `f` applied to one node.
    ///
    /// Unknown ids leave the tree unchanged.
    pub fn with_item<F>(&self, id: &CurriculumItemId, f: F) -> Self
    where
        F: FnOnce(&mut CurriculumItem),
    {
        let mut next = self.clone();
        next.modify_in_place(id, f);
        next
    }

    /// Returns a tree of identical shape whose items are produced by `f`.
    ///
    /// `f` must keep each item's id.
    pub fn map_items<F>(&self, f: F) -> Self
    where
        F: Fn(&CurriculumItem) -> CurriculumItem,
    {
        let nodes = self
            .nodes
            .iter()
            .map(|(id, node)| {
                let mapped = Node {
                    item: f(&node.item),
                    parent: node.parent.clone(),
                    children: node.children.clone(),
                };
                (id.clone(), Arc::new(mapped))
            })
            .collect();

        Self {
            nodes,
            roots: self.roots.clone(),
        }
    }

    // ───────────────────────────────────────────────────────────────
    // In-place helpers for code that already owns a private copy
    // ───────────────────────────────────────────────────────────────

    pub(crate) fn insert_in_place(
        &mut self,
        parent: Option<&CurriculumItemId>,
        item: CurriculumItem,
    ) -> Result<(), DomainError> {
        if self.nodes.contains_key(&item.id) {
            return Err(DomainError::new(
                ErrorCode::DuplicateItemId,
                format!("Curriculum item id already in use: {}", item.id),
            )
            .with_detail("item_id", item.id.to_string()));
        }

        let id = item.id.clone();
        match parent {
            Some(parent_id) => {
                let parent_node = self.nodes.get_mut(parent_id).ok_or_else(|| {
                    DomainError::new(
                        ErrorCode::ItemNotFound,
                        format!("Parent item not found: {}", parent_id),
                    )
                    .with_detail("item_id", parent_id.to_string())
                })?;
                Arc::make_mut(parent_node).children.push(id.clone());
            }
            None => self.roots.push(id.clone()),
        }

        self.nodes.insert(
            id,
            Arc::new(Node {
                item,
                parent: parent.cloned(),
                children: Vec::new(),
            }),
        );
        Ok(())
    }

    /// Applies `f` to one node, returning false if the id is unknown.
    pub(crate) fn modify_in_place<F>(&mut self, id: &CurriculumItemId, f: F) -> bool
    where
        F: FnOnce(&mut CurriculumItem),
    {
        match self.nodes.get_mut(id) {
            Some(node) => {
                f(&mut Arc::make_mut(node).item);
                true
            }
            None => false,
        }
    }

    /// Overwrites a node's status without touching any other field.
    ///
    /// Skips the copy when the status is already correct so untouched
    /// nodes stay shared with earlier tree values.
    pub(crate) fn set_status_in_place(&mut self, id: &CurriculumItemId, status: ItemStatus) {
        if self.find(id).map(|item| item.status) == Some(status) {
            return;
        }
        self.modify_in_place(id, |item| item.status = status);
    }

    // ───────────────────────────────────────────────────────────────
    // Outline conversion
    // ───────────────────────────────────────────────────────────────

    /// Nested representation of the tree, used for persistence and responses.
    pub fn to_outline(&self) -> Vec<OutlineNode> {
        self.roots.iter().filter_map(|id| self.outline_of(id)).collect()
    }

    fn outline_of(&self, id: &CurriculumItemId) -> Option<OutlineNode> {
        let node = self.nodes.get(id)?;
        let item = &node.item;
        Some(OutlineNode {
            id: item.id.clone(),
            title: item.title.clone(),
            item_type: item.item_type,
            status: item.status,
            student_resources: item.student_resources.clone(),
            teacher_resources: item.teacher_resources.clone(),
            assignments: item.assignments.clone(),
            children: node
                .children
                .iter()
                .filter_map(|child| self.outline_of(child))
                .collect(),
        })
    }

    /// Builds a tree from a nested outline, rejecting repeated ids.
    pub fn from_outline(outline: Vec<OutlineNode>) -> Result<Self, DomainError> {
        let mut tree = Self::new();
        let mut stack: Vec<(Option<CurriculumItemId>, OutlineNode)> =
            outline.into_iter().rev().map(|node| (None, node)).collect();

        while let Some((parent, node)) = stack.pop() {
            let OutlineNode {
                id,
                title,
                item_type,
                status,
                student_resources,
                teacher_resources,
                assignments,
                children,
            } = node;

            let item = CurriculumItem {
                id: id.clone(),
                title,
                item_type,
                status,
                student_resources,
                teacher_resources,
                assignments,
            };
            tree.insert_in_place(parent.as_ref(), item)?;

            for child in children.into_iter().rev() {
                stack.push((Some(id.clone()), child));
            }
        }
        Ok(tree)
    }

    /// Titles that appear on more than one node; import links by title.
    pub fn duplicate_titles(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        let mut duplicates = Vec::new();
        for (_, item) in self.pre_order() {
            if !seen.insert(item.title.as_str()) && !duplicates.contains(&item.title) {
                duplicates.push(item.title.clone());
            }
        }
        duplicates
    }
}

/// Pre-order iterator over a [`CurriculumTree`].
pub struct PreOrder<'a> {
    tree: &'a CurriculumTree,
    stack: Vec<(usize, &'a CurriculumItemId)>,
}

impl<'a> Iterator for PreOrder<'a> {
    type Item = (usize, &'a CurriculumItem);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((depth, id)) = self.stack.pop() {
            let Some(node) = self.tree.nodes.get(id) else {
                continue;
            };
            for child in node.children.iter().rev() {
                self.stack.push((depth + 1, child));
            }
            return Some((depth, &node.item));
        }
        None
    }
}

/// One node of the nested tree representation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutlineNode {
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
    #[serde(default)]
    pub children: Vec<OutlineNode>,
}

impl From<CurriculumTree> for Vec<OutlineNode> {
    fn from(tree: CurriculumTree) -> Self {
        tree.to_outline()
    }
}

impl TryFrom<Vec<OutlineNode>> for CurriculumTree {
    type Error = DomainError;

    fn try_from(outline: Vec<OutlineNode>) -> Result<Self, Self::Error> {
        CurriculumTree::from_outline(outline)
    }
}
