//! Level rules for authoring edits.
//!
//! [`CurriculumTree`] does not enforce Chapter → Topic → Sub-Topic nesting;
//! authoring commands call these checks before mutating.

use crate::domain::foundation::{CurriculumItemId, DomainError, ErrorCode};

use super::{CurriculumTree, ItemType};

/// Checks that a node of `item_type` may be placed under `parent`.
///
/// # Errors
///
/// - `ItemNotFound` if `parent` is not in the tree
/// - `InvalidHierarchy` if the level does not fit
pub fn validate_placement(
    tree: &CurriculumTree,
    parent: Option<&CurriculumItemId>,
    item_type: ItemType,
) -> Result<(), DomainError> {
    match parent {
        None if item_type.is_root_level() => Ok(()),
        None => Err(invalid_hierarchy(format!(
            "A {} cannot be a top-level item",
            item_type
        ))),
        Some(parent_id) => {
            let parent = tree.find(parent_id).ok_or_else(|| item_not_found(parent_id))?;
            if parent.item_type.can_contain(item_type) {
                Ok(())
            } else {
                Err(invalid_hierarchy(format!(
                    "A {} cannot contain a {}",
                    parent.item_type, item_type
                )))
            }
        }
    }
}

/// Checks that the node `id` may change its level to `new_type` while
/// keeping its current parent and children.
pub fn validate_retype(
    tree: &CurriculumTree,
    id: &CurriculumItemId,
    new_type: ItemType,
) -> Result<(), DomainError> {
    let current = tree.find(id).ok_or_else(|| item_not_found(id))?;
    if current.item_type == new_type {
        return Ok(());
    }

    validate_placement(tree, tree.parent(id), new_type)?;

    if let Some(child) = tree
        .child_items(id)
        .find(|child| !new_type.can_contain(child.item_type))
    {
        return Err(invalid_hierarchy(format!(
            "A {} cannot contain its existing {} '{}'",
            new_type, child.item_type, child.title
        )));
    }
    Ok(())
}

fn item_not_found(id: &CurriculumItemId) -> DomainError {
    DomainError::new(ErrorCode::ItemNotFound, format!("Curriculum item not found: {}", id))
        .with_detail("item_id", id.to_string())
}

fn invalid_hierarchy(message: String) -> DomainError {
    DomainError::new(ErrorCode::InvalidHierarchy, message)
}
