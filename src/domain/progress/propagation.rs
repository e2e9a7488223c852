//! Status propagation over a curriculum tree.
//!
//! Two explicit passes: a pre-order cascade pushes Completed down into the
//! changed node's subtree, then a post-order aggregate recomputes every
//! internal node from its children.

use crate::domain::curriculum::{CurriculumTree, ItemStatus};
use crate::domain::foundation::{CurriculumItemId, Percentage};

/// Sets one node's status and propagates it. Unknown ids return the tree
/// unchanged.
pub fn set_status(
    tree: &CurriculumTree,
    id: &CurriculumItemId,
    status: ItemStatus,
) -> CurriculumTree {
    if !tree.contains(id) {
        return tree.clone();
    }

    let mut next = tree.clone();
    next.set_status_in_place(id, status);

    if status.is_complete() {
        cascade_completed(&mut next, id);
    }
    aggregate(&mut next);
    next
}

/// Marks every descendant of `id` Completed, parents before children.
fn cascade_completed(tree: &mut CurriculumTree, id: &CurriculumItemId) {
    for descendant in tree.descendant_ids(id) {
        tree.set_status_in_place(&descendant, ItemStatus::Completed);
    }
}

/// Recomputes every node that has children from its children's statuses.
/// Post-order guarantees children are final before their parent is read.
fn aggregate(tree: &mut CurriculumTree) {
    for id in tree.post_order_ids() {
        let children = tree.children(&id);
        if children.is_empty() {
            continue;
        }
        let derived = ItemStatus::aggregate(
            children
                .iter()
                .filter_map(|child| tree.find(child))
                .map(|item| item.status),
        );
        tree.set_status_in_place(&id, derived);
    }
}

/// Share of nodes, at every level, that are Completed.
pub fn percent_complete(tree: &CurriculumTree) -> Percentage {
    let completed = tree
        .pre_order()
        .filter(|(_, item)| item.status.is_complete())
        .count();
    Percentage::from_ratio(completed, tree.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::curriculum::{CurriculumItem, ItemType};
    use proptest::prelude::*;

    fn id(s: &str) -> CurriculumItemId {
        CurriculumItemId::new(s).unwrap()
    }

    fn node(s: &str, item_type: ItemType) -> CurriculumItem {
        CurriculumItem::with_id(id(s), item_type, s)
    }

    fn status_of(tree: &CurriculumTree, s: &str) -> ItemStatus {
        tree.find(&id(s)).unwrap().status
    }

    /// c1 → (t1 → (s1, s2), t2)
    fn sample() -> CurriculumTree {
        CurriculumTree::new()
            .insert(None, node("c1", ItemType::Chapter))
            .and_then(|t| t.insert(Some(&id("c1")), node("t1", ItemType::Topic)))
            .and_then(|t| t.insert(Some(&id("t1")), node("s1", ItemType::SubTopic)))
            .and_then(|t| t.insert(Some(&id("t1")), node("s2", ItemType::SubTopic)))
            .and_then(|t| t.insert(Some(&id("c1")), node("t2", ItemType::Topic)))
            .unwrap()
    }

    #[test]
    fn completing_only_child_completes_parent() {
        let tree = CurriculumTree::new()
            .insert(None, node("c1", ItemType::Chapter))
            .and_then(|t| t.insert(Some(&id("c1")), node("t1", ItemType::Topic)))
            .unwrap();

        let tree = set_status(&tree, &id("t1"), ItemStatus::Completed);

        assert_eq!(status_of(&tree, "t1"), ItemStatus::Completed);
        assert_eq!(status_of(&tree, "c1"), ItemStatus::Completed);
    }

    #[test]
    fn mixed_children_leave_parent_in_progress() {
        let tree = set_status(&sample(), &id("t2"), ItemStatus::Completed);

        assert_eq!(status_of(&tree, "t1"), ItemStatus::Locked);
        assert_eq!(status_of(&tree, "c1"), ItemStatus::InProgress);
    }

    #[test]
    fn completing_a_subtree_cascades_down() {
        let tree = set_status(&sample(), &id("t1"), ItemStatus::Completed);

        assert_eq!(status_of(&tree, "s1"), ItemStatus::Completed);
        assert_eq!(status_of(&tree, "s2"), ItemStatus::Completed);
        assert_eq!(status_of(&tree, "c1"), ItemStatus::InProgress);
    }

    #[test]
    fn completing_root_completes_everything() {
        let tree = set_status(&sample(), &id("c1"), ItemStatus::Completed);
        assert!(tree.pre_order().all(|(_, item)| item.status.is_complete()));
        assert_eq!(percent_complete(&tree).value(), 100);
    }

    #[test]
    fn starting_a_leaf_marks_ancestors_in_progress() {
        let tree = set_status(&sample(), &id("s1"), ItemStatus::InProgress);

        assert_eq!(status_of(&tree, "t1"), ItemStatus::InProgress);
        assert_eq!(status_of(&tree, "c1"), ItemStatus::InProgress);
        assert_eq!(status_of(&tree, "t2"), ItemStatus::Locked);
    }

    #[test]
    fn internal_status_is_overridden_by_children() {
        let tree = set_status(&sample(), &id("t1"), ItemStatus::InProgress);
        assert_eq!(status_of(&tree, "t1"), ItemStatus::Locked);
    }

    #[test]
    fn reopening_a_leaf_reverts_completed_ancestors() {
        let done = set_status(&sample(), &id("c1"), ItemStatus::Completed);
        let tree = set_status(&done, &id("s2"), ItemStatus::InProgress);

        assert_eq!(status_of(&tree, "t1"), ItemStatus::InProgress);
        assert_eq!(status_of(&tree, "c1"), ItemStatus::InProgress);
    }

    #[test]
    fn unknown_id_leaves_tree_unchanged() {
        let tree = sample();
        assert_eq!(set_status(&tree, &id("nope"), ItemStatus::Completed), tree);
    }

    #[test]
    fn set_status_does_not_touch_previous_value() {
        let before = sample();
        let _ = set_status(&before, &id("c1"), ItemStatus::Completed);
        assert_eq!(status_of(&before, "s1"), ItemStatus::Locked);
    }

    #[test]
    fn percent_counts_every_level() {
        // s1, s2 complete → t1 complete; 3 of 5 nodes
        let tree = set_status(&sample(), &id("t1"), ItemStatus::Completed);
        assert_eq!(percent_complete(&tree).value(), 60);
    }

    #[test]
    fn percent_of_empty_tree_is_zero() {
        assert_eq!(percent_complete(&CurriculumTree::new()), Percentage::ZERO);
    }

    #[test]
    fn percent_rounds_half_up() {
        // 1 of 8 = 12.5%
        let mut tree = CurriculumTree::new();
        for n in 0..8 {
            tree = tree
                .insert(None, node(&format!("c{}", n), ItemType::Chapter))
                .unwrap();
        }
        let tree = set_status(&tree, &id("c0"), ItemStatus::Completed);
        assert_eq!(percent_complete(&tree).value(), 13);
    }

    // ───────────────────────────────────────────────────────────────
    // properties
    // ───────────────────────────────────────────────────────────────

    fn arb_status() -> impl Strategy<Value = ItemStatus> {
        prop_oneof![
            Just(ItemStatus::Locked),
            Just(ItemStatus::InProgress),
            Just(ItemStatus::Completed),
        ]
    }

    /// Per chapter, the number of sub-topics under each of its topics.
    /// Chapters may have no topics and topics may have no sub-topics.
    fn arb_tree() -> impl Strategy<Value = CurriculumTree> {
        let chapter = proptest::collection::vec(0usize..4, 0..4);
        proptest::collection::vec(chapter, 1..4).prop_map(|chapters| {
            let mut tree = CurriculumTree::new();
            for (c, topics) in chapters.iter().enumerate() {
                let chapter_id = format!("c{}", c);
                tree = tree.insert(None, node(&chapter_id, ItemType::Chapter)).unwrap();
                for (t, subtopics) in topics.iter().enumerate() {
                    let topic_id = format!("{}t{}", chapter_id, t);
                    tree = tree
                        .insert(Some(&id(&chapter_id)), node(&topic_id, ItemType::Topic))
                        .unwrap();
                    for s in 0..*subtopics {
                        let sub_id = format!("{}s{}", topic_id, s);
                        tree = tree
                            .insert(Some(&id(&topic_id)), node(&sub_id, ItemType::SubTopic))
                            .unwrap();
                    }
                }
            }
            tree
        })
    }

    /// A generated tree plus a sequence of status changes, each naming a
    /// node by its position in pre-order.
    fn arb_history() -> impl Strategy<Value = (CurriculumTree, Vec<(usize, ItemStatus)>)> {
        arb_tree().prop_flat_map(|tree| {
            let len = tree.len();
            let changes = proptest::collection::vec((0..len, arb_status()), 0..12);
            (Just(tree), changes)
        })
    }

    fn all_ids(tree: &CurriculumTree) -> Vec<CurriculumItemId> {
        tree.pre_order().map(|(_, item)| item.id.clone()).collect()
    }

    fn replay(tree: &CurriculumTree, changes: &[(usize, ItemStatus)]) -> CurriculumTree {
        let ids = all_ids(tree);
        changes
            .iter()
            .fold(tree.clone(), |acc, (index, status)| set_status(&acc, &ids[*index], *status))
    }

    proptest! {
        #[test]
        fn completed_cascades_to_all_descendants(
            (tree, changes) in arb_history(),
            target in any::<proptest::sample::Index>(),
        ) {
            let ids = all_ids(&tree);
            let target = &ids[target.index(ids.len())];

            let tree = set_status(&replay(&tree, &changes), target, ItemStatus::Completed);

            prop_assert!(tree.find(target).unwrap().status.is_complete());
            for descendant in tree.descendant_ids(target) {
                prop_assert!(tree.find(&descendant).unwrap().status.is_complete());
            }
        }

        #[test]
        fn internal_nodes_agree_with_children((tree, changes) in arb_history()) {
            let tree = replay(&tree, &changes);

            for id in all_ids(&tree) {
                let children: Vec<ItemStatus> =
                    tree.child_items(&id).map(|item| item.status).collect();
                if children.is_empty() {
                    continue;
                }
                let own = tree.find(&id).unwrap().status;
                prop_assert_eq!(own, ItemStatus::aggregate(children));
            }
        }

        #[test]
        fn leaves_keep_the_status_they_were_given((tree, changes) in arb_history()) {
            let ids = all_ids(&tree);
            let updated = replay(&tree, &changes);

            if let Some((index, status)) = changes.last() {
                let target = &ids[*index];
                if updated.children(target).is_empty() {
                    prop_assert_eq!(updated.find(target).unwrap().status, *status);
                }
            }
        }

        #[test]
        fn percent_stays_within_bounds((tree, changes) in arb_history()) {
            let tree = replay(&tree, &changes);
            let completed = tree.pre_order().filter(|(_, item)| item.status.is_complete()).count();

            prop_assert!(percent_complete(&tree).value() <= 100);
            prop_assert_eq!(percent_complete(&tree), Percentage::from_ratio(completed, tree.len()));
        }
    }
}
