use crate::test_utils::{all_of, init_logging, Family, TestResult};
use crate::{BoxTree, Dirty, LayoutConfig, LayoutError, NodeId};

fn clean_family() -> Result<Family, LayoutError> {
    let mut family = Family::new()?;
    family.tree.set_subtree_dirty(family.root, Dirty::Clean)?;
    Ok(family)
}

fn nodes(tree: &mut BoxTree, count: usize) -> Vec<NodeId> {
    (0..count).map(|_| tree.new_node()).collect()
}

#[test]
fn test_structure_queries() -> TestResult {
    let family = Family::new()?;
    let tree = &family.tree;

    assert_eq!(tree.len(), 5);
    assert!(!tree.is_empty());
    assert_eq!(tree.children(family.root)?, &[family.child1, family.child2]);
    assert_eq!(tree.child_count(family.child1)?, 2);
    assert_eq!(tree.parent(family.grandchild1_2)?, Some(family.child1));
    assert!(tree.is_root(family.root)?);
    assert!(!tree.is_root(family.child2)?);
    assert_eq!(tree.root_of(family.grandchild1_1)?, family.root);
    assert_eq!(tree.root_of(family.root)?, family.root);

    let ancestors: Vec<NodeId> = tree.ancestors(family.grandchild1_1)?.collect();
    assert_eq!(ancestors, vec![family.child1, family.root]);

    let order: Vec<NodeId> = tree.descendants(family.root)?.collect();
    assert_eq!(
        order,
        vec![
            family.root,
            family.child1,
            family.grandchild1_1,
            family.grandchild1_2,
            family.child2,
        ]
    );
    Ok(())
}

#[test]
fn test_append_and_insert_keep_order() -> TestResult {
    init_logging();
    let mut tree = BoxTree::new();
    let ids = nodes(&mut tree, 4);
    let (parent, a, b, c) = (ids[0], ids[1], ids[2], ids[3]);

    tree.append_child(parent, a)?;
    tree.append_child(parent, c)?;
    tree.insert_child(parent, 1, b)?;
    assert_eq!(tree.children(parent)?, &[a, b, c]);

    // Re-appending an existing child moves it to the end.
    tree.append_child(parent, a)?;
    assert_eq!(tree.children(parent)?, &[b, c, a]);

    tree.insert_child(parent, 0, a)?;
    assert_eq!(tree.children(parent)?, &[a, b, c]);

    let stray = tree.new_node();
    assert_eq!(
        tree.insert_child(parent, 4, stray),
        Err(LayoutError::ChildIndexOutOfRange { index: 4, len: 3 })
    );
    assert!(tree.is_root(stray)?);
    Ok(())
}

#[test]
fn test_moving_a_child_updates_both_parents() -> TestResult {
    let mut family = clean_family()?;
    let tree = &mut family.tree;

    tree.append_child(family.child2, family.grandchild1_1)?;

    assert_eq!(tree.children(family.child1)?, &[family.grandchild1_2]);
    assert_eq!(tree.children(family.child2)?, &[family.grandchild1_1]);
    assert_eq!(tree.parent(family.grandchild1_1)?, Some(family.child2));
    // Both parents and the moved node need a new arrangement; the root does not.
    assert_eq!(
        family.states(),
        vec![Dirty::Clean, Dirty::Stale, Dirty::Stale, Dirty::Stale, Dirty::Clean]
    );
    Ok(())
}

#[test]
fn test_cycles_are_rejected() -> TestResult {
    let mut family = clean_family()?;
    let tree = &mut family.tree;

    assert_eq!(
        tree.append_child(family.grandchild1_1, family.root),
        Err(LayoutError::CyclicAttachment {
            parent: family.grandchild1_1,
            child: family.root,
        })
    );
    assert_eq!(
        tree.append_child(family.child1, family.child1),
        Err(LayoutError::SelfAttachment(family.child1))
    );
    assert_eq!(
        tree.set_children(family.child2, vec![family.root]),
        Err(LayoutError::CyclicAttachment {
            parent: family.child2,
            child: family.root,
        })
    );

    // Nothing changed.
    assert_eq!(tree.children(family.root)?, &[family.child1, family.child2]);
    assert_eq!(family.states(), all_of(Dirty::Clean));
    Ok(())
}

#[test]
fn test_remove_child_and_detach() -> TestResult {
    let mut family = clean_family()?;
    let tree = &mut family.tree;

    assert_eq!(
        tree.remove_child(family.child2, family.grandchild1_1),
        Err(LayoutError::NotAChild {
            parent: family.child2,
            child: family.grandchild1_1,
        })
    );

    tree.remove_child(family.root, family.child1)?;
    assert_eq!(tree.children(family.root)?, &[family.child2]);
    assert!(tree.is_root(family.child1)?);
    // The detached subtree keeps its own children.
    assert_eq!(tree.child_count(family.child1)?, 2);
    assert_eq!(
        family.states(),
        vec![Dirty::Stale, Dirty::Stale, Dirty::Clean, Dirty::Stale, Dirty::Stale]
    );

    assert_eq!(family.tree.detach(family.child1)?, None);
    assert_eq!(family.tree.detach(family.child2)?, Some(family.root));
    assert!(family.tree.children(family.root)?.is_empty());
    Ok(())
}

#[test]
fn test_set_children_replaces_list() -> TestResult {
    let mut family = clean_family()?;
    let extra = family.tree.new_node();
    let tree = &mut family.tree;

    tree.set_children(family.root, vec![extra, family.child2])?;

    assert_eq!(tree.children(family.root)?, &[extra, family.child2]);
    assert_eq!(tree.parent(extra)?, Some(family.root));
    assert!(tree.is_root(family.child1)?);

    assert_eq!(
        tree.set_children(family.root, vec![extra, extra]),
        Err(LayoutError::DuplicateChild(extra))
    );
    assert_eq!(tree.children(family.root)?, &[extra, family.child2]);
    Ok(())
}

#[test]
fn test_unchanged_structure_keeps_states() -> TestResult {
    let mut family = clean_family()?;
    let tree = &mut family.tree;

    tree.set_children(family.root, vec![family.child1, family.child2])?;
    tree.insert_child(family.root, 0, family.child1)?;
    tree.insert_child(family.child1, 1, family.grandchild1_2)?;
    tree.append_child(family.root, family.child2)?;

    assert_eq!(tree.children(family.root)?, &[family.child1, family.child2]);
    assert_eq!(family.states(), all_of(Dirty::Clean));
    Ok(())
}

#[test]
fn test_reordering_children_only_stales_parent() -> TestResult {
    let mut family = clean_family()?;
    let extra = family.tree.new_node();
    family.tree.set_dirty(extra, Dirty::Clean)?;
    let tree = &mut family.tree;

    tree.set_children(family.root, vec![family.child2, family.child1])?;
    assert_eq!(tree.children(family.root)?, &[family.child2, family.child1]);
    assert_eq!(
        family.states(),
        vec![Dirty::Stale, Dirty::Clean, Dirty::Clean, Dirty::Clean, Dirty::Clean]
    );

    // A newcomer is stale; the children that stay are not.
    family.tree.set_dirty(family.root, Dirty::Clean)?;
    family
        .tree
        .set_children(family.root, vec![family.child2, family.child1, extra])?;
    assert_eq!(family.tree.dirty(extra)?, Dirty::Stale);
    assert_eq!(
        family.states(),
        vec![Dirty::Stale, Dirty::Clean, Dirty::Clean, Dirty::Clean, Dirty::Clean]
    );
    Ok(())
}

#[test]
fn test_structure_edits_respect_in_progress() -> TestResult {
    let mut family = Family::new()?;
    let extra = family.tree.new_node();
    family.tree.set_dirty(extra, Dirty::Clean)?;

    family.tree.append_child(family.child2, extra)?;

    // The pass keeps every node it holds; only the newcomer is stale.
    assert_eq!(family.states(), all_of(Dirty::InProgress));
    assert_eq!(family.tree.dirty(extra)?, Dirty::Stale);
    Ok(())
}

#[test]
fn test_remove_node_invalidates_handles() -> TestResult {
    let mut family = clean_family()?;

    let removed = family.tree.remove_node(family.child1)?;
    assert_eq!(removed, 3);
    assert_eq!(family.tree.len(), 2);
    assert_eq!(family.tree.children(family.root)?, &[family.child2]);
    assert!(!family.tree.contains(family.grandchild1_2));

    assert_eq!(
        family.tree.layout(family.child1).err(),
        Some(LayoutError::UnknownNode(family.child1))
    );
    assert!(family.tree.layout_mut(family.grandchild1_1).is_err());
    assert!(family.tree.intrinsic_mut(family.grandchild1_1).is_err());

    // Slots are reused, but the old handles stay dead.
    let reused = family.tree.new_node();
    assert!(family.tree.contains(reused));
    assert!(!family.tree.contains(family.child1));
    assert_ne!(reused, family.child1);
    assert_eq!(family.tree.dirty(reused)?, Dirty::Stale);
    assert_eq!(family.tree.layout(reused)?.content_width(), 0.0);
    Ok(())
}

#[test]
fn test_set_dirty_is_local_and_subtree_dirty_is_not() -> TestResult {
    let mut family = clean_family()?;

    family.tree.set_dirty(family.child1, Dirty::InProgress)?;
    assert_eq!(
        family.states(),
        vec![Dirty::Clean, Dirty::InProgress, Dirty::Clean, Dirty::Clean, Dirty::Clean]
    );

    let count = family.tree.set_subtree_dirty(family.child1, Dirty::Stale)?;
    assert_eq!(count, 3);
    assert_eq!(
        family.states(),
        vec![Dirty::Clean, Dirty::Stale, Dirty::Clean, Dirty::Stale, Dirty::Stale]
    );
    Ok(())
}

#[test]
fn test_config_defaults() {
    let tree = BoxTree::new();
    assert_eq!(tree.config(), &LayoutConfig::default());
    assert_eq!(tree.config().initial_capacity, 64);
    assert_eq!(tree.config().change_tolerance, 0.0);
    assert!(tree.is_empty());
}

#[test]
fn test_deep_tree_propagation() -> TestResult {
    init_logging();
    let mut tree = BoxTree::new();
    let root = tree.new_node();
    let mut tip = root;
    for _ in 0..500 {
        let next = tree.new_node();
        tree.append_child(tip, next)?;
        tip = next;
    }
    tree.set_subtree_dirty(root, Dirty::Clean)?;
    tree.layout_mut(root)?.set_origin_top(1.0);

    assert_eq!(tree.dirty(tip)?, Dirty::Stale);
    assert_eq!(tree.geometry(tip)?.absolute_content_top(), 1.0);
    assert_eq!(tree.ancestors(tip)?.count(), 500);
    Ok(())
}
