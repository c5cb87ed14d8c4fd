//! Tests for tree mutation: append_child, insert_before, remove_child,
//! remove_subtree (with detach observers), and connectivity.

use quokka_dom::{DetachObserver, DomTree, ElementData, NodeId, NodeType};

/// Helper to create an element node and return its NodeId.
fn alloc_element(tree: &mut DomTree, tag: &str) -> NodeId {
    tree.alloc(NodeType::Element(ElementData::named(tag)))
}

/// Observer that records detached nodes in callback order.
#[derive(Default)]
struct Recorder {
    detached: Vec<NodeId>,
}

impl DetachObserver for Recorder {
    fn node_detached(&mut self, node: NodeId) {
        self.detached.push(node);
    }
}

// ========== append_child ==========

#[test]
fn test_append_child_links_parent_and_siblings() {
    let mut tree = DomTree::new();
    let parent = alloc_element(&mut tree, "div");
    tree.append_child(NodeId::ROOT, parent);

    let a = alloc_element(&mut tree, "a");
    let b = alloc_element(&mut tree, "b");
    tree.append_child(parent, a);
    tree.append_child(parent, b);

    assert_eq!(tree.children(parent), &[a, b]);
    assert_eq!(tree.parent(a), Some(parent));
    assert_eq!(tree.next_sibling(a), Some(b));
    assert_eq!(tree.prev_sibling(b), Some(a));
    assert_eq!(tree.next_sibling(b), None);
}

#[test]
fn test_alloc_starts_detached() {
    let mut tree = DomTree::new();
    let lone = alloc_element(&mut tree, "div");

    assert_eq!(tree.parent(lone), None);
    assert!(!tree.is_connected(lone));
}

// ========== remove_child ==========

#[test]
fn test_remove_child_single_child() {
    let mut tree = DomTree::new();
    let parent = alloc_element(&mut tree, "div");
    tree.append_child(NodeId::ROOT, parent);

    let child = alloc_element(&mut tree, "p");
    tree.append_child(parent, child);

    tree.remove_child(parent, child);

    assert_eq!(tree.children(parent).len(), 0);
    assert_eq!(tree.parent(child), None);
    assert_eq!(tree.prev_sibling(child), None);
    assert_eq!(tree.next_sibling(child), None);
}

#[test]
fn test_remove_child_first_of_three() {
    let mut tree = DomTree::new();
    let parent = alloc_element(&mut tree, "div");
    tree.append_child(NodeId::ROOT, parent);

    let a = alloc_element(&mut tree, "a");
    let b = alloc_element(&mut tree, "b");
    let c = alloc_element(&mut tree, "c");
    tree.append_child(parent, a);
    tree.append_child(parent, b);
    tree.append_child(parent, c);

    tree.remove_child(parent, a);

    // b is now first child, c is second
    assert_eq!(tree.children(parent), &[b, c]);
    assert_eq!(tree.prev_sibling(b), None);
    assert_eq!(tree.next_sibling(b), Some(c));
    assert_eq!(tree.prev_sibling(c), Some(b));
}

#[test]
fn test_remove_child_middle_of_three() {
    let mut tree = DomTree::new();
    let parent = alloc_element(&mut tree, "div");
    tree.append_child(NodeId::ROOT, parent);

    let a = alloc_element(&mut tree, "a");
    let b = alloc_element(&mut tree, "b");
    let c = alloc_element(&mut tree, "c");
    tree.append_child(parent, a);
    tree.append_child(parent, b);
    tree.append_child(parent, c);

    tree.remove_child(parent, b);

    // a and c are siblings now
    assert_eq!(tree.children(parent), &[a, c]);
    assert_eq!(tree.next_sibling(a), Some(c));
    assert_eq!(tree.prev_sibling(c), Some(a));
}

#[test]
fn test_remove_child_wrong_parent_is_noop() {
    let mut tree = DomTree::new();
    let parent = alloc_element(&mut tree, "div");
    let other = alloc_element(&mut tree, "span");
    tree.append_child(NodeId::ROOT, parent);
    tree.append_child(NodeId::ROOT, other);

    let child = alloc_element(&mut tree, "p");
    tree.append_child(parent, child);

    tree.remove_child(other, child);

    assert_eq!(tree.children(parent), &[child]);
    assert_eq!(tree.parent(child), Some(parent));
}

// ========== insert_before ==========

#[test]
fn test_insert_before_first_child() {
    let mut tree = DomTree::new();
    let parent = alloc_element(&mut tree, "div");
    tree.append_child(NodeId::ROOT, parent);

    let existing = alloc_element(&mut tree, "b");
    tree.append_child(parent, existing);

    let new_child = alloc_element(&mut tree, "a");
    tree.insert_before(parent, new_child, existing);

    // new_child should be first, existing second
    assert_eq!(tree.children(parent), &[new_child, existing]);
    assert_eq!(tree.parent(new_child), Some(parent));
    assert_eq!(tree.next_sibling(new_child), Some(existing));
    assert_eq!(tree.prev_sibling(new_child), None);
    assert_eq!(tree.prev_sibling(existing), Some(new_child));
}

#[test]
fn test_insert_before_middle() {
    let mut tree = DomTree::new();
    let parent = alloc_element(&mut tree, "div");
    tree.append_child(NodeId::ROOT, parent);

    let a = alloc_element(&mut tree, "a");
    let c = alloc_element(&mut tree, "c");
    tree.append_child(parent, a);
    tree.append_child(parent, c);

    let b = alloc_element(&mut tree, "b");
    tree.insert_before(parent, b, c);

    assert_eq!(tree.children(parent), &[a, b, c]);
    assert_eq!(tree.next_sibling(a), Some(b));
    assert_eq!(tree.prev_sibling(b), Some(a));
    assert_eq!(tree.next_sibling(b), Some(c));
    assert_eq!(tree.prev_sibling(c), Some(b));
}

#[test]
fn test_insert_before_missing_reference_appends() {
    let mut tree = DomTree::new();
    let parent = alloc_element(&mut tree, "div");
    tree.append_child(NodeId::ROOT, parent);

    let a = alloc_element(&mut tree, "a");
    tree.append_child(parent, a);

    let stranger = alloc_element(&mut tree, "x");
    let b = alloc_element(&mut tree, "b");
    tree.insert_before(parent, b, stranger);

    assert_eq!(tree.children(parent), &[a, b]);
}

// ========== remove_subtree ==========

#[test]
fn test_remove_subtree_fires_observer_for_node_and_descendants() {
    let mut tree = DomTree::new();
    let section = alloc_element(&mut tree, "section");
    tree.append_child(NodeId::ROOT, section);

    let inner = alloc_element(&mut tree, "div");
    let deep = alloc_element(&mut tree, "span");
    tree.append_child(section, inner);
    tree.append_child(inner, deep);

    let mut recorder = Recorder::default();
    tree.remove_subtree(section, &mut recorder);

    // Removed node first, then descendants in tree order.
    assert_eq!(recorder.detached, vec![section, inner, deep]);
    assert_eq!(tree.parent(section), None);
    assert_eq!(tree.children(NodeId::ROOT).len(), 0);
    // The subtree stays intact below the detached root.
    assert_eq!(tree.children(section), &[inner]);
}

#[test]
fn test_remove_subtree_on_detached_node_is_noop() {
    let mut tree = DomTree::new();
    let lone = alloc_element(&mut tree, "div");

    let mut recorder = Recorder::default();
    tree.remove_subtree(lone, &mut recorder);

    assert!(recorder.detached.is_empty());
}

#[test]
fn test_remove_subtree_on_root_is_noop() {
    let mut tree = DomTree::new();
    let child = alloc_element(&mut tree, "div");
    tree.append_child(NodeId::ROOT, child);

    let mut recorder = Recorder::default();
    tree.remove_subtree(NodeId::ROOT, &mut recorder);

    assert!(recorder.detached.is_empty());
    assert_eq!(tree.children(NodeId::ROOT), &[child]);
}

// ========== connectivity ==========

#[test]
fn test_is_connected_follows_detach() {
    let mut tree = DomTree::new();
    let outer = alloc_element(&mut tree, "div");
    let inner = alloc_element(&mut tree, "span");
    tree.append_child(NodeId::ROOT, outer);
    tree.append_child(outer, inner);

    assert!(tree.is_connected(NodeId::ROOT));
    assert!(tree.is_connected(outer));
    assert!(tree.is_connected(inner));

    tree.remove_child(NodeId::ROOT, outer);

    // The whole subtree is disconnected, not just the removed node.
    assert!(!tree.is_connected(outer));
    assert!(!tree.is_connected(inner));
}

// ========== traversal ==========

#[test]
fn test_descendants_in_tree_order() {
    let mut tree = DomTree::new();
    let a = alloc_element(&mut tree, "a");
    let b = alloc_element(&mut tree, "b");
    let c = alloc_element(&mut tree, "c");
    let d = alloc_element(&mut tree, "d");
    tree.append_child(NodeId::ROOT, a);
    tree.append_child(a, b);
    tree.append_child(b, c);
    tree.append_child(a, d);

    let order: Vec<NodeId> = tree.descendants(NodeId::ROOT).collect();
    assert_eq!(order, vec![a, b, c, d]);
}

#[test]
fn test_ancestors_walk_to_root() {
    let mut tree = DomTree::new();
    let a = alloc_element(&mut tree, "a");
    let b = alloc_element(&mut tree, "b");
    tree.append_child(NodeId::ROOT, a);
    tree.append_child(a, b);

    let chain: Vec<NodeId> = tree.ancestors(b).collect();
    assert_eq!(chain, vec![a, NodeId::ROOT]);
}
