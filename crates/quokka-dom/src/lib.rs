//! Document tree for the Quokka top-layer runtime.
//!
//! This crate provides an arena-based DOM tree following the
//! [DOM Living Standard](https://dom.spec.whatwg.org/).
//!
//! # Design
//!
//! All nodes live in a single arena indexed by [`NodeId`]; parent, child,
//! and sibling relationships are stored as indices, so any node can be
//! reached in O(1) without fighting the borrow checker. Removal never frees
//! arena slots: a detached node stays resolvable by identity (callers such
//! as the top-layer stack hold non-owning [`NodeId`]s), it merely stops
//! being connected.
//!
//! Removal is observable: [`DomTree::remove_subtree`] invokes a
//! [`DetachObserver`] synchronously for every node leaving the tree, before
//! the detach algorithm returns. This is the hook the fullscreen controller
//! consumes to evict removed elements from the top layer.

use std::collections::HashMap;

/// Map of attribute names to values for an element.
pub type AttributesMap = HashMap<String, String>;

/// A type-safe index into the document tree arena.
///
/// [§ 4.4 Interface Node](https://dom.spec.whatwg.org/#interface-node)
/// "Each node has an associated node document..."
///
/// `NodeId`s are cheap, copyable, non-owning identities. Holding one never
/// keeps a node alive or connected; it is resolved against the tree's
/// authoritative ownership on every access.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub usize);

impl NodeId {
    /// The root document node is always at index 0.
    pub const ROOT: NodeId = NodeId(0);
}

/// [§ 4.4 Interface Node](https://dom.spec.whatwg.org/#interface-node)
///
/// A single node in the arena: its type plus the index links that place it
/// in the tree. A detached node has `parent == None` and empty sibling
/// links but keeps its own `children`.
#[derive(Debug, Clone)]
pub struct Node {
    /// "Each node has an associated node type"
    pub node_type: NodeType,

    /// [§ 4.4](https://dom.spec.whatwg.org/#concept-tree-parent)
    /// `None` for the document root and for detached nodes.
    pub parent: Option<NodeId>,

    /// [§ 4.4](https://dom.spec.whatwg.org/#concept-tree-child)
    /// Children in tree order.
    pub children: Vec<NodeId>,

    /// [§ 4.4](https://dom.spec.whatwg.org/#concept-tree-next-sibling)
    pub next_sibling: Option<NodeId>,

    /// [§ 4.4](https://dom.spec.whatwg.org/#concept-tree-previous-sibling)
    pub prev_sibling: Option<NodeId>,
}

/// [§ 4.4 Interface Node](https://dom.spec.whatwg.org/#interface-node)
///
/// "Each node has an associated node type"
#[derive(Debug, Clone)]
pub enum NodeType {
    /// [§ 4.5 Interface Document](https://dom.spec.whatwg.org/#interface-document)
    Document,
    /// [§ 4.9 Interface Element](https://dom.spec.whatwg.org/#interface-element)
    Element(ElementData),
    /// [§ 4.10 Interface Text](https://dom.spec.whatwg.org/#interface-text)
    Text(String),
    /// [§ 4.7 Interface Comment](https://dom.spec.whatwg.org/#interface-comment)
    Comment(String),
}

/// Element-specific data.
///
/// Per [§ 4.9 Interface Element](https://dom.spec.whatwg.org/#interface-element)
/// only the local name and attribute list are stored; namespaces and custom
/// element state are out of scope for this runtime.
#[derive(Debug, Clone)]
pub struct ElementData {
    /// "An element's local name"
    pub tag_name: String,
    /// "An element has an associated attribute list"
    pub attrs: AttributesMap,
}

impl ElementData {
    /// Create element data with a tag name and no attributes.
    #[must_use]
    pub fn named(tag_name: &str) -> Self {
        Self {
            tag_name: tag_name.to_string(),
            attrs: AttributesMap::new(),
        }
    }

    /// Returns the element's id attribute value if present.
    #[must_use]
    pub fn id(&self) -> Option<&String> {
        self.attrs.get("id")
    }
}

/// Observer invoked synchronously while a subtree is being detached.
///
/// [§ 4.2.2 Remove](https://dom.spec.whatwg.org/#concept-node-remove)
/// The removing steps of the standard run for the removed node and for each
/// of its descendants before the removal algorithm returns; consumers (such
/// as the fullscreen controller's top-layer eviction) rely on running
/// before any script or queued task can observe the tree again.
pub trait DetachObserver {
    /// Called once for every node leaving the tree, in tree order
    /// (the removed node first, then its descendants).
    fn node_detached(&mut self, node: NodeId);
}

/// Arena-based document tree with O(1) node access and traversal.
///
/// [§ 4 Nodes](https://dom.spec.whatwg.org/#nodes)
///
/// The Document node is created up front and always sits at
/// [`NodeId::ROOT`].
#[derive(Debug, Clone)]
pub struct DomTree {
    /// All nodes ever allocated, indexed by `NodeId`. Slots are never
    /// reused, so a `NodeId` stays valid after its node is detached.
    nodes: Vec<Node>,
}

impl DomTree {
    /// Create a new tree containing just the Document node.
    #[must_use]
    pub fn new() -> Self {
        DomTree {
            nodes: vec![Node {
                node_type: NodeType::Document,
                parent: None,
                children: Vec::new(),
                next_sibling: None,
                prev_sibling: None,
            }],
        }
    }

    /// Get the root document node ID.
    #[must_use]
    pub fn root(&self) -> NodeId {
        NodeId::ROOT
    }

    /// Get a node by its ID.
    #[must_use]
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0)
    }

    /// Get a mutable reference to a node by its ID.
    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(id.0)
    }

    /// Number of nodes ever allocated (connected or detached).
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the arena is empty (never true: the Document always exists).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Allocate a new node and return its ID.
    /// The node starts detached; attach it with [`DomTree::append_child`]
    /// or [`DomTree::insert_before`].
    pub fn alloc(&mut self, node_type: NodeType) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            node_type,
            parent: None,
            children: Vec::new(),
            next_sibling: None,
            prev_sibling: None,
        });
        id
    }

    /// [§ 4.2.2 Append](https://dom.spec.whatwg.org/#concept-node-append)
    ///
    /// Appends `child` as the last child of `parent`, updating the sibling
    /// links of the previous last child.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) {
        let prev_last = self.nodes[parent.0].children.last().copied();

        self.nodes[parent.0].children.push(child);
        self.nodes[child.0].parent = Some(parent);
        self.nodes[child.0].next_sibling = None;
        self.nodes[child.0].prev_sibling = prev_last;

        if let Some(prev_id) = prev_last {
            self.nodes[prev_id.0].next_sibling = Some(child);
        }
    }

    /// [§ 4.2.2 Insert](https://dom.spec.whatwg.org/#concept-node-pre-insert)
    ///
    /// Inserts `child` into `parent`'s children immediately before
    /// `reference`. Falls back to appending when `reference` is not a child
    /// of `parent`.
    pub fn insert_before(&mut self, parent: NodeId, child: NodeId, reference: NodeId) {
        let Some(index) = self.nodes[parent.0]
            .children
            .iter()
            .position(|&c| c == reference)
        else {
            self.append_child(parent, child);
            return;
        };

        self.nodes[parent.0].children.insert(index, child);
        self.nodes[child.0].parent = Some(parent);

        let before = self.nodes[reference.0].prev_sibling;
        self.nodes[child.0].prev_sibling = before;
        self.nodes[child.0].next_sibling = Some(reference);
        self.nodes[reference.0].prev_sibling = Some(child);
        if let Some(before_id) = before {
            self.nodes[before_id.0].next_sibling = Some(child);
        }
    }

    /// [§ 4.2.2 Remove](https://dom.spec.whatwg.org/#concept-node-remove)
    ///
    /// Unlinks `child` from `parent`, relinking the surrounding siblings.
    /// The subtree under `child` stays intact but is no longer connected.
    /// No-op if `child` is not a child of `parent`.
    ///
    /// This variant runs no removing steps; use [`DomTree::remove_subtree`]
    /// when detach observers must fire.
    pub fn remove_child(&mut self, parent: NodeId, child: NodeId) {
        if self.nodes[child.0].parent == Some(parent) {
            self.unlink(child);
        }
    }

    /// [§ 4.2.2 Remove](https://dom.spec.whatwg.org/#concept-node-remove)
    ///
    /// Detaches `node` from its parent, then invokes
    /// [`DetachObserver::node_detached`] for `node` and every descendant in
    /// tree order, synchronously, before this function returns. The
    /// cascade matters: removing an ancestor implicitly removes descendants
    /// that nothing else tracks, and observers see each of them.
    ///
    /// No-op (no observer calls) if `node` is the root or already detached.
    pub fn remove_subtree(&mut self, node: NodeId, observer: &mut dyn DetachObserver) {
        if node == NodeId::ROOT || self.nodes[node.0].parent.is_none() {
            return;
        }
        // Snapshot the subtree before any observer runs; an observer that
        // mutates the tree must not skew the cascade.
        let mut removed = vec![node];
        removed.extend(self.descendants(node));

        self.unlink(node);
        for id in removed {
            observer.node_detached(id);
        }
    }

    /// Unlink `child` from its parent and surrounding siblings.
    fn unlink(&mut self, child: NodeId) {
        let Some(parent) = self.nodes[child.0].parent else {
            return;
        };
        let prev = self.nodes[child.0].prev_sibling;
        let next = self.nodes[child.0].next_sibling;

        self.nodes[parent.0].children.retain(|&c| c != child);
        if let Some(prev_id) = prev {
            self.nodes[prev_id.0].next_sibling = next;
        }
        if let Some(next_id) = next {
            self.nodes[next_id.0].prev_sibling = prev;
        }

        self.nodes[child.0].parent = None;
        self.nodes[child.0].prev_sibling = None;
        self.nodes[child.0].next_sibling = None;
    }

    /// [§ 4.2.1 Connected](https://dom.spec.whatwg.org/#connected)
    ///
    /// "An element is connected if its shadow-including root is a document."
    ///
    /// Whether `id`'s ancestor chain reaches the document root.
    #[must_use]
    pub fn is_connected(&self, id: NodeId) -> bool {
        if id == NodeId::ROOT {
            return true;
        }
        self.ancestors(id).any(|a| a == NodeId::ROOT)
    }

    /// Get the parent of a node.
    #[must_use]
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).and_then(|n| n.parent)
    }

    /// Get all children of a node, in tree order.
    #[must_use]
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.get(id).map(|n| n.children.as_slice()).unwrap_or(&[])
    }

    /// Get the first child of a node.
    #[must_use]
    pub fn first_child(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).and_then(|n| n.children.first().copied())
    }

    /// Get the last child of a node.
    #[must_use]
    pub fn last_child(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).and_then(|n| n.children.last().copied())
    }

    /// Get the next sibling of a node.
    #[must_use]
    pub fn next_sibling(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).and_then(|n| n.next_sibling)
    }

    /// Get the previous sibling of a node.
    #[must_use]
    pub fn prev_sibling(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).and_then(|n| n.prev_sibling)
    }

    /// Iterate over all ancestors of a node, from parent to root.
    pub fn ancestors(&self, id: NodeId) -> AncestorIterator<'_> {
        AncestorIterator {
            tree: self,
            current: self.parent(id),
        }
    }

    /// [§ 4.2.6 Descendant](https://dom.spec.whatwg.org/#concept-tree-descendant)
    ///
    /// Iterate over the strict descendants of a node in tree order
    /// (depth-first preorder).
    pub fn descendants(&self, id: NodeId) -> DescendantIterator<'_> {
        let mut pending = Vec::new();
        pending.extend(self.children(id).iter().rev().copied());
        DescendantIterator {
            tree: self,
            pending,
        }
    }

    /// Get element data if this node is an element.
    #[must_use]
    pub fn as_element(&self, id: NodeId) -> Option<&ElementData> {
        self.get(id).and_then(|n| match &n.node_type {
            NodeType::Element(data) => Some(data),
            _ => None,
        })
    }

    /// Get text content if this node is a text node.
    #[must_use]
    pub fn as_text(&self, id: NodeId) -> Option<&str> {
        self.get(id).and_then(|n| match &n.node_type {
            NodeType::Text(s) => Some(s.as_str()),
            _ => None,
        })
    }

    /// [§ 3.1.1 The document element](https://html.spec.whatwg.org/multipage/dom.html#the-html-element-2)
    ///
    /// The element whose parent is the document, if it exists.
    #[must_use]
    pub fn document_element(&self) -> Option<NodeId> {
        self.children(NodeId::ROOT)
            .iter()
            .find(|&&id| self.as_element(id).is_some())
            .copied()
    }
}

impl Default for DomTree {
    fn default() -> Self {
        Self::new()
    }
}

/// Iterator over ancestors of a node.
pub struct AncestorIterator<'a> {
    tree: &'a DomTree,
    current: Option<NodeId>,
}

impl Iterator for AncestorIterator<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.current?;
        self.current = self.tree.parent(id);
        Some(id)
    }
}

/// Iterator over strict descendants of a node, in tree order.
pub struct DescendantIterator<'a> {
    tree: &'a DomTree,
    pending: Vec<NodeId>,
}

impl Iterator for DescendantIterator<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.pending.pop()?;
        self.pending
            .extend(self.tree.children(id).iter().rev().copied());
        Some(id)
    }
}
