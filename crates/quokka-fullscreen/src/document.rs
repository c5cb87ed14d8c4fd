//! A document participating in fullscreen.
//!
//! [§ 3 Terminology](https://fullscreen.spec.whatwg.org/)
//!
//! Each document owns exactly one tree, one top-layer stack, and the
//! checkpoint bookkeeping for that stack. There is no ambient global
//! document: every controller and stack operation receives an explicit
//! [`DocumentId`] resolved against the controller's document arena.

use quokka_dom::{DetachObserver, DomTree, NodeId};

use crate::top_layer::TopLayerStack;

/// A type-safe index into the controller's document arena.
///
/// Like tree node IDs, document IDs are never reused; a torn-down
/// document's ID stays dead forever.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DocumentId(pub usize);

/// One document: its tree, its top layer, and its checkpoint state.
#[derive(Debug)]
pub struct Document {
    id: DocumentId,
    tree: DomTree,
    top_layer: TopLayerStack,
    /// Checkpoint state: the topmost entry as of the last enqueued
    /// `fullscreenchange` notification. Updated when a notification is
    /// enqueued (by a controller transition or by the checkpoint), never
    /// by bare stack mutation.
    last_observed_top: Option<NodeId>,
}

impl Document {
    pub(crate) fn new(id: DocumentId) -> Self {
        Self {
            id,
            tree: DomTree::new(),
            top_layer: TopLayerStack::new(),
            last_observed_top: None,
        }
    }

    /// This document's ID.
    #[must_use]
    pub fn id(&self) -> DocumentId {
        self.id
    }

    /// The document tree.
    #[must_use]
    pub fn tree(&self) -> &DomTree {
        &self.tree
    }

    /// Mutable access to the document tree, for building content.
    ///
    /// Removal must go through
    /// [`FullscreenController::remove_element`](crate::FullscreenController::remove_element)
    /// (or the removal hook) so that top-layer eviction runs; detaching
    /// nodes directly through this reference bypasses it.
    pub fn tree_mut(&mut self) -> &mut DomTree {
        &mut self.tree
    }

    /// The top-layer stack (read-only; mutation is the controller's job).
    #[must_use]
    pub fn top_layer(&self) -> &TopLayerStack {
        &self.top_layer
    }

    /// [§ 4 `document.fullscreenElement`](https://fullscreen.spec.whatwg.org/#dom-document-fullscreenelement)
    ///
    /// The topmost top-layer entry, or `None`. Synchronous: reflects every
    /// stack mutation immediately, before any pending notification task
    /// has fired.
    #[must_use]
    pub fn fullscreen_element(&self) -> Option<NodeId> {
        self.top_layer.top()
    }

    pub(crate) fn top_layer_mut(&mut self) -> &mut TopLayerStack {
        &mut self.top_layer
    }

    pub(crate) fn last_observed_top(&self) -> Option<NodeId> {
        self.last_observed_top
    }

    pub(crate) fn set_last_observed_top(&mut self, top: Option<NodeId>) {
        self.last_observed_top = top;
    }

    /// Run the tree's detach algorithm for `element`, evicting every node
    /// that leaves the tree from the top layer before the detach returns.
    pub(crate) fn detach_and_evict(&mut self, element: NodeId) {
        struct Evictor<'a> {
            top_layer: &'a mut TopLayerStack,
        }

        impl DetachObserver for Evictor<'_> {
            fn node_detached(&mut self, node: NodeId) {
                let _ = self.top_layer.evict(node);
            }
        }

        let Document {
            tree, top_layer, ..
        } = self;
        let mut evictor = Evictor { top_layer };
        tree.remove_subtree(element, &mut evictor);
    }
}
