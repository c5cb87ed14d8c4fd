//! The top layer: the stack of elements rendered above normal flow.
//!
//! [§ 2 The top layer](https://fullscreen.spec.whatwg.org/#top-layer)
//!
//! "Documents have a top layer, an ordered set of elements, rendered in
//! order of appearance on top of all other content."
//!
//! Pure data structure: no I/O, no task scheduling. Entries are non-owning
//! [`NodeId`]s resolved against the document tree's authoritative
//! ownership; evicting an entry never destroys the underlying node.

use quokka_dom::NodeId;
use thiserror::Error;

/// Structural errors from top-layer stack operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TopLayerError {
    /// The element is already somewhere in the stack.
    #[error("element is already in the top layer")]
    DuplicateEntry,
    /// `pop` was called on an empty stack.
    #[error("the top layer is empty")]
    EmptyStack,
}

/// Ordered stack of the elements currently in fullscreen, topmost last.
///
/// Insertion order is fullscreen-request order. The topmost entry is "the
/// fullscreen element"; the invariant `fullscreen_element == top()` holds
/// synchronously at all times, independent of pending notification tasks.
#[derive(Debug, Clone, Default)]
pub struct TopLayerStack {
    /// Entries in request order, topmost last.
    entries: Vec<NodeId>,
}

impl TopLayerStack {
    /// Create an empty top layer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Push `element` as the new topmost entry.
    ///
    /// # Errors
    ///
    /// Returns [`TopLayerError::DuplicateEntry`] if `element` is already in
    /// the stack (at any depth); the stack is left unchanged.
    pub fn push(&mut self, element: NodeId) -> Result<(), TopLayerError> {
        if self.contains(element) {
            return Err(TopLayerError::DuplicateEntry);
        }
        self.entries.push(element);
        Ok(())
    }

    /// Remove and return the topmost entry.
    ///
    /// # Errors
    ///
    /// Returns [`TopLayerError::EmptyStack`] if the stack is empty.
    pub fn pop(&mut self) -> Result<NodeId, TopLayerError> {
        self.entries.pop().ok_or(TopLayerError::EmptyStack)
    }

    /// Remove `element` from wherever it occurs, preserving the relative
    /// order of the remaining entries.
    ///
    /// Returns whether `element` was the topmost entry before removal.
    /// No-op returning `false` if `element` is not in the stack.
    pub fn evict(&mut self, element: NodeId) -> bool {
        let Some(index) = self.entries.iter().position(|&e| e == element) else {
            return false;
        };
        let was_top = index + 1 == self.entries.len();
        let _ = self.entries.remove(index);
        was_top
    }

    /// The topmost entry, or `None` if the stack is empty.
    #[must_use]
    pub fn top(&self) -> Option<NodeId> {
        self.entries.last().copied()
    }

    /// Whether `element` is anywhere in the stack.
    #[must_use]
    pub fn contains(&self, element: NodeId) -> bool {
        self.entries.contains(&element)
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the stack is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All entries in request order, topmost last.
    #[must_use]
    pub fn entries(&self) -> &[NodeId] {
        &self.entries
    }
}
