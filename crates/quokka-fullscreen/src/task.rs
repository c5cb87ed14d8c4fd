//! Pending notification tasks and the FIFO task queue.
//!
//! [§ 4 API](https://fullscreen.spec.whatwg.org/#api)
//!
//! Stack mutation is synchronous, but its observable notification is a
//! task: a unit of deferred work that fires a platform event at a target.
//! Tasks execute strictly in enqueue order, one at a time, run to
//! completion. Tasks enqueued while another task runs join the tail and
//! run only after everything already queued has finished.

use std::collections::VecDeque;

use strum_macros::Display;

use quokka_dom::NodeId;

use crate::document::DocumentId;
use crate::transition::{TransitionOutcome, TransitionResolver};

/// The platform event a task dispatches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum FullscreenEventKind {
    /// The fullscreen element changed.
    #[strum(serialize = "fullscreenchange")]
    Change,
    /// A fullscreen request failed.
    #[strum(serialize = "fullscreenerror")]
    Error,
}

/// Where a task's event is fired.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventTarget {
    /// The document itself (used when the stack transitions to empty).
    Document,
    /// A specific element.
    Element(NodeId),
}

/// One unit of deferred notification work.
///
/// Created by controller transitions and by the stabilization checkpoint;
/// destroyed on dispatch, or dropped undelivered when its document is torn
/// down first.
#[derive(Debug)]
pub struct PendingTask {
    /// The document this task notifies for.
    pub document: DocumentId,
    /// Which event the task dispatches.
    pub kind: FullscreenEventKind,
    /// Where the event is fired.
    pub target: EventTarget,
    /// Outcome delivered to the awaiting caller, if any.
    pub(crate) outcome: TransitionOutcome,
    /// Resolver for the caller's transition handle. Checkpoint-created
    /// tasks have no awaiting caller and carry `None`.
    pub(crate) resolver: Option<TransitionResolver>,
}

/// FIFO queue of pending notification tasks, shared by all documents.
///
/// Global FIFO order subsumes the required per-document FIFO order.
#[derive(Debug, Default)]
pub struct TaskQueue {
    tasks: VecDeque<PendingTask>,
}

impl TaskQueue {
    /// Create an empty queue.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a task at the tail.
    pub(crate) fn enqueue(&mut self, task: PendingTask) {
        self.tasks.push_back(task);
    }

    /// Take the task at the head, if any.
    pub(crate) fn pop_front(&mut self) -> Option<PendingTask> {
        self.tasks.pop_front()
    }

    /// Drop every queued task belonging to `document` without dispatching.
    /// Their resolvers are dropped unsettled, so awaiting callers observe
    /// [`FullscreenError::Interrupted`](crate::FullscreenError::Interrupted).
    ///
    /// Returns how many tasks were dropped.
    pub(crate) fn drop_for_document(&mut self, document: DocumentId) -> usize {
        let before = self.tasks.len();
        self.tasks.retain(|task| task.document != document);
        before - self.tasks.len()
    }

    /// Number of queued tasks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Whether the queue is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}
