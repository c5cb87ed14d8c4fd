//! The fullscreen transition controller.
//!
//! [§ 4 API](https://fullscreen.spec.whatwg.org/#api)
//!
//! Orchestrates every transition: request and exit calls mutate the stack
//! synchronously and enqueue their notification task; the tree's detach
//! hook evicts synchronously and enqueues nothing; the stabilization
//! checkpoint turns whatever net stack change is left into exactly one
//! residual notification per document. Everything runs on one thread,
//! cooperatively; suspension exists only at task-queue boundaries.

use quokka_common::warning::warn_once;
use quokka_dom::NodeId;

use crate::document::{Document, DocumentId};
use crate::error::FullscreenError;
use crate::gate::{DefaultGate, FullscreenGate};
use crate::task::{EventTarget, FullscreenEventKind, PendingTask, TaskQueue};
use crate::transition::{TransitionHandle, transition};

/// External event dispatcher: fires a platform event at a target.
///
/// Bubbling and capturing are entirely this collaborator's concern. The
/// dispatcher receives the controller mutably so that event listeners can
/// re-enter it (request, exit, remove); work they enqueue joins the tail
/// of the queue and runs after everything already queued.
pub trait EventDispatcher {
    /// Fire `kind` at `target` in `document`.
    fn dispatch(
        &mut self,
        controller: &mut FullscreenController,
        document: DocumentId,
        kind: FullscreenEventKind,
        target: EventTarget,
    );
}

/// Orchestrates fullscreen transitions across a set of documents.
///
/// Owns the document arena, the shared task queue, and the boxed
/// permission gate. All operations execute synchronously to completion;
/// no locking, because there is no parallelism.
pub struct FullscreenController {
    /// Documents by [`DocumentId`] index. Torn-down slots stay `None`
    /// forever; IDs are never reused.
    documents: Vec<Option<Document>>,
    queue: TaskQueue,
    gate: Box<dyn FullscreenGate>,
    /// Set while `run_tasks` is executing; re-entrant drains and
    /// checkpoints are no-ops so no task nests inside another.
    draining: bool,
}

impl FullscreenController {
    /// Create a controller with the [`DefaultGate`].
    #[must_use]
    pub fn new() -> Self {
        Self::with_gate(Box::new(DefaultGate))
    }

    /// Create a controller with a custom permission gate.
    #[must_use]
    pub fn with_gate(gate: Box<dyn FullscreenGate>) -> Self {
        Self {
            documents: Vec::new(),
            queue: TaskQueue::new(),
            gate,
            draining: false,
        }
    }

    /// Register a new, empty document and return its ID.
    pub fn create_document(&mut self) -> DocumentId {
        let id = DocumentId(self.documents.len());
        self.documents.push(Some(Document::new(id)));
        id
    }

    /// Look up a live document.
    #[must_use]
    pub fn document(&self, id: DocumentId) -> Option<&Document> {
        self.documents.get(id.0).and_then(Option::as_ref)
    }

    /// Look up a live document mutably (for building its tree).
    pub fn document_mut(&mut self, id: DocumentId) -> Option<&mut Document> {
        self.documents.get_mut(id.0).and_then(Option::as_mut)
    }

    /// [§ 4 `document.fullscreenElement`](https://fullscreen.spec.whatwg.org/#dom-document-fullscreenelement)
    ///
    /// Synchronous read of `document`'s fullscreen element; always equal to
    /// its top-layer `top()`, even with notification tasks still queued.
    #[must_use]
    pub fn fullscreen_element(&self, document: DocumentId) -> Option<NodeId> {
        self.document(document).and_then(Document::fullscreen_element)
    }

    /// Number of queued, undispatched notification tasks.
    #[must_use]
    pub fn pending_tasks(&self) -> usize {
        self.queue.len()
    }

    /// [§ 4 `element.requestFullscreen()`](https://fullscreen.spec.whatwg.org/#dom-element-requestfullscreen)
    ///
    /// Vet the request through the permission gate; on success push
    /// `element` onto the top layer and enqueue a `fullscreenchange` task
    /// targeted at it. On denial (or a duplicate entry) enqueue a
    /// `fullscreenerror` task instead, leaving the stack untouched.
    ///
    /// The returned handle settles when the matching task dispatches.
    pub fn request_fullscreen(
        &mut self,
        document: DocumentId,
        element: NodeId,
    ) -> TransitionHandle {
        let Some(doc) = self.documents.get_mut(document.0).and_then(Option::as_mut) else {
            return TransitionHandle::settled(Err(FullscreenError::InvalidState {
                reason: "no such document",
            }));
        };

        let verdict = self.gate.check(doc, element).and_then(|()| {
            doc.top_layer_mut()
                .push(element)
                .map_err(|_| FullscreenError::InvalidState {
                    reason: "element is already in the top layer",
                })
        });

        let (kind, outcome) = match verdict {
            Ok(()) => {
                // This transition is its own notification; record the top
                // we are about to announce so the checkpoint will not
                // announce it again.
                doc.set_last_observed_top(doc.fullscreen_element());
                (FullscreenEventKind::Change, Ok(()))
            }
            Err(error) => {
                if error == FullscreenError::NotSupported {
                    warn_once("Fullscreen", "request denied: unsupported context");
                }
                (FullscreenEventKind::Error, Err(error))
            }
        };

        let (resolver, handle) = transition();
        self.queue.enqueue(PendingTask {
            document,
            kind,
            target: EventTarget::Element(element),
            outcome,
            resolver: Some(resolver),
        });
        handle
    }

    /// [§ 4 `document.exitFullscreen()`](https://fullscreen.spec.whatwg.org/#dom-document-exitfullscreen)
    ///
    /// Pop the topmost entry and enqueue a `fullscreenchange` task at the
    /// revealed top, or at the document when the stack becomes empty.
    /// Idempotent on an empty stack: resolves immediately, enqueues
    /// nothing.
    pub fn exit_fullscreen(&mut self, document: DocumentId) -> TransitionHandle {
        let Some(doc) = self.documents.get_mut(document.0).and_then(Option::as_mut) else {
            return TransitionHandle::settled(Err(FullscreenError::InvalidState {
                reason: "no such document",
            }));
        };
        if doc.top_layer().is_empty() {
            return TransitionHandle::settled(Ok(()));
        }

        // Non-empty was checked above.
        let _ = doc.top_layer_mut().pop();
        let target = match doc.fullscreen_element() {
            Some(revealed) => EventTarget::Element(revealed),
            None => EventTarget::Document,
        };
        doc.set_last_observed_top(doc.fullscreen_element());

        let (resolver, handle) = transition();
        self.queue.enqueue(PendingTask {
            document,
            kind: FullscreenEventKind::Change,
            target,
            outcome: Ok(()),
            resolver: Some(resolver),
        });
        handle
    }

    /// [Removing steps](https://fullscreen.spec.whatwg.org/#removing-steps)
    ///
    /// Tree-mutation hook, called synchronously by the tree's detach
    /// algorithm for every node leaving the tree, before that algorithm
    /// returns. Evicts `element` from the top layer, which immediately
    /// changes the observable `fullscreen_element`. **No task is enqueued
    /// here**: removal may cascade, so the correct notification target is
    /// only knowable once tree mutation has settled, and the residual
    /// notification is the checkpoint's job.
    pub fn element_removed_from_tree(&mut self, document: DocumentId, element: NodeId) {
        if let Some(doc) = self.documents.get_mut(document.0).and_then(Option::as_mut) {
            let _ = doc.top_layer_mut().evict(element);
        }
    }

    /// Detach `element`'s subtree from `document`'s tree, running top-layer
    /// eviction for every node that leaves the tree before the detach
    /// returns. Convenience driver around the hook above for callers using
    /// the in-process [`DomTree`](quokka_dom::DomTree).
    pub fn remove_element(&mut self, document: DocumentId, element: NodeId) {
        if let Some(doc) = self.documents.get_mut(document.0).and_then(Option::as_mut) {
            doc.detach_and_evict(element);
        }
    }

    /// The stabilization checkpoint.
    ///
    /// Run once after each synchronous script turn, before the next queued
    /// task executes. For every live document, diff the current top
    /// against the last observed top; if they differ, enqueue exactly one
    /// `fullscreenchange` task (targeted at the new top, or at the
    /// document when the stack emptied) and record the new observation.
    ///
    /// This is the only path that turns removal-induced stack changes into
    /// notifications: one task per observed transition, no matter how many
    /// synchronous mutations happened in between. A checkpoint attempted
    /// while the queue is draining is a no-op; it never interleaves with
    /// task execution.
    pub fn checkpoint(&mut self) {
        if self.draining {
            return;
        }
        for slot in &mut self.documents {
            let Some(doc) = slot.as_mut() else { continue };
            let current_top = doc.fullscreen_element();
            if current_top == doc.last_observed_top() {
                continue;
            }
            let target = match current_top {
                Some(top) => EventTarget::Element(top),
                None => EventTarget::Document,
            };
            doc.set_last_observed_top(current_top);
            self.queue.enqueue(PendingTask {
                document: doc.id(),
                kind: FullscreenEventKind::Change,
                target,
                outcome: Ok(()),
                resolver: None,
            });
        }
    }

    /// Drain the task queue: dispatch tasks strictly in enqueue order, one
    /// at a time, each run to completion. Tasks enqueued by dispatcher
    /// re-entry join the tail and run in the same drain, after everything
    /// already queued. A nested `run_tasks` (from inside a dispatch) is a
    /// no-op: no task preempts or nests inside another.
    pub fn run_tasks(&mut self, dispatcher: &mut dyn EventDispatcher) {
        if self.draining {
            return;
        }
        self.draining = true;
        while let Some(task) = self.queue.pop_front() {
            dispatcher.dispatch(self, task.document, task.kind, task.target);
            if let Some(resolver) = task.resolver {
                resolver.settle(task.outcome);
            }
        }
        self.draining = false;
    }

    /// One synchronous-script-to-task-queue handoff: run the checkpoint,
    /// then drain the queue.
    pub fn pump(&mut self, dispatcher: &mut dyn EventDispatcher) {
        self.checkpoint();
        self.run_tasks(dispatcher);
    }

    /// Tear down `document`: remove it and silently drop its pending
    /// tasks. Dropped tasks are never dispatched into the destroyed
    /// document; their awaiting callers observe
    /// [`FullscreenError::Interrupted`].
    pub fn tear_down_document(&mut self, document: DocumentId) {
        let Some(slot) = self.documents.get_mut(document.0) else {
            return;
        };
        if slot.take().is_none() {
            return;
        }
        let dropped = self.queue.drop_for_document(document);
        if dropped > 0 {
            warn_once(
                "Fullscreen",
                "dropped pending fullscreen tasks for a torn-down document",
            );
        }
    }
}

impl Default for FullscreenController {
    fn default() -> Self {
        Self::new()
    }
}
