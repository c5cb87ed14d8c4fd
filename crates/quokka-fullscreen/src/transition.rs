//! Caller-facing handles for in-flight fullscreen transitions.
//!
//! [§ 4 API](https://fullscreen.spec.whatwg.org/#api)
//!
//! `requestFullscreen()` and `exitFullscreen()` return a promise that
//! settles when the matching notification task dispatches, not when the
//! stack mutation happened (which is always earlier and synchronous). The
//! Rust rendition is a oneshot channel: the controller keeps the
//! [`TransitionResolver`] attached to the pending task; the caller keeps
//! the [`TransitionHandle`], which can be awaited or polled synchronously.

use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use futures::channel::oneshot;

use crate::error::FullscreenError;

/// Outcome carried from task dispatch to the caller's handle.
pub type TransitionOutcome = Result<(), FullscreenError>;

/// Controller-side half: settles the matching [`TransitionHandle`] when the
/// task it rides on is dispatched. Dropping it unsettled (document
/// teardown) makes the handle report [`FullscreenError::Interrupted`].
#[derive(Debug)]
pub(crate) struct TransitionResolver {
    sender: oneshot::Sender<TransitionOutcome>,
}

impl TransitionResolver {
    /// Deliver the outcome. The caller may have dropped its handle; that is
    /// not an error.
    pub(crate) fn settle(self, outcome: TransitionOutcome) {
        let _ = self.sender.send(outcome);
    }
}

/// Create a linked resolver/handle pair for one transition.
pub(crate) fn transition() -> (TransitionResolver, TransitionHandle) {
    let (sender, receiver) = oneshot::channel();
    (TransitionResolver { sender }, TransitionHandle { receiver })
}

/// Caller-side half of a fullscreen transition.
///
/// Settles `Ok(())` when the matching `fullscreenchange` task dispatches,
/// `Err(kind)` when the matching `fullscreenerror` task dispatches, and
/// `Err(Interrupted)` if the document was torn down with the task still
/// queued. Implements [`Future`], so it can be awaited on any executor;
/// in a single-threaded harness [`TransitionHandle::try_settled`] is the
/// synchronous alternative.
#[derive(Debug)]
pub struct TransitionHandle {
    receiver: oneshot::Receiver<TransitionOutcome>,
}

impl TransitionHandle {
    /// A handle that is already settled, for operations that complete
    /// without enqueuing a task (idempotent exit, unknown document).
    pub(crate) fn settled(outcome: TransitionOutcome) -> Self {
        let (resolver, handle) = transition();
        resolver.settle(outcome);
        handle
    }

    /// Synchronously check whether the transition has settled.
    ///
    /// Returns `None` while the notification task is still queued.
    pub fn try_settled(&mut self) -> Option<TransitionOutcome> {
        match self.receiver.try_recv() {
            Ok(Some(outcome)) => Some(outcome),
            Ok(None) => None,
            Err(_) => Some(Err(FullscreenError::Interrupted)),
        }
    }
}

impl Future for TransitionHandle {
    type Output = TransitionOutcome;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        match Pin::new(&mut self.receiver).poll(cx) {
            Poll::Ready(Ok(outcome)) => Poll::Ready(outcome),
            Poll::Ready(Err(_)) => Poll::Ready(Err(FullscreenError::Interrupted)),
            Poll::Pending => Poll::Pending,
        }
    }
}
