//! Error kinds surfaced by fullscreen transitions.
//!
//! [§ 3 Terminology](https://fullscreen.spec.whatwg.org/)
//!
//! Every failure is surfaced twice: through the rejected
//! [`TransitionHandle`](crate::transition::TransitionHandle) returned to the
//! caller, and through the `fullscreenerror` task enqueued for external
//! listeners. Failures never mutate the top-layer stack.

use thiserror::Error;

/// Why a fullscreen transition failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FullscreenError {
    /// The request was made in a state that cannot enter fullscreen: the
    /// target is not an element, is not connected to its document, is
    /// already the fullscreen element, or the document is unknown.
    #[error("invalid state: {reason}")]
    InvalidState {
        /// Which precondition failed.
        reason: &'static str,
    },

    /// The permission gate denied the request. Policy evaluation itself is
    /// delegated; the runtime only relays the verdict.
    #[error("fullscreen request denied by the permission gate")]
    Security,

    /// Fullscreen is unavailable in this context.
    #[error("fullscreen is not supported in this context")]
    NotSupported,

    /// The document was torn down while the transition's notification task
    /// was still pending, so the task was dropped and never dispatched.
    /// Not a transition failure in the host model, but a dropped
    /// notification must settle the caller's handle with *something*.
    #[error("document torn down before the transition settled")]
    Interrupted,
}
