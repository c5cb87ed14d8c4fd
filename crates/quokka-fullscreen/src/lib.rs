//! Top-layer and fullscreen transition runtime for the Quokka browser.
//!
//! Implements the stack-and-notification core of the
//! [Fullscreen API](https://fullscreen.spec.whatwg.org/):
//!
//! - **Top-layer stack** - ordered, duplicate-free stack of the elements
//!   currently in fullscreen, topmost last
//! - **Transition controller** - request/exit/removal orchestration with
//!   an explicit per-call document context
//! - **Task queue** - FIFO, run-to-completion delivery of
//!   `fullscreenchange`/`fullscreenerror` notifications
//! - **Stabilization checkpoint** - reconciles synchronous stack mutation
//!   with deferred notification after tree removal settles
//!
//! # Design
//!
//! Stack mutation is synchronous and immediately visible through
//! `fullscreen_element()`; the matching notification is a queued task that
//! fires later, in enqueue order. Tree removal is the interesting case:
//! the detach hook evicts synchronously but enqueues nothing, because a
//! cascading removal only has a meaningful notification target once the
//! tree has settled. The checkpoint diffs the last observed top against
//! the current top and enqueues exactly one residual `fullscreenchange`
//! per observed transition.
//!
//! # Not Yet Implemented
//!
//! - `:fullscreen` pseudo-class and `::backdrop` styling hooks
//! - iframe fullscreen propagation across nested documents

pub mod controller;
pub mod document;
pub mod error;
pub mod gate;
pub mod task;
pub mod top_layer;
pub mod transition;

pub use controller::{EventDispatcher, FullscreenController};
pub use document::{Document, DocumentId};
pub use error::FullscreenError;
pub use gate::{DefaultGate, FullscreenGate};
pub use task::{EventTarget, FullscreenEventKind, PendingTask, TaskQueue};
pub use top_layer::{TopLayerError, TopLayerStack};
pub use transition::{TransitionHandle, TransitionOutcome};
