//! The permission/validity gate consulted before entering fullscreen.
//!
//! [§ 4 `requestFullscreen()`](https://fullscreen.spec.whatwg.org/#dom-element-requestfullscreen)
//!
//! Policy (user activation, permissions policy, sandboxing) is out of
//! scope for this runtime; it is modeled as a capability that answers
//! yes/no with an error kind. The controller consults the gate on every
//! request and relays a denial as a `fullscreenerror` task without
//! touching the stack.

use quokka_dom::NodeId;

use crate::document::Document;
use crate::error::FullscreenError;

/// Decides whether a `request_fullscreen(element)` call may proceed.
pub trait FullscreenGate {
    /// Vet a request against `document`'s current state.
    ///
    /// # Errors
    ///
    /// Returns the [`FullscreenError`] kind the denial should surface as.
    fn check(&self, document: &Document, element: NodeId) -> Result<(), FullscreenError>;
}

/// Default gate: grants whenever the request is structurally valid.
///
/// The target must be an element, must be connected to its document, and
/// must not already be the fullscreen element. Everything else is granted.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultGate;

impl FullscreenGate for DefaultGate {
    fn check(&self, document: &Document, element: NodeId) -> Result<(), FullscreenError> {
        if document.tree().as_element(element).is_none() {
            return Err(FullscreenError::InvalidState {
                reason: "target is not an element",
            });
        }
        if !document.tree().is_connected(element) {
            return Err(FullscreenError::InvalidState {
                reason: "element is not connected to the document",
            });
        }
        if document.fullscreen_element() == Some(element) {
            return Err(FullscreenError::InvalidState {
                reason: "element is already the fullscreen element",
            });
        }
        Ok(())
    }
}
