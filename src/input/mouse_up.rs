//! Mouse up handling - finalize the drag and release the pointer capture.
//!
//! Releases arrive from two places: the floating window's own up/up-out
//! listeners, which exist in the frame on screen when the press lands, and
//! the capture layer once it has been painted. A quick tap can release before
//! the capture layer exists, so both routes call the same handler and
//! `PointerTracker::release` tolerates the second delivery.

use crate::app::FloatCam;
use gpui::*;

/// The button that starts and ends a drag
pub const DRAG_BUTTON: MouseButton = MouseButton::Left;

/// Whether this release ends a drag started with `DRAG_BUTTON`.
pub fn is_drag_release(event: &MouseUpEvent) -> bool {
    event.button == DRAG_BUTTON
}

impl FloatCam {
    pub fn handle_mouse_up(
        &mut self,
        event: &MouseUpEvent,
        _window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        if !is_drag_release(event) {
            return;
        }
        // Releasing commits the last computed position; there is no revert.
        if self.pointer.release().is_some() {
            cx.notify();
        }
    }
}
