//! Drag tracking - window-level pointer moves while a capture is held.
//!
//! ## Performance Notes
//!
//! Mouse move fires 60+ times per second during a drag. The handler exits
//! early when idle and only notifies when the position actually changed.
//!
//! Enable profiling with `cargo build --features profiling` to see timing.

use crate::app::FloatCam;
use crate::input::PointerInput;
use crate::profile_scope;
use gpui::*;

impl FloatCam {
    pub fn handle_mouse_move(
        &mut self,
        event: &MouseMoveEvent,
        _window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        if !self.pointer.is_dragging() {
            return;
        }
        profile_scope!("handle_mouse_move");

        if self.pointer.track(&PointerInput::from(event.position)) {
            cx.notify();
        }
    }
}
