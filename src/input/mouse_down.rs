//! Mouse down handling - drag initiation on the floating window.

use crate::app::FloatCam;
use crate::input::PointerInput;
use crate::profile_scope;
use gpui::*;

impl FloatCam {
    pub fn handle_mouse_down(
        &mut self,
        event: &MouseDownEvent,
        _window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        profile_scope!("handle_mouse_down");

        // Keep the press from reaching the desktop underneath
        cx.stop_propagation();

        if self.pointer.press(&PointerInput::from(event.position)) {
            cx.notify();
        }
    }
}
