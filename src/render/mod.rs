//! Rendering - the main layout and its panels.
//!
//! - `desktop` - The simulated iPad screen (the canvas) and the pointer
//!   capture layer
//! - `floating_window` - The draggable camera preview
//! - `style_picker` - Page header with the background style buttons
//! - `source_panel` - Tabbed source viewer and implementation notes

mod desktop;
mod floating_window;
mod source_panel;
mod style_picker;

pub use desktop::{render_desktop, render_pointer_capture};
pub use floating_window::render_floating_window;
pub use source_panel::render_source_panel;
pub use style_picker::render_header;

use crate::app::FloatCam;
use crate::constants::{LAYOUT_GAP, LAYOUT_PADDING};
use crate::profile_scope;
use gpui::prelude::FluentBuilder;
use gpui::*;
use gpui_component::v_flex;

/// Page background behind both columns
pub const PAGE_BACKGROUND: u32 = 0x0f172a;

impl Render for FloatCam {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        profile_scope!("render");
        self.system.perf_monitor.begin_frame();

        // Window-level listeners only exist while a drag holds the capture
        let capture = self
            .pointer
            .is_capturing()
            .then(|| render_pointer_capture(cx.entity()));

        let layout = div()
            .id("floatcam-root")
            .relative()
            .size_full()
            .flex()
            .gap(px(LAYOUT_GAP))
            .p(px(LAYOUT_PADDING))
            .bg(rgb(PAGE_BACKGROUND))
            .child(
                v_flex()
                    .flex_1()
                    .min_w_0()
                    .h_full()
                    .child(render_header(self.style, cx))
                    .child(render_desktop(self, cx)),
            )
            .when(self.settings.data.show_source_panel, |this| {
                this.child(render_source_panel(&self.viewer, cx))
            })
            .children(capture);

        self.system.perf_monitor.end_frame();
        self.system.perf_monitor.log_summary_if_slow();
        layout
    }
}
