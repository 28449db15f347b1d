//! Desktop rendering - the simulated iPad screen that hosts the floating
//! window.
//!
//! The screen is the canvas: the floating window is positioned absolutely
//! inside it at whatever the drag core reports. Nothing here clamps.

use super::render_floating_window;
use crate::app::FloatCam;
use crate::constants::{
    HOME_INDICATOR_HEIGHT, HOME_INDICATOR_WIDTH, ICON_COUNT, ICON_GAP, ICON_SIZE, SCREEN_RADIUS,
    STATUS_BAR_HEIGHT,
};
use gpui::*;
use gpui_component::{h_flex, v_flex};

/// Render the iPad screen with its chrome and the floating window
pub fn render_desktop(app: &FloatCam, cx: &mut Context<FloatCam>) -> Stateful<Div> {
    div()
        .id("ipad-screen")
        .relative()
        .flex_1()
        .w_full()
        .mt(px(24.0))
        .overflow_hidden()
        .rounded(px(SCREEN_RADIUS))
        .border_4()
        .border_color(rgb(0x18181b))
        .bg(linear_gradient(
            160.0,
            linear_color_stop(rgb(0x1e3a8a), 0.0),
            linear_color_stop(rgb(0x7c3aed), 1.0),
        ))
        .shadow_2xl()
        .child(render_status_bar())
        .child(render_icon_grid())
        .child(render_floating_window(app, cx))
        .child(render_home_indicator())
}

/// Invisible layer that registers window-wide mouse move/up listeners.
///
/// Listeners registered during paint last for one frame, so they disappear as
/// soon as the host stops rendering this layer (on drag end).
pub fn render_pointer_capture(view: Entity<FloatCam>) -> Canvas<()> {
    let on_move = view.clone();
    let on_up = view;

    canvas(
        |_bounds, _window, _cx| (),
        move |_bounds, _, window, _cx| {
            window.on_mouse_event(move |event: &MouseMoveEvent, phase, window, cx| {
                if phase == DispatchPhase::Bubble {
                    on_move.update(cx, |this, cx| this.handle_mouse_move(event, window, cx));
                }
            });
            window.on_mouse_event(move |event: &MouseUpEvent, phase, window, cx| {
                if phase == DispatchPhase::Bubble {
                    on_up.update(cx, |this, cx| this.handle_mouse_up(event, window, cx));
                }
            });
        },
    )
    .absolute()
    .size_full()
}

fn render_status_bar() -> Div {
    h_flex()
        .absolute()
        .top_0()
        .left_0()
        .right_0()
        .h(px(STATUS_BAR_HEIGHT))
        .px(px(40.0))
        .justify_between()
        .text_size(px(10.0))
        .font_weight(FontWeight::BOLD)
        .text_color(white())
        .child("9:41 AM")
        .child(h_flex().gap(px(8.0)).child("▲").child("▮"))
}

fn render_icon_grid() -> Div {
    div()
        .flex()
        .flex_wrap()
        .gap(px(ICON_GAP))
        .p(px(64.0))
        .opacity(0.8)
        .children((0..ICON_COUNT).map(|_| {
            v_flex()
                .items_center()
                .gap(px(8.0))
                .child(
                    div()
                        .size(px(ICON_SIZE))
                        .rounded(px(16.0))
                        .bg(hsla(0.0, 0.0, 1.0, 0.2)),
                )
                .child(
                    div()
                        .w(px(48.0))
                        .h(px(8.0))
                        .rounded_full()
                        .bg(hsla(0.0, 0.0, 1.0, 0.2)),
                )
        }))
}

fn render_home_indicator() -> Div {
    h_flex()
        .absolute()
        .bottom(px(8.0))
        .left_0()
        .right_0()
        .justify_center()
        .child(
            div()
                .w(px(HOME_INDICATOR_WIDTH))
                .h(px(HOME_INDICATOR_HEIGHT))
                .rounded_full()
                .bg(hsla(0.0, 0.0, 1.0, 0.4)),
        )
}
