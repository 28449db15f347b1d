//! Floating camera preview window.
//!
//! The window is drawn at the drag core's position, relative to the desktop
//! canvas. Pointer down on any part of it starts a drag. Moves are handled at
//! window level by the pointer capture layer; releases are also caught here.

use crate::app::FloatCam;
use crate::constants::{
    FLOATING_HEADER_HEIGHT, FLOATING_WINDOW_HEIGHT, FLOATING_WINDOW_RADIUS, FLOATING_WINDOW_WIDTH,
    RECORDING_PULSE_MS,
};
use crate::input::DRAG_BUTTON;
use crate::types::BackgroundStyle;
use gpui::prelude::FluentBuilder;
use gpui::*;
use gpui_component::{h_flex, v_flex};
use std::time::Duration;

/// Fill and border for each background style
struct WindowChrome {
    background: Background,
    border: Hsla,
}

impl WindowChrome {
    fn for_style(style: BackgroundStyle) -> Self {
        match style {
            // gpui has no backdrop blur; a translucent white panel stands in
            BackgroundStyle::Blur => Self {
                background: hsla(0.0, 0.0, 1.0, 0.1).into(),
                border: hsla(0.0, 0.0, 1.0, 0.2),
            },
            BackgroundStyle::Color => Self {
                background: Hsla::from(rgb(0x27272a)).into(),
                border: rgb(0x3f3f46).into(),
            },
            BackgroundStyle::Gradient => Self {
                background: linear_gradient(
                    135.0,
                    linear_color_stop(rgb(0x6366f1), 0.0),
                    linear_color_stop(rgb(0x9333ea), 1.0),
                ),
                border: hsla(0.0, 0.0, 1.0, 0.2),
            },
        }
    }
}

pub fn render_floating_window(app: &FloatCam, cx: &mut Context<FloatCam>) -> Stateful<Div> {
    let position = app.pointer.position();
    let dragging = app.pointer.is_dragging();
    let chrome = WindowChrome::for_style(app.style);

    div()
        .id("floating-window")
        .absolute()
        .left(px(position.x))
        .top(px(position.y))
        .w(px(FLOATING_WINDOW_WIDTH))
        .h(px(FLOATING_WINDOW_HEIGHT))
        .flex()
        .flex_col()
        .rounded(px(FLOATING_WINDOW_RADIUS))
        .overflow_hidden()
        .bg(chrome.background)
        .cursor(if dragging {
            CursorStyle::ClosedHand
        } else {
            CursorStyle::OpenHand
        })
        .map(|this| {
            if dragging {
                this.shadow_2xl()
                    .border_2()
                    .border_color(hsla(0.0, 0.0, 1.0, 0.3))
            } else {
                this.shadow_lg().border_1().border_color(chrome.border)
            }
        })
        .on_mouse_down(DRAG_BUTTON, cx.listener(FloatCam::handle_mouse_down))
        // Present before the capture layer is painted, so a fast tap still ends
        .on_mouse_up(DRAG_BUTTON, cx.listener(FloatCam::handle_mouse_up))
        .on_mouse_up_out(DRAG_BUTTON, cx.listener(FloatCam::handle_mouse_up))
        .child(render_title_strip())
        .child(render_feed())
}

fn render_title_strip() -> Div {
    h_flex()
        .h(px(FLOATING_HEADER_HEIGHT))
        .px(px(16.0))
        .gap(px(8.0))
        .bg(hsla(0.0, 0.0, 0.0, 0.2))
        .child(
            div()
                .size(px(8.0))
                .rounded_full()
                .bg(rgb(0xef4444))
                .with_animation(
                    "recording-pulse",
                    Animation::new(Duration::from_millis(RECORDING_PULSE_MS))
                        .repeat()
                        .with_easing(pulsating_between(0.4, 1.0)),
                    |dot, delta| dot.opacity(delta),
                ),
        )
        .child(
            div()
                .text_size(px(10.0))
                .font_weight(FontWeight::BOLD)
                .text_color(white())
                .child("CAMERA PREVIEW"),
        )
}

/// Placeholder for the camera feed; no device is opened.
fn render_feed() -> Div {
    div().flex_1().p(px(8.0)).child(
        div()
            .size_full()
            .flex()
            .items_center()
            .justify_center()
            .rounded(px(16.0))
            .overflow_hidden()
            .border_1()
            .border_color(hsla(0.0, 0.0, 1.0, 0.1))
            .bg(linear_gradient(
                180.0,
                linear_color_stop(rgb(0x27272a), 0.0),
                linear_color_stop(rgb(0x09090b), 1.0),
            ))
            .child(
                v_flex()
                    .items_center()
                    .gap(px(4.0))
                    .child(
                        div()
                            .text_xs()
                            .text_color(hsla(0.0, 0.0, 1.0, 0.6))
                            .child("No camera"),
                    )
                    .child(
                        div()
                            .text_size(px(9.0))
                            .text_color(hsla(0.0, 0.0, 1.0, 0.4))
                            .child("Simulated feed"),
                    ),
            ),
    )
}
