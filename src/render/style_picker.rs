//! Page header with the background style picker.

use crate::app::FloatCam;
use crate::constants::BORDER_RADIUS_LG;
use crate::types::BackgroundStyle;
use gpui::prelude::FluentBuilder;
use gpui::*;
use gpui_component::{ActiveTheme as _, h_flex, v_flex};

/// Render the title block and the style buttons
pub fn render_header(active: BackgroundStyle, cx: &mut Context<FloatCam>) -> Div {
    h_flex()
        .justify_between()
        .child(
            v_flex()
                .child(
                    div()
                        .text_3xl()
                        .font_weight(FontWeight::BOLD)
                        .text_color(white())
                        .child("iPadOS Floating Preview"),
                )
                .child(
                    div()
                        .mt(px(4.0))
                        .text_color(rgb(0xa1a1aa))
                        .child("Simulated desktop. Drag the camera window."),
                ),
        )
        .child(
            h_flex()
                .p(px(4.0))
                .gap(px(4.0))
                .rounded(px(BORDER_RADIUS_LG))
                .bg(hsla(0.0, 0.0, 1.0, 0.05))
                .border_1()
                .border_color(hsla(0.0, 0.0, 1.0, 0.1))
                .children(
                    BackgroundStyle::ALL
                        .into_iter()
                        .map(|style| render_style_button(style, style == active, cx)),
                ),
        )
}

fn render_style_button(
    style: BackgroundStyle,
    selected: bool,
    cx: &Context<FloatCam>,
) -> Stateful<Div> {
    let selected_bg = cx.theme().primary;
    let selected_fg = cx.theme().primary_foreground;
    let idle_fg = cx.theme().muted_foreground;
    let hover_fg = cx.theme().foreground;

    div()
        .id(ElementId::Name(format!("style-{}", style.label()).into()))
        .px(px(16.0))
        .py(px(8.0))
        .rounded(px(8.0))
        .text_xs()
        .font_weight(FontWeight::BOLD)
        .cursor_pointer()
        .map(|this| {
            if selected {
                this.bg(selected_bg).text_color(selected_fg).shadow_lg()
            } else {
                this.text_color(idle_fg).hover(|s| s.text_color(hover_fg))
            }
        })
        .child(style.label())
        .on_click(cx.listener(move |this, _, _window, cx| {
            this.set_background_style(style, cx);
        }))
}
