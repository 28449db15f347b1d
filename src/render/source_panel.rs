//! Source panel - tabbed source viewer with copy button, plus notes.

use crate::app::{FloatCam, SourceViewerState};
use crate::constants::{
    BORDER_RADIUS_LG, BORDER_RADIUS_SM, BORDER_RADIUS_XL, DEFAULT_CODE_FONT, PADDING_LG,
    PADDING_MD, PADDING_SM, SOURCE_PANEL_WIDTH,
};
use gpui::prelude::FluentBuilder;
use gpui::*;
use gpui_component::{h_flex, v_flex};

const EDITOR_BG: u32 = 0x1e1e1e;
const TAB_STRIP_BG: u32 = 0x252526;
const TAB_ACTIVE_FG: u32 = 0x60a5fa;
const TAB_ACTIVE_ACCENT: u32 = 0x3b82f6;
const TAB_IDLE_FG: u32 = 0x71717a;
const TAB_HOVER_FG: u32 = 0xd4d4d8;

const NOTES: [&str; 4] = [
    "Explicit drag state machine: Idle and Dragging, with the anchor stored inside Dragging.",
    "Window-level move and release listeners exist only while a pointer capture is held.",
    "Single active pointer: a second press during a drag is ignored.",
    "No camera is opened; the preview feed is simulated.",
];

/// Render the right-hand column
pub fn render_source_panel(viewer: &SourceViewerState, cx: &mut Context<FloatCam>) -> Div {
    v_flex()
        .w(px(SOURCE_PANEL_WIDTH))
        .h_full()
        .gap(px(PADDING_LG))
        .child(
            h_flex()
                .justify_between()
                .child(
                    div()
                        .text_xl()
                        .font_weight(FontWeight::SEMIBOLD)
                        .text_color(white())
                        .child("Source Files"),
                )
                .child(
                    div()
                        .px(px(PADDING_SM))
                        .py(px(4.0))
                        .rounded(px(BORDER_RADIUS_SM))
                        .text_size(px(10.0))
                        .bg(hsla(152.0 / 360.0, 0.7, 0.4, 0.2))
                        .border_1()
                        .border_color(hsla(152.0 / 360.0, 0.7, 0.4, 0.3))
                        .text_color(rgb(0x34d399))
                        .child("Rust / gpui"),
                ),
        )
        .child(
            v_flex()
                .flex_1()
                .min_h_0()
                .rounded(px(BORDER_RADIUS_LG))
                .overflow_hidden()
                .bg(rgb(EDITOR_BG))
                .border_1()
                .border_color(hsla(0.0, 0.0, 1.0, 0.1))
                .child(render_tabs(viewer, cx))
                .child(render_code(viewer, cx)),
        )
        .child(render_notes())
}

fn render_tabs(viewer: &SourceViewerState, cx: &mut Context<FloatCam>) -> Div {
    let active_index = viewer.active_index();

    h_flex()
        .bg(rgb(TAB_STRIP_BG))
        .border_b_1()
        .border_color(hsla(0.0, 0.0, 1.0, 0.05))
        .children(viewer.files().iter().enumerate().map(|(index, file)| {
            let active = index == active_index;
            div()
                .id(ElementId::Name(format!("source-tab-{}", index).into()))
                .px(px(16.0))
                .py(px(PADDING_MD))
                .text_xs()
                .font_weight(FontWeight::MEDIUM)
                .border_r_1()
                .border_color(hsla(0.0, 0.0, 1.0, 0.05))
                .cursor_pointer()
                .map(|this| {
                    if active {
                        this.bg(rgb(EDITOR_BG))
                            .text_color(rgb(TAB_ACTIVE_FG))
                            .border_t_2()
                            .border_color(rgb(TAB_ACTIVE_ACCENT))
                    } else {
                        this.text_color(rgb(TAB_IDLE_FG))
                            .hover(|s| s.text_color(rgb(TAB_HOVER_FG)))
                    }
                })
                .child(file.name)
                .on_click(cx.listener(move |this, _, _window, cx| {
                    this.select_source_tab(index, cx);
                }))
        }))
}

fn render_code(viewer: &SourceViewerState, cx: &mut Context<FloatCam>) -> Div {
    let content = viewer.active_file().map(|f| f.content).unwrap_or_default();

    div()
        .relative()
        .flex_1()
        .min_h_0()
        .child(
            div()
                .id("source-content")
                .size_full()
                .overflow_scroll()
                .p(px(PADDING_LG))
                .child(
                    div()
                        .font_family(DEFAULT_CODE_FONT)
                        .text_sm()
                        .whitespace_nowrap()
                        .text_color(rgb(TAB_HOVER_FG))
                        .child(content),
                ),
        )
        .child(
            div()
                .id("copy-code")
                .absolute()
                .top(px(16.0))
                .right(px(16.0))
                .px(px(PADDING_MD))
                .py(px(6.0))
                .rounded(px(8.0))
                .bg(rgb(0x2563eb))
                .hover(|s| s.bg(rgb(0x3b82f6)))
                .shadow_lg()
                .text_size(px(10.0))
                .font_weight(FontWeight::BOLD)
                .text_color(white())
                .cursor_pointer()
                .child(viewer.copy_label())
                .on_click(cx.listener(|this, _, _window, cx| {
                    this.copy_active_source(cx);
                })),
        )
}

fn render_notes() -> Div {
    v_flex()
        .p(px(PADDING_LG))
        .gap(px(PADDING_SM))
        .rounded(px(BORDER_RADIUS_XL))
        .bg(hsla(0.0, 0.0, 1.0, 0.05))
        .border_1()
        .border_color(hsla(0.0, 0.0, 1.0, 0.1))
        .child(
            div()
                .font_weight(FontWeight::BOLD)
                .text_color(white())
                .child("Technical Implementation"),
        )
        .children(NOTES.iter().map(|note| {
            h_flex()
                .items_start()
                .gap(px(PADDING_SM))
                .text_sm()
                .text_color(rgb(0xa1a1aa))
                .child(div().text_color(rgb(TAB_ACTIVE_FG)).child("•"))
                .child(div().flex_1().child(*note))
        }))
}
