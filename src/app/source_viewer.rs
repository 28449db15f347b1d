//! Source viewer - tab selection and copy-to-clipboard feedback.

use super::FloatCam;
use crate::types::SourceFile;
use gpui::*;

/// COPIED! label state.
///
/// Every copy bumps the generation; a timer only clears the label if no newer
/// copy happened since it was armed.
#[derive(Debug, Clone, Default)]
pub struct CopyFeedback {
    generation: u64,
    showing: bool,
}

impl CopyFeedback {
    /// Show the label. Returns the generation the expiry timer must present.
    pub fn mark_copied(&mut self) -> u64 {
        self.generation += 1;
        self.showing = true;
        self.generation
    }

    /// Hide the label if `generation` is still the latest copy. Returns true
    /// if the label was hidden.
    pub fn expire(&mut self, generation: u64) -> bool {
        if !self.showing || generation != self.generation {
            return false;
        }
        self.showing = false;
        true
    }

    pub fn is_showing(&self) -> bool {
        self.showing
    }
}

pub struct SourceViewerState {
    files: &'static [SourceFile],
    active: usize,
    pub copy: CopyFeedback,
}

impl SourceViewerState {
    pub fn new(files: &'static [SourceFile]) -> Self {
        Self {
            files,
            active: 0,
            copy: CopyFeedback::default(),
        }
    }

    pub fn files(&self) -> &'static [SourceFile] {
        self.files
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    pub fn active_file(&self) -> Option<&'static SourceFile> {
        self.files.get(self.active)
    }

    /// Select a tab. Returns false for the current tab or an index with no
    /// file.
    pub fn select(&mut self, index: usize) -> bool {
        if index == self.active || index >= self.files.len() {
            return false;
        }
        self.active = index;
        true
    }

    pub fn copy_label(&self) -> &'static str {
        if self.copy.is_showing() {
            "COPIED!"
        } else {
            "COPY CODE"
        }
    }
}

impl FloatCam {
    pub fn select_source_tab(&mut self, index: usize, cx: &mut Context<Self>) {
        if self.viewer.select(index) {
            cx.notify();
        }
    }

    /// Copy the active file to the system clipboard and show COPIED! for the
    /// configured duration.
    pub fn copy_active_source(&mut self, cx: &mut Context<Self>) {
        let Some(file) = self.viewer.active_file() else {
            return;
        };
        cx.write_to_clipboard(ClipboardItem::new_string(file.content.to_string()));
        tracing::debug!(file = file.name, lines = file.line_count(), "Copied source");

        let generation = self.viewer.copy.mark_copied();
        let delay = self.settings.data.copy_feedback();
        cx.spawn(async move |this, cx| {
            cx.background_executor().timer(delay).await;
            let _ = this.update(cx, |this, cx| {
                if this.viewer.copy.expire(generation) {
                    cx.notify();
                }
            });
        })
        .detach();
        cx.notify();
    }
}
