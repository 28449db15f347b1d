//! Settings-related methods - background style and hot-reload.

use super::FloatCam;
use crate::settings::Settings;
use crate::types::BackgroundStyle;
use gpui::*;

impl FloatCam {
    /// Switch the floating window's chrome and remember the choice.
    pub fn set_background_style(&mut self, style: BackgroundStyle, cx: &mut Context<Self>) {
        if self.style == style {
            return;
        }
        self.style = style;
        self.settings.data.background_style = style;
        if let Err(e) = self.settings.data.save() {
            tracing::warn!("Failed to save settings: {}", e);
        }
        cx.notify();
    }

    /// Check for settings file changes and reload if needed.
    pub fn check_settings_reload(&mut self, cx: &mut Context<Self>) {
        let Some(watcher) = self.settings.watcher.as_mut() else {
            return;
        };
        match watcher.poll_reload() {
            Some(Ok(data)) => self.apply_settings(data, cx),
            Some(Err(e)) => tracing::warn!("Ignoring invalid settings file: {}", e),
            None => {}
        }
    }

    /// Apply reloaded settings. The startup position only matters at launch,
    /// so the floating window stays where it is.
    fn apply_settings(&mut self, data: Settings, cx: &mut Context<Self>) {
        self.style = data.background_style;
        self.settings.data = data;
        cx.notify();
    }
}
