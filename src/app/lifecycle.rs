//! Application lifecycle - construction and the settings poll loop.

use super::{FloatCam, SettingsState, SourceViewerState, SystemState};
use crate::constants::SETTINGS_POLL_MS;
use crate::input::PointerTracker;
use crate::perf::PerfMonitor;
use crate::settings::Settings;
use crate::settings_watcher::{SettingsWatcher, default_settings_path};
use crate::sources::SOURCE_FILES;
use gpui::*;
use std::time::Duration;

impl FloatCam {
    pub fn new(settings: Settings, cx: &mut Context<Self>) -> Self {
        let watcher = default_settings_path().and_then(|path| {
            SettingsWatcher::new(path)
                .map_err(|e| tracing::warn!("Settings hot-reload disabled: {}", e))
                .ok()
        });
        let settings_poll = watcher.is_some().then(|| Self::spawn_settings_poll(cx));

        let start = settings.initial_position;
        tracing::info!(
            x = start.x,
            y = start.y,
            style = ?settings.background_style,
            "Floating preview ready"
        );

        Self {
            pointer: PointerTracker::new(start),
            style: settings.background_style,
            viewer: SourceViewerState::new(SOURCE_FILES),
            settings: SettingsState {
                data: settings,
                watcher,
            },
            system: SystemState {
                perf_monitor: PerfMonitor::new(),
                settings_poll,
            },
        }
    }

    fn spawn_settings_poll(cx: &mut Context<Self>) -> Task<()> {
        cx.spawn(async move |this, cx| {
            loop {
                cx.background_executor()
                    .timer(Duration::from_millis(SETTINGS_POLL_MS))
                    .await;
                // View released: stop polling
                if this
                    .update(cx, |this, cx| this.check_settings_reload(cx))
                    .is_err()
                {
                    break;
                }
            }
        })
    }
}
