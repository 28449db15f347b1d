//! Application state - the FloatCam struct definition and sub-structs.

use super::SourceViewerState;
use crate::input::PointerTracker;
use crate::perf::PerfMonitor;
use crate::settings::Settings;
use crate::settings_watcher::SettingsWatcher;
use crate::types::BackgroundStyle;
use gpui::Task;

/// Settings data and the watcher that keeps it fresh
pub struct SettingsState {
    /// Current settings
    pub data: Settings,
    /// Settings file watcher for hot-reload
    pub watcher: Option<SettingsWatcher>,
}

/// Performance and background work
pub struct SystemState {
    /// Render frame timing
    pub perf_monitor: PerfMonitor,
    /// Periodic settings poll; dropping it cancels the loop
    pub settings_poll: Option<Task<()>>,
}

/// Main view: the simulated desktop, the floating window and the source
/// viewer.
pub struct FloatCam {
    /// Floating window position and its drag state
    pub pointer: PointerTracker,
    /// Chrome style of the floating window
    pub style: BackgroundStyle,
    /// Source viewer tabs and copy feedback
    pub viewer: SourceViewerState,
    /// Settings state
    pub settings: SettingsState,
    /// System and performance state
    pub system: SystemState,
}
