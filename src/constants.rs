//! Application-wide constants.
//!
//! Centralizes magic numbers and layout values to make the codebase
//! more maintainable and self-documenting.

use crate::input::Position;

// ============================================================================
// Window
// ============================================================================

/// Title of the main window
pub const WINDOW_TITLE: &str = "iPadOS Floating Preview";

/// Initial window size in pixels
pub const WINDOW_WIDTH: f32 = 1440.0;
pub const WINDOW_HEIGHT: f32 = 900.0;

/// Outer padding around the whole layout
pub const LAYOUT_PADDING: f32 = 32.0;

/// Gap between the desktop column and the source panel
pub const LAYOUT_GAP: f32 = 32.0;

// ============================================================================
// Floating Window
// ============================================================================

/// Where the floating window starts, relative to the desktop canvas
pub const DEFAULT_FLOATING_POSITION: Position = Position::new(50.0, 100.0);

/// Floating window size in pixels
pub const FLOATING_WINDOW_WIDTH: f32 = 288.0;
pub const FLOATING_WINDOW_HEIGHT: f32 = 176.0;

/// Height of the floating window's title strip
pub const FLOATING_HEADER_HEIGHT: f32 = 32.0;

/// Corner radius of the floating window
pub const FLOATING_WINDOW_RADIUS: f32 = 24.0;

/// Period of the recording dot pulse, in milliseconds
pub const RECORDING_PULSE_MS: u64 = 2000;

// ============================================================================
// Desktop Chrome
// ============================================================================

/// Corner radius of the simulated iPad screen
pub const SCREEN_RADIUS: f32 = 40.0;

/// Height of the status bar
pub const STATUS_BAR_HEIGHT: f32 = 40.0;

/// Number of placeholder app icons
pub const ICON_COUNT: usize = 12;

/// App icon size
pub const ICON_SIZE: f32 = 64.0;

/// Gap between app icons
pub const ICON_GAP: f32 = 48.0;

/// Home indicator size
pub const HOME_INDICATOR_WIDTH: f32 = 192.0;
pub const HOME_INDICATOR_HEIGHT: f32 = 4.0;

// ============================================================================
// Source Panel
// ============================================================================

/// Width of the source viewer column
pub const SOURCE_PANEL_WIDTH: f32 = 560.0;

/// Monospace font for the source viewer
pub const DEFAULT_CODE_FONT: &str = "Menlo";

/// How long the COPIED! label stays up, in milliseconds
pub const COPY_FEEDBACK_MS: u64 = 2000;

// ============================================================================
// Settings
// ============================================================================

/// Directory under the platform config dir
pub const APP_DIR_NAME: &str = "floatcam";

/// Settings file name
pub const SETTINGS_FILE_NAME: &str = "settings.json";

/// How often the settings watcher is polled, in milliseconds
pub const SETTINGS_POLL_MS: u64 = 500;

// ============================================================================
// UI Spacing Constants
// ============================================================================

/// Border radius - Small (buttons, badges)
pub const BORDER_RADIUS_SM: f32 = 4.0;
/// Border radius - Large (panels)
pub const BORDER_RADIUS_LG: f32 = 12.0;
/// Border radius - Extra Large (cards)
pub const BORDER_RADIUS_XL: f32 = 16.0;

/// Padding - Small
pub const PADDING_SM: f32 = 8.0;
/// Padding - Medium
pub const PADDING_MD: f32 = 12.0;
/// Padding - Large
pub const PADDING_LG: f32 = 24.0;
