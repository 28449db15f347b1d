//! User settings - loaded from `<config_dir>/floatcam/settings.json`.
//!
//! Every field has a default, so a missing file or missing keys are never an
//! error. The floating window's position is deliberately not stored; only the
//! startup position is configurable.

use crate::constants::{
    APP_DIR_NAME, COPY_FEEDBACK_MS, DEFAULT_FLOATING_POSITION, SETTINGS_FILE_NAME,
};
use crate::input::Position;
use crate::types::BackgroundStyle;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, warn};

/// Errors that can occur while loading, saving or watching settings
#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Settings parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Settings watch error: {0}")]
    Watch(#[from] notify::Error),

    #[error("No configuration directory on this platform")]
    NoConfigDir,
}

pub type SettingsResult<T> = Result<T, SettingsError>;

/// Path of the settings file, if the platform has a config directory
pub fn default_settings_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR_NAME).join(SETTINGS_FILE_NAME))
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Style the floating window starts with
    pub background_style: BackgroundStyle,
    /// Where the floating window appears at startup
    pub initial_position: Position,
    /// How long the COPIED! feedback stays visible
    pub copy_feedback_ms: u64,
    /// Whether the source viewer column is shown
    pub show_source_panel: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            background_style: BackgroundStyle::default(),
            initial_position: DEFAULT_FLOATING_POSITION,
            copy_feedback_ms: COPY_FEEDBACK_MS,
            show_source_panel: true,
        }
    }
}

impl Settings {
    /// Load from the default location, falling back to defaults on any error.
    pub fn load() -> Self {
        let Some(path) = default_settings_path() else {
            warn!("No config directory; using default settings");
            return Self::default();
        };
        Self::load_from(&path).unwrap_or_else(|e| {
            warn!("Failed to load settings from {}: {}", path.display(), e);
            Self::default()
        })
    }

    /// Load from an explicit path. A missing file yields the defaults.
    pub fn load_from(path: &Path) -> SettingsResult<Self> {
        if !path.exists() {
            debug!("No settings file at {}", path.display());
            return Ok(Self::default());
        }
        let raw = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// Save to the default location.
    pub fn save(&self) -> SettingsResult<()> {
        let path = default_settings_path().ok_or(SettingsError::NoConfigDir)?;
        self.save_to(&path)
    }

    pub fn save_to(&self, path: &Path) -> SettingsResult<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, serde_json::to_string_pretty(self)?)?;
        debug!("Saved settings to {}", path.display());
        Ok(())
    }

    pub fn copy_feedback(&self) -> Duration {
        Duration::from_millis(self.copy_feedback_ms)
    }
}
