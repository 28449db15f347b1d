//! Settings file watcher for hot-reload.
//!
//! Watches the directory containing the settings file (editors often replace
//! files rather than write in place) and reports events for that file only.
//! The host polls from the foreground thread; nothing here touches UI state.

use crate::settings::{Settings, SettingsResult};
use notify::{Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, Receiver, TryRecvError};

pub use crate::settings::default_settings_path;

/// A change to the settings file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingsEvent {
    Modified,
    Created,
    Deleted,
    Error(String),
}

impl SettingsEvent {
    /// Whether the file should be read again.
    pub fn requires_reload(&self) -> bool {
        matches!(self, Self::Modified | Self::Created)
    }
}

pub struct SettingsWatcher {
    path: PathBuf,
    rx: Receiver<notify::Result<Event>>,
    // Dropping the watcher stops the OS subscription
    _watcher: RecommendedWatcher,
}

impl SettingsWatcher {
    /// Start watching `path`, creating its parent directory if missing.
    pub fn new(path: PathBuf) -> SettingsResult<Self> {
        let (tx, rx) = mpsc::channel();
        let mut watcher = notify::recommended_watcher(move |res: notify::Result<Event>| {
            // Receiver gone means the watcher is being torn down
            let _ = tx.send(res);
        })?;

        let dir = path.parent().unwrap_or_else(|| Path::new("."));
        fs::create_dir_all(dir)?;
        watcher.watch(dir, RecursiveMode::NonRecursive)?;
        tracing::debug!("Watching settings at {}", path.display());

        Ok(Self {
            path,
            rx,
            _watcher: watcher,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Drain pending notifications and return the most recent relevant one.
    pub fn poll(&mut self) -> Option<SettingsEvent> {
        let mut latest = None;
        loop {
            match self.rx.try_recv() {
                Ok(Ok(event)) => {
                    if let Some(mapped) = classify_event(&self.path, &event) {
                        latest = Some(mapped);
                    }
                }
                Ok(Err(e)) => return Some(SettingsEvent::Error(e.to_string())),
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    return Some(SettingsEvent::Error("watcher disconnected".into()));
                }
            }
        }
        latest
    }

    /// Poll and, if the file changed, load it again. Deletions and watch
    /// errors are logged and yield `None`.
    pub fn poll_reload(&mut self) -> Option<SettingsResult<Settings>> {
        match self.poll()? {
            event if event.requires_reload() => {
                tracing::info!("Settings file changed, reloading...");
                Some(Settings::load_from(&self.path))
            }
            SettingsEvent::Error(e) => {
                tracing::error!("Settings watch error: {}", e);
                None
            }
            _ => {
                tracing::warn!("Settings file deleted");
                None
            }
        }
    }
}

/// Map a raw notify event to a settings event, if it concerns `settings_path`.
fn classify_event(settings_path: &Path, event: &Event) -> Option<SettingsEvent> {
    if !event.paths.iter().any(|p| is_settings_file(settings_path, p)) {
        return None;
    }
    match event.kind {
        EventKind::Create(_) => Some(SettingsEvent::Created),
        EventKind::Modify(_) => Some(SettingsEvent::Modified),
        EventKind::Remove(_) => Some(SettingsEvent::Deleted),
        _ => None,
    }
}

// Watch backends may report canonicalized paths, so match on file name
fn is_settings_file(settings_path: &Path, candidate: &Path) -> bool {
    candidate == settings_path || candidate.file_name() == settings_path.file_name()
}
