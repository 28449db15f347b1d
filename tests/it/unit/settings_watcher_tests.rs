//! Unit tests for settings_watcher module.

use floatcam::settings::Settings;
use floatcam::settings_watcher::{SettingsEvent, SettingsWatcher, default_settings_path};
use floatcam::types::BackgroundStyle;
use std::fs;
use std::io::Write;
use std::thread;
use std::time::Duration;
use tempfile::tempdir;

#[test]
fn test_watcher_creation() {
    let dir = tempdir().unwrap();
    let settings_path = dir.path().join("settings.json");
    fs::write(&settings_path, "{}").unwrap();

    let watcher = SettingsWatcher::new(settings_path.clone());
    assert!(watcher.is_ok());
    assert_eq!(watcher.unwrap().path(), settings_path.as_path());
}

#[test]
fn test_watcher_creates_missing_directory() {
    let dir = tempdir().unwrap();
    let settings_path = dir.path().join("floatcam").join("settings.json");

    assert!(SettingsWatcher::new(settings_path).is_ok());
    assert!(dir.path().join("floatcam").is_dir());
}

#[test]
fn test_default_path_ends_with_settings_file() {
    if let Some(path) = default_settings_path() {
        assert!(path.ends_with("floatcam/settings.json"));
    }
}

#[test]
fn test_poll_without_changes() {
    let dir = tempdir().unwrap();
    let settings_path = dir.path().join("settings.json");
    fs::write(&settings_path, "{}").unwrap();

    let mut watcher = SettingsWatcher::new(settings_path).unwrap();
    // Nothing touched the settings file
    assert!(watcher.poll().is_none() || cfg!(target_os = "macos"));
}

/// Poll until the watcher reports something or about two seconds pass.
fn poll_until<T>(mut poll: impl FnMut() -> Option<T>) -> Option<T> {
    for _ in 0..40 {
        if let Some(value) = poll() {
            return Some(value);
        }
        thread::sleep(Duration::from_millis(50));
    }
    None
}

#[test]
fn test_file_modification_detection() {
    let dir = tempdir().unwrap();
    let settings_path = dir.path().join("settings.json");
    fs::write(&settings_path, "{}").unwrap();

    let mut watcher = SettingsWatcher::new(settings_path.clone()).unwrap();

    let mut file = fs::OpenOptions::new()
        .write(true)
        .truncate(true)
        .open(&settings_path)
        .unwrap();
    writeln!(file, "{{\"background_style\": \"color\"}}").unwrap();
    file.sync_all().unwrap();

    let event = poll_until(|| watcher.poll()).expect("no event for the settings file");
    assert!(
        matches!(event, SettingsEvent::Modified | SettingsEvent::Created),
        "unexpected event {:?}",
        event
    );
}

#[test]
fn test_reload_picks_up_new_style() {
    let dir = tempdir().unwrap();
    let settings_path = dir.path().join("settings.json");
    Settings::default().save_to(&settings_path).unwrap();

    let mut watcher = SettingsWatcher::new(settings_path.clone()).unwrap();

    let updated = Settings {
        background_style: BackgroundStyle::Gradient,
        ..Settings::default()
    };
    updated.save_to(&settings_path).unwrap();

    let reloaded = poll_until(|| watcher.poll_reload())
        .expect("settings were not reloaded")
        .unwrap();
    assert_eq!(reloaded.background_style, BackgroundStyle::Gradient);
}

#[test]
fn test_sibling_file_changes_are_ignored() {
    let dir = tempdir().unwrap();
    let settings_path = dir.path().join("settings.json");
    fs::write(&settings_path, "{}").unwrap();

    let mut watcher = SettingsWatcher::new(settings_path).unwrap();
    fs::write(dir.path().join("other.json"), "{}").unwrap();
    thread::sleep(Duration::from_millis(200));

    // FSEvents may still report the settings file's own creation
    let event = watcher.poll();
    assert!(event.is_none() || cfg!(target_os = "macos"), "unexpected event {:?}", event);
}
