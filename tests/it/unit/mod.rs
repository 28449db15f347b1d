//! Unit tests for FloatCam.

mod perf_tests;
mod settings_watcher_tests;
mod snapshot_tests;
