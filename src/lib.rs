//! FloatCam - an iPadOS-style desktop mockup with a draggable floating camera
//! preview and a tabbed source viewer, built on gpui.
//!
//! The interesting part lives in [`input`]: a small drag state machine that
//! turns pointer events into a window position, and the scoped pointer capture
//! that owns window-level listeners for the duration of one drag. Everything
//! under [`render`] is presentation.

pub mod app;
pub mod constants;
pub mod input;
pub mod perf;
pub mod render;
pub mod settings;
pub mod settings_watcher;
pub mod sources;
pub mod types;
