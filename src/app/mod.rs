//! Application module - the FloatCam host view and its state.
//!
//! - `state` - The FloatCam struct and its sub-structs
//! - `lifecycle` - Construction and background polling
//! - `settings_handlers` - Background style and settings hot-reload
//! - `source_viewer` - Source tabs and copy-to-clipboard

mod state;
mod lifecycle;
mod settings_handlers;
mod source_viewer;

pub use source_viewer::{CopyFeedback, SourceViewerState};
pub use state::{FloatCam, SettingsState, SystemState};
