//! Source files shown in the viewer panel.
//!
//! The viewer displays the drag implementation this application runs on,
//! embedded at compile time.

use crate::types::SourceFile;

pub const SOURCE_FILES: &[SourceFile] = &[
    SourceFile {
        name: "state.rs",
        content: include_str!("input/state.rs"),
    },
    SourceFile {
        name: "capture.rs",
        content: include_str!("input/capture.rs"),
    },
    SourceFile {
        name: "pointer.rs",
        content: include_str!("input/pointer.rs"),
    },
    SourceFile {
        name: "floating_window.rs",
        content: include_str!("render/floating_window.rs"),
    },
];
