//! Pointer input handling for the floating window.
//!
//! ## Architecture
//!
//! The drag core is an explicit state machine (`DragState`) inside a
//! `DraggableSurface`, with no dependency on gpui's event types. The gpui
//! handlers convert events into `PointerInput` and forward them untransformed.
//!
//! ## Modules
//!
//! - `coords` - `Position` and conversions to gpui points
//! - `pointer` - Mouse/touch payloads and primary-point selection
//! - `state` - Drag state machine and `DraggableSurface`
//! - `capture` - Scoped pointer capture and the `PointerTracker`
//! - `mouse_down` - Pointer down on the floating window (drag start)
//! - `drag` - Window-level pointer move (drag tracking)
//! - `mouse_up` - Pointer up on the window or the capture layer (drag end)

pub mod coords;
pub mod pointer;
mod state;
mod capture;
mod mouse_down;
mod drag;
mod mouse_up;

pub use capture::{PointerCapture, PointerTracker};
pub use coords::Position;
pub use mouse_up::{DRAG_BUTTON, is_drag_release};
pub use pointer::PointerInput;
pub use state::{DragStart, DragState, DraggableSurface};
