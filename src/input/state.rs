//! Drag state machine for the floating window.
//!
//! ## State Transitions
//!
//! ```text
//! Idle     -> Dragging     (pointer down: anchor = pointer - position)
//! Dragging -> Dragging     (pointer move: position = pointer - anchor)
//! Dragging -> Idle         (pointer up: last position is kept)
//!
//! Idle     -> Idle         (move/up while idle are no-ops)
//! Dragging -> Dragging     (a second pointer down is ignored)
//! ```
//!
//! The anchor lives inside the `Dragging` variant, so it cannot be read once
//! the drag has ended.

use super::coords::Position;
use super::pointer::PointerInput;

/// Current drag state of a surface.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DragState {
    /// No active drag
    #[default]
    Idle,

    /// A drag is in progress
    Dragging {
        /// Offset from the surface position to the pointer at drag start.
        /// Fixed for the whole drag.
        anchor: Position,
    },
}

impl DragState {
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging { .. })
    }

    /// Get the drag anchor, if dragging
    pub fn anchor(&self) -> Option<Position> {
        match self {
            Self::Dragging { anchor } => Some(*anchor),
            Self::Idle => None,
        }
    }
}

/// Outcome of a pointer-down on the surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragStart {
    /// A new drag began and the anchor was captured
    Started,
    /// A drag was already active (or the event had no primary point)
    Ignored,
}

/// Turns a stream of pointer events into a live position.
///
/// Only one pointer drives the surface at a time. Positions are never
/// clamped; the surface may be dragged outside the visible canvas.
#[derive(Debug, Clone)]
pub struct DraggableSurface {
    position: Position,
    state: DragState,
}

impl DraggableSurface {
    pub fn new(position: Position) -> Self {
        Self {
            position,
            state: DragState::Idle,
        }
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn state(&self) -> DragState {
        self.state
    }

    pub fn is_dragging(&self) -> bool {
        self.state.is_dragging()
    }

    pub fn anchor(&self) -> Option<Position> {
        self.state.anchor()
    }

    /// Begin a drag at the input's primary point.
    pub fn drag_start(&mut self, input: &PointerInput) -> DragStart {
        if self.state.is_dragging() {
            return DragStart::Ignored;
        }
        let Some(pointer) = input.primary() else {
            return DragStart::Ignored;
        };

        self.state = DragState::Dragging {
            anchor: pointer - self.position,
        };
        DragStart::Started
    }

    /// Follow the pointer. Returns true if the position changed and the host
    /// should re-render.
    pub fn drag_move(&mut self, input: &PointerInput) -> bool {
        let DragState::Dragging { anchor } = self.state else {
            return false;
        };
        let Some(pointer) = input.primary() else {
            return false;
        };

        let next = pointer - anchor;
        if next == self.position {
            return false;
        }
        self.position = next;
        true
    }

    /// End the current drag, committing the last position.
    ///
    /// Returns the committed position, or `None` if no drag was active.
    pub fn drag_end(&mut self) -> Option<Position> {
        if self.state.is_idle() {
            return None;
        }
        self.state = DragState::Idle;
        Some(self.position)
    }

    /// Move the surface explicitly, abandoning any drag in progress.
    pub fn reset(&mut self, position: Position) {
        self.state = DragState::Idle;
        self.position = position;
    }
}
