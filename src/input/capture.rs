//! Pointer capture - the scoped subscription behind window-level listeners.
//!
//! A `PointerCapture` exists exactly while a drag is active. The desktop view
//! registers window-wide mouse move/up listeners only while the host holds a
//! capture, and gpui drops paint-phase listeners every frame, so releasing the
//! capture is enough to guarantee no listener outlives the drag.
//!
//! `PointerTracker` pairs the capture with the `DraggableSurface` so the two
//! cannot drift apart.

use super::coords::Position;
use super::pointer::PointerInput;
use super::state::{DragStart, DraggableSurface};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};
use tracing::debug;

static NEXT_CAPTURE_ID: AtomicU64 = AtomicU64::new(1);

/// Exclusive claim on window-level pointer events for one drag.
///
/// Dropping the capture releases it.
#[derive(Debug)]
pub struct PointerCapture {
    id: u64,
    acquired_at: Instant,
    moves: u64,
}

impl PointerCapture {
    pub fn acquire(anchor: Position) -> Self {
        let id = NEXT_CAPTURE_ID.fetch_add(1, Ordering::Relaxed);
        debug!(
            capture = id,
            anchor_x = anchor.x,
            anchor_y = anchor.y,
            "pointer capture acquired"
        );
        Self {
            id,
            acquired_at: Instant::now(),
            moves: 0,
        }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    /// Number of moves delivered through this capture
    pub fn moves(&self) -> u64 {
        self.moves
    }

    pub fn held_for(&self) -> Duration {
        self.acquired_at.elapsed()
    }

    fn record_move(&mut self) {
        self.moves += 1;
    }
}

impl Drop for PointerCapture {
    fn drop(&mut self) {
        debug!(
            capture = self.id,
            moves = self.moves,
            held_ms = self.held_for().as_secs_f64() * 1000.0,
            "pointer capture released"
        );
    }
}

/// Drag surface plus the capture that feeds it.
///
/// Invariant: `capture` is `Some` if and only if the surface is dragging.
#[derive(Debug)]
pub struct PointerTracker {
    surface: DraggableSurface,
    capture: Option<PointerCapture>,
}

impl PointerTracker {
    pub fn new(position: Position) -> Self {
        Self {
            surface: DraggableSurface::new(position),
            capture: None,
        }
    }

    pub fn surface(&self) -> &DraggableSurface {
        &self.surface
    }

    pub fn position(&self) -> Position {
        self.surface.position()
    }

    pub fn is_dragging(&self) -> bool {
        self.surface.is_dragging()
    }

    pub fn capture(&self) -> Option<&PointerCapture> {
        self.capture.as_ref()
    }

    /// Whether window-level listeners should be installed this frame.
    pub fn is_capturing(&self) -> bool {
        self.capture.is_some()
    }

    /// Pointer down on the surface. Returns true if a drag started.
    pub fn press(&mut self, input: &PointerInput) -> bool {
        match self.surface.drag_start(input) {
            DragStart::Started => {
                let anchor = self.surface.anchor().unwrap_or_default();
                self.capture = Some(PointerCapture::acquire(anchor));
                true
            }
            DragStart::Ignored => {
                debug!(
                    contacts = input.contact_count(),
                    dragging = self.surface.is_dragging(),
                    "pointer down ignored"
                );
                false
            }
        }
    }

    /// Pointer move anywhere in the window. Returns true if the position
    /// changed.
    pub fn track(&mut self, input: &PointerInput) -> bool {
        if !self.surface.drag_move(input) {
            return false;
        }
        if let Some(capture) = self.capture.as_mut() {
            capture.record_move();
        }
        true
    }

    /// Pointer up anywhere in the window. Returns the committed position if a
    /// drag ended; releases the capture either way.
    pub fn release(&mut self) -> Option<Position> {
        let committed = self.surface.drag_end();
        self.capture = None;
        if let Some(position) = committed {
            debug!(x = position.x, y = position.y, "drag committed");
        }
        committed
    }

    /// Place the surface explicitly, ending any drag.
    pub fn reset(&mut self, position: Position) {
        self.surface.reset(position);
        self.capture = None;
    }
}
