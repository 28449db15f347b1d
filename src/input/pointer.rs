//! Raw pointer input as forwarded by the host view.
//!
//! Mouse events carry a single coordinate; touch events may carry several
//! contacts. The drag core only ever looks at the primary point.

use super::coords::Position;
use gpui::{Pixels, Point};

/// A pointer event payload, untransformed from the host's coordinate space.
#[derive(Debug, Clone, PartialEq)]
pub enum PointerInput {
    /// Mouse-style event with one coordinate
    Mouse(Position),
    /// Touch-style event with zero or more simultaneous contacts
    Touch(Vec<Position>),
}

impl PointerInput {
    pub fn mouse(x: f32, y: f32) -> Self {
        Self::Mouse(Position::new(x, y))
    }

    pub fn touch(contacts: impl IntoIterator<Item = Position>) -> Self {
        Self::Touch(contacts.into_iter().collect())
    }

    /// The point a drag follows: the mouse position, or the first touch
    /// contact. `None` for a touch event that reports no contacts.
    pub fn primary(&self) -> Option<Position> {
        match self {
            Self::Mouse(position) => Some(*position),
            Self::Touch(contacts) => contacts.first().copied(),
        }
    }

    pub fn contact_count(&self) -> usize {
        match self {
            Self::Mouse(_) => 1,
            Self::Touch(contacts) => contacts.len(),
        }
    }
}

// gpui only delivers mouse events, so the host never builds `Touch`
impl From<Point<Pixels>> for PointerInput {
    fn from(p: Point<Pixels>) -> Self {
        Self::Mouse(p.into())
    }
}
