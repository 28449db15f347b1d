//! Canvas coordinates for the floating window.
//!
//! `Position` is a plain `f32` pair so the drag core stays independent of
//! gpui's element types. Conversions to and from `Point<Pixels>` happen at the
//! event/render boundary.

use gpui::{Pixels, Point, point, px};
use serde::{Deserialize, Serialize};
use std::ops::{Add, Sub};

/// A 2D coordinate in pixels, relative to the canvas's top-left origin.
///
/// Also used for drag anchors, which are the difference of two positions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

impl Position {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Convert to a gpui point for layout.
    #[inline]
    pub fn to_point(self) -> Point<Pixels> {
        point(px(self.x), px(self.y))
    }
}

impl Add for Position {
    type Output = Position;

    #[inline]
    fn add(self, rhs: Position) -> Position {
        Position::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Position {
    type Output = Position;

    #[inline]
    fn sub(self, rhs: Position) -> Position {
        Position::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl From<Point<Pixels>> for Position {
    #[inline]
    fn from(p: Point<Pixels>) -> Self {
        Position::new(f32::from(p.x), f32::from(p.y))
    }
}

impl From<(f32, f32)> for Position {
    #[inline]
    fn from((x, y): (f32, f32)) -> Self {
        Position::new(x, y)
    }
}
