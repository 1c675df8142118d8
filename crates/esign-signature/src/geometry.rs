//! Points and rectangles in logical surface units

use serde::{Deserialize, Serialize};

/// A 2D point
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    /// Horizontal coordinate
    pub x: f32,
    /// Vertical coordinate
    pub y: f32,
}

impl Point {
    /// Create new point
    #[inline]
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Translate into the coordinate space whose origin is `origin`
    #[inline]
    #[must_use]
    pub fn relative_to(self, origin: Point) -> Self {
        Self::new(self.x - origin.x, self.y - origin.y)
    }
}

impl From<(f32, f32)> for Point {
    fn from((x, y): (f32, f32)) -> Self {
        Self::new(x, y)
    }
}

/// Axis-aligned rectangle in viewport coordinates
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    /// Left edge
    pub left: f32,
    /// Top edge
    pub top: f32,
    /// Width
    pub width: f32,
    /// Height
    pub height: f32,
}

impl Rect {
    /// Create new rectangle
    #[inline]
    #[must_use]
    pub const fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Top-left corner
    #[inline]
    #[must_use]
    pub fn origin(&self) -> Point {
        Point::new(self.left, self.top)
    }
}
