//! Viewport geometry for floating panels.
//!
//! Coordinates are CSS pixels. The clamping rules here are deliberately
//! simple: four independent edge checks in a fixed order, not a layout
//! solver.

use crate::constants::{FLIP_GAP, VIEWPORT_MARGIN};

/// A 2D point.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Translate by the given offset.
    pub fn offset(self, by: Point) -> Self {
        Self::new(self.x + by.x, self.y + by.y)
    }
}

/// Width and height.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// An axis-aligned rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub const fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Rectangle of the given size with its top-left corner at `origin`.
    pub fn at(origin: Point, size: Size) -> Self {
        Self::new(origin.x, origin.y, size.width, size.height)
    }

    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }
}

/// Distances used when pulling a panel back inside the viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgePolicy {
    /// Minimum gap to every viewport edge
    pub margin: f64,
    /// Extra gap applied when the panel is pushed back from the right or bottom
    pub flip_gap: f64,
}

impl Default for EdgePolicy {
    fn default() -> Self {
        Self {
            margin: VIEWPORT_MARGIN,
            flip_gap: FLIP_GAP,
        }
    }
}

/// Adjust a panel's position so it stays within the viewport.
///
/// `position` is where the panel was placed and `measured` is its bounding
/// box at that placement. The checks run in order right, bottom, left, top;
/// the left and top clamps look at the edges after the first two shifts, so
/// they win when a panel cannot fit either way.
pub fn clamp_to_viewport(
    position: Point,
    measured: Rect,
    viewport: Size,
    policy: EdgePolicy,
) -> Point {
    let mut placed = position;
    let mut edge_left = measured.left;
    let mut edge_top = measured.top;

    if measured.right() > viewport.width - policy.margin {
        let shift = measured.right() - viewport.width + policy.flip_gap;
        placed.x -= shift;
        edge_left -= shift;
    }

    if measured.bottom() > viewport.height - policy.margin {
        let shift = measured.height + policy.flip_gap;
        placed.y -= shift;
        edge_top -= shift;
    }

    if edge_left < policy.margin {
        placed.x = policy.margin;
    }

    if edge_top < policy.margin {
        placed.y = policy.margin;
    }

    placed
}
