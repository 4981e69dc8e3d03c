//! Field geometry shared by the games: rectangles in field pixels and
//! angle tests on the lock dial.

use std::f64::consts::TAU;

/// A point in field coordinates (pixels, origin top-left, y down).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldPoint {
    pub x: f64,
    pub y: f64,
}

impl FieldPoint {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned rectangle in field coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl FieldRect {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    pub fn center(&self) -> FieldPoint {
        FieldPoint::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Interiors intersect. Rectangles that only share an edge do not overlap.
    pub fn overlaps(&self, other: &FieldRect) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }

    /// Half-open containment: left/top edges inside, right/bottom outside.
    pub fn contains(&self, p: FieldPoint) -> bool {
        p.x >= self.x && p.x < self.right() && p.y >= self.y && p.y < self.bottom()
    }

    /// Closed containment: all four edges count as inside.
    pub fn contains_inclusive(&self, p: FieldPoint) -> bool {
        p.x >= self.x && p.x <= self.right() && p.y >= self.y && p.y <= self.bottom()
    }

    /// Open containment: points on any edge are outside.
    pub fn contains_strict(&self, p: FieldPoint) -> bool {
        p.x > self.x && p.x < self.right() && p.y > self.y && p.y < self.bottom()
    }
}

/// Shortest angular distance between two angles in `[0, 2π)`.
pub fn circular_distance(a: f64, b: f64) -> f64 {
    let d = (a - b).abs();
    d.min(TAU - d)
}

/// True when `angle` lies strictly within `window` radians of `target`,
/// measured around the circle.
pub fn in_target_range(angle: f64, target: f64, window: f64) -> bool {
    let d = (angle - target).abs();
    d < window || d > TAU - window
}
