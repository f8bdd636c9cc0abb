//! Approximate equality for coordinates and the spatial hash derived from it
//!
//! Two points are the same point when both coordinate differences are below
//! the tolerance. The hash buckets the plane into square cells of side
//! `2 × tolerance`, so any two equal points land in the same cell or in
//! one of its eight neighbours.

use crate::geometry::Vector2;
use num_traits::Float;

/// Quantized grid cell containing a point
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellKey {
    /// Column index
    pub x: i64,
    /// Row index
    pub y: i64,
}

impl CellKey {
    /// Cell displaced by a grid offset
    pub const fn offset(self, dx: i64, dy: i64) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// Fixed-epsilon comparator shared by every geometric stage
#[derive(Clone, Copy, Debug)]
pub struct Tolerance {
    epsilon: f64,
}

impl Tolerance {
    /// Create a comparator with the given epsilon
    pub const fn new(epsilon: f64) -> Self {
        Self { epsilon }
    }

    /// The epsilon below which values are considered equal
    pub const fn epsilon(&self) -> f64 {
        self.epsilon
    }

    /// Side of one spatial hash cell
    pub fn cell_size(&self) -> f64 {
        self.epsilon * 2.0
    }

    /// Whether two points coincide
    pub fn points_eq(&self, a: Vector2, b: Vector2) -> bool {
        (a.x - b.x).abs() < self.epsilon && (a.y - b.y).abs() < self.epsilon
    }

    /// Whether two scalars coincide
    pub fn scalars_eq(&self, a: f64, b: f64) -> bool {
        within(a, b, self.epsilon)
    }

    /// Whether a point coincides with the origin
    pub fn is_origin(&self, point: Vector2) -> bool {
        self.points_eq(point, Vector2::ZERO)
    }

    /// Spatial hash key of the cell holding `point`
    pub fn cell_key(&self, point: Vector2) -> CellKey {
        let size = self.cell_size();
        CellKey {
            x: (point.x / size).floor() as i64,
            y: (point.y / size).floor() as i64,
        }
    }

    /// Clamp near-zero coordinates to exactly zero
    ///
    /// Keeps axis-aligned geometry on the axis so bearings computed from it
    /// stay stable.
    pub fn snap(&self, point: Vector2) -> Vector2 {
        Vector2::new(self.snap_scalar(point.x), self.snap_scalar(point.y))
    }

    fn snap_scalar(&self, value: f64) -> f64 {
        if value.abs() < self.epsilon { 0.0 } else { value }
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self::new(crate::io::configuration::DEFAULT_TOLERANCE)
    }
}

/// Generic scalar comparison used where the float width is not fixed
pub fn within<T: Float>(a: T, b: T, epsilon: T) -> bool {
    (a - b).abs() < epsilon
}
