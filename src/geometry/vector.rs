//! Minimal 2D vector value type used for every coordinate in a tiling

use serde::{Deserialize, Serialize};
use std::ops::{Add, AddAssign, Mul, Neg, Sub};

/// Plain 2D coordinate or displacement
///
/// Values are compared through [`crate::geometry::Tolerance`], never with
/// exact equality, so `PartialEq` is intentionally not derived.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize)]
pub struct Vector2 {
    /// Horizontal component
    pub x: f64,
    /// Vertical component
    pub y: f64,
}

impl Vector2 {
    /// The origin
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    /// Create a vector from components
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Unit vector pointing at `angle` radians
    pub fn from_angle(angle: f64) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self::new(cos, sin)
    }

    /// Vector of length `magnitude` pointing at `angle` radians
    pub fn from_polar(magnitude: f64, angle: f64) -> Self {
        Self::from_angle(angle) * magnitude
    }

    /// Average of two points
    pub fn midpoint(a: Self, b: Self) -> Self {
        Self::new((a.x + b.x) / 2.0, (a.y + b.y) / 2.0)
    }

    /// Multiply both components by `factor`
    pub fn scale(self, factor: f64) -> Self {
        Self::new(self.x * factor, self.y * factor)
    }

    /// Dot product
    pub fn dot(self, other: Self) -> f64 {
        self.x.mul_add(other.x, self.y * other.y)
    }

    /// 2D cross product (z component of the 3D cross product)
    pub fn cross(self, other: Self) -> f64 {
        self.x.mul_add(other.y, -(self.y * other.x))
    }

    /// Euclidean length
    pub fn magnitude(self) -> f64 {
        self.x.hypot(self.y)
    }

    /// Euclidean distance to another point
    pub fn distance(self, other: Self) -> f64 {
        (self - other).magnitude()
    }

    /// Bearing in radians, in `(-π, π]`
    pub fn heading(self) -> f64 {
        self.y.atan2(self.x)
    }

    /// Unit vector in the same direction
    ///
    /// The zero vector has no direction and is returned unchanged.
    pub fn normalize(self) -> Self {
        let magnitude = self.magnitude();
        if magnitude == 0.0 {
            self
        } else {
            self.scale(1.0 / magnitude)
        }
    }

    /// Rotate counter-clockwise about the origin by `angle` radians
    pub fn rotate(self, angle: f64) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self::new(
            self.x.mul_add(cos, -(self.y * sin)),
            self.x.mul_add(sin, self.y * cos),
        )
    }

    /// Reflect across the line through the origin with bearing `angle`
    pub fn mirror(self, angle: f64) -> Self {
        let direction = Self::from_angle(angle);
        let projection = self.dot(direction);
        Self::new(
            (2.0 * projection).mul_add(direction.x, -self.x),
            (2.0 * projection).mul_add(direction.y, -self.y),
        )
    }

    /// Reflect through a point (180° rotation about `center`)
    pub fn reflect_through(self, center: Self) -> Self {
        Self::new(2.0f64.mul_add(center.x, -self.x), 2.0f64.mul_add(center.y, -self.y))
    }

    /// Reflect across the line through `origin` with unit direction `direction`
    pub fn reflect_across(self, origin: Self, direction: Self) -> Self {
        let offset = self - origin;
        let projection = direction.scale(offset.dot(direction));
        let perpendicular = offset - projection;
        origin + projection - perpendicular
    }

    /// Whether both components are finite
    pub const fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl Add for Vector2 {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y)
    }
}

impl AddAssign for Vector2 {
    fn add_assign(&mut self, other: Self) {
        self.x += other.x;
        self.y += other.y;
    }
}

impl Sub for Vector2 {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self::new(self.x - other.x, self.y - other.y)
    }
}

impl Mul<f64> for Vector2 {
    type Output = Self;

    fn mul(self, factor: f64) -> Self {
        self.scale(factor)
    }
}

impl Neg for Vector2 {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

impl std::fmt::Display for Vector2 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.3}, {:.3})", self.x, self.y)
    }
}
