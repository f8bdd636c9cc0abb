//! Polygon nodes of a tiling: regular, star and dual variants
//!
//! A polygon owns its derived vertex and edge-midpoint rings. Both rings are
//! rebuilt whenever the placement changes, and placement changes always
//! produce a new value, so a ring can never be stale relative to the
//! centroid and orientation it was computed from.

use crate::geometry::ordering::{circumradius, interior_angle};
use crate::geometry::{Tolerance, Vector2};
use itertools::Itertools;
use std::f64::consts::{PI, TAU};

/// Geometric variant of a polygon node
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Shape {
    /// Unit-edge regular polygon
    Regular {
        /// Number of sides
        sides: u32,
    },
    /// Equilateral star with `2 × sides` vertices alternating outer/inner radius
    Star {
        /// Number of star points
        sides: u32,
        /// Point angle in radians controlling the concavity
        sharpness: f64,
    },
    /// Node of a dual tiling built from the centroids around an original vertex
    Dual {
        /// Number of original polygons incident to the vertex
        degree: u32,
    },
}

impl Shape {
    /// Side count used for classification and vertex configurations
    pub const fn sides(&self) -> u32 {
        match self {
            Self::Regular { sides } | Self::Star { sides, .. } => *sides,
            Self::Dual { degree } => *degree,
        }
    }
}

/// A placed polygon of a tiling
#[derive(Clone, Debug)]
pub struct Polygon {
    centroid: Vector2,
    angle: f64,
    shape: Shape,
    vertices: Vec<Vector2>,
    midpoints: Vec<Vector2>,
}

impl Polygon {
    /// Regular unit-edge polygon with vertex 0 at bearing `angle`
    pub fn regular(sides: u32, centroid: Vector2, angle: f64, tolerance: &Tolerance) -> Self {
        Self::build(Shape::Regular { sides }, centroid, angle, tolerance)
    }

    /// Star polygon with point angle `sharpness` (radians)
    pub fn star(
        sides: u32,
        sharpness: f64,
        centroid: Vector2,
        angle: f64,
        tolerance: &Tolerance,
    ) -> Self {
        Self::build(Shape::Star { sides, sharpness }, centroid, angle, tolerance)
    }

    /// Dual node centred on an original vertex with an explicit vertex ring
    pub fn dual(centroid: Vector2, vertices: Vec<Vector2>) -> Self {
        let midpoints = ring_midpoints(&vertices);
        Self {
            centroid,
            angle: 0.0,
            shape: Shape::Dual {
                degree: u32::try_from(vertices.len()).unwrap_or(u32::MAX),
            },
            vertices,
            midpoints,
        }
    }

    fn build(shape: Shape, centroid: Vector2, angle: f64, tolerance: &Tolerance) -> Self {
        let centroid = tolerance.snap(centroid);
        let vertices: Vec<Vector2> = match shape {
            Shape::Regular { sides } => regular_ring(sides, centroid, angle),
            Shape::Star { sides, sharpness } => star_ring(sides, sharpness, centroid, angle),
            Shape::Dual { .. } => Vec::new(),
        }
        .into_iter()
        .map(|vertex| tolerance.snap(vertex))
        .collect();

        let midpoints = ring_midpoints(&vertices)
            .into_iter()
            .map(|midpoint| tolerance.snap(midpoint))
            .collect();

        Self {
            centroid,
            angle,
            shape,
            vertices,
            midpoints,
        }
    }

    /// Copy of this polygon moved to a new centroid and orientation
    ///
    /// Dual nodes carry an explicit ring, which is moved rigidly: translated
    /// with the centroid and rotated by the change in orientation.
    pub fn placed(&self, centroid: Vector2, angle: f64, tolerance: &Tolerance) -> Self {
        match self.shape {
            Shape::Dual { .. } => {
                let centroid = tolerance.snap(centroid);
                let turn = angle - self.angle;
                let vertices = self
                    .vertices
                    .iter()
                    .map(|&vertex| centroid + (vertex - self.centroid).rotate(turn))
                    .collect();
                let mut moved = Self::dual(centroid, vertices);
                moved.angle = angle;
                moved
            }
            shape => Self::build(shape, centroid, angle, tolerance),
        }
    }

    /// Defining anchor point
    pub const fn centroid(&self) -> Vector2 {
        self.centroid
    }

    /// Orientation in radians (bearing of vertex 0 for regular polygons)
    pub const fn angle(&self) -> f64 {
        self.angle
    }

    /// Geometric variant
    pub const fn shape(&self) -> Shape {
        self.shape
    }

    /// Side count (incident polygon count for dual nodes)
    pub const fn sides(&self) -> u32 {
        self.shape.sides()
    }

    /// Ordered vertex ring
    pub fn vertices(&self) -> &[Vector2] {
        &self.vertices
    }

    /// Edge midpoints, index `i` lying between vertices `i` and `i + 1`
    pub fn midpoints(&self) -> &[Vector2] {
        &self.midpoints
    }

    /// Endpoints of edge `index`, wrapping around the ring
    pub fn edge(&self, index: usize) -> Option<(Vector2, Vector2)> {
        let count = self.vertices.len();
        if count == 0 {
            return None;
        }
        let start = *self.vertices.get(index % count)?;
        let end = *self.vertices.get((index + 1) % count)?;
        Some((start, end))
    }

    /// Interior angle of the regular polygon with this side count
    pub fn interior_angle(&self) -> f64 {
        interior_angle(self.sides())
    }

    /// Derived hue in `[0, 325]` used only for display classification
    pub fn classify(&self) -> f64 {
        match self.shape {
            Shape::Regular { sides } => map_range(f64::from(sides), 3.0, 12.0, 0.0, 300.0),
            Shape::Star { sides, .. } => {
                map_range(f64::from(sides), 3.0, 12.0, 300.0, 0.0) + 300.0 / 12.0
            }
            Shape::Dual { .. } => self.angle_hash(),
        }
    }

    /// Even-odd ray casting point containment
    pub fn contains_point(&self, point: Vector2) -> bool {
        let mut inside = false;
        for (a, b) in self.vertices.iter().circular_tuple_windows() {
            let crosses = (a.y > point.y) != (b.y > point.y);
            if crosses && point.x < (b.x - a.x) * (point.y - a.y) / (b.y - a.y) + a.x {
                inside = !inside;
            }
        }
        inside
    }

    /// Whether both rings are complete, finite and mutually consistent
    pub fn is_consistent(&self, tolerance: &Tolerance) -> bool {
        let expected = match self.shape {
            Shape::Regular { sides } => sides as usize,
            Shape::Star { sides, .. } => 2 * sides as usize,
            Shape::Dual { degree } => degree as usize,
        };

        self.vertices.len() == expected
            && self.midpoints.len() == expected
            && self.centroid.is_finite()
            && self.vertices.iter().all(|vertex| vertex.is_finite())
            && ring_midpoints(&self.vertices)
                .iter()
                .zip(&self.midpoints)
                .all(|(&expected, &actual)| tolerance.points_eq(expected, actual))
    }

    fn angle_hash(&self) -> f64 {
        let angles: Vec<u32> = self
            .vertices
            .iter()
            .circular_tuple_windows()
            .map(|(&previous, &current, &next)| {
                let first = previous - current;
                let second = next - current;
                let cosine = (first.dot(second) / (first.magnitude() * second.magnitude()))
                    .clamp(-1.0, 1.0);
                cosine.acos().to_degrees().round() as u32
            })
            .collect();

        let canonical = (0..angles.len())
            .map(|shift| {
                let mut rotated = angles.clone();
                rotated.rotate_left(shift);
                rotated
            })
            .min()
            .unwrap_or_default();

        let modulus = 300.0 * std::f64::consts::SQRT_2;
        canonical
            .iter()
            .fold(0.0, |hash, &angle| (hash * 31.0 + f64::from(angle)) % modulus)
            % 300.0
    }
}

fn regular_ring(sides: u32, centroid: Vector2, angle: f64) -> Vec<Vector2> {
    let radius = circumradius(sides);
    let step = TAU / f64::from(sides);
    (0..sides)
        .map(|i| centroid + Vector2::from_polar(radius, f64::from(i).mul_add(step, angle)))
        .collect()
}

fn star_ring(sides: u32, sharpness: f64, centroid: Vector2, angle: f64) -> Vec<Vector2> {
    let gamma = PI * f64::from(sides.saturating_sub(2)) / (2.0 * f64::from(sides));
    let beta = gamma - sharpness / 2.0;
    let outer = beta.cos() / gamma.cos();
    let inner = gamma.tan().mul_add(beta.cos(), -beta.sin());
    let step = TAU / f64::from(sides);

    (0..sides)
        .flat_map(|i| {
            let i = f64::from(i);
            [
                centroid + Vector2::from_polar(outer, i.mul_add(step, angle + PI)),
                centroid + Vector2::from_polar(inner, (i + 0.5).mul_add(step, angle + PI)),
            ]
        })
        .collect()
}

fn ring_midpoints(vertices: &[Vector2]) -> Vec<Vector2> {
    if vertices.len() < 2 {
        return Vec::new();
    }
    vertices
        .iter()
        .circular_tuple_windows()
        .map(|(&a, &b)| Vector2::midpoint(a, b))
        .collect()
}

fn map_range(value: f64, start1: f64, stop1: f64, start2: f64, stop2: f64) -> f64 {
    (stop2 - start2).mul_add((value - start1) / (stop1 - start1), start2)
}
