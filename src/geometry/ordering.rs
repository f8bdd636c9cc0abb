//! Angular ordering and regular-polygon measurements
//!
//! Landmarks and free seed edges are enumerated clockwise from the positive
//! y axis, nearest first when two bearings agree within tolerance.

use crate::geometry::{Tolerance, Vector2};
use std::f64::consts::{FRAC_PI_2, PI, TAU};

/// Clockwise bearing of `point` measured from the positive y axis, in `[0, 2π)`
///
/// Points lying on the y axis (within tolerance) map to exactly `0` or `π`
/// so that snapped axis geometry never straddles the wrap-around.
pub fn clockwise_angle(point: Vector2, tolerance: &Tolerance) -> f64 {
    if point.x.abs() < tolerance.epsilon() {
        return if point.y > 0.0 { 0.0 } else { PI };
    }

    let angle = FRAC_PI_2 - point.y.atan2(point.x);
    if angle < 0.0 { angle + TAU } else { angle }
}

/// Indices of `points` in clockwise order, nearest first on equal bearings
///
/// Bearings are clustered greedily: every point within tolerance of the
/// first bearing of a run belongs to that run, and each run is ordered by
/// distance from the origin.
pub fn clockwise_order(points: &[Vector2], tolerance: &Tolerance) -> Vec<usize> {
    let keyed: Vec<(f64, f64)> = points
        .iter()
        .map(|&point| (clockwise_angle(point, tolerance), point.magnitude()))
        .collect();

    let bearing = |index: usize| keyed.get(index).map_or(0.0, |key| key.0);
    let distance = |index: usize| keyed.get(index).map_or(0.0, |key| key.1);

    let mut order: Vec<usize> = (0..points.len()).collect();
    order.sort_by(|&a, &b| bearing(a).total_cmp(&bearing(b)));

    let mut start = 0;
    while start < order.len() {
        let base = order.get(start).map_or(0.0, |&index| bearing(index));
        let mut end = start + 1;
        while order
            .get(end)
            .is_some_and(|&index| bearing(index) - base < tolerance.epsilon())
        {
            end += 1;
        }

        if let Some(run) = order.get_mut(start..end) {
            run.sort_by(|&a, &b| distance(a).total_cmp(&distance(b)));
        }
        start = end;
    }

    order
}

/// Counter-clockwise bearing of `point` around `center`, in `[0, 2π)`
pub fn bearing_around(center: Vector2, point: Vector2) -> f64 {
    (point - center).heading().rem_euclid(TAU)
}

/// Signed angle at `apex` between the rays towards `a` and `b`, in `(-π, π]`
pub fn angle_between(a: Vector2, apex: Vector2, b: Vector2) -> f64 {
    let first = a - apex;
    let second = b - apex;
    first.cross(second).atan2(first.dot(second))
}

/// Distance from the centre of a unit-edge regular `sides`-gon to an edge midpoint
pub fn apothem(sides: u32) -> f64 {
    0.5 / (PI / f64::from(sides)).tan()
}

/// Distance from the centre of a unit-edge regular `sides`-gon to a vertex
pub fn circumradius(sides: u32) -> f64 {
    0.5 / (PI / f64::from(sides)).sin()
}

/// Interior angle of a regular `sides`-gon in radians
pub fn interior_angle(sides: u32) -> f64 {
    PI * f64::from(sides.saturating_sub(2)) / f64::from(sides.max(1))
}

/// Normalize an angle into `[0, 2π)`
pub fn wrap_angle(angle: f64) -> f64 {
    angle.rem_euclid(TAU)
}
