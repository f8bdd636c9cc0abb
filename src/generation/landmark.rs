//! Landmark resolution shared by every landmark-anchored transform
//!
//! Landmarks are gathered from the anchor snapshot, deduplicated under
//! tolerance and enumerated clockwise from the positive y axis, nearest
//! first on equal bearings. Centroid landmarks skip the origin.

use crate::geometry::ordering::clockwise_order;
use crate::geometry::{Polygon, Tolerance, Vector2};
use crate::io::error::{Result, TilingError};
use crate::rule::LandmarkKind;
use crate::spatial::index::unique_points;

/// A resolved landmark
#[derive(Clone, Copy, Debug)]
pub struct Landmark {
    /// Landmark position
    pub point: Vector2,
    /// Unit direction of the edge an edge-midpoint landmark sits on
    pub direction: Option<Vector2>,
}

/// Distinct landmarks of `kind` in clockwise order
pub fn ordered_landmarks(
    anchors: &[Polygon],
    kind: LandmarkKind,
    tolerance: Tolerance,
    offsets: &[[i64; 2]],
) -> Vec<Vector2> {
    let points: Vec<Vector2> = match kind {
        LandmarkKind::Centroid => anchors.iter().map(Polygon::centroid).collect(),
        LandmarkKind::Midpoint => anchors
            .iter()
            .flat_map(|node| node.midpoints().iter().copied())
            .collect(),
        LandmarkKind::Vertex => anchors
            .iter()
            .flat_map(|node| node.vertices().iter().copied())
            .collect(),
    };

    let unique = unique_points(points, tolerance, offsets);
    clockwise_order(&unique, &tolerance)
        .into_iter()
        .filter_map(|index| unique.get(index).copied())
        .filter(|&point| kind != LandmarkKind::Centroid || !tolerance.is_origin(point))
        .collect()
}

/// Resolve the `ordinal`-th (1-based) landmark of `kind`
///
/// # Errors
///
/// Returns [`TilingError::LandmarkNotFound`] when fewer than `ordinal`
/// landmarks of that kind exist
pub fn resolve(
    anchors: &[Polygon],
    kind: LandmarkKind,
    ordinal: usize,
    tolerance: Tolerance,
    offsets: &[[i64; 2]],
) -> Result<Landmark> {
    let landmarks = ordered_landmarks(anchors, kind, tolerance, offsets);
    let point = ordinal
        .checked_sub(1)
        .and_then(|index| landmarks.get(index))
        .copied()
        .ok_or(TilingError::LandmarkNotFound {
            kind: kind.symbol(),
            ordinal,
            available: landmarks.len(),
            transform_index: None,
        })?;

    let direction = match kind {
        LandmarkKind::Midpoint => edge_direction(anchors, point, tolerance),
        LandmarkKind::Centroid | LandmarkKind::Vertex => None,
    };

    Ok(Landmark { point, direction })
}

/// Direction of the first anchor edge whose midpoint is `point`
fn edge_direction(anchors: &[Polygon], point: Vector2, tolerance: Tolerance) -> Option<Vector2> {
    anchors.iter().find_map(|node| {
        let edge = node
            .midpoints()
            .iter()
            .position(|&midpoint| tolerance.points_eq(midpoint, point))?;
        let (start, end) = node.edge(edge)?;
        Some((end - start).normalize())
    })
}
