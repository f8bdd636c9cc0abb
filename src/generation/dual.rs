//! Dual tiling construction
//!
//! Every distinct vertex surrounded by at least three polygons becomes a
//! dual node whose ring is the incident centroids in counter-clockwise
//! order. Boundary vertices are skipped silently.

use crate::geometry::ordering::{angle_between, bearing_around};
use crate::geometry::{Polygon, Tolerance, Vector2};
use crate::spatial::index::{group_by_point, unique_points};
use std::f64::consts::FRAC_PI_2;

/// Minimum incident polygons for a vertex to get a dual node
pub const MIN_DUAL_DEGREE: usize = 3;

/// Build the dual of `nodes`
pub fn compute_dual(nodes: &[Polygon], tolerance: Tolerance, offsets: &[[i64; 2]]) -> Vec<Polygon> {
    let incidence = group_by_point(
        nodes.iter().enumerate().flat_map(|(index, node)| {
            node.vertices().iter().map(move |&vertex| (vertex, index))
        }),
        tolerance,
        offsets,
    );

    incidence
        .into_iter()
        .filter_map(|(vertex, members)| {
            let incident: Vec<&Polygon> = members.iter().filter_map(|&i| nodes.get(i)).collect();
            dual_node(vertex, &incident, tolerance, offsets)
        })
        .collect()
}

fn dual_node(
    vertex: Vector2,
    incident: &[&Polygon],
    tolerance: Tolerance,
    offsets: &[[i64; 2]],
) -> Option<Polygon> {
    if incident.len() < MIN_DUAL_DEGREE || !is_surrounded(vertex, incident, tolerance, offsets) {
        return None;
    }

    let mut ring: Vec<(f64, Vector2)> = incident
        .iter()
        .map(|node| (bearing_around(vertex, node.centroid()), node.centroid()))
        .collect();
    ring.sort_by(|a, b| a.0.total_cmp(&b.0));

    Some(Polygon::dual(
        vertex,
        ring.into_iter().map(|(_, centroid)| centroid).collect(),
    ))
}

/// Whether the edges meeting at `vertex` are all shared
///
/// An edge meets the vertex when the centroid, the edge midpoint and the
/// vertex form a right angle at the midpoint. A fully surrounded vertex has
/// as many distinct such edges as incident polygons; an open one has more.
fn is_surrounded(
    vertex: Vector2,
    incident: &[&Polygon],
    tolerance: Tolerance,
    offsets: &[[i64; 2]],
) -> bool {
    let edges = incident.iter().flat_map(|node| {
        node.midpoints().iter().copied().filter(move |&midpoint| {
            let angle = angle_between(node.centroid(), midpoint, vertex).abs();
            tolerance.scalars_eq(angle, FRAC_PI_2)
        })
    });

    unique_points(edges, tolerance, offsets).len() <= incident.len()
}
