//! Vertex configuration extraction
//!
//! Every distinct vertex whose incident polygons close a full turn is read
//! as the cyclic sequence of side counts around it. Sequences are grouped
//! up to rotation and reflection, then rendered as sorted `a.b.c` strings
//! and as a single Cundy-Rollett notation.

use crate::analysis::notation::{Notation, closes_turn};
use crate::geometry::ordering::bearing_around;
use crate::geometry::{Polygon, Tolerance};
use crate::spatial::index::group_by_point;
use tracing::debug;

/// Distinct vertex sequence and how many vertices carry it
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VertexGroup {
    /// Canonical cyclic sequence of side counts
    pub shapes: Vec<u32>,
    /// Number of tiling vertices with this sequence
    pub occurrences: usize,
}

/// Classification of a tiling by its vertices
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct VertexConfiguration {
    groups: Vec<VertexGroup>,
}

impl VertexConfiguration {
    /// Extract the vertex configuration of `nodes`
    pub fn extract(nodes: &[Polygon], tolerance: Tolerance, offsets: &[[i64; 2]]) -> Self {
        let incidence = group_by_point(
            nodes.iter().enumerate().flat_map(|(index, node)| {
                node.vertices().iter().map(move |&vertex| (vertex, index))
            }),
            tolerance,
            offsets,
        );

        let mut groups: Vec<VertexGroup> = Vec::new();
        let mut skipped = 0;

        for (vertex, members) in incidence {
            let mut around: Vec<(f64, u32)> = members
                .iter()
                .filter_map(|&index| nodes.get(index))
                .map(|node| (bearing_around(vertex, node.centroid()), node.sides()))
                .collect();

            around.sort_by(|a, b| a.0.total_cmp(&b.0));
            let shapes: Vec<u32> = around.into_iter().map(|(_, sides)| sides).collect();

            if !closes_turn(&shapes) {
                skipped += 1;
                continue;
            }

            let shapes = canonical(&shapes);
            match groups.iter_mut().find(|group| group.shapes == shapes) {
                Some(group) => group.occurrences += 1,
                None => groups.push(VertexGroup {
                    shapes,
                    occurrences: 1,
                }),
            }
        }

        debug!(
            groups = groups.len(),
            skipped_vertices = skipped,
            "vertex configuration extracted"
        );

        Self { groups }
    }

    /// Distinct vertex groups in discovery order
    pub fn groups(&self) -> &[VertexGroup] {
        &self.groups
    }

    /// Sorted `a.b.c` strings, one per distinct vertex group
    pub fn vertex_groups(&self) -> Vec<String> {
        let mut strings: Vec<String> = self
            .groups
            .iter()
            .map(|group| {
                group
                    .shapes
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join(".")
            })
            .collect();
        strings.sort();
        strings
    }

    /// Cundy-Rollett notation of the distinct vertex groups
    pub fn notation(&self) -> Notation {
        Notation::from_sequences(self.groups.iter().map(|group| group.shapes.clone()))
    }

    /// Whether no complete vertex was found
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

/// Lexicographically smallest rotation of `shapes` or of its reversal
pub fn canonical(shapes: &[u32]) -> Vec<u32> {
    let reversed: Vec<u32> = shapes.iter().rev().copied().collect();
    (0..shapes.len())
        .flat_map(|shift| {
            let mut forward = shapes.to_vec();
            forward.rotate_left(shift);
            let mut backward = reversed.clone();
            backward.rotate_left(shift);
            [forward, backward]
        })
        .min()
        .unwrap_or_default()
}

/// Whether two cyclic sequences agree up to rotation or reflection
pub fn is_equal_or_chiral(a: &[u32], b: &[u32]) -> bool {
    a.len() == b.len() && canonical(a) == canonical(b)
}
