//! Deduplicated polygon store
//!
//! `NodeSet` owns the contiguous node list of a tiling and a centroid index
//! over it. `merge` is the single entry point for growth: a candidate whose
//! centroid coincides with a stored node (or with an earlier candidate of
//! the same batch) is discarded, everything else is appended in order.

use crate::geometry::{Polygon, Tolerance, Vector2};
use crate::spatial::SpatialIndex;

/// Append-only set of polygons unique by centroid
#[derive(Clone, Debug)]
pub struct NodeSet {
    nodes: Vec<Polygon>,
    centroids: SpatialIndex<usize>,
}

impl NodeSet {
    /// Create an empty set
    pub fn new(tolerance: Tolerance, offsets: &[[i64; 2]]) -> Self {
        Self {
            nodes: Vec::new(),
            centroids: SpatialIndex::new(tolerance, offsets),
        }
    }

    /// Deduplicate-and-append
    ///
    /// Returns the indices of the nodes that were actually added. Merging
    /// nodes that are already present is a no-op.
    pub fn merge<I>(&mut self, candidates: I) -> Vec<usize>
    where
        I: IntoIterator<Item = Polygon>,
    {
        let mut added = Vec::new();

        for candidate in candidates {
            let centroid = candidate.centroid();
            if self.centroids.contains(centroid) {
                continue;
            }

            let index = self.nodes.len();
            self.centroids.insert(centroid, index);
            self.nodes.push(candidate);
            added.push(index);
        }

        added
    }

    /// Index of the node whose centroid coincides with `point`
    pub fn position(&self, point: Vector2) -> Option<usize> {
        self.centroids.find(point).map(|(_, &index)| index)
    }

    /// Whether a node sits on `point`
    pub fn contains(&self, point: Vector2) -> bool {
        self.centroids.contains(point)
    }

    /// Node at `index`
    pub fn get(&self, index: usize) -> Option<&Polygon> {
        self.nodes.get(index)
    }

    /// All nodes in insertion order
    pub fn as_slice(&self) -> &[Polygon] {
        &self.nodes
    }

    /// Iterate over nodes in insertion order
    pub fn iter(&self) -> std::slice::Iter<'_, Polygon> {
        self.nodes.iter()
    }

    /// Number of nodes
    pub const fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the set is empty
    pub const fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Consume the set, keeping the node list
    pub fn into_vec(self) -> Vec<Polygon> {
        self.nodes
    }
}

impl<'a> IntoIterator for &'a NodeSet {
    type Item = &'a Polygon;
    type IntoIter = std::slice::Iter<'a, Polygon>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes.iter()
    }
}
