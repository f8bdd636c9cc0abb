//! Neighbour graph over the polygons of a tiling
//!
//! Two polygons are side neighbours when they share an edge midpoint, and
//! vertex neighbours (Moore mode only) when they share a vertex but no
//! edge. The graph exposed to consumers is the breadth-first closure of
//! direct adjacency up to the requested depth.

use crate::geometry::{Polygon, Tolerance};
use crate::io::error::{Result, invalid_parameter};
use crate::spatial::SpatialIndex;
use crate::spatial::index::group_by_point;
use std::collections::{HashSet, VecDeque};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// Which direct adjacencies count
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Neighborhood {
    /// Edge and vertex sharing
    #[default]
    Moore,
    /// Edge sharing only
    VonNeumann,
}

impl fmt::Display for Neighborhood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Moore => write!(f, "moore"),
            Self::VonNeumann => write!(f, "von-neumann"),
        }
    }
}

impl FromStr for Neighborhood {
    type Err = crate::io::error::TilingError;

    fn from_str(text: &str) -> Result<Self> {
        match text.to_ascii_lowercase().as_str() {
            "moore" | "m" => Ok(Self::Moore),
            "von-neumann" | "vonneumann" | "n" => Ok(Self::VonNeumann),
            _ => Err(invalid_parameter(
                "neighborhood",
                &text,
                &"expected moore or von-neumann",
            )),
        }
    }
}

/// How two polygons came to be neighbours
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Adjacency {
    /// Shared edge
    Side,
    /// Shared vertex without a shared edge
    Vertex,
    /// Reached only through the breadth-first closure
    Neighbor,
}

/// Adjacency of a fixed node list at a fixed depth and neighbourhood
#[derive(Clone, Debug)]
pub struct NeighborGraph {
    depth: usize,
    neighborhood: Neighborhood,
    side_pairs: HashSet<(usize, usize)>,
    vertex_pairs: HashSet<(usize, usize)>,
    neighbors: Vec<Vec<usize>>,
    dual_neighbors: Vec<Vec<usize>>,
}

/// Canonical unordered pair key
const fn pair(a: usize, b: usize) -> (usize, usize) {
    if a < b { (a, b) } else { (b, a) }
}

impl NeighborGraph {
    /// Build the graph of `nodes`
    ///
    /// # Errors
    ///
    /// Returns an error if `depth` is zero
    pub fn build(
        nodes: &[Polygon],
        depth: usize,
        neighborhood: Neighborhood,
        tolerance: Tolerance,
        offsets: &[[i64; 2]],
    ) -> Result<Self> {
        if depth == 0 {
            return Err(invalid_parameter(
                "depth",
                &depth,
                &"neighbourhood depth must be at least 1",
            ));
        }

        let mut direct: Vec<Vec<usize>> = vec![Vec::new(); nodes.len()];
        let mut side_pairs = HashSet::new();
        let mut vertex_pairs = HashSet::new();

        let mut midpoints: SpatialIndex<usize> = SpatialIndex::new(tolerance, offsets);
        for (index, node) in nodes.iter().enumerate() {
            for &midpoint in node.midpoints() {
                midpoints.insert(midpoint, index);
            }
        }

        for (index, node) in nodes.iter().enumerate() {
            for &midpoint in node.midpoints() {
                for (_, &other) in midpoints.near(midpoint) {
                    if other != index && side_pairs.insert(pair(index, other)) {
                        link(&mut direct, index, other);
                    }
                }
            }
        }

        let dual_neighbors = direct.clone();

        if neighborhood == Neighborhood::Moore {
            let shared = group_by_point(
                nodes.iter().enumerate().flat_map(|(index, node)| {
                    node.vertices().iter().map(move |&vertex| (vertex, index))
                }),
                tolerance,
                offsets,
            );

            for (_, members) in shared {
                for (position, &a) in members.iter().enumerate() {
                    for &b in members.iter().skip(position + 1) {
                        let key = pair(a, b);
                        if !side_pairs.contains(&key) && vertex_pairs.insert(key) {
                            link(&mut direct, a, b);
                        }
                    }
                }
            }
        }

        let neighbors = if depth == 1 {
            direct
        } else {
            (0..nodes.len())
                .map(|start| breadth_first(&direct, start, depth))
                .collect()
        };

        debug!(
            nodes = nodes.len(),
            side = side_pairs.len(),
            vertex = vertex_pairs.len(),
            depth,
            %neighborhood,
            "neighbour graph built"
        );

        Ok(Self {
            depth,
            neighborhood,
            side_pairs,
            vertex_pairs,
            neighbors,
            dual_neighbors,
        })
    }

    /// Neighbours of node `index` within the graph depth
    pub fn neighbors(&self, index: usize) -> &[usize] {
        self.neighbors.get(index).map_or(&[][..], Vec::as_slice)
    }

    /// Side neighbours of node `index`, independent of depth
    pub fn dual_neighbors(&self, index: usize) -> &[usize] {
        self.dual_neighbors.get(index).map_or(&[][..], Vec::as_slice)
    }

    /// How `a` and `b` are connected, if at all
    pub fn adjacency(&self, a: usize, b: usize) -> Option<Adjacency> {
        let key = pair(a, b);
        if self.side_pairs.contains(&key) {
            Some(Adjacency::Side)
        } else if self.vertex_pairs.contains(&key) {
            Some(Adjacency::Vertex)
        } else if self.neighbors(a).contains(&b) {
            Some(Adjacency::Neighbor)
        } else {
            None
        }
    }

    /// Number of shared-edge pairs
    pub fn side_count(&self) -> usize {
        self.side_pairs.len()
    }

    /// Number of shared-vertex-only pairs
    pub fn vertex_count(&self) -> usize {
        self.vertex_pairs.len()
    }

    /// Number of nodes
    pub fn len(&self) -> usize {
        self.neighbors.len()
    }

    /// Whether the graph has no nodes
    pub fn is_empty(&self) -> bool {
        self.neighbors.is_empty()
    }

    /// Breadth-first depth
    pub const fn depth(&self) -> usize {
        self.depth
    }

    /// Neighbourhood mode
    pub const fn neighborhood(&self) -> Neighborhood {
        self.neighborhood
    }
}

fn link(direct: &mut [Vec<usize>], a: usize, b: usize) {
    if let Some(list) = direct.get_mut(a) {
        list.push(b);
    }
    if let Some(list) = direct.get_mut(b) {
        list.push(a);
    }
}

/// Every node within `depth` hops of `start`, excluding `start`
fn breadth_first(direct: &[Vec<usize>], start: usize, depth: usize) -> Vec<usize> {
    let mut visited = HashSet::from([start]);
    let mut reached = Vec::new();
    let mut queue = VecDeque::from([(start, 0)]);

    while let Some((current, distance)) = queue.pop_front() {
        if distance >= depth {
            continue;
        }
        for &next in direct.get(current).map_or(&[][..], Vec::as_slice) {
            if visited.insert(next) {
                reached.push(next);
                queue.push_back((next, distance + 1));
            }
        }
    }

    reached
}
