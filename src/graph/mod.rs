//! Neighbour graph construction and export
//!
//! This module contains:
//! - Side and vertex adjacency discovery with breadth-first closure
//! - JSON graph export

/// JSON graph export
pub mod export;
/// Side/vertex adjacency and breadth-first neighbourhoods
pub mod neighbors;

pub use export::{EdgeKind, GraphEdge, GraphExport};
pub use neighbors::{Adjacency, NeighborGraph, Neighborhood};
