//! Spatial hashing and deduplicated storage
//!
//! This module contains:
//! - The grid-bucketed approximate point index
//! - Point deduplication and grouping helpers
//! - The centroid-unique node store used during generation

/// Grid-bucketed approximate point index
pub mod index;
/// Centroid-unique polygon store
pub mod node_set;

pub use index::SpatialIndex;
pub use node_set::NodeSet;
