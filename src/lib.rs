//! Rule-driven planar tiling generation
//!
//! A compact grammar describes a seed patch and the symmetry transforms that
//! replicate it. The crate grows the tiling, deduplicates it under a
//! coordinate tolerance, derives neighbour graphs and the dual, classifies
//! the vertices in Cundy-Rollett notation and runs Game-of-Life automata on
//! the resulting graph.

#![forbid(unsafe_code)]

/// Vertex configuration extraction and Cundy-Rollett notation
pub mod analysis;
/// Seed placement, symmetry replication, duals and the generation pipeline
pub mod generation;
/// Vectors, tolerance comparison, ordering and polygons
pub mod geometry;
/// Neighbour graphs and their JSON export
pub mod graph;
/// Command line, configuration, errors and progress display
pub mod io;
/// Game-of-Life rules and automaton
pub mod life;
/// Rule grammar and the catalog of named tilings
pub mod rule;
/// Spatial hashing and deduplicated node storage
pub mod spatial;

pub use generation::{Tiling, TilingGenerator};
pub use io::error::{Result, TilingError};
