//! Tiling generation pipeline
//!
//! This module contains:
//! - Seed patch placement
//! - Landmark resolution and symmetry replication
//! - Dual construction
//! - The `Tiling` aggregate and the generator that ties the stages together

/// Dual tiling construction
pub mod dual;
/// Pipeline orchestration
pub mod generator;
/// Landmark lookup for anchored transforms
pub mod landmark;
/// Seed patch placement
pub mod seed;
/// Generated tiling aggregate
pub mod tiling;
/// Symmetry replication with rotation memoization
pub mod transform;

pub use generator::TilingGenerator;
pub use tiling::Tiling;
