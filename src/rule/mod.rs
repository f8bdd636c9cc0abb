//! Tiling rule grammar and the catalog of named rules

/// Embedded library of named tilings
pub mod catalog;
/// Rule string parsing and validation
pub mod grammar;

pub use grammar::{Anchor, LandmarkKind, ShapeSlot, StarAngle, TilingRule, Transform, TransformKind};
