//! Geometric primitives
//!
//! This module contains the value types every later stage builds on:
//! - 2D vectors and their transforms
//! - Tolerance-based comparison and spatial hash keys
//! - Clockwise ordering and regular polygon measurements
//! - Regular, star and dual polygon nodes

/// Clockwise ordering and regular polygon measurements
pub mod ordering;
/// Regular, star and dual polygon nodes
pub mod polygon;
/// Approximate equality and spatial hash keys
pub mod tolerance;
/// 2D vector value type
pub mod vector;

pub use polygon::{Polygon, Shape};
pub use tolerance::{CellKey, Tolerance};
pub use vector::Vector2;
