//! Classification of generated tilings

/// Cundy-Rollett notation parsing and formatting
pub mod notation;
/// Vertex configuration extraction
pub mod vertex_config;

pub use notation::{Notation, VertexType};
pub use vertex_config::{VertexConfiguration, VertexGroup};
