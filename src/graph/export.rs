//! JSON export of a neighbour graph
//!
//! The format is `{"n": count, "edges": [{"source", "target", "type"}]}`
//! with 0-based node indices and every undirected edge listed once.

use crate::graph::neighbors::{Adjacency, NeighborGraph};
use crate::io::configuration::GRAPH_EXPORT_FILE_NAME;
use crate::io::error::{ErrorContext, Result, WithContext};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

/// Exported edge type
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EdgeKind {
    /// Shared edge
    Side,
    /// Shared vertex only
    Vertex,
    /// Breadth-first reach beyond direct adjacency
    Neighbor,
}

impl From<Adjacency> for EdgeKind {
    fn from(adjacency: Adjacency) -> Self {
        match adjacency {
            Adjacency::Side => Self::Side,
            Adjacency::Vertex => Self::Vertex,
            Adjacency::Neighbor => Self::Neighbor,
        }
    }
}

/// One undirected edge
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphEdge {
    /// Lower-numbered endpoint
    pub source: usize,
    /// Higher-numbered endpoint
    pub target: usize,
    /// How the endpoints are connected
    #[serde(rename = "type")]
    pub kind: EdgeKind,
}

/// Serializable graph
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphExport {
    /// Node count
    pub n: usize,
    /// Undirected edges without duplicates
    pub edges: Vec<GraphEdge>,
}

impl GraphExport {
    /// Collect the edges of `graph`
    pub fn from_graph(graph: &NeighborGraph) -> Self {
        let mut seen = HashSet::new();
        let mut edges = Vec::new();

        for source in 0..graph.len() {
            for &target in graph.neighbors(source) {
                let key = (source.min(target), source.max(target));
                if !seen.insert(key) {
                    continue;
                }
                let kind = graph
                    .adjacency(source, target)
                    .map_or(EdgeKind::Neighbor, EdgeKind::from);
                edges.push(GraphEdge {
                    source: key.0,
                    target: key.1,
                    kind,
                });
            }
        }

        Self {
            n: graph.len(),
            edges,
        }
    }

    /// Pretty-printed JSON
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Write JSON to `path`, or to the default file name inside it when
    /// `path` is a directory
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the write fails
    pub fn write_json(&self, path: &Path) -> Result<PathBuf> {
        let target = if path.is_dir() {
            path.join(GRAPH_EXPORT_FILE_NAME)
        } else {
            path.to_path_buf()
        };

        let json = self.to_json()?;
        fs::write(&target, json).with_context(ErrorContext {
            path: Some(target.clone()),
            operation: Some("write graph export"),
            ..Default::default()
        })?;

        Ok(target)
    }
}
