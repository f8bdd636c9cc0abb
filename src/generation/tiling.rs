//! The generated tiling aggregate
//!
//! Holds the polygon list produced by the pipeline together with the
//! landmark snapshot, the vertex classification and, once requested, the
//! neighbour graph. Nodes are never mutated after generation; only the
//! graph is rebuilt when a consumer asks for a different depth or
//! neighbourhood.

use crate::analysis::VertexConfiguration;
use crate::geometry::Polygon;
use crate::graph::{GraphExport, NeighborGraph, Neighborhood};
use crate::io::configuration::{DEFAULT_NEIGHBOR_DEPTH, GenerationConfig};
use crate::io::error::Result;
use crate::rule::TilingRule;

/// A finished tiling
#[derive(Clone, Debug)]
pub struct Tiling {
    rule: TilingRule,
    config: GenerationConfig,
    nodes: Vec<Polygon>,
    anchors: Vec<Polygon>,
    seed_count: usize,
    repetitions: usize,
    truncated: bool,
    configuration: VertexConfiguration,
    graph: Option<NeighborGraph>,
}

impl Tiling {
    pub(crate) const fn new(
        rule: TilingRule,
        config: GenerationConfig,
        nodes: Vec<Polygon>,
        anchors: Vec<Polygon>,
        seed_count: usize,
        repetitions: usize,
        truncated: bool,
        configuration: VertexConfiguration,
    ) -> Self {
        Self {
            rule,
            config,
            nodes,
            anchors,
            seed_count,
            repetitions,
            truncated,
            configuration,
            graph: None,
        }
    }

    /// Rule the tiling was generated from
    pub const fn rule(&self) -> &TilingRule {
        &self.rule
    }

    /// Configuration used for generation and graph construction
    pub const fn config(&self) -> &GenerationConfig {
        &self.config
    }

    /// Every polygon, dual polygons when the rule asked for the dual
    pub fn nodes(&self) -> &[Polygon] {
        &self.nodes
    }

    /// Snapshot landmarks were resolved against
    pub fn anchors(&self) -> &[Polygon] {
        &self.anchors
    }

    /// Number of polygons placed by the seed
    pub const fn seed_count(&self) -> usize {
        self.seed_count
    }

    /// Transform repetitions that ran to completion
    pub const fn repetitions(&self) -> usize {
        self.repetitions
    }

    /// Whether the time budget cut generation short
    pub const fn is_truncated(&self) -> bool {
        self.truncated
    }

    /// Whether the nodes are the dual of the generated tiling
    pub const fn is_dual(&self) -> bool {
        self.rule.is_dual()
    }

    /// Number of polygons
    pub const fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the tiling has no polygons
    pub const fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Vertex classification of the nodes
    pub const fn configuration(&self) -> &VertexConfiguration {
        &self.configuration
    }

    /// Sorted `a.b.c` vertex configuration strings
    pub fn vertex_groups(&self) -> Vec<String> {
        self.configuration.vertex_groups()
    }

    /// Cundy-Rollett notation, e.g. `3^2.4.12;4^4`
    pub fn cr_notation(&self) -> String {
        self.configuration.notation().to_string()
    }

    /// Build (or rebuild) the neighbour graph
    ///
    /// An existing graph with the same depth and neighbourhood is reused.
    ///
    /// # Errors
    ///
    /// Returns an error if `depth` is zero
    pub fn compute_neighbors(
        &mut self,
        depth: usize,
        neighborhood: Neighborhood,
    ) -> Result<&NeighborGraph> {
        let graph = match self.graph.take() {
            Some(graph) if graph.depth() == depth && graph.neighborhood() == neighborhood => graph,
            _ => NeighborGraph::build(
                &self.nodes,
                depth,
                neighborhood,
                self.config.comparator(),
                &self.config.neighbor_offsets,
            )?,
        };
        Ok(self.graph.insert(graph))
    }

    /// Current neighbour graph, if one was computed
    pub const fn graph(&self) -> Option<&NeighborGraph> {
        self.graph.as_ref()
    }

    /// Neighbours of node `index`, empty before a graph is computed
    pub fn neighbors(&self, index: usize) -> &[usize] {
        self.graph
            .as_ref()
            .map_or(&[][..], |graph| graph.neighbors(index))
    }

    /// Direct side neighbours of node `index`, empty before a graph is computed
    pub fn dual_neighbors(&self, index: usize) -> &[usize] {
        self.graph
            .as_ref()
            .map_or(&[][..], |graph| graph.dual_neighbors(index))
    }

    /// Edge list of the current graph, building the default graph if needed
    ///
    /// # Errors
    ///
    /// Returns an error if the default graph cannot be built
    pub fn export_graph(&mut self) -> Result<GraphExport> {
        if let Some(graph) = &self.graph {
            return Ok(GraphExport::from_graph(graph));
        }
        let graph = self.compute_neighbors(DEFAULT_NEIGHBOR_DEPTH, Neighborhood::default())?;
        Ok(GraphExport::from_graph(graph))
    }
}
