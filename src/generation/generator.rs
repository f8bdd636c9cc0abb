//! Generation pipeline
//!
//! parse → seed → transforms → optional dual → vertex classification

use crate::analysis::VertexConfiguration;
use crate::generation::dual::compute_dual;
use crate::generation::seed::SeedBuilder;
use crate::generation::tiling::Tiling;
use crate::generation::transform::TransformEngine;
use crate::io::configuration::GenerationConfig;
use crate::io::error::{Result, invalid_parameter};
use crate::rule::{TilingRule, catalog};
use std::time::Instant;
use tracing::{debug, info};

/// Turns rule strings into tilings under one configuration
#[derive(Clone, Debug)]
pub struct TilingGenerator {
    config: GenerationConfig,
}

impl TilingGenerator {
    /// Create a generator after validating `config`
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid
    pub fn new(config: GenerationConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Configuration shared by every run
    pub const fn config(&self) -> &GenerationConfig {
        &self.config
    }

    /// Parse `rule` and generate its tiling
    ///
    /// # Errors
    ///
    /// Returns an error if the rule is invalid, a seed slot has no free
    /// edge, or a transform references a missing landmark
    pub fn generate(&self, rule: &str) -> Result<Tiling> {
        let rule = TilingRule::parse(rule, &self.config)?;
        self.generate_rule(rule)
    }

    /// Generate the catalog tiling called `name`
    ///
    /// # Errors
    ///
    /// Returns an error if no catalog entry matches or generation fails
    pub fn generate_named(&self, name: &str) -> Result<Tiling> {
        let entry = catalog::find(name)
            .ok_or_else(|| invalid_parameter("name", &name, &"no catalog entry matches"))?;
        self.generate(entry.rule)
    }

    /// Generate the tiling of an already parsed rule
    ///
    /// # Errors
    ///
    /// Returns an error if a seed slot has no free edge or a transform
    /// references a missing landmark
    pub fn generate_rule(&self, rule: TilingRule) -> Result<Tiling> {
        let start = Instant::now();
        let tolerance = self.config.comparator();
        let offsets = &self.config.neighbor_offsets;

        let seed = SeedBuilder::new(&self.config).build(&rule)?;
        let seed_count = seed.len();

        let expansion = TransformEngine::new(&self.config, rule.transforms()).run(seed)?;
        debug!(
            nodes = expansion.nodes.len(),
            repetitions = expansion.repetitions,
            cache_hits = expansion.cache.hits,
            cache_misses = expansion.cache.misses,
            elapsed_ms = start.elapsed().as_millis() as u64,
            "transforms applied"
        );

        let nodes = if rule.is_dual() {
            let dual = compute_dual(expansion.nodes.as_slice(), tolerance, offsets);
            debug!(
                primal = expansion.nodes.len(),
                nodes = dual.len(),
                elapsed_ms = start.elapsed().as_millis() as u64,
                "dual computed"
            );
            dual
        } else {
            expansion.nodes.into_vec()
        };

        let configuration = VertexConfiguration::extract(&nodes, tolerance, offsets);
        let tiling = Tiling::new(
            rule,
            self.config.clone(),
            nodes,
            expansion.anchors,
            seed_count,
            expansion.repetitions,
            expansion.truncated,
            configuration,
        );

        info!(
            rule = %tiling.rule(),
            nodes = tiling.len(),
            notation = %tiling.cr_notation(),
            truncated = tiling.is_truncated(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "tiling generated"
        );

        Ok(tiling)
    }
}

impl Default for TilingGenerator {
    fn default() -> Self {
        Self {
            config: GenerationConfig::default(),
        }
    }
}
