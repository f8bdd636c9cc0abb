//! Command-line interface for generating tilings and running automata on them

use crate::generation::{Tiling, TilingGenerator};
use crate::graph::Neighborhood;
use crate::io::configuration::{
    DEFAULT_GENERATIONS, DEFAULT_LIFE_RULE, DEFAULT_NEIGHBOR_DEPTH, DEFAULT_SEED,
    DEFAULT_STAR_PARAMETER_DEGREES, DEFAULT_TIME_BUDGET_MS, DEFAULT_TOLERANCE,
    DEFAULT_TRANSFORM_LAYERS, GenerationConfig,
};
use crate::io::error::{ErrorContext, Result, WithContext, invalid_parameter};
use crate::io::progress::ProgressManager;
use crate::life::{Automaton, RuleSet};
use crate::rule::catalog;
use clap::Parser;
use std::io::Write;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Parser, Debug)]
#[command(name = "tessella")]
#[command(
    author,
    version,
    about = "Generate planar tilings from rule strings and run cellular automata on them"
)]
/// Command-line arguments for the tiling tool
pub struct Cli {
    /// Rule string such as `3/r60/r(h2)`, or the name of a catalog tiling
    #[arg(value_name = "RULE", required_unless_present = "list")]
    pub rule: Option<String>,

    /// Print the tiling catalog and exit
    #[arg(short, long)]
    pub list: bool,

    /// Number of transform repetitions
    #[arg(short = 'L', long, default_value_t = DEFAULT_TRANSFORM_LAYERS)]
    pub layers: usize,

    /// Coordinate comparison epsilon
    #[arg(short, long, default_value_t = DEFAULT_TOLERANCE)]
    pub tolerance: f64,

    /// Wall-clock budget for the transform phase in milliseconds
    #[arg(short, long, default_value_t = DEFAULT_TIME_BUDGET_MS)]
    pub budget_ms: u64,

    /// Degrees used for adjustable star angles
    #[arg(long, default_value_t = DEFAULT_STAR_PARAMETER_DEGREES)]
    pub star_angle: f64,

    /// Breadth-first depth of the exported neighbour graph
    #[arg(short, long, default_value_t = DEFAULT_NEIGHBOR_DEPTH)]
    pub depth: usize,

    /// Neighbourhood of the exported graph (moore or von-neumann)
    #[arg(short, long, default_value_t = Neighborhood::Moore)]
    pub neighborhood: Neighborhood,

    /// Write the neighbour graph as JSON to this file or directory
    #[arg(short, long, value_name = "PATH")]
    pub export: Option<PathBuf>,

    /// Run a Game-of-Life rule (e.g. `B3/S23`, or `3=B3/S23;6=B2/S34` by shape)
    #[arg(long, value_name = "LIFE_RULE", num_args = 0..=1, default_missing_value = DEFAULT_LIFE_RULE)]
    pub life: Option<String>,

    /// Automaton generations to run
    #[arg(short, long, default_value_t = DEFAULT_GENERATIONS)]
    pub generations: usize,

    /// Random seed for the automaton's initial state
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Generation configuration described by the flags
    pub fn generation_config(&self) -> GenerationConfig {
        GenerationConfig::default()
            .with_layers(self.layers)
            .with_tolerance(self.tolerance)
            .with_time_budget(Duration::from_millis(self.budget_ms))
            .with_star_parameter(self.star_angle)
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }
}

/// Runs one command line invocation
pub struct TilingProcessor {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl TilingProcessor {
    /// Create a processor for the given arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Process the arguments, writing the report to stdout
    ///
    /// # Errors
    ///
    /// Returns an error if generation, export or the automaton fails
    pub fn process(&mut self) -> Result<()> {
        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        self.process_to(&mut out)
    }

    /// Process the arguments, writing the report to `out`
    ///
    /// # Errors
    ///
    /// Returns an error if generation, export, the automaton or writing the
    /// report fails
    pub fn process_to<W: Write>(&mut self, out: &mut W) -> Result<()> {
        if self.cli.list {
            return write_catalog(out).with_context(output_context());
        }

        let query = self
            .cli
            .rule
            .as_deref()
            .ok_or_else(|| invalid_parameter("rule", &"<none>", &"a rule or --list is required"))?;
        let rule = catalog::find(query).map_or(query, |entry| entry.rule);

        let generator = TilingGenerator::new(self.cli.generation_config())?;
        let mut tiling = generator.generate(rule)?;
        write_summary(out, &tiling).with_context(output_context())?;

        if let Some(path) = self.cli.export.clone() {
            tiling.compute_neighbors(self.cli.depth, self.cli.neighborhood)?;
            let written = tiling.export_graph()?.write_json(&path)?;
            writeln!(out, "graph: {}", written.display()).with_context(output_context())?;
        }

        if let Some(life) = self.cli.life.clone() {
            self.run_life(out, &mut tiling, &life)?;
        }

        Ok(())
    }

    fn run_life<W: Write>(&mut self, out: &mut W, tiling: &mut Tiling, life: &str) -> Result<()> {
        let rules = RuleSet::parse(life)?;
        let generations = self.cli.generations;
        let mut automaton = Automaton::new(tiling, rules, self.cli.seed)?;
        automaton.randomize();

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(generations);
        }

        let mut missing: Vec<u32> = Vec::new();
        for generation in 1..=generations {
            let report = automaton.step();
            for sides in report.missing_rules {
                if !missing.contains(&sides) {
                    missing.push(sides);
                }
            }
            if let Some(ref pm) = self.progress_manager {
                pm.update(generation, automaton.alive_count());
            }
        }

        if let Some(ref pm) = self.progress_manager {
            pm.finish();
        }

        missing.sort_unstable();
        writeln!(
            out,
            "life: {life} after {} generations, {} alive",
            automaton.generation(),
            automaton.alive_count()
        )
        .with_context(output_context())?;
        if !missing.is_empty() {
            writeln!(out, "life: no rule for sides {missing:?}").with_context(output_context())?;
        }
        Ok(())
    }
}

fn output_context() -> ErrorContext {
    ErrorContext {
        path: Some(PathBuf::from("<stdout>")),
        operation: Some("write report"),
        ..Default::default()
    }
}

fn write_catalog<W: Write>(out: &mut W) -> std::io::Result<()> {
    for (group, entry) in catalog::entries() {
        writeln!(
            out,
            "{:<6} {:<28} {:<24} {}",
            group.id,
            entry.name.unwrap_or("-"),
            entry.notation.unwrap_or("-"),
            entry.rule
        )?;
    }
    Ok(())
}

fn write_summary<W: Write>(out: &mut W, tiling: &Tiling) -> std::io::Result<()> {
    writeln!(out, "rule: {}", tiling.rule())?;
    writeln!(
        out,
        "nodes: {} (seed {}, repetitions {}{})",
        tiling.len(),
        tiling.seed_count(),
        tiling.repetitions(),
        if tiling.is_truncated() {
            ", truncated"
        } else {
            ""
        }
    )?;
    writeln!(out, "vertex groups: {}", tiling.vertex_groups().join(" "))?;
    writeln!(out, "notation: {}", tiling.cr_notation())
}
