//! Cellular automaton over the neighbour graph of a tiling
//!
//! Every node is a cell whose neighbours are the graph neighbours at the
//! depth and neighbourhood the rules ask for. States advance synchronously:
//! 0 is dead, 1 is alive and higher states decay back to 0.

use crate::generation::Tiling;
use crate::geometry::Polygon;
use crate::graph::NeighborGraph;
use crate::io::configuration::DEFAULT_ALIVE_PROBABILITY;
use crate::io::error::{Result, invalid_parameter};
use crate::life::rule::RuleSet;
use bitvec::prelude::*;
use rand::{Rng, SeedableRng, rngs::StdRng};
use tracing::{debug, warn};

/// What changed in one generation
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StepReport {
    /// Nodes that went from dead to alive
    pub births: usize,
    /// Nodes that left the alive state
    pub deaths: usize,
    /// Side counts with no rule, ascending; their nodes were zeroed
    pub missing_rules: Vec<u32>,
}

/// Game-of-Life runner bound to a tiling's graph
pub struct Automaton<'a> {
    rules: RuleSet,
    graph: &'a NeighborGraph,
    sides: Vec<u32>,
    states: Vec<u8>,
    generation: usize,
    rng: StdRng,
}

impl<'a> Automaton<'a> {
    /// Bind `rules` to `tiling`, building the graph the rules ask for
    ///
    /// All cells start dead.
    ///
    /// # Errors
    ///
    /// Returns an error if the neighbour graph cannot be built
    pub fn new(tiling: &'a mut Tiling, rules: RuleSet, seed: u64) -> Result<Self> {
        let sides: Vec<u32> = tiling.nodes().iter().map(Polygon::sides).collect();
        let graph = tiling.compute_neighbors(rules.range(), rules.neighborhood())?;

        Ok(Self {
            rules,
            graph,
            states: vec![0; sides.len()],
            sides,
            generation: 0,
            rng: StdRng::seed_from_u64(seed),
        })
    }

    /// Set every cell alive with probability 0.5
    pub fn randomize(&mut self) {
        for state in &mut self.states {
            *state = u8::from(self.rng.random::<f64>() < DEFAULT_ALIVE_PROBABILITY);
        }
        self.generation = 0;
    }

    /// Set the state of one cell
    ///
    /// # Errors
    ///
    /// Returns an error if `index` is out of range
    pub fn set_state(&mut self, index: usize, state: u8) -> Result<()> {
        let cells = self.states.len();
        let cell = self
            .states
            .get_mut(index)
            .ok_or_else(|| invalid_parameter("index", &index, &format!("only {cells} cells")))?;
        *cell = state;
        Ok(())
    }

    /// Current states in node order
    pub fn states(&self) -> &[u8] {
        &self.states
    }

    /// Bitmap of cells in state 1
    pub fn alive(&self) -> BitVec {
        self.states.iter().map(|&state| state == 1).collect()
    }

    /// Number of cells in state 1
    pub fn alive_count(&self) -> usize {
        self.states.iter().filter(|&&state| state == 1).count()
    }

    /// Generations stepped since the last randomization
    pub const fn generation(&self) -> usize {
        self.generation
    }

    /// Rules in use
    pub const fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// Advance every cell by one generation
    pub fn step(&mut self) -> StepReport {
        let alive = self.alive();
        let mut report = StepReport::default();

        let next: Vec<u8> = self
            .states
            .iter()
            .zip(&self.sides)
            .enumerate()
            .map(|(index, (&state, &sides))| {
                let neighbors = self.graph.neighbors(index);
                if neighbors.is_empty() {
                    return 0;
                }

                let Some(rule) = self.rules.rule_for(sides) else {
                    if !report.missing_rules.contains(&sides) {
                        report.missing_rules.push(sides);
                    }
                    return 0;
                };

                let alive_neighbors = neighbors
                    .iter()
                    .filter(|&&neighbor| alive.get(neighbor).as_deref() == Some(&true))
                    .count();
                rule.next_state(state, alive_neighbors, neighbors.len())
            })
            .collect();

        for (&before, &after) in self.states.iter().zip(&next) {
            if before == 0 && after == 1 {
                report.births += 1;
            } else if before == 1 && after != 1 {
                report.deaths += 1;
            }
        }

        report.missing_rules.sort_unstable();
        if !report.missing_rules.is_empty() {
            warn!(
                generation = self.generation,
                sides = ?report.missing_rules,
                "no automaton rule for these side counts, cells zeroed"
            );
        }

        self.states = next;
        self.generation += 1;

        debug!(
            generation = self.generation,
            births = report.births,
            deaths = report.deaths,
            alive = self.alive_count(),
            "automaton stepped"
        );

        report
    }
}
