//! Game-of-Life on tiling neighbour graphs

/// Stepping cells over a neighbour graph
pub mod automaton;
/// Rule string parsing
pub mod rule;

pub use automaton::{Automaton, StepReport};
pub use rule::{Counts, LifeRule, RuleSet};
