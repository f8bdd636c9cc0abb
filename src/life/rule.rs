//! Game-of-Life rule strings
//!
//! Two spellings are accepted:
//! - `B<digits>/S<digits>[/G<n>]`, where each digit is an alive-neighbour
//!   count, or `B<lo>-<hi>/S<lo>-<hi>` for inclusive ranges
//! - `R<range>,C<n>,S<lo>-<hi>,B<lo>-<hi>`, the comma form used when the
//!   string contains no `/`
//!
//! `G` and `C` set the number of states, `N` the neighbourhood (`Nn` for
//! von Neumann) and `R` the breadth-first range of the neighbour graph.
//! A range whose bounds are both at most 1 is read as a fraction of the
//! node's neighbour count.

use crate::graph::Neighborhood;
use crate::io::error::{Result, TilingError};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Neighbour counts that trigger birth or survival
#[derive(Clone, Debug, PartialEq)]
pub enum Counts {
    /// Exact alive-neighbour counts
    List(Vec<usize>),
    /// Inclusive range of counts, or of alive fractions when both bounds are at most 1
    Range {
        /// Lower bound
        min: f64,
        /// Upper bound
        max: f64,
    },
}

impl Counts {
    /// Whether the bounds are fractions of the neighbour count
    pub fn is_rate(&self) -> bool {
        matches!(self, Self::Range { min, max } if *min <= 1.0 && *max <= 1.0)
    }

    /// Whether `alive` of `neighbors` neighbours satisfies the counts
    pub fn matches(&self, alive: usize, neighbors: usize) -> bool {
        match self {
            Self::List(counts) => counts.contains(&alive),
            Self::Range { min, max } if self.is_rate() => {
                if neighbors == 0 {
                    return false;
                }
                (*min..=*max).contains(&(alive as f64 / neighbors as f64))
            }
            Self::Range { min, max } => (*min..=*max).contains(&(alive as f64)),
        }
    }
}

impl fmt::Display for Counts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::List(counts) => counts.iter().try_for_each(|count| write!(f, "{count}")),
            Self::Range { min, max } => write!(f, "{min}-{max}"),
        }
    }
}

/// Parsed automaton rule
#[derive(Clone, Debug, PartialEq)]
pub struct LifeRule {
    /// Counts that bring a dead node to life
    pub birth: Counts,
    /// Counts that keep a live node alive
    pub survival: Counts,
    /// Number of states; states above 1 decay towards 0
    pub generations: u8,
    /// Neighbourhood of the graph the rule runs on
    pub neighborhood: Neighborhood,
    /// Breadth-first depth of the graph the rule runs on
    pub range: usize,
}

impl Default for LifeRule {
    fn default() -> Self {
        Self {
            birth: Counts::List(vec![3]),
            survival: Counts::List(vec![2, 3]),
            generations: 1,
            neighborhood: Neighborhood::Moore,
            range: 1,
        }
    }
}

impl LifeRule {
    /// Parse a rule string
    ///
    /// # Errors
    ///
    /// Returns [`TilingError::InvalidLifeRule`] for unknown pieces,
    /// non-numeric counts, malformed ranges or a state count outside 1..=255
    pub fn parse(rule: &str) -> Result<Self> {
        let fail = |reason: String| TilingError::InvalidLifeRule {
            rule: rule.to_string(),
            reason,
        };

        let trimmed = rule.trim();
        if trimmed.is_empty() {
            return Err(fail("rule is empty".to_string()));
        }

        let separator = if trimmed.contains('/') { '/' } else { ',' };
        let mut parsed = Self {
            birth: Counts::List(Vec::new()),
            survival: Counts::List(Vec::new()),
            ..Self::default()
        };

        for piece in trimmed.split(separator).map(str::trim) {
            let mut chars = piece.chars();
            let Some(prefix) = chars.next() else {
                continue;
            };
            let value = chars.as_str();

            match prefix.to_ascii_uppercase() {
                'B' => parsed.birth = parse_counts(value).map_err(fail)?,
                'S' => parsed.survival = parse_counts(value).map_err(fail)?,
                'G' | 'C' => {
                    parsed.generations = match value.parse::<u8>() {
                        Ok(states) if states > 0 => states,
                        _ => {
                            return Err(fail(format!(
                                "state count '{value}' must be between 1 and 255"
                            )));
                        }
                    };
                }
                'N' => {
                    parsed.neighborhood = if value == "n" {
                        Neighborhood::VonNeumann
                    } else {
                        Neighborhood::Moore
                    };
                }
                'R' => {
                    parsed.range = match value.parse::<usize>() {
                        Ok(range) if range > 0 => range,
                        _ => 1,
                    };
                }
                _ => return Err(fail(format!("unknown piece '{piece}'"))),
            }
        }

        Ok(parsed)
    }

    /// State of a node in the next generation
    ///
    /// `alive` counts neighbours in state 1 out of `neighbors` in total.
    pub fn next_state(&self, state: u8, alive: usize, neighbors: usize) -> u8 {
        match state {
            0 => u8::from(self.birth.matches(alive, neighbors)),
            1 if self.survival.matches(alive, neighbors) => 1,
            _ if state.saturating_add(1) >= self.generations => 0,
            _ => state + 1,
        }
    }
}

impl fmt::Display for LifeRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "B{}/S{}", self.birth, self.survival)?;
        if self.generations > 1 {
            write!(f, "/G{}", self.generations)?;
        }
        if self.neighborhood == Neighborhood::VonNeumann {
            write!(f, "/Nn")?;
        }
        if self.range > 1 {
            write!(f, "/R{}", self.range)?;
        }
        Ok(())
    }
}

impl FromStr for LifeRule {
    type Err = TilingError;

    fn from_str(rule: &str) -> Result<Self> {
        Self::parse(rule)
    }
}

/// One rule for every node, or one rule per polygon side count
#[derive(Clone, Debug, PartialEq)]
pub enum RuleSet {
    /// Same rule everywhere
    Single(LifeRule),
    /// Rule keyed by side count
    ByShape(BTreeMap<u32, LifeRule>),
}

impl Default for RuleSet {
    fn default() -> Self {
        Self::Single(LifeRule::default())
    }
}

impl RuleSet {
    /// Parse either a single rule or `sides=rule` pairs joined by `;`
    ///
    /// # Errors
    ///
    /// Returns [`TilingError::InvalidLifeRule`] if any rule or side count
    /// fails to parse
    pub fn parse(text: &str) -> Result<Self> {
        if !text.contains('=') {
            return LifeRule::parse(text).map(Self::Single);
        }

        text.split(';')
            .filter(|pair| !pair.trim().is_empty())
            .map(|pair| parse_pair(text, pair))
            .collect::<Result<BTreeMap<_, _>>>()
            .map(Self::ByShape)
    }

    /// Rule for nodes with `sides` sides, if one exists
    pub fn rule_for(&self, sides: u32) -> Option<&LifeRule> {
        match self {
            Self::Single(rule) => Some(rule),
            Self::ByShape(rules) => rules.get(&sides),
        }
    }

    /// Widest range any rule asks for
    pub fn range(&self) -> usize {
        match self {
            Self::Single(rule) => rule.range,
            Self::ByShape(rules) => rules.values().map(|rule| rule.range).max().unwrap_or(1),
        }
    }

    /// Moore if any rule asks for it, von Neumann otherwise
    pub fn neighborhood(&self) -> Neighborhood {
        match self {
            Self::Single(rule) => rule.neighborhood,
            Self::ByShape(rules) => {
                if rules.is_empty()
                    || rules
                        .values()
                        .any(|rule| rule.neighborhood == Neighborhood::Moore)
                {
                    Neighborhood::Moore
                } else {
                    Neighborhood::VonNeumann
                }
            }
        }
    }
}

impl FromStr for RuleSet {
    type Err = TilingError;

    fn from_str(text: &str) -> Result<Self> {
        Self::parse(text)
    }
}

fn parse_counts(value: &str) -> std::result::Result<Counts, String> {
    if let Some((min, max)) = value.split_once('-') {
        let bound = |text: &str| {
            text.trim()
                .parse::<f64>()
                .map_err(|error| format!("range bound '{text}': {error}"))
        };
        let (min, max) = (bound(min)?, bound(max)?);
        if min > max {
            return Err(format!("range {min}-{max} is empty"));
        }
        return Ok(Counts::Range { min, max });
    }

    value
        .chars()
        .map(|digit| {
            digit
                .to_digit(10)
                .map(|count| count as usize)
                .ok_or_else(|| format!("'{digit}' is not a neighbour count"))
        })
        .collect::<std::result::Result<Vec<_>, _>>()
        .map(Counts::List)
}

fn parse_pair(text: &str, pair: &str) -> Result<(u32, LifeRule)> {
    let fail = |reason: String| TilingError::InvalidLifeRule {
        rule: text.to_string(),
        reason,
    };
    let (sides, rule) = pair
        .split_once('=')
        .ok_or_else(|| fail(format!("'{pair}' is not a sides=rule pair")))?;
    let sides = sides
        .trim()
        .parse::<u32>()
        .map_err(|error| fail(format!("side count '{sides}': {error}")))?;
    Ok((sides, LifeRule::parse(rule)?))
}
