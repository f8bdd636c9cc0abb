//! Generation constants and the immutable configuration passed through the pipeline

use crate::geometry::Tolerance;
use crate::io::error::{Result, invalid_parameter};
use std::time::Duration;

// Geometric comparison settings
/// Epsilon below which coordinates and scalars are treated as equal
pub const DEFAULT_TOLERANCE: f64 = 0.01;

/// Grid offsets of the 3x3 Moore neighbourhood scanned around a hash cell
pub const NEIGHBOR_OFFSETS: [[i64; 2]; 9] = [
    [-1, -1],
    [-1, 0],
    [-1, 1],
    [0, -1],
    [0, 0],
    [0, 1],
    [1, -1],
    [1, 0],
    [1, 1],
];

/// Allowed deviation of a vertex angle sum from a full turn, in radians
pub const VERTEX_ANGLE_TOLERANCE: f64 = 0.01;

/// Most polygons that can meet at a vertex, six 60° triangles
pub const MAX_VERTEX_DEGREE: usize = 6;

// Grammar allow-lists
/// Degrees in a full turn; transform angles must be below it
pub const FULL_TURN_DEGREES: u32 = 360;

/// Polygon side counts accepted in rule seeds
pub const POSSIBLE_SIDES: [u32; 8] = [3, 4, 5, 6, 8, 9, 12, 18];

/// Fixed transform angles (degrees) accepted in rules
pub const POSSIBLE_ANGLES: [u32; 6] = [30, 45, 60, 90, 120, 180];

// Growth control
/// Default number of transform repetitions
pub const DEFAULT_TRANSFORM_LAYERS: usize = 3;

/// Wall-clock budget for the transform phase, in milliseconds
pub const DEFAULT_TIME_BUDGET_MS: u64 = 5000;

/// Value substituted for the adjustable `a` star angle, in degrees
pub const DEFAULT_STAR_PARAMETER_DEGREES: f64 = 30.0;

// Neighbour graph defaults
/// Default breadth-first neighbourhood depth
pub const DEFAULT_NEIGHBOR_DEPTH: usize = 1;

// Automaton defaults
/// Rule used when none is supplied
pub const DEFAULT_LIFE_RULE: &str = "B3/S23";

/// Probability that a node starts alive after randomization
pub const DEFAULT_ALIVE_PROBABILITY: f64 = 0.5;

/// Fixed seed for reproducible automaton runs
pub const DEFAULT_SEED: u64 = 42;

/// Default number of automaton generations run by the CLI
pub const DEFAULT_GENERATIONS: usize = 100;

// Output settings
/// File name used for graph export when only a directory is given
pub const GRAPH_EXPORT_FILE_NAME: &str = "tiling-graph.json";

/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;

/// Immutable parameters for one generation run
///
/// Generation is a pure function of the rule string and this value.
#[derive(Clone, Debug)]
pub struct GenerationConfig {
    /// Epsilon for coordinate comparison
    pub tolerance: f64,
    /// Accepted seed side counts
    pub possible_sides: Vec<u32>,
    /// Accepted fixed transform angles in degrees
    pub possible_angles: Vec<u32>,
    /// Number of transform repetitions
    pub transform_layers: usize,
    /// Hash-cell offsets scanned for near-duplicate points
    pub neighbor_offsets: Vec<[i64; 2]>,
    /// Degrees substituted for adjustable star angles
    pub star_parameter: f64,
    /// Soft wall-clock limit on the transform phase
    pub time_budget: Duration,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            possible_sides: POSSIBLE_SIDES.to_vec(),
            possible_angles: POSSIBLE_ANGLES.to_vec(),
            transform_layers: DEFAULT_TRANSFORM_LAYERS,
            neighbor_offsets: NEIGHBOR_OFFSETS.to_vec(),
            star_parameter: DEFAULT_STAR_PARAMETER_DEGREES,
            time_budget: Duration::from_millis(DEFAULT_TIME_BUDGET_MS),
        }
    }
}

impl GenerationConfig {
    /// Set the number of transform repetitions
    #[must_use]
    pub const fn with_layers(mut self, layers: usize) -> Self {
        self.transform_layers = layers;
        self
    }

    /// Set the transform-phase time budget
    #[must_use]
    pub const fn with_time_budget(mut self, budget: Duration) -> Self {
        self.time_budget = budget;
        self
    }

    /// Set the degrees used for adjustable star angles
    #[must_use]
    pub const fn with_star_parameter(mut self, degrees: f64) -> Self {
        self.star_parameter = degrees;
        self
    }

    /// Set the comparison epsilon
    #[must_use]
    pub const fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Comparator built from the configured epsilon
    pub const fn comparator(&self) -> Tolerance {
        Tolerance::new(self.tolerance)
    }

    /// Check the configuration before any geometry is built
    ///
    /// # Errors
    ///
    /// Returns an error if the tolerance is not a positive finite number,
    /// an allow-list is empty, an angle is 0 or at least a full turn, or
    /// the offsets omit the centre cell
    pub fn validate(&self) -> Result<()> {
        if !(self.tolerance.is_finite() && self.tolerance > 0.0) {
            return Err(invalid_parameter(
                "tolerance",
                &self.tolerance,
                &"must be a positive finite number",
            ));
        }

        if self.possible_sides.is_empty() {
            return Err(invalid_parameter(
                "possible_sides",
                &"[]",
                &"at least one side count is required",
            ));
        }

        if self.possible_sides.iter().any(|&sides| sides < 3) {
            return Err(invalid_parameter(
                "possible_sides",
                &format!("{:?}", self.possible_sides),
                &"polygons need at least 3 sides",
            ));
        }

        if self.possible_angles.is_empty() {
            return Err(invalid_parameter(
                "possible_angles",
                &"[]",
                &"at least one angle is required",
            ));
        }

        if self
            .possible_angles
            .iter()
            .any(|&degrees| degrees == 0 || degrees >= FULL_TURN_DEGREES)
        {
            return Err(invalid_parameter(
                "possible_angles",
                &format!("{:?}", self.possible_angles),
                &format!("angles must lie strictly between 0 and {FULL_TURN_DEGREES} degrees"),
            ));
        }

        if !self.neighbor_offsets.contains(&[0, 0]) {
            return Err(invalid_parameter(
                "neighbor_offsets",
                &format!("{:?}", self.neighbor_offsets),
                &"offsets must include the centre cell",
            ));
        }

        Ok(())
    }
}
