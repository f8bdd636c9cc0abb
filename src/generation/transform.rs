//! Symmetry replication of the seed patch
//!
//! The full transform list is replayed `transform_layers` times. Every
//! transform maps an operand set (the previous repetition's additions, the
//! seed, and everything produced earlier in the current repetition) to new
//! candidate polygons. Candidates are merged into the master set once per
//! repetition, and the wall-clock budget is checked between repetitions.

use crate::generation::landmark::{self, Landmark};
use crate::geometry::ordering::wrap_angle;
use crate::geometry::{CellKey, Polygon, Tolerance, Vector2};
use crate::io::configuration::{FULL_TURN_DEGREES, GenerationConfig};
use crate::io::error::{Result, WithContext};
use crate::rule::{Anchor, LandmarkKind, Transform, TransformKind};
use crate::spatial::NodeSet;
use std::collections::HashMap;
use std::f64::consts::{FRAC_PI_2, PI, TAU};
use std::time::Instant;
use tracing::{debug, warn};

/// Key for a memoized rotation: the source cell and the total turn in degrees
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RotationKey {
    cell: CellKey,
    degrees: u32,
}

/// Memoization cache for rotations about the origin
///
/// Seed polygons are rotated again on every repetition, so their rotated
/// centroids are stored per hash cell and turn. A bucket can hold several
/// sources; a hit requires the source to match within tolerance.
#[derive(Debug)]
pub struct RotationCache {
    tolerance: Tolerance,
    entries: HashMap<RotationKey, Vec<(Vector2, Vector2)>>,

    /// Cache performance statistics
    pub stats: CacheStats,
}

/// Performance metrics for cache effectiveness
#[derive(Default, Debug, Clone, Copy)]
pub struct CacheStats {
    /// Number of cache hits
    pub hits: usize,
    /// Number of cache misses
    pub misses: usize,
}

impl RotationCache {
    /// Create an empty cache
    pub fn new(tolerance: Tolerance) -> Self {
        Self {
            tolerance,
            entries: HashMap::new(),
            stats: CacheStats::default(),
        }
    }

    /// Retrieve the rotated position of `point` or compute and store it
    pub fn get_or_compute<F>(&mut self, point: Vector2, degrees: u32, compute_fn: F) -> Vector2
    where
        F: FnOnce() -> Vector2,
    {
        let key = RotationKey {
            cell: self.tolerance.cell_key(point),
            degrees,
        };
        let tolerance = self.tolerance;
        let bucket = self.entries.entry(key).or_default();

        if let Some(&(_, rotated)) = bucket
            .iter()
            .find(|(source, _)| tolerance.points_eq(*source, point))
        {
            self.stats.hits += 1;
            return rotated;
        }

        self.stats.misses += 1;
        let rotated = compute_fn();
        bucket.push((point, rotated));
        rotated
    }
}

/// Result of the transform phase
#[derive(Debug)]
pub struct Expansion {
    /// Every polygon after the final merge
    pub nodes: NodeSet,
    /// Snapshot used to resolve landmarks
    pub anchors: Vec<Polygon>,
    /// Repetitions that ran to completion
    pub repetitions: usize,
    /// Whether the time budget cut the run short
    pub truncated: bool,
    /// Rotation cache statistics
    pub cache: CacheStats,
}

/// Replays a rule's transforms over a seed patch
pub struct TransformEngine<'a> {
    config: &'a GenerationConfig,
    tolerance: Tolerance,
    transforms: &'a [Transform],
    resolved: Vec<Option<Landmark>>,
    rotations: RotationCache,
}

impl<'a> TransformEngine<'a> {
    /// Create an engine for the given transforms
    pub fn new(config: &'a GenerationConfig, transforms: &'a [Transform]) -> Self {
        let tolerance = config.comparator();
        Self {
            config,
            tolerance,
            transforms,
            resolved: vec![None; transforms.len()],
            rotations: RotationCache::new(tolerance),
        }
    }

    /// Grow the seed into a tiling
    ///
    /// # Errors
    ///
    /// Returns [`crate::io::error::TilingError::LandmarkNotFound`] tagged
    /// with the transform position when a landmark ordinal is out of range
    pub fn run(mut self, mut nodes: NodeSet) -> Result<Expansion> {
        let layers = self.config.transform_layers;
        let transforms = self.transforms;
        let seed: Vec<Polygon> = nodes.as_slice().to_vec();
        let mut layer: Vec<Polygon> = seed.clone();
        let mut anchors: Vec<Polygon> = seed.clone();
        let mut repetitions = 0;
        let mut truncated = false;
        let start = Instant::now();

        for repetition in 0..layers {
            let mut produced = self.empty_set();

            for (index, transform) in transforms.iter().enumerate() {
                if repetition + 1 == layers && index + 1 == transforms.len() {
                    break;
                }

                if repetition == 0 {
                    anchors = nodes.iter().chain(produced.iter()).cloned().collect();
                }

                let operands = self.operands(&[layer.as_slice(), seed.as_slice(), produced.as_slice()]);
                let candidates = self
                    .apply(index, *transform, &operands, &anchors)
                    .with_transform(index)?;
                produced.merge(candidates);
            }

            let added = nodes.merge(produced.into_vec());
            layer = added
                .iter()
                .filter_map(|&index| nodes.get(index))
                .cloned()
                .collect();
            repetitions = repetition + 1;

            debug!(
                repetition,
                added = added.len(),
                nodes = nodes.len(),
                elapsed_ms = start.elapsed().as_millis() as u64,
                "transform repetition merged"
            );

            if repetitions < layers && start.elapsed() > self.config.time_budget {
                truncated = true;
                warn!(
                    repetitions,
                    budget_ms = self.config.time_budget.as_millis() as u64,
                    "transform budget exhausted, returning partial tiling"
                );
                break;
            }
        }

        Ok(Expansion {
            nodes,
            anchors,
            repetitions,
            truncated,
            cache: self.rotations.stats,
        })
    }

    fn empty_set(&self) -> NodeSet {
        NodeSet::new(self.tolerance, &self.config.neighbor_offsets)
    }

    /// Union of the operand sources, unique by centroid, first seen kept
    fn operands(&self, sources: &[&[Polygon]]) -> Vec<Polygon> {
        let mut set = self.empty_set();
        set.merge(sources.iter().flat_map(|source| source.iter().cloned()));
        set.into_vec()
    }

    fn apply(
        &mut self,
        index: usize,
        transform: Transform,
        operands: &[Polygon],
        anchors: &[Polygon],
    ) -> Result<Vec<Polygon>> {
        match (transform.kind, transform.anchor) {
            (TransformKind::Mirror, Anchor::Angle(degrees)) => {
                Ok(self.mirror_by_angle(degrees, operands))
            }
            (TransformKind::Rotate, Anchor::Angle(degrees)) => {
                Ok(self.rotate_by_angle(degrees, operands))
            }
            (TransformKind::Translate, Anchor::Angle(_)) => Ok(Vec::new()),
            (kind, Anchor::Landmark { kind: landmark_kind, ordinal }) => {
                let landmark = self.landmark(index, landmark_kind, ordinal, anchors)?;
                Ok(operands
                    .iter()
                    .map(|node| self.relative_to(kind, landmark, node))
                    .collect())
            }
        }
    }

    /// Resolve a landmark once per transform and reuse it afterwards
    fn landmark(
        &mut self,
        index: usize,
        kind: LandmarkKind,
        ordinal: usize,
        anchors: &[Polygon],
    ) -> Result<Landmark> {
        if let Some(Some(landmark)) = self.resolved.get(index) {
            return Ok(*landmark);
        }

        let landmark = landmark::resolve(
            anchors,
            kind,
            ordinal,
            self.tolerance,
            &self.config.neighbor_offsets,
        )?;
        if let Some(slot) = self.resolved.get_mut(index) {
            *slot = Some(landmark);
        }
        Ok(landmark)
    }

    /// Reflect across lines through the origin at the doubled angles
    /// `a, 2a, 4a, …` (below a full turn), each line perpendicular to its
    /// angle. Each line also reflects the results of the previous lines.
    fn mirror_by_angle(&self, degrees: u32, operands: &[Polygon]) -> Vec<Polygon> {
        let mut lines = Vec::new();
        let mut angle = f64::from(degrees).to_radians();
        while angle < TAU {
            lines.push(angle + FRAC_PI_2);
            angle *= 2.0;
        }

        let mut results = self.empty_set();
        for line in lines {
            let mirrored: Vec<Polygon> = operands
                .iter()
                .chain(results.iter())
                .map(|node| {
                    node.placed(
                        node.centroid().mirror(line),
                        wrap_angle(2.0f64.mul_add(line, -node.angle())),
                        &self.tolerance,
                    )
                })
                .collect();
            results.merge(mirrored);
        }

        results.into_vec()
    }

    /// Rotate about the origin by every multiple of the angle below a full turn
    fn rotate_by_angle(&mut self, degrees: u32, operands: &[Polygon]) -> Vec<Polygon> {
        let tolerance = self.tolerance;
        let mut results = Vec::new();

        for turn in (1..).map(|step| step * degrees).take_while(|&turn| turn < FULL_TURN_DEGREES) {
            let radians = f64::from(turn).to_radians();
            for node in operands {
                let centroid = node.centroid();
                let rotated = self.rotations.get_or_compute(centroid, turn, || {
                    let distance = centroid.magnitude();
                    if distance < tolerance.epsilon() {
                        Vector2::ZERO
                    } else {
                        Vector2::from_polar(distance, centroid.heading() + radians)
                    }
                });
                results.push(node.placed(
                    rotated,
                    wrap_angle(node.angle() + radians),
                    &tolerance,
                ));
            }
        }

        results
    }

    /// Landmark-anchored mirror, rotation or translation of one polygon
    ///
    /// Rotation about a landmark is a half turn. Mirroring on an edge
    /// midpoint reflects across that edge's line; on any other landmark it
    /// is a half turn as well.
    fn relative_to(&self, kind: TransformKind, landmark: Landmark, node: &Polygon) -> Polygon {
        let centroid = node.centroid();
        let (centroid, angle) = match (kind, landmark.direction) {
            (TransformKind::Translate, _) => (centroid + landmark.point, node.angle()),
            (TransformKind::Mirror, Some(direction)) => (
                centroid.reflect_across(landmark.point, direction),
                wrap_angle(2.0f64.mul_add(direction.heading(), -node.angle())),
            ),
            (TransformKind::Mirror | TransformKind::Rotate, _) => (
                centroid.reflect_through(landmark.point),
                wrap_angle(PI + node.angle()),
            ),
        };
        node.placed(centroid, angle, &self.tolerance)
    }
}
