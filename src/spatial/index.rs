//! Grid-bucketed approximate point index
//!
//! Points are hashed into cells of side `2 × tolerance`. A lookup scans the
//! configured cell offsets (the full 3×3 neighbourhood by default) so that
//! two points within tolerance are always found even when they straddle a
//! cell boundary.

use crate::geometry::{CellKey, Tolerance, Vector2};
use std::collections::HashMap;

/// Approximate point index mapping cells to `(point, value)` entries
#[derive(Clone, Debug)]
pub struct SpatialIndex<T> {
    tolerance: Tolerance,
    offsets: Vec<[i64; 2]>,
    cells: HashMap<CellKey, Vec<(Vector2, T)>>,
    len: usize,
}

impl<T> SpatialIndex<T> {
    /// Create an empty index scanning the given cell offsets
    pub fn new(tolerance: Tolerance, offsets: &[[i64; 2]]) -> Self {
        Self {
            tolerance,
            offsets: offsets.to_vec(),
            cells: HashMap::new(),
            len: 0,
        }
    }

    /// Store `value` at `point` without checking for duplicates
    pub fn insert(&mut self, point: Vector2, value: T) {
        self.cells
            .entry(self.tolerance.cell_key(point))
            .or_default()
            .push((point, value));
        self.len += 1;
    }

    /// First stored entry within tolerance of `point`
    pub fn find(&self, point: Vector2) -> Option<(Vector2, &T)> {
        self.near(point).next()
    }

    /// Whether any stored point lies within tolerance of `point`
    pub fn contains(&self, point: Vector2) -> bool {
        self.find(point).is_some()
    }

    /// Every stored entry within tolerance of `point`, scanning offsets in order
    pub fn near(&self, point: Vector2) -> impl Iterator<Item = (Vector2, &T)> + '_ {
        let base = self.tolerance.cell_key(point);
        let tolerance = self.tolerance;
        self.offsets
            .iter()
            .filter_map(move |&[dx, dy]| self.cells.get(&base.offset(dx, dy)))
            .flatten()
            .filter(move |(stored, _)| tolerance.points_eq(*stored, point))
            .map(|(stored, value)| (*stored, value))
    }

    /// Number of stored entries
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Whether the index holds no entries
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Comparator used for bucketing
    pub const fn tolerance(&self) -> Tolerance {
        self.tolerance
    }
}

/// Points with near-duplicates removed, first occurrence kept, order preserved
pub fn unique_points<I>(points: I, tolerance: Tolerance, offsets: &[[i64; 2]]) -> Vec<Vector2>
where
    I: IntoIterator<Item = Vector2>,
{
    let mut index = SpatialIndex::new(tolerance, offsets);
    let mut unique = Vec::new();

    for point in points {
        if !index.contains(point) {
            index.insert(point, ());
            unique.push(point);
        }
    }

    unique
}

/// Group values by the point they sit on
///
/// Each group is keyed by a canonical representative: the first point seen
/// within tolerance. Groups come back in first-seen order, and a value is
/// recorded once per group even when it is offered several times.
pub fn group_by_point<I, T>(
    entries: I,
    tolerance: Tolerance,
    offsets: &[[i64; 2]],
) -> Vec<(Vector2, Vec<T>)>
where
    I: IntoIterator<Item = (Vector2, T)>,
    T: PartialEq,
{
    let mut index: SpatialIndex<usize> = SpatialIndex::new(tolerance, offsets);
    let mut groups: Vec<(Vector2, Vec<T>)> = Vec::new();

    for (point, value) in entries {
        let existing = index.find(point).map(|(_, &group)| group);
        match existing.and_then(|group| groups.get_mut(group)) {
            Some((_, members)) => {
                if !members.contains(&value) {
                    members.push(value);
                }
            }
            None => {
                index.insert(point, groups.len());
                groups.push((point, vec![value]));
            }
        }
    }

    groups
}
