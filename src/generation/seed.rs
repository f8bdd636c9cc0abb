//! Seed patch construction
//!
//! Layer 0 is the core polygon. Every later slot is glued edge-to-edge onto
//! the next free edge of the polygons placed in earlier layers. Free edges
//! are enumerated clockwise by midpoint; each empty slot skips one.

use crate::geometry::ordering::{apothem, clockwise_order};
use crate::geometry::{Polygon, Tolerance, Vector2};
use crate::io::configuration::GenerationConfig;
use crate::io::error::{Result, TilingError};
use crate::rule::{ShapeSlot, TilingRule};
use crate::spatial::{NodeSet, SpatialIndex};
use std::f64::consts::{FRAC_PI_2, PI};
use tracing::debug;

/// A free edge of a placed polygon
#[derive(Clone, Copy, Debug)]
struct FreeEdge {
    start: Vector2,
    end: Vector2,
    midpoint: Vector2,
}

impl FreeEdge {
    /// Unit normal pointing away from the owning polygon
    fn outward(&self) -> Vector2 {
        (self.end - self.start).normalize().rotate(-FRAC_PI_2)
    }
}

/// Places the seed patch of a rule
pub struct SeedBuilder<'a> {
    config: &'a GenerationConfig,
    tolerance: Tolerance,
}

impl<'a> SeedBuilder<'a> {
    /// Create a builder for the given configuration
    pub const fn new(config: &'a GenerationConfig) -> Self {
        Self {
            config,
            tolerance: config.comparator(),
        }
    }

    /// Build the seed patch
    ///
    /// # Errors
    ///
    /// Returns [`TilingError::SeedPlacement`] when a slot asks for a free
    /// edge beyond the ones available
    pub fn build(&self, rule: &TilingRule) -> Result<NodeSet> {
        let mut nodes = NodeSet::new(self.tolerance, &self.config.neighbor_offsets);
        let core = self.core(rule.core()).ok_or(TilingError::SeedPlacement {
            layer: 0,
            slot: 0,
            available: 0,
        })?;
        nodes.merge([core]);

        for (layer, slots) in rule.seed().iter().enumerate().skip(1) {
            let mut placed: Vec<Polygon> = Vec::new();
            let mut skipped = 0;

            for (slot_index, slot) in slots.iter().enumerate() {
                if slot.is_empty() {
                    skipped += 1;
                    continue;
                }

                let free = self.free_edges(nodes.as_slice(), &placed);
                let edge = free.get(skipped).ok_or(TilingError::SeedPlacement {
                    layer,
                    slot: slot_index,
                    available: free.len(),
                })?;

                if let Some(polygon) = self.attach(*slot, edge) {
                    placed.push(polygon);
                }
            }

            nodes.merge(placed);
        }

        debug!(nodes = nodes.len(), layers = rule.seed().len(), "seed placed");
        Ok(nodes)
    }

    /// Core polygon of layer 0
    ///
    /// Triangles sit right of the y axis with one edge on it. Every other
    /// shape is centred on the origin and turned by half a central angle.
    fn core(&self, slot: ShapeSlot) -> Option<Polygon> {
        let polygon = match slot {
            ShapeSlot::Star { sides, angle } => Polygon::star(
                sides,
                angle.radians(self.config.star_parameter),
                Vector2::ZERO,
                PI / f64::from(sides),
                &self.tolerance,
            ),
            ShapeSlot::Regular { sides: 3 } => Polygon::regular(
                3,
                Vector2::new(3.0f64.sqrt() / 6.0, 0.5),
                0.0,
                &self.tolerance,
            ),
            ShapeSlot::Regular { sides } => {
                Polygon::regular(sides, Vector2::ZERO, PI / f64::from(sides), &self.tolerance)
            }
            ShapeSlot::Empty => return None,
        };
        Some(polygon)
    }

    /// Free edges of the already placed polygons in clockwise midpoint order
    ///
    /// An edge is taken when any other polygon, placed or pending in the
    /// current layer, has an edge midpoint on it.
    fn free_edges(&self, nodes: &[Polygon], pending: &[Polygon]) -> Vec<FreeEdge> {
        let mut midpoints: SpatialIndex<Vector2> =
            SpatialIndex::new(self.tolerance, &self.config.neighbor_offsets);
        for node in nodes.iter().chain(pending) {
            for &midpoint in node.midpoints() {
                midpoints.insert(midpoint, node.centroid());
            }
        }

        let mut free = Vec::new();
        for node in nodes {
            for (edge, &midpoint) in node.midpoints().iter().enumerate() {
                let shared = midpoints
                    .near(midpoint)
                    .any(|(_, &owner)| !self.tolerance.points_eq(owner, node.centroid()));
                if shared {
                    continue;
                }
                if let Some((start, end)) = node.edge(edge) {
                    free.push(FreeEdge {
                        start,
                        end,
                        midpoint,
                    });
                }
            }
        }

        let order = clockwise_order(
            &free.iter().map(|edge| edge.midpoint).collect::<Vec<_>>(),
            &self.tolerance,
        );
        order
            .into_iter()
            .filter_map(|index| free.get(index).copied())
            .collect()
    }

    /// Polygon glued onto `edge`
    fn attach(&self, slot: ShapeSlot, edge: &FreeEdge) -> Option<Polygon> {
        match slot {
            ShapeSlot::Empty => None,
            ShapeSlot::Regular { sides } => {
                let normal = edge.outward();
                let centroid = edge.midpoint + normal * apothem(sides);
                let mut angle = normal.heading();
                if sides % 2 == 0 {
                    angle += PI / f64::from(sides);
                }
                Some(Polygon::regular(sides, centroid, angle, &self.tolerance))
            }
            ShapeSlot::Star { sides, angle } => {
                let sharpness = angle.radians(self.config.star_parameter);
                let side = (edge.start - edge.end).normalize().rotate(sharpness / 2.0);

                let gamma = PI * f64::from(sides - 2) / (2.0 * f64::from(sides));
                let beta = gamma - sharpness / 2.0;
                let distance = beta.cos() / gamma.cos();

                Some(Polygon::star(
                    sides,
                    sharpness,
                    edge.end + side * distance,
                    side.heading(),
                    &self.tolerance,
                ))
            }
        }
    }
}
