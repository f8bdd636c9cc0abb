//! Tests for polygon construction, placement and ring consistency

#[cfg(test)]
mod tests {
    use std::f64::consts::{FRAC_PI_4, PI};
    use tessella::geometry::{Polygon, Shape, Tolerance, Vector2};

    // Tests regular polygons have unit edges around their centroid
    // Verified by using the apothem as radius
    #[test]
    fn test_regular_polygon_unit_edges() {
        let tolerance = Tolerance::default();
        for sides in [3, 4, 6, 8, 12] {
            let polygon = Polygon::regular(sides, Vector2::new(2.0, -1.0), 0.3, &tolerance);
            assert_eq!(polygon.vertices().len(), sides as usize);
            for index in 0..sides as usize {
                let (a, b) = polygon.edge(index).unwrap_or_default();
                assert!((a.distance(b) - 1.0).abs() < 1e-9, "{sides}-gon edge {index}");
            }
            assert!(polygon.is_consistent(&tolerance));
        }
    }

    // Tests midpoints sit between consecutive vertices
    // Verified by offsetting the midpoint index
    #[test]
    fn test_midpoints_follow_vertices() {
        let tolerance = Tolerance::default();
        let square = Polygon::regular(4, Vector2::ZERO, FRAC_PI_4, &tolerance);
        let midpoint = square.midpoints()[0];
        let (a, b) = square.edge(0).unwrap_or_default();
        assert!(tolerance.points_eq(midpoint, Vector2::midpoint(a, b)));
        assert!((midpoint.magnitude() - 0.5).abs() < 1e-9);
    }

    // Tests placement rebuilds rings at the new position
    // Verified by copying the old rings
    #[test]
    fn test_placed_moves_rings() {
        let tolerance = Tolerance::default();
        let hexagon = Polygon::regular(6, Vector2::ZERO, 0.0, &tolerance);
        let moved = hexagon.placed(Vector2::new(5.0, 0.0), PI / 6.0, &tolerance);

        assert!(tolerance.points_eq(moved.centroid(), Vector2::new(5.0, 0.0)));
        assert!((moved.angle() - PI / 6.0).abs() < 1e-12);
        assert!(moved.is_consistent(&tolerance));
        for vertex in moved.vertices() {
            assert!((vertex.distance(moved.centroid()) - 1.0).abs() < 1e-9);
        }
    }

    // Tests dual nodes are moved rigidly with their explicit ring
    // Verified by rebuilding the dual ring from scratch
    #[test]
    fn test_placed_dual_is_rigid() {
        let tolerance = Tolerance::default();
        let ring = vec![
            Vector2::new(1.0, 0.0),
            Vector2::new(0.0, 1.0),
            Vector2::new(-1.0, 0.0),
            Vector2::new(0.0, -1.0),
        ];
        let dual = Polygon::dual(Vector2::ZERO, ring);
        assert_eq!(dual.shape(), Shape::Dual { degree: 4 });

        let moved = dual.placed(Vector2::new(0.0, 3.0), PI / 2.0, &tolerance);
        assert_eq!(moved.sides(), 4);
        assert!(tolerance.points_eq(moved.vertices()[0], Vector2::new(0.0, 4.0)));
        assert!(moved.is_consistent(&tolerance));
    }

    // Tests star polygons carry twice as many vertices as points
    // Verified by emitting only outer vertices
    #[test]
    fn test_star_ring_size() {
        let tolerance = Tolerance::default();
        let star = Polygon::star(6, PI / 6.0, Vector2::ZERO, 0.0, &tolerance);
        assert_eq!(star.sides(), 6);
        assert_eq!(star.vertices().len(), 12);
        assert!(star.is_consistent(&tolerance));
    }

    // Tests ray casting containment
    // Verified by flipping the crossing test
    #[test]
    fn test_contains_point() {
        let tolerance = Tolerance::default();
        let square = Polygon::regular(4, Vector2::ZERO, FRAC_PI_4, &tolerance);
        assert!(square.contains_point(Vector2::new(0.1, 0.2)));
        assert!(!square.contains_point(Vector2::new(0.6, 0.0)));
    }

    // Tests hues order regular shapes by side count
    // Verified by reversing the hue range
    #[test]
    fn test_classify_regular_hues() {
        let tolerance = Tolerance::default();
        let triangle = Polygon::regular(3, Vector2::ZERO, 0.0, &tolerance);
        let dodecagon = Polygon::regular(12, Vector2::ZERO, 0.0, &tolerance);
        assert!(triangle.classify().abs() < 1e-9);
        assert!((dodecagon.classify() - 300.0).abs() < 1e-9);
    }

    // Tests a truncated ring is reported as inconsistent
    // Verified by skipping the length check
    #[test]
    fn test_inconsistent_dual_ring() {
        let tolerance = Tolerance::default();
        let degenerate = Polygon::dual(Vector2::ZERO, vec![Vector2::new(1.0, 0.0)]);
        assert!(degenerate.midpoints().is_empty());
        assert!(!degenerate.is_consistent(&tolerance));
        assert!(Polygon::dual(Vector2::ZERO, Vec::new()).edge(0).is_none());
    }

    // Tests the dual degree is the size of its vertex ring
    // Verified by narrowing the ring length through a lossy cast
    #[test]
    fn test_dual_degree_counts_ring() {
        for size in [0_u32, 3, 7, 12] {
            let ring: Vec<Vector2> = (0..size)
                .map(|step| Vector2::new(f64::from(step).cos(), f64::from(step).sin()))
                .collect();
            let dual = Polygon::dual(Vector2::ZERO, ring);
            assert_eq!(dual.shape(), Shape::Dual { degree: size });
            assert_eq!(dual.sides(), size);
        }
    }
}
