//! Tests for dual tiling construction

#[cfg(test)]
mod tests {
    use std::f64::consts::FRAC_PI_4;
    use tessella::generation::dual::{MIN_DUAL_DEGREE, compute_dual};
    use tessella::geometry::{Polygon, Shape, Tolerance, Vector2};
    use tessella::io::configuration::NEIGHBOR_OFFSETS;

    fn squares(centres: &[(f64, f64)]) -> Vec<Polygon> {
        centres
            .iter()
            .map(|&(x, y)| Polygon::regular(4, Vector2::new(x, y), FRAC_PI_4, &Tolerance::default()))
            .collect()
    }

    fn grid(size: i32) -> Vec<Polygon> {
        let centres: Vec<(f64, f64)> = (0..size)
            .flat_map(|x| (0..size).map(move |y| (f64::from(x), f64::from(y))))
            .collect();
        squares(&centres)
    }

    // Tests only interior vertices of a square grid become dual nodes
    // Verified by keeping boundary vertices
    #[test]
    fn test_square_grid_dual() {
        let tolerance = Tolerance::default();
        let dual = compute_dual(&grid(3), tolerance, &NEIGHBOR_OFFSETS);
        assert_eq!(dual.len(), 4);
        for node in &dual {
            assert_eq!(node.shape(), Shape::Dual { degree: 4 });
            assert!(node.is_consistent(&tolerance));
            for vertex in node.vertices() {
                assert!((vertex.distance(node.centroid()) - 2.0f64.sqrt() / 2.0).abs() < 1e-9);
            }
        }
    }

    // Tests dual rings run counter-clockwise around the vertex
    // Verified by sorting by distance
    #[test]
    fn test_dual_ring_order() {
        let dual = compute_dual(&grid(2), Tolerance::default(), &NEIGHBOR_OFFSETS);
        assert_eq!(dual.len(), 1);
        let centre = dual[0].centroid();
        let bearings: Vec<f64> = dual[0]
            .vertices()
            .iter()
            .map(|vertex| (*vertex - centre).heading().rem_euclid(std::f64::consts::TAU))
            .collect();
        assert!(bearings.windows(2).all(|pair| pair[0] < pair[1]));
    }

    // Tests a vertex with an open gap is skipped
    // Verified by only checking the incident count
    #[test]
    fn test_open_vertex_skipped() {
        let nodes = squares(&[(0.0, 0.0), (1.0, 0.0), (0.0, 1.0)]);
        assert_eq!(MIN_DUAL_DEGREE, 3);
        assert!(compute_dual(&nodes, Tolerance::default(), &NEIGHBOR_OFFSETS).is_empty());
    }

    // Tests an empty tiling has an empty dual
    // Verified by seeding a default node
    #[test]
    fn test_empty_dual() {
        assert!(compute_dual(&[], Tolerance::default(), &NEIGHBOR_OFFSETS).is_empty());
    }
}
