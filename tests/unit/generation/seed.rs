//! Tests for seed patch placement

#[cfg(test)]
mod tests {
    use tessella::generation::seed::SeedBuilder;
    use tessella::geometry::{Polygon, Vector2};
    use tessella::io::configuration::GenerationConfig;
    use tessella::io::error::TilingError;
    use tessella::rule::TilingRule;

    fn seed(rule: &str) -> Result<Vec<Polygon>, TilingError> {
        let config = GenerationConfig::default();
        let rule = TilingRule::parse(rule, &config)?;
        Ok(SeedBuilder::new(&config).build(&rule)?.into_vec())
    }

    // Tests the core triangle sits right of the y axis
    // Verified by centring the triangle on the origin
    #[test]
    fn test_core_triangle_placement() -> Result<(), TilingError> {
        let nodes = seed("3")?;
        assert_eq!(nodes.len(), 1);
        let tolerance = GenerationConfig::default().comparator();
        assert!(tolerance.points_eq(nodes[0].centroid(), Vector2::new(3.0f64.sqrt() / 6.0, 0.5)));
        assert!(nodes[0].vertices().iter().any(|vertex| tolerance.is_origin(*vertex)));
        Ok(())
    }

    // Tests slots attach to free edges in clockwise order
    // Verified by attaching to the last free edge
    #[test]
    fn test_square_seed_order() -> Result<(), TilingError> {
        let tolerance = GenerationConfig::default().comparator();
        let nodes = seed("4-4-0,4")?;
        let centroids: Vec<Vector2> = nodes.iter().map(Polygon::centroid).collect();
        let expected = [
            Vector2::ZERO,
            Vector2::new(0.0, 1.0),
            Vector2::new(1.0, 1.0),
        ];
        assert_eq!(centroids.len(), expected.len());
        for (found, wanted) in centroids.iter().zip(expected) {
            assert!(tolerance.points_eq(*found, wanted), "{found} != {wanted}");
        }
        Ok(())
    }

    // Tests attached polygons share a full edge with their parent
    // Verified by placing at the circumradius
    #[test]
    fn test_attached_polygons_share_edges() -> Result<(), TilingError> {
        let tolerance = GenerationConfig::default().comparator();
        let nodes = seed("6-3-3")?;
        assert_eq!(nodes.len(), 3);
        for (index, node) in nodes.iter().enumerate().skip(1) {
            let shared = node.midpoints().iter().any(|midpoint| {
                nodes[..index]
                    .iter()
                    .flat_map(Polygon::midpoints)
                    .any(|other| tolerance.points_eq(*other, *midpoint))
            });
            assert!(shared, "node {index} is not glued to an earlier node");
            assert!(node.is_consistent(&tolerance));
        }
        Ok(())
    }

    // Tests asking for a free edge that does not exist
    // Verified by wrapping the skip count
    #[test]
    fn test_seed_placement_error() {
        match seed("4-0,0,0,0,4") {
            Err(TilingError::SeedPlacement {
                layer,
                slot,
                available,
            }) => assert_eq!((layer, slot, available), (1, 4, 4)),
            other => unreachable!("Expected SeedPlacement, got {other:?}"),
        }
    }

    // Tests star slots place twice as many vertices
    // Verified by building a regular polygon for stars
    #[test]
    fn test_star_seed() -> Result<(), TilingError> {
        let nodes = seed("6(60)-3")?;
        assert_eq!(nodes[0].vertices().len(), 12);
        assert_eq!(nodes.len(), 2);
        Ok(())
    }
}
