//! Tests for transform replay and the rotation cache

#[cfg(test)]
mod tests {
    use std::time::Duration;
    use tessella::generation::seed::SeedBuilder;
    use tessella::generation::transform::{Expansion, RotationCache, TransformEngine};
    use tessella::geometry::{Polygon, Tolerance, Vector2};
    use tessella::io::configuration::GenerationConfig;
    use tessella::io::error::TilingError;
    use tessella::rule::TilingRule;

    fn expand(rule: &str, layers: usize) -> Result<Expansion, TilingError> {
        let config = GenerationConfig::default().with_layers(layers);
        let rule = TilingRule::parse(rule, &config)?;
        let seed = SeedBuilder::new(&config).build(&rule)?;
        TransformEngine::new(&config, rule.transforms()).run(seed)
    }

    fn centroids(expansion: &Expansion) -> Vec<Vector2> {
        expansion.nodes.iter().map(Polygon::centroid).collect()
    }

    // Tests repeated lookups hit the cache
    // Verified by always recomputing
    #[test]
    fn test_rotation_cache_hits() {
        let mut cache = RotationCache::new(Tolerance::default());
        let mut calls = 0;
        let point = Vector2::new(1.0, 2.0);

        let first = cache.get_or_compute(point, 90, || {
            calls += 1;
            point.rotate(std::f64::consts::FRAC_PI_2)
        });
        let second = cache.get_or_compute(Vector2::new(1.004, 2.0), 90, || {
            calls += 1;
            Vector2::ZERO
        });

        assert_eq!(calls, 1);
        assert!(Tolerance::default().points_eq(first, second));
        assert_eq!((cache.stats.hits, cache.stats.misses), (1, 1));
    }

    // Tests the turn is part of the cache key
    // Verified by keying on the cell only
    #[test]
    fn test_rotation_cache_keys_on_turn() {
        let mut cache = RotationCache::new(Tolerance::default());
        let point = Vector2::new(1.0, 0.0);
        cache.get_or_compute(point, 90, || Vector2::new(0.0, 1.0));
        let half = cache.get_or_compute(point, 180, || Vector2::new(-1.0, 0.0));

        assert_eq!(cache.stats.misses, 2);
        assert!(Tolerance::default().points_eq(half, Vector2::new(-1.0, 0.0)));
    }

    // Tests rotation by 90° closes the square cross
    // Verified by rotating by a single step only
    #[test]
    fn test_rotate_by_angle() -> Result<(), TilingError> {
        let tolerance = Tolerance::default();
        let expansion = expand("4-4/r90", 2)?;
        let found = centroids(&expansion);
        assert_eq!(found.len(), 5);
        for wanted in [
            Vector2::new(-1.0, 0.0),
            Vector2::new(0.0, -1.0),
            Vector2::new(1.0, 0.0),
        ] {
            assert!(found.iter().any(|point| tolerance.points_eq(*point, wanted)));
        }
        assert_eq!(expansion.repetitions, 2);
        assert!(!expansion.truncated);
        Ok(())
    }

    // Tests seed rotations are served from the cache on later repetitions
    // Verified by clearing the cache every repetition
    #[test]
    fn test_repetitions_reuse_rotations() -> Result<(), TilingError> {
        let expansion = expand("4-4/r90", 3)?;
        assert_eq!(expansion.nodes.len(), 5);
        assert_eq!(expansion.cache.hits, 6);
        assert_eq!(expansion.cache.misses, 15);
        Ok(())
    }

    // Tests mirroring by angle reflects across the derived lines
    // Verified by reflecting through the origin
    #[test]
    fn test_mirror_by_angle() -> Result<(), TilingError> {
        let tolerance = Tolerance::default();
        let expansion = expand("4-4/m90", 2)?;
        let found = centroids(&expansion);
        assert_eq!(found.len(), 3);
        assert!(found
            .iter()
            .any(|point| tolerance.points_eq(*point, Vector2::new(0.0, -1.0))));
        Ok(())
    }

    // Tests the final transform of the final repetition is skipped
    // Verified by running every transform of every repetition
    #[test]
    fn test_translation_skips_last_step() -> Result<(), TilingError> {
        let tolerance = Tolerance::default();
        let expansion = expand("4/t(h1)", 3)?;
        let found = centroids(&expansion);
        assert_eq!(found.len(), 3);
        assert!(tolerance.points_eq(found[1], Vector2::new(0.0, 0.5)));
        assert!(tolerance.points_eq(found[2], Vector2::new(0.0, 1.0)));
        assert_eq!(expansion.repetitions, 3);
        Ok(())
    }

    // Tests landmark errors carry the transform position
    // Verified by dropping the transform context
    #[test]
    fn test_landmark_error_tagged() {
        match expand("4/r90/r(c9)", 3) {
            Err(TilingError::LandmarkNotFound {
                kind,
                transform_index,
                ..
            }) => {
                assert_eq!(kind, 'c');
                assert_eq!(transform_index, Some(1));
            }
            other => unreachable!("Expected LandmarkNotFound, got {other:?}"),
        }
    }

    // Tests a zero budget stops after the first repetition
    // Verified by ignoring the budget
    #[test]
    fn test_zero_budget_truncates() -> Result<(), TilingError> {
        let tolerance = Tolerance::default();
        let config = GenerationConfig::default()
            .with_layers(3)
            .with_time_budget(Duration::ZERO);
        let rule = TilingRule::parse("3/r60/r(h2)", &config)?;
        let seed = SeedBuilder::new(&config).build(&rule)?;
        let expansion = TransformEngine::new(&config, rule.transforms()).run(seed)?;

        assert!(expansion.truncated);
        assert_eq!(expansion.repetitions, 1);
        assert!(expansion.nodes.iter().all(|node| node.is_consistent(&tolerance)));
        Ok(())
    }
}
