//! Tests for the grid-bucketed point index and its helpers

#[cfg(test)]
mod tests {
    use tessella::geometry::{Tolerance, Vector2};
    use tessella::io::configuration::NEIGHBOR_OFFSETS;
    use tessella::spatial::SpatialIndex;
    use tessella::spatial::index::{group_by_point, unique_points};

    // Tests lookups find points across a cell boundary
    // Verified by scanning only the centre cell
    #[test]
    fn test_find_across_cell_boundary() {
        let tolerance = Tolerance::new(0.01);
        let mut index = SpatialIndex::new(tolerance, &NEIGHBOR_OFFSETS);
        index.insert(Vector2::new(0.0199, 0.0), 'a');

        let found = index.find(Vector2::new(0.0201, 0.0));
        assert_eq!(found.map(|(_, &value)| value), Some('a'));
        assert!(!index.contains(Vector2::new(0.05, 0.0)));
    }

    // Tests near yields every stored entry within tolerance
    // Verified by returning after the first hit
    #[test]
    fn test_near_returns_all_matches() {
        let mut index = SpatialIndex::new(Tolerance::new(0.01), &NEIGHBOR_OFFSETS);
        index.insert(Vector2::new(1.0, 1.0), 1);
        index.insert(Vector2::new(1.005, 1.0), 2);
        index.insert(Vector2::new(2.0, 1.0), 3);

        let mut values: Vec<i32> = index.near(Vector2::new(1.002, 1.0)).map(|(_, &v)| v).collect();
        values.sort_unstable();
        assert_eq!(values, vec![1, 2]);
        assert_eq!(index.len(), 3);
        assert!(!index.is_empty());
    }

    // Tests the centre-only offset set misses neighbouring cells
    // Verified by always scanning the full neighbourhood
    #[test]
    fn test_offsets_limit_the_scan() {
        let mut index = SpatialIndex::new(Tolerance::new(0.01), &[[0, 0]]);
        index.insert(Vector2::new(0.0199, 0.0), ());
        assert!(index.contains(Vector2::new(0.0199, 0.0)));
        assert!(!index.contains(Vector2::new(0.0201, 0.0)));
    }

    // Tests deduplication keeps the first occurrence in order
    // Verified by keeping the last occurrence
    #[test]
    fn test_unique_points_first_wins() {
        let points = [
            Vector2::new(0.0, 0.0),
            Vector2::new(1.0, 0.0),
            Vector2::new(0.004, 0.0),
            Vector2::new(1.0, 0.003),
            Vector2::new(2.0, 2.0),
        ];
        let unique = unique_points(points, Tolerance::new(0.01), &NEIGHBOR_OFFSETS);
        assert_eq!(unique.len(), 3);
        assert_eq!(unique[0].x, 0.0);
        assert_eq!(unique[1].x, 1.0);
        assert_eq!(unique[2].x, 2.0);
    }

    // Tests grouping records each value once per point
    // Verified by pushing duplicate members
    #[test]
    fn test_group_by_point() {
        let entries = [
            (Vector2::new(0.0, 0.0), 0),
            (Vector2::new(5.0, 0.0), 1),
            (Vector2::new(0.001, 0.0), 2),
            (Vector2::new(0.0, 0.002), 0),
        ];
        let groups = group_by_point(entries, Tolerance::new(0.01), &NEIGHBOR_OFFSETS);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].1, vec![0, 2]);
        assert_eq!(groups[1].1, vec![1]);
        assert_eq!(groups[0].0.x, 0.0);
    }
}
