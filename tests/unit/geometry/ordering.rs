//! Tests for clockwise ordering and regular-polygon measurements

#[cfg(test)]
mod tests {
    use std::f64::consts::{FRAC_PI_2, FRAC_PI_3, PI};
    use tessella::geometry::ordering::{
        angle_between, apothem, bearing_around, circumradius, clockwise_angle, clockwise_order,
        interior_angle, wrap_angle,
    };
    use tessella::geometry::{Tolerance, Vector2};

    // Tests bearings are measured clockwise from the positive y axis
    // Verified by measuring counter-clockwise from x
    #[test]
    fn test_clockwise_angle_quadrants() {
        let tolerance = Tolerance::default();
        assert_eq!(clockwise_angle(Vector2::new(0.0, 1.0), &tolerance), 0.0);
        assert!((clockwise_angle(Vector2::new(1.0, 0.0), &tolerance) - FRAC_PI_2).abs() < 1e-12);
        assert_eq!(clockwise_angle(Vector2::new(0.0, -1.0), &tolerance), PI);
        assert!(
            (clockwise_angle(Vector2::new(-1.0, 0.0), &tolerance) - 3.0 * FRAC_PI_2).abs() < 1e-12
        );
    }

    // Tests near-axis points snap to the axis bearing
    // Verified by removing the axis special case
    #[test]
    fn test_clockwise_angle_snaps_axis() {
        let tolerance = Tolerance::new(0.01);
        assert_eq!(clockwise_angle(Vector2::new(-0.001, 2.0), &tolerance), 0.0);
    }

    // Tests equal bearings are ordered nearest first
    // Verified by sorting by bearing only
    #[test]
    fn test_clockwise_order_nearest_first() {
        let tolerance = Tolerance::default();
        let points = [
            Vector2::new(2.0, 0.0),
            Vector2::new(0.0, 3.0),
            Vector2::new(1.0, 0.0),
            Vector2::new(0.0, 1.0),
            Vector2::new(0.0, -1.0),
        ];
        assert_eq!(clockwise_order(&points, &tolerance), vec![3, 1, 2, 0, 4]);
    }

    // Tests bearing around a centre and signed angles
    // Verified by swapping the operands of atan2
    #[test]
    fn test_bearing_and_angle_between() {
        let center = Vector2::new(1.0, 1.0);
        assert!((bearing_around(center, Vector2::new(1.0, 0.0)) - 3.0 * FRAC_PI_2).abs() < 1e-12);

        let angle = angle_between(Vector2::new(1.0, 0.0), Vector2::ZERO, Vector2::new(0.0, 1.0));
        assert!((angle - FRAC_PI_2).abs() < 1e-12);
        let reverse = angle_between(Vector2::new(0.0, 1.0), Vector2::ZERO, Vector2::new(1.0, 0.0));
        assert!((reverse + FRAC_PI_2).abs() < 1e-12);
    }

    // Tests unit-edge measurements of the square and hexagon
    // Verified by using the circumradius as apothem
    #[test]
    fn test_regular_polygon_measurements() {
        assert!((apothem(4) - 0.5).abs() < 1e-12);
        assert!((circumradius(6) - 1.0).abs() < 1e-12);
        assert!((interior_angle(3) - FRAC_PI_3).abs() < 1e-12);
        assert!((interior_angle(6) - 2.0 * FRAC_PI_3).abs() < 1e-12);
    }

    // Tests wrapping into a single turn
    // Verified by using the remainder operator
    #[test]
    fn test_wrap_angle_negative() {
        assert!((wrap_angle(-FRAC_PI_2) - 3.0 * FRAC_PI_2).abs() < 1e-12);
        assert!((wrap_angle(5.0 * PI) - PI).abs() < 1e-12);
    }
}
