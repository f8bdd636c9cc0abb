//! Tests for 2D vector arithmetic and reflections

#[cfg(test)]
mod tests {
    use std::f64::consts::{FRAC_PI_2, PI};
    use tessella::geometry::{Tolerance, Vector2};

    fn close(a: Vector2, b: Vector2) -> bool {
        Tolerance::new(1e-9).points_eq(a, b)
    }

    // Tests rotation by a quarter turn maps x onto y
    // Verified by rotating clockwise instead
    #[test]
    fn test_rotate_quarter_turn() {
        let rotated = Vector2::new(1.0, 0.0).rotate(FRAC_PI_2);
        assert!(close(rotated, Vector2::new(0.0, 1.0)), "got {rotated}");
    }

    // Tests mirroring across the x axis negates y
    // Verified by mirroring across the y axis
    #[test]
    fn test_mirror_across_axis() {
        let mirrored = Vector2::new(2.0, 3.0).mirror(0.0);
        assert!(close(mirrored, Vector2::new(2.0, -3.0)), "got {mirrored}");

        let vertical = Vector2::new(2.0, 3.0).mirror(FRAC_PI_2);
        assert!(close(vertical, Vector2::new(-2.0, 3.0)), "got {vertical}");
    }

    // Tests point reflection is a half turn about the centre
    // Verified by reflecting through the origin
    #[test]
    fn test_reflect_through_point() {
        let point = Vector2::new(3.0, 1.0);
        let center = Vector2::new(1.0, 1.0);
        let reflected = point.reflect_through(center);
        assert!(close(reflected, Vector2::new(-1.0, 1.0)));

        let rotated = (point - center).rotate(PI) + center;
        assert!(close(reflected, rotated));
    }

    // Tests reflection across an offset line
    // Verified by ignoring the line origin
    #[test]
    fn test_reflect_across_offset_line() {
        let origin = Vector2::new(0.0, 1.0);
        let direction = Vector2::new(1.0, 0.0);
        let reflected = Vector2::new(5.0, 3.0).reflect_across(origin, direction);
        assert!(close(reflected, Vector2::new(5.0, -1.0)), "got {reflected}");
    }

    // Tests dot, cross and magnitude
    // Verified by swapping cross operands
    #[test]
    fn test_products_and_length() {
        let a = Vector2::new(3.0, 4.0);
        let b = Vector2::new(-4.0, 3.0);
        assert!(a.dot(b).abs() < 1e-12);
        assert!((a.cross(b) - 25.0).abs() < 1e-12);
        assert!((a.magnitude() - 5.0).abs() < 1e-12);
        assert!((a.distance(Vector2::ZERO) - 5.0).abs() < 1e-12);
    }

    // Tests normalizing the zero vector leaves it unchanged
    // Verified by dividing by zero magnitude
    #[test]
    fn test_normalize_zero_vector() {
        let zero = Vector2::ZERO.normalize();
        assert!(zero.is_finite());
        assert!(close(zero, Vector2::ZERO));

        let unit = Vector2::new(0.0, -7.0).normalize();
        assert!(close(unit, Vector2::new(0.0, -1.0)));
    }

    // Tests polar construction and midpoint
    // Verified by swapping sine and cosine
    #[test]
    fn test_polar_and_midpoint() {
        let polar = Vector2::from_polar(2.0, FRAC_PI_2);
        assert!(close(polar, Vector2::new(0.0, 2.0)));

        let mid = Vector2::midpoint(Vector2::new(-1.0, 2.0), Vector2::new(3.0, 4.0));
        assert!(close(mid, Vector2::new(1.0, 3.0)));
    }

    // Tests display rounds to three decimals
    // Verified by changing the precision
    #[test]
    fn test_display_format() {
        assert_eq!(Vector2::new(0.5, -1.0).to_string(), "(0.500, -1.000)");
    }
}
