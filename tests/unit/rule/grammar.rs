//! Tests for rule string parsing and validation

#[cfg(test)]
mod tests {
    use tessella::io::configuration::GenerationConfig;
    use tessella::io::error::{RuleFailure, TilingError};
    use tessella::rule::{
        Anchor, LandmarkKind, ShapeSlot, StarAngle, TilingRule, Transform, TransformKind,
    };

    fn parse(rule: &str) -> Result<TilingRule, TilingError> {
        TilingRule::parse(rule, &GenerationConfig::default())
    }

    fn failure(rule: &str) -> Option<RuleFailure> {
        match parse(rule) {
            Err(TilingError::InvalidRule { failure, .. }) => Some(failure),
            _ => None,
        }
    }

    // Tests a simple rule yields seed layers and transforms
    // Verified by dropping the second transform
    #[test]
    fn test_parse_triangular_rule() -> Result<(), TilingError> {
        let rule = parse("3/r60/r(h2)")?;
        assert_eq!(rule.seed(), &[vec![ShapeSlot::Regular { sides: 3 }]]);
        assert_eq!(
            rule.transforms(),
            &[
                Transform {
                    kind: TransformKind::Rotate,
                    anchor: Anchor::Angle(60),
                },
                Transform {
                    kind: TransformKind::Rotate,
                    anchor: Anchor::Landmark {
                        kind: LandmarkKind::Midpoint,
                        ordinal: 2,
                    },
                },
            ]
        );
        assert!(!rule.is_dual());
        Ok(())
    }

    // Tests empty slots, star slots and the dual marker
    // Verified by treating 0 as a side count
    #[test]
    fn test_parse_slots_and_dual() -> Result<(), TilingError> {
        let rule = parse("6(60)-0,3(a),4/m30/t(c1)*")?;
        assert!(rule.is_dual());
        assert_eq!(
            rule.core(),
            ShapeSlot::Star {
                sides: 6,
                angle: StarAngle::Fixed(60),
            }
        );
        assert_eq!(
            rule.seed()[1],
            vec![
                ShapeSlot::Empty,
                ShapeSlot::Star {
                    sides: 3,
                    angle: StarAngle::Adjustable,
                },
                ShapeSlot::Regular { sides: 4 },
            ]
        );
        assert_eq!(rule.side_counts(), vec![3, 4, 6]);
        Ok(())
    }

    // Tests display reproduces the rule string
    // Verified by omitting the dual marker
    #[test]
    fn test_display_round_trip() -> Result<(), TilingError> {
        for text in ["3/r60/r(h2)", "4-4-0,4/r90/m(v2)", "6(a)-3,3(40)/r60/m(c2)*"] {
            assert_eq!(parse(text)?.to_string(), text);
        }
        Ok(())
    }

    // Tests unsupported side counts are named in the error
    // Verified by allowing 7-gons
    #[test]
    fn test_unsupported_side_rejected() {
        assert_eq!(failure("7/r60"), Some(RuleFailure::UnsupportedSide(7)));
        assert_eq!(failure("4-10/r90"), Some(RuleFailure::UnsupportedSide(10)));
    }

    // Tests unsupported fixed angles are named in the error
    // Verified by allowing 72°
    #[test]
    fn test_unsupported_angle_rejected() {
        assert_eq!(failure("5/r72"), Some(RuleFailure::UnsupportedAngle(72)));
    }

    // Tests malformed tokens are rejected before any geometry
    // Verified by accepting translations without landmarks
    #[test]
    fn test_malformed_tokens() {
        for rule in [
            "",
            "/r60",
            "3,3/r60",
            "0/r60",
            "3/x60",
            "3/t60",
            "3/r(h0)",
            "3/r(q1)",
            "3/r(h2",
            "6(60/r60",
            "3/rabc",
        ] {
            assert!(
                matches!(failure(rule), Some(RuleFailure::Malformed { .. })),
                "{rule} should be malformed"
            );
        }
    }

    // Tests the star angle conversion uses the adjustable parameter
    // Verified by ignoring the parameter
    #[test]
    fn test_star_angle_radians() {
        assert!((StarAngle::Fixed(90).radians(10.0) - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
        assert!((StarAngle::Adjustable.radians(45.0) - std::f64::consts::FRAC_PI_4).abs() < 1e-12);
    }

    // Tests FromStr uses the default configuration
    // Verified by using an empty allow-list
    #[test]
    fn test_from_str() {
        let rule: Result<TilingRule, _> = "12-6,4/m30/r(c2)".parse();
        assert!(rule.is_ok());
        assert!(ShapeSlot::Empty.is_empty());
        assert_eq!(ShapeSlot::Empty.sides(), None);
    }
}
