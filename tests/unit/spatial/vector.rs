//! Tests for coordinate values, parsing and area clamping

#[cfg(test)]
mod tests {
    use gridkit::spatial::vector::ORTHOGONAL_OFFSETS;
    use gridkit::{Area, GridError, Vector};
    use std::collections::HashSet;

    // Tests that freshly built coordinates collapse to one set entry
    #[test]
    fn test_vector_value_equality_in_sets() {
        let mut set = HashSet::new();
        set.insert(Vector::new(2, 3));
        set.insert(Vector::new(2, 3));
        set.insert(Vector::from((2, 3)));

        assert_eq!(set.len(), 1);
        assert!(set.contains(&Vector::new(2, 3)));
    }

    // Tests signed offsets refuse to go below zero
    #[test]
    fn test_offset_rejects_negative_results() {
        let origin = Vector::new(0, 4);

        assert_eq!(origin.offset(0, -1), Some(Vector::new(0, 3)));
        assert_eq!(origin.offset(1, 0), Some(Vector::new(1, 4)));
        assert_eq!(origin.offset(-1, 0), None);
    }

    // Tests offsets are orthogonal unit steps with no diagonals
    #[test]
    fn test_orthogonal_offsets_are_unit_steps() {
        for (dx, dy) in ORTHOGONAL_OFFSETS {
            assert_eq!(dx.abs() + dy.abs(), 1);
        }
    }

    #[test]
    fn test_parse_and_display() {
        let parsed: Vector = " 4, 7".parse().unwrap_or_default();
        assert_eq!(parsed, Vector::new(4, 7));
        assert_eq!(parsed.to_string(), "(4, 7)");
    }

    // Tests malformed coordinates report the offending parameter
    #[test]
    fn test_parse_rejects_malformed_input() {
        for input in ["4", "a,1", "1,-2", ""] {
            let result = input.parse::<Vector>();
            assert!(
                matches!(result, Err(GridError::InvalidParameter { parameter: "coordinate", .. })),
                "expected rejection for {input:?}"
            );
        }
    }

    // Tests inclusive clamping caps the upper corner at the last cell
    #[test]
    fn test_area_clamp_caps_upper_corner() {
        let area = Area::new(Vector::new(1, 2), Vector::new(10, 3));
        let clamped = area.clamp_to(Vector::new(4, 5));

        assert_eq!(clamped, Some((1..4, 2..4)));
    }

    #[test]
    fn test_area_outside_grid_clamps_to_nothing() {
        let area = Area::new(Vector::new(6, 0), Vector::new(8, 2));

        assert_eq!(area.clamp_to(Vector::new(4, 4)), None);
        assert_eq!(
            Area::new(Vector::new(0, 0), Vector::new(1, 1)).clamp_to(Vector::new(0, 0)),
            None
        );
    }

    // Tests each axis clamps independently of the other
    #[test]
    fn test_area_axis_ranges() {
        let area = Area::new(Vector::new(1, 7), Vector::new(9, 9));

        assert_eq!(area.rows_within(4), Some(1..4));
        assert_eq!(area.columns_within(5), None);
        assert_eq!(area.rows_within(0), None);
        assert_eq!(area.clamp_to(Vector::new(4, 5)), None);
    }
}
