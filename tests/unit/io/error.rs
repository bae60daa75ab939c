//! Tests for error construction, messages and sources

#[cfg(test)]
mod tests {
    use gridkit::io::error::{file_system_error, invalid_parameter};
    use gridkit::{GridError, Vector};
    use std::error::Error;
    use std::io;

    // Tests each grid error names the coordinates involved
    #[test]
    fn test_grid_error_messages() {
        let invalid = GridError::InvalidPosition {
            position: Vector::new(1, 1),
            reason: "cell is empty",
        };
        assert_eq!(
            invalid.to_string(),
            "Not a valid position (1, 1): cell is empty"
        );

        let no_path = GridError::NoPathFound {
            start: Vector::new(0, 0),
            end: Vector::new(4, 2),
        };
        assert_eq!(no_path.to_string(), "No path from (0, 0) to (4, 2)");

        let mismatch = GridError::DimensionMismatch {
            expected: Vector::new(2, 3),
            found: Vector::new(3, 2),
        };
        assert!(mismatch.to_string().contains("expected 2x3, found 3x2"));
    }

    #[test]
    fn test_jagged_rows_message() {
        let error = GridError::JaggedRows {
            row: 2,
            expected: 5,
            found: 3,
        };

        assert_eq!(
            error.to_string(),
            "Row 2 has 3 cells but the first row has 5"
        );
    }

    // Tests helper constructors fill every field
    // Verified by dropping the reason
    #[test]
    fn test_invalid_parameter_helper() {
        let error = invalid_parameter("coordinate", &"x", &"expected x,y");

        assert!(matches!(
            &error,
            GridError::InvalidParameter { parameter: "coordinate", value, reason }
                if value == "x" && reason == "expected x,y"
        ));
        assert!(error.source().is_none());
    }

    #[test]
    fn test_file_system_error_exposes_source() {
        let error = file_system_error(
            "maps/missing.txt",
            "read",
            io::Error::new(io::ErrorKind::NotFound, "gone"),
        );

        assert!(error.to_string().contains("during read on 'maps/missing.txt'"));
        assert!(error.source().is_some());
    }
}
