//! Tests for padding calculations and grid extension

#[cfg(test)]
mod tests {
    use gridkit::spatial::extension::{ExtensionInfo, extend_array_2d};
    use gridkit::{Grid, GridError, Vector};
    use ndarray::{Array2, array};

    // Tests growing a 2x2 grid keeps old cells and fills new ones
    #[test]
    fn test_extend_preserves_prior_contents() {
        let grid = Grid::with_dimensions(Vector::new(2, 2)).fill_all(1);
        let Ok(extended) = grid.extend(Vector::new(4, 4), 0) else {
            unreachable!("growing on both axes is valid");
        };

        assert_eq!(extended.dimensions(), Vector::new(4, 4));
        assert_eq!(extended.get(Vector::new(0, 0)).ok().flatten(), Some(&1));
        assert_eq!(extended.get(Vector::new(1, 1)).ok().flatten(), Some(&1));
        assert_eq!(extended.get(Vector::new(0, 3)).ok().flatten(), Some(&0));
        assert_eq!(extended.get(Vector::new(3, 3)).ok().flatten(), Some(&0));
    }

    // Tests extension keeps rows rectangular when only one axis grows
    #[test]
    fn test_extend_single_axis() {
        let grid = Grid::from_array(array![[Some('a'), None]]);
        let Ok(extended) = grid.extend(Vector::new(3, 2), 'z') else {
            unreachable!("growing rows only is valid");
        };

        assert_eq!(extended.to_string(), "#.\n##\n##");
        assert_eq!(extended.get(Vector::new(0, 1)).ok().flatten(), None);
    }

    #[test]
    fn test_extend_rejects_shrinking() {
        let grid = Grid::with_dimensions(Vector::new(3, 3)).fill_all(1);

        assert!(matches!(
            grid.extend(Vector::new(4, 2), 0),
            Err(GridError::InvalidDimensions { .. })
        ));
    }

    #[test]
    fn test_extension_info_to_dimensions() {
        let info = ExtensionInfo::to_dimensions(Vector::new(2, 3), Vector::new(5, 3));

        assert_eq!(
            info.ok(),
            Some(ExtensionInfo {
                extra_rows: 3,
                extra_columns: 0,
            })
        );
    }

    // Tests an unchanged size is recognised and copies the array as is
    #[test]
    fn test_extend_array_without_padding_is_copy() {
        let array: Array2<u8> = Array2::from_elem((2, 2), 4);
        let info = ExtensionInfo::to_dimensions(Vector::new(2, 2), Vector::new(2, 2));

        assert_eq!(info.as_ref().map(ExtensionInfo::needs_extension).ok(), Some(false));
        assert_eq!(extend_array_2d(&array, &ExtensionInfo::default(), 0), array);
    }

    // Tests appended cells take the padding value at unchanged indices
    #[test]
    fn test_extend_array_appends_after_existing_cells() {
        let array = array![[1, 2], [3, 4]];
        let info = ExtensionInfo {
            extra_rows: 1,
            extra_columns: 1,
        };

        assert_eq!(
            extend_array_2d(&array, &info, 0),
            array![[1, 2, 0], [3, 4, 0], [0, 0, 0]]
        );
    }

    // Tests an empty grid grows into a fully filled one
    #[test]
    fn test_extend_empty_grid() {
        let Ok(extended) = Grid::<char>::new().extend(Vector::new(2, 3), 'o') else {
            unreachable!("growing from 0x0 is valid");
        };

        assert_eq!(extended.to_string(), "###\n###");
    }
}
