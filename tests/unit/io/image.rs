//! Tests for PNG rendering and export

#[cfg(test)]
mod tests {
    use gridkit::io::configuration::{CELL_PIXEL_SIZE, EMPTY_COLOR, OCCUPIED_COLOR, PATH_COLOR};
    use gridkit::io::image::{export_grid_as_png, render_grid};
    use gridkit::{Grid, Vector};
    use ndarray::array;
    use tempfile::TempDir;

    fn sample() -> Grid<u8> {
        Grid::from_array(array![[Some(1), None, Some(1)], [Some(1), Some(1), None]])
    }

    // Tests image size follows rows down and columns across
    #[test]
    fn test_render_dimensions() {
        let Ok(img) = render_grid(&sample(), &[]) else {
            unreachable!("sample grid has cells");
        };

        assert_eq!(img.width(), 3 * CELL_PIXEL_SIZE);
        assert_eq!(img.height(), 2 * CELL_PIXEL_SIZE);
    }

    // Tests cell colours for occupied, empty and highlighted cells
    // Verified by swapping the highlight check order
    #[test]
    fn test_render_cell_colours() {
        let Ok(img) = render_grid(&sample(), &[Vector::new(1, 1)]) else {
            unreachable!("sample grid has cells");
        };
        let at = |x: usize, y: usize| {
            let px = u32::try_from(y).unwrap_or(0) * CELL_PIXEL_SIZE;
            let py = u32::try_from(x).unwrap_or(0) * CELL_PIXEL_SIZE;
            img.get_pixel(px, py).0
        };

        assert_eq!(at(0, 0), OCCUPIED_COLOR);
        assert_eq!(at(0, 1), EMPTY_COLOR);
        assert_eq!(at(1, 1), PATH_COLOR);
        assert_eq!(at(1, 2), EMPTY_COLOR);
    }

    #[test]
    fn test_render_empty_grid_fails() {
        assert!(render_grid(&Grid::<u8>::new(), &[]).is_err());
    }

    #[test]
    fn test_export_creates_missing_directories() {
        let Ok(dir) = TempDir::new() else {
            return;
        };
        let output = dir.path().join("nested").join("grid.png");

        assert!(export_grid_as_png(&sample(), &[], &output).is_ok());
        assert!(output.exists());
    }

    // Tests the exported file decodes back to the rendered pixels
    #[test]
    fn test_export_round_trips_pixels() {
        let Ok(dir) = TempDir::new() else {
            return;
        };
        let output = dir.path().join("grid.png");
        let path = [Vector::new(0, 0)];

        assert!(export_grid_as_png(&sample(), &path, &output).is_ok());
        let decoded = image::open(&output).map(|img| img.to_rgba8());
        let rendered = render_grid(&sample(), &path);

        assert_eq!(decoded.ok(), rendered.ok());
    }
}
