//! PNG export of grids with optional search highlighting

use image::{ImageBuffer, Rgba, RgbaImage};
use std::path::Path;

use crate::algorithm::CoordinateSet;
use crate::io::configuration::{CELL_PIXEL_SIZE, EMPTY_COLOR, OCCUPIED_COLOR, PATH_COLOR};
use crate::io::error::{GridError, Result, file_system_error, invalid_parameter};
use crate::spatial::{Grid, Vector};

/// Render a grid to an image, one `CELL_PIXEL_SIZE` square per cell
///
/// Rows run down the image and columns across it. Empty cells are
/// transparent, occupied cells opaque, and cells in `path` highlighted.
///
/// # Errors
///
/// Returns an error if the grid has no cells or the image would exceed
/// `u32` pixel dimensions
pub fn render_grid<T>(grid: &Grid<T>, path: &[Vector]) -> Result<RgbaImage> {
    if grid.area() == 0 {
        return Err(invalid_parameter(
            "grid",
            &format!("{}x{}", grid.width(), grid.height()),
            &"cannot render a grid without cells",
        ));
    }

    let to_pixels = |cells: usize| {
        u32::try_from(cells)
            .ok()
            .and_then(|count| count.checked_mul(CELL_PIXEL_SIZE))
            .ok_or_else(|| invalid_parameter("grid", &cells, &"too large to render"))
    };
    let image_width = to_pixels(grid.height())?;
    let image_height = to_pixels(grid.width())?;

    let mut highlighted = CoordinateSet::new(grid.dimensions());
    for &position in path {
        highlighted.insert(position);
    }

    let mut img: RgbaImage = ImageBuffer::new(image_width, image_height);
    for (pixel_x, pixel_y, pixel) in img.enumerate_pixels_mut() {
        let position = Vector::new(
            (pixel_y / CELL_PIXEL_SIZE) as usize,
            (pixel_x / CELL_PIXEL_SIZE) as usize,
        );

        let color = if highlighted.contains(position) {
            PATH_COLOR
        } else if matches!(grid.get(position), Ok(Some(_))) {
            OCCUPIED_COLOR
        } else {
            EMPTY_COLOR
        };
        *pixel = Rgba(color);
    }

    Ok(img)
}

/// Export a grid as a PNG image with transparent empty cells
///
/// # Errors
///
/// Returns an error if:
/// - The grid has no cells
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_grid_as_png<T>(grid: &Grid<T>, path: &[Vector], output_path: &Path) -> Result<()> {
    let img = render_grid(grid, path)?;

    if let Some(parent) = output_path.parent() {
        std::fs::create_dir_all(parent)
            .map_err(|e| file_system_error(parent, "create directory", e))?;
    }

    img.save(output_path)
        .map_err(|e| GridError::ImageExport {
            path: output_path.into(),
            source: e,
        })?;

    Ok(())
}
