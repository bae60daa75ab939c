//! Rectangular grid storage with bounds-checked access
//!
//! Cells are stored as `Option<T>` in a two-dimensional array of shape
//! `(width, height)`: `None` marks an empty cell, so no legitimate value of
//! `T` is ever mistaken for emptiness. Rectangularity is a property of the
//! storage itself; every transformation builds a fresh array.

use ndarray::Array2;
use std::fmt;

use crate::io::configuration::{EMPTY_GLYPH, OCCUPIED_GLYPH};
use crate::io::error::{GridError, Result, invalid_parameter};
use crate::spatial::vector::Vector;

/// Owned rectangular table of optional cell values
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid<T> {
    pub(crate) cells: Array2<Option<T>>,
}

impl<T> Default for Grid<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Grid<T> {
    /// Create a zero-by-zero grid
    pub fn new() -> Self {
        Self::with_dimensions(Vector::default())
    }

    /// Create a grid of the given size with every cell empty
    pub fn with_dimensions(dimensions: Vector) -> Self {
        Self::from_array(Array2::from_shape_simple_fn(
            (dimensions.x, dimensions.y),
            || None,
        ))
    }

    /// Wrap an existing array of cells, indexed `[x, y]`
    ///
    /// An array without rows is normalised to `0 x 0`.
    pub fn from_array(cells: Array2<Option<T>>) -> Self {
        if cells.nrows() == 0 && cells.ncols() > 0 {
            return Self {
                cells: Array2::from_shape_simple_fn((0, 0), || None),
            };
        }
        Self { cells }
    }

    /// Build a grid from a table of rows
    ///
    /// Row `i` becomes the cells with `x == i`.
    ///
    /// # Errors
    ///
    /// Returns `GridError::JaggedRows` if any row differs in length from the first
    pub fn from_rows(rows: Vec<Vec<Option<T>>>) -> Result<Self> {
        let width = rows.len();
        let height = rows.first().map_or(0, Vec::len);

        if let Some((row, found)) = rows
            .iter()
            .map(Vec::len)
            .enumerate()
            .find(|&(_, len)| len != height)
        {
            return Err(GridError::JaggedRows {
                row,
                expected: height,
                found,
            });
        }

        let flat: Vec<Option<T>> = rows.into_iter().flatten().collect();
        let cells = Array2::from_shape_vec((width, height), flat).map_err(|error| {
            invalid_parameter("rows", &format!("{width}x{height}"), &error)
        })?;

        Ok(Self::from_array(cells))
    }

    /// Borrow the underlying cell array
    pub const fn as_array(&self) -> &Array2<Option<T>> {
        &self.cells
    }

    /// Number of rows (extent along `x`)
    pub fn width(&self) -> usize {
        self.cells.nrows()
    }

    /// Number of cells per row (extent along `y`)
    pub fn height(&self) -> usize {
        self.cells.ncols()
    }

    /// Width and height as a vector
    pub fn dimensions(&self) -> Vector {
        Vector::new(self.width(), self.height())
    }

    /// Total number of cells
    pub fn area(&self) -> usize {
        self.dimensions().product()
    }

    /// Check if a position lies within `[0, width) x [0, height)`
    pub fn contains_position(&self, position: Vector) -> bool {
        position.x < self.width() && position.y < self.height()
    }

    /// Read the cell at `position`
    ///
    /// # Errors
    ///
    /// Returns `GridError::OutOfBounds` if `position` is outside the grid
    pub fn get(&self, position: Vector) -> Result<Option<&T>> {
        self.cells
            .get([position.x, position.y])
            .map(Option::as_ref)
            .ok_or_else(|| self.out_of_bounds(position))
    }

    /// Overwrite the cell at `position` in place
    ///
    /// # Errors
    ///
    /// Returns `GridError::OutOfBounds` if `position` is outside the grid;
    /// the grid is left untouched in that case
    pub fn set(&mut self, position: Vector, value: Option<T>) -> Result<()> {
        let error = self.out_of_bounds(position);
        let cell = self
            .cells
            .get_mut([position.x, position.y])
            .ok_or(error)?;
        *cell = value;
        Ok(())
    }

    /// Iterate over every cell in row-major order
    pub fn iter(&self) -> impl Iterator<Item = (Vector, Option<&T>)> {
        self.cells
            .indexed_iter()
            .map(|((x, y), cell)| (Vector::new(x, y), cell.as_ref()))
    }

    pub(crate) fn out_of_bounds(&self, position: Vector) -> GridError {
        GridError::OutOfBounds {
            position,
            dimensions: self.dimensions(),
        }
    }
}

impl<T: PartialEq> Grid<T> {
    /// Check if any cell holds `value`
    pub fn contains(&self, value: &T) -> bool {
        self.cells.iter().any(|cell| cell.as_ref() == Some(value))
    }

    /// Position of the first cell holding `value`, scanning rows then columns
    pub fn find(&self, value: &T) -> Option<Vector> {
        self.iter()
            .find(|(_, cell)| *cell == Some(value))
            .map(|(position, _)| position)
    }
}

impl<T> From<Array2<Option<T>>> for Grid<T> {
    fn from(cells: Array2<Option<T>>) -> Self {
        Self::from_array(cells)
    }
}

/// Two-glyph rendering: one line per row, no trailing newline
impl<T> fmt::Display for Grid<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (x, row) in self.cells.rows().into_iter().enumerate() {
            if x > 0 {
                writeln!(f)?;
            }
            for cell in row {
                let glyph = if cell.is_some() {
                    OCCUPIED_GLYPH
                } else {
                    EMPTY_GLYPH
                };
                write!(f, "{glyph}")?;
            }
        }
        Ok(())
    }
}
