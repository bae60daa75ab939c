//! Growing grids past their last row and column
//!
//! Extension works out how many rows and columns to append, then copies the
//! existing cells into a freshly allocated array at unchanged indices.

use ndarray::Array2;

use crate::io::error::{GridError, Result};
use crate::spatial::grid::Grid;
use crate::spatial::vector::Vector;

/// Cells to append to a grid on each axis
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExtensionInfo {
    /// Rows appended after the last row
    pub extra_rows: usize,
    /// Columns appended after the last column
    pub extra_columns: usize,
}

impl ExtensionInfo {
    /// Growth that takes `current` to `target`
    ///
    /// # Errors
    ///
    /// Returns `GridError::InvalidDimensions` if `target` is smaller than
    /// `current` on either axis
    pub fn to_dimensions(current: Vector, target: Vector) -> Result<Self> {
        match (
            target.x.checked_sub(current.x),
            target.y.checked_sub(current.y),
        ) {
            (Some(extra_rows), Some(extra_columns)) => Ok(Self {
                extra_rows,
                extra_columns,
            }),
            _ => Err(GridError::InvalidDimensions {
                current,
                requested: target,
            }),
        }
    }

    /// Whether either axis grows
    pub const fn needs_extension(&self) -> bool {
        self.extra_rows > 0 || self.extra_columns > 0
    }
}

/// Extend a 2D array past its last row and column
///
/// Existing cells keep their indices and new cells hold `padding_value`.
/// Returns a copy of the array when no extension is needed.
pub fn extend_array_2d<T: Clone>(
    array: &Array2<T>,
    info: &ExtensionInfo,
    padding_value: T,
) -> Array2<T> {
    if !info.needs_extension() {
        return array.clone();
    }

    let (old_rows, old_cols) = array.dim();
    let new_shape = [old_rows + info.extra_rows, old_cols + info.extra_columns];

    let mut new_array = Array2::from_elem(new_shape, padding_value);

    for ((i, j), src) in array.indexed_iter() {
        if let Some(dst) = new_array.get_mut([i, j]) {
            dst.clone_from(src);
        }
    }

    new_array
}

impl<T: Clone> Grid<T> {
    /// Grow the grid to `new_dimensions`, filling new cells with `value`
    ///
    /// Existing cells keep their coordinates; new rows and columns are
    /// appended after the current ones.
    ///
    /// # Errors
    ///
    /// Returns `GridError::InvalidDimensions` if `new_dimensions` is smaller
    /// than the current dimensions on either axis
    pub fn extend(&self, new_dimensions: Vector, value: T) -> Result<Self> {
        let info = ExtensionInfo::to_dimensions(self.dimensions(), new_dimensions)?;
        Ok(Self::from_array(extend_array_2d(
            self.as_array(),
            &info,
            Some(value),
        )))
    }
}
