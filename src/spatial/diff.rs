//! Cell-wise comparison of equally sized grids

use crate::io::error::{GridError, Result};
use crate::spatial::grid::Grid;
use crate::spatial::vector::Vector;

impl<T: PartialEq> Grid<T> {
    /// Positions whose cells differ between `self` and `other`, in row-major order
    ///
    /// An empty cell differs from any occupied one.
    ///
    /// # Errors
    ///
    /// Returns `GridError::DimensionMismatch` if the grids differ in size
    pub fn difference(&self, other: &Self) -> Result<Vec<Vector>> {
        if self.dimensions() != other.dimensions() {
            return Err(GridError::DimensionMismatch {
                expected: self.dimensions(),
                found: other.dimensions(),
            });
        }

        Ok(self
            .as_array()
            .indexed_iter()
            .zip(other.as_array().iter())
            .filter(|((_, ours), theirs)| ours != theirs)
            .map(|(((x, y), _), _)| Vector::new(x, y))
            .collect())
    }
}
