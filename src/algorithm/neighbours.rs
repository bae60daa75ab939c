//! Orthogonal adjacency discovery driven by a caller-supplied predicate

use indexmap::IndexSet;

use crate::io::error::{GridError, Result};
use crate::spatial::vector::ORTHOGONAL_OFFSETS;
use crate::spatial::{Grid, Vector};

impl<T> Grid<T> {
    /// Adjacent occupied cells accepted by `filter`
    ///
    /// Examines the four axis-aligned neighbours of `position` in a fixed
    /// order, skipping those outside the grid or empty. Diagonals are never
    /// considered. The result has set semantics over coordinate values.
    ///
    /// # Errors
    ///
    /// Returns `GridError::InvalidPosition` if `position` is outside the grid
    /// or refers to an empty cell
    pub fn neighbours<F>(&self, position: Vector, mut filter: F) -> Result<IndexSet<Vector>>
    where
        F: FnMut(&T, Vector) -> bool,
    {
        match self.as_array().get([position.x, position.y]) {
            None => {
                return Err(GridError::InvalidPosition {
                    position,
                    reason: "outside the grid",
                });
            }
            Some(None) => {
                return Err(GridError::InvalidPosition {
                    position,
                    reason: "cell is empty",
                });
            }
            Some(Some(_)) => {}
        }

        Ok(ORTHOGONAL_OFFSETS
            .iter()
            .filter_map(|&(dx, dy)| position.offset(dx, dy))
            .filter(|&adjacent| {
                self.as_array()
                    .get([adjacent.x, adjacent.y])
                    .and_then(Option::as_ref)
                    .is_some_and(|value| filter(value, adjacent))
            })
            .collect())
    }
}
