//! Region algebra: cropping, compositing, area-scoped mapping and mirroring
//!
//! Every operation here reads the receiver and returns a new grid.

use ndarray::{Array2, Axis, Slice};

use crate::io::error::Result;
use crate::spatial::grid::Grid;
use crate::spatial::vector::{Area, Vector};

impl<T: Clone> Grid<T> {
    /// Copy out the inclusive sub-rectangle described by `area`
    ///
    /// The lower corner is floored at the origin and the upper corner capped
    /// at the last row and column, so the result is
    /// `(max_x - min_x + 1) x (max_y - min_y + 1)`. An area starting past
    /// the last row produces an empty grid; one that overlaps some rows but
    /// no columns keeps those rows with zero columns each.
    pub fn crop(&self, area: Area) -> Self {
        let Some(rows) = area.rows_within(self.width()) else {
            return Self::new();
        };
        let cols = area.columns_within(self.height()).unwrap_or(0..0);

        Self::from_array(
            self.cells
                .slice_axis(Axis(0), Slice::from(rows))
                .slice_axis(Axis(1), Slice::from(cols))
                .to_owned(),
        )
    }

    /// Apply `callback` to the cells inside `area`, leaving the rest untouched
    ///
    /// The callback sees coordinates relative to the clamped lower corner of
    /// the area, as if it were mapping over `self.crop(area)`.
    pub fn map_area<F>(&self, area: Area, callback: F) -> Self
    where
        F: FnMut(Option<&T>, Vector) -> Option<T>,
    {
        let Some((rows, cols)) = area.clamp_to(self.dimensions()) else {
            return self.clone();
        };

        let origin = Vector::new(rows.start, cols.start);
        let patch = self.crop(area).map(callback);
        self.paste(origin, &patch)
    }

    /// Set every cell inside `area` to `value`
    pub fn fill_area(&self, area: Area, value: T) -> Self {
        self.map_area(area, |_, _| Some(value.clone()))
    }

    /// Replace every empty cell with `value`
    pub fn fill_undefined(&self, value: T) -> Self {
        self.map(|cell, _| Some(cell.map_or_else(|| value.clone(), Clone::clone)))
    }

    /// Replace every cell, empty or not, with `value`
    pub fn fill_all(&self, value: T) -> Self {
        Self::from_array(Array2::from_elem(self.cells.dim(), Some(value)))
    }

    /// Fill the empty cells of this grid from `other`, read at an offset
    ///
    /// An empty cell at `(x, y)` takes `other`'s cell at
    /// `(x + origin.x, y + origin.y)`; occupied cells are kept.
    ///
    /// # Errors
    ///
    /// Returns `GridError::OutOfBounds` if an offset lookup falls outside `other`
    pub fn overlay(&self, origin: Vector, other: &Self) -> Result<Self> {
        let mut cells = self.cells.clone();

        for ((x, y), cell) in cells.indexed_iter_mut() {
            if cell.is_some() {
                continue;
            }
            let source = Vector::new(x.saturating_add(origin.x), y.saturating_add(origin.y));
            *cell = other.get(source)?.cloned();
        }

        Ok(Self::from_array(cells))
    }

    /// Mirror along the y axis: reverse the cells within every row
    #[must_use]
    pub fn flip_x(&self) -> Self {
        let mut cells = self.cells.clone();
        cells.invert_axis(Axis(1));
        Self::from_array(cells)
    }

    /// Mirror along the x axis: reverse the order of the rows
    #[must_use]
    pub fn flip_y(&self) -> Self {
        let mut cells = self.cells.clone();
        cells.invert_axis(Axis(0));
        Self::from_array(cells)
    }

    // Writes every cell of `patch` over a copy of self starting at `origin`;
    // patch cells falling outside the receiver are dropped
    fn paste(&self, origin: Vector, patch: &Self) -> Self {
        let mut cells = self.cells.clone();

        for ((x, y), value) in patch.cells.indexed_iter() {
            let target = [origin.x + x, origin.y + y];
            if let Some(cell) = cells.get_mut(target) {
                cell.clone_from(value);
            }
        }

        Self::from_array(cells)
    }
}

impl<T> Grid<T> {
    /// Build a new grid by applying `callback` to every cell and its position
    ///
    /// Each cell is mapped independently; empty cells are passed as `None`
    /// and the callback decides what the new cell holds.
    pub fn map<U, F>(&self, mut callback: F) -> Grid<U>
    where
        F: FnMut(Option<&T>, Vector) -> Option<U>,
    {
        Grid::from_array(Array2::from_shape_fn(self.cells.dim(), |(x, y)| {
            let cell = self.cells.get([x, y]).and_then(Option::as_ref);
            callback(cell, Vector::new(x, y))
        }))
    }
}
