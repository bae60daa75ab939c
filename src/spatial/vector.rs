//! Coordinate and rectangular area value types
//!
//! Coordinates are plain values: two vectors with equal components are the
//! same cell for every lookup, set membership and equality check.

use crate::io::error::{GridError, invalid_parameter};
use std::fmt;
use std::ops::Range;
use std::str::FromStr;

/// Axis-aligned offsets in the order adjacent cells are examined
pub const ORTHOGONAL_OFFSETS: [(isize, isize); 4] = [(0, 1), (1, 0), (0, -1), (-1, 0)];

/// Cell coordinate within a grid
///
/// `x` selects the row (outer dimension) and `y` the cell within that row.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Vector {
    /// Row index
    pub x: usize,
    /// Column index within the row
    pub y: usize,
}

impl Vector {
    /// Create a coordinate from its components
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Shift by a signed offset, returning `None` when either axis would go negative
    pub const fn offset(self, dx: isize, dy: isize) -> Option<Self> {
        match (self.x.checked_add_signed(dx), self.y.checked_add_signed(dy)) {
            (Some(x), Some(y)) => Some(Self { x, y }),
            _ => None,
        }
    }

    /// Product of both components
    pub const fn product(self) -> usize {
        self.x * self.y
    }
}

impl From<(usize, usize)> for Vector {
    fn from((x, y): (usize, usize)) -> Self {
        Self { x, y }
    }
}

impl From<Vector> for [usize; 2] {
    fn from(vector: Vector) -> Self {
        [vector.x, vector.y]
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl FromStr for Vector {
    type Err = GridError;

    /// Parse `"x,y"`, tolerating whitespace around either component
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (x, y) = s
            .split_once(',')
            .ok_or_else(|| invalid_parameter("coordinate", &s, &"expected the form x,y"))?;

        let parse = |component: &str| {
            component.trim().parse::<usize>().map_err(|error| {
                invalid_parameter("coordinate", &s, &format!("'{}': {error}", component.trim()))
            })
        };

        Ok(Self {
            x: parse(x)?,
            y: parse(y)?,
        })
    }
}

/// Inclusive rectangular region spanned by two corners
///
/// Rows run from `p1.x` to `p2.x` and columns from `p1.y` to `p2.y`,
/// both ends included.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Area {
    /// Lower corner
    pub p1: Vector,
    /// Upper corner
    pub p2: Vector,
}

impl Area {
    /// Create an area from its two corners
    pub const fn new(p1: Vector, p2: Vector) -> Self {
        Self { p1, p2 }
    }

    /// Row indices of a grid `width` rows tall covered by the area
    ///
    /// The upper corner is capped at the last row. `None` when the area
    /// starts past the last row.
    pub fn rows_within(&self, width: usize) -> Option<Range<usize>> {
        clamp_axis(self.p1.x, self.p2.x, width)
    }

    /// Column indices of a grid `height` columns wide covered by the area
    pub fn columns_within(&self, height: usize) -> Option<Range<usize>> {
        clamp_axis(self.p1.y, self.p2.y, height)
    }

    /// Clamp the area to a grid of the given dimensions
    ///
    /// Returns the half-open row and column index ranges that survive
    /// clamping, or `None` when nothing of the area lies inside the grid.
    pub fn clamp_to(&self, dimensions: Vector) -> Option<(Range<usize>, Range<usize>)> {
        Some((
            self.rows_within(dimensions.x)?,
            self.columns_within(dimensions.y)?,
        ))
    }
}

fn clamp_axis(low: usize, high: usize, len: usize) -> Option<Range<usize>> {
    let high = high.min(len.checked_sub(1)?);
    (low <= high).then(|| low..high + 1)
}

impl fmt::Display for Area {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..={}", self.p1, self.p2)
    }
}
