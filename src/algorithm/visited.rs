//! Coordinate membership for breadth-first bookkeeping

use bitvec::prelude::*;

use crate::spatial::Vector;

/// Fixed-size set of grid coordinates
///
/// Membership is keyed by the packed index `x * height + y`, so two equal
/// coordinates always hit the same bit. Coordinates outside the grid the
/// set was sized for are never members.
#[derive(Clone, Debug)]
pub struct CoordinateSet {
    bits: BitVec,
    dimensions: Vector,
}

impl CoordinateSet {
    /// Create an empty set for a grid of the given dimensions
    pub fn new(dimensions: Vector) -> Self {
        Self {
            bits: bitvec![0; dimensions.product()],
            dimensions,
        }
    }

    fn index(&self, position: Vector) -> Option<usize> {
        (position.x < self.dimensions.x && position.y < self.dimensions.y)
            .then(|| position.x * self.dimensions.y + position.y)
    }

    /// Insert a coordinate, returning whether it was newly added
    ///
    /// Out-of-range coordinates are ignored and report `false`.
    pub fn insert(&mut self, position: Vector) -> bool {
        let Some(index) = self.index(position) else {
            return false;
        };
        if self.bits.get(index).as_deref() == Some(&true) {
            return false;
        }
        self.bits.set(index, true);
        true
    }

    /// Test coordinate membership
    pub fn contains(&self, position: Vector) -> bool {
        self.index(position)
            .is_some_and(|index| self.bits.get(index).as_deref() == Some(&true))
    }

    /// Count coordinates in the set
    pub fn count(&self) -> usize {
        self.bits.count_ones()
    }
}
