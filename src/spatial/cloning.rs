//! Deep duplication of grids whose cells hold shared or mutable structure
//!
//! `Grid::clone` clones each cell with `T::clone`, which keeps reference
//! counted handles pointing at the same allocation. `deep_clone` is limited
//! to cell types implementing [`DeepClone`] and gives every shared handle
//! its own allocation.

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

use crate::spatial::grid::Grid;

/// Types that can produce a copy sharing no mutable state with the original
///
/// Sharing is not preserved: two `Rc` or `Arc` handles to one allocation
/// become two independent allocations in the copy, so a cell reached
/// through both handles is duplicated rather than shared.
pub trait DeepClone {
    /// Recursively duplicate `self`, including data behind shared pointers
    ///
    /// # Panics
    ///
    /// The `RefCell` implementation borrows its contents, so it panics if
    /// the cell is mutably borrowed at the time of the call.
    #[must_use]
    fn deep_clone(&self) -> Self;
}

macro_rules! impl_deep_clone_by_value {
    ($($ty:ty),* $(,)?) => {
        $(
            impl DeepClone for $ty {
                fn deep_clone(&self) -> Self {
                    Clone::clone(self)
                }
            }
        )*
    };
}

impl_deep_clone_by_value!(
    bool, char, u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, f32, f64,
    String,
);

impl<T: DeepClone> DeepClone for Option<T> {
    fn deep_clone(&self) -> Self {
        self.as_ref().map(DeepClone::deep_clone)
    }
}

impl<T: DeepClone> DeepClone for Vec<T> {
    fn deep_clone(&self) -> Self {
        self.iter().map(DeepClone::deep_clone).collect()
    }
}

impl<T: DeepClone> DeepClone for Box<T> {
    fn deep_clone(&self) -> Self {
        Self::new(self.as_ref().deep_clone())
    }
}

impl<T: DeepClone> DeepClone for RefCell<T> {
    fn deep_clone(&self) -> Self {
        Self::new(self.borrow().deep_clone())
    }
}

impl<T: DeepClone> DeepClone for Rc<T> {
    fn deep_clone(&self) -> Self {
        Self::new(self.as_ref().deep_clone())
    }
}

impl<T: DeepClone> DeepClone for Arc<T> {
    fn deep_clone(&self) -> Self {
        Self::new(self.as_ref().deep_clone())
    }
}

impl<A: DeepClone, B: DeepClone> DeepClone for (A, B) {
    fn deep_clone(&self) -> Self {
        (self.0.deep_clone(), self.1.deep_clone())
    }
}

impl<T: DeepClone> DeepClone for Grid<T> {
    fn deep_clone(&self) -> Self {
        Self::from_array(self.as_array().map(DeepClone::deep_clone))
    }
}
