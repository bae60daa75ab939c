//! Generic two-dimensional grid container for rectangular spatial data
//!
//! A [`Grid`] owns a rectangular table of optional cells and offers indexed
//! access, a region algebra (crop, overlay, extend, flip, area-scoped map and
//! fill), orthogonal neighbour discovery and breadth-first search.

#![forbid(unsafe_code)]

/// Adjacency discovery and breadth-first search
pub mod algorithm;
/// Input/output operations and error handling
pub mod io;
/// Spatial grid storage, coordinates and region algebra
pub mod spatial;

pub use io::error::{GridError, Result};
pub use spatial::{Area, DeepClone, Grid, Vector};
