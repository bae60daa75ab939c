//! Spatial data structures and grid manipulation
//!
//! This module contains spatial-related functionality including:
//! - Coordinate and area value types
//! - Grid storage and bounds-checked access
//! - Region algebra and grid extension
//! - Deep cloning and cell-wise diffing

/// Deep duplication of grid cells
pub mod cloning;
/// Cell-wise grid comparison
pub mod diff;
/// Grid extension utilities
pub mod extension;
/// Grid storage and basic accessors
pub mod grid;
/// Cropping, compositing, mapping and mirroring
pub mod region;
/// Coordinate and area value types
pub mod vector;

pub use cloning::DeepClone;
pub use grid::Grid;
pub use vector::{Area, Vector};
