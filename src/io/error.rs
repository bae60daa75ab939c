//! Error types for grid queries, transformations and map file handling

use crate::spatial::Vector;
use std::fmt;
use std::path::PathBuf;

/// Main error type for all grid operations
#[derive(Debug)]
pub enum GridError {
    /// A coordinate lies outside the grid it was applied to
    OutOfBounds {
        /// The offending coordinate
        position: Vector,
        /// Dimensions of the grid that was indexed
        dimensions: Vector,
    },

    /// A neighbour query was made from a position that is not an occupied cell
    InvalidPosition {
        /// The offending coordinate
        position: Vector,
        /// Why the position was rejected
        reason: &'static str,
    },

    /// Breadth-first search exhausted its frontier without reaching the goal
    NoPathFound {
        /// Search origin
        start: Vector,
        /// Unreached goal
        end: Vector,
    },

    /// Two grids were expected to share dimensions but do not
    DimensionMismatch {
        /// Dimensions of the receiver
        expected: Vector,
        /// Dimensions of the other grid
        found: Vector,
    },

    /// Requested dimensions cannot be produced from the current grid
    InvalidDimensions {
        /// Current grid dimensions
        current: Vector,
        /// Requested grid dimensions
        requested: Vector,
    },

    /// Input rows do not all share one length
    JaggedRows {
        /// Index of the first row with a differing length
        row: usize,
        /// Length of the first row
        expected: usize,
        /// Length of the offending row
        found: usize,
    },

    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Failed to save a rendered grid image to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds {
                position,
                dimensions,
            } => {
                write!(
                    f,
                    "Position {position} is out of bounds (grid size {}x{})",
                    dimensions.x, dimensions.y
                )
            }
            Self::InvalidPosition { position, reason } => {
                write!(f, "Not a valid position {position}: {reason}")
            }
            Self::NoPathFound { start, end } => {
                write!(f, "No path from {start} to {end}")
            }
            Self::DimensionMismatch { expected, found } => {
                write!(
                    f,
                    "Grid dimensions differ: expected {}x{}, found {}x{}",
                    expected.x, expected.y, found.x, found.y
                )
            }
            Self::InvalidDimensions { current, requested } => {
                write!(
                    f,
                    "Cannot resize grid from {}x{} to {}x{}",
                    current.x, current.y, requested.x, requested.y
                )
            }
            Self::JaggedRows {
                row,
                expected,
                found,
            } => {
                write!(
                    f,
                    "Row {row} has {found} cells but the first row has {expected}"
                )
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for GridError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for grid results
pub type Result<T> = std::result::Result<T, GridError>;

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> GridError {
    GridError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a file system error for the given path and operation
pub fn file_system_error(
    path: impl Into<PathBuf>,
    operation: &'static str,
    source: std::io::Error,
) -> GridError {
    GridError::FileSystem {
        path: path.into(),
        operation,
        source,
    }
}
