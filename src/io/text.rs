//! Text map parsing and glyph rendering
//!
//! Maps are plain text, one row per line. `.` marks an empty cell and any
//! other character is an occupied cell holding that character.

use std::fs;
use std::path::Path;

use crate::algorithm::CoordinateSet;
use crate::io::configuration::{EMPTY_GLYPH, PATH_GLYPH};
use crate::io::error::{Result, file_system_error};
use crate::spatial::{Grid, Vector};

/// Parse a text map into a grid of characters
///
/// Line `i` becomes row `x == i`. Trailing carriage returns are ignored and
/// empty input yields an empty grid.
///
/// # Errors
///
/// Returns `GridError::JaggedRows` if the lines differ in length
pub fn parse_grid(text: &str) -> Result<Grid<char>> {
    let rows = text
        .lines()
        .map(|line| {
            line.chars()
                .map(|glyph| (glyph != EMPTY_GLYPH).then_some(glyph))
                .collect()
        })
        .collect();

    Grid::from_rows(rows)
}

/// Read and parse a text map from disk
///
/// # Errors
///
/// Returns an error if the file cannot be read or its lines differ in length
pub fn load_grid(path: &Path) -> Result<Grid<char>> {
    let text = fs::read_to_string(path).map_err(|e| file_system_error(path, "read", e))?;
    parse_grid(&text)
}

/// Render a character grid back to map text, marking `path` cells
///
/// Occupied cells print as their own glyph, empty cells as `.`, and every
/// position in `path` as `*`. Rows are joined by newlines with no trailing
/// newline, matching the two-glyph `Display` rendering.
pub fn render_with_path(grid: &Grid<char>, path: &[Vector]) -> String {
    let mut on_path = CoordinateSet::new(grid.dimensions());
    for &position in path {
        on_path.insert(position);
    }

    let marked = grid.map(|cell, position| {
        if on_path.contains(position) {
            Some(PATH_GLYPH)
        } else {
            cell.copied()
        }
    });

    marked
        .as_array()
        .rows()
        .into_iter()
        .map(|row| {
            row.iter()
                .map(|cell| cell.unwrap_or(EMPTY_GLYPH))
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}
