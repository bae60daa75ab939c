//! Command-line interface for batch searching text maps

use crate::io::configuration::{MAP_EXTENSION, OUTPUT_SUFFIX, WALL_GLYPH};
use crate::io::error::{GridError, Result, file_system_error, invalid_parameter};
use crate::io::image::export_grid_as_png;
use crate::io::progress::{BatchSummary, ProgressManager};
use crate::io::text::{load_grid, render_with_path};
use crate::spatial::{Grid, Vector};
use clap::Parser;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "gridkit")]
#[command(
    author,
    version,
    about = "Breadth-first search across text grid maps"
)]
/// Command-line arguments for the map search tool
// CLI tools commonly need multiple boolean flags for various features and user preferences
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Input map file or directory of maps to process
    #[arg(value_name = "TARGET")]
    pub target: PathBuf,

    /// Search origin as x,y (row, column)
    #[arg(short, long)]
    pub start: Vector,

    /// Search goal as x,y (row, column)
    #[arg(short, long)]
    pub end: Vector,

    /// Glyph of cells that cannot be entered
    #[arg(short, long, default_value_t = WALL_GLYPH)]
    pub wall: char,

    /// Mark only the fewest-step route instead of every explored cell
    #[arg(long)]
    pub shortest: bool,

    /// Also export the result as a PNG image
    #[arg(short, long)]
    pub png: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Process files even if output exists
    #[arg(short, long)]
    pub no_skip: bool,
}

impl Cli {
    /// Check if existing output files should be skipped
    pub const fn skip_existing(&self) -> bool {
        !self.no_skip
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }
}

/// Result of searching a single map file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileOutcome {
    /// The goal was reached and result files were written
    Solved,
    /// The search could not start or never reached the goal; holds the reason
    Unreachable(String),
}

/// Orchestrates batch searching of map files with progress tracking
pub struct FileProcessor {
    cli: Cli,
}

impl FileProcessor {
    /// Create a new file processor with the given CLI arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Process files according to CLI arguments
    ///
    /// Maps whose goal is unreachable are reported on stderr and counted,
    /// not fatal.
    ///
    /// # Errors
    ///
    /// Returns an error if target validation, map parsing or output writing fails
    pub fn process(&self) -> Result<BatchSummary> {
        let files = self.collect_files()?;

        if files.is_empty() {
            return Ok(BatchSummary::default());
        }

        let mut progress = if self.cli.should_show_progress() {
            ProgressManager::new(files.len())
        } else {
            ProgressManager::hidden(files.len())
        };

        for file in &files {
            progress.start_file(file);
            let outcome = self.process_file(file)?;
            if let FileOutcome::Unreachable(reason) = &outcome {
                progress.report(&format!("Skipping {}: {reason}", file.display()));
            }
            progress.complete_file(outcome == FileOutcome::Solved);
        }

        Ok(progress.finish())
    }

    /// Run the configured search on one grid
    ///
    /// Cells holding the wall glyph are never entered.
    ///
    /// # Errors
    ///
    /// Propagates `InvalidPosition` and `NoPathFound` from the search
    pub fn search(&self, grid: &Grid<char>) -> Result<Vec<Vector>> {
        let wall = self.cli.wall;
        let passable = |glyph: &char, _: Vector| *glyph != wall;

        if self.cli.shortest {
            grid.shortest_path(self.cli.start, self.cli.end, passable)
        } else {
            grid.pathfind(self.cli.start, self.cli.end, passable)
        }
    }

    /// Search a single map file and write its result files
    ///
    /// A missing goal or an unusable start is a [`FileOutcome::Unreachable`],
    /// and no result files are written for it.
    ///
    /// # Errors
    ///
    /// Returns an error if the map cannot be read or parsed, or an output
    /// file cannot be written
    pub fn process_file(&self, input_path: &Path) -> Result<FileOutcome> {
        let grid = load_grid(input_path)?;

        let path = match self.search(&grid) {
            Ok(path) => path,
            Err(error @ (GridError::NoPathFound { .. } | GridError::InvalidPosition { .. })) => {
                return Ok(FileOutcome::Unreachable(error.to_string()));
            }
            Err(error) => return Err(error),
        };

        let output_path = Self::get_output_path(input_path);
        std::fs::write(&output_path, render_with_path(&grid, &path))
            .map_err(|e| file_system_error(&output_path, "write", e))?;

        if self.cli.png {
            export_grid_as_png(&grid, &path, &Self::get_image_path(input_path))?;
        }

        Ok(FileOutcome::Solved)
    }

    fn collect_files(&self) -> Result<Vec<PathBuf>> {
        if self.cli.target.is_file() {
            if Self::is_map_file(&self.cli.target) {
                if self.should_process_file(&self.cli.target) {
                    Ok(vec![self.cli.target.clone()])
                } else {
                    Ok(vec![])
                }
            } else {
                Err(invalid_parameter(
                    "target",
                    &self.cli.target.display(),
                    &format!("map file must have the .{MAP_EXTENSION} extension"),
                ))
            }
        } else if self.cli.target.is_dir() {
            let mut files = Vec::new();
            let entries = std::fs::read_dir(&self.cli.target)
                .map_err(|e| file_system_error(&self.cli.target, "read directory", e))?;
            for entry in entries {
                let path = entry
                    .map_err(|e| file_system_error(&self.cli.target, "read directory", e))?
                    .path();
                if Self::is_map_file(&path) && self.should_process_file(&path) {
                    files.push(path);
                }
            }
            files.sort();
            Ok(files)
        } else {
            Err(invalid_parameter(
                "target",
                &self.cli.target.display(),
                &"target must be a map file or directory",
            ))
        }
    }

    // Result files share the map extension, so they are excluded by stem
    fn is_map_file(path: &Path) -> bool {
        path.extension().and_then(|s| s.to_str()) == Some(MAP_EXTENSION)
            && !path
                .file_stem()
                .is_some_and(|stem| stem.to_string_lossy().ends_with(OUTPUT_SUFFIX))
    }

    fn should_process_file(&self, input_path: &Path) -> bool {
        if !self.cli.skip_existing() {
            return true;
        }

        let output_path = Self::get_output_path(input_path);
        if output_path.exists() {
            // Allow print for user feedback on skipped files
            #[allow(clippy::print_stderr)]
            if self.cli.should_show_progress() {
                eprintln!("Skipping: {} (output exists)", input_path.display());
            }
            false
        } else {
            true
        }
    }

    /// Path of the text result written for `input_path`
    pub fn get_output_path(input_path: &Path) -> PathBuf {
        Self::sibling_path(input_path, MAP_EXTENSION)
    }

    /// Path of the PNG result written for `input_path`
    pub fn get_image_path(input_path: &Path) -> PathBuf {
        Self::sibling_path(input_path, "png")
    }

    fn sibling_path(input_path: &Path, extension: &str) -> PathBuf {
        let stem = input_path.file_stem().unwrap_or_default();
        let output_name = format!("{}{OUTPUT_SUFFIX}.{extension}", stem.to_string_lossy());

        if let Some(parent) = input_path.parent() {
            parent.join(output_name)
        } else {
            PathBuf::from(output_name)
        }
    }
}
