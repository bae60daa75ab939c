//! Input/output operations, configuration and error handling

/// Command-line interface and batch map processing
pub mod cli;
/// Rendering constants and runtime defaults
pub mod configuration;
/// Error types shared by every module
pub mod error;
/// PNG export of grids and search results
pub mod image;
/// Progress display for batch processing
pub mod progress;
/// Text map parsing and glyph rendering
pub mod text;
