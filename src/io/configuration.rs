//! Rendering constants and runtime configuration defaults

// Glyphs shared by the two-glyph rendering and the text map format
/// Glyph for an empty cell
pub const EMPTY_GLYPH: char = '.';
/// Glyph for any occupied cell in the two-glyph rendering
pub const OCCUPIED_GLYPH: char = '#';

// Map files use the same glyph for walls as the occupied rendering
/// Default glyph treated as impassable by the command-line search
pub const WALL_GLYPH: char = '#';
/// Glyph marking cells discovered by a search in rendered results
pub const PATH_GLYPH: char = '*';

/// File extension of text map inputs
pub const MAP_EXTENSION: &str = "txt";
/// Suffix added to output filenames
pub const OUTPUT_SUFFIX: &str = "_result";

// PNG export settings
/// Side length in pixels of one cell in exported images
pub const CELL_PIXEL_SIZE: u32 = 8;
/// Colour of occupied cells
pub const OCCUPIED_COLOR: [u8; 4] = [40, 40, 48, 255];
/// Colour of cells on a search result
pub const PATH_COLOR: [u8; 4] = [230, 80, 40, 255];
/// Colour of empty cells (fully transparent)
pub const EMPTY_COLOR: [u8; 4] = [0, 0, 0, 0];

// Progress bar display settings
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;
