//! Puzzle constants and runtime configuration defaults

// Geometry of tiles and their orientations
/// Number of distinct tile orientations (4 rotations x 2 flip states)
pub const ORIENTATION_COUNT: usize = 8;

/// Width of the border stripped from every tile during assembly
pub const TILE_BORDER: usize = 1;

// A tile needs at least one interior pixel once both borders are removed
/// Smallest tile side accepted by the tile store
pub const MIN_TILE_SIDE: usize = 2 * TILE_BORDER + 1;

// Text glyphs used by the input format and rendered output
/// Glyph for a set pixel
pub const SET_PIXEL: char = '#';
/// Glyph for an unset pixel
pub const CLEAR_PIXEL: char = '.';
/// Glyph for a set pixel covered by a pattern occurrence
pub const HIGHLIGHT_PIXEL: char = 'O';
/// Prefix of the identifier line introducing each tile
pub const TILE_HEADER_PREFIX: &str = "Tile ";

/// The sea monster searched for in the assembled image
pub const SEA_MONSTER: [&str; 3] = [
    "                  # ",
    "#    ##    ##    ###",
    " #  #  #  #  #  #   ",
];

// Solver settings
/// Number of branches between progress spinner refreshes
pub const PROGRESS_TICK_INTERVAL: usize = 256;

// A well-posed puzzle is solvable in every whole-board symmetry
/// Number of solutions expected from a puzzle with a unique layout
pub const BOARD_SYMMETRIES: usize = ORIENTATION_COUNT;

/// Upper bound on solutions enumerated when checking uniqueness
pub const UNIQUENESS_PROBE_LIMIT: usize = 2 * BOARD_SYMMETRIES;

// PNG export settings
/// Colour of unset pixels
pub const PNG_CLEAR_COLOR: [u8; 4] = [12, 36, 64, 255];
/// Colour of set pixels
pub const PNG_SET_COLOR: [u8; 4] = [96, 160, 208, 255];
/// Colour of pixels covered by a pattern occurrence
pub const PNG_HIGHLIGHT_COLOR: [u8; 4] = [224, 96, 48, 255];
/// Edge length in output pixels of one image pixel
pub const PNG_SCALE: u32 = 4;

// Default values for puzzle generation
/// Fixed seed for reproducible generation
pub const DEFAULT_SEED: u64 = 42;
/// Default tile side for generated puzzles
pub const DEFAULT_TILE_SIDE: usize = 10;
/// Default fraction of set interior pixels in generated puzzles
pub const DEFAULT_DENSITY: f64 = 0.5;
/// Fraction of set pixels on shared tile borders
pub const BORDER_DENSITY: f64 = 0.5;
/// Redraws of one border segment before its pattern is accepted as shared
pub const MAX_EDGE_REDRAWS: usize = 256;
/// Smallest tile id handed out by the generator
pub const GENERATED_ID_MIN: u64 = 1000;
/// Exclusive upper bound of tile ids handed out by the generator
pub const GENERATED_ID_MAX: u64 = 10_000;
