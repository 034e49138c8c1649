//! Error types for puzzle loading, solving and export

use std::fmt;
use std::path::PathBuf;

use crate::spatial::tiles::TileId;

/// Main error type for all puzzle operations
#[derive(Debug)]
pub enum PuzzleError {
    /// Input text could not be parsed
    Parse {
        /// 1-based line number where parsing failed
        line: usize,
        /// Description of what was expected
        reason: String,
    },

    /// A tile's pixel grid is unusable
    InvalidTile {
        /// Identifier of the offending tile
        id: TileId,
        /// Description of what's wrong with the tile
        reason: String,
    },

    /// Tiles do not all share the same side length
    InconsistentTileSide {
        /// Identifier of the first tile with a different side
        id: TileId,
        /// Side length of the first tile
        expected: usize,
        /// Side length found on the offending tile
        found: usize,
    },

    /// Two tiles carry the same identifier
    DuplicateTile {
        /// The repeated identifier
        id: TileId,
    },

    /// Tile count cannot be arranged into a square board
    NonSquareTileCount {
        /// Number of tiles supplied
        count: usize,
    },

    /// Tiles are too small to keep any pixels once borders are removed
    TileTooSmall {
        /// Side length of the supplied tiles
        side: usize,
        /// Smallest accepted side length
        minimum: usize,
    },

    /// Backtracking exhausted every branch without a consistent layout
    NoSolution {
        /// Number of tiles on the board
        tiles: usize,
        /// Branches explored before giving up
        branches: usize,
    },

    /// An operation needed a solved board but a cell is still open
    UnsolvedBoard {
        /// Row-major index of the first unresolved cell
        cell: usize,
    },

    /// The pattern occurs in none of the eight image orientations
    NoPatternMatch {
        /// Number of set cells in the searched pattern
        pattern_cells: usize,
    },

    /// Overlapping occurrences claim more pixels than the image has set
    OverlappingMatches {
        /// Set pixels in the image
        total_set: usize,
        /// Occurrences found
        matches: usize,
        /// Number of set cells in the searched pattern
        pattern_cells: usize,
    },

    /// Pattern text does not describe a usable pattern
    InvalidPattern {
        /// Description of the problem
        reason: String,
    },

    /// Algorithm parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Failed to save the assembled image to disk
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

impl fmt::Display for PuzzleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parse { line, reason } => write!(f, "Parse error on line {line}: {reason}"),
            Self::InvalidTile { id, reason } => write!(f, "Invalid tile {id}: {reason}"),
            Self::InconsistentTileSide {
                id,
                expected,
                found,
            } => {
                write!(
                    f,
                    "Tile {id} has side {found} but previous tiles have side {expected}"
                )
            }
            Self::DuplicateTile { id } => write!(f, "Tile {id} appears more than once"),
            Self::NonSquareTileCount { count } => {
                write!(f, "{count} tiles cannot be arranged into a square board")
            }
            Self::TileTooSmall { side, minimum } => {
                write!(f, "Tile side {side} is below the minimum of {minimum}")
            }
            Self::NoSolution { tiles, branches } => {
                write!(
                    f,
                    "No consistent layout exists for {tiles} tiles ({branches} branches explored)"
                )
            }
            Self::UnsolvedBoard { cell } => write!(f, "Board cell {cell} is not resolved"),
            Self::NoPatternMatch { pattern_cells } => {
                write!(
                    f,
                    "Pattern with {pattern_cells} cells was not found in any orientation"
                )
            }
            Self::OverlappingMatches {
                total_set,
                matches,
                pattern_cells,
            } => {
                write!(
                    f,
                    "{matches} overlapping occurrence(s) of a {pattern_cells}-cell pattern exceed the {total_set} set pixels"
                )
            }
            Self::InvalidPattern { reason } => write!(f, "Invalid pattern: {reason}"),
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

impl std::error::Error for PuzzleError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for puzzle results
pub type Result<T> = std::result::Result<T, PuzzleError>;

impl From<image::ImageError> for PuzzleError {
    fn from(err: image::ImageError) -> Self {
        Self::ImageExport {
            path: PathBuf::from("<unknown>"),
            source: err,
        }
    }
}

impl From<std::io::Error> for PuzzleError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> PuzzleError {
    PuzzleError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a parse error for a 1-based line number
pub fn parse_error(line: usize, reason: &impl ToString) -> PuzzleError {
    PuzzleError::Parse {
        line,
        reason: reason.to_string(),
    }
}
