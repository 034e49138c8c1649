//! Reassembly of shuffled, rotated and flipped image tiles
//!
//! Tiles are laid out by a backtracking search over oriented views, stitched
//! into one borderless image, and the image is scanned in all eight
//! orientations for a fixed pattern to measure its roughness.

#![forbid(unsafe_code)]

/// Layout search, tile-usage propagation and pipeline orchestration
pub mod algorithm;
/// Pattern scanning over assembled images
pub mod analysis;
/// Input/output operations, configuration and error handling
pub mod io;
/// Tiles, orientations, boards and image assembly
pub mod spatial;

pub use io::error::{PuzzleError, Result};
