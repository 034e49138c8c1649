//! Pattern occurrence scanning and roughness measurement

use std::collections::BTreeSet;
use std::str::FromStr;

use log::debug;

use crate::io::configuration::{SEA_MONSTER, SET_PIXEL};
use crate::io::error::{PuzzleError, Result};
use crate::spatial::assembly::{PixelSource, Reorient};
use crate::spatial::orientation::Orientation;

/// Fixed shape searched for in an image, stored as offsets from its anchor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    width: usize,
    height: usize,
    offsets: Vec<(usize, usize)>,
}

impl Default for Pattern {
    fn default() -> Self {
        Self::sea_monster()
    }
}

impl Pattern {
    /// The 20x3 sea monster with 15 set cells
    pub fn sea_monster() -> Self {
        Self::from_glyph_rows(SEA_MONSTER.as_slice())
    }

    /// Build a pattern from text rows where `'#'` marks a set cell
    ///
    /// # Errors
    ///
    /// Returns an error if no cell is set
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Result<Self> {
        let pattern = Self::from_glyph_rows(rows);
        if pattern.offsets.is_empty() {
            return Err(PuzzleError::InvalidPattern {
                reason: "pattern has no set cells".to_string(),
            });
        }
        Ok(pattern)
    }

    fn from_glyph_rows<S: AsRef<str>>(rows: &[S]) -> Self {
        let offsets: Vec<(usize, usize)> = rows
            .iter()
            .enumerate()
            .flat_map(|(dy, row)| {
                row.as_ref()
                    .chars()
                    .enumerate()
                    .filter(|&(_, glyph)| glyph == SET_PIXEL)
                    .map(move |(dx, _)| (dx, dy))
            })
            .collect();
        // Trailing blank columns and rows do not widen the scan window
        let width = offsets.iter().map(|&(dx, _)| dx + 1).max().unwrap_or(0);
        let height = offsets.iter().map(|&(_, dy)| dy + 1).max().unwrap_or(0);
        Self {
            width,
            height,
            offsets,
        }
    }

    /// Width of the pattern's bounding box
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Height of the pattern's bounding box
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Number of set cells
    pub fn cell_count(&self) -> usize {
        self.offsets.len()
    }

    /// Set-cell offsets relative to the anchor
    pub fn offsets(&self) -> &[(usize, usize)] {
        &self.offsets
    }

    /// True when every pattern cell is set with the anchor at `(x, y)`
    ///
    /// Anchors that would push the pattern past the image edge never match.
    pub fn matches_at(&self, image: &impl PixelSource, x: usize, y: usize) -> bool {
        let size = image.size();
        x + self.width <= size
            && y + self.height <= size
            && self
                .offsets
                .iter()
                .all(|&(dx, dy)| image.pixel(x + dx, y + dy))
    }

    /// Anchors of every occurrence in row-major order
    pub fn match_anchors(&self, image: &impl PixelSource) -> Vec<(usize, usize)> {
        let size = image.size();
        if self.width > size || self.height > size {
            return Vec::new();
        }
        (0..=size - self.height)
            .flat_map(|y| (0..=size - self.width).map(move |x| (x, y)))
            .filter(|&(x, y)| self.matches_at(image, x, y))
            .collect()
    }

    /// Number of occurrences over every valid anchor
    pub fn count_matches(&self, image: &impl PixelSource) -> usize {
        self.match_anchors(image).len()
    }

    /// Distinct pixels covered by the given occurrences
    pub fn covered_pixels(&self, anchors: &[(usize, usize)]) -> BTreeSet<(usize, usize)> {
        anchors
            .iter()
            .flat_map(|&(x, y)| self.offsets.iter().map(move |&(dx, dy)| (x + dx, y + dy)))
            .collect()
    }

    /// Find the first orientation holding the pattern and measure roughness
    ///
    /// The set-pixel total is taken once from the canonical orientation since
    /// re-orienting never changes it. Orientations are tried in
    /// [`Orientation::ALL`] order and the scan stops at the first one with at
    /// least one occurrence. Returns `None` when no orientation matches.
    pub fn scan<I: Reorient>(&self, image: &I) -> Option<ScanReport> {
        let total_set = count_set_pixels(image);
        Orientation::ALL.into_iter().find_map(|orientation| {
            let view = image.reoriented(orientation);
            let anchors = self.match_anchors(&view);
            if anchors.is_empty() {
                return None;
            }
            let matches = anchors.len();
            debug!(
                "Found {matches} pattern occurrence(s) with flip={} rotation={}",
                orientation.flip,
                orientation.rotation.degrees()
            );
            Some(ScanReport {
                orientation,
                anchors,
                total_set,
                pattern_cells: self.cell_count(),
            })
        })
    }
}

impl FromStr for Pattern {
    type Err = PuzzleError;

    fn from_str(s: &str) -> Result<Self> {
        let rows: Vec<&str> = s.lines().collect();
        Self::from_rows(&rows)
    }
}

/// Outcome of scanning an image for a pattern
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanReport {
    /// First orientation containing the pattern
    pub orientation: Orientation,
    /// Occurrence anchors in that orientation
    pub anchors: Vec<(usize, usize)>,
    /// Set pixels in the whole image
    pub total_set: usize,
    /// Set cells of the pattern that was searched for
    pub pattern_cells: usize,
}

impl ScanReport {
    /// Number of occurrences found
    pub fn matches(&self) -> usize {
        self.anchors.len()
    }

    /// Set pixels not attributed to any occurrence
    ///
    /// # Errors
    ///
    /// Returns an error if overlapping occurrences claim more pixels than are set
    pub fn roughness(&self) -> Result<usize> {
        roughness(self.total_set, self.matches(), self.pattern_cells)
    }
}

/// Total set pixels across the image
pub fn count_set_pixels(image: &impl PixelSource) -> usize {
    let size = image.size();
    (0..size)
        .map(|y| (0..size).filter(|&x| image.pixel(x, y)).count())
        .sum()
}

/// Set pixels left after subtracting `cells` pixels per occurrence
///
/// # Errors
///
/// Returns an error if the occurrences account for more pixels than are set,
/// which only happens when occurrences overlap
pub fn roughness(total_set: usize, matches: usize, cells: usize) -> Result<usize> {
    cells
        .checked_mul(matches)
        .and_then(|claimed| total_set.checked_sub(claimed))
        .ok_or(PuzzleError::OverlappingMatches {
            total_set,
            matches,
            pattern_cells: cells,
        })
}
