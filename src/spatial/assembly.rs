//! Borderless composite image over a solved board
//!
//! [`AssembledImage`] computes each pixel on demand from the board's resolved
//! views, skipping the one-pixel border of every tile. [`Bitmap`] is the
//! materialized form used when the same image is read many times.

use ndarray::Array2;
use std::fmt;

use crate::io::configuration::{CLEAR_PIXEL, SET_PIXEL, TILE_BORDER};
use crate::io::error::{PuzzleError, Result};
use crate::spatial::grid::Board;
use crate::spatial::orientation::Orientation;
use crate::spatial::tiles::TileStore;

/// Square boolean image addressable by `(x, y)`
pub trait PixelSource {
    /// Number of pixels along each side
    fn size(&self) -> usize;

    /// Pixel at `(x, y)`, unset when out of range
    fn pixel(&self, x: usize, y: usize) -> bool;
}

/// Image that can be viewed in any of the eight orientations
pub trait Reorient: PixelSource + Sized {
    /// The same image seen through `orientation` relative to its canonical form
    #[must_use]
    fn reoriented(&self, orientation: Orientation) -> Self;
}

/// Assembled image computed on demand from a solved board
#[derive(Debug, Clone, Copy)]
pub struct AssembledImage<'a> {
    board: &'a Board,
    store: &'a TileStore,
    orientation: Orientation,
    interior: usize,
}

impl<'a> AssembledImage<'a> {
    /// Create the canonical view of a solved board
    ///
    /// # Errors
    ///
    /// Returns an error if any board cell is unresolved
    pub fn new(board: &'a Board, store: &'a TileStore) -> Result<Self> {
        if let Some(cell) = board.first_unresolved() {
            return Err(PuzzleError::UnsolvedBoard { cell });
        }
        Ok(Self {
            board,
            store,
            orientation: Orientation::IDENTITY,
            interior: store.tile_side().saturating_sub(2 * TILE_BORDER),
        })
    }

    /// The same board seen through a top-level orientation
    #[must_use]
    pub const fn with_orientation(self, orientation: Orientation) -> Self {
        Self {
            orientation,
            ..self
        }
    }

    /// Top-level orientation of this view
    pub const fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Pixels kept from each tile along each axis
    pub const fn interior_size(&self) -> usize {
        self.interior
    }

    /// Copy every pixel into a [`Bitmap`]
    pub fn to_bitmap(&self) -> Bitmap {
        Bitmap::from_source(self)
    }

    /// Render the image as lines of `'#'` and `'.'`
    pub fn render(&self) -> Vec<String> {
        render_lines(self)
    }
}

impl PixelSource for AssembledImage<'_> {
    fn size(&self) -> usize {
        self.board.side() * self.interior
    }

    fn pixel(&self, x: usize, y: usize) -> bool {
        let size = self.size();
        if self.interior == 0 || x >= size || y >= size {
            return false;
        }
        let (x, y) = self.orientation.remap(x, y, size);
        let (tile_col, offset_x) = (x / self.interior, x % self.interior);
        let (tile_row, offset_y) = (y / self.interior, y % self.interior);
        self.board
            .resolved_at(tile_col, tile_row)
            .is_some_and(|view| {
                view.pixel(
                    self.store,
                    offset_x + TILE_BORDER,
                    offset_y + TILE_BORDER,
                )
            })
    }
}

impl Reorient for AssembledImage<'_> {
    fn reoriented(&self, orientation: Orientation) -> Self {
        self.with_orientation(orientation)
    }
}

/// Materialized square image
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bitmap {
    /// Pixels indexed as `[y, x]`
    pixels: Array2<bool>,
}

impl Bitmap {
    /// Create an image with every pixel unset
    pub fn blank(size: usize) -> Self {
        Self {
            pixels: Array2::from_elem((size, size), false),
        }
    }

    /// Copy every pixel of another source
    pub fn from_source(source: &impl PixelSource) -> Self {
        let size = source.size();
        Self {
            pixels: Array2::from_shape_fn((size, size), |(y, x)| source.pixel(x, y)),
        }
    }

    /// Parse rows of `'#'` (set) and `'.'` (unset)
    ///
    /// # Errors
    ///
    /// Returns an error if the rows do not form a square or contain other
    /// characters
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Result<Self> {
        let size = rows.len();
        let mut bitmap = Self::blank(size);
        for (y, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.chars().count() != size {
                return Err(crate::io::error::parse_error(
                    y + 1,
                    &format!("expected {size} pixels, found {}", row.chars().count()),
                ));
            }
            for (x, glyph) in row.chars().enumerate() {
                let set = match glyph {
                    SET_PIXEL => true,
                    CLEAR_PIXEL => false,
                    other => {
                        return Err(crate::io::error::parse_error(
                            y + 1,
                            &format!("unexpected pixel character {other:?}"),
                        ));
                    }
                };
                bitmap.set(x, y, set);
            }
        }
        Ok(bitmap)
    }

    /// Change one pixel, ignoring coordinates outside the image
    pub fn set(&mut self, x: usize, y: usize, value: bool) {
        if let Some(pixel) = self.pixels.get_mut([y, x]) {
            *pixel = value;
        }
    }

    /// Render the image as lines of `'#'` and `'.'`
    pub fn render(&self) -> Vec<String> {
        render_lines(self)
    }
}

impl PixelSource for Bitmap {
    fn size(&self) -> usize {
        self.pixels.nrows()
    }

    fn pixel(&self, x: usize, y: usize) -> bool {
        self.pixels.get([y, x]).copied().unwrap_or(false)
    }
}

impl Reorient for Bitmap {
    fn reoriented(&self, orientation: Orientation) -> Self {
        let size = self.size();
        Self {
            pixels: Array2::from_shape_fn((size, size), |(y, x)| {
                let (sx, sy) = orientation.remap(x, y, size);
                self.pixel(sx, sy)
            }),
        }
    }
}

impl fmt::Display for Bitmap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in self.render() {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

fn render_lines(source: &impl PixelSource) -> Vec<String> {
    let size = source.size();
    (0..size)
        .map(|y| {
            (0..size)
                .map(|x| {
                    if source.pixel(x, y) {
                        SET_PIXEL
                    } else {
                        CLEAR_PIXEL
                    }
                })
                .collect()
        })
        .collect()
}
