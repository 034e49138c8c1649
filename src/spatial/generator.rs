//! Seeded generation of solvable puzzles
//!
//! A single canvas is drawn where neighbouring tiles share their border
//! line, so every cut tile matches its neighbours by construction. Each tile
//! is then stored in a random orientation under a random distinct id.
//! Border segments are redrawn until no two of them share a pattern in
//! either direction, so each edge fits exactly one neighbour.

use std::collections::BTreeSet;

use log::debug;
use ndarray::Array2;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::analysis::patterns::Pattern;
use crate::io::configuration::{
    BORDER_DENSITY, DEFAULT_DENSITY, GENERATED_ID_MAX, GENERATED_ID_MIN, MAX_EDGE_REDRAWS,
    MIN_TILE_SIDE, ORIENTATION_COUNT, TILE_BORDER,
};
use crate::io::error::{Result, invalid_parameter};
use crate::spatial::orientation::Orientation;
use crate::spatial::tiles::{Tile, TileId, TileStore};

/// Builder for random puzzles with a known layout
#[derive(Debug, Clone)]
pub struct PuzzleGenerator {
    board_side: usize,
    tile_side: usize,
    density: f64,
    seed: u64,
    stamps: Vec<(Pattern, usize, usize)>,
}

/// A generated puzzle together with the layout it was cut from
#[derive(Debug, Clone)]
pub struct GeneratedPuzzle {
    /// Shuffled, re-oriented tiles
    pub store: TileStore,
    /// Tile ids row by row as they were cut from the canvas
    pub layout: Vec<Vec<TileId>>,
}

impl PuzzleGenerator {
    /// Start a generator for a `board_side` x `board_side` board of tiles
    pub const fn new(board_side: usize, tile_side: usize, seed: u64) -> Self {
        Self {
            board_side,
            tile_side,
            density: DEFAULT_DENSITY,
            seed,
            stamps: Vec::new(),
        }
    }

    /// Fraction of interior pixels that are set
    #[must_use]
    pub const fn with_density(mut self, density: f64) -> Self {
        self.density = density;
        self
    }

    /// Draw `pattern` with its anchor at `(x, y)` of the assembled image
    #[must_use]
    pub fn with_stamp(mut self, pattern: Pattern, x: usize, y: usize) -> Self {
        self.stamps.push((pattern, x, y));
        self
    }

    /// Side of the borderless image the puzzle assembles into
    pub const fn image_size(&self) -> usize {
        self.board_side * self.interior()
    }

    const fn interior(&self) -> usize {
        self.tile_side.saturating_sub(2 * TILE_BORDER)
    }

    /// Stride between tile origins on the shared canvas
    const fn stride(&self) -> usize {
        self.tile_side.saturating_sub(1)
    }

    /// Generate the puzzle
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The board is empty or tiles are below the minimum side
    /// - The density is outside `[0, 1]`
    /// - There are more tiles than available ids
    /// - A stamp does not fit inside the assembled image
    pub fn generate(&self) -> Result<GeneratedPuzzle> {
        self.validate()?;
        let mut rng = StdRng::seed_from_u64(self.seed);
        let canvas = self.draw_canvas(&mut rng);

        let tile_count = self.board_side * self.board_side;
        let mut ids: Vec<TileId> = (GENERATED_ID_MIN..GENERATED_ID_MAX).collect();
        ids.shuffle(&mut rng);
        ids.truncate(tile_count);

        let mut tiles = Vec::with_capacity(tile_count);
        let mut layout = Vec::with_capacity(self.board_side);
        let mut next_id = ids.into_iter();
        for row in 0..self.board_side {
            let mut layout_row = Vec::with_capacity(self.board_side);
            for col in 0..self.board_side {
                let id = next_id.next().ok_or_else(|| {
                    invalid_parameter("board_side", &self.board_side, &"ran out of tile ids")
                })?;
                let orientation = Orientation::from_index(rng.random_range(0..ORIENTATION_COUNT))
                    .unwrap_or(Orientation::IDENTITY);
                tiles.push(self.cut_tile(&canvas, col, row, id, orientation)?);
                layout_row.push(id);
            }
            layout.push(layout_row);
        }

        Ok(GeneratedPuzzle {
            store: TileStore::new(tiles)?,
            layout,
        })
    }

    fn validate(&self) -> Result<()> {
        if self.board_side == 0 {
            return Err(invalid_parameter(
                "board_side",
                &self.board_side,
                &"board needs at least one tile",
            ));
        }
        if self.tile_side < MIN_TILE_SIDE {
            return Err(invalid_parameter(
                "tile_side",
                &self.tile_side,
                &format!("tiles need a side of at least {MIN_TILE_SIDE}"),
            ));
        }
        if !(0.0..=1.0).contains(&self.density) {
            return Err(invalid_parameter(
                "density",
                &self.density,
                &"density must lie in [0, 1]",
            ));
        }
        let available = GENERATED_ID_MAX - GENERATED_ID_MIN;
        if (self.board_side * self.board_side) as u64 > available {
            return Err(invalid_parameter(
                "board_side",
                &self.board_side,
                &format!("only {available} distinct tile ids are available"),
            ));
        }
        let size = self.image_size();
        for (pattern, x, y) in &self.stamps {
            if x + pattern.width() > size || y + pattern.height() > size {
                return Err(invalid_parameter(
                    "stamp",
                    &format!("({x}, {y})"),
                    &format!("pattern does not fit inside a {size}x{size} image"),
                ));
            }
        }
        Ok(())
    }

    /// Canvas indexed `[y, x]` covering every tile including shared borders
    fn draw_canvas(&self, rng: &mut StdRng) -> Array2<bool> {
        let stride = self.stride();
        let span = self.board_side * stride + 1;
        let mut canvas = Array2::from_shape_fn((span, span), |(y, x)| {
            let on_border = x % stride == 0 || y % stride == 0;
            let density = if on_border {
                BORDER_DENSITY
            } else {
                self.density
            };
            rng.random_bool(density)
        });
        self.separate_borders(&mut canvas, rng);

        for (pattern, x, y) in &self.stamps {
            for &(dx, dy) in pattern.offsets() {
                let cx = self.canvas_coordinate(x + dx);
                let cy = self.canvas_coordinate(y + dy);
                if let Some(pixel) = canvas.get_mut([cy, cx]) {
                    *pixel = true;
                }
            }
        }
        canvas
    }

    /// Redraw border segments until each pattern occurs once
    ///
    /// Segment corners are shared with crossing segments and stay fixed, so
    /// tiles too small to hold enough distinct patterns keep some clashes.
    /// Palindromes clash with themselves since they also fit a mirrored tile.
    fn separate_borders(&self, canvas: &mut Array2<bool>, rng: &mut StdRng) {
        let mut seen = BTreeSet::new();
        let mut clashes = 0;
        for segment in self.border_segments() {
            let mut redraws = 0;
            loop {
                let (pattern, symmetric) = edge_pattern(canvas, &segment);
                let clash = symmetric || seen.contains(&pattern);
                if !clash || redraws == MAX_EDGE_REDRAWS {
                    clashes += usize::from(clash);
                    seen.insert(pattern);
                    break;
                }
                redraws += 1;
                let free = segment.len().saturating_sub(2);
                for &index in segment.iter().skip(1).take(free) {
                    if let Some(pixel) = canvas.get_mut(index) {
                        *pixel = rng.random_bool(BORDER_DENSITY);
                    }
                }
            }
        }
        if clashes > 0 {
            debug!(
                "{clashes} border segment(s) still clash after {MAX_EDGE_REDRAWS} redraws each"
            );
        }
    }

    /// Canvas indices of every tile-side border segment, corners included
    fn border_segments(&self) -> Vec<Vec<[usize; 2]>> {
        let stride = self.stride();
        let lines = (0..=self.board_side).map(|line| line * stride);
        lines
            .flat_map(|fixed| {
                (0..self.board_side).flat_map(move |cell| {
                    let start = cell * stride;
                    let span = start..=start + stride;
                    let horizontal: Vec<[usize; 2]> = span.clone().map(|x| [fixed, x]).collect();
                    let vertical: Vec<[usize; 2]> = span.map(|y| [y, fixed]).collect();
                    [horizontal, vertical]
                })
            })
            .collect()
    }

    /// Canvas coordinate of an assembled-image coordinate along one axis
    const fn canvas_coordinate(&self, image: usize) -> usize {
        let interior = self.interior();
        (image / interior) * self.stride() + TILE_BORDER + image % interior
    }

    /// Cut one tile and store it so that viewing it through `orientation`
    /// gives back the canvas
    fn cut_tile(
        &self,
        canvas: &Array2<bool>,
        col: usize,
        row: usize,
        id: TileId,
        orientation: Orientation,
    ) -> Result<Tile> {
        let n = self.tile_side;
        let (origin_x, origin_y) = (col * self.stride(), row * self.stride());
        let mut pixels = Array2::from_elem((n, n), false);
        for y in 0..n {
            for x in 0..n {
                let (sx, sy) = orientation.remap(x, y, n);
                if let Some(pixel) = pixels.get_mut([sy, sx]) {
                    *pixel = canvas
                        .get([origin_y + y, origin_x + x])
                        .copied()
                        .unwrap_or(false);
                }
            }
        }
        Tile::new(id, pixels)
    }
}

/// Segment pattern in its smaller direction and whether it reads the same
/// both ways
fn edge_pattern(canvas: &Array2<bool>, segment: &[[usize; 2]]) -> (Vec<bool>, bool) {
    let forward: Vec<bool> = segment
        .iter()
        .map(|&index| canvas.get(index).copied().unwrap_or(false))
        .collect();
    let reversed: Vec<bool> = forward.iter().rev().copied().collect();
    let symmetric = forward == reversed;
    (forward.min(reversed), symmetric)
}
