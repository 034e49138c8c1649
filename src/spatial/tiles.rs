//! Tile pixel grids and the read-only tile store
//!
//! Tiles are square boolean grids identified by a numeric id. The store owns
//! every tile for the lifetime of a puzzle and is passed by reference into
//! anything that needs pixel data.

use ndarray::Array2;
use std::collections::BTreeMap;

use crate::io::configuration::MIN_TILE_SIDE;
use crate::io::error::{PuzzleError, Result};

/// Numeric tile identifier as it appears in the puzzle input
pub type TileId = u64;

/// A square grid of pixels with a unique identifier
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tile {
    id: TileId,
    /// Pixels indexed as `[y, x]`
    pixels: Array2<bool>,
}

impl Tile {
    /// Create a tile from a pixel array indexed as `[y, x]`
    ///
    /// # Errors
    ///
    /// Returns an error if the array is empty or not square
    pub fn new(id: TileId, pixels: Array2<bool>) -> Result<Self> {
        let (rows, cols) = pixels.dim();
        if rows == 0 {
            return Err(PuzzleError::InvalidTile {
                id,
                reason: "tile has no pixels".to_string(),
            });
        }
        if rows != cols {
            return Err(PuzzleError::InvalidTile {
                id,
                reason: format!("tile is {cols} wide but {rows} tall"),
            });
        }
        Ok(Self { id, pixels })
    }

    /// Create a tile from rows of pixels, top row first
    ///
    /// # Errors
    ///
    /// Returns an error if rows differ in length or the grid is not square
    pub fn from_rows(id: TileId, rows: &[Vec<bool>]) -> Result<Self> {
        let side = rows.len();
        if let Some(row) = rows.iter().find(|row| row.len() != side) {
            return Err(PuzzleError::InvalidTile {
                id,
                reason: format!("row of length {} in a tile with {side} rows", row.len()),
            });
        }
        let flat: Vec<bool> = rows.iter().flatten().copied().collect();
        let pixels =
            Array2::from_shape_vec((side, side), flat).map_err(|e| PuzzleError::InvalidTile {
                id,
                reason: e.to_string(),
            })?;
        Self::new(id, pixels)
    }

    /// Tile identifier
    pub const fn id(&self) -> TileId {
        self.id
    }

    /// Number of pixels along each side
    pub fn side(&self) -> usize {
        self.pixels.nrows()
    }

    /// Pixel in the tile's native orientation, unset when out of range
    pub fn pixel(&self, x: usize, y: usize) -> bool {
        self.pixels.get([y, x]).copied().unwrap_or(false)
    }

    /// Raw pixel array indexed as `[y, x]`
    pub const fn pixels(&self) -> &Array2<bool> {
        &self.pixels
    }
}

/// Immutable mapping from tile id to tile
///
/// Construction validates the board-level invariants: at least one tile,
/// unique ids, one shared side length of at least [`MIN_TILE_SIDE`], and a
/// tile count that is a perfect square.
#[derive(Debug, Clone)]
pub struct TileStore {
    tiles: BTreeMap<TileId, Tile>,
    tile_side: usize,
    board_side: usize,
}

impl TileStore {
    /// Build a store from parsed tiles
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No tiles are supplied
    /// - Two tiles share an id
    /// - Tiles have different side lengths or are smaller than the minimum
    /// - The tile count is not a perfect square
    pub fn new(tiles: impl IntoIterator<Item = Tile>) -> Result<Self> {
        let mut map = BTreeMap::new();
        let mut tile_side = None;

        for tile in tiles {
            let side = tile.side();
            match tile_side {
                None => tile_side = Some(side),
                Some(expected) if expected != side => {
                    return Err(PuzzleError::InconsistentTileSide {
                        id: tile.id(),
                        expected,
                        found: side,
                    });
                }
                Some(_) => {}
            }
            let id = tile.id();
            if map.insert(id, tile).is_some() {
                return Err(PuzzleError::DuplicateTile { id });
            }
        }

        let tile_side = tile_side.ok_or(PuzzleError::NonSquareTileCount { count: 0 })?;
        if tile_side < MIN_TILE_SIDE {
            return Err(PuzzleError::TileTooSmall {
                side: tile_side,
                minimum: MIN_TILE_SIDE,
            });
        }

        let count = map.len();
        let board_side = count.isqrt();
        if board_side * board_side != count {
            return Err(PuzzleError::NonSquareTileCount { count });
        }

        Ok(Self {
            tiles: map,
            tile_side,
            board_side,
        })
    }

    /// Look up a tile by id
    pub fn get(&self, id: TileId) -> Option<&Tile> {
        self.tiles.get(&id)
    }

    /// Pixel of a tile in its native orientation, unset for unknown ids
    pub fn pixel(&self, id: TileId, x: usize, y: usize) -> bool {
        self.get(id).is_some_and(|tile| tile.pixel(x, y))
    }

    /// Tile ids in ascending order
    pub fn ids(&self) -> impl Iterator<Item = TileId> + '_ {
        self.tiles.keys().copied()
    }

    /// Tiles in ascending id order
    pub fn tiles(&self) -> impl Iterator<Item = &Tile> + '_ {
        self.tiles.values()
    }

    /// Number of tiles
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Always false for a constructed store, kept for API symmetry with `len`
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Shared side length of every tile
    pub const fn tile_side(&self) -> usize {
        self.tile_side
    }

    /// Number of tiles along each side of the board
    pub const fn board_side(&self) -> usize {
        self.board_side
    }
}
