//! Board of candidate cells for the tile layout search
//!
//! Every cell holds a [`CandidateSet`] over all `(tile, orientation)` slots.
//! The board is cheap to clone: candidate bitsets are copied while the
//! slot-to-tile table is shared, which lets the solver branch by snapshot.

use std::sync::Arc;

use crate::algorithm::bitset::CandidateSet;
use crate::io::configuration::ORIENTATION_COUNT;
use crate::io::error::{PuzzleError, Result};
use crate::spatial::orientation::{Orientation, OrientedView};
use crate::spatial::tiles::{TileId, TileStore};

/// One board position and its surviving candidates
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    candidates: CandidateSet,
}

impl Cell {
    /// Candidate slots still possible for this cell
    pub const fn candidates(&self) -> &CandidateSet {
        &self.candidates
    }

    /// True when exactly one candidate remains
    pub fn is_resolved(&self) -> bool {
        self.candidates.single().is_some()
    }

    /// True when no candidate remains, signalling a contradiction
    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }
}

/// Square grid of cells indexed row-major
#[derive(Debug, Clone)]
pub struct Board {
    side: usize,
    /// Tile ids in ascending order; slot `i` refers to `tile_ids[i / 8]`
    tile_ids: Arc<[TileId]>,
    cells: Vec<Cell>,
}

impl Board {
    /// Create a board where every cell admits every tile in every orientation
    ///
    /// # Errors
    ///
    /// Returns an error if the tile count is not the square of the board side
    pub fn new(store: &TileStore) -> Result<Self> {
        let side = store.board_side();
        let count = store.len();
        if side * side != count || count == 0 {
            return Err(PuzzleError::NonSquareTileCount { count });
        }

        let tile_ids: Arc<[TileId]> = store.ids().collect();
        let slots = count * ORIENTATION_COUNT;
        let cells = vec![
            Cell {
                candidates: CandidateSet::all(slots),
            };
            count
        ];

        Ok(Self {
            side,
            tile_ids,
            cells,
        })
    }

    /// Number of cells along each side
    pub const fn side(&self) -> usize {
        self.side
    }

    /// Total number of cells
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Cell at a row-major index
    pub fn cell(&self, index: usize) -> Option<&Cell> {
        self.cells.get(index)
    }

    /// Row-major index of `(col, row)`, if on the board
    pub const fn index_of(&self, col: usize, row: usize) -> Option<usize> {
        if col < self.side && row < self.side {
            Some(row * self.side + col)
        } else {
            None
        }
    }

    /// Oriented view represented by a candidate slot
    pub fn view_of(&self, slot: usize) -> Option<OrientedView> {
        let tile_id = self.tile_ids.get(slot / ORIENTATION_COUNT).copied()?;
        let orientation = Orientation::from_index(slot % ORIENTATION_COUNT)?;
        Some(OrientedView::new(tile_id, orientation))
    }

    /// Candidate slot representing an oriented view
    pub fn slot_of(&self, view: OrientedView) -> Option<usize> {
        let tile_index = self.tile_ids.binary_search(&view.tile_id).ok()?;
        Some(tile_index * ORIENTATION_COUNT + view.orientation.index())
    }

    /// Surviving candidates of a cell in construction order
    pub fn candidates(&self, index: usize) -> impl Iterator<Item = OrientedView> + '_ {
        self.cells
            .get(index)
            .into_iter()
            .flat_map(|cell| cell.candidates.iter())
            .filter_map(|slot| self.view_of(slot))
    }

    /// The single remaining candidate of a cell
    pub fn resolved(&self, index: usize) -> Option<OrientedView> {
        self.cells
            .get(index)
            .and_then(|cell| cell.candidates.single())
            .and_then(|slot| self.view_of(slot))
    }

    /// The single remaining candidate at `(col, row)`
    pub fn resolved_at(&self, col: usize, row: usize) -> Option<OrientedView> {
        self.index_of(col, row).and_then(|index| self.resolved(index))
    }

    /// True when every cell holds exactly one candidate
    pub fn is_solved(&self) -> bool {
        self.cells.iter().all(Cell::is_resolved)
    }

    /// Row-major index of the first cell that is not resolved
    pub fn first_unresolved(&self) -> Option<usize> {
        self.cells.iter().position(|cell| !cell.is_resolved())
    }

    /// Restrict a cell to exactly one oriented view
    ///
    /// Returns false, leaving the board untouched, when the cell or the
    /// view's tile is unknown
    pub fn pin(&mut self, index: usize, view: OrientedView) -> bool {
        let Some(slot) = self.slot_of(view) else {
            return false;
        };
        self.cells.get_mut(index).is_some_and(|cell| {
            cell.candidates.retain_only(slot);
            true
        })
    }

    /// Drop every orientation of a tile from one cell
    ///
    /// Returns the number of candidates removed
    pub fn remove_tile(&mut self, index: usize, tile_id: TileId) -> usize {
        let Ok(tile_index) = self.tile_ids.binary_search(&tile_id) else {
            return 0;
        };
        let start = tile_index * ORIENTATION_COUNT;
        self.cells.get_mut(index).map_or(0, |cell| {
            cell.candidates
                .remove_range(start..start + ORIENTATION_COUNT)
        })
    }

    /// Resolved views of the four corners: top-left, top-right,
    /// bottom-left, bottom-right
    pub fn corners(&self) -> Option<[OrientedView; 4]> {
        let last = self.side.checked_sub(1)?;
        Some([
            self.resolved_at(0, 0)?,
            self.resolved_at(last, 0)?,
            self.resolved_at(0, last)?,
            self.resolved_at(last, last)?,
        ])
    }

    /// Product of the four corner tile ids, the puzzle checksum
    ///
    /// # Errors
    ///
    /// Returns an error if a corner cell is unresolved or the product
    /// overflows
    pub fn corner_product(&self) -> Result<u64> {
        let corners = self.corners().ok_or_else(|| PuzzleError::UnsolvedBoard {
            cell: self.first_unresolved().unwrap_or(0),
        })?;
        corners
            .iter()
            .try_fold(1_u64, |product, view| product.checked_mul(view.tile_id))
            .ok_or_else(|| {
                crate::io::error::invalid_parameter(
                    "corner ids",
                    &format!("{corners:?}"),
                    &"corner id product overflows u64",
                )
            })
    }

    /// Tile ids laid out row by row, `None` for unresolved cells
    pub fn layout(&self) -> Vec<Vec<Option<TileId>>> {
        (0..self.side)
            .map(|row| {
                (0..self.side)
                    .map(|col| self.resolved_at(col, row).map(|view| view.tile_id))
                    .collect()
            })
            .collect()
    }
}
