//! Edge compatibility checks and tile-usage propagation
//!
//! Placement of a tile removes it from every later cell. A later cell left
//! without candidates is a contradiction that fails the branch before any
//! deeper search.

use crate::spatial::grid::Board;
use crate::spatial::orientation::OrientedView;
use crate::spatial::tiles::{TileId, TileStore};

/// True when `option` can sit directly right of `left`
///
/// Compares the left view's right edge (`x = e`) against the option's left
/// edge (`x = 0`) at every row offset `0..=e`.
pub fn left_matches(store: &TileStore, left: &OrientedView, option: &OrientedView) -> bool {
    let e = left.edge_length(store);
    (0..=e).all(|offset| left.pixel(store, e, offset) == option.pixel(store, 0, offset))
}

/// True when `option` can sit directly below `above`
///
/// Compares the above view's bottom edge (`y = e`) against the option's top
/// edge (`y = 0`) at every column offset `0..=e`.
pub fn above_matches(store: &TileStore, above: &OrientedView, option: &OrientedView) -> bool {
    let e = above.edge_length(store);
    (0..=e).all(|offset| above.pixel(store, offset, e) == option.pixel(store, offset, 0))
}

/// True when `option` agrees with whichever neighbours are present
pub fn fits(
    store: &TileStore,
    left: Option<&OrientedView>,
    above: Option<&OrientedView>,
    option: &OrientedView,
) -> bool {
    left.is_none_or(|left| left_matches(store, left, option))
        && above.is_none_or(|above| above_matches(store, above, option))
}

/// Result of removing a placed tile from the rest of the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Propagation {
    /// Every later cell kept at least one candidate
    Consistent {
        /// Number of candidates removed across all later cells
        removed: usize,
    },
    /// A later cell ran out of candidates
    Contradiction {
        /// Row-major index of the emptied cell
        cell: usize,
    },
}

impl Propagation {
    /// True when the branch can continue
    pub const fn is_consistent(&self) -> bool {
        matches!(self, Self::Consistent { .. })
    }
}

/// Remove `tile_id` from every cell after `placed` in row-major order
///
/// Stops at the first cell left empty; the board is then only fit to be
/// discarded.
pub fn propagate_placement(board: &mut Board, placed: usize, tile_id: TileId) -> Propagation {
    let mut removed = 0;
    for index in placed + 1..board.cell_count() {
        removed += board.remove_tile(index, tile_id);
        if board.cell(index).is_none_or(|cell| cell.is_empty()) {
            return Propagation::Contradiction { cell: index };
        }
    }
    Propagation::Consistent { removed }
}

/// Row-major index and neighbour pair of every adjacency whose shared edge
/// differs on a solved board
///
/// Returns an empty list for a board whose layout is fully consistent.
pub fn edge_mismatches(store: &TileStore, board: &Board) -> Vec<(usize, usize)> {
    let side = board.side();
    let mut mismatches = Vec::new();
    for row in 0..side {
        for col in 0..side {
            let (Some(index), Some(view)) = (board.index_of(col, row), board.resolved_at(col, row))
            else {
                continue;
            };
            if let (Some(right_index), Some(right)) =
                (board.index_of(col + 1, row), board.resolved_at(col + 1, row))
            {
                if !left_matches(store, &view, &right) {
                    mismatches.push((index, right_index));
                }
            }
            if let (Some(below_index), Some(below)) =
                (board.index_of(col, row + 1), board.resolved_at(col, row + 1))
            {
                if !above_matches(store, &view, &below) {
                    mismatches.push((index, below_index));
                }
            }
        }
    }
    mismatches
}
