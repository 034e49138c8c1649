//! Depth-first layout search with forward checking
//!
//! Cells are filled in row-major order. A candidate is tried only when its
//! edges agree with the resolved left and above neighbours; trying it clones
//! the board, pins the cell and removes the tile from all later cells. The
//! first complete layout in candidate order wins.

use log::{debug, trace};

use crate::algorithm::propagation::{Propagation, fits, propagate_placement};
use crate::io::progress::SearchProgress;
use crate::spatial::grid::Board;
use crate::spatial::orientation::OrientedView;
use crate::spatial::tiles::TileStore;

/// Counters describing the work done by a search
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Candidates pinned into a cloned board
    pub branches: usize,
    /// Branches abandoned because propagation emptied a later cell
    pub contradictions: usize,
    /// Candidates skipped because an edge disagreed with a neighbour
    pub rejected_candidates: usize,
    /// Highest number of cells resolved at once
    pub deepest_cell: usize,
}

/// Backtracking solver bound to a tile store
pub struct BoardSolver<'a> {
    store: &'a TileStore,
    stats: SearchStats,
    progress: Option<SearchProgress>,
}

impl<'a> BoardSolver<'a> {
    /// Create a solver reading pixels from `store`
    pub const fn new(store: &'a TileStore) -> Self {
        Self {
            store,
            stats: SearchStats {
                branches: 0,
                contradictions: 0,
                rejected_candidates: 0,
                deepest_cell: 0,
            },
            progress: None,
        }
    }

    /// Report search activity through a progress display
    #[must_use]
    pub fn with_progress(mut self, progress: SearchProgress) -> Self {
        self.progress = Some(progress);
        self
    }

    /// Counters accumulated over every search run by this solver
    pub const fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Find the first complete layout reachable from `board`
    ///
    /// `board` is expected to start with every cell open; cells already
    /// narrowed are respected. Returns `None` when every branch fails.
    pub fn solve(&mut self, board: Board) -> Option<Board> {
        debug!(
            "Solving {side}x{side} board with {candidates} candidates per cell",
            side = board.side(),
            candidates = board.candidates(0).count()
        );
        let solved = self.solve_from(board, 0);
        self.finish_progress();
        debug!("Search finished: {:?}", self.stats);
        solved
    }

    /// Enumerate up to `limit` complete layouts in candidate order
    ///
    /// A puzzle with a unique picture still yields one layout per
    /// whole-board symmetry, so well-posed inputs produce eight.
    pub fn find_solutions(&mut self, board: Board, limit: usize) -> Vec<Board> {
        let mut solutions = Vec::new();
        if limit > 0 {
            self.collect_from(board, 0, limit, &mut solutions);
        }
        self.finish_progress();
        debug!(
            "Enumerated {} solution(s) with limit {limit}: {:?}",
            solutions.len(),
            self.stats
        );
        solutions
    }

    fn solve_from(&mut self, board: Board, index: usize) -> Option<Board> {
        if index >= board.cell_count() {
            return Some(board);
        }

        let (left, above) = Self::neighbours(&board, index);
        let options: Vec<OrientedView> = board.candidates(index).collect();
        for option in options {
            if !fits(self.store, left.as_ref(), above.as_ref(), &option) {
                self.stats.rejected_candidates += 1;
                continue;
            }
            if let Some(next) = self.branch(&board, index, option) {
                if let Some(solved) = self.solve_from(next, index + 1) {
                    return Some(solved);
                }
            }
        }
        None
    }

    fn collect_from(
        &mut self,
        board: Board,
        index: usize,
        limit: usize,
        solutions: &mut Vec<Board>,
    ) {
        if index >= board.cell_count() {
            solutions.push(board);
            return;
        }

        let (left, above) = Self::neighbours(&board, index);
        let options: Vec<OrientedView> = board.candidates(index).collect();
        for option in options {
            if solutions.len() >= limit {
                return;
            }
            if !fits(self.store, left.as_ref(), above.as_ref(), &option) {
                self.stats.rejected_candidates += 1;
                continue;
            }
            if let Some(next) = self.branch(&board, index, option) {
                self.collect_from(next, index + 1, limit, solutions);
            }
        }
    }

    fn neighbours(board: &Board, index: usize) -> (Option<OrientedView>, Option<OrientedView>) {
        let side = board.side();
        let left = (index % side > 0)
            .then(|| board.resolved(index - 1))
            .flatten();
        let above = (index >= side)
            .then(|| board.resolved(index - side))
            .flatten();
        (left, above)
    }

    /// Clone the board with `option` pinned at `index` and propagated,
    /// or `None` when propagation empties a later cell
    fn branch(&mut self, board: &Board, index: usize, option: OrientedView) -> Option<Board> {
        self.stats.branches += 1;
        if let Some(progress) = &self.progress {
            progress.record(&self.stats);
        }

        let mut next = board.clone();
        if !next.pin(index, option) {
            return None;
        }
        match propagate_placement(&mut next, index, option.tile_id) {
            Propagation::Consistent { .. } => {
                self.stats.deepest_cell = self.stats.deepest_cell.max(index + 1);
                Some(next)
            }
            Propagation::Contradiction { cell } => {
                self.stats.contradictions += 1;
                trace!(
                    "Tile {} at cell {index} empties cell {cell}",
                    option.tile_id
                );
                None
            }
        }
    }

    fn finish_progress(&self) {
        if let Some(progress) = &self.progress {
            progress.finish(&self.stats);
        }
    }
}
