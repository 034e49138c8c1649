//! End-to-end reassembly: solve the layout, assemble the image, scan it

use log::{info, warn};

use crate::algorithm::solver::{BoardSolver, SearchStats};
use crate::analysis::patterns::{Pattern, ScanReport};
use crate::io::configuration::{BOARD_SYMMETRIES, UNIQUENESS_PROBE_LIMIT};
use crate::io::error::{PuzzleError, Result};
use crate::io::progress::SearchProgress;
use crate::spatial::assembly::{AssembledImage, Bitmap};
use crate::spatial::grid::Board;
use crate::spatial::tiles::{TileId, TileStore};

/// Runtime options for a reassembly run
#[derive(Debug, Clone, Default)]
pub struct AlgorithmConfig {
    /// Pattern searched for in the assembled image
    pub pattern: Pattern,
    /// Enumerate solutions to detect ambiguous puzzles
    pub check_uniqueness: bool,
    /// Draw a spinner while searching
    pub show_progress: bool,
}

/// Everything derived from a solved puzzle
#[derive(Debug, Clone)]
pub struct Reassembly {
    /// The solved board
    pub board: Board,
    /// Top-left tile id
    pub top_left: TileId,
    /// Product of the four corner tile ids
    pub corner_product: u64,
    /// Assembled image in canonical orientation
    pub image: Bitmap,
    /// Pattern scan outcome, `None` when no orientation contains the pattern
    pub scan: Option<ScanReport>,
    /// Cells of the pattern the scan searched for
    pub pattern_cells: usize,
    /// Solver work counters
    pub stats: SearchStats,
    /// Layouts found when uniqueness was checked
    pub solution_count: Option<usize>,
}

impl Reassembly {
    /// Roughness of the image
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The pattern was not found in any orientation, which is distinct
    ///   from a roughness of zero
    /// - Overlapping occurrences claim more pixels than are set
    pub fn roughness(&self) -> Result<usize> {
        self.scan
            .as_ref()
            .ok_or(PuzzleError::NoPatternMatch {
                pattern_cells: self.pattern_cells,
            })?
            .roughness()
    }
}

/// Drives the full pipeline over one tile store
pub struct JigsawExecutor<'a> {
    store: &'a TileStore,
    config: AlgorithmConfig,
}

impl<'a> JigsawExecutor<'a> {
    /// Create an executor over a parsed tile store
    pub const fn new(store: &'a TileStore, config: AlgorithmConfig) -> Self {
        Self { store, config }
    }

    /// Solve the layout only
    ///
    /// # Errors
    ///
    /// Returns an error if the board cannot be built or no layout exists
    pub fn solve(&self) -> Result<(Board, SearchStats)> {
        let board = Board::new(self.store)?;
        let mut solver = BoardSolver::new(self.store).with_progress(self.progress());
        let solved = solver.solve(board);
        let stats = solver.stats();
        solved
            .map(|board| (board, stats))
            .ok_or(PuzzleError::NoSolution {
                tiles: self.store.len(),
                branches: stats.branches,
            })
    }

    /// Run the whole pipeline
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No layout exists for the tiles
    /// - The solved board cannot be assembled
    /// - The corner id product overflows
    pub fn run(&self) -> Result<Reassembly> {
        info!(
            "Reassembling {} tiles of side {} into a {side}x{side} board",
            self.store.len(),
            self.store.tile_side(),
            side = self.store.board_side()
        );
        let (board, stats) = self.solve()?;
        info!(
            "Layout found after {} branches ({} dead ends)",
            stats.branches, stats.contradictions
        );

        let solution_count = self
            .config
            .check_uniqueness
            .then(|| self.count_solutions())
            .transpose()?;

        let top_left = board
            .resolved_at(0, 0)
            .map(|view| view.tile_id)
            .ok_or(PuzzleError::UnsolvedBoard { cell: 0 })?;
        let corner_product = board.corner_product()?;

        let image = AssembledImage::new(&board, self.store)?.to_bitmap();
        let scan = self.config.pattern.scan(&image);
        match &scan {
            Some(report) => match report.roughness() {
                Ok(roughness) => info!(
                    "Found {} pattern occurrence(s), roughness {roughness}",
                    report.matches()
                ),
                Err(e) => warn!("{e}"),
            },
            None => warn!("Pattern not found in any orientation"),
        }

        Ok(Reassembly {
            board,
            top_left,
            corner_product,
            image,
            scan,
            pattern_cells: self.config.pattern.cell_count(),
            stats,
            solution_count,
        })
    }

    fn count_solutions(&self) -> Result<usize> {
        let board = Board::new(self.store)?;
        let mut solver = BoardSolver::new(self.store).with_progress(self.progress());
        let count = solver
            .find_solutions(board, UNIQUENESS_PROBE_LIMIT)
            .len();
        if count > BOARD_SYMMETRIES {
            warn!(
                "Puzzle admits at least {count} layouts; more than the {BOARD_SYMMETRIES} board symmetries, so the picture is ambiguous"
            );
        } else {
            info!("Puzzle admits {count} layout(s)");
        }
        Ok(count)
    }

    fn progress(&self) -> SearchProgress {
        if self.config.show_progress {
            SearchProgress::new()
        } else {
            SearchProgress::hidden()
        }
    }
}
