//! Tests for board construction, candidate slots and corner queries

#[cfg(test)]
mod tests {
    use tilejigsaw::PuzzleError;
    use tilejigsaw::spatial::grid::Board;
    use tilejigsaw::spatial::orientation::{Orientation, OrientedView};

    #[test]
    fn test_new_board_admits_every_candidate() {
        let store = crate::canvas_store();
        let board = Board::new(&store).unwrap();

        assert_eq!(board.side(), 2);
        assert_eq!(board.cell_count(), 4);
        for index in 0..4 {
            let cell = board.cell(index).unwrap();
            assert_eq!(cell.candidates().count(), 32);
            assert!(!cell.is_resolved());
            assert!(!cell.is_empty());
        }
        assert!(board.cell(4).is_none());
        assert!(!board.is_solved());
        assert_eq!(board.first_unresolved(), Some(0));
    }

    #[test]
    fn test_candidates_follow_tile_then_orientation_order() {
        let store = crate::canvas_store();
        let board = Board::new(&store).unwrap();
        let candidates: Vec<OrientedView> = board.candidates(0).collect();

        assert_eq!(candidates.len(), 32);
        assert_eq!(candidates[0], OrientedView::new(1951, Orientation::IDENTITY));
        assert_eq!(candidates[1], OrientedView::new(1951, Orientation::ALL[1]));
        assert_eq!(candidates[8], OrientedView::new(2311, Orientation::IDENTITY));
        assert_eq!(candidates[31], OrientedView::new(3079, Orientation::ALL[7]));
    }

    #[test]
    fn test_slots_round_trip_through_views() {
        let store = crate::canvas_store();
        let board = Board::new(&store).unwrap();
        for slot in 0..32 {
            let view = board.view_of(slot).unwrap();
            assert_eq!(board.slot_of(view), Some(slot));
        }
        assert!(board.view_of(32).is_none());
        assert!(
            board
                .slot_of(OrientedView::new(9999, Orientation::IDENTITY))
                .is_none()
        );
    }

    #[test]
    fn test_index_of_rejects_positions_off_the_board() {
        let store = crate::canvas_store();
        let board = Board::new(&store).unwrap();
        assert_eq!(board.index_of(1, 0), Some(1));
        assert_eq!(board.index_of(0, 1), Some(2));
        assert_eq!(board.index_of(2, 0), None);
        assert_eq!(board.index_of(0, 2), None);
    }

    #[test]
    fn test_pin_resolves_a_cell() {
        let store = crate::canvas_store();
        let mut board = Board::new(&store).unwrap();
        let view = OrientedView::new(2473, Orientation::ALL[6]);

        assert!(board.pin(3, view));
        assert_eq!(board.resolved(3), Some(view));
        assert_eq!(board.resolved_at(1, 1), Some(view));
        assert!(board.resolved(0).is_none());

        let unknown = OrientedView::new(4242, Orientation::IDENTITY);
        assert!(!board.pin(0, unknown));
        assert!(!board.pin(9, view));
        assert_eq!(board.candidates(0).count(), 32, "failed pins leave cells intact");
    }

    #[test]
    fn test_remove_tile_drops_all_orientations() {
        let store = crate::canvas_store();
        let mut board = Board::new(&store).unwrap();

        assert_eq!(board.remove_tile(1, 2311), 8);
        assert_eq!(board.remove_tile(1, 2311), 0);
        assert_eq!(board.remove_tile(1, 4242), 0);
        assert_eq!(board.candidates(1).count(), 24);
        assert!(board.candidates(1).all(|view| view.tile_id != 2311));
    }

    #[test]
    fn test_clones_branch_independently() {
        let store = crate::canvas_store();
        let board = Board::new(&store).unwrap();
        let mut branch = board.clone();
        branch.pin(0, OrientedView::new(1951, Orientation::IDENTITY));

        assert!(branch.cell(0).unwrap().is_resolved());
        assert_eq!(board.candidates(0).count(), 32);
    }

    #[test]
    fn test_solved_board_reports_corners_and_layout() {
        let store = crate::canvas_store();
        let board = crate::canvas_board(&store);

        assert!(board.is_solved());
        assert_eq!(board.first_unresolved(), None);
        let corners = board.corners().unwrap();
        let ids: Vec<u64> = corners.iter().map(|view| view.tile_id).collect();
        assert_eq!(ids, vec![1951, 2311, 3079, 2473]);
        assert_eq!(board.corner_product().unwrap(), 1951 * 2311 * 3079 * 2473);
        assert_eq!(
            board.layout(),
            vec![vec![Some(1951), Some(2311)], vec![Some(3079), Some(2473)]]
        );
    }

    #[test]
    fn test_corner_product_requires_resolved_corners() {
        let store = crate::canvas_store();
        let mut board = Board::new(&store).unwrap();
        board.pin(0, OrientedView::new(1951, Orientation::IDENTITY));

        assert!(board.corners().is_none());
        assert!(matches!(
            board.corner_product(),
            Err(PuzzleError::UnsolvedBoard { cell: 1 })
        ));
        assert_eq!(board.layout()[0], vec![Some(1951), None]);
    }
}
