//! Tests for tile construction and tile store validation

#[cfg(test)]
mod tests {
    use ndarray::Array2;
    use tilejigsaw::PuzzleError;
    use tilejigsaw::spatial::tiles::{Tile, TileStore};

    fn filled(id: u64, side: usize) -> Tile {
        Tile::new(id, Array2::from_elem((side, side), true)).unwrap()
    }

    #[test]
    fn test_tile_rejects_non_square_pixels() {
        let result = Tile::new(7, Array2::from_elem((3, 4), false));
        assert!(matches!(result, Err(PuzzleError::InvalidTile { id: 7, .. })));

        let empty = Tile::new(8, Array2::from_elem((0, 0), false));
        assert!(matches!(empty, Err(PuzzleError::InvalidTile { id: 8, .. })));
    }

    #[test]
    fn test_tile_from_rows_rejects_ragged_rows() {
        let rows = vec![vec![true, false, true], vec![true], vec![false, false, false]];
        let result = Tile::from_rows(11, &rows);
        assert!(matches!(result, Err(PuzzleError::InvalidTile { id: 11, .. })));
    }

    #[test]
    fn test_tile_pixel_access_is_row_major() {
        let rows = vec![
            vec![true, false, false],
            vec![false, false, true],
            vec![false, false, false],
        ];
        let tile = Tile::from_rows(5, &rows).unwrap();

        assert_eq!(tile.id(), 5);
        assert_eq!(tile.side(), 3);
        assert!(tile.pixel(0, 0));
        assert!(tile.pixel(2, 1), "x is the column, y is the row");
        assert!(!tile.pixel(1, 2));
        assert!(!tile.pixel(3, 0), "out of range reads are unset");
    }

    #[test]
    fn test_store_orders_ids_and_derives_board_side() {
        let store = crate::canvas_store();

        assert_eq!(store.len(), 4);
        assert!(!store.is_empty());
        assert_eq!(store.board_side(), 2);
        assert_eq!(store.tile_side(), 3);
        assert_eq!(store.ids().collect::<Vec<_>>(), vec![1951, 2311, 2473, 3079]);
        assert!(store.pixel(1951, 0, 0));
        assert!(!store.pixel(1951, 1, 0));
        assert!(!store.pixel(9999, 0, 0), "unknown tiles read as unset");
        assert!(store.get(2311).is_some());
    }

    #[test]
    fn test_store_rejects_duplicate_ids() {
        let tiles = vec![filled(1, 3), filled(2, 3), filled(3, 3), filled(1, 3)];
        let result = TileStore::new(tiles);
        assert!(matches!(result, Err(PuzzleError::DuplicateTile { id: 1 })));
    }

    #[test]
    fn test_store_rejects_mixed_sides() {
        let tiles = vec![filled(1, 3), filled(2, 4)];
        let result = TileStore::new(tiles);
        assert!(matches!(
            result,
            Err(PuzzleError::InconsistentTileSide {
                id: 2,
                expected: 3,
                found: 4
            })
        ));
    }

    #[test]
    fn test_store_rejects_non_square_counts() {
        let tiles = vec![filled(1, 3), filled(2, 3), filled(3, 3)];
        let result = TileStore::new(tiles);
        assert!(matches!(
            result,
            Err(PuzzleError::NonSquareTileCount { count: 3 })
        ));

        let empty = TileStore::new(Vec::new());
        assert!(matches!(
            empty,
            Err(PuzzleError::NonSquareTileCount { count: 0 })
        ));
    }

    #[test]
    fn test_store_rejects_tiles_without_interior() {
        let tiles = vec![filled(1, 2), filled(2, 2), filled(3, 2), filled(4, 2)];
        let result = TileStore::new(tiles);
        assert!(matches!(
            result,
            Err(PuzzleError::TileTooSmall {
                side: 2,
                minimum: 3
            })
        ));
    }

    #[test]
    fn test_store_accepts_single_tile_board() {
        let store = TileStore::new(vec![filled(42, 5)]).unwrap();
        assert_eq!(store.board_side(), 1);
        assert_eq!(store.tiles().count(), 1);
    }
}
