//! Tests for orientation remaps and oriented tile views

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;
    use tilejigsaw::spatial::orientation::{
        MIRROR, Orientation, OrientedView, QUARTER_TURN_CW, Rotation, Side,
    };

    fn view_pixels(view: OrientedView) -> Vec<bool> {
        let store = crate::canvas_store();
        let side = store.tile_side();
        (0..side)
            .flat_map(|y| (0..side).map(move |x| (x, y)))
            .map(|(x, y)| view.pixel(&store, x, y))
            .collect()
    }

    /// Unordered edge set with each edge read in its smaller direction
    fn normalized_edges(view: OrientedView) -> Vec<Vec<bool>> {
        let store = crate::canvas_store();
        let mut edges: Vec<Vec<bool>> = Side::ALL
            .into_iter()
            .map(|side| {
                let edge = view.edge(&store, side);
                let reversed: Vec<bool> = edge.iter().rev().copied().collect();
                edge.min(reversed)
            })
            .collect();
        edges.sort();
        edges
    }

    #[test]
    fn test_remap_follows_flip_then_rotation() {
        let n = 3;
        // (x, y) = (0, 1) with e = 2
        let expected = [
            (false, Rotation::R0, (0, 1)),
            (false, Rotation::R90, (1, 2)),
            (false, Rotation::R180, (0, 1)),
            (false, Rotation::R270, (1, 0)),
            (true, Rotation::R0, (2, 1)),
            (true, Rotation::R90, (1, 0)),
            (true, Rotation::R180, (2, 1)),
            (true, Rotation::R270, (1, 2)),
        ];
        for (flip, rotation, target) in expected {
            let orientation = Orientation::new(flip, rotation);
            assert_eq!(
                orientation.remap(0, 1, n),
                target,
                "flip={flip} rotation={}",
                rotation.degrees()
            );
        }
    }

    #[test]
    fn test_all_orientations_are_distinct_permutations() {
        let n = 4;
        let mut seen = BTreeSet::new();
        for orientation in Orientation::ALL {
            let image: Vec<(usize, usize)> = (0..n)
                .flat_map(|y| (0..n).map(move |x| (x, y)))
                .map(|(x, y)| orientation.remap(x, y, n))
                .collect();
            let distinct: BTreeSet<_> = image.iter().copied().collect();
            assert_eq!(distinct.len(), n * n, "remap must be a bijection");
            assert!(seen.insert(image), "duplicate orientation {orientation:?}");
        }
        assert_eq!(seen.len(), 8);
    }

    #[test]
    fn test_index_matches_enumeration_order() {
        for (index, orientation) in Orientation::ALL.into_iter().enumerate() {
            assert_eq!(orientation.index(), index);
            assert_eq!(Orientation::from_index(index), Some(orientation));
        }
        assert_eq!(Orientation::from_index(8), None);
        assert_eq!(Orientation::ALL[0], Orientation::IDENTITY);
        assert!(!Orientation::ALL[3].flip);
        assert!(Orientation::ALL[4].flip);
    }

    #[test]
    fn test_then_with_identity_is_neutral() {
        for orientation in Orientation::ALL {
            assert_eq!(orientation.then(Orientation::IDENTITY), orientation);
            assert_eq!(Orientation::IDENTITY.then(orientation), orientation);
        }
    }

    #[test]
    fn test_then_composes_remaps() {
        let n = 5;
        for inner in Orientation::ALL {
            for outer in Orientation::ALL {
                let composed = inner.then(outer);
                for (x, y) in (0..n).flat_map(|y| (0..n).map(move |x| (x, y))) {
                    let (ox, oy) = outer.remap(x, y, n);
                    assert_eq!(
                        composed.remap(x, y, n),
                        inner.remap(ox, oy, n),
                        "inner {inner:?} outer {outer:?} at ({x}, {y})"
                    );
                }
            }
        }
    }

    #[test]
    fn test_rotated_cw_turns_visible_pixels() {
        let store = crate::canvas_store();
        let e = store.tile_side() - 1;
        for orientation in Orientation::ALL {
            let view = OrientedView::new(1951, orientation);
            let turned = view.rotated_cw();
            for y in 0..=e {
                for x in 0..=e {
                    assert_eq!(turned.pixel(&store, x, y), view.pixel(&store, y, e - x));
                }
            }
        }
    }

    #[test]
    fn test_flipped_mirrors_visible_pixels() {
        let store = crate::canvas_store();
        let e = store.tile_side() - 1;
        for orientation in Orientation::ALL {
            let view = OrientedView::new(2311, orientation);
            let mirrored = view.flipped();
            for y in 0..=e {
                for x in 0..=e {
                    assert_eq!(mirrored.pixel(&store, x, y), view.pixel(&store, e - x, y));
                }
            }
        }
    }

    #[test]
    fn test_four_quarter_turns_and_two_flips_restore_pixels() {
        for orientation in Orientation::ALL {
            let view = OrientedView::new(3079, orientation);
            let spun = view.rotated_cw().rotated_cw().rotated_cw().rotated_cw();
            assert_eq!(view_pixels(spun), view_pixels(view));
            assert_eq!(view_pixels(view.flipped().flipped()), view_pixels(view));
        }
        let full_turn = QUARTER_TURN_CW
            .then(QUARTER_TURN_CW)
            .then(QUARTER_TURN_CW)
            .then(QUARTER_TURN_CW);
        assert_eq!(full_turn, Orientation::IDENTITY);
        assert_eq!(MIRROR.then(MIRROR), Orientation::IDENTITY);
    }

    #[test]
    fn test_edge_set_is_invariant_under_orientation() {
        for id in [1951, 2311, 2473, 3079] {
            let canonical = normalized_edges(OrientedView::new(id, Orientation::IDENTITY));
            for orientation in Orientation::ALL {
                assert_eq!(
                    normalized_edges(OrientedView::new(id, orientation)),
                    canonical,
                    "tile {id} in {orientation:?}"
                );
            }
        }
    }

    #[test]
    fn test_edges_read_outer_rows_and_columns() {
        let store = crate::canvas_store();
        let view = OrientedView::new(1951, Orientation::IDENTITY);

        assert_eq!(view.edge_length(&store), 2);
        // Rows "#.#", ".#.", "#.."
        assert_eq!(view.edge(&store, Side::Top), vec![true, false, true]);
        assert_eq!(view.edge(&store, Side::Right), vec![true, false, false]);
        assert_eq!(view.edge(&store, Side::Bottom), vec![true, false, false]);
        assert_eq!(view.edge(&store, Side::Left), vec![true, false, true]);
    }
}
