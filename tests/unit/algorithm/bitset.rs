//! Tests for candidate slot bitsets

#[cfg(test)]
mod tests {
    use tilejigsaw::algorithm::bitset::CandidateSet;

    #[test]
    fn test_new_set_is_empty() {
        let set = CandidateSet::new(16);
        assert_eq!(set.capacity(), 16);
        assert!(set.is_empty());
        assert_eq!(set.count(), 0);
        assert_eq!(set.single(), None);
    }

    #[test]
    fn test_all_contains_every_slot() {
        let set = CandidateSet::all(10);
        assert_eq!(set.count(), 10);
        assert!((0..10).all(|slot| set.contains(slot)));
        assert!(!set.contains(10));
        assert_eq!(set.iter().collect::<Vec<_>>(), (0..10).collect::<Vec<_>>());
    }

    #[test]
    fn test_insert_ignores_out_of_range() {
        let mut set = CandidateSet::new(8);
        set.insert(3);
        set.insert(8);
        set.insert(100);
        assert_eq!(set.count(), 1);
        assert!(set.contains(3));
    }

    #[test]
    fn test_retain_only_leaves_single_slot() {
        let mut set = CandidateSet::all(24);
        set.retain_only(17);
        assert_eq!(set.single(), Some(17));
        assert_eq!(set.iter().collect::<Vec<_>>(), vec![17]);

        set.retain_only(99);
        assert!(set.is_empty(), "retaining an unknown slot empties the set");
    }

    #[test]
    fn test_remove_range_counts_present_slots() {
        let mut set = CandidateSet::new(24);
        for slot in [1, 8, 9, 15, 16] {
            set.insert(slot);
        }
        assert_eq!(set.remove_range(8..16), 3);
        assert_eq!(set.iter().collect::<Vec<_>>(), vec![1, 16]);
        assert_eq!(set.remove_range(8..16), 0);
        assert_eq!(set.remove_range(20..40), 0, "ranges are clamped to capacity");
        assert_eq!(set.remove_range(0..40), 2);
        assert!(set.is_empty());
    }

    #[test]
    fn test_single_needs_exactly_one_slot() {
        let mut set = CandidateSet::new(8);
        set.insert(2);
        set.insert(5);
        assert_eq!(set.single(), None);
        set.remove_range(2..3);
        assert_eq!(set.single(), Some(5));
    }

    #[test]
    fn test_display_reports_fill() {
        let mut set = CandidateSet::new(32);
        set.insert(0);
        set.insert(31);
        assert_eq!(set.to_string(), "CandidateSet(2 of 32 slots)");
    }
}
