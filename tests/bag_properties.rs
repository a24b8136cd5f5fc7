//! Property-based tests for bag invariants

use arraybag::{ArrayBag, BagInterface};
use proptest::prelude::*;

fn filled(capacity: usize, entries: &[u8]) -> ArrayBag<u8> {
    let mut bag = ArrayBag::with_seed(capacity, 11).unwrap();
    for &entry in entries {
        bag.add(entry);
    }
    bag
}

proptest! {
    #[test]
    fn size_tracks_successful_adds(capacity in 1usize..40, entries in prop::collection::vec(0u8..10, 0..60)) {
        let mut bag: ArrayBag<u8> = ArrayBag::with_seed(capacity, 0).unwrap();
        let mut accepted = 0;
        for entry in entries {
            if bag.add(entry) {
                accepted += 1;
            }
            prop_assert_eq!(bag.size(), accepted);
        }
        prop_assert!(accepted <= capacity);
        if bag.is_full() {
            prop_assert!(!bag.add(0));
            prop_assert_eq!(bag.size(), capacity);
        }
    }

    #[test]
    fn contains_iff_positive_frequency(entries in prop::collection::vec(0u8..8, 0..30), probe in 0u8..8) {
        let bag = filled(30, &entries);
        prop_assert_eq!(bag.contains(&probe), bag.frequency_of(&probe) > 0);
    }

    #[test]
    fn remove_keeps_other_copies(entries in prop::collection::vec(0u8..5, 1..30), probe in 0u8..5) {
        let mut bag = filled(30, &entries);
        let before = bag.frequency_of(&probe);
        prop_assert_eq!(bag.remove(&probe), before > 0);
        prop_assert_eq!(bag.contains(&probe), before > 1);
        prop_assert_eq!(bag.frequency_of(&probe), before.saturating_sub(1));
    }

    #[test]
    fn clear_always_empties(entries in prop::collection::vec(any::<u8>(), 0..25)) {
        let mut bag = filled(25, &entries);
        bag.clear();
        prop_assert!(bag.is_empty());
        prop_assert_eq!(bag.to_vec().len(), 0);
    }

    #[test]
    fn duplicate_all_doubles_or_leaves_unchanged(capacity in 1usize..30, entries in prop::collection::vec(0u8..6, 0..30)) {
        let mut bag = filled(capacity, &entries);
        let before = bag.clone();
        let n = bag.size();
        if capacity >= 2 * n {
            prop_assert!(bag.duplicate_all());
            for value in 0u8..6 {
                prop_assert_eq!(bag.frequency_of(&value), 2 * before.frequency_of(&value));
            }
        } else {
            prop_assert!(!bag.duplicate_all());
            prop_assert_eq!(bag.to_vec(), before.to_vec());
        }
    }

    #[test]
    fn add_all_fills_up_to_capacity(
        capacity in 1usize..20,
        mine in prop::collection::vec(0u8..6, 0..20),
        theirs in prop::collection::vec(0u8..6, 0..20),
    ) {
        let mut bag = filled(capacity, &mine);
        let other = filled(20, &theirs);
        let original = bag.size();
        let ok = bag.add_all(&other);
        prop_assert_eq!(ok, original + other.size() <= capacity);
        prop_assert_eq!(bag.size(), capacity.min(original + other.size()));
    }

    #[test]
    fn snapshot_round_trip_restores_equal_bag(entries in prop::collection::vec(0u8..6, 0..25), removals in 0usize..10) {
        let mut bag = filled(25, &entries);
        for _ in 0..removals {
            bag.remove_any();
        }
        let reference = bag.clone();
        let snapshot = bag.to_vec();
        prop_assert_eq!(snapshot.len(), bag.size());

        bag.clear();
        for entry in snapshot.into_iter().rev() {
            bag.add(entry);
        }
        prop_assert_eq!(&bag, &reference);
    }

    #[test]
    fn remove_duplicates_leaves_distinct_values(entries in prop::collection::vec(0u8..6, 0..25)) {
        let mut bag = filled(25, &entries);
        bag.remove_duplicates();
        let mut distinct = entries.clone();
        distinct.sort_unstable();
        distinct.dedup();
        prop_assert_eq!(bag.size(), distinct.len());
        for value in distinct {
            prop_assert_eq!(bag.frequency_of(&value), 1);
        }
    }

    #[test]
    fn split_preserves_entries(entries in prop::collection::vec(0u8..6, 0..25)) {
        let bag = filled(25, &entries);
        let mut first = filled(25, &[]);
        let mut second = filled(25, &[]);
        prop_assert!(bag.split_into(&mut first, &mut second));
        prop_assert_eq!(first.size(), (bag.size() + 1) / 2);
        prop_assert_eq!(second.size(), bag.size() / 2);
        prop_assert!(first.add_all(&second));
        prop_assert_eq!(&first, &bag);
    }
}

#[test]
fn test_mode_examples() {
    assert_eq!(filled(10, &[1, 1, 2, 2, 3]).mode(), None);
    assert_eq!(filled(10, &[1, 1, 1, 2, 2, 3]).mode(), Some(1));
}

#[test]
fn test_equality_examples() {
    assert_eq!(filled(10, &[1, 2, 2, 3]), filled(10, &[3, 2, 1, 2]));
    assert_ne!(filled(10, &[1, 1, 2]), filled(10, &[1, 2, 2]));
}
