//! Property-based tests for collection types (Array, Hash)

use proptest::prelude::*;
use rubyx_value::{Array, CountArg, Hash, Integer, Text};

fn ints(items: &[i64]) -> Array<Integer> {
    items.iter().copied().map(Integer::new).collect()
}

fn hash_of(entries: &[(String, i64)]) -> Hash<Text, Integer> {
    entries
        .iter()
        .map(|(k, v)| (Text::from(k.as_str()), Integer::new(*v)))
        .collect()
}

// ===== ARRAY PROPERTIES =====

proptest! {
    #[test]
    fn array_reverse_is_involution(items in prop::collection::vec(any::<i64>(), 0..100)) {
        let array = ints(&items);
        prop_assert_eq!(array.reverse().reverse(), array);
    }

    #[test]
    fn array_take_length_is_clamped(items in prop::collection::vec(any::<i64>(), 0..50), n in -20i64..80) {
        let array = ints(&items);
        let expected = (n.max(0) as usize).min(array.length());
        prop_assert_eq!(array.take(n).length(), expected);
    }

    #[test]
    fn array_take_then_drop_restores(items in prop::collection::vec(any::<i64>(), 0..50), n in 0i64..60) {
        let array = ints(&items);
        let mut rebuilt = array.take(n);
        rebuilt.extend(array.drop(n));
        prop_assert_eq!(rebuilt, array);
    }

    #[test]
    fn array_select_reject_partition(items in prop::collection::vec(-1000i64..1000, 0..100)) {
        let array = ints(&items);
        let selected = array.select(Integer::is_even);
        let rejected = array.reject(Integer::is_even);

        prop_assert_eq!(selected.length() + rejected.length(), array.length());
        prop_assert!(selected.all(Integer::is_even));
        prop_assert!(rejected.none(Integer::is_even));
        prop_assert_eq!(selected.length(), array.count(CountArg::Predicate(&|x: &Integer| x.is_even())));
    }

    #[test]
    fn array_sort_is_ordered_permutation(items in prop::collection::vec(any::<i64>(), 0..100)) {
        let sorted = ints(&items).sort();
        let mut expected = items.clone();
        expected.sort_unstable();
        prop_assert_eq!(sorted, ints(&expected));
    }

    #[test]
    fn array_uniq_has_no_duplicates(items in prop::collection::vec(0i64..10, 0..60)) {
        let unique = ints(&items).uniq();
        for (i, x) in unique.iter().enumerate() {
            prop_assert_eq!(unique.index(x), Some(i));
        }
        prop_assert!(ints(&items).all(|x| unique.include(x)));
    }

    #[test]
    fn array_chunk_preserves_elements(items in prop::collection::vec(any::<i64>(), 0..60), size in 1i64..10) {
        let array = ints(&items);
        let groups = array.chunk(size);
        prop_assert_eq!(groups.len(), array.length().div_ceil(size as usize));
        prop_assert!(groups.iter().all(|g| g.length() <= size as usize && !g.is_empty()));
        let flattened: Array<Integer> = groups.into_iter().flatten().collect();
        prop_assert_eq!(flattened, array);
    }

    #[test]
    fn array_cycle_length(items in prop::collection::vec(any::<i64>(), 0..20), n in -3i64..6) {
        let array = ints(&items);
        let expected = array.length() * n.max(0) as usize;
        prop_assert_eq!(array.cycle(n).length(), expected);
    }

    #[test]
    fn array_rotate_round_trips(items in prop::collection::vec(any::<i64>(), 0..40), k in -100i64..100) {
        let array = ints(&items);
        prop_assert_eq!(array.rotate(k).rotate(-k), array.clone());
        prop_assert_eq!(array.rotate(k).length(), array.length());
    }

    #[test]
    fn array_push_leaves_original_unchanged(items in prop::collection::vec(any::<i64>(), 0..50), new_val in any::<i64>()) {
        let original = ints(&items);
        let pushed = original.push(Integer::new(new_val));

        prop_assert_eq!(original.length(), items.len());
        prop_assert_eq!(pushed.last(), Some(&Integer::new(new_val)));
        let (popped, rest) = pushed.pop();
        prop_assert_eq!(popped, Some(Integer::new(new_val)));
        prop_assert_eq!(rest, original);
    }
}

// ===== HASH PROPERTIES =====

proptest! {
    #[test]
    fn hash_merge_with_empty_is_identity(entries in prop::collection::vec(("[a-z]{1,4}", any::<i64>()), 0..30)) {
        let h = hash_of(&entries);
        prop_assert_eq!(h.merge(&Hash::new()), h.clone());
        prop_assert_eq!(Hash::new().merge(&h), h);
    }

    #[test]
    fn hash_select_reject_complement(entries in prop::collection::vec(("[a-z]{1,4}", -100i64..100), 0..30)) {
        let h = hash_of(&entries);
        let positive = h.select(|_, v| v.is_positive());
        let rest = h.reject(|_, v| v.is_positive());

        prop_assert_eq!(positive.length() + rest.length(), h.length());
        prop_assert_eq!(positive.merge(&rest), h);
    }

    #[test]
    fn hash_merge_prefers_other(
        left in prop::collection::vec(("[a-c]", any::<i64>()), 0..10),
        right in prop::collection::vec(("[a-c]", any::<i64>()), 0..10),
    ) {
        let l = hash_of(&left);
        let r = hash_of(&right);
        let merged = l.merge(&r);
        for (k, v) in &r {
            prop_assert_eq!(merged.fetch(k), Ok(v));
        }
    }

    #[test]
    fn hash_invert_twice_keeps_unique_values(keys in prop::collection::hash_set("[a-z]{1,5}", 0..20)) {
        let h: Hash<Text, Integer> = keys
            .iter()
            .enumerate()
            .map(|(i, k)| (Text::from(k.as_str()), Integer::new(i as i64)))
            .collect();
        prop_assert_eq!(h.invert().invert(), h);
    }
}
