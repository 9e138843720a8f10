//! Property-based tests for Range

use proptest::prelude::*;
use rubyx_value::{Float, Integer, Range};

fn range(b: i64, e: i64, exclusive: bool) -> Range<Integer> {
    let (b, e) = (Integer::new(b), Integer::new(e));
    if exclusive { Range::exclusive(b, e) } else { Range::new(b, e) }
}

proptest! {
    #[test]
    fn ascending_size_matches_walk(b in -500i64..500, len in 0i64..200, exclusive in any::<bool>()) {
        let r = range(b, b + len, exclusive);
        prop_assert_eq!(r.size(), r.iter().count());
        prop_assert_eq!(r.to_array().length(), r.size());
    }

    #[test]
    fn walk_stays_inside(b in -500i64..500, e in -500i64..500, exclusive in any::<bool>()) {
        let r = range(b, e, exclusive);
        for v in &r {
            prop_assert!(r.include(v));
        }
    }

    #[test]
    fn reverse_walk_mirrors_inclusive(b in -300i64..300, e in -300i64..300) {
        let r = range(b, e, false);
        let mut forward: Vec<Integer> = r.iter().collect();
        forward.reverse();
        let backward: Vec<Integer> = r.reverse().iter().collect();
        prop_assert_eq!(forward, backward);
    }

    #[test]
    fn step_visits_every_nth(b in -200i64..200, len in 0i64..200, step in 1i64..10) {
        let r = range(b, b + len, false);
        let mut stepped = Vec::new();
        r.step(Integer::new(step), |v| stepped.push(v));
        let expected: Vec<Integer> = r.iter().step_by(step as usize).collect();
        prop_assert_eq!(stepped, expected);
    }

    #[test]
    fn non_positive_step_is_noop(b in -50i64..50, e in -50i64..50, step in -5i64..=0) {
        let mut calls = 0;
        range(b, e, false).step(Integer::new(step), |_| calls += 1);
        prop_assert_eq!(calls, 0);
    }

    #[test]
    fn include_matches_bounds(b in -100i64..100, e in -100i64..100, x in -150i64..150) {
        let r = range(b, e, false);
        let (lo, hi) = (b.min(e), b.max(e));
        prop_assert_eq!(r.include(Integer::new(x)), lo <= x && x <= hi);
        prop_assert_eq!(r.cover(Integer::new(x)), r.include(Integer::new(x)));
    }

    #[test]
    fn contains_implies_overlap(
        a in -100i64..100, b in -100i64..100,
        c in -100i64..100, d in -100i64..100,
    ) {
        let outer = range(a.min(b), a.max(b), false);
        let inner = range(c.min(d), c.max(d), false);
        if outer.contains(&inner) {
            prop_assert!(outer.overlap(&inner));
        }
        prop_assert_eq!(outer.overlap(&inner), inner.overlap(&outer));
    }
}

// ===== FLOAT RANGES =====

fn float_range(b: f64, e: f64, exclusive: bool) -> Range<Float> {
    let (b, e) = (Float::new(b), Float::new(e));
    if exclusive { Range::exclusive(b, e) } else { Range::new(b, e) }
}

/// 2^52: from here on `x + 1.0` can round back onto `x`
const IMPRECISE_FROM: f64 = 4_503_599_627_370_496.0;

proptest! {
    #[test]
    fn float_size_matches_walk(b in -1.0e6f64..1.0e6, len in 0.0f64..200.0, exclusive in any::<bool>()) {
        let r = float_range(b, b + len, exclusive);
        prop_assert_eq!(r.size(), r.iter().count());
        prop_assert_eq!(r.to_array().length(), r.size());
    }

    #[test]
    fn float_tenths_size_matches_walk(b in -2_000i64..2_000, len in 1i64..400, exclusive in any::<bool>()) {
        let begin = b as f64 / 10.0;
        let r = float_range(begin, begin + len as f64 / 10.0, exclusive);
        prop_assert_eq!(r.size(), r.iter().count());
    }

    #[test]
    fn float_walk_stays_inside(b in -1.0e3f64..1.0e3, e in -1.0e3f64..1.0e3, exclusive in any::<bool>()) {
        let r = float_range(b, e, exclusive);
        for v in r.iter().take(5_000) {
            prop_assert!(r.include(v));
        }
    }

    #[test]
    fn float_step_visits_every_nth(b in -1.0e6f64..1.0e6, len in 0.0f64..200.0, step in 1u32..10) {
        let r = float_range(b, b + len, false);
        let mut stepped = Vec::new();
        r.step(Float::new(f64::from(step)), |v| stepped.push(v));
        let expected: Vec<Float> = r.iter().step_by(step as usize).collect();
        prop_assert_eq!(stepped, expected);
    }

    #[test]
    fn float_walk_at_large_magnitudes_terminates(
        b in IMPRECISE_FROM - 64.0..IMPRECISE_FROM * 8.0,
        len in 0.0f64..64.0,
        negate in any::<bool>(),
        exclusive in any::<bool>(),
    ) {
        let (b, e) = if negate { (-b - len, -b) } else { (b, b + len) };
        let r = float_range(b, e, exclusive);
        let walked: Vec<Float> = r.iter().take(1_000).collect();
        prop_assert!(walked.len() <= 65);
        prop_assert_eq!(r.size(), walked.len());
        prop_assert!(walked.windows(2).all(|w| w[0] < w[1]));
        prop_assert!(r.reverse().iter().take(1_000).count() <= 65);
    }

    #[test]
    fn float_tiny_step_terminates(b in -1.0e6f64..1.0e6, len in 0.0f64..10.0) {
        let r = float_range(b, b + len, false);
        prop_assert_eq!(r.step_iter(Float::new(f64::MIN_POSITIVE)).take(10).count(), 1);
    }
}
