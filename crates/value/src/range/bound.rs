//! Scalars a [`Range`](super::Range) can span

use crate::core::Element;
use crate::scalar::{Float, Integer};

mod sealed {
    pub trait Sealed {}

    impl Sealed for crate::scalar::Integer {}
    impl Sealed for crate::scalar::Float {}
}

/// Ordered numeric scalar usable as a range endpoint
///
/// Implemented for [`Integer`] and [`Float`] only.
pub trait RangeBound: sealed::Sealed + Element + Copy + PartialOrd {
    /// Unit step of `each`
    fn one() -> Self;

    /// `self + step`, `None` when the result is not representable
    fn step_up(self, step: Self) -> Option<Self>;

    /// `self - step`, `None` when the result is not representable
    fn step_down(self, step: Self) -> Option<Self>;

    /// `self` moved `n` steps of `step` toward larger values when
    /// `ascending`, toward smaller ones otherwise; `None` when the result is
    /// not representable
    fn advance(self, step: Self, n: u64, ascending: bool) -> Option<Self>;

    /// Whether `self` can drive a walk (strictly positive)
    fn is_valid_step(self) -> bool;

    /// How many values a unit walk from `lo` up to `hi` visits
    fn walk_len(lo: Self, hi: Self, exclusive: bool) -> usize;
}

impl RangeBound for Integer {
    fn one() -> Self {
        Integer::new(1)
    }

    fn step_up(self, step: Self) -> Option<Self> {
        self.checked_add(step)
    }

    fn step_down(self, step: Self) -> Option<Self> {
        self.checked_sub(step)
    }

    fn advance(self, step: Self, n: u64, ascending: bool) -> Option<Self> {
        let offset = i128::from(step.value()).checked_mul(i128::from(n))?;
        let start = i128::from(self.value());
        let value = if ascending {
            start.checked_add(offset)?
        } else {
            start.checked_sub(offset)?
        };
        i64::try_from(value).ok().map(Integer::new)
    }

    fn is_valid_step(self) -> bool {
        self.is_positive()
    }

    fn walk_len(lo: Self, hi: Self, exclusive: bool) -> usize {
        let span = (i128::from(hi.value()) - i128::from(lo.value())).unsigned_abs();
        let len = if exclusive { span } else { span + 1 };
        usize::try_from(len).unwrap_or(usize::MAX)
    }
}

impl RangeBound for Float {
    fn one() -> Self {
        Float::new(1.0)
    }

    fn step_up(self, step: Self) -> Option<Self> {
        self.checked_add(step)
    }

    fn step_down(self, step: Self) -> Option<Self> {
        self.checked_sub(step)
    }

    fn advance(self, step: Self, n: u64, ascending: bool) -> Option<Self> {
        if n == 0 {
            return Some(self);
        }
        let offset = n as f64 * step.value();
        let value = if ascending {
            self.value() + offset
        } else {
            self.value() - offset
        };
        value.is_finite().then_some(Float::new(value))
    }

    fn is_valid_step(self) -> bool {
        self.is_positive() && self.is_finite()
    }

    /// `1.0..2.5` visits 1.0 and 2.0; `1.0...3.0` visits 1.0 and 2.0
    ///
    /// Counts the same values [`RangeIter`](super::RangeIter) yields,
    /// including a walk cut short where `lo + k` stops moving.
    fn walk_len(lo: Self, hi: Self, exclusive: bool) -> usize {
        let (lo, hi) = (lo.value(), hi.value());
        let at = |k: u64| if k == 0 { lo } else { lo + k as f64 };
        let inside = |k: u64| if exclusive { at(k) < hi } else { at(k) <= hi };
        let stalls = |k: u64| {
            let value = at(k);
            !value.is_finite() || value <= at(k - 1)
        };

        let in_bounds = first_failing(inside);
        // Consecutive values can only collide near the start (below -2^53)
        // or once the walk reaches 2^52 and 2^53, within a few steps of each.
        let starts = [
            1,
            first_failing(|k| at(k) < PRECISE),
            first_failing(|k| at(k) < 2.0 * PRECISE),
        ];
        let stalled = starts
            .into_iter()
            .filter_map(|start| {
                let from = start.saturating_sub(1).max(1);
                (from..=from.saturating_add(STALL_WINDOW)).find(|&k| stalls(k))
            })
            .min()
            .unwrap_or(u64::MAX);

        usize::try_from(in_bounds.min(stalled)).unwrap_or(usize::MAX)
    }
}

/// 2^52, below which every `lo + k` is distinct
const PRECISE: f64 = 4_503_599_627_370_496.0;

const STALL_WINDOW: u64 = 4;

/// Smallest `k` for which `holds` is false, given `holds` is true up to
/// some point and false after it; `u64::MAX` when it never fails
fn first_failing(holds: impl Fn(u64) -> bool) -> u64 {
    if holds(u64::MAX) {
        return u64::MAX;
    }
    let (mut lo, mut hi) = (0u64, u64::MAX);
    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        if holds(mid) {
            lo = mid + 1;
        } else {
            hi = mid;
        }
    }
    lo
}
