use std::iter::FusedIterator;

use super::{Range, RangeBound};

/// Lazy walk over a [`Range`]
///
/// The `k`-th value is `begin ± k * step`, upward or downward depending on
/// the range's direction. The walk stops at the end (before it when
/// exclusive), on overflow, or at the first value that does not move past
/// the previous one.
#[derive(Debug, Clone)]
pub struct RangeIter<T: RangeBound> {
    begin: T,
    end: T,
    step: T,
    exclusive: bool,
    ascending: bool,
    /// Position of the next value, `None` once finished
    index: Option<u64>,
    prev: Option<T>,
}

impl<T: RangeBound> RangeIter<T> {
    pub(crate) fn new(range: &Range<T>, step: T) -> Self {
        Self {
            begin: range.begin_value(),
            end: range.end_value(),
            step,
            exclusive: range.is_exclusive(),
            ascending: range.is_ascending(),
            index: step.is_valid_step().then_some(0),
            prev: None,
        }
    }

    fn in_bounds(&self, value: T) -> bool {
        match (self.ascending, self.exclusive) {
            (true, false) => value <= self.end,
            (true, true) => value < self.end,
            (false, false) => value >= self.end,
            (false, true) => value > self.end,
        }
    }

    fn moved_on(&self, value: T) -> bool {
        match self.prev {
            None => true,
            Some(prev) if self.ascending => value > prev,
            Some(prev) => value < prev,
        }
    }
}

impl<T: RangeBound> Iterator for RangeIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        let index = self.index?;
        match self.begin.advance(self.step, index, self.ascending) {
            Some(value) if self.in_bounds(value) && self.moved_on(value) => {
                self.index = index.checked_add(1);
                self.prev = Some(value);
                Some(value)
            }
            _ => {
                self.index = None;
                None
            }
        }
    }
}

impl<T: RangeBound> FusedIterator for RangeIter<T> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scalar::{Float, Integer};
    use pretty_assertions::assert_eq;

    const TWO_POW_53: f64 = 9_007_199_254_740_992.0;

    #[test]
    fn test_float_walk_past_precision_stops() {
        let range = Range::new(Float::new(TWO_POW_53), Float::new(TWO_POW_53 + 4.0));
        let walked: Vec<f64> = range.iter().take(10).map(|f| f.value()).collect();
        assert_eq!(walked, vec![TWO_POW_53]);
        assert_eq!(range.size(), walked.len());
    }

    #[test]
    fn test_tiny_step_stops() {
        let range = Range::new(Float::new(1.0), Float::new(2.0));
        let walked: Vec<Float> = range.step_iter(Float::new(f64::MIN_POSITIVE)).take(10).collect();
        assert_eq!(walked, vec![Float::new(1.0)]);
    }

    #[test]
    fn test_descending_float_walk_past_precision_stops() {
        let range = Range::new(Float::new(-TWO_POW_53), Float::new(-TWO_POW_53 - 8.0));
        assert_eq!(range.iter().take(10).count(), 1);
    }

    #[test]
    fn test_fractional_begin_does_not_drift() {
        let range = Range::new(Float::new(0.1), Float::new(4.1));
        let walked: Vec<f64> = range.iter().map(|f| f.value()).collect();
        assert_eq!(walked.len(), 5);
        assert_eq!(walked.last(), Some(&4.1));
        assert_eq!(range.size(), 5);
    }

    #[test]
    fn test_fused_after_end() {
        let mut it = Range::new(Integer::new(1), Integer::new(2)).iter();
        assert_eq!(it.next(), Some(Integer::new(1)));
        assert_eq!(it.next(), Some(Integer::new(2)));
        assert_eq!(it.next(), None);
        assert_eq!(it.next(), None);
    }

    #[test]
    fn test_integer_walk_ends_at_max() {
        let range = Range::new(Integer::new(i64::MAX - 2), Integer::new(i64::MAX));
        assert_eq!(range.iter().count(), 3);
        let down = Range::new(Integer::new(i64::MIN + 1), Integer::new(i64::MIN));
        assert_eq!(down.iter().count(), 2);
    }
}
