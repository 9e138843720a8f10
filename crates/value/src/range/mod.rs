//! Ruby-style ranges over [`Integer`](crate::Integer) and [`Float`](crate::Float)
//!
//! A range runs from `begin` to `end` and may exclude its end. Direction is
//! never stored: a range whose `begin` is greater than its `end` walks
//! downward.
//!
//! ```
//! use rubyx_value::{Integer, Range};
//!
//! let up = Range::new(Integer::new(1), Integer::new(4));
//! let down = Range::exclusive(Integer::new(4), Integer::new(1));
//!
//! let walk = |r: &Range<Integer>| r.iter().map(|i| i.value()).collect::<Vec<_>>();
//! assert_eq!(walk(&up), vec![1, 2, 3, 4]);
//! assert_eq!(walk(&down), vec![4, 3, 2]);
//! assert_eq!(up.to_string(), "1..4");
//! ```
//!
//! Walks use checked arithmetic, so a range ending at `i64::MAX` terminates.
//! A float walk ends at the first value that cannot move past the previous
//! one, as happens beyond 2^53 or with a step too small to register.

pub mod bound;
pub mod iter;

pub use bound::RangeBound;
pub use iter::RangeIter;

use std::fmt;

use crate::collections::Array;
use crate::scalar::Text;

/// Interval between two numeric scalars
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Range<T: RangeBound> {
    begin: T,
    end: T,
    exclusive: bool,
}

impl<T: RangeBound> Range<T> {
    /// `begin..end`, end included
    pub const fn new(begin: T, end: T) -> Self {
        Self {
            begin,
            end,
            exclusive: false,
        }
    }

    /// `begin...end`, end excluded
    pub const fn exclusive(begin: T, end: T) -> Self {
        Self {
            begin,
            end,
            exclusive: true,
        }
    }

    /// `begin <= end`
    pub fn is_ascending(&self) -> bool {
        self.begin <= self.end
    }

    // ==================== Bounds ====================

    pub const fn begin_value(&self) -> T {
        self.begin
    }

    pub const fn end_value(&self) -> T {
        self.end
    }

    pub const fn is_exclusive(&self) -> bool {
        self.exclusive
    }

    pub const fn is_inclusive(&self) -> bool {
        !self.exclusive
    }

    /// The begin value
    pub const fn first(&self) -> T {
        self.begin
    }

    /// The last value a unit walk reaches: `end`, or one step short of it
    /// when exclusive
    pub fn last(&self) -> T {
        if !self.exclusive {
            return self.end;
        }
        let stepped = if self.is_ascending() {
            self.end.step_down(T::one())
        } else {
            self.end.step_up(T::one())
        };
        stepped.unwrap_or(self.end)
    }

    /// The lower of the two bounds
    pub fn min(&self) -> T {
        if self.is_ascending() { self.begin } else { self.end }
    }

    /// The upper of the two bounds
    pub fn max(&self) -> T {
        if self.is_ascending() { self.end } else { self.begin }
    }

    // ==================== Size ====================

    /// `begin > end`, or exclusive with `begin == end`
    ///
    /// A descending range counts as empty even though [`each`](Self::each)
    /// walks it downward.
    pub fn is_empty(&self) -> bool {
        self.begin > self.end || (self.exclusive && self.begin == self.end)
    }

    /// `|end - begin| + 1`, one less when exclusive, `0` when empty
    ///
    /// Float ranges count the values a unit walk visits.
    pub fn size(&self) -> usize {
        if self.is_empty() {
            return 0;
        }
        T::walk_len(self.begin, self.end, self.exclusive)
    }

    /// Alias of [`size`](Self::size)
    pub fn length(&self) -> usize {
        self.size()
    }

    // ==================== Membership ====================

    /// Whether `value` lies between the bounds, honouring direction and
    /// exclusivity
    pub fn include(&self, value: T) -> bool {
        let (lo, hi) = if self.is_ascending() {
            (self.begin, self.end)
        } else {
            (self.end, self.begin)
        };
        let end_ok = match (self.exclusive, self.is_ascending()) {
            (false, _) => true,
            (true, true) => value < self.end,
            (true, false) => value > self.end,
        };
        lo <= value && value <= hi && end_ok
    }

    /// Alias of [`include`](Self::include)
    pub fn cover(&self, value: T) -> bool {
        self.include(value)
    }

    /// Whether two ranges of the same direction share any point
    ///
    /// Ranges of opposite direction never overlap. Exclusivity is ignored.
    pub fn overlap(&self, other: &Self) -> bool {
        match (self.is_ascending(), other.is_ascending()) {
            (true, true) => self.begin <= other.end && other.begin <= self.end,
            (false, false) => self.end <= other.begin && other.end <= self.begin,
            _ => false,
        }
    }

    /// Whether `other` lies within this range; both must share a direction
    pub fn contains(&self, other: &Self) -> bool {
        match (self.is_ascending(), other.is_ascending()) {
            (true, true) => self.begin <= other.begin && self.end >= other.end,
            (false, false) => self.begin >= other.begin && self.end <= other.end,
            _ => false,
        }
    }

    // ==================== Iteration ====================

    /// Unit walk from begin toward end
    pub fn iter(&self) -> RangeIter<T> {
        RangeIter::new(self, T::one())
    }

    /// Walk by `step`; a zero or negative step yields nothing
    pub fn step_iter(&self, step: T) -> RangeIter<T> {
        if !step.is_valid_step() {
            rubyx_log::trace!(%step, range = %self, "range step is not positive");
        }
        RangeIter::new(self, step)
    }

    pub fn each<F: FnMut(T)>(&self, f: F) {
        self.iter().for_each(f);
    }

    /// Like [`each`](Self::each), with the walk position as second argument
    pub fn each_with_index<F: FnMut(T, usize)>(&self, mut f: F) {
        for (i, v) in self.iter().enumerate() {
            f(v, i);
        }
    }

    /// Call `f` on every `step`-th value of the walk
    ///
    /// ```
    /// use rubyx_value::{Integer, Range};
    ///
    /// let mut seen = Vec::new();
    /// Range::new(Integer::new(10), Integer::new(1)).step(Integer::new(3), |i| seen.push(i.value()));
    /// assert_eq!(seen, vec![10, 7, 4, 1]);
    /// ```
    pub fn step<F: FnMut(T)>(&self, step: T, f: F) {
        self.step_iter(step).for_each(f);
    }

    /// The values of the unit walk
    pub fn to_array(&self) -> Array<T> {
        self.iter().collect()
    }

    // ==================== Transforms ====================

    /// Swap begin and end, keeping exclusivity
    #[must_use = "immutable methods return a new instance"]
    pub fn reverse(&self) -> Self {
        Self {
            begin: self.end,
            end: self.begin,
            exclusive: self.exclusive,
        }
    }

    pub fn to_s(&self) -> Text {
        Text::new(self.to_string())
    }

    pub fn to_str(&self) -> String {
        self.to_string()
    }
}

impl<T: RangeBound> fmt::Display for Range<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let dots = if self.exclusive { "..." } else { ".." };
        write!(f, "{}{dots}{}", self.begin, self.end)
    }
}

impl<T: RangeBound> IntoIterator for Range<T> {
    type Item = T;
    type IntoIter = RangeIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: RangeBound> IntoIterator for &Range<T> {
    type Item = T;
    type IntoIter = RangeIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scalar::{Float, Integer};
    use pretty_assertions::assert_eq;

    fn r(b: i64, e: i64) -> Range<Integer> {
        Range::new(Integer::new(b), Integer::new(e))
    }

    fn rx(b: i64, e: i64) -> Range<Integer> {
        Range::exclusive(Integer::new(b), Integer::new(e))
    }

    fn walk(range: &Range<Integer>) -> Vec<i64> {
        range.iter().map(|i| i.value()).collect()
    }

    fn stepped(range: &Range<Integer>, step: i64) -> Vec<i64> {
        let mut out = Vec::new();
        range.step(Integer::new(step), |i| out.push(i.value()));
        out
    }

    #[test]
    fn test_each_directions() {
        assert_eq!(walk(&r(1, 5)), vec![1, 2, 3, 4, 5]);
        assert_eq!(walk(&rx(1, 5)), vec![1, 2, 3, 4]);
        assert_eq!(walk(&r(5, 1)), vec![5, 4, 3, 2, 1]);
        assert_eq!(walk(&rx(5, 1)), vec![5, 4, 3, 2]);
        assert_eq!(walk(&r(3, 3)), vec![3]);
        assert!(walk(&rx(3, 3)).is_empty());
    }

    #[test]
    fn test_each_with_index() {
        let mut seen = Vec::new();
        r(10, 12).each_with_index(|v, i| seen.push((v.value(), i)));
        assert_eq!(seen, vec![(10, 0), (11, 1), (12, 2)]);

        let mut total = 0;
        r(1, 4).each(|v| total += v.value());
        assert_eq!(total, 10);
    }

    #[test]
    fn test_step() {
        assert_eq!(stepped(&r(1, 10), 2), vec![1, 3, 5, 7, 9]);
        assert_eq!(stepped(&rx(1, 9), 2), vec![1, 3, 5, 7]);
        assert_eq!(stepped(&r(10, 1), 3), vec![10, 7, 4, 1]);
        assert_eq!(stepped(&rx(10, 1), 3), vec![10, 7, 4]);
        assert!(stepped(&r(1, 10), 0).is_empty());
        assert!(stepped(&r(1, 10), -2).is_empty());
    }

    #[test]
    fn test_walk_terminates_at_i64_bounds() {
        assert_eq!(walk(&r(i64::MAX - 2, i64::MAX)).len(), 3);
        assert_eq!(walk(&r(i64::MIN + 1, i64::MIN)).len(), 2);
        assert_eq!(stepped(&r(i64::MAX - 5, i64::MAX), 4), vec![i64::MAX - 5, i64::MAX - 1]);
    }

    #[test]
    fn test_size_and_empty() {
        assert_eq!(r(1, 5).size(), 5);
        assert_eq!(rx(1, 5).size(), 4);
        assert_eq!(r(0, 0).size(), 1);
        assert_eq!(r(1, 5).length(), 5);
        assert!(r(5, 1).is_empty());
        assert_eq!(r(5, 1).size(), 0);
        assert!(rx(1, 1).is_empty());
        assert!(!r(1, 1).is_empty());
    }

    #[test]
    fn test_include_and_cover() {
        assert!(r(1, 5).include(Integer::new(3)));
        assert!(r(1, 5).include(Integer::new(5)));
        assert!(!r(1, 5).include(Integer::new(6)));
        assert!(!rx(1, 5).include(Integer::new(5)));
        assert!(r(5, 1).include(Integer::new(1)));
        assert!(!rx(5, 1).include(Integer::new(1)));
        assert!(r(5, 1).cover(Integer::new(3)));
        assert!(!r(5, 1).cover(Integer::new(6)));
    }

    #[test]
    fn test_bounds() {
        assert_eq!(r(1, 5).min(), Integer::new(1));
        assert_eq!(r(5, 1).min(), Integer::new(1));
        assert_eq!(r(5, 1).max(), Integer::new(5));
        assert_eq!(r(1, 5).first(), Integer::new(1));
        assert_eq!(r(1, 5).last(), Integer::new(5));
        assert_eq!(rx(1, 5).last(), Integer::new(4));
        assert_eq!(rx(5, 1).last(), Integer::new(2));
        assert_eq!(rx(1, 5).begin_value(), Integer::new(1));
        assert_eq!(rx(1, 5).end_value(), Integer::new(5));
        assert!(rx(1, 5).is_exclusive());
        assert!(r(1, 5).is_inclusive());
    }

    #[test]
    fn test_reverse() {
        assert_eq!(rx(1, 5).reverse(), rx(5, 1));
        assert_eq!(r(1, 5).reverse().reverse(), r(1, 5));
    }

    #[test]
    fn test_overlap() {
        assert!(r(1, 5).overlap(&r(3, 7)));
        assert!(r(1, 5).overlap(&r(5, 9)));
        assert!(!r(1, 5).overlap(&r(6, 9)));
        assert!(r(5, 1).overlap(&r(7, 3)));
        assert!(!r(5, 1).overlap(&r(9, 6)));
        assert!(!r(1, 5).overlap(&r(7, 3)));
    }

    #[test]
    fn test_contains() {
        assert!(r(1, 10).contains(&r(2, 5)));
        assert!(r(1, 10).contains(&r(1, 10)));
        assert!(!r(1, 10).contains(&r(0, 5)));
        assert!(r(10, 1).contains(&r(8, 2)));
        assert!(!r(10, 1).contains(&r(2, 8)));
    }

    #[test]
    fn test_to_array_and_display() {
        assert_eq!(r(1, 3).to_array(), Array::of([1, 2, 3]));
        assert_eq!(r(1, 5).to_string(), "1..5");
        assert_eq!(rx(1, 5).to_str(), "1...5");
        assert_eq!(r(-2, 2).to_s(), "-2..2");
    }

    #[test]
    fn test_float_range() {
        let range = Range::new(Float::new(1.0), Float::new(3.0));
        let mut halves = Vec::new();
        range.step(Float::new(0.5), |f| halves.push(f.value()));
        assert_eq!(halves, vec![1.0, 1.5, 2.0, 2.5, 3.0]);

        let partial = Range::new(Float::new(1.0), Float::new(2.5));
        assert_eq!(partial.to_array(), Array::of([1.0, 2.0]));
        assert_eq!(partial.size(), 2);
        assert!(partial.include(Float::new(2.25)));
        assert_eq!(partial.to_string(), "1..2.5");
        assert_eq!(Range::exclusive(Float::new(1.0), Float::new(2.5)).last(), Float::new(1.5));
    }

    #[test]
    fn test_into_iterator() {
        let sum: i64 = r(1, 3).into_iter().map(|i| i.value()).sum();
        assert_eq!(sum, 6);
        let mut count = 0;
        for _ in &rx(0, 4) {
            count += 1;
        }
        assert_eq!(count, 4);
    }
}
