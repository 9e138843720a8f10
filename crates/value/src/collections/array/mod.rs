//! Array type for rubyx-value
//!
//! [`Array`] is an ordered sequence of one [`Element`] kind with Ruby's
//! combinator set. It is backed by `im::Vector`, so every combinator returns
//! a new array and clones share structure with the receiver.
pub mod count;

pub use count::CountArg;

use std::cmp::Ordering;
use std::fmt;
use std::ops::Index;

use im::Vector;
use rand::Rng;
use rand::seq::SliceRandom;

use crate::core::Element;
use crate::core::limits::ValueLimits;
use crate::error::ValueResult;
use crate::scalar::Text;

/// Persistent array with efficient structural sharing
///
/// Uses `im::Vector` internally which provides:
/// - O(log n) push/pop/get
/// - Cheap clones, so value semantics cost little
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Array<T: Element> {
    inner: Vector<T>,
}

impl<T: Element> Array<T> {
    /// Create an empty array
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: Vector::new(),
        }
    }

    /// Create from a Vec
    #[must_use]
    pub fn from_vec(vec: Vec<T>) -> Self {
        Self {
            inner: Vector::from(vec),
        }
    }

    /// Build from anything convertible into the element type
    ///
    /// ```
    /// use rubyx_value::{Array, Text};
    ///
    /// let names: Array<Text> = Array::of(["ann", "bob"]);
    /// assert_eq!(names.join(", "), "ann, bob");
    /// ```
    pub fn of<I>(items: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<T>,
    {
        items.into_iter().map(Into::into).collect()
    }

    /// Create with length validation
    pub fn with_limits(vec: Vec<T>, limits: &ValueLimits) -> ValueResult<Self> {
        limits.check_array_length(vec.len())?;
        Ok(Self::from_vec(vec))
    }

    fn from_inner(inner: Vector<T>) -> Self {
        Self { inner }
    }

    // ==================== Access ====================

    /// Number of elements
    #[inline]
    pub fn length(&self) -> usize {
        self.inner.len()
    }

    /// Alias of [`length`](Self::length)
    #[inline]
    pub fn size(&self) -> usize {
        self.inner.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Get element at index
    pub fn get(&self, index: usize) -> Option<&T> {
        self.inner.get(index)
    }

    pub fn first(&self) -> Option<&T> {
        self.inner.front()
    }

    pub fn last(&self) -> Option<&T> {
        self.inner.back()
    }

    /// Create iterator
    pub fn iter(&self) -> im::vector::Iter<'_, T> {
        self.inner.iter()
    }

    /// Convert to Vec (allocates)
    pub fn to_vec(&self) -> Vec<T> {
        self.inner.iter().cloned().collect()
    }

    // ==================== Queries ====================

    pub fn include(&self, value: &T) -> bool {
        self.inner.iter().any(|v| v == value)
    }

    /// Position of the first element equal to `value`
    pub fn index(&self, value: &T) -> Option<usize> {
        self.inner.iter().position(|v| v == value)
    }

    /// Position of the last element equal to `value`
    pub fn rindex(&self, value: &T) -> Option<usize> {
        self.inner.iter().rposition(|v| v == value)
    }

    pub fn find<P>(&self, pred: P) -> Option<&T>
    where
        P: Fn(&T) -> bool,
    {
        self.inner.iter().find(|&v| pred(v))
    }

    /// `false` for an empty array
    pub fn any<P>(&self, pred: P) -> bool
    where
        P: Fn(&T) -> bool,
    {
        self.inner.iter().any(pred)
    }

    /// `true` for an empty array
    pub fn all<P>(&self, pred: P) -> bool
    where
        P: Fn(&T) -> bool,
    {
        self.inner.iter().all(pred)
    }

    /// `true` for an empty array
    pub fn none<P>(&self, pred: P) -> bool
    where
        P: Fn(&T) -> bool,
    {
        !self.inner.iter().any(pred)
    }

    pub fn count(&self, arg: CountArg<'_, T>) -> usize {
        match arg {
            CountArg::All => self.length(),
            _ => self.inner.iter().filter(|&v| arg.matches(v)).count(),
        }
    }

    // ==================== Iteration ====================

    /// Call `f` on every element in order
    pub fn each<F: FnMut(&T)>(&self, f: F) {
        self.inner.iter().for_each(f);
    }

    /// Call `f` with every element and its index
    pub fn each_with_index<F: FnMut(&T, usize)>(&self, mut f: F) {
        for (i, v) in self.inner.iter().enumerate() {
            f(v, i);
        }
    }

    // ==================== Combinators ====================

    #[must_use = "immutable methods return a new instance"]
    pub fn map<F>(&self, f: F) -> Self
    where
        F: Fn(&T) -> T,
    {
        self.inner.iter().map(f).collect()
    }

    /// Keep the elements matching `pred`
    #[must_use = "immutable methods return a new instance"]
    pub fn select<P>(&self, pred: P) -> Self
    where
        P: Fn(&T) -> bool,
    {
        self.inner.iter().filter(|&v| pred(v)).cloned().collect()
    }

    /// Drop the elements matching `pred`
    #[must_use = "immutable methods return a new instance"]
    pub fn reject<P>(&self, pred: P) -> Self
    where
        P: Fn(&T) -> bool,
    {
        self.inner.iter().filter(|&v| !pred(v)).cloned().collect()
    }

    /// Order-preserving de-duplication; the first occurrence wins
    #[must_use = "immutable methods return a new instance"]
    pub fn uniq(&self) -> Self {
        let mut seen: Vec<&T> = Vec::with_capacity(self.length());
        for v in &self.inner {
            if !seen.contains(&v) {
                seen.push(v);
            }
        }
        seen.into_iter().cloned().collect()
    }

    /// Drop zero values (`0`, `0.0`, `false`, `""`, `:""`)
    #[must_use = "immutable methods return a new instance"]
    pub fn compact(&self) -> Self {
        self.reject(T::is_zero_value)
    }

    #[must_use = "immutable methods return a new instance"]
    pub fn reverse(&self) -> Self {
        self.inner.iter().rev().cloned().collect()
    }

    /// Stable ascending sort by the element's total order
    #[must_use = "immutable methods return a new instance"]
    pub fn sort(&self) -> Self {
        self.sort_by(T::compare)
    }

    /// Stable sort by a custom comparator
    #[must_use = "immutable methods return a new instance"]
    pub fn sort_by<F>(&self, compare: F) -> Self
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        let mut items = self.to_vec();
        items.sort_by(compare);
        Self::from_vec(items)
    }

    /// Display forms joined by `sep`
    pub fn join(&self, sep: &str) -> Text {
        let parts: Vec<String> = self.inner.iter().map(ToString::to_string).collect();
        Text::new(parts.join(sep))
    }

    /// First `n` elements; `n` is clamped to `[0, length]`
    #[must_use = "immutable methods return a new instance"]
    pub fn take(&self, n: i64) -> Self {
        let n = self.clamp_len(n);
        Self::from_inner(self.inner.take(n))
    }

    /// All but the first `n` elements; `n` is clamped to `[0, length]`
    #[must_use = "immutable methods return a new instance"]
    pub fn drop(&self, n: i64) -> Self {
        let n = self.clamp_len(n);
        Self::from_inner(self.inner.skip(n))
    }

    fn clamp_len(&self, n: i64) -> usize {
        usize::try_from(n.max(0)).map_or(self.length(), |n| n.min(self.length()))
    }

    // ==================== Construction ====================

    /// Append (returns new Array, original unchanged)
    #[must_use = "immutable methods return a new instance"]
    pub fn push(&self, value: impl Into<T>) -> Self {
        let mut inner = self.inner.clone();
        inner.push_back(value.into());
        Self { inner }
    }

    /// Prepend (returns new Array, original unchanged)
    #[must_use = "immutable methods return a new instance"]
    pub fn unshift(&self, value: impl Into<T>) -> Self {
        let mut inner = self.inner.clone();
        inner.push_front(value.into());
        Self { inner }
    }

    /// Remove the last element, returning it with the remainder
    pub fn pop(&self) -> (Option<T>, Self) {
        let mut inner = self.inner.clone();
        let popped = inner.pop_back();
        (popped, Self { inner })
    }

    /// Remove the first element, returning it with the remainder
    pub fn shift(&self) -> (Option<T>, Self) {
        let mut inner = self.inner.clone();
        let shifted = inner.pop_front();
        (shifted, Self { inner })
    }

    /// Empty array of the same element type
    #[must_use = "immutable methods return a new instance"]
    pub fn clear(&self) -> Self {
        Self::new()
    }

    /// Same length, every slot `value`
    #[must_use = "immutable methods return a new instance"]
    pub fn fill(&self, value: impl Into<T>) -> Self {
        let value = value.into();
        std::iter::repeat_n(value, self.length()).collect()
    }

    // ==================== Random ====================

    /// Uniformly random element, `None` when empty
    pub fn sample(&self) -> Option<&T> {
        if self.is_empty() {
            return None;
        }
        let i = rand::rng().random_range(0..self.length());
        self.inner.get(i)
    }

    /// Uniformly random permutation
    #[must_use = "immutable methods return a new instance"]
    pub fn shuffle(&self) -> Self {
        let mut items = self.to_vec();
        items.shuffle(&mut rand::rng());
        Self::from_vec(items)
    }

    // ==================== Reshaping ====================

    /// Rotate left by `k`; a negative `k` rotates right
    ///
    /// ```
    /// use rubyx_value::{Array, Integer};
    ///
    /// let arr: Array<Integer> = Array::of([1, 2, 3, 4]);
    /// assert_eq!(arr.rotate(1), Array::of([2, 3, 4, 1]));
    /// assert_eq!(arr.rotate(-1), Array::of([4, 1, 2, 3]));
    /// ```
    #[must_use = "immutable methods return a new instance"]
    pub fn rotate(&self, k: i64) -> Self {
        let len = self.length();
        if len == 0 {
            return self.clone();
        }
        let shift = k.rem_euclid(len as i64) as usize;
        let mut head = self.inner.clone();
        let tail = head.split_off(shift);
        let mut inner = tail;
        inner.append(head);
        Self { inner }
    }

    /// Consecutive groups of `size`; the last group may be shorter
    ///
    /// A non-positive `size` yields no groups.
    pub fn chunk(&self, size: i64) -> Vec<Self> {
        let Ok(size) = usize::try_from(size) else {
            rubyx_log::trace!(size, "array chunk with negative size");
            return Vec::new();
        };
        if size == 0 {
            rubyx_log::trace!(size, "array chunk with zero size");
            return Vec::new();
        }
        let mut groups = Vec::with_capacity(self.length().div_ceil(size));
        let mut rest = self.inner.clone();
        while !rest.is_empty() {
            let tail = rest.split_off(size.min(rest.len()));
            groups.push(Self::from_inner(rest));
            rest = tail;
        }
        groups
    }

    /// The whole array repeated `n` times; `n <= 0` gives an empty array
    #[must_use = "immutable methods return a new instance"]
    pub fn cycle(&self, n: i64) -> Self {
        if n <= 0 {
            rubyx_log::trace!(n, "array cycle with non-positive count");
            return Self::new();
        }
        let mut inner = Vector::new();
        if self.is_empty() {
            return Self { inner };
        }
        for _ in 0..n {
            inner.append(self.inner.clone());
        }
        Self { inner }
    }

    /// [`cycle`](Self::cycle) with the result length checked first
    pub fn cycle_with_limits(&self, n: i64, limits: &ValueLimits) -> ValueResult<Self> {
        let times = usize::try_from(n.max(0)).unwrap_or(usize::MAX);
        limits.check_array_length(self.length().saturating_mul(times))?;
        Ok(self.cycle(n))
    }
}

impl<T: Element> Default for Array<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Element> Index<usize> for Array<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        &self.inner[index]
    }
}

impl<T: Element> fmt::Display for Array<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, item) in self.inner.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{item}")?;
        }
        f.write_str("]")
    }
}

impl<T: Element> From<Vec<T>> for Array<T> {
    fn from(vec: Vec<T>) -> Self {
        Self::from_vec(vec)
    }
}

impl<T: Element, const N: usize> From<[T; N]> for Array<T> {
    fn from(items: [T; N]) -> Self {
        items.into_iter().collect()
    }
}

impl<T: Element> FromIterator<T> for Array<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            inner: iter.into_iter().collect(),
        }
    }
}

impl<T: Element> Extend<T> for Array<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.inner.extend(iter);
    }
}

// ==================== IntoIterator ====================

impl<T: Element> IntoIterator for Array<T> {
    type Item = T;
    type IntoIter = im::vector::ConsumingIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.into_iter()
    }
}

impl<'a, T: Element> IntoIterator for &'a Array<T> {
    type Item = &'a T;
    type IntoIter = im::vector::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.iter()
    }
}
