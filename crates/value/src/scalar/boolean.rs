//! Boolean wrapper with Ruby-style logic helpers

use std::fmt;

use crate::scalar::{Float, Integer, Text};

/// Boolean value
///
/// `false < true` when ordered, so arrays of booleans sort falses first.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Boolean {
    inner: bool,
}

impl Boolean {
    /// Create a new Boolean from a bool
    pub const fn new(value: bool) -> Self {
        Self { inner: value }
    }

    /// Get the inner bool value
    pub const fn value(&self) -> bool {
        self.inner
    }

    pub const fn is_true(&self) -> bool {
        self.inner
    }

    pub const fn is_false(&self) -> bool {
        !self.inner
    }

    // ==================== Logic ====================

    pub const fn and(self, other: Boolean) -> Boolean {
        Self::new(self.inner && other.inner)
    }

    pub const fn or(self, other: Boolean) -> Boolean {
        Self::new(self.inner || other.inner)
    }

    pub const fn not(self) -> Boolean {
        Self::new(!self.inner)
    }

    pub const fn xor(self, other: Boolean) -> Boolean {
        Self::new(self.inner ^ other.inner)
    }

    pub const fn nand(self, other: Boolean) -> Boolean {
        Self::new(!(self.inner && other.inner))
    }

    pub const fn nor(self, other: Boolean) -> Boolean {
        Self::new(!(self.inner || other.inner))
    }

    pub const fn xnor(self, other: Boolean) -> Boolean {
        Self::new(self.inner == other.inner)
    }

    /// Material implication: false only for `true -> false`
    pub const fn implies(self, other: Boolean) -> Boolean {
        Self::new(!self.inner || other.inner)
    }

    // ==================== Branching ====================

    /// Run `f` when true
    pub fn if_true<F: FnOnce()>(self, f: F) {
        if self.inner {
            f();
        }
    }

    /// Run `f` when false
    pub fn if_false<F: FnOnce()>(self, f: F) {
        if !self.inner {
            f();
        }
    }

    /// Run exactly one of the two branches
    pub fn if_else<T, E>(self, on_true: T, on_false: E)
    where
        T: FnOnce(),
        E: FnOnce(),
    {
        if self.inner { on_true() } else { on_false() }
    }

    /// `cond ? a : b`
    pub fn ternary<T>(self, a: T, b: T) -> T {
        if self.inner { a } else { b }
    }

    // ==================== Conversions ====================

    /// `1` or `0`
    pub const fn to_i(&self) -> Integer {
        Integer::new(self.inner as i64)
    }

    /// `1.0` or `0.0`
    pub fn to_f(&self) -> Float {
        Float::new(if self.inner { 1.0 } else { 0.0 })
    }

    pub fn to_s(&self) -> Text {
        Text::from(self.to_string())
    }
}

impl From<bool> for Boolean {
    fn from(value: bool) -> Self {
        Self::new(value)
    }
}

impl From<Boolean> for bool {
    fn from(value: Boolean) -> Self {
        value.inner
    }
}

impl fmt::Display for Boolean {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.inner)
    }
}

impl std::ops::Not for Boolean {
    type Output = Boolean;

    fn not(self) -> Self::Output {
        Boolean::new(!self.inner)
    }
}

impl std::ops::BitAnd for Boolean {
    type Output = Boolean;

    fn bitand(self, rhs: Self) -> Self::Output {
        self.and(rhs)
    }
}

impl std::ops::BitOr for Boolean {
    type Output = Boolean;

    fn bitor(self, rhs: Self) -> Self::Output {
        self.or(rhs)
    }
}

impl std::ops::BitXor for Boolean {
    type Output = Boolean;

    fn bitxor(self, rhs: Self) -> Self::Output {
        self.xor(rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const T: Boolean = Boolean::new(true);
    const F: Boolean = Boolean::new(false);

    #[test]
    fn test_truth_tables() {
        let table = [(T, T), (T, F), (F, T), (F, F)];
        let expect = |op: fn(Boolean, Boolean) -> Boolean| -> Vec<bool> {
            table.iter().map(|&(a, b)| op(a, b).value()).collect()
        };

        assert_eq!(expect(Boolean::and), vec![true, false, false, false]);
        assert_eq!(expect(Boolean::or), vec![true, true, true, false]);
        assert_eq!(expect(Boolean::xor), vec![false, true, true, false]);
        assert_eq!(expect(Boolean::nand), vec![false, true, true, true]);
        assert_eq!(expect(Boolean::nor), vec![false, false, false, true]);
        assert_eq!(expect(Boolean::xnor), vec![true, false, false, true]);
        assert_eq!(expect(Boolean::implies), vec![true, false, true, true]);
    }

    #[test]
    fn test_operators_match_methods() {
        assert_eq!(!T, T.not());
        assert_eq!(T & F, T.and(F));
        assert_eq!(T | F, T.or(F));
        assert_eq!(T ^ T, T.xor(T));
    }

    #[test]
    fn test_conversions() {
        assert_eq!(T.to_i(), Integer::new(1));
        assert_eq!(F.to_i(), Integer::new(0));
        assert_eq!(T.to_f(), Float::new(1.0));
        assert_eq!(F.to_s().as_str(), "false");
        assert!(T.is_true());
        assert!(F.is_false());
    }

    #[test]
    fn test_branching() {
        let mut hits = Vec::new();
        T.if_true(|| hits.push("true"));
        T.if_false(|| hits.push("never"));
        F.if_false(|| hits.push("false"));
        assert_eq!(hits, vec!["true", "false"]);

        let branch = std::cell::Cell::new("");
        F.if_else(|| branch.set("then"), || branch.set("else"));
        assert_eq!(branch.get(), "else");

        assert_eq!(T.ternary("yes", "no"), "yes");
        assert_eq!(F.ternary(1, 2), 2);
    }
}
