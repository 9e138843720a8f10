//! The element capability shared by the scalar wrappers
//!
//! [`Array`](crate::Array) only holds types implementing [`Element`]. The
//! trait is sealed: the set of scalar kinds is closed.

use std::cmp::Ordering;
use std::fmt;

use crate::scalar::{Boolean, Float, Integer, Symbol, Text};

pub(crate) mod sealed {
    pub trait Sealed {}
}

/// A scalar that can live in an [`Array`](crate::Array)
pub trait Element: sealed::Sealed + Clone + PartialEq + fmt::Display + fmt::Debug {
    /// Total order used by `sort`, `min`-style helpers and range walks
    fn compare(&self, other: &Self) -> Ordering;

    /// Whether this is the kind's zero value, dropped by `compact`
    fn is_zero_value(&self) -> bool;
}

impl sealed::Sealed for Integer {}
impl sealed::Sealed for Float {}
impl sealed::Sealed for Boolean {}
impl sealed::Sealed for Text {}
impl sealed::Sealed for Symbol {}

impl Element for Integer {
    fn compare(&self, other: &Self) -> Ordering {
        self.cmp(other)
    }

    fn is_zero_value(&self) -> bool {
        self.value() == 0
    }
}

impl Element for Float {
    /// IEEE 754 total order: `-NaN < -inf < ... < -0.0 < 0.0 < ... < inf < NaN`
    fn compare(&self, other: &Self) -> Ordering {
        self.value().total_cmp(&other.value())
    }

    fn is_zero_value(&self) -> bool {
        self.value() == 0.0
    }
}

impl Element for Boolean {
    fn compare(&self, other: &Self) -> Ordering {
        self.cmp(other)
    }

    fn is_zero_value(&self) -> bool {
        !self.value()
    }
}

impl Element for Text {
    fn compare(&self, other: &Self) -> Ordering {
        self.cmp(other)
    }

    fn is_zero_value(&self) -> bool {
        self.as_str().is_empty()
    }
}

impl Element for Symbol {
    fn compare(&self, other: &Self) -> Ordering {
        self.cmp(other)
    }

    fn is_zero_value(&self) -> bool {
        self.as_str().is_empty()
    }
}
