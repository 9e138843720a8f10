//! Argument for [`Array::count`](super::Array::count)

use std::fmt;

/// What [`Array::count`](super::Array::count) counts
///
/// ```
/// use rubyx_value::{Array, CountArg, Integer};
///
/// let arr: Array<Integer> = Array::of([1, 2, 2, 3]);
/// assert_eq!(arr.count(CountArg::All), 4);
/// assert_eq!(arr.count(CountArg::Equals(Integer::new(2))), 2);
/// assert_eq!(arr.count(CountArg::Predicate(&|x: &Integer| x.is_odd())), 2);
/// ```
#[derive(Clone, Copy)]
pub enum CountArg<'a, T> {
    /// Every element
    All,
    /// Elements equal to the value
    Equals(T),
    /// Elements matching the predicate
    Predicate(&'a dyn Fn(&T) -> bool),
}

impl<T> Default for CountArg<'_, T> {
    fn default() -> Self {
        Self::All
    }
}

impl<T: PartialEq> CountArg<'_, T> {
    pub(crate) fn matches(&self, item: &T) -> bool {
        match self {
            Self::All => true,
            Self::Equals(value) => item == value,
            Self::Predicate(pred) => pred(item),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for CountArg<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str("All"),
            Self::Equals(value) => f.debug_tuple("Equals").field(value).finish(),
            Self::Predicate(_) => f.write_str("Predicate(..)"),
        }
    }
}

impl<T> From<T> for CountArg<'_, T> {
    fn from(value: T) -> Self {
        Self::Equals(value)
    }
}
