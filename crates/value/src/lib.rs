//! # rubyx-value
//!
//! Ruby-style wrapper types with Ruby's convenience methods, named in
//! snake_case: [`Integer`], [`Float`], [`Boolean`], [`Text`] (Ruby's
//! `String`), [`Symbol`], [`Array`], [`Hash`], [`Range`] and [`Pair`].
//!
//! ```
//! use rubyx_value::prelude::*;
//!
//! let evens: Array<Integer> = Range::new(Integer::new(1), Integer::new(10))
//!     .to_array()
//!     .select(Integer::is_even);
//! assert_eq!(evens.join(","), "2,4,6,8,10");
//!
//! let mut ages: Hash<Symbol, Integer> = Hash::new();
//! ages.set(Symbol::new("ann"), Integer::new(31));
//! assert!(ages.fetch(&Symbol::new("bob")).is_err());
//!
//! assert_eq!(Text::from("  hello  ").strip().capitalize(), "Hello");
//! ```
//!
//! Absence is an `Option` (`first`, `find`, `sample`) or a caller-supplied
//! default (`Hash::get`); only `Hash::fetch`, the `*_with_limits`
//! constructors and overflowing arithmetic return [`ValueError`].
//!
//! Operations that are no-ops on bad input (zero `step`, non-positive
//! `chunk` and `cycle`) emit `trace` events through `rubyx-log`.
//!
//! ## Features
//!
//! - `serde`: `Serialize`/`Deserialize` for every wrapper type
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod collections;
pub mod core;
pub mod error;
pub mod range;
pub mod scalar;

// Re-export core types
pub use core::{Element, ValueLimits};
pub use error::{ValueError, ValueResult, ValueResultExt};

// Re-export scalar, collection and range types
pub use collections::{Array, CountArg, Hash, Pair};
pub use range::{Range, RangeBound, RangeIter};
pub use scalar::{Boolean, Float, Integer, Symbol, Text};

/// Prelude for common imports
pub mod prelude {
    pub use crate::{Array, CountArg, Hash, Pair, Range};
    pub use crate::{Boolean, Float, Integer, Symbol, Text};
    pub use crate::{ValueError, ValueLimits, ValueResult, ValueResultExt};
}
