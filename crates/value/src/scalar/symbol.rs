//! Interned symbols
//!
//! A [`Symbol`] is a handle into a process-wide interner, so it is `Copy`
//! and equality is a key comparison. Interned names live for the rest of the
//! process.

use std::cmp::Ordering;
use std::fmt;
use std::sync::LazyLock;

use lasso::{Spur, ThreadedRodeo};

use crate::collections::Array;
use crate::scalar::text::transform;
use crate::scalar::{Float, Integer, Text};

static INTERNER: LazyLock<ThreadedRodeo> = LazyLock::new(ThreadedRodeo::new);

/// Interned identifier, Ruby's `:name`
///
/// The interner only grows: every name passed to [`Symbol::new`], and every
/// symbol produced by a transform such as [`upcase`](Self::upcase) or
/// [`gsub`](Self::gsub), stays allocated until the process exits. Build
/// symbols from a bounded vocabulary and keep free-form input as [`Text`].
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Symbol {
    key: Spur,
}

impl Symbol {
    /// Intern `name` and return its symbol
    pub fn new(name: impl AsRef<str>) -> Self {
        Self {
            key: INTERNER.get_or_intern(name),
        }
    }

    /// The interned name
    pub fn as_str(&self) -> &'static str {
        INTERNER.resolve(&self.key)
    }

    fn map_str(&self, f: impl FnOnce(&str) -> String) -> Self {
        Self::new(f(self.as_str()))
    }

    fn parts(parts: Vec<&str>) -> Array<Symbol> {
        parts.into_iter().map(Symbol::new).collect()
    }

    fn all_chars(&self, pred: impl Fn(char) -> bool) -> bool {
        let s = self.as_str();
        !s.is_empty() && s.chars().all(pred)
    }

    // ==================== Conversions ====================

    pub fn to_s(&self) -> Text {
        Text::from(self.as_str())
    }

    pub fn to_str(&self) -> String {
        self.as_str().to_string()
    }

    /// Whole-name integer parse, `0` on failure
    pub fn to_i(&self) -> Integer {
        Integer::new(self.as_str().parse().unwrap_or(0))
    }

    /// Whole-name float parse, `0.0` on failure
    pub fn to_f(&self) -> Float {
        Float::new(self.as_str().parse().unwrap_or(0.0))
    }

    pub fn to_sym(&self) -> Symbol {
        *self
    }

    // ==================== Queries ====================

    pub fn is_empty(&self) -> bool {
        self.as_str().is_empty()
    }

    /// Length in characters
    pub fn length(&self) -> usize {
        self.as_str().chars().count()
    }

    pub fn size(&self) -> usize {
        self.length()
    }

    pub fn is_blank(&self) -> bool {
        self.as_str().trim().is_empty()
    }

    pub fn is_present(&self) -> bool {
        !self.is_blank()
    }

    pub fn start_with(&self, prefix: &str) -> bool {
        self.as_str().starts_with(prefix)
    }

    pub fn end_with(&self, suffix: &str) -> bool {
        self.as_str().ends_with(suffix)
    }

    pub fn include(&self, pattern: &str) -> bool {
        self.as_str().contains(pattern)
    }

    /// Parses as a float (integers included)
    pub fn is_numeric(&self) -> bool {
        self.as_str().parse::<f64>().is_ok()
    }

    pub fn is_integer(&self) -> bool {
        self.as_str().parse::<i64>().is_ok()
    }

    /// Same test as [`is_numeric`](Self::is_numeric)
    pub fn is_float(&self) -> bool {
        self.is_numeric()
    }

    pub fn is_alpha(&self) -> bool {
        self.all_chars(char::is_alphabetic)
    }

    pub fn is_alphanumeric(&self) -> bool {
        self.all_chars(char::is_alphanumeric)
    }

    pub fn is_digit(&self) -> bool {
        self.all_chars(char::is_numeric)
    }

    pub fn is_space(&self) -> bool {
        self.all_chars(char::is_whitespace)
    }

    pub fn is_upper(&self) -> bool {
        self.all_chars(char::is_uppercase)
    }

    pub fn is_lower(&self) -> bool {
        self.all_chars(char::is_lowercase)
    }

    // ==================== Transforms ====================

    pub fn upcase(&self) -> Symbol {
        self.map_str(str::to_uppercase)
    }

    pub fn downcase(&self) -> Symbol {
        self.map_str(str::to_lowercase)
    }

    pub fn capitalize(&self) -> Symbol {
        self.map_str(transform::capitalize)
    }

    pub fn swapcase(&self) -> Symbol {
        self.map_str(transform::swapcase)
    }

    /// Capitalize after every non-word character: `:"foo-bar baz"` → `:"Foo-Bar Baz"`
    pub fn title(&self) -> Symbol {
        self.map_str(transform::title_boundaries)
    }

    pub fn strip(&self) -> Symbol {
        Self::new(self.as_str().trim())
    }

    pub fn lstrip(&self) -> Symbol {
        Self::new(self.as_str().trim_start())
    }

    pub fn rstrip(&self) -> Symbol {
        Self::new(self.as_str().trim_end())
    }

    pub fn reverse(&self) -> Symbol {
        self.map_str(transform::reverse)
    }

    pub fn gsub(&self, pattern: &str, replacement: &str) -> Symbol {
        self.map_str(|s| transform::gsub(s, pattern, replacement))
    }

    pub fn sub(&self, pattern: &str, replacement: &str) -> Symbol {
        self.map_str(|s| transform::sub(s, pattern, replacement))
    }

    pub fn split(&self, sep: &str) -> Array<Symbol> {
        Self::parts(transform::split(self.as_str(), sep))
    }

    pub fn lines(&self) -> Array<Symbol> {
        Self::parts(transform::lines(self.as_str()))
    }

    pub fn words(&self) -> Array<Symbol> {
        Self::parts(transform::words(self.as_str()))
    }

    pub fn chars(&self) -> Array<Symbol> {
        Self::parts(transform::chars(self.as_str()))
    }
}

impl Default for Symbol {
    fn default() -> Self {
        Self::new("")
    }
}

impl PartialOrd for Symbol {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Lexical order of the names, not interning order
impl Ord for Symbol {
    fn cmp(&self, other: &Self) -> Ordering {
        if self.key == other.key {
            Ordering::Equal
        } else {
            self.as_str().cmp(other.as_str())
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Debug for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, ":{}", self.as_str())
    }
}

impl From<&str> for Symbol {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for Symbol {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&Text> for Symbol {
    fn from(t: &Text) -> Self {
        t.to_sym()
    }
}

impl AsRef<str> for Symbol {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Symbol {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Symbol {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = <std::borrow::Cow<'de, str>>::deserialize(deserializer)?;
        Ok(Self::new(name))
    }
}
