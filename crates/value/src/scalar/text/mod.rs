//! Text (Ruby `String`) wrapper
//!
//! Every transform comes in two forms: a pure method returning a new `Text`
//! and an `enforce_*` method that writes the result back into the receiver.

pub(crate) mod transform;

use std::fmt;
use std::ops::Deref;
use std::sync::Arc;

use crate::collections::Array;
use crate::core::limits::ValueLimits;
use crate::error::ValueResult;
use crate::scalar::{Float, Integer, Symbol};

/// Immutable UTF-8 text, cheap to clone
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Text {
    inner: Arc<str>,
}

impl Text {
    /// Create a new text from String
    pub fn new(s: String) -> Self {
        Self { inner: s.into() }
    }

    /// Create with byte-length validation
    pub fn with_limits(s: &str, limits: &ValueLimits) -> ValueResult<Self> {
        limits.check_string_bytes(s.len())?;
        Ok(Self::from(s))
    }

    /// Get as string slice
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.inner
    }

    fn map_str(&self, f: impl FnOnce(&str) -> String) -> Self {
        Self::new(f(&self.inner))
    }

    fn parts(parts: Vec<&str>) -> Array<Text> {
        parts.into_iter().map(Text::from).collect()
    }

    // ==================== Queries ====================

    /// Length in characters
    pub fn length(&self) -> usize {
        self.inner.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Empty or whitespace only
    pub fn is_blank(&self) -> bool {
        self.inner.trim().is_empty()
    }

    pub fn start_with(&self, prefix: &str) -> bool {
        self.inner.starts_with(prefix)
    }

    pub fn end_with(&self, suffix: &str) -> bool {
        self.inner.ends_with(suffix)
    }

    pub fn include(&self, pattern: &str) -> bool {
        self.inner.contains(pattern)
    }

    // ==================== Splitting ====================

    /// One `Text` per character
    pub fn chars(&self) -> Array<Text> {
        Self::parts(transform::chars(&self.inner))
    }

    /// Split on `sep`; an empty separator splits into characters
    pub fn split(&self, sep: &str) -> Array<Text> {
        Self::parts(transform::split(&self.inner, sep))
    }

    /// Split on `"\n"`, keeping empty lines
    pub fn lines(&self) -> Array<Text> {
        Self::parts(transform::lines(&self.inner))
    }

    /// Whitespace-separated words
    pub fn words(&self) -> Array<Text> {
        Self::parts(transform::words(&self.inner))
    }

    // ==================== Transforms ====================

    pub fn downcase(&self) -> Text {
        self.map_str(str::to_lowercase)
    }

    pub fn enforce_downcase(&mut self) -> &Self {
        *self = self.downcase();
        self
    }

    pub fn upcase(&self) -> Text {
        self.map_str(str::to_uppercase)
    }

    pub fn enforce_upcase(&mut self) -> &Self {
        *self = self.upcase();
        self
    }

    /// First character upper-cased, the rest lower-cased
    pub fn capitalize(&self) -> Text {
        self.map_str(transform::capitalize)
    }

    pub fn enforce_capitalize(&mut self) -> &Self {
        *self = self.capitalize();
        self
    }

    pub fn swapcase(&self) -> Text {
        self.map_str(transform::swapcase)
    }

    pub fn enforce_swapcase(&mut self) -> &Self {
        *self = self.swapcase();
        self
    }

    /// Capitalize every word; runs of whitespace collapse to one space
    pub fn title(&self) -> Text {
        self.map_str(transform::title_words)
    }

    pub fn enforce_title(&mut self) -> &Self {
        *self = self.title();
        self
    }

    pub fn strip(&self) -> Text {
        Text::from(self.inner.trim())
    }

    pub fn enforce_strip(&mut self) -> &Self {
        *self = self.strip();
        self
    }

    pub fn lstrip(&self) -> Text {
        Text::from(self.inner.trim_start())
    }

    pub fn enforce_lstrip(&mut self) -> &Self {
        *self = self.lstrip();
        self
    }

    pub fn rstrip(&self) -> Text {
        Text::from(self.inner.trim_end())
    }

    pub fn enforce_rstrip(&mut self) -> &Self {
        *self = self.rstrip();
        self
    }

    /// Reverse by character
    pub fn reverse(&self) -> Text {
        self.map_str(transform::reverse)
    }

    pub fn enforce_reverse(&mut self) -> &Self {
        *self = self.reverse();
        self
    }

    /// Replace every occurrence of `pattern`
    pub fn gsub(&self, pattern: &str, replacement: &str) -> Text {
        self.map_str(|s| transform::gsub(s, pattern, replacement))
    }

    pub fn enforce_gsub(&mut self, pattern: &str, replacement: &str) -> &Self {
        *self = self.gsub(pattern, replacement);
        self
    }

    /// Replace the first occurrence of `pattern`
    pub fn sub(&self, pattern: &str, replacement: &str) -> Text {
        self.map_str(|s| transform::sub(s, pattern, replacement))
    }

    pub fn enforce_sub(&mut self, pattern: &str, replacement: &str) -> &Self {
        *self = self.sub(pattern, replacement);
        self
    }

    // ==================== Conversions ====================

    /// Leading integer, `0` when there is none (`"42abc" -> 42`)
    pub fn to_i(&self) -> Integer {
        Integer::new(transform::leading_int(&self.inner).unwrap_or(0))
    }

    /// Leading float, `0.0` when there is none (`"3.5kg" -> 3.5`)
    pub fn to_f(&self) -> Float {
        Float::new(transform::leading_float(&self.inner).unwrap_or(0.0))
    }

    pub fn to_s(&self) -> Text {
        self.clone()
    }

    pub fn to_str(&self) -> String {
        self.inner.to_string()
    }

    pub fn to_sym(&self) -> Symbol {
        Symbol::new(&self.inner)
    }
}

impl Default for Text {
    fn default() -> Self {
        Self::from("")
    }
}

impl Deref for Text {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl fmt::Display for Text {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.inner)
    }
}

impl From<String> for Text {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&str> for Text {
    fn from(s: &str) -> Self {
        Self { inner: s.into() }
    }
}

impl From<Arc<str>> for Text {
    fn from(inner: Arc<str>) -> Self {
        Self { inner }
    }
}

impl From<Text> for String {
    fn from(text: Text) -> Self {
        text.inner.to_string()
    }
}

impl AsRef<str> for Text {
    fn as_ref(&self) -> &str {
        &self.inner
    }
}

impl PartialEq<str> for Text {
    fn eq(&self, other: &str) -> bool {
        &*self.inner == other
    }
}

impl PartialEq<&str> for Text {
    fn eq(&self, other: &&str) -> bool {
        &*self.inner == *other
    }
}
