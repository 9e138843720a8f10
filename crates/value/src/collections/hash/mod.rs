//! Hash (key-value map) type for rubyx-value
//!
//! Unlike [`Array`](crate::Array), a [`Hash`] is mutated in place by the
//! Ruby "bang" style operations (`set`, `delete`, `update`, `keep_if` ...).
//! The combinators (`merge`, `select`, `map`, `invert`) return new maps that
//! share structure with the receiver through `im::HashMap`.
//!
//! Iteration order is unspecified.
pub mod pair;

pub use pair::Pair;

use std::fmt;
use std::hash::Hash as StdHash;

use im::HashMap;

use crate::core::limits::ValueLimits;
use crate::error::{ValueError, ValueResult};

/// Persistent key-value map with an optional Ruby-style default value
#[derive(Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
#[cfg_attr(
    feature = "serde",
    serde(bound(
        serialize = "K: serde::Serialize, V: serde::Serialize",
        deserialize = "K: serde::Deserialize<'de>, V: serde::Deserialize<'de>"
    ))
)]
pub struct Hash<K, V>
where
    K: StdHash + Eq + Clone,
    V: Clone,
{
    inner: HashMap<K, V>,
    #[cfg_attr(feature = "serde", serde(skip))]
    default: Option<V>,
}

impl<K, V> Hash<K, V>
where
    K: StdHash + Eq + Clone,
    V: Clone,
{
    /// Create an empty hash
    pub fn new() -> Self {
        Self {
            inner: HashMap::new(),
            default: None,
        }
    }

    /// Create with key count validation
    pub fn with_limits<I>(iter: I, limits: &ValueLimits) -> ValueResult<Self>
    where
        I: IntoIterator<Item = (K, V)>,
    {
        let inner: HashMap<K, V> = iter.into_iter().collect();
        limits.check_hash_keys(inner.len())?;
        Ok(Self {
            inner,
            default: None,
        })
    }

    /// Copy of this hash whose [`at`](Self::at) falls back to `value`
    pub fn with_default(&self, value: V) -> Self {
        Self {
            inner: self.inner.clone(),
            default: Some(value),
        }
    }

    pub fn default_value(&self) -> Option<&V> {
        self.default.as_ref()
    }

    fn from_inner(inner: HashMap<K, V>) -> Self {
        Self {
            inner,
            default: None,
        }
    }

    // ==================== Size ====================

    #[inline]
    pub fn length(&self) -> usize {
        self.inner.len()
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.inner.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    // ==================== Lookup ====================

    /// All keys, in unspecified order
    pub fn keys(&self) -> Vec<K> {
        self.inner.keys().cloned().collect()
    }

    /// All values, in unspecified order
    pub fn values(&self) -> Vec<V> {
        self.inner.values().cloned().collect()
    }

    pub fn has_key(&self, key: &K) -> bool {
        self.inner.contains_key(key)
    }

    pub fn has_value(&self, value: &V) -> bool
    where
        V: PartialEq,
    {
        self.inner.values().any(|v| v == value)
    }

    /// Value for `key`, or `default` when absent
    pub fn get(&self, key: &K, default: V) -> V {
        self.inner.get(key).cloned().unwrap_or(default)
    }

    /// Value for `key`, or `KeyNotFound`
    pub fn fetch(&self, key: &K) -> ValueResult<&V>
    where
        K: fmt::Debug,
    {
        self.inner
            .get(key)
            .ok_or_else(|| rubyx_log::log_debug_error!(ValueError::key_not_found(format!("{key:?}"))))
    }

    /// Value for `key`, falling back to the default value
    pub fn at(&self, key: &K) -> Option<V> {
        self.inner.get(key).or(self.default.as_ref()).cloned()
    }

    /// Create iterator over `(&key, &value)`
    pub fn iter(&self) -> im::hashmap::Iter<'_, K, V> {
        self.inner.iter()
    }

    // ==================== In-place mutation ====================

    /// Insert or overwrite
    pub fn set(&mut self, key: K, value: V) {
        self.inner.insert(key, value);
    }

    /// Remove `key`, returning its value
    pub fn delete(&mut self, key: &K) -> Option<V> {
        self.inner.remove(key)
    }

    /// Remove every entry; the default value is kept
    pub fn clear(&mut self) {
        self.inner.clear();
    }

    /// Copy `other`'s entries into this hash; `other` wins on conflict
    pub fn enforce_merge(&mut self, other: &Self) {
        for (k, v) in &other.inner {
            self.inner.insert(k.clone(), v.clone());
        }
    }

    /// Alias of [`enforce_merge`](Self::enforce_merge)
    pub fn update(&mut self, other: &Self) {
        self.enforce_merge(other);
    }

    /// Become a copy of `other`, default value included
    pub fn replace(&mut self, other: &Self) {
        self.inner = other.inner.clone();
        self.default = other.default.clone();
    }

    /// Keep only the entries matching `pred`
    pub fn keep_if<P>(&mut self, mut pred: P)
    where
        P: FnMut(&K, &V) -> bool,
    {
        self.inner.retain(|k, v| pred(k, v));
    }

    /// Remove the entries matching `pred`
    pub fn delete_if<P>(&mut self, mut pred: P)
    where
        P: FnMut(&K, &V) -> bool,
    {
        self.inner.retain(|k, v| !pred(k, v));
    }

    // ==================== Combinators ====================

    /// New hash with `other`'s entries on top; keeps this hash's default
    #[must_use = "immutable methods return a new instance"]
    pub fn merge(&self, other: &Self) -> Self {
        Self {
            inner: other.inner.clone().union(self.inner.clone()),
            default: self.default.clone(),
        }
    }

    /// [`merge`](Self::merge) with the worst-case key count checked first
    pub fn merge_with_limits(&self, other: &Self, limits: &ValueLimits) -> ValueResult<Self> {
        limits.check_hash_keys(self.length() + other.length())?;
        Ok(self.merge(other))
    }

    #[must_use = "immutable methods return a new instance"]
    pub fn select<P>(&self, pred: P) -> Self
    where
        P: Fn(&K, &V) -> bool,
    {
        let mut inner = self.inner.clone();
        inner.retain(|k, v| pred(k, v));
        Self::from_inner(inner)
    }

    #[must_use = "immutable methods return a new instance"]
    pub fn reject<P>(&self, pred: P) -> Self
    where
        P: Fn(&K, &V) -> bool,
    {
        self.select(|k, v| !pred(k, v))
    }

    pub fn each<F: FnMut(&K, &V)>(&self, mut f: F) {
        for (k, v) in &self.inner {
            f(k, v);
        }
    }

    pub fn each_key<F: FnMut(&K)>(&self, f: F) {
        self.inner.keys().for_each(f);
    }

    pub fn each_value<F: FnMut(&V)>(&self, f: F) {
        self.inner.values().for_each(f);
    }

    /// Build a new hash from `f(key, value)`; later collisions overwrite
    pub fn map<K2, V2, F>(&self, f: F) -> Hash<K2, V2>
    where
        K2: StdHash + Eq + Clone,
        V2: Clone,
        F: Fn(&K, &V) -> (K2, V2),
    {
        self.inner.iter().map(|(k, v)| f(k, v)).collect()
    }

    /// Swap keys and values
    ///
    /// When several keys share a value, which of them survives is
    /// unspecified.
    pub fn invert(&self) -> Hash<V, K>
    where
        V: StdHash + Eq,
    {
        self.inner
            .iter()
            .map(|(k, v)| (v.clone(), k.clone()))
            .collect()
    }

    /// Entries as pairs, in unspecified order
    pub fn to_array(&self) -> Vec<Pair<K, V>> {
        self.inner
            .iter()
            .map(|(k, v)| Pair::new(k.clone(), v.clone()))
            .collect()
    }
}

impl<K, V> Default for Hash<K, V>
where
    K: StdHash + Eq + Clone,
    V: Clone,
{
    fn default() -> Self {
        Self::new()
    }
}

/// Entries only; the default value does not take part
impl<K, V> PartialEq for Hash<K, V>
where
    K: StdHash + Eq + Clone,
    V: Clone + PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.inner == other.inner
    }
}

impl<K, V> Eq for Hash<K, V>
where
    K: StdHash + Eq + Clone,
    V: Clone + Eq,
{
}

impl<K, V> fmt::Debug for Hash<K, V>
where
    K: StdHash + Eq + Clone + fmt::Debug,
    V: Clone + fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.inner.iter()).finish()
    }
}

/// `{a => 1, b => 2}`, entries sorted by the key's display form
impl<K, V> fmt::Display for Hash<K, V>
where
    K: StdHash + Eq + Clone + fmt::Display,
    V: Clone + fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut entries: Vec<(String, &V)> =
            self.inner.iter().map(|(k, v)| (k.to_string(), v)).collect();
        entries.sort_by(|a, b| a.0.cmp(&b.0));

        f.write_str("{")?;
        for (i, (k, v)) in entries.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{k} => {v}")?;
        }
        f.write_str("}")
    }
}

impl<K, V> FromIterator<(K, V)> for Hash<K, V>
where
    K: StdHash + Eq + Clone,
    V: Clone,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self::from_inner(iter.into_iter().collect())
    }
}

impl<K, V, const N: usize> From<[(K, V); N]> for Hash<K, V>
where
    K: StdHash + Eq + Clone,
    V: Clone,
{
    fn from(entries: [(K, V); N]) -> Self {
        entries.into_iter().collect()
    }
}

impl<K, V> Extend<(K, V)> for Hash<K, V>
where
    K: StdHash + Eq + Clone,
    V: Clone,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        self.inner.extend(iter);
    }
}

impl<K, V> IntoIterator for Hash<K, V>
where
    K: StdHash + Eq + Clone,
    V: Clone,
{
    type Item = (K, V);
    type IntoIter = im::hashmap::ConsumingIter<(K, V)>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.into_iter()
    }
}

impl<'a, K, V> IntoIterator for &'a Hash<K, V>
where
    K: StdHash + Eq + Clone,
    V: Clone,
{
    type Item = (&'a K, &'a V);
    type IntoIter = im::hashmap::Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.iter()
    }
}
