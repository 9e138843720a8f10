//! Size limits for values built from untrusted sizes
//!
//! `cycle(n)` or a hash assembled from external input can allocate without
//! bound; the `*_with_limits` constructors check against these caps first.

use crate::error::{ValueError, ValueResult};

/// Configurable limits for value construction
///
/// # Example
///
/// ```
/// use rubyx_value::ValueLimits;
///
/// let limits = ValueLimits::default();
/// assert_eq!(limits.max_array_length, 1_000_000);
///
/// let strict = ValueLimits::strict();
/// assert_eq!(strict.max_array_length, 10_000);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValueLimits {
    /// Maximum number of elements in an array
    pub max_array_length: usize,

    /// Maximum number of keys in a hash
    pub max_hash_keys: usize,

    /// Maximum text length in bytes
    pub max_string_bytes: usize,
}

impl Default for ValueLimits {
    fn default() -> Self {
        Self {
            max_array_length: 1_000_000,
            max_hash_keys: 100_000,
            max_string_bytes: 10_000_000,
        }
    }
}

impl ValueLimits {
    /// Permissive limits for trusted environments
    pub fn permissive() -> Self {
        Self {
            max_array_length: 10_000_000,
            max_hash_keys: 1_000_000,
            max_string_bytes: 100_000_000,
        }
    }

    /// Strict limits for untrusted input
    pub fn strict() -> Self {
        Self {
            max_array_length: 10_000,
            max_hash_keys: 1_000,
            max_string_bytes: 1_000_000,
        }
    }

    /// No limits
    pub const fn unlimited() -> Self {
        Self {
            max_array_length: usize::MAX,
            max_hash_keys: usize::MAX,
            max_string_bytes: usize::MAX,
        }
    }

    /// Validate array length
    #[inline]
    pub fn check_array_length(&self, len: usize) -> ValueResult<()> {
        check("max_array_length", self.max_array_length, len)
    }

    /// Validate hash key count
    #[inline]
    pub fn check_hash_keys(&self, count: usize) -> ValueResult<()> {
        check("max_hash_keys", self.max_hash_keys, count)
    }

    /// Validate text byte length
    #[inline]
    pub fn check_string_bytes(&self, bytes: usize) -> ValueResult<()> {
        check("max_string_bytes", self.max_string_bytes, bytes)
    }
}

fn check(limit: &'static str, max: usize, actual: usize) -> ValueResult<()> {
    if actual > max {
        rubyx_log::debug!(limit, max, actual, "value limit exceeded");
        Err(ValueError::limit_exceeded(limit, max, actual))
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_limits() {
        let limits = ValueLimits::default();
        assert!(limits.check_array_length(1_000_000).is_ok());
        assert!(limits.check_array_length(1_000_001).is_err());
    }

    #[test]
    fn test_strict_limits() {
        let limits = ValueLimits::strict();
        assert!(limits.check_hash_keys(1_000).is_ok());
        let err = limits.check_hash_keys(1_001).unwrap_err();
        assert_eq!(err, ValueError::limit_exceeded("max_hash_keys", 1_000, 1_001));
    }

    #[test]
    fn test_unlimited() {
        let limits = ValueLimits::unlimited();
        assert!(limits.check_string_bytes(usize::MAX).is_ok());
        assert!(ValueLimits::permissive().check_string_bytes(usize::MAX).is_err());
    }
}
