use std::fmt;
use std::str::FromStr;

use crate::collections::Array;
use crate::error::{ValueError, ValueResult};
use crate::scalar::{Float, Text};

/// Signed 64-bit integer with Ruby's `Integer` method set
///
/// Arithmetic that can overflow either saturates (documented per method) or
/// returns [`ValueError::Overflow`]; nothing here panics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Integer(i64);

impl Integer {
    /// Create a new integer
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    /// Get the inner value
    pub const fn value(&self) -> i64 {
        self.0
    }

    // ==================== Predicates ====================

    /// True for odd numbers, negative ones included
    pub fn is_odd(&self) -> bool {
        self.0.rem_euclid(2) == 1
    }

    pub fn is_even(&self) -> bool {
        self.0.rem_euclid(2) == 0
    }

    pub fn is_positive(&self) -> bool {
        self.0 > 0
    }

    pub fn is_negative(&self) -> bool {
        self.0 < 0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Trial division; everything `<= 1` is not prime
    pub fn is_prime(&self) -> bool {
        let n = self.0;
        if n <= 1 {
            return false;
        }
        if n < 4 {
            return true;
        }
        if n % 2 == 0 {
            return false;
        }
        let mut d = 3i64;
        while d.checked_mul(d).is_some_and(|sq| sq <= n) {
            if n % d == 0 {
                return false;
            }
            d += 2;
        }
        true
    }

    /// `false` when `divisor` is zero
    pub fn is_divisible_by(&self, divisor: Integer) -> bool {
        divisor.0 != 0 && self.0.wrapping_rem(divisor.0) == 0
    }

    /// Inclusive on both ends
    pub fn between(&self, min: Integer, max: Integer) -> bool {
        min.0 <= self.0 && self.0 <= max.0
    }

    // ==================== Arithmetic ====================

    /// Absolute value, saturating at `i64::MAX`
    pub fn abs(&self) -> Integer {
        Self(self.0.saturating_abs())
    }

    /// Integer power
    ///
    /// A negative exponent truncates the real result toward zero, so
    /// `2.power(-1) == 0` and `1.power(-5) == 1`.
    pub fn power(&self, exponent: i64) -> ValueResult<Integer> {
        if exponent < 0 {
            let real = (self.0 as f64).powf(exponent as f64);
            if !real.is_finite() {
                return Err(ValueError::overflow("power", format!("{}^{exponent}", self.0)));
            }
            return Ok(Self(real.trunc() as i64));
        }

        u32::try_from(exponent)
            .ok()
            .and_then(|exp| self.0.checked_pow(exp))
            .map(Self)
            .ok_or_else(|| ValueError::overflow("power", format!("{}^{exponent}", self.0)))
    }

    /// Floor of the square root; negative numbers give 0
    pub fn sqrt(&self) -> Integer {
        if self.0 < 0 { Self(0) } else { Self(self.0.isqrt()) }
    }

    /// `n!`; negative numbers give 0 and `0! == 1`
    pub fn factorial(&self) -> ValueResult<Integer> {
        if self.0 < 0 {
            return Ok(Self(0));
        }
        (2..=self.0)
            .try_fold(1i64, i64::checked_mul)
            .map(Self)
            .ok_or_else(|| ValueError::overflow("factorial", self.0.to_string()))
    }

    /// Greatest common divisor, always non-negative; `gcd(0, 0) == 0`
    pub fn gcd(&self, other: Integer) -> Integer {
        let (mut a, mut b) = (self.0.unsigned_abs(), other.0.unsigned_abs());
        while b != 0 {
            (a, b) = (b, a % b);
        }
        Self(i64::try_from(a).unwrap_or(i64::MAX))
    }

    /// Least common multiple, 0 if either side is 0, saturating on overflow
    pub fn lcm(&self, other: Integer) -> Integer {
        if self.0 == 0 || other.0 == 0 {
            return Self(0);
        }
        let gcd = self.gcd(other).0;
        Self((self.0 / gcd).saturating_mul(other.0).saturating_abs())
    }

    /// Positive divisors of `|self|` in ascending order; 0 has none
    pub fn divisors(&self) -> Array<Integer> {
        let n = self.0.unsigned_abs();
        let mut low = Vec::new();
        let mut high = Vec::new();
        let mut d = 1u64;
        while d.checked_mul(d).is_some_and(|sq| sq <= n) {
            if n % d == 0 {
                low.push(d);
                if d != n / d {
                    high.push(n / d);
                }
            }
            d += 1;
        }
        low.into_iter()
            .chain(high.into_iter().rev())
            .filter_map(|d| i64::try_from(d).ok())
            .map(Self)
            .collect()
    }

    pub fn min(self, other: Integer) -> Integer {
        Self(self.0.min(other.0))
    }

    pub fn max(self, other: Integer) -> Integer {
        Self(self.0.max(other.0))
    }

    /// Bound into `[min, max]`; the lower bound is applied first
    pub fn clamp(self, min: Integer, max: Integer) -> Integer {
        if self.0 < min.0 {
            min
        } else if self.0 > max.0 {
            max
        } else {
            self
        }
    }

    /// Saturating successor
    pub fn next(&self) -> Integer {
        Self(self.0.saturating_add(1))
    }

    /// Alias of [`next`](Self::next)
    pub fn succ(&self) -> Integer {
        self.next()
    }

    /// Saturating predecessor
    pub fn pred(&self) -> Integer {
        Self(self.0.saturating_sub(1))
    }

    /// Checked addition (returns None on overflow)
    pub fn checked_add(self, other: Self) -> Option<Self> {
        self.0.checked_add(other.0).map(Self)
    }

    /// Checked subtraction (returns None on overflow)
    pub fn checked_sub(self, other: Self) -> Option<Self> {
        self.0.checked_sub(other.0).map(Self)
    }

    // ==================== Iteration ====================

    /// Yield `0, 1, ..., self - 1`
    pub fn times<F: FnMut(Integer)>(&self, mut f: F) {
        for i in 0..self.0 {
            f(Self(i));
        }
    }

    /// Yield `self, self + 1, ..., limit`
    pub fn upto<F: FnMut(Integer)>(&self, limit: Integer, mut f: F) {
        for i in self.0..=limit.0 {
            f(Self(i));
        }
    }

    /// Yield `self, self - 1, ..., limit`
    pub fn downto<F: FnMut(Integer)>(&self, limit: Integer, mut f: F) {
        for i in (limit.0..=self.0).rev() {
            f(Self(i));
        }
    }

    /// Walk toward `limit` by `step`
    ///
    /// A positive step counts up while `<= limit`, a negative one counts down
    /// while `>= limit`. A zero step does nothing.
    pub fn step<F: FnMut(Integer)>(&self, limit: Integer, step: i64, mut f: F) {
        if step == 0 {
            rubyx_log::trace!(start = self.0, limit = limit.0, "integer step of 0 ignored");
            return;
        }
        let mut i = self.0;
        loop {
            if (step > 0 && i > limit.0) || (step < 0 && i < limit.0) {
                break;
            }
            f(Self(i));
            match i.checked_add(step) {
                Some(next) => i = next,
                None => break,
            }
        }
    }

    // ==================== Conversions ====================

    pub fn to_s(&self) -> Text {
        Text::from(self.0.to_string())
    }

    pub fn to_str(&self) -> String {
        self.0.to_string()
    }

    pub fn to_f(&self) -> Float {
        Float::new(self.0 as f64)
    }
}

impl fmt::Display for Integer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Integer {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<i64>()
            .map(Self)
            .map_err(|_| ValueError::parse_error("integer", s))
    }
}

impl From<i8> for Integer {
    fn from(v: i8) -> Self {
        Self(v as i64)
    }
}

impl From<i16> for Integer {
    fn from(v: i16) -> Self {
        Self(v as i64)
    }
}

impl From<i32> for Integer {
    fn from(v: i32) -> Self {
        Self(v as i64)
    }
}

impl From<i64> for Integer {
    fn from(v: i64) -> Self {
        Self(v)
    }
}

impl From<u8> for Integer {
    fn from(v: u8) -> Self {
        Self(v as i64)
    }
}

impl From<u16> for Integer {
    fn from(v: u16) -> Self {
        Self(v as i64)
    }
}

impl From<u32> for Integer {
    fn from(v: u32) -> Self {
        Self(v as i64)
    }
}

impl TryFrom<u64> for Integer {
    type Error = std::num::TryFromIntError;

    fn try_from(v: u64) -> Result<Self, Self::Error> {
        i64::try_from(v).map(Self)
    }
}

impl From<Integer> for i64 {
    fn from(i: Integer) -> Self {
        i.0
    }
}
