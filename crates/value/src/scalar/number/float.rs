use std::fmt;
use std::str::FromStr;

use crate::error::{ValueError, ValueResult};
use crate::scalar::{Integer, Text};

/// 64-bit float with Ruby's `Float` method set
///
/// Equality is IEEE equality (`NaN != NaN`), so `Float` is `PartialEq` only.
/// Arrays of floats sort with [`f64::total_cmp`].
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Float(f64);

impl Float {
    /// Create a new float
    pub const fn new(value: f64) -> Self {
        Self(value)
    }

    /// Get the inner value
    pub const fn value(&self) -> f64 {
        self.0
    }

    // ==================== Predicates ====================

    pub fn is_positive(&self) -> bool {
        self.0 > 0.0
    }

    pub fn is_negative(&self) -> bool {
        self.0 < 0.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0.0
    }

    pub fn is_finite(&self) -> bool {
        self.0.is_finite()
    }

    pub fn is_infinite(&self) -> bool {
        self.0.is_infinite()
    }

    pub fn is_nan(&self) -> bool {
        self.0.is_nan()
    }

    /// Finite with no fractional part
    pub fn is_integer(&self) -> bool {
        self.0.is_finite() && self.0.fract() == 0.0
    }

    pub fn between(&self, min: Float, max: Float) -> bool {
        min.0 <= self.0 && self.0 <= max.0
    }

    // ==================== Rounding ====================

    pub fn ceil(&self) -> Float {
        Self(self.0.ceil())
    }

    pub fn floor(&self) -> Float {
        Self(self.0.floor())
    }

    /// Half away from zero: `2.5 -> 3.0`, `-2.5 -> -3.0`
    pub fn round(&self) -> Float {
        Self(self.0.round())
    }

    pub fn abs(&self) -> Float {
        Self(self.0.abs())
    }

    // ==================== Math ====================

    pub fn power(&self, exponent: Float) -> Float {
        Self(self.0.powf(exponent.0))
    }

    /// NaN for negative input
    pub fn sqrt(&self) -> Float {
        Self(self.0.sqrt())
    }

    pub fn sin(&self) -> Float {
        Self(self.0.sin())
    }

    pub fn cos(&self) -> Float {
        Self(self.0.cos())
    }

    pub fn tan(&self) -> Float {
        Self(self.0.tan())
    }

    /// Natural logarithm
    pub fn log(&self) -> Float {
        Self(self.0.ln())
    }

    pub fn log10(&self) -> Float {
        Self(self.0.log10())
    }

    pub fn exp(&self) -> Float {
        Self(self.0.exp())
    }

    /// NaN loses against a number
    pub fn min(self, other: Float) -> Float {
        Self(self.0.min(other.0))
    }

    /// NaN loses against a number
    pub fn max(self, other: Float) -> Float {
        Self(self.0.max(other.0))
    }

    /// Bound into `[min, max]`; the lower bound is applied first
    pub fn clamp(self, min: Float, max: Float) -> Float {
        if self.0 < min.0 {
            min
        } else if self.0 > max.0 {
            max
        } else {
            self
        }
    }

    /// Checked addition, `None` when the sum is not finite
    pub fn checked_add(self, other: Self) -> Option<Self> {
        let sum = self.0 + other.0;
        sum.is_finite().then_some(Self(sum))
    }

    /// Checked subtraction, `None` when the difference is not finite
    pub fn checked_sub(self, other: Self) -> Option<Self> {
        let diff = self.0 - other.0;
        diff.is_finite().then_some(Self(diff))
    }

    // ==================== Conversions ====================

    /// Truncate toward zero; NaN maps to 0 and infinities saturate
    pub fn to_i(&self) -> Integer {
        Integer::new(self.0 as i64)
    }

    /// Shortest round-tripping form: `3.25`, `100`, `0`
    pub fn to_s(&self) -> Text {
        Text::from(self.to_string())
    }

    pub fn to_str(&self) -> String {
        self.to_string()
    }

    /// Fallible conversion to an integer for callers that need exactness
    pub fn try_to_i(&self) -> ValueResult<Integer> {
        if self.is_integer() && self.0 >= i64::MIN as f64 && self.0 < i64::MAX as f64 {
            Ok(Integer::new(self.0 as i64))
        } else {
            Err(ValueError::overflow("to_i", self.to_string()))
        }
    }
}

impl fmt::Display for Float {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_nan() {
            write!(f, "NaN")
        } else if self.0.is_infinite() {
            if self.0.is_sign_positive() {
                write!(f, "+Inf")
            } else {
                write!(f, "-Inf")
            }
        } else {
            write!(f, "{}", self.0)
        }
    }
}

impl FromStr for Float {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<f64>()
            .map(Self)
            .map_err(|_| ValueError::parse_error("float", s))
    }
}

impl From<f32> for Float {
    fn from(v: f32) -> Self {
        Self(v as f64)
    }
}

impl From<f64> for Float {
    fn from(v: f64) -> Self {
        Self(v)
    }
}

impl From<i32> for Float {
    fn from(v: i32) -> Self {
        Self(v as f64)
    }
}

impl From<Integer> for Float {
    fn from(v: Integer) -> Self {
        v.to_f()
    }
}

impl From<Float> for f64 {
    fn from(v: Float) -> Self {
        v.0
    }
}
