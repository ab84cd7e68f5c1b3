//! Checked `f64` arithmetic for reference-unit values.
//!
//! [`RefValue`] is a newtype over `f64` used for every intermediate of the
//! curve computation. Its checked operations reject any result that is not
//! finite, so a `NaN` or an infinity can never leak into a quantity.
//!
//! # Precision characteristics
//!
//! | Aspect | Value |
//! |--------|-------|
//! | Significant digits | ~15–17 |
//! | Exact integers | up to 2^53 |
//! | Determinism | IEEE 754 round-to-nearest-even per operation |

use core::fmt;

use crate::error::SwapError;

/// A finite `f64` value expressed in the common reference unit.
///
/// # Examples
///
/// ```
/// use pegswap::math::RefValue;
///
/// let depth = RefValue::new(1000.0);
/// let peg = RefValue::new(2.5);
/// let Ok(depth_ref) = depth.checked_mul(&peg) else { unreachable!() };
/// assert_eq!(depth_ref.get(), 2500.0);
/// assert!(RefValue::new(1.0).checked_div(&RefValue::ZERO).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct RefValue(f64);

impl RefValue {
    /// Zero.
    pub const ZERO: Self = Self(0.0);

    /// One.
    pub const ONE: Self = Self(1.0);

    /// Wraps a raw `f64`.
    #[inline]
    #[must_use]
    pub const fn new(value: f64) -> Self {
        Self(value)
    }

    /// Wraps a raw `f64`, rejecting `NaN` and infinities.
    ///
    /// # Errors
    ///
    /// Returns [`SwapError::NonFiniteValue`] tagged with `context`.
    pub fn finite(value: f64, context: &'static str) -> Result<Self, SwapError> {
        if value.is_finite() {
            Ok(Self(value))
        } else {
            Err(SwapError::NonFiniteValue(context))
        }
    }

    /// Returns the underlying `f64`.
    #[inline]
    #[must_use]
    pub const fn get(&self) -> f64 {
        self.0
    }

    /// Checked addition.
    ///
    /// # Errors
    ///
    /// Returns [`SwapError::NonFiniteValue`] if the sum is not finite.
    pub fn checked_add(&self, other: &Self) -> Result<Self, SwapError> {
        Self::finite(self.0 + other.0, "addition")
    }

    /// Checked subtraction.
    ///
    /// # Errors
    ///
    /// Returns [`SwapError::NonFiniteValue`] if the difference is not finite.
    pub fn checked_sub(&self, other: &Self) -> Result<Self, SwapError> {
        Self::finite(self.0 - other.0, "subtraction")
    }

    /// Checked multiplication.
    ///
    /// # Errors
    ///
    /// Returns [`SwapError::NonFiniteValue`] if the product is not finite.
    pub fn checked_mul(&self, other: &Self) -> Result<Self, SwapError> {
        Self::finite(self.0 * other.0, "multiplication")
    }

    /// Checked division.
    ///
    /// # Errors
    ///
    /// Returns [`SwapError::NonFiniteValue`] if `other` is zero or the
    /// quotient is not finite.
    pub fn checked_div(&self, other: &Self) -> Result<Self, SwapError> {
        if other.0 == 0.0 {
            return Err(SwapError::NonFiniteValue("division by zero"));
        }
        Self::finite(self.0 / other.0, "division")
    }

    /// Returns the smaller of two values.
    #[inline]
    #[must_use]
    pub fn min(&self, other: &Self) -> Self {
        Self(self.0.min(other.0))
    }

    /// Returns `true` if the value is strictly positive.
    #[inline]
    #[must_use]
    pub fn is_positive(&self) -> bool {
        self.0 > 0.0
    }
}

impl From<u64> for RefValue {
    fn from(value: u64) -> Self {
        #[allow(clippy::cast_precision_loss)]
        Self(value as f64)
    }
}

impl fmt::Display for RefValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
