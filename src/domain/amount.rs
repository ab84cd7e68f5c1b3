//! Raw ledger amount with checked arithmetic.

use core::fmt;

use super::Rounding;

/// A raw token amount in the token's smallest unit.
///
/// `Amount` never interprets decimals; that is the job of
/// [`Symbol`](super::Symbol). Arithmetic is checked and returns `None`
/// on overflow, underflow or division by zero.
///
/// # Examples
///
/// ```
/// use pegswap::domain::Amount;
///
/// let balance = Amount::new(10_000_000);
/// let inflow = Amount::new(1_000);
/// assert_eq!(balance.checked_add(&inflow), Some(Amount::new(10_001_000)));
/// assert_eq!(inflow.checked_sub(&balance), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[must_use]
pub struct Amount(u128);

impl Amount {
    /// Zero amount.
    pub const ZERO: Self = Self(0);

    /// Smallest non-zero amount.
    pub const ONE: Self = Self(1);

    /// Creates a new `Amount` from a raw value.
    pub const fn new(value: u128) -> Self {
        Self(value)
    }

    /// Returns the underlying value.
    #[must_use]
    pub const fn get(&self) -> u128 {
        self.0
    }

    /// Returns `true` if the amount is zero.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checked addition.
    #[must_use]
    pub const fn checked_add(&self, other: &Self) -> Option<Self> {
        match self.0.checked_add(other.0) {
            Some(v) => Some(Self(v)),
            None => None,
        }
    }

    /// Checked subtraction. Returns `None` when `other > self`.
    #[must_use]
    pub const fn checked_sub(&self, other: &Self) -> Option<Self> {
        match self.0.checked_sub(other.0) {
            Some(v) => Some(Self(v)),
            None => None,
        }
    }

    /// Checked multiply-then-divide, `self * mul / div`, with explicit rounding.
    ///
    /// Returns `None` if `div` is zero or the product overflows.
    #[must_use]
    pub const fn checked_mul_div(&self, mul: u128, div: u128, rounding: Rounding) -> Option<Self> {
        if div == 0 {
            return None;
        }
        let product = match self.0.checked_mul(mul) {
            Some(v) => v,
            None => return None,
        };
        let q = product / div;
        let r = product % div;
        match rounding {
            Rounding::Down => Some(Self(q)),
            Rounding::Up => {
                if r == 0 {
                    Some(Self(q))
                } else {
                    Some(Self(q + 1))
                }
            }
            Rounding::NearestAwayFromZero => {
                // r >= div - r  <=>  remainder is at least half of div
                if r >= div - r {
                    Some(Self(q + 1))
                } else {
                    Some(Self(q))
                }
            }
        }
    }

    /// Converts to `f64`. Values above 2^53 lose precision.
    #[must_use]
    pub fn to_f64(&self) -> f64 {
        #[allow(clippy::cast_precision_loss)]
        let v = self.0 as f64;
        v
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u128> for Amount {
    fn from(value: u128) -> Self {
        Self(value)
    }
}
