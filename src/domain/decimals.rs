//! Token decimal precision.

use crate::error::SwapError;

/// Maximum supported decimal places.
const MAX_DECIMALS: u8 = 18;

/// Number of decimal places of a token's ledger representation.
///
/// Valid range is `0..=18`; anything larger has no defined scaling factor
/// and is rejected with [`SwapError::PrecisionError`].
///
/// # Examples
///
/// ```
/// use pegswap::domain::Decimals;
///
/// let d = Decimals::new(4).expect("4 is valid");
/// assert_eq!(d.factor(), 10_000);
/// assert!(Decimals::new(19).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Decimals(u8);

impl Decimals {
    /// Zero decimal places.
    pub const ZERO: Self = Self(0);

    /// Maximum decimal places.
    pub const MAX: Self = Self(MAX_DECIMALS);

    /// Creates a new `Decimals` after validating the range.
    ///
    /// # Errors
    ///
    /// Returns [`SwapError::PrecisionError`] if `value` exceeds 18.
    pub fn new(value: u8) -> Result<Self, SwapError> {
        if value > MAX_DECIMALS {
            return Err(SwapError::PrecisionError(format!(
                "decimals must be 0..={MAX_DECIMALS}, got {value}"
            )));
        }
        Ok(Self(value))
    }

    /// Returns the raw decimal count.
    #[must_use]
    pub const fn get(&self) -> u8 {
        self.0
    }

    /// Returns `10^decimals`.
    #[must_use]
    pub const fn factor(&self) -> u128 {
        10u128.pow(self.0 as u32)
    }

    /// Returns `10^decimals` as a float. Exact for every valid precision.
    #[must_use]
    pub fn factor_f64(&self) -> f64 {
        10f64.powi(i32::from(self.0))
    }
}
