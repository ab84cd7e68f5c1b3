//! Global conversion settings.

use crate::domain::{BasisPoints, Quantity, SymbolCode};
use crate::error::SwapError;

/// The single global settings record.
///
/// # Validation
///
/// - `pool_fee` must be a valid percentage (`<= 10_000` bp).
/// - `min_convert` must be denominated in `reference_unit`.
/// - `reference_unit` must not be empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    min_convert: Quantity,
    pool_fee: BasisPoints,
    reference_unit: SymbolCode,
}

impl Settings {
    /// Creates validated settings.
    ///
    /// # Arguments
    ///
    /// - `min_convert`: minimum trade size in reference units.
    /// - `pool_fee`: fee rate applied to every inbound quantity.
    /// - `reference_unit`: code of the unit pegged values are expressed in.
    ///
    /// # Errors
    ///
    /// Returns [`SwapError::InvalidConfiguration`] if any rule above fails.
    pub fn new(
        min_convert: Quantity,
        pool_fee: BasisPoints,
        reference_unit: SymbolCode,
    ) -> Result<Self, SwapError> {
        let settings = Self {
            min_convert,
            pool_fee,
            reference_unit,
        };
        settings.validate()?;
        Ok(settings)
    }

    /// Validates all settings invariants.
    ///
    /// # Errors
    ///
    /// Returns [`SwapError::InvalidConfiguration`] on the first violation.
    pub fn validate(&self) -> Result<(), SwapError> {
        if !self.pool_fee.is_valid_percent() {
            return Err(SwapError::InvalidConfiguration(format!(
                "pool_fee {} exceeds 100%",
                self.pool_fee
            )));
        }
        if self.reference_unit.is_empty() {
            return Err(SwapError::InvalidConfiguration(
                "reference_unit cannot be empty".to_owned(),
            ));
        }
        if self.min_convert.symbol().code() != self.reference_unit {
            return Err(SwapError::InvalidConfiguration(format!(
                "min_convert {} must be denominated in {}",
                self.min_convert, self.reference_unit
            )));
        }
        Ok(())
    }

    /// Minimum trade size.
    #[must_use]
    pub const fn min_convert(&self) -> Quantity {
        self.min_convert
    }

    /// Fee rate.
    #[must_use]
    pub const fn pool_fee(&self) -> BasisPoints {
        self.pool_fee
    }

    /// Reference unit code.
    #[must_use]
    pub const fn reference_unit(&self) -> SymbolCode {
        self.reference_unit
    }
}
