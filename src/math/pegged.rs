//! Conversion between ledger quantities and floating reference values.
//!
//! A ledger quantity is an integer amount at a fixed decimal precision;
//! pricing happens in `f64` whole-token units. [`to_reference`] and
//! [`from_reference`] are the only two crossings between the two worlds,
//! and [`from_reference`] is the single point where a float is quantized
//! back to an integer amount.

use crate::domain::{Amount, Quantity, Rounding, Symbol};
use crate::error::SwapError;

/// Returns the quantity in whole-token units, `amount / 10^decimals`.
///
/// # Examples
///
/// ```
/// use pegswap::domain::Quantity;
/// use pegswap::math::to_reference;
///
/// let q: Quantity = "99.7000 EOS".parse().expect("valid");
/// assert!((to_reference(&q) - 99.7).abs() < 1e-12);
/// ```
#[must_use]
pub fn to_reference(quantity: &Quantity) -> f64 {
    quantity.amount().to_f64() / quantity.symbol().decimals().factor_f64()
}

/// Quantizes a whole-token value to `symbol`'s precision, rounding to the
/// nearest unit with ties away from zero.
///
/// `from_reference(to_reference(&q), q.symbol()) == Ok(q)` holds while the
/// amount stays well inside the 53-bit `f64` mantissa (up to about 10^15
/// units). Past 2^53 an `f64` cannot hold every integer and the result is
/// only the nearest representable unit, so an 18-decimal token stops
/// round-tripping at roughly 0.009 tokens.
///
/// # Errors
///
/// Returns [`SwapError::PrecisionError`] if `value` is not finite, is
/// negative, or does not fit the amount type at this precision.
///
/// # Examples
///
/// ```
/// use pegswap::domain::Symbol;
/// use pegswap::math::from_reference;
///
/// let usdt = Symbol::parts("USDT", 4).expect("valid");
/// let q = from_reference(1.23456, usdt).expect("representable");
/// assert_eq!(q.to_string(), "1.2346 USDT");
/// ```
pub fn from_reference(value: f64, symbol: Symbol) -> Result<Quantity, SwapError> {
    from_reference_with(value, symbol, Rounding::NearestAwayFromZero)
}

/// [`from_reference`] with an explicit rounding direction.
///
/// # Errors
///
/// Same as [`from_reference`].
pub fn from_reference_with(
    value: f64,
    symbol: Symbol,
    rounding: Rounding,
) -> Result<Quantity, SwapError> {
    if !value.is_finite() {
        return Err(SwapError::PrecisionError(format!(
            "cannot represent non-finite value {value} as {symbol}"
        )));
    }
    if value < 0.0 {
        return Err(SwapError::PrecisionError(format!(
            "cannot represent negative value {value} as {symbol}"
        )));
    }
    let scaled = rounding.apply(value * symbol.decimals().factor_f64());
    #[allow(clippy::cast_precision_loss)]
    let ceiling = u128::MAX as f64;
    if !scaled.is_finite() || scaled >= ceiling {
        return Err(SwapError::PrecisionError(format!(
            "value {value} overflows {symbol}"
        )));
    }
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let raw = scaled as u128;
    Ok(Quantity::new(Amount::new(raw), symbol))
}
