//! Protocol fee on inbound quantities.
//!
//! ```text
//! fee = floor(quantity × pool_fee_bps / 10_000)
//! fee = max(fee, 1)            when pool_fee_bps > 0
//! reject if fee >= quantity
//! ```
//!
//! The one-unit floor means a configured fee is never waived on tiny
//! trades; the rejection stops the fee from consuming the whole input.

use tracing::debug;

use crate::config::Settings;
use crate::domain::{Amount, Quantity, Rounding};
use crate::error::SwapError;

/// Computes the fee taken from `quantity` at the settings' rate.
///
/// The fee carries the same symbol as `quantity`.
///
/// # Errors
///
/// - [`SwapError::FeeExceedsQuantity`] if the fee is not strictly smaller
///   than `quantity` (including a zero quantity).
/// - [`SwapError::Overflow`] if the rate multiplication overflows.
///
/// # Examples
///
/// ```
/// use pegswap::config::Settings;
/// use pegswap::domain::{BasisPoints, Quantity};
/// use pegswap::engine::calculate_pool_fee;
///
/// let settings = Settings::new(
///     "1.0000 USD".parse().expect("valid"),
///     BasisPoints::new(30),
///     "USD".parse().expect("valid"),
/// )
/// .expect("valid settings");
///
/// let inbound: Quantity = "100.0000 EOS".parse().expect("valid");
/// let fee = calculate_pool_fee(&settings, &inbound).expect("fee fits");
/// assert_eq!(fee.to_string(), "0.3000 EOS");
/// ```
pub fn calculate_pool_fee(settings: &Settings, quantity: &Quantity) -> Result<Quantity, SwapError> {
    let rate = settings.pool_fee();
    let mut amount = rate.apply(quantity.amount(), Rounding::Down)?;
    if !rate.is_zero() && amount.is_zero() {
        amount = Amount::ONE;
    }
    let fee = quantity.with_amount(amount);
    if fee.amount() >= quantity.amount() {
        return Err(SwapError::FeeExceedsQuantity {
            quantity: *quantity,
            fee,
        });
    }
    debug!(quantity = %quantity, fee = %fee, rate = %rate, "pool fee calculated");
    Ok(fee)
}
