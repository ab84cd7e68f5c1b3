//! Volume bookkeeping.

use crate::domain::Quantity;
use crate::error::SwapError;

/// Additive trade-volume accounting. Never feeds back into pricing.
///
/// Each committed conversion records two legs: the inbound leg with its fee
/// and the outbound leg with a zero fee in the outbound token.
pub trait VolumeTracker {
    /// Adds one leg of volume.
    ///
    /// # Errors
    ///
    /// Implementation-specific.
    fn add_volume(&mut self, quantity: &Quantity, fee: &Quantity) -> Result<(), SwapError>;
}
