//! Requester authorization.

use crate::domain::Account;
use crate::error::SwapError;

/// Verifies that a requester is the authorized sender of the inbound transfer.
///
/// Authorization runs first; a failure aborts the swap before any record is
/// read.
pub trait Authorizer {
    /// Succeeds if `requester` authorized the swap.
    ///
    /// # Errors
    ///
    /// Returns [`SwapError::Unauthorized`] otherwise.
    fn require_auth(&self, requester: &Account) -> Result<(), SwapError>;
}
