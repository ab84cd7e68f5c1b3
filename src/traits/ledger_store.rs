//! Storage of pool and settings records.
//!
//! [`LedgerStore`] is the engine's only window onto persistent state. The
//! engine reads one consistent snapshot of the records it needs during a
//! swap and proposes exactly one mutation, fee accrual, after every check
//! has passed.
//!
//! # Cached vs observed balance
//!
//! A pool record carries a cached `balance` used by the swap guards. The
//! store also reports the balance actually held on the ledger by the pool's
//! owner account, which the monitoring ratio uses. Keeping the two in step
//! is the store's responsibility; the engine never writes `balance`.

use crate::config::Settings;
use crate::domain::{Pool, Quantity, SymbolCode};
use crate::error::SwapError;

/// Key-value access to pools and the global settings record.
///
/// # Errors
///
/// - [`SwapError::PoolNotFound`] when no pool is keyed by the code.
/// - Implementation-specific errors for storage failures.
pub trait LedgerStore {
    /// Returns the pool keyed by `code`.
    ///
    /// # Errors
    ///
    /// Returns [`SwapError::PoolNotFound`] if the pool does not exist.
    fn pool(&self, code: &SymbolCode) -> Result<Pool, SwapError>;

    /// Returns the global settings.
    ///
    /// # Errors
    ///
    /// Returns an error if the settings record is missing.
    fn settings(&self) -> Result<Settings, SwapError>;

    /// Returns the balance of `pool`'s token held on the ledger by the pool's
    /// owner, independent of the cached `balance` field.
    ///
    /// # Errors
    ///
    /// Returns an error if the ledger cannot report the balance.
    fn ledger_balance(&self, pool: &Pool) -> Result<Quantity, SwapError>;

    /// Adds `fee` to the proceeds of the pool of `fee`'s symbol.
    ///
    /// # Errors
    ///
    /// - [`SwapError::PoolNotFound`] if the pool does not exist.
    /// - [`SwapError::SymbolMismatch`] or [`SwapError::Overflow`] from the
    ///   proceeds arithmetic.
    fn add_proceeds(&mut self, fee: &Quantity) -> Result<(), SwapError>;
}
