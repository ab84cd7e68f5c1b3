//! In-memory ledger store.

use std::collections::BTreeMap;

use tracing::debug;

use crate::config::Settings;
use crate::domain::{ConvertReceipt, Pool, Quantity, SymbolCode};
use crate::error::SwapError;
use crate::traits::LedgerStore;

/// Pools, settings and observed ledger balances held in memory.
///
/// Besides each pool's cached `balance`, the ledger tracks the balance the
/// pool's owner actually holds on the ledger (the *observed* balance). The
/// two are kept in step by [`MemoryLedger::sync_balance`]:
///
/// ```text
/// cached balance = observed balance - proceeds
/// ```
///
/// [`MemoryLedger::settle`] applies a committed conversion's token
/// movements to the observed balances and resyncs both pools.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryLedger {
    settings: Settings,
    pools: BTreeMap<SymbolCode, Pool>,
    observed: BTreeMap<SymbolCode, Quantity>,
}

/// A point-in-time copy of a [`MemoryLedger`], for rolling back a commit
/// that failed half way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LedgerSnapshot(MemoryLedger);

impl MemoryLedger {
    /// Creates an empty ledger with the given settings.
    #[must_use]
    pub const fn new(settings: Settings) -> Self {
        Self {
            settings,
            pools: BTreeMap::new(),
            observed: BTreeMap::new(),
        }
    }

    /// Replaces the settings record.
    ///
    /// # Errors
    ///
    /// Returns [`SwapError::InvalidConfiguration`] if `settings` is invalid.
    pub fn set_settings(&mut self, settings: Settings) -> Result<(), SwapError> {
        settings.validate()?;
        self.settings = settings;
        Ok(())
    }

    /// Inserts or replaces a pool.
    ///
    /// The observed balance starts at `balance + proceeds`, which keeps the
    /// cached balance in step.
    ///
    /// # Errors
    ///
    /// Any error from [`Pool::validate`], or [`SwapError::Overflow`].
    pub fn insert_pool(&mut self, pool: Pool) -> Result<(), SwapError> {
        pool.validate()?;
        let observed = pool.balance().checked_add(&pool.proceeds())?;
        debug!(symbol = %pool.code(), balance = %pool.balance(), "pool inserted");
        self.observed.insert(pool.code(), observed);
        self.pools.insert(pool.code(), pool);
        Ok(())
    }

    /// Mutable access to a pool record.
    ///
    /// # Errors
    ///
    /// Returns [`SwapError::PoolNotFound`] if the pool does not exist.
    pub fn pool_mut(&mut self, code: &SymbolCode) -> Result<&mut Pool, SwapError> {
        self.pools
            .get_mut(code)
            .ok_or(SwapError::PoolNotFound(*code))
    }

    /// Iterates over all pools in symbol-code order.
    pub fn pools(&self) -> impl Iterator<Item = &Pool> {
        self.pools.values()
    }

    /// Overrides the observed ledger balance of `balance`'s pool.
    ///
    /// The cached balance is left alone; call
    /// [`MemoryLedger::sync_balance`] to bring it in line.
    ///
    /// # Errors
    ///
    /// - [`SwapError::PoolNotFound`] if the pool does not exist.
    /// - [`SwapError::SymbolMismatch`] if the precision differs.
    pub fn set_ledger_balance(&mut self, balance: Quantity) -> Result<(), SwapError> {
        let code = balance.symbol().code();
        let slot = self
            .observed
            .get_mut(&code)
            .ok_or(SwapError::PoolNotFound(code))?;
        slot.ensure_same_symbol(&balance)?;
        *slot = balance;
        Ok(())
    }

    /// Recomputes a pool's cached balance from its observed balance and
    /// proceeds, and returns it.
    ///
    /// # Errors
    ///
    /// - [`SwapError::PoolNotFound`] if the pool does not exist.
    /// - [`SwapError::Overflow`] if proceeds exceed the observed balance.
    pub fn sync_balance(&mut self, code: &SymbolCode) -> Result<Quantity, SwapError> {
        let observed = *self
            .observed
            .get(code)
            .ok_or(SwapError::PoolNotFound(*code))?;
        let pool = self.pool_mut(code)?;
        let cached = observed.checked_sub(&pool.proceeds())?;
        pool.set_balance(cached)?;
        debug!(symbol = %code, %observed, %cached, "balance synced");
        Ok(cached)
    }

    /// Applies a committed conversion to the observed balances: the gross
    /// inbound arrives in the source pool, the output leaves the target
    /// pool. Both cached balances are then resynced.
    ///
    /// # Errors
    ///
    /// - [`SwapError::PoolNotFound`] if either pool is gone.
    /// - [`SwapError::Overflow`] if the target pool cannot cover the output.
    pub fn settle(&mut self, receipt: &ConvertReceipt) -> Result<(), SwapError> {
        let inbound = receipt.quote().gross_in();
        let out = receipt.out();
        let source = inbound.symbol().code();
        let target = out.symbol().code();

        let credited = self.observed_balance(&source)?.checked_add(&inbound)?;
        let debited = self.observed_balance(&target)?.checked_sub(&out)?;
        self.observed.insert(source, credited);
        self.observed.insert(target, debited);

        self.sync_balance(&source)?;
        self.sync_balance(&target)?;
        Ok(())
    }

    /// Observed ledger balance of the pool keyed by `code`.
    ///
    /// # Errors
    ///
    /// Returns [`SwapError::PoolNotFound`] if the pool does not exist.
    pub fn observed_balance(&self, code: &SymbolCode) -> Result<Quantity, SwapError> {
        self.observed
            .get(code)
            .copied()
            .ok_or(SwapError::PoolNotFound(*code))
    }

    /// Copies the whole ledger state.
    #[must_use]
    pub fn snapshot(&self) -> LedgerSnapshot {
        LedgerSnapshot(self.clone())
    }

    /// Puts back a state captured by [`MemoryLedger::snapshot`].
    pub fn restore(&mut self, snapshot: LedgerSnapshot) {
        *self = snapshot.0;
    }
}

impl LedgerStore for MemoryLedger {
    fn pool(&self, code: &SymbolCode) -> Result<Pool, SwapError> {
        self.pools
            .get(code)
            .cloned()
            .ok_or(SwapError::PoolNotFound(*code))
    }

    fn settings(&self) -> Result<Settings, SwapError> {
        Ok(self.settings.clone())
    }

    fn ledger_balance(&self, pool: &Pool) -> Result<Quantity, SwapError> {
        self.observed_balance(&pool.code())
    }

    fn add_proceeds(&mut self, fee: &Quantity) -> Result<(), SwapError> {
        let pool = self.pool_mut(&fee.symbol().code())?;
        pool.add_proceeds(fee)?;
        debug!(symbol = %pool.code(), %fee, proceeds = %pool.proceeds(), "proceeds added");
        Ok(())
    }
}
