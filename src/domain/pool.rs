//! Per-token liquidity pool record.

use std::collections::BTreeSet;

use super::{Account, Quantity, Symbol, SymbolCode};
use crate::error::SwapError;

/// The state of one token's liquidity pool.
///
/// A pool holds a balance of its own token plus the parameters that shape
/// the curve when it is paired with another pool: a virtual `depth`, a
/// `pegged` value in the reference unit, and an `amplifier`.
///
/// Records are owned by the [`LedgerStore`](crate::traits::LedgerStore);
/// the engine reads them and proposes changes through that trait.
///
/// # Invariants
///
/// Enforced by [`Pool::validate`], which the builder runs:
///
/// - `balance`, `depth` and `proceeds` carry the pool's own symbol.
/// - `pegged` is strictly positive.
/// - `amplifier >= 1`.
///
/// A zero balance or depth is a valid record but cannot take part in a swap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pool {
    symbol: Symbol,
    contract_owner: Account,
    balance: Quantity,
    depth: Quantity,
    pegged: Quantity,
    peg_kind: SymbolCode,
    amplifier: u64,
    connectors: BTreeSet<SymbolCode>,
    enabled: bool,
    proceeds: Quantity,
}

impl Pool {
    /// Starts building a pool for `symbol` whose funds are held by `contract_owner`.
    ///
    /// Balance, depth and proceeds default to zero, the amplifier to 1, the
    /// pool is enabled and has no connectors. `pegged` and `peg_kind` must be
    /// set before [`PoolBuilder::build`].
    #[must_use]
    pub fn builder(symbol: Symbol, contract_owner: Account) -> PoolBuilder {
        PoolBuilder::new(symbol, contract_owner)
    }

    /// Checks the record invariants.
    ///
    /// # Errors
    ///
    /// - [`SwapError::SymbolMismatch`] if a quantity field carries another symbol.
    /// - [`SwapError::InvalidConfiguration`] for a zero peg or amplifier.
    pub fn validate(&self) -> Result<(), SwapError> {
        let own = Quantity::zero(self.symbol);
        own.ensure_same_symbol(&self.balance)?;
        own.ensure_same_symbol(&self.depth)?;
        own.ensure_same_symbol(&self.proceeds)?;
        if self.symbol.is_empty() {
            return Err(SwapError::EmptyIdentifier("pool symbol"));
        }
        if self.pegged.is_zero() {
            return Err(SwapError::InvalidConfiguration(format!(
                "{} pool pegged value must be positive",
                self.code()
            )));
        }
        if self.amplifier == 0 {
            return Err(SwapError::InvalidConfiguration(format!(
                "{} pool amplifier must be at least 1",
                self.code()
            )));
        }
        Ok(())
    }

    /// Returns the pool's token symbol.
    #[must_use]
    pub const fn symbol(&self) -> Symbol {
        self.symbol
    }

    /// Returns the pool key.
    #[must_use]
    pub const fn code(&self) -> SymbolCode {
        self.symbol.code()
    }

    /// Returns the account holding the pool's funds.
    #[must_use]
    pub fn contract_owner(&self) -> &Account {
        &self.contract_owner
    }

    /// Returns the cached balance.
    #[must_use]
    pub const fn balance(&self) -> Quantity {
        self.balance
    }

    /// Returns the virtual depth.
    #[must_use]
    pub const fn depth(&self) -> Quantity {
        self.depth
    }

    /// Returns the pegged value in the reference unit.
    #[must_use]
    pub const fn pegged(&self) -> Quantity {
        self.pegged
    }

    /// Returns the unit the token is natively denominated in.
    #[must_use]
    pub const fn peg_kind(&self) -> SymbolCode {
        self.peg_kind
    }

    /// Returns the amplification factor.
    #[must_use]
    pub const fn amplifier(&self) -> u64 {
        self.amplifier
    }

    /// Returns the connector set.
    #[must_use]
    pub fn connectors(&self) -> &BTreeSet<SymbolCode> {
        &self.connectors
    }

    /// Returns `true` if the pool may swap against `code`.
    #[must_use]
    pub fn has_connector(&self, code: &SymbolCode) -> bool {
        self.connectors.contains(code)
    }

    /// Returns `true` if swaps are enabled.
    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Returns unwithdrawn fee revenue.
    #[must_use]
    pub const fn proceeds(&self) -> Quantity {
        self.proceeds
    }

    /// Replaces the cached balance.
    ///
    /// # Errors
    ///
    /// Returns [`SwapError::SymbolMismatch`] if `balance` is another token.
    pub fn set_balance(&mut self, balance: Quantity) -> Result<(), SwapError> {
        self.balance.ensure_same_symbol(&balance)?;
        self.balance = balance;
        Ok(())
    }

    /// Switches swaps on or off.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Adds a fee to the accumulated proceeds.
    ///
    /// # Errors
    ///
    /// - [`SwapError::SymbolMismatch`] if `fee` is another token.
    /// - [`SwapError::Overflow`] on overflow.
    pub fn add_proceeds(&mut self, fee: &Quantity) -> Result<(), SwapError> {
        self.proceeds = self.proceeds.checked_add(fee)?;
        Ok(())
    }
}

/// Step-by-step constructor for [`Pool`].
#[derive(Debug, Clone)]
pub struct PoolBuilder {
    pool: Pool,
}

impl PoolBuilder {
    fn new(symbol: Symbol, contract_owner: Account) -> Self {
        let zero = Quantity::zero(symbol);
        Self {
            pool: Pool {
                symbol,
                contract_owner,
                balance: zero,
                depth: zero,
                pegged: Quantity::default(),
                peg_kind: SymbolCode::EMPTY,
                amplifier: 1,
                connectors: BTreeSet::new(),
                enabled: true,
                proceeds: zero,
            },
        }
    }

    /// Sets the cached balance.
    #[must_use]
    pub fn balance(mut self, balance: Quantity) -> Self {
        self.pool.balance = balance;
        self
    }

    /// Sets the virtual depth.
    #[must_use]
    pub fn depth(mut self, depth: Quantity) -> Self {
        self.pool.depth = depth;
        self
    }

    /// Sets the pegged value and the unit the token is denominated in.
    #[must_use]
    pub fn pegged(mut self, pegged: Quantity, peg_kind: SymbolCode) -> Self {
        self.pool.pegged = pegged;
        self.pool.peg_kind = peg_kind;
        self
    }

    /// Sets the amplification factor.
    #[must_use]
    pub fn amplifier(mut self, amplifier: u64) -> Self {
        self.pool.amplifier = amplifier;
        self
    }

    /// Adds a connector.
    #[must_use]
    pub fn connector(mut self, code: SymbolCode) -> Self {
        self.pool.connectors.insert(code);
        self
    }

    /// Adds several connectors.
    #[must_use]
    pub fn connectors<I: IntoIterator<Item = SymbolCode>>(mut self, codes: I) -> Self {
        self.pool.connectors.extend(codes);
        self
    }

    /// Sets the enabled flag.
    #[must_use]
    pub fn enabled(mut self, enabled: bool) -> Self {
        self.pool.enabled = enabled;
        self
    }

    /// Sets the accumulated proceeds.
    #[must_use]
    pub fn proceeds(mut self, proceeds: Quantity) -> Self {
        self.pool.proceeds = proceeds;
        self
    }

    /// Validates and returns the pool.
    ///
    /// # Errors
    ///
    /// Any error from [`Pool::validate`].
    pub fn build(self) -> Result<Pool, SwapError> {
        self.pool.validate()?;
        Ok(self.pool)
    }
}
