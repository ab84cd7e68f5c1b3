//! Pool-ratio and trade-size guards.
//!
//! A pool's ratio is its balance divided by its virtual depth. Deposits may
//! not push the receiving pool above [`MAX_POOL_RATIO`]; withdrawals may not
//! drain the paying pool below [`MIN_POOL_RATIO`]. Both checks look at the
//! state the pool would be in after the swap.

use tracing::{debug, warn};

use crate::config::Settings;
use crate::domain::{Pool, Quantity, SymbolCode};
use crate::error::SwapError;
use crate::math::to_reference;
use crate::traits::LedgerStore;

/// Upper bound on `balance / depth` after a deposit (500%).
pub const MAX_POOL_RATIO: f64 = 5.0;

/// Lower bound on `balance / depth` after a withdrawal (20%).
pub const MIN_POOL_RATIO: f64 = 0.2;

/// `balance / depth` computed on raw amounts.
///
/// Both quantities share the pool's precision, so the scale cancels out.
///
/// # Errors
///
/// Returns [`SwapError::PoolHasNoDepth`] if `depth` is zero.
pub fn pool_ratio(code: SymbolCode, balance: &Quantity, depth: &Quantity) -> Result<f64, SwapError> {
    if depth.is_zero() {
        return Err(SwapError::PoolHasNoDepth(code));
    }
    Ok(balance.amount().to_f64() / depth.amount().to_f64())
}

/// Rejects trades whose reference value is below the configured minimum.
///
/// A pool natively denominated in the reference unit is valued at exactly
/// one reference unit per token; every other pool uses its `pegged` value.
///
/// # Errors
///
/// Returns [`SwapError::BelowMinimumConvert`] if
/// `to_reference(quantity) * pegged < to_reference(min_convert)`.
pub fn check_min_convert(settings: &Settings, pool: &Pool, quantity: &Quantity) -> Result<(), SwapError> {
    let pegged = if pool.peg_kind() == settings.reference_unit() {
        1.0
    } else {
        to_reference(&pool.pegged())
    };
    let value = to_reference(quantity) * pegged;
    let minimum = settings.min_convert();
    if value < to_reference(&minimum) {
        return Err(SwapError::BelowMinimumConvert {
            quantity: *quantity,
            minimum,
        });
    }
    Ok(())
}

/// Rejects deposits that would push `pool` above [`MAX_POOL_RATIO`].
///
/// # Errors
///
/// - [`SwapError::RatioTooHigh`] if `(balance + quantity) / depth > 5.0`.
/// - [`SwapError::SymbolMismatch`] if `quantity` is another token.
/// - [`SwapError::PoolHasNoDepth`] if the depth is zero.
pub fn check_max_pool_ratio(pool: &Pool, quantity: &Quantity) -> Result<(), SwapError> {
    let after = pool.balance().checked_add(quantity)?;
    let ratio = pool_ratio(pool.code(), &after, &pool.depth())?;
    debug!(symbol = %pool.code(), ratio, "post-deposit ratio");
    if ratio > MAX_POOL_RATIO {
        return Err(SwapError::RatioTooHigh {
            symbol: pool.code(),
            ratio,
        });
    }
    Ok(())
}

/// Rejects withdrawals that would drain `pool` below [`MIN_POOL_RATIO`].
///
/// A withdrawal larger than the whole balance reports a negative ratio.
///
/// # Errors
///
/// - [`SwapError::RatioTooLow`] if `(balance - out) / depth < 0.2`.
/// - [`SwapError::SymbolMismatch`] if `out` is another token.
/// - [`SwapError::PoolHasNoDepth`] if the depth is zero.
pub fn check_min_pool_ratio(pool: &Pool, out: &Quantity) -> Result<(), SwapError> {
    let balance = pool.balance();
    balance.ensure_same_symbol(out)?;
    let depth = pool.depth();
    if out.amount() > balance.amount() {
        let shortfall = out.checked_sub(&balance)?;
        let ratio = -pool_ratio(pool.code(), &shortfall, &depth)?;
        return Err(SwapError::RatioTooLow {
            symbol: pool.code(),
            ratio,
        });
    }
    let after = balance.checked_sub(out)?;
    let ratio = pool_ratio(pool.code(), &after, &depth)?;
    debug!(symbol = %pool.code(), ratio, "post-withdrawal ratio");
    if ratio < MIN_POOL_RATIO {
        return Err(SwapError::RatioTooLow {
            symbol: pool.code(),
            ratio,
        });
    }
    Ok(())
}

/// Current ratio of the pool keyed by `code`, measured against the ledger
/// balance the store observes rather than the cached one.
///
/// Accumulated proceeds are excluded: `(ledger_balance - proceeds) / depth`.
/// The result is negative if proceeds exceed the observed balance, which
/// signals a store out of sync.
///
/// # Errors
///
/// - [`SwapError::PoolNotFound`] if no pool is registered for `code`.
/// - [`SwapError::PoolHasNoDepth`] if the depth is zero.
/// - Any error from [`LedgerStore::ledger_balance`].
pub fn get_ratio<L: LedgerStore + ?Sized>(store: &L, code: &SymbolCode) -> Result<f64, SwapError> {
    let pool = store.pool(code)?;
    let observed = store.ledger_balance(&pool)?;
    observed.ensure_same_symbol(&pool.proceeds())?;
    let depth = pool.depth();
    let proceeds = pool.proceeds();
    let ratio = if observed.amount() >= proceeds.amount() {
        pool_ratio(*code, &observed.checked_sub(&proceeds)?, &depth)?
    } else {
        let ratio = -pool_ratio(*code, &proceeds.checked_sub(&observed)?, &depth)?;
        warn!(symbol = %code, %observed, %proceeds, "proceeds exceed observed balance");
        ratio
    };
    Ok(ratio)
}
