//! Amplified bonding curve between two pegged pools.
//!
//! Each pool contributes an *upper bound* derived from the shallower of the
//! two depths (in reference units), the smaller of the two amplifiers and
//! its own balance/depth ratio:
//!
//! ```text
//! upper = A·D - D + D·ratio          D = min depth, A = min amplifier
//! out   = in / (upper_base + in) · upper_quote
//! ```
//!
//! Amplification flattens the curve near the peg: at `A = 1` the upper bound
//! is the balance itself; larger `A` adds virtual liquidity on both sides.
//! All arithmetic runs on [`RefValue`] and the result is quantized exactly
//! once, by [`from_reference`].

use tracing::debug;

use crate::domain::{Pool, Quantity, SymbolCode};
use crate::error::SwapError;
use crate::math::{from_reference, to_reference, RefValue};
use crate::traits::LedgerStore;

/// A validated pair of pools: the one receiving the inbound token (`base`)
/// and the one paying out (`quote`).
///
/// Produced only by [`Route::resolve`], so holding a `Route` means every
/// routing precondition held when the pools were read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    base: Pool,
    quote: Pool,
}

impl Route {
    /// Reads both pools from `store` and checks that a conversion from
    /// `source` to `target` is allowed.
    ///
    /// Checks run in this order: non-empty identifiers, distinct symbols,
    /// existence, enabled flags, nonzero balances, nonzero depths, and
    /// finally the base pool's connector to `target`.
    ///
    /// # Errors
    ///
    /// - [`SwapError::EmptyIdentifier`] for an empty `source` or `target`.
    /// - [`SwapError::SameTokenConversion`] if `source == target`.
    /// - [`SwapError::PoolNotFound`], [`SwapError::PoolDisabled`],
    ///   [`SwapError::PoolHasNoBalance`], [`SwapError::PoolHasNoDepth`] for
    ///   the offending pool.
    /// - [`SwapError::ConnectorMissing`] if `base` does not list `target`.
    pub fn resolve<L: LedgerStore + ?Sized>(
        store: &L,
        source: &SymbolCode,
        target: &SymbolCode,
    ) -> Result<Self, SwapError> {
        if source.is_empty() {
            return Err(SwapError::EmptyIdentifier("source symbol"));
        }
        if target.is_empty() {
            return Err(SwapError::EmptyIdentifier("target symbol"));
        }
        if source == target {
            return Err(SwapError::SameTokenConversion(*source));
        }

        let base = store.pool(source)?;
        let quote = store.pool(target)?;
        for pool in [&base, &quote] {
            if !pool.is_enabled() {
                return Err(SwapError::PoolDisabled(pool.code()));
            }
        }
        for pool in [&base, &quote] {
            if pool.balance().is_zero() {
                return Err(SwapError::PoolHasNoBalance(pool.code()));
            }
        }
        for pool in [&base, &quote] {
            if pool.depth().is_zero() {
                return Err(SwapError::PoolHasNoDepth(pool.code()));
            }
        }
        if !base.has_connector(target) {
            return Err(SwapError::ConnectorMissing {
                base: *source,
                target: *target,
            });
        }
        Ok(Self { base, quote })
    }

    /// Pool receiving the inbound token.
    #[must_use]
    pub const fn base(&self) -> &Pool {
        &self.base
    }

    /// Pool paying out the target token.
    #[must_use]
    pub const fn quote(&self) -> &Pool {
        &self.quote
    }

    /// Upper bound of `pool` on this route, in reference units.
    ///
    /// # Errors
    ///
    /// - [`SwapError::NonFiniteValue`] if an intermediate overflows.
    /// - [`SwapError::InvalidConfiguration`] if the bound is not positive.
    pub fn upper(&self, pool: &Pool) -> Result<RefValue, SwapError> {
        let min_depth = depth_ref(&self.base)?.min(&depth_ref(&self.quote)?);
        let min_amplifier = RefValue::from(self.base.amplifier().min(self.quote.amplifier()));
        let ratio = RefValue::finite(
            pool.balance().amount().to_f64() / pool.depth().amount().to_f64(),
            "pool ratio",
        )?;

        let amplified = min_amplifier.checked_mul(&min_depth)?;
        let upper = amplified
            .checked_sub(&min_depth)?
            .checked_add(&min_depth.checked_mul(&ratio)?)?;
        if !upper.is_positive() {
            return Err(SwapError::InvalidConfiguration(format!(
                "{} pool upper bound {upper} is not positive",
                pool.code()
            )));
        }
        Ok(upper)
    }

    /// Curve output for `quantity_in`, in whole target tokens, before
    /// quantization.
    ///
    /// # Errors
    ///
    /// - [`SwapError::SymbolMismatch`] if `quantity_in` is not the base token.
    /// - Any error from [`Route::upper`] or a non-finite intermediate.
    pub fn out_reference(&self, quantity_in: &Quantity) -> Result<RefValue, SwapError> {
        Quantity::zero(self.base.symbol()).ensure_same_symbol(quantity_in)?;

        let base_upper = self.upper(&self.base)?;
        let quote_upper = self.upper(&self.quote)?;
        let in_ref = RefValue::finite(to_reference(quantity_in), "inbound quantity")?
            .checked_mul(&pegged_ref(&self.base)?)?;

        let out_ref = in_ref
            .checked_div(&base_upper.checked_add(&in_ref)?)?
            .checked_mul(&quote_upper)?;
        debug!(
            base = %self.base.code(),
            quote = %self.quote.code(),
            %base_upper,
            %quote_upper,
            %in_ref,
            %out_ref,
            "curve evaluated"
        );
        out_ref.checked_div(&pegged_ref(&self.quote)?)
    }

    /// Curve output for `quantity_in`, quantized to the quote token's
    /// precision with ties rounded away from zero.
    ///
    /// The output may be zero for dust inputs; the orchestrator rejects that.
    ///
    /// # Errors
    ///
    /// Same as [`Route::out_reference`], plus [`SwapError::PrecisionError`]
    /// if the output cannot be represented.
    pub fn calculate_out(&self, quantity_in: &Quantity) -> Result<Quantity, SwapError> {
        let out = self.out_reference(quantity_in)?;
        from_reference(out.get(), self.quote.symbol())
    }
}

/// Resolves the route from `quantity_in`'s token to `target` and prices it.
///
/// # Errors
///
/// Any error from [`Route::resolve`] or [`Route::calculate_out`].
///
/// # Examples
///
/// ```
/// use pegswap::config::Settings;
/// use pegswap::domain::{Account, BasisPoints, Pool, Quantity, SymbolCode};
/// use pegswap::engine::calculate_out;
/// use pegswap::host::MemoryLedger;
///
/// let q = |s: &str| s.parse::<Quantity>().expect("valid quantity");
/// let c = |s: &str| s.parse::<SymbolCode>().expect("valid code");
/// let owner: Account = "sx.pools".parse().expect("valid account");
///
/// let settings = Settings::new(q("1.0000 USD"), BasisPoints::new(30), c("USD")).expect("valid");
/// let mut ledger = MemoryLedger::new(settings);
/// for (this, other) in [("USDT", "EOS"), ("EOS", "USDT")] {
///     let balance = q(&format!("1000.0000 {this}"));
///     let pool = Pool::builder(balance.symbol(), owner.clone())
///         .balance(balance)
///         .depth(balance)
///         .pegged(q("1.0000 USD"), c(this))
///         .connector(c(other))
///         .build()
///         .expect("valid pool");
///     ledger.insert_pool(pool).expect("insert");
/// }
///
/// let out = calculate_out(&ledger, &q("99.7000 EOS"), &c("USDT")).expect("priced");
/// assert_eq!(out.to_string(), "90.6611 USDT");
/// ```
pub fn calculate_out<L: LedgerStore + ?Sized>(
    store: &L,
    quantity_in: &Quantity,
    target: &SymbolCode,
) -> Result<Quantity, SwapError> {
    Route::resolve(store, &quantity_in.symbol().code(), target)?.calculate_out(quantity_in)
}

fn pegged_ref(pool: &Pool) -> Result<RefValue, SwapError> {
    let pegged = RefValue::finite(to_reference(&pool.pegged()), "pegged value")?;
    if !pegged.is_positive() {
        return Err(SwapError::InvalidConfiguration(format!(
            "{} pool pegged value must be positive",
            pool.code()
        )));
    }
    Ok(pegged)
}

fn depth_ref(pool: &Pool) -> Result<RefValue, SwapError> {
    RefValue::finite(to_reference(&pool.depth()), "pool depth")?.checked_mul(&pegged_ref(pool)?)
}
