//! The read-only part of a conversion: every check and the price, with no
//! side effects.
//!
//! Each stage is its own type and can only be built from the previous one,
//! so a later check can never run on state an earlier check has not seen:
//!
//! ```text
//! Validated ──deduct_fee──▶ FeeDeducted ──price──▶ Priced ──check_ratio──▶ RatioChecked
//! ```
//!
//! [`Converter`](super::Converter) adds authorization in front and the
//! commit behind; [`quote`] stops after the last check.

use tracing::{debug, warn};

use super::curve::Route;
use super::fee::calculate_pool_fee;
use super::ratio::{check_max_pool_ratio, check_min_convert, check_min_pool_ratio};
use crate::config::Settings;
use crate::domain::{Quantity, Quote, SwapStage, SymbolCode};
use crate::error::SwapError;
use crate::traits::LedgerStore;

/// Prices converting `inbound` into `target` without changing anything.
///
/// Runs the same fee, bound and curve checks as a real conversion against
/// the store's current state and reports the result. Authorization is not
/// checked.
///
/// # Errors
///
/// Any rejection [`Converter::convert`](super::Converter::convert) would
/// return for the same request, except [`SwapError::Unauthorized`].
pub fn quote<L: LedgerStore + ?Sized>(
    store: &L,
    inbound: &Quantity,
    target: &SymbolCode,
) -> Result<Quote, SwapError> {
    Ok(run_checks(store, inbound, target)?.into_quote())
}

/// Runs every stage up to and including [`SwapStage::RatioChecked`],
/// logging the stage a rejection happened in.
pub(crate) fn run_checks<L: LedgerStore + ?Sized>(
    store: &L,
    inbound: &Quantity,
    target: &SymbolCode,
) -> Result<RatioChecked, SwapError> {
    let validated = at(SwapStage::Validating, Validated::resolve(store, inbound, target))?;
    let deducted = at(SwapStage::FeeDeducted, validated.deduct_fee())?;
    let priced = at(SwapStage::PriceComputed, deducted.price())?;
    at(SwapStage::RatioChecked, priced.check_ratio())
}

/// Tags a stage result with a rejection log line.
pub(crate) fn at<T>(stage: SwapStage, result: Result<T, SwapError>) -> Result<T, SwapError> {
    match result {
        Ok(value) => {
            debug!(%stage, next = ?stage.next(), "stage passed");
            Ok(value)
        }
        Err(err) => {
            warn!(
                stage = %SwapStage::Rejected,
                failed_at = %stage,
                error = %err,
                "conversion rejected"
            );
            Err(err)
        }
    }
}

/// Route resolved and settings loaded.
#[derive(Debug)]
pub(crate) struct Validated {
    settings: Settings,
    route: Route,
    inbound: Quantity,
}

impl Validated {
    fn resolve<L: LedgerStore + ?Sized>(
        store: &L,
        inbound: &Quantity,
        target: &SymbolCode,
    ) -> Result<Self, SwapError> {
        let route = Route::resolve(store, &inbound.symbol().code(), target)?;
        Quantity::zero(route.base().symbol()).ensure_same_symbol(inbound)?;
        let settings = store.settings()?;
        Ok(Self {
            settings,
            route,
            inbound: *inbound,
        })
    }

    /// Takes the fee, then checks the gross inbound against the minimum
    /// trade size and the source pool's deposit bound.
    fn deduct_fee(self) -> Result<FeeDeducted, SwapError> {
        let fee = calculate_pool_fee(&self.settings, &self.inbound)?;
        let net = self.inbound.checked_sub(&fee)?;
        check_min_convert(&self.settings, self.route.base(), &self.inbound)?;
        check_max_pool_ratio(self.route.base(), &self.inbound)?;
        Ok(FeeDeducted {
            route: self.route,
            inbound: self.inbound,
            fee,
            net,
        })
    }
}

/// Fee taken; `net` is strictly positive.
#[derive(Debug)]
pub(crate) struct FeeDeducted {
    route: Route,
    inbound: Quantity,
    fee: Quantity,
    net: Quantity,
}

impl FeeDeducted {
    fn price(self) -> Result<Priced, SwapError> {
        let out = self.route.calculate_out(&self.net)?;
        if out.is_zero() {
            return Err(SwapError::ZeroOutputQuantity(out.symbol().code()));
        }
        Ok(Priced {
            route: self.route,
            quote: Quote::new(self.inbound, self.fee, self.net, out),
        })
    }
}

/// Output computed and positive.
#[derive(Debug)]
pub(crate) struct Priced {
    route: Route,
    quote: Quote,
}

impl Priced {
    fn check_ratio(self) -> Result<RatioChecked, SwapError> {
        check_min_pool_ratio(self.route.quote(), &self.quote.out())?;
        Ok(RatioChecked {
            route: self.route,
            quote: self.quote,
        })
    }
}

/// Every check passed; ready to commit.
#[derive(Debug)]
pub(crate) struct RatioChecked {
    route: Route,
    quote: Quote,
}

impl RatioChecked {
    pub(crate) const fn route(&self) -> &Route {
        &self.route
    }

    pub(crate) fn into_quote(self) -> Quote {
        self.quote
    }
}
