//! Conversion orchestrator.

use tracing::{debug, info, instrument};

use super::quote::{at, run_checks};
use crate::domain::{
    Account, ConvertReceipt, Quantity, Quote, SwapStage, SymbolCode, TransferInstruction, CONVERT_MEMO,
};
use crate::error::SwapError;
use crate::traits::{Authorizer, LedgerStore, TransferSink, VolumeTracker};

/// Runs conversions against a set of collaborators.
///
/// The converter owns its collaborators, and [`Converter::convert`] takes
/// `&mut self`: two conversions through the same converter can never
/// interleave, and every read inside one conversion sees the same store
/// state.
///
/// # Commit
///
/// Once every check has passed, effects are applied in this order:
///
/// 1. the fee is added to the source pool's proceeds;
/// 2. volume is recorded for the inbound leg `(gross, fee)` and the
///    outbound leg `(out, 0)`;
/// 3. one transfer of `out` from the quote pool's owner to the requester,
///    memo `"convert"`, is handed to the sink.
///
/// A rejection before the commit touches no collaborator. A collaborator
/// failing during the commit is returned as is; undoing the steps already
/// applied is the host's job (see
/// [`MemoryLedger::snapshot`](crate::host::MemoryLedger::snapshot)).
///
/// # Examples
///
/// ```
/// use pegswap::config::Settings;
/// use pegswap::domain::{Account, BasisPoints, Pool, Quantity, SymbolCode};
/// use pegswap::engine::Converter;
/// use pegswap::host::{AllowList, MemoryLedger, TransferLog, VolumeBook};
///
/// let q = |s: &str| s.parse::<Quantity>().expect("valid quantity");
/// let c = |s: &str| s.parse::<SymbolCode>().expect("valid code");
/// let owner: Account = "sx.pools".parse().expect("valid account");
/// let alice: Account = "alice".parse().expect("valid account");
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
/// let mut converter = Converter::new(
///     ledger,
///     AllowList::from_iter([alice.clone()]),
///     TransferLog::default(),
///     VolumeBook::default(),
/// );
/// let receipt = converter
///     .convert(&alice, q("100.0000 EOS"), c("USDT"))
///     .expect("converted");
/// assert_eq!(receipt.fee(), q("0.3000 EOS"));
/// assert_eq!(converter.transfers().len(), 1);
/// ```
#[derive(Debug)]
pub struct Converter<L, A, T, V> {
    store: L,
    auth: A,
    transfers: T,
    volume: V,
}

impl<L, A, T, V> Converter<L, A, T, V>
where
    L: LedgerStore,
    A: Authorizer,
    T: TransferSink,
    V: VolumeTracker,
{
    /// Creates a converter over the given collaborators.
    pub const fn new(store: L, auth: A, transfers: T, volume: V) -> Self {
        Self {
            store,
            auth,
            transfers,
            volume,
        }
    }

    /// Converts `inbound`, received from `requester`, into the `target`
    /// token and pays it back to `requester`.
    ///
    /// # Errors
    ///
    /// - [`SwapError::Unauthorized`] if `requester` fails authorization.
    /// - Any rejection listed on [`quote`](fn@super::quote), unchanged.
    /// - Any error a collaborator returns during the commit.
    #[instrument(level = "debug", skip(self, requester, inbound, target), fields(requester = %requester, inbound = %inbound, target = %target))]
    pub fn convert(
        &mut self,
        requester: &Account,
        inbound: Quantity,
        target: SymbolCode,
    ) -> Result<ConvertReceipt, SwapError> {
        at(SwapStage::Validating, self.auth.require_auth(requester))?;
        let checked = run_checks(&self.store, &inbound, &target)?;

        let owner = checked.route().quote().contract_owner().clone();
        let quote = checked.into_quote();
        let transfer = TransferInstruction::new(owner, requester.clone(), quote.out(), CONVERT_MEMO);

        self.store.add_proceeds(&quote.fee())?;
        self.volume.add_volume(&quote.gross_in(), &quote.fee())?;
        self.volume
            .add_volume(&quote.out(), &Quantity::zero(quote.out().symbol()))?;
        self.transfers.send(transfer.clone())?;

        info!(
            stage = %SwapStage::Committed,
            requester = %requester,
            inbound = %quote.gross_in(),
            fee = %quote.fee(),
            out = %quote.out(),
            "conversion committed"
        );
        Ok(ConvertReceipt::new(requester.clone(), quote, transfer))
    }

    /// Prices a conversion against the current store state without
    /// committing it. See [`quote`](fn@super::quote).
    ///
    /// # Errors
    ///
    /// Same as [`quote`](fn@super::quote).
    pub fn quote(&self, inbound: &Quantity, target: &SymbolCode) -> Result<Quote, SwapError> {
        debug!(inbound = %inbound, target = %target, "quote requested");
        super::quote(&self.store, inbound, target)
    }

    /// Current ratio of a pool. See [`get_ratio`](fn@super::get_ratio).
    ///
    /// # Errors
    ///
    /// Same as [`get_ratio`](fn@super::get_ratio).
    pub fn get_ratio(&self, code: &SymbolCode) -> Result<f64, SwapError> {
        super::get_ratio(&self.store, code)
    }
}

impl<L, A, T, V> Converter<L, A, T, V> {
    /// The ledger store.
    pub const fn store(&self) -> &L {
        &self.store
    }

    /// Mutable access to the ledger store, for host-side settlement.
    pub fn store_mut(&mut self) -> &mut L {
        &mut self.store
    }

    /// The authorizer.
    pub const fn auth(&self) -> &A {
        &self.auth
    }

    /// The transfer sink.
    pub const fn transfers(&self) -> &T {
        &self.transfers
    }

    /// The volume tracker.
    pub const fn volume(&self) -> &V {
        &self.volume
    }

    /// Gives the collaborators back.
    pub fn into_parts(self) -> (L, A, T, V) {
        (self.store, self.auth, self.transfers, self.volume)
    }
}
