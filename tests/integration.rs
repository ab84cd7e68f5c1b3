//! Integration tests exercising the full system from config to settlement.
//!
//! These tests go through the public API only: the worked conversion,
//! rejections that must leave every collaborator untouched, repeated
//! conversions with host-side settlement, commit failures, and ledgers
//! loaded from TOML.

#![allow(clippy::panic)]

use pegswap::config::Settings;
use pegswap::domain::{Account, BasisPoints, Pool, Quantity, SymbolCode, TransferInstruction};
use pegswap::engine::{get_ratio, quote, Converter};
use pegswap::error::SwapError;
use pegswap::host::{AllowList, MemoryLedger, TransferLog, VolumeBook};
use pegswap::math::to_reference;
use pegswap::traits::{LedgerStore, TransferSink};

// ---------------------------------------------------------------------------
// Shared helpers
// ---------------------------------------------------------------------------

fn q(s: &str) -> Quantity {
    let Ok(q) = s.parse() else {
        panic!("valid quantity {s}");
    };
    q
}

fn code(s: &str) -> SymbolCode {
    let Ok(c) = s.parse() else {
        panic!("valid code {s}");
    };
    c
}

fn account(s: &str) -> Account {
    let Ok(a) = s.parse() else {
        panic!("valid account {s}");
    };
    a
}

fn settings(min_convert: &str, bps: u32) -> Settings {
    let Ok(s) = Settings::new(q(min_convert), BasisPoints::new(bps), code("USD")) else {
        panic!("valid settings");
    };
    s
}

/// A pool whose balance equals its depth.
struct PoolRow<'a> {
    balance: &'a str,
    depth: &'a str,
    pegged: &'a str,
    amplifier: u64,
    connectors: &'a [&'a str],
    enabled: bool,
}

impl<'a> PoolRow<'a> {
    fn new(balance: &'a str, pegged: &'a str, connectors: &'a [&'a str]) -> Self {
        Self {
            balance,
            depth: balance,
            pegged,
            amplifier: 1,
            connectors,
            enabled: true,
        }
    }

    fn build(&self) -> Pool {
        let balance = q(self.balance);
        let Ok(pool) = Pool::builder(balance.symbol(), account("sx.pools"))
            .balance(balance)
            .depth(q(self.depth))
            .pegged(q(self.pegged), balance.symbol().code())
            .amplifier(self.amplifier)
            .connectors(self.connectors.iter().map(|c| code(c)))
            .enabled(self.enabled)
            .build()
        else {
            panic!("valid pool {}", self.balance);
        };
        pool
    }
}

fn ledger(settings: Settings, pools: &[PoolRow<'_>]) -> MemoryLedger {
    let mut ledger = MemoryLedger::new(settings);
    for row in pools {
        let Ok(()) = ledger.insert_pool(row.build()) else {
            panic!("insert {}", row.balance);
        };
    }
    ledger
}

/// EOS and USDT, 1000 each, pegged 1:1, amplifier 1, 30 bp fee.
fn worked_example_ledger() -> MemoryLedger {
    ledger(
        settings("1.0000 USD", 30),
        &[
            PoolRow::new("1000.0000 EOS", "1.0000 USD", &["USDT"]),
            PoolRow::new("1000.0000 USDT", "1.0000 USD", &["EOS"]),
        ],
    )
}

type MemoryConverter = Converter<MemoryLedger, AllowList, TransferLog, VolumeBook>;

fn converter(ledger: MemoryLedger) -> MemoryConverter {
    Converter::new(
        ledger,
        AllowList::from_iter([account("alice")]),
        TransferLog::default(),
        VolumeBook::default(),
    )
}

/// Runs a conversion that must fail and checks nothing was touched.
fn assert_rejected_without_effects(
    converter: &mut MemoryConverter,
    requester: &str,
    inbound: &str,
    target: &str,
) -> SwapError {
    let before = converter.store().snapshot();
    let result = converter.convert(&account(requester), q(inbound), code(target));
    let Err(err) = result else {
        panic!("expected rejection, got {result:?}");
    };
    assert_eq!(converter.store().snapshot(), before, "store changed on {err}");
    assert!(converter.transfers().is_empty(), "transfer emitted on {err}");
    assert!(converter.volume().is_empty(), "volume recorded on {err}");
    err
}

// ===========================================================================
// Suite 1: Worked example
// ===========================================================================

#[test]
fn worked_example_conversion() {
    let mut converter = converter(worked_example_ledger());
    let Ok(receipt) = converter.convert(&account("alice"), q("100.0000 EOS"), code("USDT")) else {
        panic!("expected conversion");
    };

    assert_eq!(receipt.fee(), q("0.3000 EOS"));
    assert_eq!(receipt.quote().net_in(), q("99.7000 EOS"));
    let out = receipt.out();
    assert_eq!(out.symbol().code(), code("USDT"));
    assert!(out.amount().get() > 0);
    assert!(out.amount() < q("99.7000 EOS").amount());
    assert_eq!(out, q("90.6611 USDT"));

    assert_eq!(receipt.requester(), &account("alice"));
    assert_eq!(
        receipt.transfer(),
        &TransferInstruction::new(account("sx.pools"), account("alice"), out, "convert")
    );
    assert_eq!(converter.transfers().entries(), &[receipt.transfer().clone()]);
}

#[test]
fn commit_records_fee_and_both_volume_legs() {
    let mut converter = converter(worked_example_ledger());
    let Ok(receipt) = converter.convert(&account("alice"), q("100.0000 EOS"), code("USDT")) else {
        panic!("expected conversion");
    };

    let Ok(eos) = converter.store().pool(&code("EOS")) else {
        panic!("EOS pool");
    };
    assert_eq!(eos.proceeds(), q("0.3000 EOS"));
    let Ok(usdt) = converter.store().pool(&code("USDT")) else {
        panic!("USDT pool");
    };
    assert_eq!(usdt.proceeds(), q("0.0000 USDT"));

    let book = converter.volume();
    assert_eq!(book.volume(&code("EOS")), Some(q("100.0000 EOS")));
    assert_eq!(book.fees(&code("EOS")), Some(q("0.3000 EOS")));
    assert_eq!(book.volume(&code("USDT")), Some(receipt.out()));
    assert_eq!(book.fees(&code("USDT")), Some(q("0.0000 USDT")));
}

#[test]
fn pegged_pools_trade_near_peg_with_amplification() {
    let ledger = ledger(
        settings("1.0000 USD", 30),
        &[
            PoolRow {
                amplifier: 20,
                ..PoolRow::new("1000.0000 EOS", "2.5000 USD", &["USDT"])
            },
            PoolRow {
                amplifier: 20,
                ..PoolRow::new("2500.0000 USDT", "1.0000 USD", &["EOS"])
            },
        ],
    );
    let Ok(priced) = quote(&ledger, &q("10.0000 EOS"), &code("USDT")) else {
        panic!("expected quote");
    };
    // 9.97 EOS * 2.5 = 24.925 USD of input; the curve keeps most of it.
    let out = to_reference(&priced.out());
    assert!(out > 24.9 && out < 24.925, "{out}");
}

// ===========================================================================
// Suite 2: Rejections leave everything untouched
// ===========================================================================

#[test]
fn same_token_is_rejected_regardless_of_pool_state() {
    let mut converter = converter(ledger(settings("1.0000 USD", 30), &[]));
    let err = assert_rejected_without_effects(&mut converter, "alice", "1.0000 EOS", "EOS");
    assert_eq!(err, SwapError::SameTokenConversion(code("EOS")));
}

#[test]
fn disabled_pool_is_rejected_even_when_numbers_pass() {
    let ledger = ledger(
        settings("1.0000 USD", 30),
        &[
            PoolRow::new("1000.0000 EOS", "1.0000 USD", &["USDT"]),
            PoolRow {
                enabled: false,
                ..PoolRow::new("1000.0000 USDT", "1.0000 USD", &["EOS"])
            },
        ],
    );
    let mut converter = converter(ledger);
    let err = assert_rejected_without_effects(&mut converter, "alice", "10.0000 EOS", "USDT");
    assert_eq!(err, SwapError::PoolDisabled(code("USDT")));
}

#[test]
fn unauthorized_requester_is_rejected_first() {
    let mut converter = converter(worked_example_ledger());
    let err = assert_rejected_without_effects(&mut converter, "mallory", "1.0000 EOS", "EOS");
    assert_eq!(err, SwapError::Unauthorized("mallory".to_owned()));
}

#[test]
fn missing_connector_is_rejected() {
    let ledger = ledger(
        settings("1.0000 USD", 30),
        &[
            PoolRow::new("1000.0000 EOS", "1.0000 USD", &[]),
            PoolRow::new("1000.0000 USDT", "1.0000 USD", &["EOS"]),
        ],
    );
    let mut converter = converter(ledger);
    let err = assert_rejected_without_effects(&mut converter, "alice", "10.0000 EOS", "USDT");
    assert_eq!(
        err,
        SwapError::ConnectorMissing {
            base: code("EOS"),
            target: code("USDT"),
        }
    );
}

#[test]
fn zero_depth_pool_is_rejected() {
    let ledger = ledger(
        settings("1.0000 USD", 30),
        &[
            PoolRow {
                depth: "0.0000 EOS",
                ..PoolRow::new("1000.0000 EOS", "1.0000 USD", &["USDT"])
            },
            PoolRow::new("1000.0000 USDT", "1.0000 USD", &["EOS"]),
        ],
    );
    let mut converter = converter(ledger);
    let err = assert_rejected_without_effects(&mut converter, "alice", "10.0000 EOS", "USDT");
    assert_eq!(err, SwapError::PoolHasNoDepth(code("EOS")));
}

#[test]
fn unknown_target_is_rejected() {
    let mut converter = converter(worked_example_ledger());
    let err = assert_rejected_without_effects(&mut converter, "alice", "10.0000 EOS", "BTC");
    assert_eq!(err, SwapError::PoolNotFound(code("BTC")));
}

#[test]
fn trade_below_minimum_is_rejected() {
    let mut converter = converter(worked_example_ledger());
    let err = assert_rejected_without_effects(&mut converter, "alice", "0.9999 EOS", "USDT");
    assert!(matches!(err, SwapError::BelowMinimumConvert { .. }));
}

#[test]
fn deposit_above_five_times_depth_is_rejected() {
    let mut converter = converter(worked_example_ledger());
    let err = assert_rejected_without_effects(&mut converter, "alice", "4000.0001 EOS", "USDT");
    let SwapError::RatioTooHigh { symbol, ratio } = err else {
        panic!("expected RatioTooHigh, got {err:?}");
    };
    assert_eq!(symbol, code("EOS"));
    assert!(ratio > 5.0);
}

#[test]
fn withdrawal_below_fifth_of_depth_is_rejected() {
    let ledger = ledger(
        settings("1.0000 USD", 30),
        &[
            PoolRow::new("1000.0000 EOS", "1.0000 USD", &["USDT"]),
            PoolRow {
                depth: "1000.0000 USDT",
                ..PoolRow::new("250.0000 USDT", "1.0000 USD", &["EOS"])
            },
        ],
    );
    let mut converter = converter(ledger);
    let err = assert_rejected_without_effects(&mut converter, "alice", "300.0000 EOS", "USDT");
    let SwapError::RatioTooLow { symbol, ratio } = err else {
        panic!("expected RatioTooLow, got {err:?}");
    };
    assert_eq!(symbol, code("USDT"));
    assert!(ratio < 0.2);
}

#[test]
fn fee_consuming_everything_is_rejected() {
    let ledger = ledger(
        settings("0.0000 USD", 30),
        &[
            PoolRow::new("1000.0000 EOS", "1.0000 USD", &["USDT"]),
            PoolRow::new("1000.0000 USDT", "1.0000 USD", &["EOS"]),
        ],
    );
    let mut converter = converter(ledger);
    let err = assert_rejected_without_effects(&mut converter, "alice", "0.0001 EOS", "USDT");
    assert!(matches!(err, SwapError::FeeExceedsQuantity { .. }));
}

#[test]
fn output_rounding_to_zero_is_rejected() {
    let ledger = ledger(
        settings("0.0000 USD", 0),
        &[
            PoolRow::new("1000.0000 EOS", "0.0001 USD", &["USDT"]),
            PoolRow::new("1000.0000 USDT", "1.0000 USD", &["EOS"]),
        ],
    );
    let mut converter = converter(ledger);
    let err = assert_rejected_without_effects(&mut converter, "alice", "0.4000 EOS", "USDT");
    assert_eq!(err, SwapError::ZeroOutputQuantity(code("USDT")));
}

// ===========================================================================
// Suite 3: Repeated conversions and settlement
// ===========================================================================

#[test]
fn settlement_moves_cached_balances() {
    let mut converter = converter(worked_example_ledger());
    let Ok(receipt) = converter.convert(&account("alice"), q("100.0000 EOS"), code("USDT")) else {
        panic!("expected conversion");
    };
    let Ok(()) = converter.store_mut().settle(&receipt) else {
        panic!("settle");
    };

    let (Ok(eos), Ok(usdt)) = (
        converter.store().pool(&code("EOS")),
        converter.store().pool(&code("USDT")),
    ) else {
        panic!("pools");
    };
    // gross arrives, fee is set aside as proceeds
    assert_eq!(eos.balance(), q("1099.7000 EOS"));
    assert_eq!(usdt.balance(), q("909.3389 USDT"));

    let Ok(ratio) = get_ratio(converter.store(), &code("EOS")) else {
        panic!("ratio");
    };
    assert!((ratio - 1.0997).abs() < 1e-9, "{ratio}");
}

#[test]
fn second_conversion_prices_against_moved_pools() {
    let mut converter = converter(worked_example_ledger());
    let mut outs = Vec::new();
    for _ in 0..2 {
        let Ok(receipt) = converter.convert(&account("alice"), q("100.0000 EOS"), code("USDT"))
        else {
            panic!("expected conversion");
        };
        let Ok(()) = converter.store_mut().settle(&receipt) else {
            panic!("settle");
        };
        outs.push(receipt.out().amount());
    }
    assert!(outs[1] < outs[0], "price should move against repeated buys");
    assert_eq!(converter.transfers().len(), 2);
    assert_eq!(converter.volume().trades(&code("EOS")), 2);
}

#[test]
fn quote_then_convert_agree() {
    let mut converter = converter(worked_example_ledger());
    let Ok(priced) = converter.quote(&q("250.0000 USDT"), &code("EOS")) else {
        panic!("expected quote");
    };
    let Ok(receipt) = converter.convert(&account("alice"), q("250.0000 USDT"), code("EOS")) else {
        panic!("expected conversion");
    };
    assert_eq!(receipt.quote(), &priced);
}

#[test]
fn monitoring_ratio_follows_observed_balance() {
    let mut ledger = worked_example_ledger();
    let Ok(()) = ledger.set_ledger_balance(q("1500.0000 EOS")) else {
        panic!("set balance");
    };
    let Ok(ratio) = get_ratio(&ledger, &code("EOS")) else {
        panic!("ratio");
    };
    assert!((ratio - 1.5).abs() < 1e-12);

    // the cached balance used by the guards has not moved
    let Ok(eos) = ledger.pool(&code("EOS")) else {
        panic!("pool");
    };
    assert_eq!(eos.balance(), q("1000.0000 EOS"));
}

// ===========================================================================
// Suite 4: Commit failures
// ===========================================================================

/// A sink that refuses every payout.
#[derive(Debug, Default)]
struct RefusingSink;

impl TransferSink for RefusingSink {
    fn send(&mut self, instruction: TransferInstruction) -> Result<(), SwapError> {
        Err(SwapError::InvalidConfiguration(format!(
            "payout refused: {instruction}"
        )))
    }
}

#[test]
fn sink_failure_propagates_and_snapshot_rolls_back() {
    let mut converter = Converter::new(
        worked_example_ledger(),
        AllowList::allow_all(),
        RefusingSink,
        VolumeBook::default(),
    );
    let snapshot = converter.store().snapshot();
    let result = converter.convert(&account("bob"), q("100.0000 EOS"), code("USDT"));
    assert!(matches!(result, Err(SwapError::InvalidConfiguration(_))));

    // proceeds were already added when the sink refused
    let Ok(eos) = converter.store().pool(&code("EOS")) else {
        panic!("pool");
    };
    assert_eq!(eos.proceeds(), q("0.3000 EOS"));

    converter.store_mut().restore(snapshot.clone());
    assert_eq!(converter.store().snapshot(), snapshot);
}

// ===========================================================================
// Suite 5: Ledgers from TOML
// ===========================================================================

#[cfg(feature = "config")]
mod from_toml {
    use super::*;
    use pegswap::config::LedgerConfig;

    const LEDGER: &str = r#"
[settings]
min_convert = "1.0000 USD"
pool_fee = 30

[[pools]]
contract_owner = "sx.pools"
balance = "1000.0000 EOS"
depth = "1000.0000 EOS"
pegged = "1.0000 USD"
connectors = ["USDT"]

[[pools]]
contract_owner = "sx.pools"
balance = "1000.0000 USDT"
depth = "1000.0000 USDT"
pegged = "1.0000 USD"
connectors = ["EOS"]
"#;

    #[test]
    fn loaded_ledger_matches_worked_example() {
        let Ok(config) = LedgerConfig::from_toml_str(LEDGER) else {
            panic!("valid document");
        };
        let Ok(ledger) = config.into_ledger() else {
            panic!("valid ledger");
        };
        let mut converter = converter(ledger);
        let Ok(receipt) = converter.convert(&account("alice"), q("100.0000 EOS"), code("USDT"))
        else {
            panic!("expected conversion");
        };
        assert_eq!(receipt.out(), q("90.6611 USDT"));
    }

    #[test]
    fn disabled_pool_in_config_is_honoured() {
        let doc = LEDGER.replace(
            "connectors = [\"EOS\"]",
            "connectors = [\"EOS\"]\nenabled = false",
        );
        let Ok(config) = LedgerConfig::from_toml_str(&doc) else {
            panic!("valid document");
        };
        let Ok(ledger) = config.into_ledger() else {
            panic!("valid ledger");
        };
        let result = quote(&ledger, &q("10.0000 EOS"), &code("USDT"));
        assert_eq!(result, Err(SwapError::PoolDisabled(code("USDT"))));
    }
}
