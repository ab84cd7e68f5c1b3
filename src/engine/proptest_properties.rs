//! Property-based tests for the pricing engine.
//!
//! 1. **Fee bounds**: `0 <= fee < q`, at least one unit when a rate is set.
//! 2. **Peg round trip**: `from_reference(to_reference(q)) == q`.
//! 3. **Monotonicity**: more input never yields less output.
//! 4. **Concavity**: doubling the input less than doubles the output.
//! 5. **Round trip**: A→B then B→A returns no more than the original.
//! 6. **Positive upper bound**: for every valid pool pair.
//! 7. **Ratio bounds**: every accepted quote respects both pool bounds.

use proptest::prelude::*;

use super::{calculate_pool_fee, quote, Route, MAX_POOL_RATIO, MIN_POOL_RATIO};
use crate::config::Settings;
use crate::domain::{Account, Amount, BasisPoints, Pool, Quantity, Symbol, SymbolCode};
use crate::error::SwapError;
use crate::host::MemoryLedger;
use crate::math::{from_reference, to_reference};

// ---------------------------------------------------------------------------
// Shared helpers
// ---------------------------------------------------------------------------

fn code(s: &str) -> SymbolCode {
    let Ok(c) = s.parse() else {
        panic!("valid code {s}");
    };
    c
}

fn symbol(s: &str, decimals: u8) -> Symbol {
    let Ok(sym) = Symbol::parts(s, decimals) else {
        panic!("valid symbol {s}");
    };
    sym
}

fn eos() -> Symbol {
    symbol("EOS", 4)
}

fn usdt() -> Symbol {
    symbol("USDT", 4)
}

fn settings(bps: u32) -> Settings {
    let min = Quantity::new(Amount::new(1), symbol("USD", 4));
    let Ok(s) = Settings::new(min, BasisPoints::new(bps), code("USD")) else {
        panic!("valid settings");
    };
    s
}

/// Parameters of one pool, in raw 4-decimal units.
#[derive(Debug, Clone, Copy)]
struct PoolParams {
    balance: u128,
    depth: u128,
    peg: u128,
    amplifier: u64,
}

fn make_pool(sym: Symbol, other: &str, params: PoolParams) -> Pool {
    let Ok(owner) = "sx.pools".parse::<Account>() else {
        panic!("valid account");
    };
    let Ok(pool) = Pool::builder(sym, owner)
        .balance(Quantity::new(Amount::new(params.balance), sym))
        .depth(Quantity::new(Amount::new(params.depth), sym))
        .pegged(Quantity::new(Amount::new(params.peg), symbol("USD", 4)), sym.code())
        .amplifier(params.amplifier)
        .connector(code(other))
        .build()
    else {
        panic!("valid pool");
    };
    pool
}

fn make_ledger(bps: u32, base: PoolParams, quote: PoolParams) -> MemoryLedger {
    let mut ledger = MemoryLedger::new(settings(bps));
    for pool in [make_pool(eos(), "USDT", base), make_pool(usdt(), "EOS", quote)] {
        let Ok(()) = ledger.insert_pool(pool) else {
            panic!("insert");
        };
    }
    ledger
}

fn make_route(base: PoolParams, quote: PoolParams) -> Route {
    let ledger = make_ledger(30, base, quote);
    let Ok(route) = Route::resolve(&ledger, &code("EOS"), &code("USDT")) else {
        panic!("valid route");
    };
    route
}

// ---------------------------------------------------------------------------
// Custom strategies
// ---------------------------------------------------------------------------

/// Depths in [1_000, 10_000_000] whole tokens.
fn depth_strategy() -> impl Strategy<Value = u128> {
    10_000_000u128..=100_000_000_000u128
}

/// Balance/depth ratio in [0.5, 2.0], applied to a depth.
fn ratio_strategy() -> impl Strategy<Value = u128> {
    50u128..=200u128
}

/// Pegs in [0.0100, 100.0000] reference units.
fn peg_strategy() -> impl Strategy<Value = u128> {
    100u128..=1_000_000u128
}

fn amplifier_strategy() -> impl Strategy<Value = u64> {
    1u64..=500u64
}

fn pool_strategy() -> impl Strategy<Value = PoolParams> {
    (depth_strategy(), ratio_strategy(), peg_strategy(), amplifier_strategy()).prop_map(
        |(depth, ratio, peg, amplifier)| PoolParams {
            balance: depth * ratio / 100,
            depth,
            peg,
            amplifier,
        },
    )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    // -----------------------------------------------------------------------
    // Property 1: Fee bounds
    // -----------------------------------------------------------------------

    #[test]
    fn prop_fee_bounds(amount in 0u128..=1_000_000_000_000_000u128, bps in 0u32..=10_000u32) {
        let q = Quantity::new(Amount::new(amount), eos());
        match calculate_pool_fee(&settings(bps), &q) {
            Ok(fee) => {
                prop_assert!(fee.amount() < q.amount());
                prop_assert_eq!(fee.symbol(), q.symbol());
                if bps > 0 {
                    prop_assert!(fee.amount() >= Amount::ONE);
                }
            }
            Err(SwapError::FeeExceedsQuantity { fee, .. }) => {
                prop_assert!(fee.amount() >= q.amount());
            }
            Err(other) => prop_assert!(false, "unexpected error {other}"),
        }
    }

    // -----------------------------------------------------------------------
    // Property 2: Peg round trip
    // -----------------------------------------------------------------------

    #[test]
    fn prop_reference_round_trip(amount in 0u128..100_000_000_000_000u128, decimals in 0u8..=8u8) {
        let q = Quantity::new(Amount::new(amount), symbol("TKN", decimals));
        let Ok(back) = from_reference(to_reference(&q), q.symbol()) else {
            return Err(TestCaseError::fail("representable"));
        };
        prop_assert_eq!(back, q);
    }

    // -----------------------------------------------------------------------
    // Property 3: Monotonicity
    // -----------------------------------------------------------------------

    #[test]
    fn prop_output_monotonic(
        base in pool_strategy(),
        quote_pool in pool_strategy(),
        small in 1u128..=10_000_000u128,
        extra in 1u128..=10_000_000u128,
    ) {
        let route = make_route(base, quote_pool);
        let a = Quantity::new(Amount::new(small), eos());
        let b = Quantity::new(Amount::new(small + extra), eos());
        let (Ok(ra), Ok(rb)) = (route.out_reference(&a), route.out_reference(&b)) else {
            return Err(TestCaseError::fail("curve evaluates"));
        };
        prop_assert!(rb.get() > ra.get(), "out({}) = {} !> out({}) = {}", b, rb, a, ra);

        let (Ok(qa), Ok(qb)) = (route.calculate_out(&a), route.calculate_out(&b)) else {
            return Err(TestCaseError::fail("curve quantizes"));
        };
        prop_assert!(qb.amount() >= qa.amount());
    }

    // -----------------------------------------------------------------------
    // Property 4: Concavity
    // -----------------------------------------------------------------------

    #[test]
    fn prop_output_concave(
        base in pool_strategy(),
        quote_pool in pool_strategy(),
        amount in 10_000u128..=10_000_000u128,
    ) {
        let route = make_route(base, quote_pool);
        let single = Quantity::new(Amount::new(amount), eos());
        let double = Quantity::new(Amount::new(amount * 2), eos());
        let (Ok(one), Ok(two)) = (route.out_reference(&single), route.out_reference(&double)) else {
            return Err(TestCaseError::fail("curve evaluates"));
        };
        prop_assert!(two.get() < 2.0 * one.get());
    }

    // -----------------------------------------------------------------------
    // Property 5: Round trip never profits
    // -----------------------------------------------------------------------

    #[test]
    fn prop_round_trip_loses_value(
        base in pool_strategy(),
        quote_pool in pool_strategy(),
        amount in 10_000u128..=10_000_000u128,
    ) {
        let ledger = make_ledger(30, base, quote_pool);
        let inbound = Quantity::new(Amount::new(amount), eos());
        let Ok(there) = quote(&ledger, &inbound, &code("USDT")) else {
            return Ok(());
        };
        let Ok(back) = quote(&ledger, &there.out(), &code("EOS")) else {
            return Ok(());
        };
        prop_assert!(
            back.out().amount() <= inbound.amount(),
            "round trip should lose value: {} -> {} -> {}",
            inbound, there.out(), back.out()
        );
    }

    // -----------------------------------------------------------------------
    // Property 6: Upper bound is positive
    // -----------------------------------------------------------------------

    #[test]
    fn prop_upper_bound_positive(base in pool_strategy(), quote_pool in pool_strategy()) {
        let route = make_route(base, quote_pool);
        let (Ok(base_upper), Ok(quote_upper)) = (route.upper(route.base()), route.upper(route.quote())) else {
            return Err(TestCaseError::fail("upper bound evaluates"));
        };
        prop_assert!(base_upper.is_positive());
        prop_assert!(quote_upper.is_positive());
    }

    // -----------------------------------------------------------------------
    // Property 7: Ratio bounds hold for accepted quotes
    // -----------------------------------------------------------------------

    #[test]
    fn prop_accepted_quotes_respect_ratio_bounds(
        base in pool_strategy(),
        quote_pool in pool_strategy(),
        amount in 1u128..=1_000_000_000_000u128,
    ) {
        let ledger = make_ledger(30, base, quote_pool);
        let inbound = Quantity::new(Amount::new(amount), eos());
        let Ok(accepted) = quote(&ledger, &inbound, &code("USDT")) else {
            return Ok(());
        };
        prop_assert!(accepted.out().amount() > Amount::ZERO);

        let source_after = (base.balance + amount) as f64 / base.depth as f64;
        prop_assert!(source_after <= MAX_POOL_RATIO);

        let remaining = quote_pool.balance - accepted.out().amount().get();
        let target_after = remaining as f64 / quote_pool.depth as f64;
        prop_assert!(target_after >= MIN_POOL_RATIO);
    }
}
