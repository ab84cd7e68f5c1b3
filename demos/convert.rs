//! Pegged conversion example.
//!
//! Loads a ledger from TOML (a path given as the first argument, or the
//! built-in sample), quotes a few trades, runs one conversion and settles
//! it against the in-memory ledger.
//!
//! # Run
//!
//! ```bash
//! cargo run --example convert
//! cargo run --example convert -- path/to/ledger.toml
//! ```

use std::path::Path;

use pegswap::config::LedgerConfig;
use pegswap::domain::{Account, Quantity, SymbolCode};
use pegswap::engine::{get_ratio, Converter};
use pegswap::host::{AllowList, TransferLog, VolumeBook};

const SAMPLE: &str = r#"
[settings]
min_convert = "1.0000 USD"
pool_fee = 30

[[pools]]
contract_owner = "sx.pools"
balance = "1000.0000 EOS"
depth = "1000.0000 EOS"
pegged = "2.5000 USD"
amplifier = 20
connectors = ["USDT"]

[[pools]]
contract_owner = "sx.pools"
balance = "2500.0000 USDT"
depth = "2500.0000 USDT"
pegged = "1.0000 USD"
amplifier = 20
connectors = ["EOS"]
"#;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Pegged conversion ===\n");

    // ── 1. Load the ledger ──────────────────────────────────────────────
    let config = match std::env::args().nth(1) {
        Some(path) => LedgerConfig::load_from_file(Path::new(&path))?,
        None => LedgerConfig::from_toml_str(SAMPLE)?,
    };
    let ledger = config.into_ledger()?;
    for pool in ledger.pools() {
        println!(
            "{:<6} balance {:<18} depth {:<18} peg {} x{}",
            pool.code().to_string(),
            pool.balance().to_string(),
            pool.depth().to_string(),
            pool.pegged(),
            pool.amplifier()
        );
    }

    let alice: Account = "alice".parse()?;
    let eos: SymbolCode = "EOS".parse()?;
    let usdt: SymbolCode = "USDT".parse()?;
    let mut converter = Converter::new(
        ledger,
        AllowList::from_iter([alice.clone()]),
        TransferLog::default(),
        VolumeBook::default(),
    );

    // ── 2. Quote increasing trade sizes ─────────────────────────────────
    //    Amplification keeps small trades close to the 2.5 USD peg;
    //    large ones drift as the pools leave balance.
    println!("\nQuotes EOS -> USDT:");
    for size in ["1.0000 EOS", "100.0000 EOS", "1000.0000 EOS", "4500.0000 EOS"] {
        let inbound: Quantity = size.parse()?;
        match converter.quote(&inbound, &usdt) {
            Ok(quote) => println!(
                "  {:>14} -> {:>14}  (fee {}, rate {:.4})",
                inbound.to_string(),
                quote.out().to_string(),
                quote.fee(),
                quote.effective_rate()
            ),
            Err(err) => println!("  {:>14} -> rejected: {err}", inbound.to_string()),
        }
    }

    // ── 3. Convert and settle ───────────────────────────────────────────
    let receipt = converter.convert(&alice, "100.0000 EOS".parse()?, usdt)?;
    println!("\nConverted: {}", receipt.transfer());
    converter.store_mut().settle(&receipt)?;

    for code in [eos, usdt] {
        let ratio = get_ratio(converter.store(), &code)?;
        let trades = converter.volume().trades(&code);
        println!("  {:<6} ratio {ratio:.4}  trades {trades}", code.to_string());
    }

    // ── 4. Rejections leave the ledger untouched ────────────────────────
    let before = converter.store().snapshot();
    let mallory: Account = "mallory".parse()?;
    if let Err(err) = converter.convert(&mallory, "10.0000 EOS".parse()?, usdt) {
        println!("\nRejected: {err}");
    }
    assert_eq!(converter.store().snapshot(), before);
    println!("Transfers emitted: {}", converter.transfers().len());

    Ok(())
}
