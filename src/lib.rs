//! # pegswap
//!
//! Pricing engine for converting between tokens held in per-token liquidity
//! pools, each pegged to a common reference unit.
//!
//! A conversion takes a protocol fee from the inbound quantity, prices the
//! remainder on an amplified two-pool bonding curve, checks that neither
//! pool leaves its allowed balance/depth band, and then records the fee,
//! the trade volume and a single payout transfer. Every check runs before
//! any effect, so a rejected conversion changes nothing.
//!
//! # Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `config` | yes | TOML loading of settings and pools (`serde`, `toml`) |
//!
//! # Quick Start
//!
//! ```rust
//! use pegswap::prelude::*;
//!
//! let q = |s: &str| s.parse::<Quantity>().expect("valid quantity");
//! let c = |s: &str| s.parse::<SymbolCode>().expect("valid code");
//! let owner: Account = "sx.pools".parse().expect("valid account");
//! let alice: Account = "alice".parse().expect("valid account");
//!
//! // 1. Global settings: 1 USD minimum trade, 0.30% fee
//! let settings = Settings::new(q("1.0000 USD"), BasisPoints::new(30), c("USD"))
//!     .expect("valid settings");
//!
//! // 2. Two pools pegged 1:1 to USD, connected to each other
//! let mut ledger = MemoryLedger::new(settings);
//! for (this, other) in [("EOS", "USDT"), ("USDT", "EOS")] {
//!     let balance = q(&format!("1000.0000 {this}"));
//!     let pool = Pool::builder(balance.symbol(), owner.clone())
//!         .balance(balance)
//!         .depth(balance)
//!         .pegged(q("1.0000 USD"), c(this))
//!         .connector(c(other))
//!         .build()
//!         .expect("valid pool");
//!     ledger.insert_pool(pool).expect("inserted");
//! }
//!
//! // 3. Convert 100 EOS into USDT
//! let mut converter = Converter::new(
//!     ledger,
//!     AllowList::allow_all(),
//!     TransferLog::default(),
//!     VolumeBook::default(),
//! );
//! let receipt = converter
//!     .convert(&alice, q("100.0000 EOS"), c("USDT"))
//!     .expect("converted");
//!
//! assert_eq!(receipt.fee(), q("0.3000 EOS"));
//! assert_eq!(receipt.quote().net_in(), q("99.7000 EOS"));
//! let out = receipt.out().amount().get();
//! assert!(out > 0 && out < 997_000);
//! ```
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐
//! │  Converter   │  authorize → fee → curve → ratio → commit
//! └──────┬───────┘
//!        │ Authorizer, LedgerStore, TransferSink, VolumeTracker
//!        ▼
//! ┌──────────────┐
//! │    Engine    │  calculate_pool_fee, ratio guards, Route / calculate_out
//! └──────┬───────┘
//!        │ to_reference / from_reference
//!        ▼
//! ┌──────────────┐
//! │    Domain    │  Quantity, Symbol, Pool, Quote, ConvertReceipt, …
//! └──────────────┘
//! ```
//!
//! # Module Guide
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`domain`] | Value types: [`Quantity`](domain::Quantity), [`Pool`](domain::Pool), [`ConvertReceipt`](domain::ConvertReceipt), etc. |
//! | [`engine`] | Fee, ratio guards, curve, [`quote`](fn@engine::quote) and the [`Converter`](engine::Converter) |
//! | [`traits`] | Collaborator seams: [`LedgerStore`](traits::LedgerStore), [`Authorizer`](traits::Authorizer), [`TransferSink`](traits::TransferSink), [`VolumeTracker`](traits::VolumeTracker) |
//! | [`host`] | In-memory collaborators |
//! | [`config`] | [`Settings`](config::Settings) and TOML loading |
//! | [`math`] | Reference-unit conversion and checked float arithmetic |
//! | [`error`] | [`SwapError`](error::SwapError) unified error enum |
//! | [`prelude`] | Convenience re-exports |

pub mod config;
pub mod domain;
pub mod engine;
pub mod error;
pub mod host;
pub mod math;
pub mod prelude;
pub mod traits;
