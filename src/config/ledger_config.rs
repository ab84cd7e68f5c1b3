//! TOML description of a ledger: settings plus pools.
//!
//! ```toml
//! [settings]
//! min_convert = "1.0000 USD"
//! pool_fee = 30
//!
//! [[pools]]
//! contract_owner = "sx.pools"
//! balance = "1000.0000 EOS"
//! depth = "1000.0000 EOS"
//! pegged = "2.5000 USD"
//! amplifier = 20
//! connectors = ["USDT"]
//! ```
//!
//! Quantities are written as asset strings; the pool's symbol is taken from
//! its `balance`. Optional pool keys: `peg_kind` (defaults to the pool's
//! own code), `enabled` (defaults to `true`), `proceeds` (defaults to zero)
//! and `ledger_balance` (defaults to `balance + proceeds`).

use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::info;

use super::Settings;
use crate::domain::{Account, BasisPoints, Pool, Quantity, SymbolCode};
use crate::error::SwapError;
use crate::host::MemoryLedger;

fn default_reference_unit() -> String {
    "USD".to_owned()
}

const fn default_enabled() -> bool {
    true
}

const fn default_amplifier() -> u64 {
    1
}

/// The `[settings]` table.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SettingsConfig {
    /// Minimum trade size in reference units.
    pub min_convert: Quantity,
    /// Fee rate in basis points.
    pub pool_fee: u32,
    /// Code of the reference unit.
    #[serde(default = "default_reference_unit")]
    pub reference_unit: String,
}

/// One `[[pools]]` entry.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PoolConfig {
    /// Account holding the pool's funds.
    pub contract_owner: Account,
    /// Cached balance; also fixes the pool's symbol.
    pub balance: Quantity,
    /// Virtual depth.
    pub depth: Quantity,
    /// Value of one token in reference units.
    pub pegged: Quantity,
    /// Unit the token is natively denominated in.
    #[serde(default)]
    pub peg_kind: Option<SymbolCode>,
    /// Amplification factor.
    #[serde(default = "default_amplifier")]
    pub amplifier: u64,
    /// Codes this pool may convert into.
    #[serde(default)]
    pub connectors: Vec<SymbolCode>,
    /// Whether swaps are allowed.
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    /// Accumulated fee revenue.
    #[serde(default)]
    pub proceeds: Option<Quantity>,
    /// Balance observed on the ledger.
    #[serde(default)]
    pub ledger_balance: Option<Quantity>,
}

impl PoolConfig {
    /// Builds and validates the pool record.
    ///
    /// # Errors
    ///
    /// Any error from [`Pool::validate`].
    pub fn to_pool(&self) -> Result<Pool, SwapError> {
        let symbol = self.balance.symbol();
        let mut builder = Pool::builder(symbol, self.contract_owner.clone())
            .balance(self.balance)
            .depth(self.depth)
            .pegged(self.pegged, self.peg_kind.unwrap_or(symbol.code()))
            .amplifier(self.amplifier)
            .connectors(self.connectors.iter().copied())
            .enabled(self.enabled);
        if let Some(proceeds) = self.proceeds {
            builder = builder.proceeds(proceeds);
        }
        builder.build()
    }
}

/// A whole ledger as read from TOML.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LedgerConfig {
    /// Global settings.
    pub settings: SettingsConfig,
    /// Pool records.
    #[serde(default)]
    pub pools: Vec<PoolConfig>,
}

impl LedgerConfig {
    /// Parses a TOML document.
    ///
    /// # Errors
    ///
    /// Returns [`SwapError::Config`] if the document is malformed or a
    /// value does not parse (asset strings, account names, symbol codes).
    pub fn from_toml_str(content: &str) -> Result<Self, SwapError> {
        toml::from_str(content).map_err(|err| SwapError::Config(err.to_string()))
    }

    /// Reads and parses a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`SwapError::Config`] if the file cannot be read or parsed.
    pub fn load_from_file(path: &Path) -> Result<Self, SwapError> {
        let content = fs::read_to_string(path)
            .map_err(|err| SwapError::Config(format!("{}: {err}", path.display())))?;
        Self::from_toml_str(&content)
    }

    /// Builds the validated [`Settings`].
    ///
    /// # Errors
    ///
    /// [`SwapError::InvalidSymbol`] or [`SwapError::InvalidConfiguration`].
    pub fn to_settings(&self) -> Result<Settings, SwapError> {
        Settings::new(
            self.settings.min_convert,
            BasisPoints::new(self.settings.pool_fee),
            self.settings.reference_unit.parse()?,
        )
    }

    /// Builds an in-memory ledger holding every configured pool.
    ///
    /// # Errors
    ///
    /// - Any error from [`LedgerConfig::to_settings`] or
    ///   [`PoolConfig::to_pool`].
    /// - [`SwapError::InvalidConfiguration`] if two pools share a code.
    pub fn into_ledger(self) -> Result<MemoryLedger, SwapError> {
        let mut ledger = MemoryLedger::new(self.to_settings()?);
        for entry in &self.pools {
            let pool = entry.to_pool()?;
            if ledger.pools().any(|existing| existing.code() == pool.code()) {
                return Err(SwapError::InvalidConfiguration(format!(
                    "{} pool is configured twice",
                    pool.code()
                )));
            }
            ledger.insert_pool(pool)?;
            if let Some(observed) = entry.ledger_balance {
                ledger.set_ledger_balance(observed)?;
            }
        }
        info!(pools = self.pools.len(), "ledger loaded from config");
        Ok(ledger)
    }
}
