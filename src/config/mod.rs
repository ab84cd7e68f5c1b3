//! Engine configuration.
//!
//! [`Settings`] is the global settings record every conversion reads. With
//! the `config` feature (on by default), [`LedgerConfig`] loads settings and
//! pool records from TOML and builds a
//! [`MemoryLedger`](crate::host::MemoryLedger) from them.

#[cfg(feature = "config")]
mod ledger_config;
mod settings;

#[cfg(feature = "config")]
pub use ledger_config::{LedgerConfig, PoolConfig, SettingsConfig};
pub use settings::Settings;
