//! Convenience re-exports for common types and traits.
//!
//! ```rust
//! use pegswap::prelude::*;
//! ```

pub use crate::domain::{
    Account, Amount, BasisPoints, ConvertReceipt, Decimals, Pool, Quantity, Quote, Symbol,
    SymbolCode, TransferInstruction,
};

pub use crate::traits::{Authorizer, LedgerStore, TransferSink, VolumeTracker};

pub use crate::engine::{calculate_out, calculate_pool_fee, get_ratio, quote, Converter, Route};

pub use crate::host::{AllowList, MemoryLedger, TransferLog, VolumeBook};

pub use crate::config::Settings;
#[cfg(feature = "config")]
pub use crate::config::LedgerConfig;

pub use crate::error::{Result, SwapError};
