//! Per-token volume totals.

use std::collections::BTreeMap;

use tracing::debug;

use crate::domain::{Quantity, SymbolCode};
use crate::error::SwapError;
use crate::traits::VolumeTracker;

/// Running totals for one token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VolumeEntry {
    volume: Quantity,
    fees: Quantity,
    trades: u64,
}

impl VolumeEntry {
    /// Total quantity traded.
    #[must_use]
    pub const fn volume(&self) -> Quantity {
        self.volume
    }

    /// Total fees taken.
    #[must_use]
    pub const fn fees(&self) -> Quantity {
        self.fees
    }

    /// Number of legs recorded.
    #[must_use]
    pub const fn trades(&self) -> u64 {
        self.trades
    }
}

/// Accumulates volume and fees per token code.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VolumeBook {
    entries: BTreeMap<SymbolCode, VolumeEntry>,
}

impl VolumeBook {
    /// Totals for `code`, if any leg was recorded.
    #[must_use]
    pub fn entry(&self, code: &SymbolCode) -> Option<&VolumeEntry> {
        self.entries.get(code)
    }

    /// Total volume for `code`.
    #[must_use]
    pub fn volume(&self, code: &SymbolCode) -> Option<Quantity> {
        self.entry(code).map(VolumeEntry::volume)
    }

    /// Total fees for `code`.
    #[must_use]
    pub fn fees(&self, code: &SymbolCode) -> Option<Quantity> {
        self.entry(code).map(VolumeEntry::fees)
    }

    /// Number of legs recorded for `code`.
    #[must_use]
    pub fn trades(&self, code: &SymbolCode) -> u64 {
        self.entry(code).map_or(0, VolumeEntry::trades)
    }

    /// Returns `true` if nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over all totals in symbol-code order.
    pub fn iter(&self) -> impl Iterator<Item = (&SymbolCode, &VolumeEntry)> {
        self.entries.iter()
    }
}

impl VolumeTracker for VolumeBook {
    fn add_volume(&mut self, quantity: &Quantity, fee: &Quantity) -> Result<(), SwapError> {
        quantity.ensure_same_symbol(fee)?;
        let zero = Quantity::zero(quantity.symbol());
        let current = self.entries.get(&quantity.symbol().code()).copied().unwrap_or(VolumeEntry {
            volume: zero,
            fees: zero,
            trades: 0,
        });
        let updated = VolumeEntry {
            volume: current.volume.checked_add(quantity)?,
            fees: current.fees.checked_add(fee)?,
            trades: current
                .trades
                .checked_add(1)
                .ok_or(SwapError::Overflow("trade count"))?,
        };
        debug!(symbol = %quantity.symbol().code(), volume = %updated.volume, fees = %updated.fees, "volume added");
        self.entries.insert(quantity.symbol().code(), updated);
        Ok(())
    }
}
