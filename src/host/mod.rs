//! In-memory collaborators.
//!
//! Ready-made implementations of the [`crate::traits`] collaborators for
//! tests, demos and embedding the engine outside a ledger:
//!
//! - [`MemoryLedger`]: pools, settings and observed balances.
//! - [`AllowList`]: account allow-list.
//! - [`TransferLog`]: records payouts.
//! - [`VolumeBook`]: per-token volume and fee totals.

mod allow_list;
mod memory_ledger;
mod transfer_log;
mod volume_book;

pub use allow_list::AllowList;
pub use memory_ledger::{LedgerSnapshot, MemoryLedger};
pub use transfer_log::TransferLog;
pub use volume_book::{VolumeBook, VolumeEntry};
