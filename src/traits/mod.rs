//! Collaborator abstractions consumed by the engine.
//!
//! The engine owns no persistent state. Everything outside the pricing core
//! is reached through these traits: [`LedgerStore`] for pool and settings
//! records, [`Authorizer`] for requester checks, [`TransferSink`] for
//! payouts and [`VolumeTracker`] for bookkeeping. In-memory implementations
//! live in [`crate::host`].

mod authorizer;
mod ledger_store;
mod transfer_sink;
mod volume_tracker;

pub use authorizer::Authorizer;
pub use ledger_store::LedgerStore;
pub use transfer_sink::TransferSink;
pub use volume_tracker::VolumeTracker;
