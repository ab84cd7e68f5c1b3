//! Fundamental domain value types used throughout the engine.
//!
//! This module contains the value types that model the ledger side of a
//! conversion: symbols, quantities, accounts, pool records, transfer
//! instructions and receipts. All types use newtypes with validated
//! constructors to enforce invariants.

mod account;
mod amount;
mod basis_points;
mod decimals;
mod pool;
mod quantity;
mod receipt;
mod rounding;
mod swap_stage;
mod symbol;
mod symbol_code;
mod transfer;

pub use account::Account;
pub use amount::Amount;
pub use basis_points::{BasisPoints, BPS_DENOMINATOR};
pub use decimals::Decimals;
pub use pool::{Pool, PoolBuilder};
pub use quantity::Quantity;
pub use receipt::{ConvertReceipt, Quote};
pub use rounding::Rounding;
pub use swap_stage::SwapStage;
pub use symbol::Symbol;
pub use symbol_code::SymbolCode;
pub use transfer::{TransferInstruction, CONVERT_MEMO};
