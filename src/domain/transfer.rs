//! Outbound transfer instruction.

use core::fmt;

use super::{Account, Quantity};

/// Memo attached to every conversion payout.
pub const CONVERT_MEMO: &str = "convert";

/// A request for the ledger to move `quantity` from `from` to `to`.
///
/// The engine only builds instructions; settlement belongs to the
/// [`TransferSink`](crate::traits::TransferSink).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TransferInstruction {
    from: Account,
    to: Account,
    quantity: Quantity,
    memo: String,
}

impl TransferInstruction {
    /// Creates an instruction.
    #[must_use]
    pub fn new(from: Account, to: Account, quantity: Quantity, memo: impl Into<String>) -> Self {
        Self {
            from,
            to,
            quantity,
            memo: memo.into(),
        }
    }

    /// Sending account.
    #[must_use]
    pub fn from(&self) -> &Account {
        &self.from
    }

    /// Receiving account.
    #[must_use]
    pub fn to(&self) -> &Account {
        &self.to
    }

    /// Quantity to move.
    #[must_use]
    pub const fn quantity(&self) -> Quantity {
        self.quantity
    }

    /// Transfer memo.
    #[must_use]
    pub fn memo(&self) -> &str {
        &self.memo
    }
}

impl fmt::Display for TransferInstruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} -> {}: {} ({})",
            self.from, self.to, self.quantity, self.memo
        )
    }
}
