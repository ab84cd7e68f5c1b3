//! Outbound transfer settlement.

use crate::domain::TransferInstruction;
use crate::error::SwapError;

/// Accepts transfer instructions for ledger-level settlement.
///
/// The engine emits exactly one instruction per committed conversion.
pub trait TransferSink {
    /// Queues or performs `instruction`.
    ///
    /// # Errors
    ///
    /// Implementation-specific; a failure here surfaces from
    /// [`Converter::convert`](crate::engine::Converter::convert) and the host
    /// transaction is expected to roll back.
    fn send(&mut self, instruction: TransferInstruction) -> Result<(), SwapError>;
}
