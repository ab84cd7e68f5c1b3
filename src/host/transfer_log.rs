//! Recording transfer sink.

use tracing::debug;

use crate::domain::TransferInstruction;
use crate::error::SwapError;
use crate::traits::TransferSink;

/// Keeps every instruction it receives, in order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransferLog {
    entries: Vec<TransferInstruction>,
}

impl TransferLog {
    /// Recorded instructions, oldest first.
    #[must_use]
    pub fn entries(&self) -> &[TransferInstruction] {
        &self.entries
    }

    /// Number of recorded instructions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Most recent instruction.
    #[must_use]
    pub fn last(&self) -> Option<&TransferInstruction> {
        self.entries.last()
    }

    /// Removes and returns every recorded instruction.
    pub fn drain(&mut self) -> Vec<TransferInstruction> {
        std::mem::take(&mut self.entries)
    }
}

impl TransferSink for TransferLog {
    fn send(&mut self, instruction: TransferInstruction) -> Result<(), SwapError> {
        debug!(transfer = %instruction, "transfer recorded");
        self.entries.push(instruction);
        Ok(())
    }
}
