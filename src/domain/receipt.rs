//! Outcome of a quote or a committed conversion.

use core::fmt;

use super::{Account, Quantity, TransferInstruction};

/// Prices a conversion without committing it.
///
/// # Invariants
///
/// - `fee + net_in == gross_in`
/// - `out` is positive and denominated in the target token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Quote {
    gross_in: Quantity,
    fee: Quantity,
    net_in: Quantity,
    out: Quantity,
}

impl Quote {
    pub(crate) const fn new(gross_in: Quantity, fee: Quantity, net_in: Quantity, out: Quantity) -> Self {
        Self {
            gross_in,
            fee,
            net_in,
            out,
        }
    }

    /// Inbound quantity before the fee.
    pub const fn gross_in(&self) -> Quantity {
        self.gross_in
    }

    /// Protocol fee, in the inbound token.
    pub const fn fee(&self) -> Quantity {
        self.fee
    }

    /// Inbound quantity after the fee; this is what the curve prices.
    pub const fn net_in(&self) -> Quantity {
        self.net_in
    }

    /// Outbound quantity.
    pub const fn out(&self) -> Quantity {
        self.out
    }

    /// Realized rate `out / gross_in` in whole-token units.
    #[must_use]
    pub fn effective_rate(&self) -> f64 {
        let gross = crate::math::to_reference(&self.gross_in);
        if gross == 0.0 {
            return 0.0;
        }
        crate::math::to_reference(&self.out) / gross
    }
}

impl fmt::Display for Quote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Quote(in={}, fee={}, out={})",
            self.gross_in, self.fee, self.out
        )
    }
}

/// Record of a committed conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertReceipt {
    requester: Account,
    quote: Quote,
    transfer: TransferInstruction,
}

impl ConvertReceipt {
    pub(crate) fn new(requester: Account, quote: Quote, transfer: TransferInstruction) -> Self {
        Self {
            requester,
            quote,
            transfer,
        }
    }

    /// Account that requested the conversion.
    #[must_use]
    pub fn requester(&self) -> &Account {
        &self.requester
    }

    /// Priced amounts.
    #[must_use]
    pub const fn quote(&self) -> &Quote {
        &self.quote
    }

    /// Outbound quantity paid to the requester.
    pub const fn out(&self) -> Quantity {
        self.quote.out
    }

    /// Fee added to the source pool's proceeds.
    pub const fn fee(&self) -> Quantity {
        self.quote.fee
    }

    /// The transfer instruction handed to the ledger.
    #[must_use]
    pub fn transfer(&self) -> &TransferInstruction {
        &self.transfer
    }
}

impl fmt::Display for ConvertReceipt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} converted {}", self.requester, self.quote)
    }
}
