//! Lifecycle of a single conversion.

use core::fmt;

/// The stage a conversion has reached.
///
/// Transitions are strictly sequential:
///
/// ```text
/// Validating -> FeeDeducted -> PriceComputed -> RatioChecked -> Committed
///      \______________\_______________\_______________\-----> Rejected
/// ```
///
/// `Committed` and `Rejected` are terminal. Side effects happen only on the
/// transition into `Committed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SwapStage {
    /// Authorization and route checks.
    Validating,
    /// Fee computed and subtracted; minimum size and deposit bound checked.
    FeeDeducted,
    /// Curve output computed.
    PriceComputed,
    /// Withdrawal bound checked.
    RatioChecked,
    /// Effects handed to the collaborators.
    Committed,
    /// A check failed; nothing was changed.
    Rejected,
}

impl SwapStage {
    /// Returns the stage that follows on success, or `None` when terminal.
    #[must_use]
    pub const fn next(&self) -> Option<Self> {
        match self {
            Self::Validating => Some(Self::FeeDeducted),
            Self::FeeDeducted => Some(Self::PriceComputed),
            Self::PriceComputed => Some(Self::RatioChecked),
            Self::RatioChecked => Some(Self::Committed),
            Self::Committed | Self::Rejected => None,
        }
    }

    /// Short lowercase name, used as a log field.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Validating => "validating",
            Self::FeeDeducted => "fee_deducted",
            Self::PriceComputed => "price_computed",
            Self::RatioChecked => "ratio_checked",
            Self::Committed => "committed",
            Self::Rejected => "rejected",
        }
    }
}

impl fmt::Display for SwapStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
