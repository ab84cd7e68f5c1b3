//! Token identity: code plus decimal precision.

use core::fmt;

use super::{Decimals, SymbolCode};
use crate::error::SwapError;

/// The full identity of a ledger token.
///
/// Two symbols are equal only if both the code and the precision match,
/// so `4,EOS` and `8,EOS` are different tokens.
///
/// # Examples
///
/// ```
/// use pegswap::domain::Symbol;
///
/// let eos = Symbol::parts("EOS", 4).expect("valid symbol");
/// assert_eq!(eos.to_string(), "4,EOS");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Symbol {
    code: SymbolCode,
    decimals: Decimals,
}

impl Symbol {
    /// Creates a symbol from validated parts.
    #[must_use]
    pub const fn new(code: SymbolCode, decimals: Decimals) -> Self {
        Self { code, decimals }
    }

    /// Parses the code and validates the precision.
    ///
    /// # Errors
    ///
    /// - [`SwapError::InvalidSymbol`] for a malformed code.
    /// - [`SwapError::PrecisionError`] for a precision above 18.
    pub fn parts(code: &str, decimals: u8) -> Result<Self, SwapError> {
        Ok(Self::new(code.parse()?, Decimals::new(decimals)?))
    }

    /// Returns the symbol code.
    #[must_use]
    pub const fn code(&self) -> SymbolCode {
        self.code
    }

    /// Returns the decimal precision.
    #[must_use]
    pub const fn decimals(&self) -> Decimals {
        self.decimals
    }

    /// Returns `true` if the code is empty.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.code.is_empty()
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.decimals.get(), self.code)
    }
}
