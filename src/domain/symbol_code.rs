//! Packed token identifier.

use core::fmt;
use core::str::FromStr;

use crate::error::SwapError;

/// Maximum number of characters in a symbol code.
const MAX_LEN: usize = 7;

/// A token identifier of 1 to 7 upper-case ASCII letters.
///
/// The characters are packed little-endian into a `u64`, one byte each, so
/// the code is `Copy`, cheap to compare and usable as a map key. The raw
/// value `0` is the empty code, which never names a real pool.
///
/// # Examples
///
/// ```
/// use pegswap::domain::SymbolCode;
///
/// let eos: SymbolCode = "EOS".parse().expect("valid code");
/// assert_eq!(eos.to_string(), "EOS");
/// assert_eq!(eos.len(), 3);
/// assert!("eos".parse::<SymbolCode>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "config", derive(serde::Deserialize))]
#[cfg_attr(feature = "config", serde(try_from = "String"))]
pub struct SymbolCode(u64);

impl SymbolCode {
    /// The empty symbol code.
    pub const EMPTY: Self = Self(0);

    /// Builds a code from its packed representation.
    ///
    /// # Errors
    ///
    /// Returns [`SwapError::InvalidSymbol`] if the bytes are not a run of
    /// upper-case letters followed by zero padding.
    pub fn from_raw(raw: u64) -> Result<Self, SwapError> {
        let code = Self(raw);
        let mut seen_end = false;
        for byte in raw.to_le_bytes() {
            match (byte, seen_end) {
                (0, _) => seen_end = true,
                (b'A'..=b'Z', false) => {}
                _ => return Err(SwapError::InvalidSymbol(format!("raw value {raw:#x}"))),
            }
        }
        if raw.to_le_bytes()[MAX_LEN] != 0 {
            return Err(SwapError::InvalidSymbol(format!("raw value {raw:#x}")));
        }
        Ok(code)
    }

    /// Returns the packed representation.
    #[must_use]
    pub const fn raw(&self) -> u64 {
        self.0
    }

    /// Returns `true` for [`SymbolCode::EMPTY`].
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Number of characters in the code.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0
            .to_le_bytes()
            .iter()
            .take_while(|b| **b != 0)
            .count()
    }
}

impl FromStr for SymbolCode {
    type Err = SwapError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() || s.len() > MAX_LEN {
            return Err(SwapError::InvalidSymbol(format!(
                "{s:?} must be 1 to {MAX_LEN} characters"
            )));
        }
        let mut raw = 0u64;
        for (i, byte) in s.bytes().enumerate() {
            if !byte.is_ascii_uppercase() {
                return Err(SwapError::InvalidSymbol(format!(
                    "{s:?} must contain only A-Z"
                )));
            }
            raw |= u64::from(byte) << (8 * i);
        }
        Ok(Self(raw))
    }
}

impl TryFrom<String> for SymbolCode {
    type Error = SwapError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for SymbolCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.0.to_le_bytes().iter().take_while(|b| **b != 0) {
            write!(f, "{}", char::from(*byte))?;
        }
        Ok(())
    }
}
