//! Ledger quantity: an amount tagged with its token symbol.

use core::fmt;
use core::str::FromStr;

use super::{Amount, Decimals, Symbol};
use crate::error::SwapError;

/// An [`Amount`] together with the [`Symbol`] it is denominated in.
///
/// This is the unit every ledger operation speaks: pool balances, depths,
/// fees and transfers are all quantities. Arithmetic between quantities
/// of different symbols is rejected with [`SwapError::SymbolMismatch`].
///
/// Quantities display and parse in the `"<int>.<frac> <CODE>"` form, where
/// the number of fractional digits is the token's precision.
///
/// # Examples
///
/// ```
/// use pegswap::domain::Quantity;
///
/// let q: Quantity = "100.0000 EOS".parse().expect("valid quantity");
/// assert_eq!(q.amount().get(), 1_000_000);
/// assert_eq!(q.symbol().decimals().get(), 4);
/// assert_eq!(q.to_string(), "100.0000 EOS");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "config", derive(serde::Deserialize))]
#[cfg_attr(feature = "config", serde(try_from = "String"))]
pub struct Quantity {
    amount: Amount,
    symbol: Symbol,
}

impl Quantity {
    /// Creates a quantity.
    #[must_use]
    pub const fn new(amount: Amount, symbol: Symbol) -> Self {
        Self { amount, symbol }
    }

    /// Zero quantity of `symbol`.
    #[must_use]
    pub const fn zero(symbol: Symbol) -> Self {
        Self::new(Amount::ZERO, symbol)
    }

    /// Returns the raw amount.
    #[must_use]
    pub const fn amount(&self) -> Amount {
        self.amount
    }

    /// Returns the symbol.
    #[must_use]
    pub const fn symbol(&self) -> Symbol {
        self.symbol
    }

    /// Returns `true` if the amount is zero.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.amount.is_zero()
    }

    /// Returns a copy with a different amount and the same symbol.
    #[must_use]
    pub const fn with_amount(&self, amount: Amount) -> Self {
        Self::new(amount, self.symbol)
    }

    /// Checked addition of two quantities of the same symbol.
    ///
    /// # Errors
    ///
    /// - [`SwapError::SymbolMismatch`] if the symbols differ.
    /// - [`SwapError::Overflow`] on overflow.
    pub fn checked_add(&self, other: &Self) -> Result<Self, SwapError> {
        self.ensure_same_symbol(other)?;
        self.amount
            .checked_add(&other.amount)
            .map(|amount| self.with_amount(amount))
            .ok_or(SwapError::Overflow("quantity addition"))
    }

    /// Checked subtraction of two quantities of the same symbol.
    ///
    /// # Errors
    ///
    /// - [`SwapError::SymbolMismatch`] if the symbols differ.
    /// - [`SwapError::Overflow`] if `other` exceeds `self`.
    pub fn checked_sub(&self, other: &Self) -> Result<Self, SwapError> {
        self.ensure_same_symbol(other)?;
        self.amount
            .checked_sub(&other.amount)
            .map(|amount| self.with_amount(amount))
            .ok_or(SwapError::Overflow("quantity subtraction"))
    }

    /// Fails unless `other` carries exactly this quantity's symbol.
    ///
    /// # Errors
    ///
    /// Returns [`SwapError::SymbolMismatch`] if the symbols differ.
    pub fn ensure_same_symbol(&self, other: &Self) -> Result<(), SwapError> {
        if self.symbol != other.symbol {
            return Err(SwapError::SymbolMismatch {
                expected: self.symbol.to_string(),
                actual: other.symbol.to_string(),
            });
        }
        Ok(())
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let decimals = self.symbol.decimals();
        let factor = decimals.factor();
        let whole = self.amount.get() / factor;
        let frac = self.amount.get() % factor;
        if decimals.get() == 0 {
            write!(f, "{whole} {}", self.symbol.code())
        } else {
            write!(
                f,
                "{whole}.{frac:0width$} {}",
                self.symbol.code(),
                width = usize::from(decimals.get())
            )
        }
    }
}

impl FromStr for Quantity {
    type Err = SwapError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |why: &str| SwapError::InvalidQuantity(format!("{s:?}: {why}"));

        let (number, code) = s
            .trim()
            .split_once(' ')
            .ok_or_else(|| invalid("expected \"<amount> <CODE>\""))?;
        let (whole, frac) = match number.split_once('.') {
            Some((w, f)) if !f.is_empty() => (w, f),
            Some(_) => return Err(invalid("missing fractional digits")),
            None => (number, ""),
        };
        if whole.is_empty()
            || !whole.bytes().all(|b| b.is_ascii_digit())
            || !frac.bytes().all(|b| b.is_ascii_digit())
        {
            return Err(invalid("amount must be an unsigned decimal number"));
        }

        let precision =
            u8::try_from(frac.len()).map_err(|_| invalid("too many fractional digits"))?;
        let decimals = Decimals::new(precision)?;
        let symbol = Symbol::new(code.trim().parse()?, decimals);

        let digits = format!("{whole}{frac}");
        let raw = digits
            .parse::<u128>()
            .map_err(|_| invalid("amount out of range"))?;
        Ok(Self::new(Amount::new(raw), symbol))
    }
}

impl TryFrom<String> for Quantity {
    type Error = SwapError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
