//! Ledger account identity.

use core::fmt;
use core::str::FromStr;

use crate::error::SwapError;

/// Maximum length of an account name.
const MAX_LEN: usize = 12;

/// A ledger account name: 1 to 12 characters from `a-z`, `1-5` and `.`.
///
/// Accounts identify swap requesters and the owners of pool funds. This
/// core never authenticates them; see
/// [`Authorizer`](crate::traits::Authorizer).
///
/// # Examples
///
/// ```
/// use pegswap::domain::Account;
///
/// let alice: Account = "alice".parse().expect("valid name");
/// assert_eq!(alice.as_str(), "alice");
/// assert!("Alice".parse::<Account>().is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "config", derive(serde::Deserialize))]
#[cfg_attr(feature = "config", serde(try_from = "String"))]
pub struct Account(String);

impl Account {
    /// Returns the account name.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for Account {
    type Err = SwapError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() || s.len() > MAX_LEN {
            return Err(SwapError::InvalidAccount(format!(
                "{s:?} must be 1 to {MAX_LEN} characters"
            )));
        }
        if !s
            .bytes()
            .all(|b| matches!(b, b'a'..=b'z' | b'1'..=b'5' | b'.'))
        {
            return Err(SwapError::InvalidAccount(format!(
                "{s:?} may only contain a-z, 1-5 and '.'"
            )));
        }
        Ok(Self(s.to_owned()))
    }
}

impl TryFrom<String> for Account {
    type Error = SwapError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
