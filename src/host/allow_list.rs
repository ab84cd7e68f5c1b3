//! Account allow-list authorizer.

use std::collections::BTreeSet;

use tracing::warn;

use crate::domain::Account;
use crate::error::SwapError;
use crate::traits::Authorizer;

/// Authorizes a fixed set of accounts, or everyone.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AllowList {
    accounts: BTreeSet<Account>,
    allow_all: bool,
}

impl AllowList {
    /// An empty list that authorizes nobody.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A list that authorizes every account.
    #[must_use]
    pub fn allow_all() -> Self {
        Self {
            accounts: BTreeSet::new(),
            allow_all: true,
        }
    }

    /// Adds `account`. Returns `false` if it was already listed.
    pub fn allow(&mut self, account: Account) -> bool {
        self.accounts.insert(account)
    }

    /// Removes `account`. Returns `false` if it was not listed.
    pub fn revoke(&mut self, account: &Account) -> bool {
        self.accounts.remove(account)
    }

    /// Returns `true` if `account` would pass [`Authorizer::require_auth`].
    #[must_use]
    pub fn is_allowed(&self, account: &Account) -> bool {
        self.allow_all || self.accounts.contains(account)
    }
}

impl FromIterator<Account> for AllowList {
    fn from_iter<I: IntoIterator<Item = Account>>(iter: I) -> Self {
        Self {
            accounts: iter.into_iter().collect(),
            allow_all: false,
        }
    }
}

impl Authorizer for AllowList {
    fn require_auth(&self, requester: &Account) -> Result<(), SwapError> {
        if self.is_allowed(requester) {
            return Ok(());
        }
        warn!(requester = %requester, "authorization refused");
        Err(SwapError::Unauthorized(requester.to_string()))
    }
}
