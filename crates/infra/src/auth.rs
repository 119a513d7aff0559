//! In-memory account authenticator
//!
//! Holds the currently signed-in account behind a read-write lock. The
//! facade snapshots the account once per call, so swapping or clearing the
//! account here takes effect on the next dispatch without coordination.

use parking_lot::RwLock;
use reelgrid_core::Authenticator;
use reelgrid_domain::AuthenticatedAccount;
use tracing::info;

/// Process-local authenticator backed by a lock-guarded account slot.
#[derive(Debug, Default)]
pub struct TokenAuthenticator {
    account: RwLock<Option<AuthenticatedAccount>>,
}

impl TokenAuthenticator {
    /// An authenticator with no signed-in account.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// An authenticator pre-populated with an account.
    #[must_use]
    pub fn with_account(account: AuthenticatedAccount) -> Self {
        Self { account: RwLock::new(Some(account)) }
    }

    /// Sign an account in, replacing any previous one.
    pub fn sign_in(&self, account: AuthenticatedAccount) {
        info!("account signed in");
        *self.account.write() = Some(account);
    }

    /// Sign the current account out. Subsequent calls fall back to the
    /// client-credential authorization.
    pub fn sign_out(&self) {
        info!("account signed out");
        *self.account.write() = None;
    }

    /// Whether an account is currently signed in.
    #[must_use]
    pub fn is_signed_in(&self) -> bool {
        self.account.read().is_some()
    }
}

impl Authenticator for TokenAuthenticator {
    fn current_account(&self) -> Option<AuthenticatedAccount> {
        self.account.read().clone()
    }
}
