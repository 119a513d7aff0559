//! Port interfaces for the facade's external collaborators
//!
//! These traits define the boundaries between request construction and the
//! infrastructure implementations that perform network work and hold token
//! state.

use async_trait::async_trait;
use reelgrid_domain::{AuthenticatedAccount, Result};

use crate::request::RequestDescriptor;

/// Trait for performing a fully built request against the platform
///
/// The transport owns verbs, retries and timeouts. It receives the resolved
/// credential and a complete descriptor, and returns the decoded JSON body
/// (`Value::Null` for empty responses).
#[async_trait]
pub trait Transport: Send + Sync {
    /// Execute one request and return its response body.
    async fn execute(
        &self,
        credential: &str,
        request: RequestDescriptor,
    ) -> Result<serde_json::Value>;
}

/// Trait for reporting the currently signed-in account
///
/// Implementations must be cheap to call: the facade snapshots the account on
/// every dispatch rather than caching a credential.
pub trait Authenticator: Send + Sync {
    /// The account the client is currently signed in as, if any.
    fn current_account(&self) -> Option<AuthenticatedAccount>;
}
