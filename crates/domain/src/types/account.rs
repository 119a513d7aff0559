//! Authenticated account state

use serde::{Deserialize, Serialize};

use crate::types::user::User;

/// The account the client is currently signed in as
///
/// Produced by the token subsystem and snapshotted by the request facade on
/// every call, so a refreshed token is picked up by the very next request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthenticatedAccount {
    /// Bearer access token for the signed-in user
    pub access_token: String,
    /// Token type reported by the platform (always `bearer` today)
    pub token_type: Option<String>,
    /// Granted scopes, space separated
    pub scope: Option<String>,
    /// The signed-in user, when the token grant included one
    pub user: Option<User>,
}

impl AuthenticatedAccount {
    /// Create an account from a bare access token.
    pub fn from_token(access_token: impl Into<String>) -> Self {
        Self { access_token: access_token.into(), token_type: None, scope: None, user: None }
    }
}
