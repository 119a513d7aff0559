//! Error types used throughout the client

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Machine-readable codes attached to locally detected input errors.
///
/// Codes are stable identifiers callers can branch on; the accompanying
/// message is developer-facing and free to change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// The supplied URI was missing entirely
    MissingUri,
    /// The supplied URI was empty or whitespace-only
    EmptyUri,
    /// The supplied URI contained a path-traversal sequence
    MalformedUri,
    /// A required search query string was empty
    EmptyQuery,
    /// A required field was absent on a domain object overload
    MissingField,
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let code = match self {
            Self::MissingUri => "missing_uri",
            Self::EmptyUri => "empty_uri",
            Self::MalformedUri => "malformed_uri",
            Self::EmptyQuery => "empty_query",
            Self::MissingField => "missing_field",
        };
        f.write_str(code)
    }
}

/// Main error type for the Reelgrid client
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "details")]
pub enum ReelgridError {
    /// A request argument failed local validation; the transport was never
    /// invoked. Always recoverable by the caller.
    #[error("invalid input [{code}]: {message}")]
    InvalidInput {
        /// Stable machine-readable code
        code: ErrorCode,
        /// Developer-facing description
        message: String,
    },

    #[error("authentication error: {0}")]
    Auth(String),

    #[error("network error: {0}")]
    Network(String),

    /// The platform returned a non-success HTTP status
    #[error("api error ({status}): {body}")]
    Api {
        /// HTTP status code returned by the platform
        status: u16,
        /// Raw response body, if any
        body: String,
    },

    #[error("parse error: {0}")]
    Parse(String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("internal error: {0}")]
    Internal(String),
}

impl ReelgridError {
    /// Construct a local input-validation error.
    pub fn invalid_input(code: ErrorCode, message: impl Into<String>) -> Self {
        Self::InvalidInput { code, message: message.into() }
    }

    /// Whether this error was produced locally, before any network call.
    #[must_use]
    pub const fn is_local(&self) -> bool {
        matches!(self, Self::InvalidInput { .. })
    }
}

/// Result type alias for Reelgrid operations
pub type Result<T> = std::result::Result<T, ReelgridError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_input_formats_code_and_message() {
        let err = ReelgridError::invalid_input(ErrorCode::EmptyUri, "uri must not be blank");
        assert_eq!(err.to_string(), "invalid input [empty_uri]: uri must not be blank");
        assert!(err.is_local());
    }

    #[test]
    fn api_error_is_not_local() {
        let err = ReelgridError::Api { status: 503, body: "unavailable".into() };
        assert!(!err.is_local());
    }

    #[test]
    fn error_codes_serialize_snake_case() {
        let json = serde_json::to_string(&ErrorCode::MalformedUri).unwrap();
        assert_eq!(json, "\"malformed_uri\"");
    }
}
