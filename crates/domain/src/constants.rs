//! Domain-level constants
//!
//! Centralized location for client defaults and fixed wire values.

/// Default platform API base URL
pub const DEFAULT_BASE_URL: &str = "https://api.reelgrid.com";

/// Versioned media type sent in the `Accept` header on every request
pub const API_ACCEPT_HEADER: &str = "application/vnd.reelgrid.*+json;version=3.4";

/// Default request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Default user agent reported by the client
pub const DEFAULT_USER_AGENT: &str = concat!("reelgrid-rust/", env!("CARGO_PKG_VERSION"));

/// Endpoint for the authenticated user's own resources
pub const ME_URI: &str = "/me";

/// Endpoint for cross-resource search
pub const SEARCH_URI: &str = "/search";
