//! The platform client facade
//!
//! One method per platform operation, all funneled through a single dispatch
//! path: validate arguments, build a descriptor, snapshot the credential,
//! then either short-circuit to the local adapter or perform exactly one
//! transport call. Operation families live in sibling modules; every module
//! adds `impl PlatformClient` blocks only.
//!
//! Domain-object overloads are thin adapters: they extract the relevant URI
//! (often from nested relation metadata) and delegate to the URI-accepting
//! method, so validation and parameter building exist in exactly one place.

pub mod albums;
pub mod comments;
pub mod content;
pub mod folders;
pub mod interactions;
pub mod search;
pub mod teams;
pub mod users;
pub mod videos;

pub use albums::AlbumParams;
pub use search::SearchRefinements;
pub use teams::TeamMemberParams;
pub use users::UserEditParams;
pub use videos::VideoEditParams;

use std::sync::Arc;

use reelgrid_domain::{ClientConfig, ReelgridError, Result};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::handle::RequestHandle;
use crate::local;
use crate::ports::{Authenticator, Transport};
use crate::request::{CacheDirective, QueryParams, RequestDescriptor};

/// Query parameter carrying a comma-separated field filter
const FIELDS_PARAM: &str = "fields";

/// Per-call options shared by every fetch operation
#[derive(Debug, Clone, Default)]
pub struct FetchOptions {
    /// Comma-separated field filter applied to the response
    pub field_filter: Option<String>,
    /// Caller-supplied query entries, overlaid on operation defaults
    pub query: QueryParams,
    /// Cache behavior for this call
    pub cache: CacheDirective,
}

impl FetchOptions {
    /// Options with no filter, no extra query and default caching.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the response field filter.
    #[must_use]
    pub fn fields(mut self, filter: impl Into<String>) -> Self {
        self.field_filter = Some(filter.into());
        self
    }

    /// Add a caller query entry (wins over operation defaults).
    #[must_use]
    pub fn query_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.insert(key.into(), value.into());
        self
    }

    /// Set the cache directive.
    #[must_use]
    pub const fn cache(mut self, cache: CacheDirective) -> Self {
        self.cache = cache;
        self
    }

    /// Fold these options into a descriptor. The field filter is applied as
    /// an operation default, then caller entries overlay it (caller wins).
    pub(crate) fn apply(self, mut descriptor: RequestDescriptor) -> RequestDescriptor {
        if let Some(filter) = self.field_filter {
            descriptor.query.insert(FIELDS_PARAM.to_string(), filter);
        }
        descriptor.merge_query(self.query).with_cache(self.cache)
    }
}

/// Typed facade over the platform API
///
/// Stateless besides the two injected collaborators and the fixed fallback
/// credential; safe to share and call concurrently without coordination.
/// Every method returns a [`RequestHandle`] synchronously and reports exactly
/// once through its callback.
pub struct PlatformClient {
    transport: Arc<dyn Transport>,
    authenticator: Arc<dyn Authenticator>,
    fallback_credential: String,
}

impl PlatformClient {
    /// Create a facade over the given collaborators.
    ///
    /// The fallback basic credential is derived from the configuration once;
    /// account tokens are re-read from the authenticator on every call.
    #[must_use]
    pub fn new(
        transport: Arc<dyn Transport>,
        authenticator: Arc<dyn Authenticator>,
        config: &ClientConfig,
    ) -> Self {
        Self { transport, authenticator, fallback_credential: config.basic_credential() }
    }

    /// Resolve the authorization header value for one call.
    ///
    /// Re-derived per call, never memoized, so a token refresh between two
    /// calls is observed by the second call.
    fn credential(&self) -> String {
        self.authenticator.current_account().map_or_else(
            || self.fallback_credential.clone(),
            |account| format!("Bearer {}", account.access_token),
        )
    }

    /// The uniform dispatch tail shared by every operation.
    ///
    /// A validation failure short-circuits to the local adapter; otherwise
    /// the descriptor is handed to the transport on a spawned task and the
    /// remote handle is returned.
    pub(crate) fn dispatch<T, C>(&self, built: Result<RequestDescriptor>, callback: C) -> RequestHandle
    where
        T: DeserializeOwned + Send + 'static,
        C: FnOnce(Result<T>) + Send + 'static,
    {
        let descriptor = match built {
            Ok(descriptor) => descriptor,
            Err(error) => return local::enqueue_error(error, callback),
        };

        let credential = self.credential();
        let transport = Arc::clone(&self.transport);
        let task = tokio::spawn(async move {
            debug!(method = descriptor.method.as_str(), uri = %descriptor.uri, "dispatching platform request");
            let result = transport.execute(&credential, descriptor).await.and_then(decode::<T>);
            callback(result);
        });

        RequestHandle::remote(task.abort_handle())
    }
}

fn decode<T: DeserializeOwned>(value: serde_json::Value) -> Result<T> {
    serde_json::from_value(value).map_err(|e| ReelgridError::Parse(e.to_string()))
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn decode_accepts_null_for_unit() {
        decode::<()>(serde_json::Value::Null).unwrap();
    }

    #[test]
    fn decode_reports_parse_errors() {
        let err = decode::<u32>(json!("not a number")).unwrap_err();
        assert!(matches!(err, ReelgridError::Parse(_)));
    }

    #[test]
    fn fetch_options_field_filter_loses_to_caller_query() {
        let options = FetchOptions::new().fields("uri,name").query_param("fields", "uri");
        let descriptor = options.apply(RequestDescriptor::get("/videos/1"));
        assert_eq!(descriptor.query.get("fields").map(String::as_str), Some("uri"));
    }

    #[test]
    fn fetch_options_apply_sets_cache() {
        let options = FetchOptions::new().cache(CacheDirective::NoCache);
        let descriptor = options.apply(RequestDescriptor::get("/videos/1"));
        assert_eq!(descriptor.cache, CacheDirective::NoCache);
    }
}
