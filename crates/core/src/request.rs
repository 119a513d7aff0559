//! Request descriptors and parameter-building helpers
//!
//! A [`RequestDescriptor`] is the logical shape of one platform call: verb,
//! validated URI path, ordered body map, query map and cache directive. The
//! facade builds descriptors; only the transport turns them into HTTP.

use std::collections::BTreeMap;

use serde_json::Value;

/// Ordered body-parameter mapping (insertion order, last write wins)
pub type BodyParams = serde_json::Map<String, Value>;

/// Query-parameter mapping (unique keys, last write wins)
pub type QueryParams = BTreeMap<String, String>;

/// HTTP verb for a platform call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl Method {
    /// Canonical verb name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
        }
    }
}

/// Cache behavior requested for a single call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CacheDirective {
    /// Transport-default caching
    #[default]
    Default,
    /// Bypass any cached response but allow the response to be stored
    NoCache,
    /// Bypass the cache entirely, in both directions
    NoStore,
}

/// The logical shape of a single platform call
#[derive(Debug, Clone, PartialEq)]
pub struct RequestDescriptor {
    /// HTTP verb implied by the operation
    pub method: Method,
    /// Validated resource URI path
    pub uri: String,
    /// Query parameters; operation defaults overlaid by caller entries
    pub query: QueryParams,
    /// Ordered body parameters
    pub body: BodyParams,
    /// Cache directive for this call
    pub cache: CacheDirective,
}

impl RequestDescriptor {
    /// Create a descriptor with empty parameters.
    pub fn new(method: Method, uri: impl Into<String>) -> Self {
        Self {
            method,
            uri: uri.into(),
            query: QueryParams::new(),
            body: BodyParams::new(),
            cache: CacheDirective::Default,
        }
    }

    /// GET descriptor.
    pub fn get(uri: impl Into<String>) -> Self {
        Self::new(Method::Get, uri)
    }

    /// POST descriptor.
    pub fn post(uri: impl Into<String>) -> Self {
        Self::new(Method::Post, uri)
    }

    /// PUT descriptor.
    pub fn put(uri: impl Into<String>) -> Self {
        Self::new(Method::Put, uri)
    }

    /// PATCH descriptor.
    pub fn patch(uri: impl Into<String>) -> Self {
        Self::new(Method::Patch, uri)
    }

    /// DELETE descriptor.
    pub fn delete(uri: impl Into<String>) -> Self {
        Self::new(Method::Delete, uri)
    }

    /// Replace the body map.
    #[must_use]
    pub fn with_body(mut self, body: BodyParams) -> Self {
        self.body = body;
        self
    }

    /// Set a single query parameter (last write wins).
    #[must_use]
    pub fn with_query_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.insert(key.into(), value.into());
        self
    }

    /// Overlay caller-supplied query entries; the caller wins on collision.
    #[must_use]
    pub fn merge_query(mut self, caller: QueryParams) -> Self {
        for (key, value) in caller {
            self.query.insert(key, value);
        }
        self
    }

    /// Set the cache directive.
    #[must_use]
    pub const fn with_cache(mut self, cache: CacheDirective) -> Self {
        self.cache = cache;
        self
    }
}

/// Incremental builder for ordered body maps
///
/// Layering matches dispatch rules: start from caller-supplied base entries,
/// overlay required fields, then overlay optional fields only when present.
/// Grouped sub-maps are attached only when they ended up non-empty.
#[derive(Debug, Default)]
pub struct BodyBuilder {
    map: BodyParams,
}

impl BodyBuilder {
    /// Start from an empty body.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from caller-supplied base entries.
    #[must_use]
    pub const fn from_base(base: BodyParams) -> Self {
        Self { map: base }
    }

    /// Overlay a required field (last write wins).
    #[must_use]
    pub fn required(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.map.insert(key.into(), value.into());
        self
    }

    /// Overlay an optional field; absent values are never emitted as nulls.
    #[must_use]
    pub fn optional<V: Into<Value>>(mut self, key: impl Into<String>, value: Option<V>) -> Self {
        if let Some(value) = value {
            self.map.insert(key.into(), value.into());
        }
        self
    }

    /// Attach a grouped sub-map, but only when it is non-empty.
    #[must_use]
    pub fn group(mut self, key: impl Into<String>, group: BodyParams) -> Self {
        if !group.is_empty() {
            self.map.insert(key.into(), Value::Object(group));
        }
        self
    }

    /// Finish building.
    #[must_use]
    pub fn build(self) -> BodyParams {
        self.map
    }
}

/// Join a resource URI and a sub-path, normalizing the joining slash.
#[must_use]
pub fn join_uri(base: &str, suffix: &str) -> String {
    let base = base.trim_end_matches('/');
    let suffix = suffix.trim_start_matches('/');
    format!("{base}/{suffix}")
}
