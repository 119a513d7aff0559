//! Generic content operations
//!
//! Escape hatches for endpoints without a dedicated facade method: the
//! caller supplies a raw URI and receives the undecoded JSON body. The same
//! validation and dispatch rules apply as everywhere else.

use reelgrid_domain::Result;
use serde_json::Value;

use super::{FetchOptions, PlatformClient};
use crate::handle::RequestHandle;
use crate::request::{BodyParams, QueryParams, RequestDescriptor};
use crate::validation::validate_uri;

impl PlatformClient {
    /// Fetch arbitrary content by URI.
    pub fn get_content<C>(&self, uri: &str, options: FetchOptions, callback: C) -> RequestHandle
    where
        C: FnOnce(Result<Value>) + Send + 'static,
    {
        let built = validate_uri(Some(uri)).map(|uri| options.apply(RequestDescriptor::get(uri)));
        self.dispatch(built, callback)
    }

    /// POST an arbitrary body to a URI and decode the response.
    pub fn post_content<C>(&self, uri: &str, body: BodyParams, callback: C) -> RequestHandle
    where
        C: FnOnce(Result<Value>) + Send + 'static,
    {
        let built = validate_uri(Some(uri)).map(|uri| RequestDescriptor::post(uri).with_body(body));
        self.dispatch(built, callback)
    }

    /// PUT to a URI with caller query entries and decode the response.
    pub fn put_content<C>(&self, uri: &str, query: QueryParams, callback: C) -> RequestHandle
    where
        C: FnOnce(Result<Value>) + Send + 'static,
    {
        let built = validate_uri(Some(uri)).map(|uri| RequestDescriptor::put(uri).merge_query(query));
        self.dispatch(built, callback)
    }

    /// DELETE a URI with caller query entries.
    pub fn delete_content<C>(&self, uri: &str, query: QueryParams, callback: C) -> RequestHandle
    where
        C: FnOnce(Result<()>) + Send + 'static,
    {
        let built =
            validate_uri(Some(uri)).map(|uri| RequestDescriptor::delete(uri).merge_query(query));
        self.dispatch(built, callback)
    }

    /// POST an arbitrary body to a URI, expecting an empty response.
    pub fn post_content_empty_response<C>(&self, uri: &str, body: BodyParams, callback: C) -> RequestHandle
    where
        C: FnOnce(Result<()>) + Send + 'static,
    {
        let built = validate_uri(Some(uri)).map(|uri| RequestDescriptor::post(uri).with_body(body));
        self.dispatch(built, callback)
    }

    /// PUT an arbitrary body to a URI, expecting an empty response.
    pub fn put_content_empty_response<C>(&self, uri: &str, body: BodyParams, callback: C) -> RequestHandle
    where
        C: FnOnce(Result<()>) + Send + 'static,
    {
        let built = validate_uri(Some(uri)).map(|uri| RequestDescriptor::put(uri).with_body(body));
        self.dispatch(built, callback)
    }
}
