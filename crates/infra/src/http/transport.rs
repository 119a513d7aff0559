//! Transport adapter over the platform HTTP API
//!
//! Turns request descriptors into real HTTP calls: URL assembly against the
//! configured base, authorization and accept headers, cache directives,
//! query and body application, and status mapping back into domain errors.

use std::time::Duration;

use async_trait::async_trait;
use reelgrid_core::{CacheDirective, Method, RequestDescriptor, Transport};
use reelgrid_domain::constants::API_ACCEPT_HEADER;
use reelgrid_domain::{ClientConfig, ReelgridError, Result};
use reqwest::header::{ACCEPT, AUTHORIZATION, CACHE_CONTROL};
use reqwest::StatusCode;
use serde_json::Value;
use url::Url;

use super::client::HttpClient;

/// Reqwest-backed implementation of the transport port.
pub struct HttpTransport {
    client: HttpClient,
    base_url: Url,
}

impl HttpTransport {
    /// Build a transport from validated client configuration.
    ///
    /// # Errors
    /// Returns `ReelgridError::Config` when the configuration does not
    /// validate, or an internal error when the underlying client cannot be
    /// constructed.
    pub fn new(config: &ClientConfig) -> Result<Self> {
        config.validate()?;
        let base_url = Url::parse(&config.base_url)
            .map_err(|e| ReelgridError::Config(format!("invalid base url: {e}")))?;
        let client = HttpClient::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.clone())
            .build()?;
        Ok(Self { client, base_url })
    }

    /// Build a transport around an existing client, for callers that tune
    /// retry behavior themselves.
    pub fn with_client(client: HttpClient, config: &ClientConfig) -> Result<Self> {
        config.validate()?;
        let base_url = Url::parse(&config.base_url)
            .map_err(|e| ReelgridError::Config(format!("invalid base url: {e}")))?;
        Ok(Self { client, base_url })
    }

    fn endpoint(&self, uri: &str) -> Result<Url> {
        self.base_url
            .join(uri)
            .map_err(|e| ReelgridError::Internal(format!("cannot resolve endpoint for {uri}: {e}")))
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn execute(&self, credential: &str, request: RequestDescriptor) -> Result<Value> {
        let url = self.endpoint(&request.uri)?;
        let mut builder = self
            .client
            .request(map_method(request.method), url)
            .header(AUTHORIZATION, credential)
            .header(ACCEPT, API_ACCEPT_HEADER);

        if let Some(directive) = cache_control(request.cache) {
            builder = builder.header(CACHE_CONTROL, directive);
        }
        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        if !request.body.is_empty() {
            builder = builder.json(&request.body);
        }

        let response = self.client.send(builder).await?;
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ReelgridError::Network(format!("failed to read response body: {e}")))?;

        map_status(status, body)
    }
}

fn map_method(method: Method) -> reqwest::Method {
    match method {
        Method::Get => reqwest::Method::GET,
        Method::Post => reqwest::Method::POST,
        Method::Put => reqwest::Method::PUT,
        Method::Patch => reqwest::Method::PATCH,
        Method::Delete => reqwest::Method::DELETE,
    }
}

const fn cache_control(directive: CacheDirective) -> Option<&'static str> {
    match directive {
        CacheDirective::Default => None,
        CacheDirective::NoCache => Some("no-cache"),
        CacheDirective::NoStore => Some("no-store"),
    }
}

/// Map a terminal HTTP status and body into the domain result.
///
/// Empty success bodies (204s, DELETEs) decode as JSON null so unit
/// responses deserialize uniformly.
fn map_status(status: StatusCode, body: String) -> Result<Value> {
    if status.is_success() {
        if body.trim().is_empty() {
            return Ok(Value::Null);
        }
        return serde_json::from_str(&body)
            .map_err(|e| ReelgridError::Parse(format!("response is not valid json: {e}")));
    }
    if status == StatusCode::UNAUTHORIZED {
        return Err(ReelgridError::Auth(format!("platform rejected the credential: {body}")));
    }
    Err(ReelgridError::Api { status: status.as_u16(), body })
}
