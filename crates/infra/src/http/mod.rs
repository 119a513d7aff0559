//! HTTP infrastructure
//!
//! A retrying reqwest wrapper plus the transport adapter that turns request
//! descriptors into real platform calls.

pub mod client;
pub mod transport;

pub use client::{HttpClient, HttpClientBuilder};
pub use transport::HttpTransport;
