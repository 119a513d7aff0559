//! # Reelgrid Infrastructure
//!
//! Infrastructure implementations of the core ports.
//!
//! This crate contains:
//! - The HTTP transport adapter (reqwest) with retry support
//! - The in-memory account authenticator
//! - Configuration loading (environment and file)
//!
//! ## Architecture
//! - Implements traits defined in `reelgrid-core`
//! - Depends on `reelgrid-domain` and `reelgrid-core`
//! - Contains all "impure" code (network I/O, environment, filesystem)

pub mod auth;
pub mod config;
pub mod errors;
pub mod http;

pub use auth::TokenAuthenticator;
pub use errors::InfraError;
pub use http::{HttpClient, HttpClientBuilder, HttpTransport};
