//! # Reelgrid Core
//!
//! The request-dispatch facade - pure request-construction logic with no
//! transport dependencies.
//!
//! This crate contains:
//! - Port interfaces for the authenticator and transport collaborators
//! - URI and enum-contract validation
//! - Request descriptors and parameter overlay-merge helpers
//! - The local call adapter and the cancellable request handle
//! - One facade method per platform operation
//!
//! ## Architecture Principles
//! - Only depends on `reelgrid-domain`
//! - No HTTP or platform code; the transport is reached via a trait
//! - Every operation validates locally, then either short-circuits to a
//!   locally resolved handle or performs exactly one transport dispatch

pub mod client;
pub mod handle;
pub mod local;
pub mod ports;
pub mod request;
pub mod validation;

// Re-export the primary entry points
pub use client::{FetchOptions, PlatformClient};
pub use handle::RequestHandle;
pub use ports::{Authenticator, Transport};
pub use request::{BodyBuilder, BodyParams, CacheDirective, Method, QueryParams, RequestDescriptor};
