//! # Reelgrid Domain
//!
//! Domain types and models for the Reelgrid platform client.
//!
//! This crate contains:
//! - Domain data types (videos, users, albums, folders, comments, teams)
//! - Wire enumerations carried on requests and responses
//! - Domain error types and Result definitions
//! - Client configuration structures
//!
//! ## Architecture
//! - No dependencies on other Reelgrid crates
//! - Only external dependencies allowed
//! - Pure domain models and data structures

pub mod config;
pub mod constants;
pub mod enums;
pub mod errors;
pub mod types;

// Re-export commonly used items
pub use config::*;
pub use enums::*;
pub use errors::*;
pub use types::*;
