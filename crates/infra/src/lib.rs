//! # Vigil Infrastructure
//!
//! Infrastructure implementations of core ports.
//!
//! This crate contains:
//! - The reqwest-based HTTP client and typed endpoint surface
//! - Injected session-token state
//! - The gateway adapter for the settings controller
//! - Configuration loading (environment and files)
//!
//! ## Architecture
//! - Implements traits defined in `vigil-core`
//! - Depends on `vigil-domain` and `vigil-core`
//! - Contains all "impure" code (I/O)

pub mod api;
pub mod config;

// Re-export commonly used items
pub use api::client::{ApiClient, ApiClientConfig};
pub use api::endpoints::ConsoleApi;
pub use api::errors::{ApiError, ApiErrorCategory};
pub use api::session::{AccessTokenProvider, SessionContext};
