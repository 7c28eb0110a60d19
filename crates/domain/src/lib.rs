//! # Vigil Domain
//!
//! Wire contracts and domain models for the Vigil security-operations
//! console client.
//!
//! This crate contains:
//! - Typed contracts for every entity exchanged with the backend (users,
//!   alerts, incidents, flow events, notification settings, dashboard KPIs)
//! - Domain error types and Result definitions
//! - Configuration structures
//! - Domain constants
//!
//! ## Architecture
//! - No dependencies on other Vigil crates
//! - Only external dependencies allowed
//! - Pure data contracts; all behavior lives in `vigil-core` and
//!   `vigil-infra`

pub mod config;
pub mod constants;
pub mod errors;
pub mod types;

// Re-export commonly used items
pub use config::*;
pub use errors::*;
pub use types::*;
