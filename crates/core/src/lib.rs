//! # Vigil Core
//!
//! Pure business logic layer - no infrastructure dependencies.
//!
//! This crate contains:
//! - The settings-surface state machine (forms, validation, banner)
//! - Port/adapter interfaces (traits) for the backend gateway
//!
//! ## Architecture Principles
//! - Only depends on `vigil-domain`
//! - No HTTP or platform code
//! - All external dependencies via traits
//! - Pure, testable business logic

pub mod settings;

// Re-export specific items to avoid ambiguity
pub use settings::forms::{
    MessageKind, PasswordForm, ProfileForm, SettingsTab, StatusMessage,
};
pub use settings::ports::{GatewayError, SettingsGateway};
pub use settings::SettingsService;
