//! Port interfaces for the settings surface
//!
//! These traits define the boundary between the settings controller and the
//! infrastructure layer that talks to the backend.

use async_trait::async_trait;
use thiserror::Error;
use vigil_domain::{NotificationSettings, NotificationSettingsUpdate, ProfileUpdate, User};

/// Failure crossing the gateway boundary
///
/// Preserves the one bit the controller cares about: whether the backend
/// sent a structured `detail` message (surfaced verbatim) or the failure was
/// transport-level (a static fallback string is shown instead).
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GatewayError {
    /// The backend rejected the request with a `detail` message
    #[error("{0}")]
    Rejected(String),

    /// Transport failure, undecodable response, or a rejection without detail
    #[error("backend unavailable: {0}")]
    Unavailable(String),
}

impl GatewayError {
    /// The server-provided detail, when one was present
    pub fn detail(&self) -> Option<&str> {
        match self {
            Self::Rejected(detail) => Some(detail),
            Self::Unavailable(_) => None,
        }
    }
}

/// Backend operations the settings controller depends on
#[async_trait]
pub trait SettingsGateway: Send + Sync {
    /// Partial profile update; returns the full updated user record
    async fn update_profile(&self, update: &ProfileUpdate) -> Result<User, GatewayError>;

    /// Swap the old password for a new one
    async fn change_password(&self, old: &str, new: &str) -> Result<(), GatewayError>;

    /// Fetch the per-user notification settings record
    async fn fetch_notification_settings(&self) -> Result<NotificationSettings, GatewayError>;

    /// Partial settings update; returns the full updated record
    async fn update_notification_settings(
        &self,
        update: &NotificationSettingsUpdate,
    ) -> Result<NotificationSettings, GatewayError>;
}
