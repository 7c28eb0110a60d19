//! API-specific error types
//!
//! Classifies HTTP and transport failures. The client never retries, so
//! errors carry no retry metadata - only the status class and the backend's
//! structured `detail` message when the body held one.

use thiserror::Error;

/// Coarse error classes for callers that branch on kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiErrorCategory {
    /// Authentication errors (401, 403)
    Authentication,
    /// Other client errors (4xx)
    Client,
    /// Server errors (5xx)
    Server,
    /// Network/connection errors
    Network,
    /// Undecodable success responses
    Decode,
    /// Configuration errors
    Config,
}

/// API operation errors
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("authentication failed (status {status}){}", fmt_detail(.detail))]
    Auth { status: u16, detail: Option<String> },

    #[error("request rejected (status {status}){}", fmt_detail(.detail))]
    Client { status: u16, detail: Option<String> },

    #[error("server error (status {status}){}", fmt_detail(.detail))]
    Server { status: u16, detail: Option<String> },

    #[error("network error: {0}")]
    Network(String),

    #[error("failed to decode response: {0}")]
    Decode(String),

    #[error("configuration error: {0}")]
    Config(String),
}

fn fmt_detail(detail: &Option<String>) -> String {
    detail.as_ref().map(|d| format!(": {d}")).unwrap_or_default()
}

impl ApiError {
    /// The HTTP status code, for errors that carry one
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Auth { status, .. }
            | Self::Client { status, .. }
            | Self::Server { status, .. } => Some(*status),
            Self::Network(_) | Self::Decode(_) | Self::Config(_) => None,
        }
    }

    /// The backend's `detail` message, exactly when the body carried one
    pub fn detail(&self) -> Option<&str> {
        match self {
            Self::Auth { detail, .. }
            | Self::Client { detail, .. }
            | Self::Server { detail, .. } => detail.as_deref(),
            Self::Network(_) | Self::Decode(_) | Self::Config(_) => None,
        }
    }

    /// Get the error category for this error
    pub fn category(&self) -> ApiErrorCategory {
        match self {
            Self::Auth { .. } => ApiErrorCategory::Authentication,
            Self::Client { .. } => ApiErrorCategory::Client,
            Self::Server { .. } => ApiErrorCategory::Server,
            Self::Network(_) => ApiErrorCategory::Network,
            Self::Decode(_) => ApiErrorCategory::Decode,
            Self::Config(_) => ApiErrorCategory::Config,
        }
    }

    /// True for 401/403 responses
    pub fn is_auth(&self) -> bool {
        matches!(self, Self::Auth { .. })
    }
}
