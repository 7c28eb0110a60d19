//! User identity types
//!
//! The backend owns these records; the client holds a read/write-through
//! cached copy for the session's lifetime.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Full user record as returned by `/api/users/me`
///
/// `updated_at` is absent on the `/users/me` projection, so it decodes to
/// `None` when the backend omits it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub username: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub is_active: bool,
    pub is_verified: bool,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub last_login: Option<DateTime<Utc>>,
}

impl User {
    /// Human-readable name: first + last when present, username otherwise
    pub fn display_name(&self) -> String {
        let full = match (&self.first_name, &self.last_name) {
            (Some(first), Some(last)) => format!("{first} {last}"),
            (Some(first), None) => first.clone(),
            (None, Some(last)) => last.clone(),
            (None, None) => String::new(),
        };
        let full = full.trim().to_string();
        if full.is_empty() {
            self.username.clone()
        } else {
            full
        }
    }
}

/// Abbreviated user projection embedded in login/register responses
///
/// The auth endpoints return the user without timestamps; this is its own
/// type rather than a `User` with defaulted fields.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SessionUser {
    pub id: Uuid,
    pub email: String,
    pub username: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub is_active: bool,
    pub is_verified: bool,
}

/// Partial profile update for `PATCH /api/users/me`
///
/// Unset fields are omitted from the wire so the backend only touches what
/// the caller sent.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProfileUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}
