//! Typed endpoint surface for the console backend
//!
//! One method per backend endpoint, with request/response DTOs beside them.
//! Every method issues exactly one HTTP call and decodes the documented
//! response shape. Login/register are pure pass-throughs: the caller decides
//! what to store in the `SessionContext`.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::instrument;
use uuid::Uuid;
use vigil_domain::{
    Alert, AlertListQuery, AlertStats, AlertUpdate, DashboardSnapshot, NotificationSettings,
    NotificationSettingsUpdate, Page, ProfileUpdate, SessionUser, User,
};

use super::client::ApiClient;
use super::errors::ApiError;

/// Request/response types for the auth endpoints

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub username: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
}

/// Session token plus the abbreviated user projection
///
/// `token_type` is always "bearer" from this backend; carried but never
/// validated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
    pub user: SessionUser,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChangePasswordRequest {
    pub old_password: String,
    pub new_password: String,
}

/// Plain `{"message": ...}` acknowledgement
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AckMessage {
    pub message: String,
}

/// High-level command surface over the console API
pub struct ConsoleApi {
    client: Arc<ApiClient>,
}

impl ConsoleApi {
    /// Create a new endpoint surface over a configured client
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    // === Auth ===

    /// Exchange credentials for a session token
    ///
    /// # Errors
    ///
    /// Returns error if the credentials are rejected or the request fails
    #[instrument(skip(self, password), fields(email = %email))]
    pub async fn login(&self, email: &str, password: &str) -> Result<TokenResponse, ApiError> {
        let request =
            LoginRequest { email: email.to_string(), password: password.to_string() };
        self.client.post("/api/auth/login", &request).await
    }

    /// Create an account
    ///
    /// # Errors
    ///
    /// Returns error if registration is rejected or the request fails
    #[instrument(skip(self, request), fields(email = %request.email))]
    pub async fn register(&self, request: &RegisterRequest) -> Result<TokenResponse, ApiError> {
        self.client.post("/api/auth/register", request).await
    }

    // === Users ===

    /// Fetch the authenticated user
    ///
    /// # Errors
    ///
    /// Returns error if the request fails
    #[instrument(skip(self))]
    pub async fn current_user(&self) -> Result<User, ApiError> {
        self.client.get("/api/users/me").await
    }

    /// Partial profile update; returns the full updated record
    ///
    /// # Errors
    ///
    /// Returns error if the update is rejected or the request fails
    #[instrument(skip(self, update))]
    pub async fn update_profile(&self, update: &ProfileUpdate) -> Result<User, ApiError> {
        self.client.patch("/api/users/me", update).await
    }

    /// Swap the old password for a new one
    ///
    /// # Errors
    ///
    /// Returns error if the old password is wrong, the new one is rejected,
    /// or the request fails
    #[instrument(skip(self, old_password, new_password))]
    pub async fn change_password(
        &self,
        old_password: &str,
        new_password: &str,
    ) -> Result<AckMessage, ApiError> {
        let request = ChangePasswordRequest {
            old_password: old_password.to_string(),
            new_password: new_password.to_string(),
        };
        self.client.post("/api/users/me/change-password", &request).await
    }

    // === Dashboard ===

    /// Aggregate KPI snapshot plus the ten most recent alerts
    ///
    /// # Errors
    ///
    /// Returns error if the request fails
    #[instrument(skip(self))]
    pub async fn dashboard(&self) -> Result<DashboardSnapshot, ApiError> {
        self.client.get("/api/dashboard/").await
    }

    // === Alerts ===

    /// Paginated alert list; unset filters are not sent
    ///
    /// # Errors
    ///
    /// Returns error if the request fails
    #[instrument(skip(self, query), fields(page = query.page, per_page = query.per_page))]
    pub async fn alerts(&self, query: &AlertListQuery) -> Result<Page<Alert>, ApiError> {
        self.client.get_query("/api/alerts/", query).await
    }

    /// Single alert by id
    ///
    /// # Errors
    ///
    /// Returns error if the alert does not exist or the request fails
    #[instrument(skip(self), fields(alert_id = %id))]
    pub async fn alert(&self, id: Uuid) -> Result<Alert, ApiError> {
        let path = format!("/api/alerts/{id}");
        self.client.get(&path).await
    }

    /// Status update; transitions are validated server-side
    ///
    /// # Errors
    ///
    /// Returns error if the status is invalid, the alert does not exist, or
    /// the request fails
    #[instrument(skip(self, update), fields(alert_id = %id))]
    pub async fn update_alert(&self, id: Uuid, update: &AlertUpdate) -> Result<Alert, ApiError> {
        let path = format!("/api/alerts/{id}");
        self.client.patch(&path, update).await
    }

    /// Aggregate alert counters
    ///
    /// # Errors
    ///
    /// Returns error if the request fails
    #[instrument(skip(self))]
    pub async fn alert_stats(&self) -> Result<AlertStats, ApiError> {
        self.client.get("/api/alerts/stats/summary").await
    }

    // === Notification settings ===

    /// Fetch the per-user notification settings record
    ///
    /// # Errors
    ///
    /// Returns error if the request fails
    #[instrument(skip(self))]
    pub async fn notification_settings(&self) -> Result<NotificationSettings, ApiError> {
        self.client.get("/api/notifications/settings").await
    }

    /// Partial settings update; returns the full updated record
    ///
    /// # Errors
    ///
    /// Returns error if the update is rejected or the request fails
    #[instrument(skip(self, update))]
    pub async fn update_notification_settings(
        &self,
        update: &NotificationSettingsUpdate,
    ) -> Result<NotificationSettings, ApiError> {
        self.client.patch("/api/notifications/settings", update).await
    }
}
