//! Settings-gateway adapter
//!
//! Implements the `vigil-core` port on top of the typed endpoint surface,
//! collapsing `ApiError` to the detail-or-not distinction the controller
//! needs.

use async_trait::async_trait;
use vigil_core::{GatewayError, SettingsGateway};
use vigil_domain::{NotificationSettings, NotificationSettingsUpdate, ProfileUpdate, User};

use super::endpoints::ConsoleApi;
use super::errors::ApiError;

impl From<ApiError> for GatewayError {
    fn from(err: ApiError) -> Self {
        match err.detail() {
            Some(detail) => Self::Rejected(detail.to_string()),
            None => Self::Unavailable(err.to_string()),
        }
    }
}

#[async_trait]
impl SettingsGateway for ConsoleApi {
    async fn update_profile(&self, update: &ProfileUpdate) -> Result<User, GatewayError> {
        Ok(Self::update_profile(self, update).await?)
    }

    async fn change_password(&self, old: &str, new: &str) -> Result<(), GatewayError> {
        Self::change_password(self, old, new).await?;
        Ok(())
    }

    async fn fetch_notification_settings(&self) -> Result<NotificationSettings, GatewayError> {
        Ok(Self::notification_settings(self).await?)
    }

    async fn update_notification_settings(
        &self,
        update: &NotificationSettingsUpdate,
    ) -> Result<NotificationSettings, GatewayError> {
        Ok(Self::update_notification_settings(self, update).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_rejection_with_detail_becomes_rejected() {
        let err = ApiError::Client { status: 400, detail: Some("Email already in use".to_string()) };
        assert_eq!(
            GatewayError::from(err),
            GatewayError::Rejected("Email already in use".to_string())
        );
    }

    #[test]
    fn detail_free_failures_become_unavailable() {
        let err = ApiError::Server { status: 502, detail: None };
        assert!(matches!(GatewayError::from(err), GatewayError::Unavailable(_)));

        let err = ApiError::Network("connection refused".to_string());
        assert!(matches!(GatewayError::from(err), GatewayError::Unavailable(_)));

        let err = ApiError::Decode("expected value at line 1".to_string());
        assert!(matches!(GatewayError::from(err), GatewayError::Unavailable(_)));
    }
}
