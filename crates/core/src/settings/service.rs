//! Settings controller - core business logic
//!
//! Framework-agnostic state machine behind the settings surface. A rendering
//! layer drives it from user events and re-renders from the accessors. The
//! `&mut self` receivers make overlapping submissions structurally
//! impossible within one controller, matching the single-threaded
//! event-driven model of the surface.

use std::sync::Arc;

use tracing::{debug, warn};
use vigil_domain::{NotificationSettings, NotificationSettingsUpdate, User};

use super::forms::{PasswordForm, ProfileForm, SettingsTab, StatusMessage};
use super::ports::SettingsGateway;

/// Settings-surface controller
pub struct SettingsService {
    gateway: Arc<dyn SettingsGateway>,
    active_tab: SettingsTab,
    is_loading: bool,
    message: Option<StatusMessage>,
    profile: ProfileForm,
    password: PasswordForm,
    notifications: Option<NotificationSettings>,
}

impl SettingsService {
    /// Create a controller in its mount state (profile tab, nothing loaded)
    pub fn new(gateway: Arc<dyn SettingsGateway>) -> Self {
        Self {
            gateway,
            active_tab: SettingsTab::default(),
            is_loading: false,
            message: None,
            profile: ProfileForm::default(),
            password: PasswordForm::default(),
            notifications: None,
        }
    }

    /// Reseed the profile form from the authenticated user
    ///
    /// Called on mount and whenever the auth context swaps users.
    pub fn seed_profile(&mut self, user: &User) {
        self.profile = ProfileForm::from_user(user);
    }

    /// Fetch the notification settings record, once per mount
    ///
    /// Failure is logged but shows no banner; the notifications tab simply
    /// stays in its not-loaded state.
    pub async fn load_notifications(&mut self) {
        match self.gateway.fetch_notification_settings().await {
            Ok(settings) => {
                debug!("notification settings loaded");
                self.notifications = Some(settings);
            }
            Err(err) => {
                warn!(error = %err, "failed to load notification settings");
            }
        }
    }

    /// Switch tabs; banner and loading state are untouched
    pub fn select_tab(&mut self, tab: SettingsTab) {
        self.active_tab = tab;
    }

    /// Submit the profile form
    ///
    /// Sends exactly first name, last name, and email. On success the form
    /// is replaced from the record the backend returns, so server-normalized
    /// values win over what was typed.
    pub async fn submit_profile(&mut self) {
        self.is_loading = true;
        self.message = None;

        match self.gateway.update_profile(&self.profile.to_update()).await {
            Ok(user) => {
                self.profile = ProfileForm::from_user(&user);
                self.message = Some(StatusMessage::success("Profile updated successfully"));
            }
            Err(err) => {
                warn!(error = %err, "profile update failed");
                let text = err.detail().unwrap_or("Failed to update profile").to_string();
                self.message = Some(StatusMessage::error(text));
            }
        }

        self.is_loading = false;
    }

    /// Submit the password form
    ///
    /// Client-side validation short-circuits before any gateway call. On
    /// success all three fields are cleared; on failure they are preserved
    /// for correction.
    pub async fn submit_password_change(&mut self) {
        self.is_loading = true;
        self.message = None;

        if let Err(violation) = self.password.validate() {
            self.message = Some(StatusMessage::error(violation));
            self.is_loading = false;
            return;
        }

        let result = self
            .gateway
            .change_password(&self.password.old_password, &self.password.new_password)
            .await;

        match result {
            Ok(()) => {
                self.password.clear();
                self.message = Some(StatusMessage::success("Password changed successfully"));
            }
            Err(err) => {
                warn!(error = %err, "password change failed");
                let text = err.detail().unwrap_or("Failed to change password").to_string();
                self.message = Some(StatusMessage::error(text));
            }
        }

        self.is_loading = false;
    }

    /// Apply a notification-settings patch
    ///
    /// Every toggle is its own immediate round trip. On success the local
    /// record is replaced wholesale by what the backend returns - never a
    /// locally merged guess. A silent no-op until `load_notifications` has
    /// succeeded.
    pub async fn update_notifications(&mut self, patch: NotificationSettingsUpdate) {
        if self.notifications.is_none() {
            return;
        }

        self.is_loading = true;
        self.message = None;

        match self.gateway.update_notification_settings(&patch).await {
            Ok(settings) => {
                self.notifications = Some(settings);
                self.message =
                    Some(StatusMessage::success("Notification settings updated successfully"));
            }
            Err(err) => {
                warn!(error = %err, "notification settings update failed");
                let text = err.detail().unwrap_or("Failed to update settings").to_string();
                self.message = Some(StatusMessage::error(text));
            }
        }

        self.is_loading = false;
    }

    // === Read accessors for the rendering layer ===

    pub fn active_tab(&self) -> SettingsTab {
        self.active_tab
    }

    /// Whether a request is in flight (the disabled-button affordance)
    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn message(&self) -> Option<&StatusMessage> {
        self.message.as_ref()
    }

    pub fn profile(&self) -> &ProfileForm {
        &self.profile
    }

    pub fn profile_mut(&mut self) -> &mut ProfileForm {
        &mut self.profile
    }

    pub fn password(&self) -> &PasswordForm {
        &self.password
    }

    pub fn password_mut(&mut self) -> &mut PasswordForm {
        &mut self.password
    }

    pub fn notifications(&self) -> Option<&NotificationSettings> {
        self.notifications.as_ref()
    }

    pub fn notifications_loaded(&self) -> bool {
        self.notifications.is_some()
    }

    /// Whether the email-address input is shown
    pub fn email_address_visible(&self) -> bool {
        self.notifications.as_ref().is_some_and(|s| s.email_enabled)
    }

    /// Whether the webhook-URL input is shown
    pub fn webhook_url_visible(&self) -> bool {
        self.notifications.as_ref().is_some_and(|s| s.webhook_enabled)
    }
}
