//! Notification settings types
//!
//! Per-user singleton: fetched once per settings-surface mount and mutated
//! via partial updates that return the full updated record.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Severity;

/// Per-user notification preferences
///
/// Quiet hours are 0-23; a window with start > end spans midnight (the
/// backend suppresses delivery inside the window).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NotificationSettings {
    pub id: Uuid,
    pub email_enabled: bool,
    pub email_address: Option<String>,
    pub webhook_enabled: bool,
    pub webhook_url: Option<String>,
    pub notify_on_critical: bool,
    pub notify_on_high: bool,
    pub notify_on_medium: bool,
    pub notify_on_low: bool,
    pub quiet_hours_enabled: bool,
    pub quiet_hours_start: u8,
    pub quiet_hours_end: u8,
}

impl NotificationSettings {
    /// Whether alerts of the given severity trigger a notification
    pub fn notifies_for(&self, severity: Severity) -> bool {
        match severity {
            Severity::Critical => self.notify_on_critical,
            Severity::High => self.notify_on_high,
            Severity::Medium => self.notify_on_medium,
            Severity::Low => self.notify_on_low,
        }
    }
}

impl Default for NotificationSettings {
    /// Mirrors the backend defaults for a freshly created settings row
    fn default() -> Self {
        Self {
            id: Uuid::nil(),
            email_enabled: true,
            email_address: None,
            webhook_enabled: false,
            webhook_url: None,
            notify_on_critical: true,
            notify_on_high: true,
            notify_on_medium: false,
            notify_on_low: false,
            quiet_hours_enabled: false,
            quiet_hours_start: 22,
            quiet_hours_end: 8,
        }
    }
}

/// Partial update for `PATCH /api/notifications/settings`
///
/// Every mutable field is optional and unset fields are omitted, matching
/// the backend's exclude-unset PATCH semantics.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct NotificationSettingsUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub webhook_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub webhook_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notify_on_critical: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notify_on_high: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notify_on_medium: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notify_on_low: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quiet_hours_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quiet_hours_start: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quiet_hours_end: Option<u8>,
}

impl NotificationSettingsUpdate {
    /// True when no field is set (the patch would be a no-op)
    pub fn is_empty(&self) -> bool {
        self.email_enabled.is_none()
            && self.email_address.is_none()
            && self.webhook_enabled.is_none()
            && self.webhook_url.is_none()
            && self.notify_on_critical.is_none()
            && self.notify_on_high.is_none()
            && self.notify_on_medium.is_none()
            && self.notify_on_low.is_none()
            && self.quiet_hours_enabled.is_none()
            && self.quiet_hours_start.is_none()
            && self.quiet_hours_end.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_mirror_backend_row_defaults() {
        let settings = NotificationSettings::default();
        assert!(settings.email_enabled);
        assert!(!settings.webhook_enabled);
        assert!(settings.notify_on_critical);
        assert!(settings.notify_on_high);
        assert!(!settings.notify_on_medium);
        assert!(!settings.notify_on_low);
        assert!(!settings.quiet_hours_enabled);
        assert_eq!(settings.quiet_hours_start, 22);
        assert_eq!(settings.quiet_hours_end, 8);
    }

    #[test]
    fn notifies_for_follows_severity_flags() {
        let settings = NotificationSettings::default();
        assert!(settings.notifies_for(Severity::Critical));
        assert!(settings.notifies_for(Severity::High));
        assert!(!settings.notifies_for(Severity::Medium));
        assert!(!settings.notifies_for(Severity::Low));
    }

    #[test]
    fn single_field_update_serializes_that_field_only() {
        let update =
            NotificationSettingsUpdate { email_enabled: Some(true), ..Default::default() };
        let json = serde_json::to_value(&update).unwrap();
        assert_eq!(json, serde_json::json!({"email_enabled": true}));
    }

    #[test]
    fn empty_update_is_detected() {
        assert!(NotificationSettingsUpdate::default().is_empty());
        let update =
            NotificationSettingsUpdate { quiet_hours_start: Some(23), ..Default::default() };
        assert!(!update.is_empty());
    }
}
