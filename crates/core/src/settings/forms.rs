//! Form state for the settings surface
//!
//! Local editable copies of backend data plus the client-side validation
//! that runs before any network call.

use serde::{Deserialize, Serialize};
use vigil_domain::constants::MIN_PASSWORD_LENGTH;
use vigil_domain::{ProfileUpdate, User};

/// The three mutually exclusive settings tabs
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SettingsTab {
    #[default]
    Profile,
    Notifications,
    Password,
}

/// Editable profile fields, seeded from the authenticated user
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProfileForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

impl ProfileForm {
    /// Seed the form from a user record; missing names become empty strings
    pub fn from_user(user: &User) -> Self {
        Self {
            first_name: user.first_name.clone().unwrap_or_default(),
            last_name: user.last_name.clone().unwrap_or_default(),
            email: user.email.clone(),
        }
    }

    /// The submit payload: always exactly these three fields
    pub fn to_update(&self) -> ProfileUpdate {
        ProfileUpdate {
            first_name: Some(self.first_name.clone()),
            last_name: Some(self.last_name.clone()),
            email: Some(self.email.clone()),
        }
    }
}

/// Password change fields
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct PasswordForm {
    pub old_password: String,
    pub new_password: String,
    pub confirm_password: String,
}

impl PasswordForm {
    /// Client-side validation, checked before any network call
    ///
    /// Mismatch is reported before length so a short, mismatched pair shows
    /// the mismatch message.
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.new_password != self.confirm_password {
            return Err("Passwords do not match");
        }
        if self.new_password.len() < MIN_PASSWORD_LENGTH {
            return Err("Password must be at least 8 characters long");
        }
        Ok(())
    }

    /// Wipe all three fields (after a successful change)
    pub fn clear(&mut self) {
        self.old_password.clear();
        self.new_password.clear();
        self.confirm_password.clear();
    }
}

/// Banner severity
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum MessageKind {
    Success,
    Error,
}

/// Transient outcome banner shown after each action
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StatusMessage {
    pub kind: MessageKind,
    pub text: String,
}

impl StatusMessage {
    pub fn success(text: impl Into<String>) -> Self {
        Self { kind: MessageKind::Success, text: text.into() }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self { kind: MessageKind::Error, text: text.into() }
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use uuid::Uuid;

    use super::*;

    fn sample_user() -> User {
        User {
            id: Uuid::new_v4(),
            email: "analyst@example.com".to_string(),
            username: "analyst".to_string(),
            first_name: None,
            last_name: Some("Lovelace".to_string()),
            is_active: true,
            is_verified: true,
            created_at: Utc::now(),
            updated_at: None,
            last_login: None,
        }
    }

    #[test]
    fn profile_form_seeds_missing_names_as_empty() {
        let form = ProfileForm::from_user(&sample_user());
        assert_eq!(form.first_name, "");
        assert_eq!(form.last_name, "Lovelace");
        assert_eq!(form.email, "analyst@example.com");
    }

    #[test]
    fn profile_update_always_sets_all_three_fields() {
        let form = ProfileForm::from_user(&sample_user());
        let update = form.to_update();
        assert_eq!(update.first_name.as_deref(), Some(""));
        assert_eq!(update.last_name.as_deref(), Some("Lovelace"));
        assert_eq!(update.email.as_deref(), Some("analyst@example.com"));
    }

    #[test]
    fn password_mismatch_reported_before_length() {
        let form = PasswordForm {
            old_password: "x".to_string(),
            new_password: "short".to_string(),
            confirm_password: "different".to_string(),
        };
        assert_eq!(form.validate(), Err("Passwords do not match"));
    }

    #[test]
    fn short_password_rejected() {
        let form = PasswordForm {
            old_password: "x".to_string(),
            new_password: "short".to_string(),
            confirm_password: "short".to_string(),
        };
        assert_eq!(form.validate(), Err("Password must be at least 8 characters long"));
    }

    #[test]
    fn valid_password_passes_and_clear_wipes_fields() {
        let mut form = PasswordForm {
            old_password: "old-secret".to_string(),
            new_password: "new-secret".to_string(),
            confirm_password: "new-secret".to_string(),
        };
        assert_eq!(form.validate(), Ok(()));

        form.clear();
        assert_eq!(form, PasswordForm::default());
    }
}
