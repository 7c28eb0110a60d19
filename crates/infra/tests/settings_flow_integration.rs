//! End-to-end settings flow: the core controller driving the real gateway
//! against a mocked backend.

use std::sync::Arc;

use vigil_core::{MessageKind, SettingsService, SettingsTab};
use vigil_domain::{NotificationSettingsUpdate, User};
use vigil_infra::{ApiClient, ApiClientConfig, ConsoleApi, SessionContext};
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn user_json() -> serde_json::Value {
    serde_json::json!({
        "id": "3f2b6a1e-9d4c-4f0a-8b7e-2a1c3d4e5f60",
        "email": "analyst@example.com",
        "username": "analyst",
        "first_name": "Ada",
        "last_name": "Lovelace",
        "is_active": true,
        "is_verified": true,
        "created_at": "2024-05-01T12:00:00Z",
        "last_login": null
    })
}

fn settings_json(email_enabled: bool) -> serde_json::Value {
    serde_json::json!({
        "id": "11111111-2222-3333-4444-555555555555",
        "email_enabled": email_enabled,
        "email_address": "analyst@example.com",
        "webhook_enabled": false,
        "webhook_url": null,
        "notify_on_critical": true,
        "notify_on_high": true,
        "notify_on_medium": false,
        "notify_on_low": false,
        "quiet_hours_enabled": false,
        "quiet_hours_start": 22,
        "quiet_hours_end": 8
    })
}

fn controller_for(server: &MockServer, session: SessionContext) -> SettingsService {
    let config = ApiClientConfig { base_url: server.uri() };
    let client = Arc::new(ApiClient::new(config, Arc::new(session)));
    SettingsService::new(Arc::new(ConsoleApi::new(client)))
}

#[tokio::test]
async fn profile_edit_round_trip_carries_bearer_token() {
    let mock_server = MockServer::start().await;

    let mut updated = user_json();
    updated["first_name"] = serde_json::json!("Augusta");
    Mock::given(method("PATCH"))
        .and(path("/api/users/me"))
        .and(header("Authorization", "Bearer session-jwt"))
        .and(body_json(serde_json::json!({
            "first_name": "Augusta",
            "last_name": "Lovelace",
            "email": "analyst@example.com"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(updated))
        .mount(&mock_server)
        .await;

    let mut controller =
        controller_for(&mock_server, SessionContext::with_token("session-jwt"));
    let user: User = serde_json::from_value(user_json()).unwrap();
    controller.seed_profile(&user);
    controller.profile_mut().first_name = "Augusta".to_string();

    controller.submit_profile().await;

    let banner = controller.message().expect("banner after submit");
    assert_eq!(banner.kind, MessageKind::Success);
    assert_eq!(banner.text, "Profile updated successfully");
    assert_eq!(controller.profile().first_name, "Augusta");
}

#[tokio::test]
async fn rejected_profile_edit_surfaces_backend_detail() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PATCH"))
        .and(path("/api/users/me"))
        .respond_with(
            ResponseTemplate::new(400)
                .set_body_json(serde_json::json!({"detail": "Email already in use"})),
        )
        .mount(&mock_server)
        .await;

    let mut controller = controller_for(&mock_server, SessionContext::new());
    let user: User = serde_json::from_value(user_json()).unwrap();
    controller.seed_profile(&user);
    controller.profile_mut().email = "taken@example.com".to_string();

    controller.submit_profile().await;

    let banner = controller.message().expect("banner after submit");
    assert_eq!(banner.kind, MessageKind::Error);
    assert_eq!(banner.text, "Email already in use");
}

#[tokio::test]
async fn invalid_password_never_reaches_the_network() {
    let mock_server = MockServer::start().await;
    // No mock mounted: any request would 404 and show as a wrong banner

    let mut controller = controller_for(&mock_server, SessionContext::new());
    controller.select_tab(SettingsTab::Password);
    controller.password_mut().old_password = "x".to_string();
    controller.password_mut().new_password = "short".to_string();
    controller.password_mut().confirm_password = "short".to_string();

    controller.submit_password_change().await;

    let banner = controller.message().expect("banner after submit");
    assert_eq!(banner.text, "Password must be at least 8 characters long");
    assert!(mock_server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn notification_toggle_is_one_patch_round_trip() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/notifications/settings"))
        .respond_with(ResponseTemplate::new(200).set_body_json(settings_json(false)))
        .mount(&mock_server)
        .await;

    Mock::given(method("PATCH"))
        .and(path("/api/notifications/settings"))
        .and(body_json(serde_json::json!({"email_enabled": true})))
        .respond_with(ResponseTemplate::new(200).set_body_json(settings_json(true)))
        .mount(&mock_server)
        .await;

    let mut controller = controller_for(&mock_server, SessionContext::new());
    controller.select_tab(SettingsTab::Notifications);
    controller.load_notifications().await;
    assert!(!controller.email_address_visible());

    controller
        .update_notifications(NotificationSettingsUpdate {
            email_enabled: Some(true),
            ..Default::default()
        })
        .await;

    // Displayed record equals the server's returned payload, and the
    // dependent input becomes visible
    assert!(controller.email_address_visible());
    assert_eq!(
        controller.message().expect("banner after toggle").text,
        "Notification settings updated successfully"
    );

    let requests = mock_server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 2);
}
