//! Example: driving the settings controller against a live backend
//!
//! Logs in, edits the profile, and toggles a notification preference.
//!
//! # Setup
//!
//! 1. Start the console backend (default `http://localhost:8000`), or point
//!    the client elsewhere: ```bash export
//!    VIGIL_API_BASE_URL=https://soc.example.com ```
//!
//! 2. Provide credentials: ```bash export VIGIL_DEMO_EMAIL=you@example.com
//!    export VIGIL_DEMO_PASSWORD=... ```
//!
//! 3. Run this example: ```bash RUST_LOG=info cargo run --example
//!    settings_flow ```

use std::sync::Arc;

use anyhow::Context;
use vigil_core::SettingsService;
use vigil_infra::{ApiClient, ApiClientConfig, ConsoleApi, SessionContext};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config = vigil_infra::config::load().context("failed to load configuration")?;
    println!("Vigil Settings Flow Example");
    println!("===========================");
    println!("backend: {}\n", config.api.base_url);

    let email = std::env::var("VIGIL_DEMO_EMAIL").context("VIGIL_DEMO_EMAIL not set")?;
    let password =
        std::env::var("VIGIL_DEMO_PASSWORD").context("VIGIL_DEMO_PASSWORD not set")?;

    let session = SessionContext::new();
    let client = Arc::new(ApiClient::new(
        ApiClientConfig::from(&config.api),
        Arc::new(session.clone()),
    ));
    let api = Arc::new(ConsoleApi::new(client));

    // Sign in and store the token; every later call carries it
    let token = api.login(&email, &password).await.context("login failed")?;
    session.set_token(Some(token.access_token)).await;
    println!("signed in as {}", token.user.username);

    let user = api.current_user().await.context("failed to fetch user")?;

    let mut controller = SettingsService::new(api.clone());
    controller.seed_profile(&user);
    controller.load_notifications().await;

    // Profile edit: trim whitespace the way the form would
    let trimmed = controller.profile().first_name.trim().to_string();
    controller.profile_mut().first_name = trimmed;
    controller.submit_profile().await;
    if let Some(banner) = controller.message() {
        println!("profile: {}", banner.text);
    }

    // Toggle critical-alert notifications off and back on
    if let Some(settings) = controller.notifications() {
        let was_on = settings.notify_on_critical;
        controller
            .update_notifications(vigil_domain::NotificationSettingsUpdate {
                notify_on_critical: Some(!was_on),
                ..Default::default()
            })
            .await;
        if let Some(banner) = controller.message() {
            println!("notifications: {}", banner.text);
        }
        controller
            .update_notifications(vigil_domain::NotificationSettingsUpdate {
                notify_on_critical: Some(was_on),
                ..Default::default()
            })
            .await;
    } else {
        println!("notification settings unavailable, skipping toggle");
    }

    // Sign out
    session.set_token(None).await;
    println!("signed out");

    Ok(())
}
