//! Session token state
//!
//! Authentication here is a nullable bearer token set by the caller at
//! login/logout. Instead of a module-global, the token lives in an injected
//! `SessionContext` so independent clients (and tests) can carry independent
//! sessions. Mutating the token never affects requests already dispatched.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

/// The HTTP layer's only view of authentication
///
/// `None` means send no `Authorization` header; `Some(t)` means send
/// `Bearer <t>` verbatim.
#[async_trait]
pub trait AccessTokenProvider: Send + Sync {
    /// The current access token, if signed in
    async fn access_token(&self) -> Option<String>;
}

/// Shared, mutable session state
///
/// Cloning shares the underlying token: a clone handed to the HTTP layer
/// observes later `set_token` calls.
#[derive(Clone, Default)]
pub struct SessionContext {
    token: Arc<RwLock<Option<String>>>,
}

impl SessionContext {
    /// A signed-out session
    pub fn new() -> Self {
        Self::default()
    }

    /// A session that starts with a token (e.g., restored from storage)
    pub fn with_token(token: impl Into<String>) -> Self {
        Self { token: Arc::new(RwLock::new(Some(token.into()))) }
    }

    /// Replace or clear the token (the login/logout setter)
    pub async fn set_token(&self, token: Option<String>) {
        debug!(signed_in = token.is_some(), "session token updated");
        *self.token.write().await = token;
    }

    /// The current token, if any
    pub async fn token(&self) -> Option<String> {
        self.token.read().await.clone()
    }

    /// Whether a token is currently held
    pub async fn is_authenticated(&self) -> bool {
        self.token.read().await.is_some()
    }
}

#[async_trait]
impl AccessTokenProvider for SessionContext {
    async fn access_token(&self) -> Option<String> {
        self.token().await
    }
}
