//! HTTP client for the console backend
//!
//! Translates typed calls into HTTP requests against a configurable base
//! URL, injecting a bearer token when the session holds one. Each verb
//! issues exactly one request: no retry, no backoff, no caching, no timeout.
//! Failures surface to the caller unchanged.

use std::sync::Arc;

use reqwest::{Method, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;
use vigil_domain::constants::DEFAULT_API_BASE_URL;
use vigil_domain::ApiConfig;

use super::errors::ApiError;
use super::session::AccessTokenProvider;

/// Configuration for the API client
#[derive(Debug, Clone)]
pub struct ApiClientConfig {
    /// Base URL for the backend (e.g., "http://localhost:8000")
    pub base_url: String,
}

impl Default for ApiClientConfig {
    fn default() -> Self {
        Self { base_url: DEFAULT_API_BASE_URL.to_string() }
    }
}

impl From<&ApiConfig> for ApiClientConfig {
    fn from(config: &ApiConfig) -> Self {
        Self { base_url: config.base_url.clone() }
    }
}

/// JSON-over-HTTP client with injected session state
pub struct ApiClient {
    http: reqwest::Client,
    config: ApiClientConfig,
    auth: Arc<dyn AccessTokenProvider>,
}

impl ApiClient {
    /// Create a new API client
    pub fn new(config: ApiClientConfig, auth: Arc<dyn AccessTokenProvider>) -> Self {
        Self { http: reqwest::Client::new(), config, auth }
    }

    /// Execute a GET request
    ///
    /// # Errors
    ///
    /// Returns error if the request fails, the backend responds non-2xx, or
    /// the response body cannot be decoded
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let request = self.request(Method::GET, path).await;
        self.dispatch(path, request).await
    }

    /// Execute a GET request with serialized query parameters
    ///
    /// Optional fields of `query` that are unset are not sent.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails, the backend responds non-2xx, or
    /// the response body cannot be decoded
    pub async fn get_query<Q: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        query: &Q,
    ) -> Result<T, ApiError> {
        let request = self.request(Method::GET, path).await.query(query);
        self.dispatch(path, request).await
    }

    /// Execute a POST request with a JSON body
    ///
    /// # Errors
    ///
    /// Returns error if the request fails, the backend responds non-2xx, or
    /// the response body cannot be decoded
    pub async fn post<B: Serialize, R: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<R, ApiError> {
        let request = self.request(Method::POST, path).await.json(body);
        self.dispatch(path, request).await
    }

    /// Execute a PATCH request with a JSON body
    ///
    /// # Errors
    ///
    /// Returns error if the request fails, the backend responds non-2xx, or
    /// the response body cannot be decoded
    pub async fn patch<B: Serialize, R: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<R, ApiError> {
        let request = self.request(Method::PATCH, path).await.json(body);
        self.dispatch(path, request).await
    }

    /// Build a request, attaching the bearer token when the session has one
    ///
    /// The token is read per request, so `SessionContext::set_token` affects
    /// every subsequent call but never one already dispatched.
    async fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.config.base_url, path);
        let mut request = self.http.request(method, &url);
        if let Some(token) = self.auth.access_token().await {
            request = request.bearer_auth(token);
        }
        request
    }

    async fn dispatch<T: DeserializeOwned>(
        &self,
        path: &str,
        request: RequestBuilder,
    ) -> Result<T, ApiError> {
        let response =
            request.send().await.map_err(|e| ApiError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(Self::map_status_error(status, response).await);
        }

        let body: T =
            response.json().await.map_err(|e| ApiError::Decode(e.to_string()))?;

        debug!(path = %path, status = status.as_u16(), "request completed");
        Ok(body)
    }

    /// Classify a non-2xx response, preserving the backend's `detail`
    /// message when the body carried one
    async fn map_status_error(status: StatusCode, response: Response) -> ApiError {
        let body = response.text().await.unwrap_or_default();
        let detail = extract_detail(&body);
        let code = status.as_u16();

        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            ApiError::Auth { status: code, detail }
        } else if status.is_server_error() {
            ApiError::Server { status: code, detail }
        } else {
            ApiError::Client { status: code, detail }
        }
    }
}

/// Pull the `detail` string out of a `{"detail": ...}` error body
fn extract_detail(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    value.get("detail")?.as_str().map(ToString::to_string)
}
