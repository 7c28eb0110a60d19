//! Configuration structures
//!
//! Deserialized from environment variables or config files by the loader in
//! `vigil-infra`. Every field carries a default so partial files parse.

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_API_BASE_URL;

/// Top-level client configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    /// Backend API settings
    #[serde(default)]
    pub api: ApiConfig,
}

/// Backend API settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ApiConfig {
    /// Base URL of the console backend (e.g., `http://localhost:8000`)
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self { base_url: default_base_url() }
    }
}

fn default_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}
