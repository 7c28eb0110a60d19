//! Configuration loader
//!
//! Loads client configuration from environment variables or files.
//!
//! ## Loading Strategy
//! 1. `.env` files are honored first (via dotenvy)
//! 2. Environment variables win when present
//! 3. Otherwise probes multiple paths for config files
//! 4. Otherwise falls back to compiled defaults
//!
//! ## Environment Variables
//! - `VIGIL_API_BASE_URL`: Base URL of the console backend
//!
//! ## File Locations
//! The loader probes the following paths (in order):
//! 1. `./vigil.toml`, `./vigil.json`, `./config.toml`, `./config.json`
//!    (current working directory)
//! 2. Parent directories (up to 2 levels)
//! 3. Relative to executable location

use std::path::{Path, PathBuf};

use vigil_domain::{ApiConfig, Config, Result, VigilError};

/// Load configuration with automatic fallback strategy
///
/// Environment variables win over files; if neither source is available the
/// compiled defaults apply (local backend on port 8000).
///
/// # Errors
/// Returns `VigilError::Config` if a config file was found but could not be
/// read or parsed.
pub fn load() -> Result<Config> {
    // Pick up .env before reading the environment
    dotenvy::dotenv().ok();

    if let Ok(config) = load_from_env() {
        tracing::info!("configuration loaded from environment variables");
        return Ok(config);
    }

    match probe_config_paths() {
        Some(path) => load_from_file(Some(path)),
        None => {
            tracing::info!("no configuration found, using compiled defaults");
            Ok(Config::default())
        }
    }
}

/// Load configuration from environment variables
///
/// # Errors
/// Returns `VigilError::Config` if `VIGIL_API_BASE_URL` is not set.
pub fn load_from_env() -> Result<Config> {
    let base_url = env_var("VIGIL_API_BASE_URL")?;
    Ok(Config { api: ApiConfig { base_url } })
}

/// Load configuration from a file
///
/// If `path` is `None`, probes multiple locations for config files.
/// Supports both JSON and TOML formats (detected by file extension).
///
/// # Errors
/// Returns `VigilError::Config` if:
/// - File not found (when path is specified)
/// - No config file found (when path is `None`)
/// - File format is invalid
pub fn load_from_file(path: Option<PathBuf>) -> Result<Config> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(VigilError::Config(format!(
                    "Config file not found: {}",
                    p.display()
                )));
            }
            p
        }
        None => probe_config_paths().ok_or_else(|| {
            VigilError::Config(
                "No config file found in any of the standard locations".to_string(),
            )
        })?,
    };

    tracing::info!(path = %config_path.display(), "loading configuration from file");

    let contents = std::fs::read_to_string(&config_path)
        .map_err(|e| VigilError::Config(format!("Failed to read config file: {e}")))?;

    parse_config(&contents, &config_path)
}

/// Parse configuration from string content
///
/// Format is detected by file extension (`.json` or `.toml`).
fn parse_config(contents: &str, path: &Path) -> Result<Config> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    match extension {
        "toml" => toml::from_str(contents)
            .map_err(|e| VigilError::Config(format!("Invalid TOML format: {e}"))),
        "json" => serde_json::from_str(contents)
            .map_err(|e| VigilError::Config(format!("Invalid JSON format: {e}"))),
        _ => Err(VigilError::Config(format!("Unsupported config format: {extension}"))),
    }
}

/// Probe multiple paths for configuration files
///
/// # Returns
/// The first config file found, or `None` if no file exists.
pub fn probe_config_paths() -> Option<PathBuf> {
    const NAMES: [&str; 4] = ["vigil.toml", "vigil.json", "config.toml", "config.json"];

    let mut candidates = Vec::new();

    if let Ok(cwd) = std::env::current_dir() {
        for prefix in ["", "../", "../../"] {
            candidates.extend(NAMES.iter().map(|name| cwd.join(format!("{prefix}{name}"))));
        }
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            candidates.extend(NAMES.iter().map(|name| exe_dir.join(name)));
        }
    }

    candidates.into_iter().find(|path| path.exists())
}

/// Get required environment variable
fn env_var(key: &str) -> Result<String> {
    std::env::var(key).map_err(|_| {
        VigilError::Config(format!("Missing required environment variable: {key}"))
    })
}

#[cfg(test)]
mod tests {
    use std::io::Write;
    use std::sync::Mutex;

    use once_cell::sync::Lazy;
    use tempfile::NamedTempFile;

    use super::*;

    static ENV_LOCK: Lazy<Mutex<()>> = Lazy::new(|| Mutex::new(()));

    #[test]
    fn test_load_from_env() {
        let _guard = ENV_LOCK.lock().expect("env mutex poisoned");

        std::env::set_var("VIGIL_API_BASE_URL", "https://soc.example.com");
        let config = load_from_env().expect("env config should load");
        assert_eq!(config.api.base_url, "https://soc.example.com");

        std::env::remove_var("VIGIL_API_BASE_URL");
        let result = load_from_env();
        assert!(matches!(result, Err(VigilError::Config(_))));
    }

    #[test]
    fn test_env_beats_file_and_default() {
        let _guard = ENV_LOCK.lock().expect("env mutex poisoned");

        std::env::set_var("VIGIL_API_BASE_URL", "https://env.example.com");
        let config = load().expect("load should succeed");
        assert_eq!(config.api.base_url, "https://env.example.com");
        std::env::remove_var("VIGIL_API_BASE_URL");
    }

    #[test]
    fn test_load_from_file_toml() {
        let toml_content = r#"
[api]
base_url = "https://file.example.com"
"#;

        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(toml_content.as_bytes()).unwrap();
        let path = temp_file.path().with_extension("toml");
        std::fs::copy(temp_file.path(), &path).unwrap();

        let config = load_from_file(Some(path.clone())).expect("TOML config should load");
        assert_eq!(config.api.base_url, "https://file.example.com");

        std::fs::remove_file(path).ok();
    }

    #[test]
    fn test_load_from_file_json() {
        let json_content = r#"{"api": {"base_url": "https://json.example.com"}}"#;

        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(json_content.as_bytes()).unwrap();
        let path = temp_file.path().with_extension("json");
        std::fs::copy(temp_file.path(), &path).unwrap();

        let config = load_from_file(Some(path.clone())).expect("JSON config should load");
        assert_eq!(config.api.base_url, "https://json.example.com");

        std::fs::remove_file(path).ok();
    }

    #[test]
    fn test_partial_file_falls_back_to_defaults() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(b"{}").unwrap();
        let path = temp_file.path().with_extension("json");
        std::fs::copy(temp_file.path(), &path).unwrap();

        let config = load_from_file(Some(path.clone())).expect("empty config should load");
        assert_eq!(config.api.base_url, "http://localhost:8000");

        std::fs::remove_file(path).ok();
    }

    #[test]
    fn test_load_from_file_not_found() {
        let result = load_from_file(Some(PathBuf::from("/nonexistent/vigil.json")));
        assert!(matches!(result, Err(VigilError::Config(_))));
    }

    #[test]
    fn test_load_from_file_invalid_toml() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(b"[api\nbase_url = ").unwrap();
        let path = temp_file.path().with_extension("toml");
        std::fs::copy(temp_file.path(), &path).unwrap();

        let result = load_from_file(Some(path.clone()));
        assert!(matches!(result, Err(VigilError::Config(_))));

        std::fs::remove_file(path).ok();
    }

    #[test]
    fn test_parse_config_unsupported_format() {
        let result = parse_config("api: {}", &PathBuf::from("vigil.yaml"));
        assert!(matches!(result, Err(VigilError::Config(_))));
    }
}
