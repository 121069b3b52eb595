//! Backend endpoint and local data directory configuration.

use std::path::PathBuf;

/// Backend host used when no override is configured.
pub const DEFAULT_BASE_URL: &str = "https://ai-travel-agent-d8wv.onrender.com";

/// Environment variable that overrides the backend base URL.
pub const BASE_URL_ENV: &str = "TRIPLEDGER_API_URL";

/// Planning backend endpoint configuration.
#[derive(Debug, Clone)]
pub struct BackendConfig {
    /// Base URL of the planning backend, without a trailing slash.
    pub base_url: String,
}

impl BackendConfig {
    /// Create a config with an explicit base URL.
    ///
    /// Trailing slashes are stripped so endpoint paths join cleanly.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self { base_url }
    }

    /// Read the base URL from the environment, falling back to the default
    /// remote host when unset or blank.
    #[must_use]
    pub fn from_env() -> Self {
        match std::env::var(BASE_URL_ENV) {
            Ok(url) if !url.trim().is_empty() => Self::new(url),
            _ => Self::new(DEFAULT_BASE_URL),
        }
    }

    /// Build a full endpoint URL from an absolute path.
    #[must_use]
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

/// Directory where `TripLedger` keeps its local state.
///
/// Resolves to the platform data directory, falling back to the current
/// directory when the platform offers none.
#[must_use]
pub fn data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("tripledger")
}
