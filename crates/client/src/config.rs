//! Client configuration.

use std::time::Duration;

/// Transport and timing configuration.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the REST API, including the version prefix.
    pub base_url: String,
    /// Hard deadline for every network request.
    pub timeout: Duration,
    /// Settle window for free-text search before a fetch fires.
    pub search_debounce: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000/api/v1".to_string(),
            timeout: Duration::from_secs(10),
            search_debounce: Duration::from_millis(400),
        }
    }
}

impl ClientConfig {
    /// Read configuration from the environment, falling back to defaults.
    ///
    /// `CIVIPORT_API_URL`, `CIVIPORT_TIMEOUT_SECS`,
    /// `CIVIPORT_SEARCH_DEBOUNCE_MS`.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(url) = std::env::var("CIVIPORT_API_URL") {
            if !url.is_empty() {
                config.base_url = url;
            }
        }
        if let Some(secs) = env_u64("CIVIPORT_TIMEOUT_SECS") {
            config.timeout = Duration::from_secs(secs);
        }
        if let Some(ms) = env_u64("CIVIPORT_SEARCH_DEBOUNCE_MS") {
            config.search_debounce = Duration::from_millis(ms);
        }
        config
    }
}

fn env_u64(key: &str) -> Option<u64> {
    let raw = std::env::var(key).ok()?;
    match raw.parse() {
        Ok(value) => Some(value),
        Err(_) => {
            tracing::warn!("ignoring unparseable {key}={raw}");
            None
        }
    }
}
