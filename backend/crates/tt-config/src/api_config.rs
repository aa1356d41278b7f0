use crate::{ConfigError, ConfigErrorResult, DEFAULT_API_URL, MAX_TIMEOUT_SECS};

use std::time::Duration;

use serde::Deserialize;

/// Where the office API lives and how long to wait for it.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Base URL every request path is joined onto
    pub base_url: String,
    /// Per-request timeout. `None` waits for as long as the transport does.
    pub timeout_secs: Option<u64>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: String::from(DEFAULT_API_URL),
            timeout_secs: None,
        }
    }
}

impl ApiConfig {
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }

    pub fn validate(&self) -> ConfigErrorResult<()> {
        let base_url = self.base_url.trim();

        if base_url.is_empty() {
            return Err(ConfigError::api("api.base_url must not be empty"));
        }

        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(ConfigError::api(format!(
                "api.base_url must start with http:// or https:// (got {base_url})"
            )));
        }

        if let Some(secs) = self.timeout_secs
            && (secs == 0 || secs > MAX_TIMEOUT_SECS)
        {
            return Err(ConfigError::api(format!(
                "api.timeout_secs must be between 1 and {MAX_TIMEOUT_SECS}"
            )));
        }

        Ok(())
    }
}
