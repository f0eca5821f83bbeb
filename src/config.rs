//! Client settings loaded from YAML and the environment
//!
//! ```yaml
//! api_key: "..."
//! base_url: "https://the-one-api.dev/v2"
//! timeout_seconds: 10
//! max_retries: 3
//! retry_backoff:
//!   type: exponential
//!   initial_ms: 1000
//!   max_ms: 60000
//! ```
//!
//! Every field is optional in the file. Environment variables override the
//! file, and [`ClientSettings::validate`] runs before a client is built.

use crate::client::{OneApiClientBuilder, DEFAULT_BASE_URL, DEFAULT_MAX_RETRIES};
use crate::error::{Error, Result};
use crate::http::{backoff, BackoffFn};
use crate::types::BackoffType;
use crate::OneApiClient;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Environment variable holding the API key
pub const ENV_API_KEY: &str = "LOTR_API_KEY";
/// Environment variable overriding the base URL
pub const ENV_BASE_URL: &str = "LOTR_BASE_URL";
/// Environment variable overriding the request timeout, in seconds
pub const ENV_TIMEOUT_SECONDS: &str = "LOTR_TIMEOUT_SECONDS";
/// Environment variable overriding the retry budget
pub const ENV_MAX_RETRIES: &str = "LOTR_MAX_RETRIES";

/// Placeholder shipped in sample config files
const API_KEY_PLACEHOLDER: &str = "YOUR_API_KEY_HERE";

// ============================================================================
// Client Settings
// ============================================================================

/// Everything needed to build a [`OneApiClient`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientSettings {
    /// API key sent as a bearer token
    #[serde(default)]
    pub api_key: Option<String>,

    /// API root
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Per-request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,

    /// Retries on HTTP 429
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,

    /// Wait between retries
    #[serde(default)]
    pub retry_backoff: BackoffConfig,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_base_url(),
            timeout_seconds: default_timeout(),
            max_retries: default_max_retries(),
            retry_backoff: BackoffConfig::default(),
        }
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout() -> u64 {
    10
}

fn default_max_retries() -> u32 {
    DEFAULT_MAX_RETRIES
}

impl ClientSettings {
    /// Parse settings from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Read settings from a YAML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    /// Apply overrides from the process environment
    pub fn apply_env(&mut self) -> Result<()> {
        self.apply_env_from(|name| std::env::var(name).ok())
    }

    /// Apply overrides from an arbitrary variable lookup
    ///
    /// Unset or blank variables leave the current value alone.
    pub fn apply_env_from<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        if let Some(key) = get(ENV_API_KEY) {
            self.api_key = Some(key.trim().to_string());
        }
        if let Some(url) = get(ENV_BASE_URL) {
            self.base_url = url;
        }
        if let Some(raw) = get(ENV_TIMEOUT_SECONDS) {
            self.timeout_seconds = parse_env(ENV_TIMEOUT_SECONDS, &raw)?;
        }
        if let Some(raw) = get(ENV_MAX_RETRIES) {
            self.max_retries = parse_env(ENV_MAX_RETRIES, &raw)?;
        }
        Ok(())
    }

    /// Check that the settings can produce a working client
    pub fn validate(&self) -> Result<()> {
        let key = self
            .api_key
            .as_deref()
            .map(str::trim)
            .filter(|k| !k.is_empty())
            .ok_or_else(|| Error::missing_field("api_key"))?;

        if key == API_KEY_PLACEHOLDER {
            return Err(Error::config(format!(
                "api_key is still the placeholder; set it or export {ENV_API_KEY}"
            )));
        }
        if self.timeout_seconds == 0 {
            return Err(Error::config("timeout_seconds must be greater than zero"));
        }
        if self.retry_backoff.initial_ms > self.retry_backoff.max_ms {
            return Err(Error::config(
                "retry_backoff.initial_ms must not exceed retry_backoff.max_ms",
            ));
        }
        Ok(())
    }

    /// Per-request timeout
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }

    /// Validate and turn the settings into a client builder
    pub fn into_builder(self) -> Result<OneApiClientBuilder> {
        self.validate()?;

        let mut builder = OneApiClient::builder()
            .base_url(self.base_url.as_str())
            .timeout(self.timeout())
            .max_retries(self.max_retries)
            .retry_backoff_fn(self.retry_backoff.to_backoff());
        if let Some(key) = self.api_key {
            builder = builder.api_key(key.trim());
        }
        Ok(builder)
    }
}

fn parse_env<T: std::str::FromStr>(name: &str, raw: &str) -> Result<T> {
    raw.trim()
        .parse()
        .map_err(|_| Error::config(format!("{name} must be a non-negative integer, got '{raw}'")))
}

// ============================================================================
// Backoff Config
// ============================================================================

/// Backoff configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackoffConfig {
    /// Type of backoff
    #[serde(rename = "type", default)]
    pub backoff_type: BackoffType,

    /// Delay before the first retry, in milliseconds
    #[serde(default = "default_initial_ms")]
    pub initial_ms: u64,

    /// Upper bound on any single delay, in milliseconds
    #[serde(default = "default_max_ms")]
    pub max_ms: u64,
}

impl Default for BackoffConfig {
    fn default() -> Self {
        Self {
            backoff_type: BackoffType::Exponential,
            initial_ms: default_initial_ms(),
            max_ms: default_max_ms(),
        }
    }
}

fn default_initial_ms() -> u64 {
    1000
}

fn default_max_ms() -> u64 {
    60000
}

impl BackoffConfig {
    /// Build the backoff function these settings describe
    pub fn to_backoff(&self) -> BackoffFn {
        backoff(
            self.backoff_type,
            Duration::from_millis(self.initial_ms),
            Duration::from_millis(self.max_ms),
        )
    }
}
