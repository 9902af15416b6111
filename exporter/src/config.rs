//! Configuration management via environment variables
//!
//! All settings are read once at startup. Integer settings that are unset or
//! fail to parse fall back to their defaults; only the API key is mandatory.

use crate::common::error::ConfigError;
use crate::pingdom::client::DEFAULT_API_BASE_URL;
use crate::poller::check_poller::DEFAULT_WAIT_SECS;
use std::time::Duration;

/// Polling interval in seconds
pub const ENV_WAIT_SECONDS: &str = "WAIT_SECONDS";
/// Listen port
pub const ENV_PORT: &str = "PORT";
/// Pingdom API token
pub const ENV_API_KEY: &str = "API_KEY";
/// Bind address
pub const ENV_HOST: &str = "HOST";
/// Pingdom API base URL override
pub const ENV_API_URL: &str = "PINGDOM_API_URL";
/// Deadline for a single check-list fetch (0 or unset disables it)
pub const ENV_FETCH_TIMEOUT_SECS: &str = "PINGDOM_FETCH_TIMEOUT_SECS";

/// Default listen port
pub const DEFAULT_PORT: u16 = 8000;
/// Default bind address
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Get an environment variable, treating an empty value as unset
///
/// # Example
/// ```
/// use pingdom_exporter::config::get_env;
///
/// let key = get_env("API_KEY");
/// ```
pub fn get_env(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.is_empty())
}

/// Get an environment variable with a default value
pub fn get_env_or(name: &str, default: &str) -> String {
    get_env(name).unwrap_or_else(|| default.to_string())
}

/// Get an environment variable parsed to a specific type
///
/// Returns `default` if the variable is unset or parsing fails.
pub fn get_env_parse<T: std::str::FromStr>(name: &str, default: T) -> T {
    match get_env(name) {
        Some(raw) => match raw.trim().parse() {
            Ok(value) => value,
            Err(_) => {
                tracing::warn!(
                    variable = name,
                    value = %raw,
                    "Invalid environment variable value, using default"
                );
                default
            }
        },
        None => default,
    }
}

/// Exporter configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExporterConfig {
    /// Bind address
    pub host: String,
    /// Listen port
    pub port: u16,
    /// Delay between poll cycles
    pub wait_interval: Duration,
    /// Pingdom API token
    pub api_key: String,
    /// Pingdom API base URL
    pub api_base_url: String,
    /// Deadline for a single fetch, `None` for unbounded
    pub fetch_timeout: Option<Duration>,
}

impl ExporterConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_key = get_env(ENV_API_KEY).ok_or(ConfigError::MissingApiKey(ENV_API_KEY))?;

        let wait_secs = get_env_parse(ENV_WAIT_SECONDS, DEFAULT_WAIT_SECS);
        let timeout_secs = get_env_parse(ENV_FETCH_TIMEOUT_SECS, 0u64);

        Ok(Self {
            host: get_env_or(ENV_HOST, DEFAULT_HOST),
            port: get_env_parse(ENV_PORT, DEFAULT_PORT),
            wait_interval: Duration::from_secs(wait_secs),
            api_key,
            api_base_url: get_env_or(ENV_API_URL, DEFAULT_API_BASE_URL),
            fetch_timeout: (timeout_secs > 0).then(|| Duration::from_secs(timeout_secs)),
        })
    }

    /// Address the HTTP listener binds to
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
