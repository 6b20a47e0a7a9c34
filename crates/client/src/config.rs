use std::{env, time::Duration};

use industrias_core::auth::DEFAULT_LOGIN_PATH;
use industrias_core::retry::RetryPolicy;

/// Default backend base URL.
pub const DEFAULT_BASE_URL: &str = "http://localhost:3001";

/// Client configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Backend base URL (default: "http://localhost:3001")
    pub base_url: String,
    /// Per-attempt timeout in seconds (default: 10)
    pub timeout_secs: u64,
    /// Retries after the first attempt (default: 2)
    pub max_retries: u32,
    /// Linear backoff unit in milliseconds (default: 500)
    pub backoff_ms: u64,
    /// Login route used for session redirects (default: "/login")
    pub login_path: String,
}

impl ClientConfig {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `INDUSTRIAS_API_URL` - Backend base URL
    /// - `INDUSTRIAS_TIMEOUT_SECS` - Per-attempt timeout in seconds (0 is ignored)
    /// - `INDUSTRIAS_MAX_RETRIES` - Retries after the first attempt
    /// - `INDUSTRIAS_BACKOFF_MS` - Linear backoff unit in milliseconds
    /// - `INDUSTRIAS_LOGIN_PATH` - Login route
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = RetryPolicy::default();
        Self {
            base_url: lookup("INDUSTRIAS_API_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            timeout_secs: lookup("INDUSTRIAS_TIMEOUT_SECS")
                .and_then(|v| v.parse::<u64>().ok())
                .filter(|&secs| secs > 0)
                .unwrap_or(defaults.timeout.as_secs()),
            max_retries: lookup("INDUSTRIAS_MAX_RETRIES")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.max_retries),
            backoff_ms: lookup("INDUSTRIAS_BACKOFF_MS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.backoff_unit.as_millis() as u64),
            login_path: lookup("INDUSTRIAS_LOGIN_PATH")
                .unwrap_or_else(|| DEFAULT_LOGIN_PATH.to_string()),
        }
    }

    /// Override the base URL.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Retry policy described by this configuration.
    pub fn retry_policy(&self) -> RetryPolicy {
        RetryPolicy {
            timeout: Duration::from_secs(self.timeout_secs),
            max_retries: self.max_retries,
            backoff_unit: Duration::from_millis(self.backoff_ms),
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_default_values() {
        let config = ClientConfig::from_lookup(|_| None);

        assert_eq!(config.base_url, "http://localhost:3001");
        assert_eq!(config.timeout_secs, 10);
        assert_eq!(config.max_retries, 2);
        assert_eq!(config.backoff_ms, 500);
        assert_eq!(config.login_path, "/login");
        assert_eq!(config.retry_policy(), RetryPolicy::default());
    }

    #[test]
    fn test_values_from_lookup() {
        let vars: HashMap<&str, &str> = HashMap::from([
            ("INDUSTRIAS_API_URL", "https://api.industrias-sp.example"),
            ("INDUSTRIAS_TIMEOUT_SECS", "3"),
            ("INDUSTRIAS_MAX_RETRIES", "0"),
            ("INDUSTRIAS_BACKOFF_MS", "50"),
            ("INDUSTRIAS_LOGIN_PATH", "/admin/login"),
        ]);
        let config = ClientConfig::from_lookup(|key| vars.get(key).map(|v| v.to_string()));

        assert_eq!(config.base_url, "https://api.industrias-sp.example");
        assert_eq!(config.login_path, "/admin/login");

        let policy = config.retry_policy();
        assert_eq!(policy.timeout, Duration::from_secs(3));
        assert_eq!(policy.max_attempts(), 1);
        assert_eq!(policy.backoff_unit, Duration::from_millis(50));
    }

    #[test]
    fn test_unparsable_numbers_fall_back() {
        let config = ClientConfig::from_lookup(|key| {
            (key == "INDUSTRIAS_MAX_RETRIES").then(|| "many".to_string())
        });
        assert_eq!(config.max_retries, 2);
    }

    #[test]
    fn test_zero_timeout_falls_back() {
        let config = ClientConfig::from_lookup(|key| {
            (key == "INDUSTRIAS_TIMEOUT_SECS").then(|| "0".to_string())
        });
        assert_eq!(config.timeout_secs, 10);
        assert_eq!(config.retry_policy().timeout, Duration::from_secs(10));
    }
}
