//! Configuration management for the smoke runner.
//!
//! Configuration can be set via environment variables:
//! - `TASKBOARD_API_BASE` - Optional. Base URL of the API. Defaults to `http://localhost:5000/api`.
//! - `TASKBOARD_EMAIL` - Optional. Login email. Defaults to `test1234@test.com`.
//! - `TASKBOARD_PASSWORD` - Optional. Login password. Defaults to `Test@123`.
//! - `TASKBOARD_TIMEOUT_SECS` - Optional. Per-request timeout in seconds. Defaults to `30`.

use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}: {1}")]
    InvalidValue(String, String),
}

/// Smoke runner configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the Taskboard API, without a trailing slash
    pub api_base: String,

    /// Login email for the test account
    pub email: String,

    /// Login password for the test account
    pub password: String,

    /// Per-request timeout
    pub timeout: Duration,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if `TASKBOARD_TIMEOUT_SECS` is not a number.
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_base = std::env::var("TASKBOARD_API_BASE")
            .unwrap_or_else(|_| "http://localhost:5000/api".to_string());
        let api_base = api_base.trim_end_matches('/').to_string();

        let email =
            std::env::var("TASKBOARD_EMAIL").unwrap_or_else(|_| "test1234@test.com".to_string());

        let password =
            std::env::var("TASKBOARD_PASSWORD").unwrap_or_else(|_| "Test@123".to_string());

        let timeout = parse_timeout(
            &std::env::var("TASKBOARD_TIMEOUT_SECS").unwrap_or_else(|_| "30".to_string()),
        )?;

        Ok(Self {
            api_base,
            email,
            password,
            timeout,
        })
    }

    /// Create a config with custom values (useful for testing).
    pub fn new(api_base: String, email: String, password: String) -> Self {
        Self {
            api_base: api_base.trim_end_matches('/').to_string(),
            email,
            password,
            timeout: Duration::from_secs(30),
        }
    }
}

/// Parse the per-request timeout from its raw environment value.
fn parse_timeout(raw: &str) -> Result<Duration, ConfigError> {
    raw.parse::<u64>().map(Duration::from_secs).map_err(|e| {
        ConfigError::InvalidValue("TASKBOARD_TIMEOUT_SECS".to_string(), format!("{}", e))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_timeout_accepts_seconds() {
        assert_eq!(parse_timeout("45").unwrap(), Duration::from_secs(45));
    }

    #[test]
    fn parse_timeout_rejects_non_numeric() {
        let err = parse_timeout("soon").unwrap_err();
        match err {
            ConfigError::InvalidValue(name, _) => assert_eq!(name, "TASKBOARD_TIMEOUT_SECS"),
        }
    }

    #[test]
    fn from_env_falls_back_to_defaults() {
        // The only test that touches the process environment; the other
        // config tests go through `Config::new` or pure helpers.
        std::env::remove_var("TASKBOARD_API_BASE");
        std::env::remove_var("TASKBOARD_EMAIL");
        std::env::remove_var("TASKBOARD_PASSWORD");
        std::env::remove_var("TASKBOARD_TIMEOUT_SECS");

        let config = Config::from_env().unwrap();
        assert_eq!(config.api_base, "http://localhost:5000/api");
        assert_eq!(config.email, "test1234@test.com");
        assert_eq!(config.password, "Test@123");
        assert_eq!(config.timeout, Duration::from_secs(30));
    }

    #[test]
    fn new_strips_trailing_slash() {
        let config = Config::new(
            "http://localhost:5000/api/".to_string(),
            "a@b.c".to_string(),
            "pw".to_string(),
        );
        assert_eq!(config.api_base, "http://localhost:5000/api");
    }

    #[test]
    fn new_keeps_base_without_slash() {
        let config = Config::new(
            "http://localhost:5000/api".to_string(),
            "a@b.c".to_string(),
            "pw".to_string(),
        );
        assert_eq!(config.api_base, "http://localhost:5000/api");
        assert_eq!(config.timeout, Duration::from_secs(30));
    }
}
