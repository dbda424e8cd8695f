//! Configuration management.
//!
//! All provider endpoints and credentials are supplied externally, via a
//! TOML file, environment variables prefixed `AUTHPULSE`, or both (the
//! environment wins).

use serde::Deserialize;
use std::time::Duration;

use crate::error::Result;
use crate::telemetry::LoggingConfig;

/// Main application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Identity provider configuration
    pub identity: IdentityConfig,

    /// Bulk runner configuration
    #[serde(default)]
    pub runner: RunnerConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Path to the authorization client descriptor JSON
    #[serde(default)]
    pub descriptor_path: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct IdentityConfig {
    /// Base URL of the identity provider, e.g. `https://login.example.com`
    pub server_url: String,

    /// Realm the user and client live in
    pub realm: String,

    /// OIDC client identifier used for the password grant
    pub client_id: String,

    /// Client secret for the password grant
    pub client_secret: String,

    /// Per-request connect/read timeout
    #[serde(with = "humantime_serde", default = "default_timeout")]
    pub timeout: Duration,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RunnerConfig {
    /// Iterations slower than this are logged as warnings
    #[serde(with = "humantime_serde", default = "default_slow_threshold")]
    pub slow_threshold: Duration,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            slow_threshold: default_slow_threshold(),
        }
    }
}

// Default value functions
fn default_timeout() -> Duration {
    Duration::from_secs(30)
}
fn default_slow_threshold() -> Duration {
    Duration::from_secs(5)
}

impl Config {
    /// Load configuration from the environment.
    pub fn load() -> Result<Self> {
        let config = config::Config::builder()
            .add_source(config::Environment::with_prefix("AUTHPULSE").separator("__"))
            .build()?;

        Ok(config.try_deserialize()?)
    }

    /// Load from a specific file path, with environment overrides on top.
    pub fn from_file(path: &str) -> Result<Self> {
        let config = config::Config::builder()
            .add_source(config::File::with_name(path))
            .add_source(config::Environment::with_prefix("AUTHPULSE").separator("__"))
            .build()?;

        Ok(config.try_deserialize()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_runner_defaults() {
        let runner = RunnerConfig::default();
        assert_eq!(runner.slow_threshold, Duration::from_secs(5));
    }

    #[test]
    fn test_deserialize_with_humantime_durations() {
        let config: Config = serde_json::from_value(serde_json::json!({
            "identity": {
                "server_url": "https://login.example.com",
                "realm": "acme",
                "client_id": "workbench",
                "client_secret": "s3cret",
                "timeout": "10s"
            },
            "runner": { "slow_threshold": "2s" }
        }))
        .unwrap();

        assert_eq!(config.identity.timeout, Duration::from_secs(10));
        assert_eq!(config.runner.slow_threshold, Duration::from_secs(2));
        assert!(config.descriptor_path.is_none());
    }

    #[test]
    fn test_timeout_defaults_when_omitted() {
        let config: Config = serde_json::from_value(serde_json::json!({
            "identity": {
                "server_url": "https://login.example.com",
                "realm": "acme",
                "client_id": "workbench",
                "client_secret": "s3cret"
            }
        }))
        .unwrap();

        assert_eq!(config.identity.timeout, Duration::from_secs(30));
        assert_eq!(config.runner.slow_threshold, Duration::from_secs(5));
    }
}
