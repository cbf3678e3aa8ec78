//! Configuration management for the MorphoSource client.
//!
//! Configuration is read from environment variables, with `.env` support via
//! `dotenvy`. Every value has a default, so `from_env` only fails on values
//! that are present but invalid.

use crate::error::{ConfigError, ConfigResult};
use std::env;

/// Production MorphoSource host, used when no override is configured.
pub const DEFAULT_BASE_URL: &str = "https://www.morphosource.org";

/// Configuration for the MorphoSource client.
#[derive(Debug, Clone)]
pub struct Config {
    /// MorphoSource API base URL
    pub base_url: String,

    /// Bearer token for authentication, if configured
    pub api_token: Option<String>,

    /// HTTP request timeout in seconds (default: 10)
    pub request_timeout: u64,

    /// Log level (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Recognized environment variables:
    /// - `MORPHOSOURCE_API_URL`: Base URL (default: production host)
    /// - `MORPHOSOURCE_API_TOKEN`: Bearer token (default: absent)
    /// - `REQUEST_TIMEOUT`: HTTP timeout in seconds (default: 10)
    /// - `LOG_LEVEL`: Logging level (default: "error")
    ///
    /// A token that is set but blank is rejected rather than silently sent as
    /// a malformed Authorization header.
    pub fn from_env() -> ConfigResult<Self> {
        // Load .env if present; never fail when it is missing
        let _ = dotenvy::dotenv();

        let base_url =
            env::var("MORPHOSOURCE_API_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

        if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
            return Err(ConfigError::InvalidValue {
                var: "MORPHOSOURCE_API_URL".to_string(),
                reason: "Must start with http:// or https://".to_string(),
            });
        }

        let api_token = match env::var("MORPHOSOURCE_API_TOKEN") {
            Ok(token) if token.trim().is_empty() => {
                return Err(ConfigError::InvalidValue {
                    var: "MORPHOSOURCE_API_TOKEN".to_string(),
                    reason: "Cannot be blank; unset it to send unauthenticated requests"
                        .to_string(),
                });
            }
            Ok(token) => Some(token),
            Err(_) => None,
        };

        let request_timeout = Self::parse_env_u64("REQUEST_TIMEOUT", 10)?;
        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "error".to_string());

        Ok(Config {
            base_url,
            api_token,
            request_timeout,
            log_level,
        })
    }

    /// Parse an environment variable as u64 with a default value.
    fn parse_env_u64(var_name: &str, default: u64) -> ConfigResult<u64> {
        match env::var(var_name) {
            Ok(val) => val.parse::<u64>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_token: None,
            request_timeout: 10,
            log_level: "error".to_string(),
        }
    }
}
