//! Runtime settings.
//!
//! Everything has a default; environment variables override them. The binary
//! loads a `.env` file into the environment at startup.
//!
//! | Variable                  | Default                                |
//! |---------------------------|----------------------------------------|
//! | `IPCA_SIDRA_BASE_URL`     | `https://apisidra.ibge.gov.br/values`  |
//! | `IPCA_HTTP_TIMEOUT_SECS`  | `60`                                   |

use std::env;
use std::time::Duration;

use crate::error::{ConfigError, ConfigResult};
use crate::sidra::DEFAULT_BASE_URL;

pub const ENV_SIDRA_BASE_URL: &str = "IPCA_SIDRA_BASE_URL";
pub const ENV_HTTP_TIMEOUT_SECS: &str = "IPCA_HTTP_TIMEOUT_SECS";

/// Upstream request timeout when none is configured.
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    /// SIDRA values endpoint.
    pub sidra_base_url: String,
    /// Timeout for the whole upstream request.
    pub http_timeout: Duration,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            sidra_base_url: DEFAULT_BASE_URL.to_string(),
            http_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl Settings {
    /// Load settings from the process environment.
    pub fn from_env() -> ConfigResult<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load settings from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> ConfigResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut settings = Self::default();

        if let Some(url) = lookup(ENV_SIDRA_BASE_URL) {
            let url = url.trim();
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                return Err(ConfigError::InvalidValue {
                    key: ENV_SIDRA_BASE_URL.to_string(),
                    value: url.to_string(),
                    message: "expected an http(s) URL".to_string(),
                });
            }
            settings.sidra_base_url = url.to_string();
        }

        if let Some(raw) = lookup(ENV_HTTP_TIMEOUT_SECS) {
            let secs = raw
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|s| *s > 0)
                .ok_or_else(|| ConfigError::InvalidValue {
                    key: ENV_HTTP_TIMEOUT_SECS.to_string(),
                    value: raw.clone(),
                    message: "expected a positive number of seconds".to_string(),
                })?;
            settings.http_timeout = Duration::from_secs(secs);
        }

        Ok(settings)
    }
}
