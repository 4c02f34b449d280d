//! Process configuration.
//!
//! Built once at startup and shared read-only afterwards.

use std::{fmt, time::Duration};

use thiserror::Error;

pub const DEFAULT_API_BASE_URL: &str = "https://api.github.com";
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing required environment variable {0}")]
    Missing(&'static str),

    #[error("invalid value for {name}: {reason}")]
    Invalid { name: &'static str, reason: String },
}

/// Immutable service configuration.
#[derive(Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Base URL of the GitHub REST API, without a trailing slash.
    pub api_base_url: String,
    /// Bearer token attached to every upstream call.
    pub token: String,
    /// Owner whose repositories are listed and mutated.
    pub owner: String,
    /// Origins allowed by the CORS layer.
    pub cors_origins: Vec<String>,
    /// Per-call upstream timeout.
    pub request_timeout: Duration,
    pub bind_addr: String,
}

impl AppConfig {
    pub fn new(
        api_base_url: impl Into<String>,
        token: impl Into<String>,
        owner: impl Into<String>,
    ) -> Self {
        Self {
            api_base_url: normalize_base_url(&api_base_url.into()),
            token: token.into(),
            owner: owner.into(),
            cors_origins: Vec::new(),
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
        }
    }

    pub fn with_cors_origins(mut self, origins: Vec<String>) -> Self {
        self.cors_origins = origins;
        self
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    /// Read configuration from process environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let non_empty = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let token = non_empty("GITHUB_TOKEN").ok_or(ConfigError::Missing("GITHUB_TOKEN"))?;
        let owner = non_empty("GITHUB_USERNAME").ok_or(ConfigError::Missing("GITHUB_USERNAME"))?;
        let base = non_empty("GITHUB_API_BASE_URL").unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string());

        let request_timeout = match non_empty("GITHUB_TIMEOUT_SECS") {
            Some(raw) => {
                let secs: u64 = raw.parse().map_err(|_| ConfigError::Invalid {
                    name: "GITHUB_TIMEOUT_SECS",
                    reason: format!("expected a whole number of seconds, got {raw:?}"),
                })?;
                if secs == 0 {
                    return Err(ConfigError::Invalid {
                        name: "GITHUB_TIMEOUT_SECS",
                        reason: "timeout must be greater than zero".to_string(),
                    });
                }
                Duration::from_secs(secs)
            }
            None => Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        };

        let mut config = Self::new(base, token, owner)
            .with_cors_origins(parse_origin_list(&lookup("CORS_WHITELIST").unwrap_or_default()))
            .with_request_timeout(request_timeout);

        if let Some(addr) = non_empty("BIND_ADDR") {
            config.bind_addr = addr;
        }

        Ok(config)
    }
}

impl fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppConfig")
            .field("api_base_url", &self.api_base_url)
            .field("token", &"<redacted>")
            .field("owner", &self.owner)
            .field("cors_origins", &self.cors_origins)
            .field("request_timeout", &self.request_timeout)
            .field("bind_addr", &self.bind_addr)
            .finish()
    }
}

fn normalize_base_url(raw: &str) -> String {
    raw.trim().trim_end_matches('/').to_string()
}

/// Split a comma-separated origin list, dropping blank entries.
pub fn parse_origin_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
