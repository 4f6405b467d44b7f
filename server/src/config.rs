//! Host configuration parsed from environment variables.
//!
//! SYSTEM CONTEXT
//! ==============
//! `main` loads `.env` through `dotenvy` and then calls [`ServerConfig::from_env`].
//! Leptos' own settings (`LEPTOS_*`, site root, reload port) are read
//! separately by `leptos::get_configuration`.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::time::Duration;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_API_URL: &str = "http://localhost:8080/api";
pub const DEFAULT_PROXY_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid PORT: {0}")]
    InvalidPort(String),
    #[error("invalid ERP_API_URL: {0}")]
    InvalidUpstream(String),
    #[error("invalid ERP_PROXY_TIMEOUT_SECS: {0}")]
    InvalidTimeout(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    /// Upstream API base without a trailing slash, e.g. `http://erp:8080/api`.
    pub upstream: String,
    pub proxy_timeout: Duration,
}

impl ServerConfig {
    /// Build config from the process environment.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `ERP_API_URL`: default `http://localhost:8080/api`
    /// - `ERP_PROXY_TIMEOUT_SECS`: default 30, must be positive
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a variable is present but malformed.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// See [`ServerConfig::from_env`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = match lookup("PORT") {
            Some(raw) => raw.trim().parse::<u16>().map_err(|_| ConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };

        let upstream = lookup("ERP_API_URL").unwrap_or_else(|| DEFAULT_API_URL.to_owned());
        let upstream = parse_upstream(&upstream)?;

        let timeout_secs = match lookup("ERP_PROXY_TIMEOUT_SECS") {
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|secs| *secs > 0)
                .ok_or(ConfigError::InvalidTimeout(raw))?,
            None => DEFAULT_PROXY_TIMEOUT_SECS,
        };

        Ok(Self { port, upstream, proxy_timeout: Duration::from_secs(timeout_secs) })
    }
}

fn parse_upstream(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim().trim_end_matches('/');
    let has_scheme = trimmed.starts_with("http://") || trimmed.starts_with("https://");
    let has_host = trimmed.split_once("://").is_some_and(|(_, rest)| !rest.is_empty());
    if has_scheme && has_host { Ok(trimmed.to_owned()) } else { Err(ConfigError::InvalidUpstream(raw.to_owned())) }
}
