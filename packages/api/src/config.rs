//! Persistence client configuration.

use std::time::Duration;

use thiserror::Error;

/// Environment variable holding the backend base URL.
pub const BASE_URL_ENV: &str = "JOB_TRACKER_API_URL";
/// Environment variable holding the request timeout in milliseconds.
pub const TIMEOUT_ENV: &str = "JOB_TRACKER_API_TIMEOUT_MS";

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:3000";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(5000);

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid base url {0:?}: must start with http:// or https://")]
    InvalidBaseUrl(String),
    #[error("invalid timeout {0:?}: expected a positive number of milliseconds")]
    InvalidTimeout(String),
    #[error("http client error: {0}")]
    Http(String),
}

/// Where the backend lives and how long to wait for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL without a trailing slash, e.g. `http://127.0.0.1:3000`.
    pub base_url: String,
    /// Per-request timeout. Not applied on wasm32, where the browser owns it.
    pub timeout: Duration,
    /// Name recorded on every request span.
    pub label: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            label: "jobs".to_string(),
        }
    }
}

impl ClientConfig {
    /// Config for the given base URL with default timeout.
    pub fn new(base_url: impl Into<String>) -> Result<Self, ConfigError> {
        Ok(Self {
            base_url: parse_base_url(&base_url.into())?,
            ..Default::default()
        })
    }

    /// Set the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the label used on request spans.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Load from the process environment.
    ///
    /// The base URL falls back to the value baked in at compile time, then to
    /// [`DEFAULT_BASE_URL`].
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load using `lookup` in place of the environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let base_url = lookup(BASE_URL_ENV)
            .and_then(non_empty)
            .or_else(|| option_env!("JOB_TRACKER_API_URL").map(str::to_string))
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        let timeout = match lookup(TIMEOUT_ENV).and_then(non_empty) {
            Some(raw) => parse_timeout(&raw)?,
            None => DEFAULT_TIMEOUT,
        };

        Ok(Self {
            base_url: parse_base_url(&base_url)?,
            timeout,
            ..Default::default()
        })
    }
}

fn non_empty(value: String) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

fn parse_base_url(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim().trim_end_matches('/');
    let lower = trimmed.to_ascii_lowercase();
    let has_host = ["http://", "https://"]
        .iter()
        .any(|scheme| lower.starts_with(scheme) && lower.len() > scheme.len());
    if !has_host {
        return Err(ConfigError::InvalidBaseUrl(raw.to_string()));
    }
    Ok(trimmed.to_string())
}

fn parse_timeout(raw: &str) -> Result<Duration, ConfigError> {
    match raw.parse::<u64>() {
        Ok(ms) if ms > 0 => Ok(Duration::from_millis(ms)),
        _ => Err(ConfigError::InvalidTimeout(raw.to_string())),
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::disallowed_methods)]

    use std::collections::HashMap;

    use super::*;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn reads_url_and_timeout() {
        let config = ClientConfig::from_lookup(lookup(&[
            (BASE_URL_ENV, "https://jobs.example.com/api/"),
            (TIMEOUT_ENV, "2500"),
        ]))
        .unwrap();
        assert_eq!(config.base_url, "https://jobs.example.com/api");
        assert_eq!(config.timeout, Duration::from_millis(2500));
    }

    #[test]
    fn blank_values_use_defaults() {
        let config =
            ClientConfig::from_lookup(lookup(&[(TIMEOUT_ENV, "  ")])).unwrap();
        assert_eq!(config.timeout, DEFAULT_TIMEOUT);
        assert!(config.base_url.starts_with("http"));
    }

    #[test]
    fn rejects_bad_values() {
        assert_eq!(
            ClientConfig::from_lookup(lookup(&[(TIMEOUT_ENV, "0")])),
            Err(ConfigError::InvalidTimeout("0".into()))
        );
        assert_eq!(
            ClientConfig::from_lookup(lookup(&[(BASE_URL_ENV, "localhost:3000")])),
            Err(ConfigError::InvalidBaseUrl("localhost:3000".into()))
        );
        assert!(ClientConfig::new("https://").is_err());
    }

    #[test]
    fn builder_methods() {
        let config = ClientConfig::new("http://localhost:3000")
            .unwrap()
            .with_timeout(Duration::from_secs(1))
            .with_label("test");
        assert_eq!(config.label, "test");
        assert_eq!(config.timeout, Duration::from_secs(1));
    }
}
