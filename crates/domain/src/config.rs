//! Client configuration
//!
//! All settings are optional. Missing values fall back to the local
//! development endpoints, a 30 second timeout and English responses.

use std::collections::BTreeMap;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::Url;

use crate::language::Language;
use crate::service::Service;

/// Environment variable for the auth/main API base URL.
pub const ENV_AUTH_BASE_URL: &str = "MIZBAN_AUTH_BASE_URL";
/// Environment variable for the CDN API base URL.
pub const ENV_CDN_BASE_URL: &str = "MIZBAN_CDN_BASE_URL";
/// Environment variable for the cloud API base URL.
pub const ENV_CLOUD_BASE_URL: &str = "MIZBAN_CLOUD_BASE_URL";
/// Environment variable for the request timeout in milliseconds.
pub const ENV_TIMEOUT_MS: &str = "MIZBAN_TIMEOUT_MS";
/// Environment variable for the response language.
pub const ENV_LANGUAGE: &str = "MIZBAN_LANGUAGE";

/// Errors raised while building a client from configuration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A base URL could not be parsed.
    #[error("invalid {service} base URL {url:?}: {reason}")]
    InvalidBaseUrl {
        /// Service the URL belongs to.
        service: Service,
        /// The rejected URL.
        url: String,
        /// Parser message.
        reason: String,
    },

    /// A default header name or value is not valid HTTP.
    #[error("invalid header {name:?}: {reason}")]
    InvalidHeader {
        /// Header name.
        name: String,
        /// Why it was rejected.
        reason: String,
    },

    /// A configuration value could not be parsed.
    #[error("invalid value {value:?} for {key}")]
    InvalidValue {
        /// Setting or environment variable name.
        key: String,
        /// The rejected value.
        value: String,
    },

    /// The underlying HTTP client could not be built.
    #[error("cannot build HTTP client: {0}")]
    Client(String),
}

/// Options for constructing a client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Base URL of the auth/main API.
    #[serde(default = "defaults::auth_base_url")]
    pub auth_base_url: String,
    /// Base URL of the CDN API.
    #[serde(default = "defaults::cdn_base_url")]
    pub cdn_base_url: String,
    /// Base URL of the cloud API.
    #[serde(default = "defaults::cloud_base_url")]
    pub cloud_base_url: String,
    /// Request timeout in milliseconds, `0` for none.
    #[serde(default = "defaults::timeout_ms")]
    pub timeout_ms: u64,
    /// Initial response language.
    #[serde(default)]
    pub language: Language,
    /// Extra headers sent with every request.
    #[serde(default)]
    pub headers: BTreeMap<String, String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            auth_base_url: defaults::auth_base_url(),
            cdn_base_url: defaults::cdn_base_url(),
            cloud_base_url: defaults::cloud_base_url(),
            timeout_ms: defaults::timeout_ms(),
            language: Language::default(),
            headers: BTreeMap::new(),
        }
    }
}

impl ClientConfig {
    /// Creates a configuration with all defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads overrides from `MIZBAN_*` environment variables.
    ///
    /// # Errors
    /// Returns `ConfigError::InvalidValue` if the timeout or language
    /// variable is set but cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a configuration from an arbitrary variable lookup.
    ///
    /// # Errors
    /// Returns `ConfigError::InvalidValue` for unparsable values.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(url) = lookup(ENV_AUTH_BASE_URL) {
            config.auth_base_url = url;
        }
        if let Some(url) = lookup(ENV_CDN_BASE_URL) {
            config.cdn_base_url = url;
        }
        if let Some(url) = lookup(ENV_CLOUD_BASE_URL) {
            config.cloud_base_url = url;
        }
        if let Some(value) = lookup(ENV_TIMEOUT_MS) {
            config.timeout_ms = value.trim().parse().map_err(|_| ConfigError::InvalidValue {
                key: ENV_TIMEOUT_MS.to_string(),
                value: value.clone(),
            })?;
        }
        if let Some(value) = lookup(ENV_LANGUAGE) {
            config.language = value.parse().map_err(|_| ConfigError::InvalidValue {
                key: ENV_LANGUAGE.to_string(),
                value: value.clone(),
            })?;
        }

        Ok(config)
    }

    /// Sets the auth/main API base URL.
    #[must_use]
    pub fn with_auth_base_url(mut self, url: impl Into<String>) -> Self {
        self.auth_base_url = url.into();
        self
    }

    /// Sets the CDN API base URL.
    #[must_use]
    pub fn with_cdn_base_url(mut self, url: impl Into<String>) -> Self {
        self.cdn_base_url = url.into();
        self
    }

    /// Sets the cloud API base URL.
    #[must_use]
    pub fn with_cloud_base_url(mut self, url: impl Into<String>) -> Self {
        self.cloud_base_url = url.into();
        self
    }

    /// Sets the request timeout in milliseconds. `0` disables it.
    #[must_use]
    pub const fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    /// Sets the initial response language.
    #[must_use]
    pub const fn with_language(mut self, language: Language) -> Self {
        self.language = language;
        self
    }

    /// Adds a header sent with every request.
    #[must_use]
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// Returns the configured timeout.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    /// Returns the raw base URL of a service.
    #[must_use]
    pub fn base_url(&self, service: Service) -> &str {
        match service {
            Service::Auth => &self.auth_base_url,
            Service::Cdn => &self.cdn_base_url,
            Service::Cloud => &self.cloud_base_url,
        }
    }

    /// Parses the base URL of a service.
    ///
    /// # Errors
    /// Returns `ConfigError::InvalidBaseUrl` if the URL is malformed or not
    /// `http`/`https`.
    pub fn parsed_base_url(&self, service: Service) -> Result<Url, ConfigError> {
        let raw = self.base_url(service);
        let invalid = |reason: String| ConfigError::InvalidBaseUrl {
            service,
            url: raw.to_string(),
            reason,
        };

        let url = Url::parse(raw).map_err(|e| invalid(e.to_string()))?;
        match url.scheme() {
            "http" | "https" => Ok(url),
            other => Err(invalid(format!("unsupported scheme {other}"))),
        }
    }
}

mod defaults {
    use crate::service::Service;

    pub fn auth_base_url() -> String {
        Service::Auth.default_base_url().to_string()
    }

    pub fn cdn_base_url() -> String {
        Service::Cdn.default_base_url().to_string()
    }

    pub fn cloud_base_url() -> String {
        Service::Cloud.default_base_url().to_string()
    }

    pub const fn timeout_ms() -> u64 {
        30_000
    }
}
