//! Per-call request overrides

use std::collections::BTreeMap;
use std::time::Duration;

use serde_json::Value;

use super::payload::Payload;

/// Overrides applied to a single request.
///
/// Headers set here replace the service defaults but are themselves
/// replaced by the session headers (`Authorization`, `Accept-Language`).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequestOptions {
    /// Extra headers for this request.
    pub headers: BTreeMap<String, String>,
    /// Timeout for this request instead of the configured one.
    pub timeout: Option<Duration>,
    /// Query parameters, flattened like form payloads.
    pub params: Payload,
}

impl RequestOptions {
    /// Creates empty options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a header.
    #[must_use]
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// Sets the timeout. A zero duration means no timeout for this call.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Sets the timeout in milliseconds.
    #[must_use]
    pub const fn with_timeout_ms(self, timeout_ms: u64) -> Self {
        self.with_timeout(Duration::from_millis(timeout_ms))
    }

    /// Adds a query parameter.
    #[must_use]
    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.params.insert(key.into(), value.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_builder() {
        let options = RequestOptions::new()
            .with_header("X-Trace", "abc")
            .with_timeout_ms(5000)
            .with_param("page", 2);

        assert_eq!(options.headers.get("X-Trace").map(String::as_str), Some("abc"));
        assert_eq!(options.timeout, Some(Duration::from_secs(5)));
        assert_eq!(options.params.get("page"), Some(&json!(2)));
    }

    #[test]
    fn test_default_is_empty() {
        let options = RequestOptions::default();
        assert!(options.headers.is_empty());
        assert!(options.timeout.is_none());
        assert!(options.params.is_empty());
    }
}
