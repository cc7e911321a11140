//! HTTP client port
//!
//! One implementation exists per service base URL. The transport core hands
//! it a fully built [`OutgoingRequest`] and gets the raw response back; any
//! status code is a successful exchange at this level.

use std::collections::BTreeMap;
use std::future::Future;
use std::pin::Pin;
use std::time::Duration;

use mizban_domain::request::HttpMethod;
use mizban_domain::response::RawResponse;

/// Errors raised when no HTTP response was obtained.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HttpClientError {
    /// The request did not complete in time.
    #[error("request timed out after {timeout_ms}ms")]
    Timeout {
        /// Timeout that elapsed.
        timeout_ms: u64,
    },

    /// The host name could not be resolved.
    #[error("DNS resolution failed for {host}: {message}")]
    DnsError {
        /// Host that failed to resolve.
        host: String,
        /// Resolver message.
        message: String,
    },

    /// Nothing was listening at the target address.
    #[error("connection refused by {host}:{port}")]
    ConnectionRefused {
        /// Target host.
        host: String,
        /// Target port.
        port: u16,
    },

    /// The connection failed or was reset.
    #[error("connection failed: {0}")]
    ConnectionFailed(String),

    /// The request URL could not be built.
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    /// Any other transport failure.
    #[error("{0}")]
    Other(String),
}

/// A request ready to be sent to one service.
///
/// Header names are stored as given; lookups through [`Self::header`] and
/// replacement through [`Self::set_header`] ignore ASCII case.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct OutgoingRequest {
    /// HTTP verb.
    pub method: HttpMethod,
    /// Path relative to the service base URL.
    pub path: String,
    /// Per-request headers layered over the adapter defaults.
    pub headers: BTreeMap<String, String>,
    /// Flattened query pairs, in order.
    pub query: Vec<(String, String)>,
    /// Encoded form body.
    pub body: Option<String>,
    /// Per-request timeout overriding the adapter default. Zero means none.
    pub timeout: Option<Duration>,
}

impl OutgoingRequest {
    /// Creates a request with no headers, query or body.
    #[must_use]
    pub fn new(method: HttpMethod, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            ..Self::default()
        }
    }

    /// Sets a header, replacing any existing one with the same name in any case.
    pub fn set_header(&mut self, name: &str, value: impl Into<String>) {
        self.headers.retain(|k, _| !k.eq_ignore_ascii_case(name));
        self.headers.insert(name.to_string(), value.into());
    }

    /// Looks up a header regardless of case.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// Future returned by [`HttpClient::execute`].
pub type TransportFuture<'a> =
    Pin<Box<dyn Future<Output = Result<RawResponse, HttpClientError>> + Send + 'a>>;

/// HTTP client port.
pub trait HttpClient: Send + Sync {
    /// Sends the request and returns the raw response, whatever its status.
    ///
    /// # Errors
    /// Returns `HttpClientError` only when no response was received.
    fn execute(&self, request: &OutgoingRequest) -> TransportFuture<'_>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_set_header_replaces_any_case() {
        let mut request = OutgoingRequest::new(HttpMethod::Get, "/x");
        request.set_header("accept-language", "en");
        request.set_header("Accept-Language", "fa");

        assert_eq!(request.headers.len(), 1);
        assert_eq!(request.header("ACCEPT-LANGUAGE"), Some("fa"));
    }

    #[test]
    fn test_error_display() {
        let error = HttpClientError::ConnectionRefused {
            host: "localhost".to_string(),
            port: 8003,
        };
        assert_eq!(error.to_string(), "connection refused by localhost:8003");
        assert_eq!(
            HttpClientError::Timeout { timeout_ms: 50 }.to_string(),
            "request timed out after 50ms"
        );
    }
}
