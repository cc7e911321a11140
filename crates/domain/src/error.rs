//! Error types
//!
//! [`MizbanError`] is the single error callers see from a request. It always
//! carries the message, the HTTP status code and the raw error envelope. Four
//! causes map onto it:
//!
//! - backend rejection: `success: false` inside a 2xx response
//! - backend failure: a non-2xx response with a body
//! - timeout: synthesized with status `408`
//! - network failure: synthesized with status `0`

use serde_json::Value;
use thiserror::Error;

use crate::response::ErrorEnvelope;

/// Status code used for synthesized timeout errors.
pub const TIMEOUT_STATUS: u16 = 408;

/// Status code used when no response was received at all.
pub const NETWORK_STATUS: u16 = 0;

/// Normalized error returned by every API call.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{message} (status {status_code})")]
pub struct MizbanError {
    message: String,
    status_code: u16,
    response: ErrorEnvelope,
    timed_out: bool,
}

impl MizbanError {
    /// Creates an error from its three parts.
    #[must_use]
    pub fn new(message: impl Into<String>, status_code: u16, response: ErrorEnvelope) -> Self {
        Self {
            message: message.into(),
            status_code,
            response,
            timed_out: false,
        }
    }

    /// Error for a 2xx response whose body says `success: false`.
    ///
    /// The message is the body's `message`, or `"Operation failed"` when
    /// that is missing or not a string. An empty message is kept as is.
    #[must_use]
    pub fn rejected(status_code: u16, body: Value) -> Self {
        let message = body
            .get("message")
            .and_then(Value::as_str)
            .unwrap_or("Operation failed")
            .to_string();
        Self::new(message, status_code, ErrorEnvelope::from_body(body))
    }

    /// Error for a non-2xx response.
    ///
    /// `body` is the decoded JSON body, if there was one. The message comes
    /// from its `message` field and the envelope is the body itself.
    #[must_use]
    pub fn from_status(status_code: u16, body: Option<Value>) -> Self {
        let message = body
            .as_ref()
            .and_then(|b| b.get("message"))
            .and_then(Value::as_str)
            .unwrap_or("An error occurred")
            .to_string();

        let envelope = body.map_or_else(
            || ErrorEnvelope::failure("Unknown error"),
            ErrorEnvelope::from_body,
        );

        Self::new(message, status_code, envelope)
    }

    /// Error for a request that did not complete within its timeout.
    #[must_use]
    pub fn timeout() -> Self {
        Self {
            timed_out: true,
            ..Self::new(
                "Request timeout",
                TIMEOUT_STATUS,
                ErrorEnvelope::failure("Request timeout"),
            )
        }
    }

    /// Error for a request that never got a response.
    #[must_use]
    pub fn network(message: Option<String>) -> Self {
        let message = message
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| "Network error".to_string());
        Self::new(
            message.clone(),
            NETWORK_STATUS,
            ErrorEnvelope::failure(message),
        )
    }

    /// Error for a 2xx body that is not a valid envelope.
    #[must_use]
    pub fn invalid_response(status_code: u16, reason: impl std::fmt::Display) -> Self {
        let message = format!("Invalid response body: {reason}");
        Self::new(
            message.clone(),
            status_code,
            ErrorEnvelope::failure(message),
        )
    }

    /// Error for a payload that could not be turned into form fields.
    ///
    /// Raised before anything is sent, so the status is `0`.
    #[must_use]
    pub fn invalid_payload(reason: impl std::fmt::Display) -> Self {
        let message = format!("Invalid request payload: {reason}");
        Self::new(
            message.clone(),
            NETWORK_STATUS,
            ErrorEnvelope::failure(message),
        )
    }

    /// Human-readable error message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// HTTP status code, `408` for timeouts and `0` for network failures.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        self.status_code
    }

    /// The raw error envelope.
    #[must_use]
    pub const fn response(&self) -> &ErrorEnvelope {
        &self.response
    }

    /// Consumes the error and returns the raw envelope.
    #[must_use]
    pub fn into_response(self) -> ErrorEnvelope {
        self.response
    }

    /// Fields the backend flagged, if it reported any.
    #[must_use]
    pub fn fields(&self) -> Option<&[String]> {
        self.response.fields.as_deref()
    }

    /// Fields the backend reported as invalid, if it reported any.
    #[must_use]
    pub fn invalid_fields(&self) -> Option<&[String]> {
        self.response.invalid_fields.as_deref()
    }

    /// Fields the backend reported as missing, if it reported any.
    #[must_use]
    pub fn missing_fields(&self) -> Option<&[String]> {
        self.response.missing_fields.as_deref()
    }

    /// Returns true when the request hit the client-side timeout.
    ///
    /// A `408` answered by the backend is not a timeout here.
    #[must_use]
    pub const fn is_timeout(&self) -> bool {
        self.timed_out
    }

    /// Returns true when no response was received.
    #[must_use]
    pub const fn is_network_error(&self) -> bool {
        self.status_code == NETWORK_STATUS
    }

    /// Returns true when the backend answered 2xx but rejected the operation.
    #[must_use]
    pub const fn is_rejection(&self) -> bool {
        self.status_code >= 200 && self.status_code < 300
    }
}

/// Domain-level errors raised while parsing or validating values.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The response language is not supported.
    #[error("unsupported language: {0}")]
    UnsupportedLanguage(String),

    /// The request payload cannot be form-encoded.
    #[error("invalid payload: {0}")]
    InvalidPayload(String),
}

impl From<DomainError> for MizbanError {
    fn from(error: DomainError) -> Self {
        Self::invalid_payload(error)
    }
}

/// Result type alias for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
