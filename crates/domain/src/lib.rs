//! Mizban Domain - Core API types
//!
//! This crate defines the data model of the Mizban cloud/CDN API:
//! response envelopes, the normalized error, client configuration,
//! the form payload encoder and the resource types.
//! All types here are pure Rust with no I/O dependencies.

pub mod config;
pub mod error;
pub mod language;
pub mod request;
pub mod response;
pub mod service;
pub mod types;

pub use config::{ClientConfig, ConfigError};
pub use error::{DomainError, DomainResult, MizbanError, NETWORK_STATUS, TIMEOUT_STATUS};
pub use language::Language;
pub use request::{HttpMethod, Payload, RequestOptions, encode_form, flatten, to_payload};
pub use response::{ApiResponse, Empty, ErrorEnvelope, RawResponse};
pub use service::Service;
