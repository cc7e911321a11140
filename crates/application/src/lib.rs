//! Mizban Application - Request pipeline and resource modules
//!
//! This crate owns the transport port, the shared session and the
//! [`ApiClient`] that turns a module call into a dispatched request and a
//! decoded envelope. Concrete transports live in the infrastructure crate.

pub mod client;
pub mod modules;
pub mod ports;
pub mod session;

#[cfg(test)]
mod fake;

pub use client::{ApiClient, ApiResult};
pub use modules::{AuthModule, CdnModule, CloudModule, StaticsModule};
pub use ports::{HttpClient, HttpClientError, OutgoingRequest, TransportFuture};
pub use session::Session;
