//! Mizban Infrastructure - Transport adapters
//!
//! This crate provides the concrete `HttpClient` implementation
//! defined as a port in the application layer.

pub mod adapters;

pub use adapters::ReqwestHttpClient;
