//! Response types

mod envelope;
mod raw;

pub use envelope::{ApiResponse, Empty, ErrorEnvelope};
pub use raw::RawResponse;
