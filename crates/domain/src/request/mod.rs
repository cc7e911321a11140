//! Request types

mod method;
mod options;
mod payload;

pub use method::HttpMethod;
pub use options::RequestOptions;
pub use payload::{Payload, encode_form, flatten, to_payload};
