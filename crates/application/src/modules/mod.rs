//! Resource modules
//!
//! Thin, stateless facades over [`ApiClient`]. Every operation is routed
//! through the auth/main service.

mod auth;
mod cdn;
mod cloud;
mod statics;

pub use auth::AuthModule;
pub use cdn::CdnModule;
pub use cloud::CloudModule;
pub use statics::StaticsModule;

use mizban_domain::{HttpMethod, MizbanError, Payload, to_payload};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::client::{ApiClient, ApiResult};

/// Converts a request value into a form payload.
fn form<T: Serialize + ?Sized>(value: &T) -> Result<Payload, MizbanError> {
    Ok(to_payload(value)?)
}

/// Boolean switches travel as `1`/`0`.
fn flag(enabled: bool) -> u8 {
    u8::from(enabled)
}

async fn call<T: DeserializeOwned>(
    client: &ApiClient,
    method: HttpMethod,
    path: &str,
    payload: Option<Payload>,
) -> ApiResult<T> {
    client.auth_request(method, path, payload, None).await
}
