//! Account operations and token shortcuts.

use std::sync::Arc;

use mizban_domain::HttpMethod;
use mizban_domain::types::Wallet;

use super::call;
use crate::client::{ApiClient, ApiResult};

const WALLET: &str = "/api/admin-temp-v1/financial/wallet";

/// Account module.
#[derive(Debug, Clone)]
pub struct AuthModule {
    client: Arc<ApiClient>,
}

impl AuthModule {
    /// Creates the module over a shared client.
    #[must_use]
    pub const fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// Stores an API token for all later requests.
    pub fn set_api_token(&self, token: impl Into<String>) {
        self.client.set_token(Some(token.into()));
    }

    /// Returns the stored API token.
    #[must_use]
    pub fn api_token(&self) -> Option<String> {
        self.client.token()
    }

    /// Forgets the stored API token.
    pub fn clear_api_token(&self) {
        self.client.clear_token();
    }

    /// Fetches the wallet balance.
    ///
    /// # Errors
    /// Returns a `MizbanError` if the request fails.
    pub async fn get_wallet(&self) -> ApiResult<Wallet> {
        call(&self.client, HttpMethod::Get, WALLET, None).await
    }
}
