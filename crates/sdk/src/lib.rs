//! MizbanCloud SDK
//!
//! Async client for the MizbanCloud CDN and cloud APIs.
//!
//! ```no_run
//! use mizban::{ClientConfig, Language, MizbanCloud};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let mizban = MizbanCloud::new(&ClientConfig::new().with_language(Language::Fa))?;
//! mizban.auth.set_api_token("your-api-token");
//!
//! let domains = mizban.cdn.list_domains().await?;
//! for domain in domains.data {
//!     println!("{} {:?}", domain.name, domain.status);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! Every call returns `Result<ApiResponse<T>, MizbanError>`. A `MizbanError`
//! carries the message, the HTTP status (`408` for timeouts, `0` when no
//! response arrived) and the raw error envelope.

use std::sync::Arc;

pub use mizban_application::{
    ApiClient, ApiResult, AuthModule, CdnModule, CloudModule, HttpClient, HttpClientError,
    OutgoingRequest, Session, StaticsModule, TransportFuture,
};
pub use mizban_domain::types;
pub use mizban_domain::{
    ApiResponse, ClientConfig, ConfigError, Empty, ErrorEnvelope, HttpMethod, Language,
    MizbanError, NETWORK_STATUS, Payload, RawResponse, RequestOptions, Service, TIMEOUT_STATUS,
    to_payload,
};
pub use mizban_infrastructure::ReqwestHttpClient;

/// Entry point holding the shared client and the resource modules.
#[derive(Debug, Clone)]
pub struct MizbanCloud {
    client: Arc<ApiClient>,
    /// Account operations and token shortcuts.
    pub auth: AuthModule,
    /// CDN domains, DNS, SSL, cache, security and page rules.
    pub cdn: CdnModule,
    /// Cloud servers, networks, volumes, snapshots and SSH keys.
    pub cloud: CloudModule,
    /// Catalog lookups.
    pub statics: StaticsModule,
}

impl MizbanCloud {
    /// Creates a client with one HTTP transport per service.
    ///
    /// # Errors
    /// Returns `ConfigError` if a base URL or a default header is invalid.
    pub fn new(config: &ClientConfig) -> Result<Self, ConfigError> {
        let transport = |service: Service| -> Result<Arc<dyn HttpClient>, ConfigError> {
            Ok(Arc::new(ReqwestHttpClient::for_service(config, service)?))
        };

        let client = Self::with_transports(
            transport(Service::Auth)?,
            transport(Service::Cdn)?,
            transport(Service::Cloud)?,
            config.language,
        );
        tracing::debug!(language = %config.language, "client configured");
        Ok(client)
    }

    /// Creates a client configured from `MIZBAN_*` environment variables.
    ///
    /// # Errors
    /// Returns `ConfigError` for unparsable variables or invalid URLs.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::new(&ClientConfig::from_env()?)
    }

    /// Creates a client over caller-supplied transports.
    #[must_use]
    pub fn with_transports(
        auth: Arc<dyn HttpClient>,
        cdn: Arc<dyn HttpClient>,
        cloud: Arc<dyn HttpClient>,
        language: Language,
    ) -> Self {
        let client = Arc::new(ApiClient::new(auth, cdn, cloud, language));
        Self {
            auth: AuthModule::new(Arc::clone(&client)),
            cdn: CdnModule::new(Arc::clone(&client)),
            cloud: CloudModule::new(Arc::clone(&client)),
            statics: StaticsModule::new(Arc::clone(&client)),
            client,
        }
    }

    /// The shared client, for calls the modules do not cover.
    #[must_use]
    pub const fn client(&self) -> &Arc<ApiClient> {
        &self.client
    }

    /// Sets or clears the bearer token.
    pub fn set_token(&self, token: Option<String>) {
        self.client.set_token(token);
    }

    /// Returns the bearer token.
    #[must_use]
    pub fn token(&self) -> Option<String> {
        self.client.token()
    }

    /// Clears the bearer token.
    pub fn clear_token(&self) {
        self.client.clear_token();
    }

    /// Returns true when a bearer token is set.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.client.is_authenticated()
    }

    /// Sets the response language.
    pub fn set_language(&self, language: Language) {
        self.client.set_language(language);
    }

    /// Returns the response language.
    #[must_use]
    pub fn language(&self) -> Language {
        self.client.language()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_new_with_defaults() {
        let mizban = MizbanCloud::new(&ClientConfig::default()).unwrap();
        assert!(!mizban.is_authenticated());
        assert_eq!(mizban.language(), Language::En);
    }

    #[test]
    fn test_session_shared_by_modules() {
        let mizban = MizbanCloud::new(&ClientConfig::new().with_language(Language::Fa)).unwrap();

        mizban.auth.set_api_token("T1");
        assert_eq!(mizban.token().as_deref(), Some("T1"));
        assert_eq!(mizban.client().language(), Language::Fa);

        mizban.clear_token();
        assert_eq!(mizban.auth.api_token(), None);
    }

    #[test]
    fn test_new_rejects_bad_config() {
        let config = ClientConfig::new().with_cdn_base_url("::nope::");
        assert!(matches!(
            MizbanCloud::new(&config),
            Err(ConfigError::InvalidBaseUrl {
                service: Service::Cdn,
                ..
            })
        ));

        let config = ClientConfig::new().with_header("bad\nname", "v");
        assert!(matches!(
            MizbanCloud::new(&config),
            Err(ConfigError::InvalidHeader { .. })
        ));
    }
}
