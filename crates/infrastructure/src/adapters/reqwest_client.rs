//! HTTP Client implementation using reqwest.
//!
//! This adapter implements the `HttpClient` port for a single backend
//! service. It owns the base URL, the default headers and the default
//! timeout of that service; everything per-request arrives in the
//! [`OutgoingRequest`].

use std::collections::BTreeMap;
use std::time::{Duration, Instant};

use mizban_application::ports::{HttpClient, HttpClientError, OutgoingRequest, TransportFuture};
use mizban_domain::{ClientConfig, ConfigError, HttpMethod, Language, RawResponse, Service};
use reqwest::header::{ACCEPT, ACCEPT_LANGUAGE, CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};
use reqwest::{Client, Method};
use url::Url;

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";
const USER_AGENT: &str = concat!("mizban-rs/", env!("CARGO_PKG_VERSION"));

/// HTTP client implementation using reqwest.
///
/// One instance exists per service. Default headers are attached by the
/// underlying `reqwest::Client`; a header set on the request replaces the
/// default of the same name.
#[derive(Debug, Clone)]
pub struct ReqwestHttpClient {
    client: Client,
    base_url: Url,
    timeout: Duration,
}

impl ReqwestHttpClient {
    /// Creates a client for one base URL.
    ///
    /// Default headers:
    /// - `Content-Type: application/x-www-form-urlencoded`
    /// - `Accept: application/json`
    /// - `Accept-Language: <language>`
    ///
    /// `headers` are layered on top and win over the defaults regardless of
    /// case. A zero `timeout` disables the deadline.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidHeader` for a header that is not valid
    /// HTTP and `ConfigError::Client` if the client cannot be built.
    pub fn new(
        base_url: Url,
        timeout: Duration,
        language: Language,
        headers: &BTreeMap<String, String>,
    ) -> Result<Self, ConfigError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .default_headers(default_headers(language, headers)?)
            .build()
            .map_err(|e| ConfigError::Client(error_chain(&e)))?;

        Ok(Self {
            client,
            base_url,
            timeout,
        })
    }

    /// Creates the client for `service` from a configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the base URL or a header is invalid.
    pub fn for_service(config: &ClientConfig, service: Service) -> Result<Self, ConfigError> {
        let client = Self::new(
            config.parsed_base_url(service)?,
            config.timeout(),
            config.language,
            &config.headers,
        )?;
        tracing::debug!(%service, base_url = %client.base_url, "transport ready");
        Ok(client)
    }

    /// Base URL every request path is appended to.
    #[must_use]
    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Timeout applied when the request carries none. Zero means none.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Joins the base URL, the request path and the query pairs.
    fn build_url(&self, request: &OutgoingRequest) -> Result<Url, HttpClientError> {
        let base = self.base_url.as_str().trim_end_matches('/');
        let raw = if request.path.starts_with('/') {
            format!("{base}{}", request.path)
        } else {
            format!("{base}/{}", request.path)
        };

        let mut url =
            Url::parse(&raw).map_err(|e| HttpClientError::InvalidUrl(format!("{e}: {raw}")))?;
        if !request.query.is_empty() {
            url.query_pairs_mut().extend_pairs(request.query.iter());
        }
        Ok(url)
    }
}

/// Converts domain `HttpMethod` to reqwest `Method`.
const fn to_reqwest_method(method: HttpMethod) -> Method {
    match method {
        HttpMethod::Get => Method::GET,
        HttpMethod::Post => Method::POST,
        HttpMethod::Put => Method::PUT,
        HttpMethod::Delete => Method::DELETE,
    }
}

fn default_headers(
    language: Language,
    extra: &BTreeMap<String, String>,
) -> Result<HeaderMap, ConfigError> {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static(FORM_CONTENT_TYPE));
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
    headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static(language.as_str()));

    for (name, value) in extra {
        let invalid = |reason: String| ConfigError::InvalidHeader {
            name: name.clone(),
            reason,
        };
        let header_name =
            HeaderName::from_bytes(name.as_bytes()).map_err(|e| invalid(e.to_string()))?;
        let header_value = HeaderValue::from_str(value).map_err(|e| invalid(e.to_string()))?;
        headers.insert(header_name, header_value);
    }

    Ok(headers)
}

/// Renders an error with all of its sources.
///
/// reqwest keeps the interesting part (`Connection refused`, resolver
/// output) in the source chain.
fn error_chain(error: &(dyn std::error::Error + 'static)) -> String {
    let mut message = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}

fn host_of(error: &reqwest::Error) -> String {
    error
        .url()
        .and_then(Url::host_str)
        .unwrap_or("unknown")
        .to_string()
}

/// Maps reqwest errors to `HttpClientError`.
fn map_error(error: &reqwest::Error, timeout_ms: u64) -> HttpClientError {
    if error.is_timeout() {
        return HttpClientError::Timeout { timeout_ms };
    }

    let message = error_chain(error);
    if error.is_connect() {
        let lowered = message.to_lowercase();
        if lowered.contains("dns") || lowered.contains("resolve") {
            return HttpClientError::DnsError {
                host: host_of(error),
                message,
            };
        }
        if lowered.contains("refused") {
            return HttpClientError::ConnectionRefused {
                host: host_of(error),
                port: error
                    .url()
                    .and_then(Url::port_or_known_default)
                    .unwrap_or(80),
            };
        }
        return HttpClientError::ConnectionFailed(message);
    }

    if error.is_builder() {
        return HttpClientError::InvalidUrl(message);
    }

    HttpClientError::Other(message)
}

impl HttpClient for ReqwestHttpClient {
    fn execute(&self, request: &OutgoingRequest) -> TransportFuture<'_> {
        let request = request.clone();

        Box::pin(async move {
            let url = self.build_url(&request)?;
            let timeout = request.timeout.unwrap_or(self.timeout);
            let timeout_ms = u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX);

            let start = Instant::now();

            let mut builder = self
                .client
                .request(to_reqwest_method(request.method), url);
            if !timeout.is_zero() {
                builder = builder.timeout(timeout);
            }
            for (name, value) in &request.headers {
                builder = builder.header(name.as_str(), value.as_str());
            }
            if let Some(body) = request.body {
                builder = builder.body(body);
            }

            let response = builder
                .send()
                .await
                .map_err(|e| map_error(&e, timeout_ms))?;

            let status = response.status().as_u16();
            let body = response
                .bytes()
                .await
                .map_err(|e| map_error(&e, timeout_ms))?
                .to_vec();

            Ok(RawResponse::new(status, body).with_duration(start.elapsed()))
        })
    }
}
