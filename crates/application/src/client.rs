//! Transport core.
//!
//! [`ApiClient`] owns one [`HttpClient`] per service and the shared
//! [`Session`]. Each call goes through the same stages:
//!
//! 1. build the request from verb, path, payload and per-call options
//! 2. apply the session headers
//! 3. dispatch through the service's transport
//! 4. turn the raw response (or transport failure) into an
//!    [`ApiResponse`] or a [`MizbanError`]

use std::sync::Arc;

use mizban_domain::{
    ApiResponse, HttpMethod, Language, MizbanError, Payload, RawResponse,
    RequestOptions, Service, encode_form, flatten,
};
use serde::de::DeserializeOwned;
use serde_json::{Value, json};
use tracing::{debug, warn};

use crate::ports::{HttpClient, HttpClientError, OutgoingRequest};
use crate::session::Session;

impl From<HttpClientError> for MizbanError {
    fn from(error: HttpClientError) -> Self {
        match error {
            HttpClientError::Timeout { .. } => Self::timeout(),
            other => Self::network(Some(other.to_string())),
        }
    }
}

/// Outcome of an API call.
pub type ApiResult<T> = Result<ApiResponse<T>, MizbanError>;

/// Shared transport used by every resource module.
pub struct ApiClient {
    auth: Arc<dyn HttpClient>,
    cdn: Arc<dyn HttpClient>,
    cloud: Arc<dyn HttpClient>,
    session: Session,
}

impl ApiClient {
    /// Creates a client from one transport per service.
    #[must_use]
    pub fn new(
        auth: Arc<dyn HttpClient>,
        cdn: Arc<dyn HttpClient>,
        cloud: Arc<dyn HttpClient>,
        language: Language,
    ) -> Self {
        Self {
            auth,
            cdn,
            cloud,
            session: Session::new(language),
        }
    }

    /// Session shared by all requests of this client.
    #[must_use]
    pub const fn session(&self) -> &Session {
        &self.session
    }

    /// Sets or clears the bearer token.
    pub fn set_token(&self, token: Option<String>) {
        self.session.set_token(token);
    }

    /// Returns the bearer token.
    #[must_use]
    pub fn token(&self) -> Option<String> {
        self.session.token()
    }

    /// Clears the bearer token.
    pub fn clear_token(&self) {
        self.session.clear_token();
    }

    /// Returns true when a bearer token is set.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }

    /// Sets the response language.
    pub fn set_language(&self, language: Language) {
        self.session.set_language(language);
    }

    /// Returns the response language.
    #[must_use]
    pub fn language(&self) -> Language {
        self.session.language()
    }

    /// Sends a request to the auth/main service.
    ///
    /// # Errors
    /// Returns a [`MizbanError`] for rejections, non-2xx responses,
    /// timeouts and network failures.
    pub async fn auth_request<T: DeserializeOwned>(
        &self,
        method: HttpMethod,
        path: &str,
        payload: Option<Payload>,
        options: Option<RequestOptions>,
    ) -> Result<ApiResponse<T>, MizbanError> {
        self.request(Service::Auth, method, path, payload, options)
            .await
    }

    /// Sends a request to the CDN service.
    ///
    /// # Errors
    /// Same as [`Self::auth_request`].
    pub async fn cdn_request<T: DeserializeOwned>(
        &self,
        method: HttpMethod,
        path: &str,
        payload: Option<Payload>,
        options: Option<RequestOptions>,
    ) -> Result<ApiResponse<T>, MizbanError> {
        self.request(Service::Cdn, method, path, payload, options)
            .await
    }

    /// Sends a request to the cloud service.
    ///
    /// # Errors
    /// Same as [`Self::auth_request`].
    pub async fn cloud_request<T: DeserializeOwned>(
        &self,
        method: HttpMethod,
        path: &str,
        payload: Option<Payload>,
        options: Option<RequestOptions>,
    ) -> Result<ApiResponse<T>, MizbanError> {
        self.request(Service::Cloud, method, path, payload, options)
            .await
    }

    /// Sends a request to the given service.
    ///
    /// # Errors
    /// Same as [`Self::auth_request`].
    pub async fn request<T: DeserializeOwned>(
        &self,
        service: Service,
        method: HttpMethod,
        path: &str,
        payload: Option<Payload>,
        options: Option<RequestOptions>,
    ) -> Result<ApiResponse<T>, MizbanError> {
        let mut request = build_request(method, path, payload, options.unwrap_or_default())?;
        self.session.apply(&mut request);

        debug!(%service, %method, path, "dispatching request");

        let result = match self.transport(service).execute(&request).await {
            Ok(response) => {
                debug!(
                    %service,
                    %method,
                    path,
                    status = response.status,
                    elapsed_ms = response.duration.as_millis(),
                    "response received"
                );
                interpret(&response)
            }
            Err(error) => Err(MizbanError::from(error)),
        };

        if let Err(error) = &result {
            warn!(
                %service,
                %method,
                path,
                status = error.status_code(),
                message = error.message(),
                "request failed"
            );
        }
        result
    }

    fn transport(&self, service: Service) -> &dyn HttpClient {
        match service {
            Service::Auth => self.auth.as_ref(),
            Service::Cdn => self.cdn.as_ref(),
            Service::Cloud => self.cloud.as_ref(),
        }
    }
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("session", &self.session)
            .finish_non_exhaustive()
    }
}

/// Builds the outgoing request. GET payloads go to the query string after
/// the explicit params; other payloads become the form body.
fn build_request(
    method: HttpMethod,
    path: &str,
    payload: Option<Payload>,
    options: RequestOptions,
) -> Result<OutgoingRequest, MizbanError> {
    let RequestOptions {
        headers,
        timeout,
        params,
    } = options;

    let mut request = OutgoingRequest::new(method, path);
    for (name, value) in headers {
        request.set_header(&name, value);
    }
    request.timeout = timeout;

    match payload {
        Some(payload) if !method.has_body() => {
            let params: Payload = params
                .into_iter()
                .filter(|(key, _)| !payload.contains_key(key))
                .collect();
            request.query = flatten(&params);
            request.query.extend(flatten(&payload));
        }
        payload => {
            request.query = flatten(&params);
            if let Some(payload) = payload {
                request.body = Some(encode_form(&payload)?);
            }
        }
    }

    Ok(request)
}

fn interpret<T: DeserializeOwned>(response: &RawResponse) -> Result<ApiResponse<T>, MizbanError> {
    let status = response.status;
    if !response.is_success() {
        return Err(MizbanError::from_status(status, response.json()));
    }

    let mut body: Value = if response.is_blank() {
        json!({"success": true})
    } else {
        serde_json::from_slice(&response.body)
            .map_err(|e| MizbanError::invalid_response(status, e))?
    };

    if body.get("success").and_then(Value::as_bool) == Some(false) {
        return Err(MizbanError::rejected(status, body));
    }

    if let Value::Object(map) = &mut body {
        map.entry("data").or_insert(Value::Null);
    }
    serde_json::from_value(body).map_err(|e| MizbanError::invalid_response(status, e))
}
