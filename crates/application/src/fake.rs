//! In-memory `HttpClient` used by unit tests.

use std::collections::VecDeque;
use std::sync::Arc;

use mizban_domain::RawResponse;
use parking_lot::Mutex;
use serde_json::{Value, json};

use crate::client::ApiClient;
use crate::ports::{HttpClient, HttpClientError, OutgoingRequest, TransportFuture};

/// Records every request and replays queued responses.
///
/// With nothing queued it answers `200 {"success": true, "data": null}`.
#[derive(Default)]
pub struct RecordingHttpClient {
    requests: Mutex<Vec<OutgoingRequest>>,
    responses: Mutex<VecDeque<Result<RawResponse, HttpClientError>>>,
}

impl RecordingHttpClient {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn respond_json(&self, status: u16, body: &Value) {
        self.responses
            .lock()
            .push_back(Ok(RawResponse::new(status, body.to_string())));
    }

    pub fn respond_raw(&self, status: u16, body: &str) {
        self.responses
            .lock()
            .push_back(Ok(RawResponse::new(status, body.as_bytes().to_vec())));
    }

    pub fn fail(&self, error: HttpClientError) {
        self.responses.lock().push_back(Err(error));
    }

    pub fn requests(&self) -> Vec<OutgoingRequest> {
        self.requests.lock().clone()
    }

    pub fn last(&self) -> OutgoingRequest {
        self.requests
            .lock()
            .last()
            .cloned()
            .unwrap_or_default()
    }
}

impl HttpClient for RecordingHttpClient {
    fn execute(&self, request: &OutgoingRequest) -> TransportFuture<'_> {
        self.requests.lock().push(request.clone());
        let next = self.responses.lock().pop_front().unwrap_or_else(|| {
            Ok(RawResponse::new(
                200,
                json!({"success": true, "data": null}).to_string(),
            ))
        });
        Box::pin(async move { next })
    }
}

/// Three recording transports wired into one client.
pub struct Harness {
    pub client: Arc<ApiClient>,
    pub auth: Arc<RecordingHttpClient>,
    pub cdn: Arc<RecordingHttpClient>,
    pub cloud: Arc<RecordingHttpClient>,
}

impl Harness {
    pub fn new() -> Self {
        let auth = RecordingHttpClient::new();
        let cdn = RecordingHttpClient::new();
        let cloud = RecordingHttpClient::new();
        let client = Arc::new(ApiClient::new(
            auth.clone(),
            cdn.clone(),
            cloud.clone(),
            mizban_domain::Language::En,
        ));
        Self {
            client,
            auth,
            cdn,
            cloud,
        }
    }

    /// Decoded form body of the last auth request.
    pub fn last_form(&self) -> Vec<(String, String)> {
        self.auth
            .last()
            .body
            .and_then(|body| serde_urlencoded::from_str(&body).ok())
            .unwrap_or_default()
    }
}
