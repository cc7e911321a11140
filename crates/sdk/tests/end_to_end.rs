//! End-to-end tests against a mock HTTP server.

#![allow(clippy::unwrap_used)]

use mizban::types::cdn::{CreateDnsRecordRequest, DnsRecordType};
use mizban::{ClientConfig, Empty, HttpMethod, Language, MizbanCloud, RequestOptions};
use pretty_assertions::assert_eq;
use serde_json::json;
use std::time::Duration;
use tracing_subscriber::EnvFilter;
use wiremock::matchers::{body_string, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const WALLET: &str = "/api/admin-temp-v1/financial/wallet";

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn config_for(server: &MockServer) -> ClientConfig {
    ClientConfig::new()
        .with_auth_base_url(server.uri())
        .with_cdn_base_url(server.uri())
        .with_cloud_base_url(server.uri())
}

fn wallet_body() -> serde_json::Value {
    json!({
        "success": true,
        "message": "",
        "data": { "balance": 125_000.0, "currency": "IRT" }
    })
}

#[tokio::test]
async fn test_session_headers_injected() {
    init_tracing();
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(WALLET))
        .and(header("authorization", "Bearer T1"))
        .and(header("accept-language", "fa"))
        .and(header("accept", "application/json"))
        .and(header("x-custom-header", "test-value"))
        .respond_with(ResponseTemplate::new(200).set_body_json(wallet_body()))
        .expect(1)
        .mount(&server)
        .await;

    let config = config_for(&server)
        .with_language(Language::Fa)
        .with_header("X-Custom-Header", "test-value");
    let mizban = MizbanCloud::new(&config).unwrap();
    mizban.auth.set_api_token("T1");

    let wallet = mizban.auth.get_wallet().await.unwrap().into_data();
    assert_eq!(wallet.currency.as_deref(), Some("IRT"));
}

#[tokio::test]
async fn test_token_round_trip() {
    init_tracing();
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(WALLET))
        .respond_with(ResponseTemplate::new(200).set_body_json(wallet_body()))
        .expect(3)
        .mount(&server)
        .await;

    let mizban = MizbanCloud::new(&config_for(&server)).unwrap();

    mizban.auth.get_wallet().await.unwrap();
    mizban.set_token(Some("T1".to_string()));
    mizban.auth.get_wallet().await.unwrap();
    mizban.clear_token();
    mizban.auth.get_wallet().await.unwrap();

    let seen: Vec<Option<String>> = server
        .received_requests()
        .await
        .unwrap()
        .iter()
        .map(|r| {
            r.headers
                .get("authorization")
                .map(|v| v.to_str().unwrap().to_string())
        })
        .collect();
    assert_eq!(seen, vec![None, Some("Bearer T1".to_string()), None]);
}

#[tokio::test]
async fn test_language_switch_applies_to_next_request() {
    init_tracing();
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/static/datacenters"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"success": true, "data": []})),
        )
        .mount(&server)
        .await;

    let mizban = MizbanCloud::new(&config_for(&server)).unwrap();
    mizban.statics.list_datacenters().await.unwrap();
    mizban.set_language(Language::Fa);
    mizban.statics.list_datacenters().await.unwrap();

    let languages: Vec<String> = server
        .received_requests()
        .await
        .unwrap()
        .iter()
        .map(|r| r.headers["accept-language"].to_str().unwrap().to_string())
        .collect();
    assert_eq!(languages, vec!["en".to_string(), "fa".to_string()]);
}

#[tokio::test]
async fn test_rejection_inside_200() {
    init_tracing();
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(WALLET))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": false,
            "message": "Insufficient permissions",
            "code": "E_PERM"
        })))
        .mount(&server)
        .await;

    let mizban = MizbanCloud::new(&config_for(&server)).unwrap();
    let error = mizban.auth.get_wallet().await.unwrap_err();

    assert_eq!(error.status_code(), 200);
    assert_eq!(error.message(), "Insufficient permissions");
    assert!(error.is_rejection());
    assert_eq!(error.response().extra.get("code"), Some(&json!("E_PERM")));
}

#[tokio::test]
async fn test_validation_failure() {
    init_tracing();
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/cdn/ng/domains/7/dns"))
        .respond_with(ResponseTemplate::new(422).set_body_json(json!({
            "success": false,
            "message": "Validation failed",
            "invalidFields": ["value"],
            "missing_fields": ["ttl"]
        })))
        .mount(&server)
        .await;

    let mizban = MizbanCloud::new(&config_for(&server)).unwrap();
    let request = CreateDnsRecordRequest::new("www", DnsRecordType::A, "not-an-ip");
    let error = mizban.cdn.add_dns_record(7, &request).await.unwrap_err();

    assert_eq!(error.status_code(), 422);
    assert_eq!(error.message(), "Validation failed");
    assert_eq!(error.invalid_fields(), Some(&["value".to_string()][..]));
    assert_eq!(error.missing_fields(), Some(&["ttl".to_string()][..]));
    assert_eq!(error.fields(), None);
}

#[tokio::test]
async fn test_form_body_sent() {
    init_tracing();
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/cdn/ng/domains/7/dns"))
        .and(header("content-type", "application/x-www-form-urlencoded"))
        .and(body_string("name=www&type=A&value=1.2.3.4"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "success": true,
            "data": {
                "id": 3,
                "domain_id": 7,
                "name": "www",
                "type": "A",
                "value": "1.2.3.4",
                "ttl": 120,
                "proxied": false,
                "created_at": "2024-01-01",
                "updated_at": "2024-01-01"
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let mizban = MizbanCloud::new(&config_for(&server)).unwrap();
    let request = CreateDnsRecordRequest::new("www", DnsRecordType::A, "1.2.3.4");
    let record = mizban
        .cdn
        .add_dns_record(7, &request)
        .await
        .unwrap()
        .into_data();

    assert_eq!(record.id, 3);
}

#[tokio::test]
async fn test_custom_call_with_options() {
    init_tracing();
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/custom"))
        .and(query_param("page", "2"))
        .and(header("x-trace", "abc"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let mizban = MizbanCloud::new(&config_for(&server)).unwrap();
    let options = RequestOptions::new()
        .with_param("page", 2)
        .with_header("X-Trace", "abc");

    let response = mizban
        .client()
        .cloud_request::<Empty>(HttpMethod::Get, "/custom", None, Some(options))
        .await
        .unwrap();
    assert!(response.success);
}

#[tokio::test]
async fn test_timeout_is_408() {
    init_tracing();
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(wallet_body())
                .set_delay(Duration::from_millis(800)),
        )
        .mount(&server)
        .await;

    let mizban = MizbanCloud::new(&config_for(&server).with_timeout_ms(50)).unwrap();
    let error = mizban.auth.get_wallet().await.unwrap_err();

    assert_eq!(error.status_code(), 408);
    assert_eq!(error.message(), "Request timeout");
    assert!(error.is_timeout());
}

#[tokio::test]
async fn test_zero_timeout_waits_for_slow_response() {
    init_tracing();
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(wallet_body())
                .set_delay(Duration::from_millis(200)),
        )
        .mount(&server)
        .await;

    let mizban = MizbanCloud::new(&config_for(&server).with_timeout_ms(0)).unwrap();
    let wallet = mizban.auth.get_wallet().await.unwrap();
    assert!(wallet.success);

    let mizban = MizbanCloud::new(&config_for(&server).with_timeout_ms(50)).unwrap();
    let options = RequestOptions::new().with_timeout_ms(0);
    let response = mizban
        .client()
        .auth_request::<Empty>(HttpMethod::Get, WALLET, None, Some(options))
        .await
        .unwrap();
    assert!(response.success);
}

#[tokio::test]
async fn test_validation_failure_with_null_message() {
    init_tracing();
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(WALLET))
        .respond_with(ResponseTemplate::new(422).set_body_json(json!({
            "success": false,
            "message": null,
            "missing_fields": ["name"],
        })))
        .mount(&server)
        .await;

    let mizban = MizbanCloud::new(&config_for(&server)).unwrap();
    let error = mizban.auth.get_wallet().await.unwrap_err();

    assert_eq!(error.status_code(), 422);
    assert_eq!(error.missing_fields(), Some(&["name".to_string()][..]));
    assert!(!error.is_timeout());
}

#[tokio::test]
async fn test_refused_connection_is_status_0() {
    init_tracing();
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let address = format!("http://{}", listener.local_addr().unwrap());
    drop(listener);

    let config = ClientConfig::new().with_auth_base_url(address);
    let mizban = MizbanCloud::new(&config).unwrap();
    let error = mizban.auth.get_wallet().await.unwrap_err();

    assert_eq!(error.status_code(), 0);
    assert!(error.is_network_error());
    assert!(!error.message().is_empty());
}

#[tokio::test]
async fn test_server_error_without_body() {
    init_tracing();
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/api/v1/cloud/servers/5"))
        .respond_with(ResponseTemplate::new(502).set_body_string("<html>bad gateway</html>"))
        .mount(&server)
        .await;

    let mizban = MizbanCloud::new(&config_for(&server)).unwrap();
    let error = mizban.cloud.delete_server(5).await.unwrap_err();

    assert_eq!(error.status_code(), 502);
    assert_eq!(error.message(), "An error occurred");
    assert_eq!(error.response().message, "Unknown error");
}
