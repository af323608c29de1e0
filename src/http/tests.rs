//! Tests for the HTTP client module

use super::*;
use crate::auth::AuthConfig;
use crate::error::{ApiErrorKind, Error};
use crate::types::{Method, LIVE_BASE_URL};
use pretty_assertions::assert_eq;
use serde_json::json;
use std::time::Duration;
use test_case::test_case;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> HttpClient {
    let config = HttpClientConfig::builder()
        .base_url(server.uri())
        .user_agent("dodopayments-test/1.0")
        .build();
    HttpClient::with_auth(config, AuthConfig::bearer("sk_test_123")).unwrap()
}

// ============================================================================
// Config Tests
// ============================================================================

#[test]
fn test_http_client_config_default() {
    let config = HttpClientConfig::default();
    assert_eq!(config.base_url, LIVE_BASE_URL);
    assert_eq!(config.timeout, Duration::from_secs(60));
    assert!(config.rate_limit.is_none());
    assert!(config.user_agent.starts_with("dodopayments-rust/"));
}

#[test]
fn test_http_client_config_builder() {
    let config = HttpClientConfig::builder()
        .base_url("https://test.dodopayments.com")
        .timeout(Duration::from_secs(5))
        .rate_limit(RateLimiterConfig::new(2, 2))
        .header("X-Custom", "value")
        .user_agent("test-agent/1.0")
        .build();

    assert_eq!(config.base_url, "https://test.dodopayments.com");
    assert_eq!(config.timeout, Duration::from_secs(5));
    assert_eq!(config.rate_limit, Some(RateLimiterConfig::new(2, 2)));
    assert_eq!(
        config.default_headers.get("X-Custom"),
        Some(&"value".to_string())
    );
    assert_eq!(config.user_agent, "test-agent/1.0");
}

#[test_case("ftp://files.example.com" ; "unsupported scheme")]
#[test_case("not a url" ; "unparseable")]
fn test_invalid_base_url_rejected(base_url: &str) {
    let config = HttpClientConfig::builder().base_url(base_url).build();
    assert!(HttpClient::with_config(config).is_err());
}

#[test]
fn test_debug_hides_api_key() {
    let config = HttpClientConfig::builder()
        .base_url("https://test.dodopayments.com")
        .rate_limit(RateLimiterConfig::default())
        .build();
    let client = HttpClient::with_auth(config, AuthConfig::bearer("sk_live_secret")).unwrap();

    let debug = format!("{client:?}");
    assert!(debug.contains("test.dodopayments.com"));
    assert!(debug.contains("has_authenticator: true"));
    assert!(!debug.contains("sk_live_secret"));
    assert!(client.has_rate_limiter());
}

// ============================================================================
// Request Descriptor Tests
// ============================================================================

#[test]
fn test_query_pairs_flatten() {
    let request = RequestDescriptor::get("/payments")
        .query("page_size", 10)
        .query("status", json!(["succeeded", "failed"]))
        .query("filter", json!({"currency": "USD", "min": 5}))
        .query("customer_id", json!(null))
        .query("archived", false);

    let mut pairs = request.query_pairs();
    pairs.sort_by(|a, b| a.0.cmp(&b.0));
    assert_eq!(
        pairs,
        vec![
            ("archived".to_string(), "false".to_string()),
            ("filter[currency]".to_string(), "USD".to_string()),
            ("filter[min]".to_string(), "5".to_string()),
            ("page_size".to_string(), "10".to_string()),
            ("status".to_string(), "succeeded".to_string()),
            ("status".to_string(), "failed".to_string()),
        ]
    );
}

#[test]
fn test_merge_query_is_recursive_and_copies() {
    let original = RequestDescriptor::get("/webhooks")
        .query("foo", "bar")
        .query("filter", json!({"a": 1, "b": 2}));

    let mut patch = crate::types::JsonObject::new();
    patch.insert("iterator".into(), json!("it_2"));
    patch.insert("filter".into(), json!({"b": 3}));
    let next = original.merge_query(&patch);

    assert_eq!(next.query["foo"], json!("bar"));
    assert_eq!(next.query["iterator"], json!("it_2"));
    assert_eq!(next.query["filter"], json!({"a": 1, "b": 3}));
    assert!(original.query.get("iterator").is_none());
}

#[test]
fn test_query_u64_reads_numbers_and_strings() {
    let request = RequestDescriptor::get("/payments")
        .query("page_number", 3)
        .query("page_size", "25")
        .query("status", "active");

    assert_eq!(request.query_u64("page_number"), Some(3));
    assert_eq!(request.query_u64("page_size"), Some(25));
    assert_eq!(request.query_u64("status"), None);
    assert_eq!(request.query_u64("missing"), None);
}

#[test]
fn test_validate_rejects_get_with_body() {
    let request = RequestDescriptor::get("/payments").json(json!({"a": 1}));
    assert!(matches!(request.validate(), Err(Error::InvalidParams { .. })));

    let empty = RequestDescriptor::new(Method::DELETE, "");
    assert!(empty.validate().is_err());
}

#[test]
fn test_build_url_joins_base_and_path() {
    let config = HttpClientConfig::builder()
        .base_url("https://test.dodopayments.com/")
        .build();
    let client = HttpClient::with_config(config).unwrap();

    let url = client
        .build_url(&RequestDescriptor::get("/payments").query("page_size", 2))
        .unwrap();
    assert_eq!(
        url.as_str(),
        "https://test.dodopayments.com/payments?page_size=2"
    );
}

// ============================================================================
// Request/Response Tests
// ============================================================================

#[tokio::test]
async fn test_get_sends_auth_and_default_headers() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/payments/pay_1"))
        .and(header("Authorization", "Bearer sk_test_123"))
        .and(header("Accept", "application/json"))
        .and(header("User-Agent", "dodopayments-test/1.0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"payment_id": "pay_1"})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let value: serde_json::Value = client
        .send_json(&RequestDescriptor::get("/payments/pay_1"))
        .await
        .unwrap();

    assert_eq!(value["payment_id"], "pay_1");
}

#[tokio::test]
async fn test_get_sends_query_params() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/payments"))
        .and(query_param("page_number", "1"))
        .and(query_param("status", "succeeded"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"items": []})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let request = RequestDescriptor::get("/payments")
        .query_params(&json!({"page_number": 1, "status": "succeeded", "customer_id": null}))
        .unwrap();
    let url = client.build_url(&request).unwrap();
    assert!(!url.as_str().contains("customer_id"));

    client.send_empty(&request).await.unwrap();
}

#[tokio::test]
async fn test_post_sends_json_body_and_request_headers() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/refunds"))
        .and(header("Idempotency-Key", "idem-1"))
        .and(body_json(json!({"payment_id": "pay_1"})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"refund_id": "ref_1"})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let request = RequestDescriptor::post("/refunds")
        .header("Idempotency-Key", "idem-1")
        .json(json!({"payment_id": "pay_1"}));
    let value: serde_json::Value = client.send_json(&request).await.unwrap();

    assert_eq!(value["refund_id"], "ref_1");
}

#[tokio::test]
async fn test_send_raw_returns_pdf_bytes() {
    let server = MockServer::start().await;
    let pdf = b"%PDF-1.7 fake".to_vec();

    Mock::given(method("GET"))
        .and(path("/invoices/payments/pay_1"))
        .and(header("Accept", "application/pdf"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("Content-Type", "application/pdf")
                .set_body_bytes(pdf.clone()),
        )
        .mount(&server)
        .await;

    let client = client_for(&server);
    let request =
        RequestDescriptor::get("/invoices/payments/pay_1").header("Accept", "application/pdf");
    let bytes = client.send_raw(&request).await.unwrap();

    assert_eq!(bytes.as_ref(), pdf.as_slice());
}

#[test_case(404, ApiErrorKind::NotFound ; "not found")]
#[test_case(422, ApiErrorKind::UnprocessableEntity ; "unprocessable")]
#[test_case(429, ApiErrorKind::RateLimit ; "rate limit")]
#[test_case(500, ApiErrorKind::InternalServer ; "internal")]
#[test_case(599, ApiErrorKind::ApiStatus ; "unregistered status")]
#[tokio::test]
async fn test_error_status_mapping(status: u16, expected: ApiErrorKind) {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/payments/pay_1"))
        .respond_with(
            ResponseTemplate::new(status)
                .set_body_json(json!({"code": "E1", "message": "something broke"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client
        .send(&RequestDescriptor::get("/payments/pay_1"))
        .await
        .unwrap_err();

    assert_eq!(err.kind(), Some(expected));
    assert_eq!(err.status(), Some(status));
    let Error::Api(api) = err else {
        panic!("expected API error");
    };
    assert_eq!(api.message(), Some("something broke"));
    assert_eq!(api.code(), Some("E1"));
    assert_eq!(api.request.path, "/payments/pay_1");
    assert!(api.url.ends_with("/payments/pay_1"));
}

#[tokio::test]
async fn test_non_json_error_body_kept_raw() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/webhooks/wh_1"))
        .respond_with(ResponseTemplate::new(502).set_body_string("bad gateway"))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client
        .send(&RequestDescriptor::new(Method::DELETE, "/webhooks/wh_1"))
        .await
        .unwrap_err();

    let Error::Api(api) = err else {
        panic!("expected API error");
    };
    assert_eq!(api.kind, ApiErrorKind::InternalServer);
    assert!(api.body.is_none());
    assert_eq!(api.message(), Some("bad gateway"));
}

#[tokio::test]
async fn test_decode_error_names_endpoint() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/customers/cus_1"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client
        .send_json::<serde_json::Value>(&RequestDescriptor::get("/customers/cus_1"))
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Decode { .. }));
    assert!(err.to_string().contains("GET /customers/cus_1"));
}

#[tokio::test]
async fn test_connection_error() {
    // Bind and drop a listener so the port is closed
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let config = HttpClientConfig::builder()
        .base_url(format!("http://{addr}"))
        .timeout(Duration::from_secs(2))
        .build();
    let client = HttpClient::with_config(config).unwrap();

    let err = client
        .send(&RequestDescriptor::get("/payments"))
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Connection(_)));
    assert!(err.kind().is_none());
    assert!(err.is_retryable());
}

#[tokio::test]
async fn test_truncated_error_body_keeps_status() {
    use tokio::io::{AsyncReadExt, AsyncWriteExt};

    // Promise 64 body bytes, send 7, then hang up
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut buf = [0u8; 1024];
        let _ = socket.read(&mut buf).await;
        let _ = socket
            .write_all(b"HTTP/1.1 503 Service Unavailable\r\nContent-Length: 64\r\n\r\npartial")
            .await;
        let _ = socket.shutdown().await;
    });

    let config = HttpClientConfig::builder()
        .base_url(format!("http://{addr}"))
        .timeout(Duration::from_secs(5))
        .build();
    let client = HttpClient::with_config(config).unwrap();

    let err = client
        .send(&RequestDescriptor::get("/payments"))
        .await
        .unwrap_err();

    assert_eq!(err.kind(), Some(ApiErrorKind::InternalServer));
    let Error::Api(api) = err else {
        panic!("expected API error");
    };
    assert_eq!(api.status, 503);
    assert!(api.body.is_none());
}

#[tokio::test]
async fn test_rate_limited_client_still_sends() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/payouts"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"items": []})))
        .expect(2)
        .mount(&server)
        .await;

    let config = HttpClientConfig::builder()
        .base_url(server.uri())
        .rate_limit(RateLimiterConfig::new(100, 2))
        .build();
    let client = HttpClient::with_config(config).unwrap();

    for _ in 0..2 {
        client
            .send_empty(&RequestDescriptor::get("/payouts"))
            .await
            .unwrap();
    }
}
