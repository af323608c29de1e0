//! Tests for webhook receipt

use super::*;
use crate::models::{IntentStatus, WebhookEventType};
use reqwest::header::{HeaderMap, HeaderValue};
use serde_json::json;

fn payment_payload() -> serde_json::Value {
    json!({
        "business_id": "bus_1",
        "timestamp": "2025-01-02T03:04:05Z",
        "type": "payment.succeeded",
        "data": {
            "payload_type": "Payment",
            "payment_id": "pay_1",
            "business_id": "bus_1",
            "total_amount": 1500,
            "currency": "USD",
            "status": "succeeded",
            "customer": {"customer_id": "cus_1", "email": "a@example.com", "name": "A"},
            "billing": {"country": "US"},
            "created_at": "2025-01-02T03:04:00Z"
        }
    })
}

#[test]
fn test_parse_payment_payload() {
    let body = serde_json::to_vec(&payment_payload()).unwrap();
    let payload = parse_payload(&body).unwrap();

    assert_eq!(payload.business_id, "bus_1");
    assert_eq!(payload.event_type, WebhookEventType::PaymentSucceeded);
    let payment = payload.data.as_payment().unwrap();
    assert_eq!(payment.payment_id, "pay_1");
    assert_eq!(payment.status, Some(IntentStatus::Succeeded));
    assert!(payload.is_consistent());
}

#[test]
fn test_unknown_payload_type() {
    let body = json!({
        "business_id": "bus_1",
        "timestamp": "2025-01-02T03:04:05Z",
        "type": "credit.added",
        "data": {"payload_type": "CreditGrant", "id": "cg_1"}
    });
    let payload = parse_payload(body.to_string().as_bytes()).unwrap();

    assert_eq!(payload.data, WebhookData::Unknown);
    assert!(!payload.event_type.is_known());
    assert_eq!(payload.event_type.as_str(), "credit.added");
    assert!(!payload.is_consistent());
}

#[test]
fn test_mismatched_namespace_is_inconsistent() {
    let mut body = payment_payload();
    body["type"] = json!("refund.succeeded");
    let payload = parse_payload(body.to_string().as_bytes()).unwrap();

    assert!(!payload.is_consistent());
}

#[test]
fn test_invalid_payload_is_decode_error() {
    let err = parse_payload(b"{\"business_id\": 1}").unwrap_err();
    assert!(matches!(err, crate::error::Error::Decode { .. }));
}

#[test]
fn test_headers_extracted() {
    let mut headers = HeaderMap::new();
    headers.insert(WEBHOOK_ID, HeaderValue::from_static("msg_1"));
    headers.insert(
        WEBHOOK_SIGNATURE,
        HeaderValue::from_static("v1,abc v1,def"),
    );
    headers.insert(WEBHOOK_TIMESTAMP, HeaderValue::from_static("1735787045"));

    let parsed = WebhookHeaders::from_headers(&headers).unwrap();
    assert_eq!(parsed.id, "msg_1");
    assert_eq!(parsed.signatures().collect::<Vec<_>>(), vec!["v1,abc", "v1,def"]);
    assert_eq!(
        parsed.sent_at().unwrap().to_rfc3339(),
        "2025-01-02T03:04:05+00:00"
    );
}

#[test]
fn test_missing_header_is_error() {
    let mut headers = HeaderMap::new();
    headers.insert(WEBHOOK_ID, HeaderValue::from_static("msg_1"));

    let err = WebhookHeaders::from_headers(&headers).unwrap_err();
    assert!(err.to_string().contains(WEBHOOK_SIGNATURE));
}
