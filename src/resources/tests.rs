//! Tests for the resource services

use crate::client::DodoPayments;
use crate::codec::Omittable;
use crate::config::ClientConfig;
use crate::error::{ApiErrorKind, Error};
use crate::models::*;
use crate::pagination::Page;
use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> DodoPayments {
    let config = ClientConfig::builder()
        .api_key("sk_test_123")
        .base_url(server.uri())
        .build()
        .unwrap();
    DodoPayments::new(config).unwrap()
}

fn customer_json() -> serde_json::Value {
    json!({
        "customer_id": "cus_1",
        "business_id": "bus_1",
        "email": "ada@example.com",
        "name": "Ada",
        "created_at": "2025-01-01T00:00:00Z"
    })
}

fn webhook_json(id: &str) -> serde_json::Value {
    json!({
        "id": id,
        "url": "https://example.com/hooks",
        "created_at": "2025-01-01T00:00:00Z",
        "updated_at": "2025-01-02T00:00:00Z",
        "filter_types": ["payment.succeeded"]
    })
}

fn meter_json() -> serde_json::Value {
    json!({
        "id": "mtr_1",
        "business_id": "bus_1",
        "name": "API calls",
        "event_name": "api.call",
        "measurement_unit": "calls",
        "aggregation": {"type": "count"},
        "created_at": "2025-01-01T00:00:00Z",
        "updated_at": "2025-01-01T00:00:00Z"
    })
}

// ============================================================================
// Payments
// ============================================================================

#[tokio::test]
async fn test_payments_list_sends_filters() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/payments"))
        .and(query_param("page_size", "2"))
        .and(query_param("status", "succeeded"))
        .and(header("Authorization", "Bearer sk_test_123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": [{
                "payment_id": "pay_1",
                "total_amount": 1000,
                "currency": "EUR",
                "status": "succeeded",
                "customer": {"customer_id": "cus_1", "email": "ada@example.com", "name": "Ada"},
                "created_at": "2025-01-01T00:00:00Z"
            }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let page = client_for(&server)
        .payments()
        .list(
            &ListPaymentsParams::new()
                .page_size(2)
                .status(IntentStatus::Succeeded),
        )
        .await
        .unwrap();

    assert_eq!(page.items().len(), 1);
    assert_eq!(page.items()[0].currency, Currency::Eur);
    // fewer items than page_size is not a last-page signal
    assert!(page.has_next_page());
    assert_eq!(
        page.next_page_request().unwrap().query_u64("page_number"),
        Some(1)
    );
}

#[tokio::test]
async fn test_payments_create_posts_body() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/payments"))
        .and(body_json(json!({
            "billing": {"country": "US"},
            "customer": {"customer_id": "cus_1"},
            "product_cart": [{"product_id": "prd_1", "quantity": 1}],
            "payment_link": true
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "payment_id": "pay_1",
            "client_secret": "cs_1",
            "customer": {"customer_id": "cus_1", "email": "ada@example.com", "name": "Ada"},
            "total_amount": 1000,
            "payment_link": "https://checkout.example.com/pay_1"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let params = CreatePaymentParams::new(
        BillingAddress::new(CountryCode::Us),
        CustomerRequest::existing("cus_1"),
    )
    .product("prd_1", 1)
    .payment_link(true);

    let created = client_for(&server)
        .payments()
        .create(&params)
        .await
        .unwrap();
    assert_eq!(created.payment_id, "pay_1");
    assert_eq!(
        created.payment_link.as_deref(),
        Some("https://checkout.example.com/pay_1")
    );
}

#[tokio::test]
async fn test_payment_id_is_escaped_in_path() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/payments/pay%2F1/line-items"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "currency": "USD",
            "items": [{"items_id": "li_1", "amount": 500, "refundable_amount": 500}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let items = client_for(&server)
        .payments()
        .line_items("pay/1")
        .await
        .unwrap();
    assert_eq!(items.items[0].items_id, "li_1");
    assert_eq!(items.items[0].tax, 0);
}

#[tokio::test]
async fn test_empty_id_is_rejected_before_sending() {
    let server = MockServer::start().await;
    let err = client_for(&server)
        .payments()
        .retrieve("")
        .await
        .unwrap_err();
    assert!(matches!(err, Error::InvalidParams { .. }));
}

// ============================================================================
// Subscriptions
// ============================================================================

#[tokio::test]
async fn test_subscription_update_sends_null_and_omits() {
    let server = MockServer::start().await;

    Mock::given(method("PATCH"))
        .and(path("/subscriptions/sub_1"))
        .and(body_json(json!({"cancel_at_next_billing_date": true, "tax_id": null})))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "code": "NOT_FOUND",
            "message": "Subscription not found"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let params = UpdateSubscriptionParams {
        cancel_at_next_billing_date: Omittable::Value(true),
        tax_id: Omittable::Null,
        ..Default::default()
    };
    let err = client_for(&server)
        .subscriptions()
        .update("sub_1", &params)
        .await
        .unwrap_err();

    assert_eq!(err.kind(), Some(ApiErrorKind::NotFound));
    assert!(err.to_string().contains("Subscription not found"));
}

#[tokio::test]
async fn test_subscription_change_plan_and_charge() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/subscriptions/sub_1/change-plan"))
        .and(body_json(json!({
            "product_id": "prd_2",
            "quantity": 1,
            "proration_billing_mode": "prorated_immediately"
        })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/subscriptions/sub_1/charge"))
        .and(body_json(json!({"product_price": 2500})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"payment_id": "pay_9"})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    client
        .subscriptions()
        .change_plan(
            "sub_1",
            &ChangePlanParams {
                product_id: "prd_2".into(),
                quantity: 1,
                proration_billing_mode: ProrationBillingMode::ProratedImmediately,
            },
        )
        .await
        .unwrap();

    let charged = client
        .subscriptions()
        .charge(
            "sub_1",
            &ChargeSubscriptionParams {
                product_price: 2500,
                product_currency: None,
                product_description: None,
                adaptive_currency_fees_inclusive: None,
                metadata: Metadata::new(),
            },
        )
        .await
        .unwrap();
    assert_eq!(charged.payment_id, "pay_9");
}

// ============================================================================
// Invoices
// ============================================================================

#[tokio::test]
async fn test_invoice_downloads_pdf() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/invoices/refunds/ref_1"))
        .and(header("Accept", "application/pdf"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("Content-Type", "application/pdf")
                .set_body_bytes(b"%PDF-1.4".to_vec()),
        )
        .expect(1)
        .mount(&server)
        .await;

    let pdf = client_for(&server).invoices().refund("ref_1").await.unwrap();
    assert!(pdf.starts_with(b"%PDF"));
}

// ============================================================================
// Customers and Wallets
// ============================================================================

#[tokio::test]
async fn test_customer_create_and_portal_session() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/customers"))
        .and(body_json(json!({"email": "ada@example.com", "name": "Ada"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(customer_json()))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/customers/cus_1/customer-portal/session"))
        .and(query_param("send_email", "true"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"link": "https://portal/x"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let customer = client
        .customers()
        .create(&CreateCustomerParams::new("ada@example.com", "Ada"))
        .await
        .unwrap();
    assert_eq!(customer.customer_id, "cus_1");
    assert!(customer.phone_number.is_none());

    let session = client
        .customers()
        .create_portal_session(&customer.customer_id, Some(true))
        .await
        .unwrap();
    assert_eq!(session.link, "https://portal/x");
}

#[tokio::test]
async fn test_wallet_ledger_entries_are_cursor_paginated() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/customers/cus_1/wallets/ledger-entries"))
        .and(query_param("currency", "USD"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": [{
                "id": "le_1",
                "business_id": "bus_1",
                "customer_id": "cus_1",
                "currency": "USD",
                "amount": 100,
                "before_balance": 0,
                "after_balance": 100,
                "event_type": "merchant_adjustment",
                "is_credit": true,
                "created_at": "2025-01-01T00:00:00Z"
            }],
            "iterator": "it_2",
            "done": true
        })))
        .expect(1)
        .mount(&server)
        .await;

    let page = client_for(&server)
        .customers()
        .wallets()
        .ledger_entries(
            "cus_1",
            &ListLedgerEntriesParams {
                currency: Some(Currency::Usd),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(page.items()[0].event_type, LedgerEventType::MerchantAdjustment);
    assert_eq!(page.iterator(), Some("it_2"));
    let next = page.next_page_request().unwrap();
    assert_eq!(next.query["iterator"], json!("it_2"));
    assert_eq!(next.query["currency"], json!("USD"));
}

#[tokio::test]
async fn test_wallet_ledger_entry_create() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/customers/cus_1/wallets/ledger-entries"))
        .and(body_json(json!({"amount": 100, "currency": "USD", "entry_type": "debit"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "customer_id": "cus_1",
            "currency": "USD",
            "balance": 0,
            "created_at": "2025-01-01T00:00:00Z",
            "updated_at": "2025-01-02T00:00:00Z"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let wallet = client_for(&server)
        .customers()
        .wallets()
        .create_ledger_entry(
            "cus_1",
            &CreateLedgerEntryParams {
                amount: 100,
                currency: Currency::Usd,
                entry_type: LedgerEntryType::Debit,
                idempotency_key: Omittable::Omitted,
                reason: Omittable::Omitted,
            },
        )
        .await
        .unwrap();
    assert_eq!(wallet.balance, 0);
}

// ============================================================================
// Refunds, Disputes, Payouts
// ============================================================================

#[tokio::test]
async fn test_refund_create_unknown_status() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/refunds"))
        .and(body_json(json!({"payment_id": "pay_1", "reason": "duplicate"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "refund_id": "ref_1",
            "payment_id": "pay_1",
            "business_id": "bus_1",
            "status": "queued_for_bank",
            "created_at": "2025-01-01T00:00:00Z"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let refund = client_for(&server)
        .refunds()
        .create(&CreateRefundParams::new("pay_1").reason("duplicate"))
        .await
        .unwrap();
    assert_eq!(refund.status, RefundStatus::Unknown("queued_for_bank".into()));
}

#[tokio::test]
async fn test_dispute_and_payout_lists() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/disputes"))
        .and(query_param("dispute_status", "dispute_opened"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": [{
                "dispute_id": "dsp_1",
                "payment_id": "pay_1",
                "business_id": "bus_1",
                "amount": "10.00",
                "currency": "USD",
                "dispute_status": "dispute_opened",
                "dispute_stage": "dispute",
                "created_at": "2025-01-01T00:00:00Z"
            }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/payouts"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"items": null})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let disputes = client
        .disputes()
        .list(&ListDisputesParams {
            dispute_status: Some(DisputeStatus::Opened),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(disputes.items()[0].dispute_stage, DisputeStage::Dispute);

    let payouts = client
        .payouts()
        .list(&ListPayoutsParams::default())
        .await
        .unwrap();
    assert!(payouts.items().is_empty());
    assert!(!payouts.has_next_page());
}

// ============================================================================
// Licenses
// ============================================================================

#[tokio::test]
async fn test_license_activate_validate_deactivate() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/licenses/activate"))
        .and(body_json(json!({"license_key": "LK-1", "name": "laptop"})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": "lki_1",
            "business_id": "bus_1",
            "license_key_id": "lk_1",
            "name": "laptop",
            "created_at": "2025-01-01T00:00:00Z"
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/licenses/validate"))
        .and(body_json(json!({"license_key": "LK-1", "license_key_instance_id": "lki_1"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"valid": true})))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/licenses/deactivate"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let licenses = client_for(&server).licenses();
    let instance = licenses
        .activate(&ActivateLicenseParams {
            license_key: "LK-1".into(),
            name: "laptop".into(),
        })
        .await
        .unwrap();

    let result = licenses
        .validate(&ValidateLicenseParams {
            license_key: "LK-1".into(),
            license_key_instance_id: Some(instance.id.clone()),
        })
        .await
        .unwrap();
    assert!(result.valid);

    licenses
        .deactivate(&DeactivateLicenseParams {
            license_key: "LK-1".into(),
            license_key_instance_id: instance.id,
        })
        .await
        .unwrap();
}

#[tokio::test]
async fn test_license_key_update_clears_expiry() {
    let server = MockServer::start().await;

    Mock::given(method("PATCH"))
        .and(path("/license_keys/lk_1"))
        .and(body_json(json!({"activations_limit": 5, "expires_at": null})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "lk_1",
            "business_id": "bus_1",
            "customer_id": "cus_1",
            "key": "LK-1",
            "product_id": "prd_1",
            "payment_id": "pay_1",
            "status": "active",
            "instances_count": 1,
            "activations_limit": 5,
            "created_at": "2025-01-01T00:00:00Z"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let key = client_for(&server)
        .license_keys()
        .update(
            "lk_1",
            &UpdateLicenseKeyParams {
                activations_limit: Omittable::Value(5),
                expires_at: Omittable::Null,
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(key.status, LicenseKeyStatus::Active);
    assert!(key.expires_at.is_none());
}

// ============================================================================
// Webhooks
// ============================================================================

#[tokio::test]
async fn test_webhook_list_is_cursor_paginated() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/webhooks"))
        .and(query_param("limit", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": [webhook_json("wh_1")],
            "iterator": "it_2",
            "done": true
        })))
        .expect(1)
        .mount(&server)
        .await;

    let page = client_for(&server)
        .webhooks()
        .list(&ListWebhooksParams {
            limit: Some(1),
            iterator: None,
        })
        .await
        .unwrap();

    assert_eq!(page.items()[0].id, "wh_1");
    assert_eq!(
        page.items()[0].filter_types,
        Some(vec![WebhookEventType::PaymentSucceeded])
    );
    assert!(page.has_next_page());
}

#[tokio::test]
async fn test_webhook_create_delete_and_secret() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/webhooks"))
        .and(body_json(json!({
            "url": "https://example.com/hooks",
            "filter_types": ["payment.succeeded"]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(webhook_json("wh_1")))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/webhooks/wh_1/secret"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"secret": "whsec_1"})))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("DELETE"))
        .and(path("/webhooks/wh_1"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let webhooks = client_for(&server).webhooks();
    let endpoint = webhooks
        .create(
            &CreateWebhookParams::new("https://example.com/hooks")
                .filter(WebhookEventType::PaymentSucceeded),
        )
        .await
        .unwrap();

    let secret = webhooks.secret(&endpoint.id).await.unwrap();
    assert_eq!(secret.secret, "whsec_1");

    webhooks.delete(&endpoint.id).await.unwrap();
}

// ============================================================================
// Meters and Usage Events
// ============================================================================

#[tokio::test]
async fn test_meter_create_archive_unarchive() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/meters"))
        .and(body_json(json!({
            "name": "API calls",
            "event_name": "api.call",
            "measurement_unit": "calls",
            "aggregation": {"type": "count"}
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(meter_json()))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("DELETE"))
        .and(path("/meters/mtr_1"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/meters/mtr_1/unarchive"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let meters = client_for(&server).meters();
    let meter = meters
        .create(&CreateMeterParams {
            name: "API calls".into(),
            event_name: "api.call".into(),
            measurement_unit: "calls".into(),
            aggregation: MeterAggregation {
                kind: AggregationType::Count,
                key: None,
            },
            description: None,
            filter: None,
        })
        .await
        .unwrap();
    assert_eq!(meter.aggregation.kind, AggregationType::Count);

    meters.archive(&meter.id).await.unwrap();
    meters.unarchive(&meter.id).await.unwrap();
}

#[tokio::test]
async fn test_ingest_events() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/events/ingest"))
        .and(body_json(json!({
            "events": [{
                "event_id": "evt_1",
                "customer_id": "cus_1",
                "event_name": "api.call",
                "metadata": {"tokens": 12}
            }]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ingested_count": 1})))
        .expect(1)
        .mount(&server)
        .await;

    let mut metadata = std::collections::HashMap::new();
    metadata.insert("tokens".to_string(), MetadataValue::from(12));
    let params = IngestEventsParams {
        events: vec![EventInput {
            event_id: "evt_1".into(),
            customer_id: "cus_1".into(),
            event_name: "api.call".into(),
            timestamp: None,
            metadata,
        }],
    };

    let response = client_for(&server)
        .usage_events()
        .ingest(&params)
        .await
        .unwrap();
    assert_eq!(response.ingested_count, 1);
}

#[tokio::test]
async fn test_ingest_rejects_empty_batch() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/events/ingest"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let err = client_for(&server)
        .usage_events()
        .ingest(&IngestEventsParams::default())
        .await
        .unwrap_err();
    assert!(matches!(err, Error::InvalidParams { .. }));
}
