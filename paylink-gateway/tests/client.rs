//! Integration tests for `CashfreeClient` against a mock gateway.

use std::time::Duration;

use httpmock::prelude::*;
use rust_decimal::Decimal;
use serde_json::json;
use url::Url;

use paylink_gateway::objects::{CustomerDetails, OrderRequest, RefundRequest, RefundSpeed};
use paylink_gateway::{CashfreeClient, GatewayError};

fn client_for(server: &MockServer) -> CashfreeClient {
    let base = Url::parse(&server.base_url()).unwrap();
    CashfreeClient::new(base, "test-client-id", "test-client-secret")
}

fn demo_order(order_id: &str) -> OrderRequest {
    OrderRequest {
        order_id: order_id.to_string(),
        order_amount: Decimal::ONE,
        order_currency: "INR".to_string(),
        customer_details: CustomerDetails {
            customer_id: "sai01".to_string(),
            customer_phone: "9090990999".to_string(),
            customer_name: "Sai".to_string(),
            customer_email: "sai@gmail.com".to_string(),
        },
    }
}

#[tokio::test]
async fn create_order_attaches_auth_headers_and_parses_session() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/pg/orders")
            .header("x-api-version", "2023-08-01")
            .header("x-client-id", "test-client-id")
            .header("x-client-secret", "test-client-secret")
            .json_body_partial(r#"{"order_id": "abc123def456", "order_currency": "INR"}"#);
        then.status(200).json_body(json!({
            "order_id": "abc123def456",
            "order_status": "ACTIVE",
            "payment_session_id": "session_xyz"
        }));
    });

    let resp = client_for(&server)
        .create_order(&demo_order("abc123def456"))
        .await
        .unwrap();

    mock.assert();
    assert_eq!(resp.payment_session_id.as_deref(), Some("session_xyz"));
    assert_eq!(
        resp.payment_url().unwrap(),
        "https://payments.cashfree.com/pg/view/payment?payment_session_id=session_xyz"
    );
}

#[tokio::test]
async fn create_order_propagates_gateway_error_body() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/pg/orders");
        then.status(401)
            .json_body(json!({"message": "authentication failed", "code": "auth_failure"}));
    });

    let err = client_for(&server)
        .create_order(&demo_order("abc123def456"))
        .await
        .unwrap_err();

    match err {
        GatewayError::Api { status, body } => {
            assert_eq!(status.as_u16(), 401);
            assert_eq!(body["code"], "auth_failure");
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn fetch_order_returns_status() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET)
            .path("/pg/orders/abc123def456")
            .header("x-api-version", "2023-08-01");
        then.status(200).json_body(json!({
            "order_id": "abc123def456",
            "order_status": "PAID",
            "order_amount": 1.0
        }));
    });

    let order = client_for(&server).fetch_order("abc123def456").await.unwrap();
    assert!(order.is_paid());
    assert_eq!(order.rest["order_amount"], json!(1.0));
}

#[tokio::test]
async fn fetch_order_maps_404() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/pg/orders/missing000000");
        then.status(404)
            .json_body(json!({"message": "Order reference id does not exist"}));
    });

    let err = client_for(&server)
        .fetch_order("missing000000")
        .await
        .unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn fetch_order_maps_timeout() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/pg/orders/slow00000000");
        then.status(200)
            .delay(Duration::from_millis(500))
            .json_body(json!({"order_status": "ACTIVE"}));
    });

    let client = client_for(&server).with_fetch_order_timeout(Duration::from_millis(50));
    let err = client.fetch_order("slow00000000").await.unwrap_err();
    assert!(matches!(err, GatewayError::Timeout));
}

#[tokio::test]
async fn create_refund_sends_refund_fields() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/pg/orders/abc123def456/refunds")
            .header("x-client-id", "test-client-id")
            .json_body_partial(
                r#"{
                    "refund_amount": 1.0,
                    "refund_id": "deadbeef0123",
                    "refund_note": "refund note for reference",
                    "refund_speed": "STANDARD"
                }"#,
            );
        then.status(200).json_body(json!({
            "refund_id": "deadbeef0123",
            "refund_status": "PENDING"
        }));
    });

    let refund = RefundRequest {
        refund_amount: Decimal::ONE,
        refund_id: "deadbeef0123".to_string(),
        refund_note: "refund note for reference".to_string(),
        refund_speed: RefundSpeed::Standard,
    };
    let payload = client_for(&server)
        .create_refund("abc123def456", &refund)
        .await
        .unwrap();

    mock.assert();
    assert_eq!(payload["refund_status"], "PENDING");
}

#[tokio::test]
async fn fetch_refund_forwards_payload_verbatim() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET)
            .path("/pg/orders/abc123def456/refunds/deadbeef0123");
        then.status(200).json_body(json!({
            "refund_id": "deadbeef0123",
            "refund_status": "SUCCESS",
            "refund_amount": 1.0
        }));
    });

    let payload = client_for(&server)
        .fetch_refund("abc123def456", "deadbeef0123")
        .await
        .unwrap();
    assert_eq!(payload["refund_status"], "SUCCESS");
    assert_eq!(payload["refund_amount"], json!(1.0));
}

#[tokio::test]
async fn non_json_error_body_is_kept_as_text() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/pg/orders/abc123def456");
        then.status(502).body("Bad Gateway");
    });

    let err = client_for(&server)
        .fetch_order("abc123def456")
        .await
        .unwrap_err();
    match err {
        GatewayError::Api { status, body } => {
            assert_eq!(status.as_u16(), 502);
            assert_eq!(body, json!("Bad Gateway"));
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}
