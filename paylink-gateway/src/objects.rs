//! Request/response objects for the Cashfree PG API.
//!
//! Responses are kept deliberately loose: the fields this service
//! inspects are typed, everything else is captured via
//! `#[serde(flatten)]` and forwarded to the caller unmodified.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Base URL of Cashfree's hosted payment page.
pub const PAYMENT_VIEW_URL: &str = "https://payments.cashfree.com/pg/view/payment";

/// Customer fields required by the create-order endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomerDetails {
    pub customer_id: String,
    pub customer_phone: String,
    pub customer_name: String,
    pub customer_email: String,
}

/// Body of `POST /pg/orders`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderRequest {
    pub order_id: String,
    pub order_amount: Decimal,
    pub order_currency: String,
    pub customer_details: CustomerDetails,
}

/// Response of `POST /pg/orders`.
///
/// Depending on the flow, the gateway returns either a payment session
/// token (order flow) or a ready-made link (payment-link flow); the
/// remaining fields pass through untouched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateOrderResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_session_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_link: Option<String>,
    #[serde(flatten)]
    pub rest: serde_json::Map<String, serde_json::Value>,
}

impl CreateOrderResponse {
    /// The URL the end customer uses to complete payment: the
    /// gateway-provided link when present, otherwise derived from the
    /// payment session token.
    pub fn payment_url(&self) -> Option<String> {
        if let Some(link) = &self.payment_link {
            return Some(link.clone());
        }
        self.payment_session_id.as_ref().map(|session_id| {
            format!(
                "{PAYMENT_VIEW_URL}?payment_session_id={}",
                urlencoding::encode(session_id)
            )
        })
    }
}

/// Response of `GET /pg/orders/{order_id}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderDetails {
    pub order_status: String,
    #[serde(flatten)]
    pub rest: serde_json::Map<String, serde_json::Value>,
}

impl OrderDetails {
    /// Terminal success status reported by the gateway.
    pub fn is_paid(&self) -> bool {
        self.order_status == "PAID"
    }
}

/// How fast the gateway should process a refund.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RefundSpeed {
    Standard,
    Instant,
}

/// Body of `POST /pg/orders/{order_id}/refunds`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefundRequest {
    pub refund_amount: Decimal,
    pub refund_id: String,
    pub refund_note: String,
    pub refund_speed: RefundSpeed,
}
