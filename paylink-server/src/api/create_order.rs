use axum::{Json, extract::State, http::StatusCode, response::IntoResponse, response::Response};
use paylink_gateway::generate_id;
use paylink_gateway::objects::{CustomerDetails, OrderRequest};
use rust_decimal::Decimal;
use serde_json::{Value, json};

use crate::state::AppState;

// Demo order values; the service intentionally supports a single
// fixed amount and currency (see the repository's non-goals).
const ORDER_AMOUNT: Decimal = Decimal::ONE;
const ORDER_CURRENCY: &str = "INR";
const DEMO_CUSTOMER_ID: &str = "sai01";
const DEMO_CUSTOMER_PHONE: &str = "9090990999";
const DEMO_CUSTOMER_NAME: &str = "Sai";
const DEMO_CUSTOMER_EMAIL: &str = "sai@gmail.com";

/// `GET|POST /payment` — create a payment order.
///
/// Generates a fresh order id, creates the order with the gateway and
/// returns the gateway's payload with a derived `payment_link` merged
/// in. The generated id is echoed even if the gateway omits it.
pub(super) async fn create_order(State(state): State<AppState>) -> Response {
    let order_id = match generate_id() {
        Ok(id) => id,
        Err(e) => {
            tracing::error!(error = %e, "Failed to generate order id");
            return failure(e.to_string().into());
        }
    };

    let request = OrderRequest {
        order_id: order_id.clone(),
        order_amount: ORDER_AMOUNT,
        order_currency: ORDER_CURRENCY.to_string(),
        customer_details: CustomerDetails {
            customer_id: DEMO_CUSTOMER_ID.to_string(),
            customer_phone: DEMO_CUSTOMER_PHONE.to_string(),
            customer_name: DEMO_CUSTOMER_NAME.to_string(),
            customer_email: DEMO_CUSTOMER_EMAIL.to_string(),
        },
    };

    match state.gateway.create_order(&request).await {
        Ok(resp) => {
            let payment_link = resp.payment_url();

            let mut data = match serde_json::to_value(&resp) {
                Ok(Value::Object(map)) => map,
                _ => serde_json::Map::new(),
            };
            if let Some(link) = payment_link {
                data.insert("payment_link".to_string(), Value::String(link));
            }
            data.entry("order_id".to_string())
                .or_insert(Value::String(order_id));

            Json(json!({
                "status": true,
                "message": "Created order successfully",
                "data": data,
            }))
            .into_response()
        }
        Err(err) => {
            tracing::error!(error = %err, "Failed to create order");
            failure(err.into_detail())
        }
    }
}

fn failure(error: Value) -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({
            "status": false,
            "message": "Failed to create order",
            "error": error,
        })),
    )
        .into_response()
}
