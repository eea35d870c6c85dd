use axum::{Json, extract::State, http::StatusCode, response::IntoResponse, response::Response};
use serde_json::{Value, json};

use crate::state::AppState;

/// `POST /verify` — check whether an order has been paid.
///
/// The body must carry a non-empty string `order_id`; anything else is
/// rejected with 400 before touching the gateway. Gateway 404 maps to
/// 404, a blown fetch deadline to 504, everything else to 500.
pub(super) async fn verify_order(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Response {
    let order_id = match body.get("order_id").and_then(Value::as_str) {
        Some(id) if !id.trim().is_empty() => id.to_owned(),
        _ => {
            return (
                StatusCode::BAD_REQUEST,
                Json(json!({"error": "order_id must be a non-empty string"})),
            )
                .into_response();
        }
    };

    match state.gateway.fetch_order(&order_id).await {
        Ok(order) if order.is_paid() => Json(json!({
            "status": true,
            "message": "Payment successful",
            "order": order,
        }))
        .into_response(),
        Ok(order) => Json(json!({
            "status": false,
            "message": format!("Payment status: {}", order.order_status),
            "order": order,
        }))
        .into_response(),
        Err(err) if err.is_not_found() => (
            StatusCode::NOT_FOUND,
            Json(json!({"error": "Order not found"})),
        )
            .into_response(),
        Err(paylink_gateway::GatewayError::Timeout) => (
            StatusCode::GATEWAY_TIMEOUT,
            Json(json!({"error": "Cashfree API timeout"})),
        )
            .into_response(),
        Err(err) => {
            tracing::error!(error = %err, %order_id, "Failed to verify order");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({"error": "Failed to verify order"})),
            )
                .into_response()
        }
    }
}
