use axum::{Json, extract::State, http::StatusCode, response::IntoResponse, response::Response};
use paylink_gateway::generate_id;
use paylink_gateway::objects::{RefundRequest, RefundSpeed};
use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::json;

use crate::state::AppState;

const REFUND_NOTE: &str = "refund note for reference";

/// Inbound refund request.
///
/// `refund_amount` is optional and defaults to 1, matching the
/// service's historical behavior; callers that know the real order
/// amount can pass it explicitly.
#[derive(Debug, Deserialize)]
pub(super) struct RefundPayload {
    order_id: String,
    #[serde(default = "default_refund_amount")]
    refund_amount: Decimal,
}

fn default_refund_amount() -> Decimal {
    Decimal::ONE
}

/// `POST /refund` — initiate a refund for an order.
///
/// Generates a fresh refund id and forwards the gateway's payload
/// verbatim on success.
pub(super) async fn create_refund(
    State(state): State<AppState>,
    Json(body): Json<RefundPayload>,
) -> Response {
    let refund_id = match generate_id() {
        Ok(id) => id,
        Err(e) => {
            tracing::error!(error = %e, "Failed to generate refund id");
            return failure(e.to_string().into());
        }
    };

    let request = RefundRequest {
        refund_amount: body.refund_amount,
        refund_id,
        refund_note: REFUND_NOTE.to_string(),
        refund_speed: RefundSpeed::Standard,
    };

    match state.gateway.create_refund(&body.order_id, &request).await {
        Ok(payload) => Json(payload).into_response(),
        Err(err) => {
            tracing::error!(error = %err, order_id = %body.order_id, "Refund request failed");
            failure(err.into_detail())
        }
    }
}

fn failure(message: serde_json::Value) -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({
            "success": false,
            "message": message,
        })),
    )
        .into_response()
}
