use axum::{Json, extract::State, http::StatusCode, response::IntoResponse, response::Response};
use serde::Deserialize;
use serde_json::json;

use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub(super) struct RefundStatusPayload {
    order_id: String,
    refund_id: String,
}

/// `GET /refund-verify` — check the status of a refund.
///
/// Identifiers are read from a JSON body despite the GET method; this
/// matches the historical client contract.
pub(super) async fn refund_status(
    State(state): State<AppState>,
    Json(body): Json<RefundStatusPayload>,
) -> Response {
    match state
        .gateway
        .fetch_refund(&body.order_id, &body.refund_id)
        .await
    {
        Ok(data) => Json(json!({
            "status": true,
            "message": "Fetched refund successfully",
            "data": data,
        }))
        .into_response(),
        Err(err) => {
            tracing::error!(
                error = %err,
                order_id = %body.order_id,
                refund_id = %body.refund_id,
                "Refund status lookup failed"
            );
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({
                    "success": false,
                    "message": err.into_detail(),
                })),
            )
                .into_response()
        }
    }
}
