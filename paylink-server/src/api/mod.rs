//! Payment/refund API handlers.
//!
//! Each endpoint is stateless: validate input, make one gateway call,
//! reshape the gateway's answer into this service's response format.
//!
//! # Endpoints
//!
//! - `GET|POST /payment`     – create a payment order and derive its payment link
//! - `POST     /verify`      – check whether an order has been paid
//! - `POST     /refund`      – initiate a refund for an order
//! - `GET      /refund-verify` – check the status of a refund
//!
//! The historical response shapes are preserved: `/payment` and
//! `/verify` report failures under a `status`/`error` pair while the
//! refund endpoints use `success`/`message`.

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

mod create_order;
mod create_refund;
mod refund_status;
mod verify_order;

/// Build the payment API router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/payment",
            get(create_order::create_order).post(create_order::create_order),
        )
        .route("/verify", post(verify_order::verify_order))
        .route("/refund", post(create_refund::create_refund))
        .route("/refund-verify", get(refund_status::refund_status))
}
