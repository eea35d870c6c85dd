//! Cashfree payment gateway client.
//!
//! This crate wraps the handful of Cashfree PG REST calls the paylink
//! backend needs (create order, fetch order, create refund, fetch
//! refund) behind a typed [`CashfreeClient`], plus the short opaque
//! identifier generator used for order and refund ids.

pub mod client;
pub mod error;
pub mod objects;
pub mod order_id;

pub use client::{API_VERSION, CashfreeClient, Environment};
pub use error::GatewayError;
pub use order_id::generate_id;
