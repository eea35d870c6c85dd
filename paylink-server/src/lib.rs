//! Paylink server library.
//!
//! Exposes the router and configuration so integration tests can drive
//! the service in-process; the binary entry point lives in `main.rs`.

pub mod api;
pub mod config;
pub mod server;
pub mod shutdown;
pub mod state;
