//! Application state shared across all request handlers.

use paylink_gateway::CashfreeClient;
use std::sync::Arc;

/// Application state that is shared across all request handlers.
///
/// The gateway client is built once at startup and never mutated, so
/// the state is a plain `Arc` with no locking.
#[derive(Clone)]
pub struct AppState {
    /// Outbound Cashfree client.
    pub gateway: Arc<CashfreeClient>,
}

impl AppState {
    /// Create a new AppState wrapping the given gateway client.
    pub fn new(gateway: CashfreeClient) -> Self {
        Self {
            gateway: Arc::new(gateway),
        }
    }
}
