//! Paylink Server
//!
//! A small backend that creates Cashfree payment orders/links, verifies
//! payment status, and initiates and checks refunds.

use clap::Parser;
use paylink_gateway::CashfreeClient;
use paylink_server::config::Config;
use paylink_server::server::{build_router, run_server};
use paylink_server::state::AppState;
use std::net::SocketAddr;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Paylink - Cashfree payment order/refund backend
#[derive(Parser, Debug)]
#[command(name = "paylink-server")]
#[command(version, about, long_about = None)]
struct Args {
    /// The address and port to listen on
    #[arg(short, long, env = "PAYLINK_LISTEN", default_value = "0.0.0.0:8000")]
    listen: SocketAddr,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    init_tracing();

    // Parse command line arguments
    let args = Args::parse();

    tracing::info!("Starting paylink-server v{}", env!("CARGO_PKG_VERSION"));

    // Load gateway credentials from the environment
    let config = Config::from_env().map_err(|e| {
        tracing::error!("Failed to load configuration: {}", e);
        e
    })?;
    tracing::info!(environment = %config.environment, "Configuration loaded");

    // Build the gateway client once; it is immutable for the process
    // lifetime and shared by every request.
    let gateway = CashfreeClient::new(
        config.environment.base_url(),
        config.client_id,
        config.client_secret,
    );
    let state = AppState::new(gateway);

    // Build the router
    let router = build_router(state);

    // Run the server
    tracing::info!("Starting HTTP server on {}", args.listen);
    let result = run_server(router, args.listen).await;

    tracing::info!("Server shutdown complete");

    result.map_err(Into::into)
}

/// Initialize the tracing subscriber with environment-based filtering.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,tower_http=debug"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}
