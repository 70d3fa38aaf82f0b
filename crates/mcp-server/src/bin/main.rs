//! Apple Pay mock MCP server.
//!
//! Exposes six wallet tools (merchant support check, card listing, payment
//! simulation, transaction history, card enrollment, spending summary) over
//! the MCP stdio transport. All data is in-memory mock data and resets on
//! restart.

use std::sync::Arc;

use clap::Parser;
use tokio::sync::RwLock;

use mcp_server::StdioTransport;
use pay_core::PayWallet;

/// Apple Pay mock wallet over MCP stdio
#[derive(Parser, Debug)]
#[command(name = "apple-pay-mcp-server")]
#[command(version)]
#[command(about = "Mock Apple Pay wallet tools via the Model Context Protocol")]
struct Args {
    /// Start with an empty wallet instead of the seeded demo cards
    #[arg(long)]
    empty: bool,

    /// Log filter, e.g. "info" or "mcp_server=debug"
    #[arg(long, env = "APPLE_PAY_MCP_LOG", default_value = "info")]
    log: String,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // stdout is the protocol channel; all logging goes to stderr
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(&args.log))
        .with_writer(std::io::stderr)
        .init();

    let wallet = if args.empty {
        PayWallet::new()
    } else {
        PayWallet::with_mock_data()
    };
    let wallet = Arc::new(RwLock::new(wallet));

    let mut transport = StdioTransport::new(wallet);
    transport.run().await
}
