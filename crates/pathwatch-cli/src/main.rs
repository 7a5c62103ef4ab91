//! pathwatch - traceroute path monitor
//!
//! Traces a fixed set of hosts, stores path metrics and flags risky routes.

use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    pathwatch_cli::run().await
}
