//! GTasks MCP - remote task management over a paginated fan-out core
//!
//! # Configuration
//! Set `GTASKS_ACCESS_TOKEN` (and optionally `GTASKS_API_URL`) env vars or
//! configure in `~/.config/gtasks-mcp.toml`

use rmcp::{transport::stdio, ServiceExt};

use gtasks_mcp::{Config, GTasksMcpServer};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    gtasks_mcp::logging::init_tracing()?;

    tracing::info!("Starting GTasks MCP server");

    let config = Config::load()?;
    tracing::info!("Tasks API URL: {}", config.backend.base_url);

    let server = GTasksMcpServer::new(config)?;
    let service = server.serve(stdio()).await?;

    tracing::info!("Server running, waiting for requests...");
    service.waiting().await?;

    tracing::info!("Server shutting down");
    Ok(())
}
