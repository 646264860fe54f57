//! GTasks MCP Library
//!
//! Remote task management over MCP: cursor-paginated list/search that fans
//! out across every task list in parallel, plus the usual CRUD/move tools.
//!
//! # Usage as Library
//!
//! ```rust,ignore
//! use gtasks_mcp::{Config, GTasksMcpServer};
//!
//! let server = GTasksMcpServer::new(Config::load()?)?;
//! // Use with in-memory transport or serve via stdio
//! ```
//!
//! # Configuration
//! Set `GTASKS_ACCESS_TOKEN` (and optionally `GTASKS_API_URL`) env vars or
//! configure in `~/.config/gtasks-mcp.toml`

pub mod aggregate;
pub mod backend;
pub mod config;
pub mod error;
pub mod format;
pub mod handlers;
pub mod logging;
pub mod pager;
pub mod params;
pub mod reply;
pub mod server;
pub mod types;

// Re-export main server type
pub use config::Config;
pub use server::GTasksMcpServer;

// Re-export parameter types for direct API usage
pub use params::*;
