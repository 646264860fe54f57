//! Handler implementations for gtasks-mcp tools
//!
//! Organized by domain: tasks, tasklists

mod tasklists;
mod tasks;

pub use tasklists::*;
pub use tasks::*;

use rmcp::ErrorData as McpError;

use crate::error::BackendError;

/// Convert a BackendError to an MCP error
pub fn backend_to_mcp_error(e: BackendError) -> McpError {
    McpError::internal_error(e.to_string(), None)
}
