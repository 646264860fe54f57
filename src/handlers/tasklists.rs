//! Task-list handler implementations

use rmcp::{model::CallToolResult, ErrorData as McpError};

use crate::aggregate::fetch_all_tasklists;
use crate::backend::TasksBackend;
use crate::format;
use crate::reply::text_success;

use super::backend_to_mcp_error;

/// List every task list the caller can see
///
/// The registry is small, so this drains it exhaustively and returns the
/// whole thing in one response rather than cursor-paginating.
pub async fn list_tasklists(backend: &dyn TasksBackend) -> Result<CallToolResult, McpError> {
    let lists = fetch_all_tasklists(backend)
        .await
        .map_err(backend_to_mcp_error)?;

    Ok(text_success(format::render_tasklists(&lists)))
}
