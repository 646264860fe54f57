//! CallToolResult helpers

use rmcp::{
    model::{CallToolResult, Content},
    ErrorData as McpError,
};
use serde::Serialize;

use crate::types::Pagination;

/// Successful plain text response
pub fn text_success(text: impl Into<String>) -> CallToolResult {
    CallToolResult::success(vec![Content::text(text.into())])
}

/// Successful pretty-printed JSON response
pub fn json_success<T: Serialize>(data: &T) -> Result<CallToolResult, McpError> {
    let json = serde_json::to_string_pretty(data)
        .map_err(|e| McpError::internal_error(e.to_string(), None))?;
    Ok(CallToolResult::success(vec![Content::text(json)]))
}

/// Paginated response: rendered text plus machine-readable pagination metadata
pub fn page_success(body: String, pagination: &Pagination) -> Result<CallToolResult, McpError> {
    let meta = serde_json::to_string_pretty(pagination)
        .map_err(|e| McpError::internal_error(e.to_string(), None))?;
    Ok(CallToolResult::success(vec![
        Content::text(body),
        Content::text(meta),
    ]))
}
