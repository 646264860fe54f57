//! MCP Server implementation for remote task management
//!
//! This module defines the main MCP server that exposes task operations as
//! tools. Handler implementations are in the handlers module; the backend
//! is an injected trait object so tests can run against an in-memory store.

use rmcp::{
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{CallToolResult, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router, ErrorData as McpError,
};
use std::sync::Arc;

use crate::backend::{RestBackend, TasksBackend};
use crate::config::Config;
use crate::handlers;
use crate::params::*;

/// The main GTasks MCP Server
#[derive(Clone)]
pub struct GTasksMcpServer {
    backend: Arc<dyn TasksBackend>,
    tool_router: ToolRouter<Self>,
}

// ============================================================================
// Tool Router - Each tool delegates to its handler
// ============================================================================

#[tool_router]
impl GTasksMcpServer {
    pub fn new(config: Config) -> Result<Self, anyhow::Error> {
        let backend = RestBackend::new(config.backend)?;
        Ok(Self::with_backend(Arc::new(backend)))
    }

    /// Build a server around any backend; used by tests to inject a mock
    pub fn with_backend(backend: Arc<dyn TasksBackend>) -> Self {
        Self {
            backend,
            tool_router: Self::tool_router(),
        }
    }

    // ========================================================================
    // Read Operations
    // ========================================================================

    #[tool(
        description = "List tasks from one task list, or across all task lists when no list id is given. Returns 20 tasks per page with an opaque cursor for the next page."
    )]
    async fn list_tasks(
        &self,
        Parameters(params): Parameters<ListTasksParams>,
    ) -> Result<CallToolResult, McpError> {
        handlers::list_tasks(self.backend.as_ref(), params).await
    }

    #[tool(
        description = "Search tasks by case-insensitive substring of title or notes, across one or all task lists. Paginated like list_tasks."
    )]
    async fn search_tasks(
        &self,
        Parameters(params): Parameters<SearchTasksParams>,
    ) -> Result<CallToolResult, McpError> {
        handlers::search_tasks(self.backend.as_ref(), params).await
    }

    #[tool(description = "Fetch a single task by id")]
    async fn get_task(
        &self,
        Parameters(params): Parameters<GetTaskParams>,
    ) -> Result<CallToolResult, McpError> {
        handlers::get_task(self.backend.as_ref(), params).await
    }

    #[tool(description = "List all task lists")]
    async fn list_tasklists(&self) -> Result<CallToolResult, McpError> {
        handlers::list_tasklists(self.backend.as_ref()).await
    }

    // ========================================================================
    // Write Operations
    // ========================================================================

    #[tool(description = "Create a new task with optional notes, due date, and position")]
    async fn create_task(
        &self,
        Parameters(params): Parameters<CreateTaskParams>,
    ) -> Result<CallToolResult, McpError> {
        handlers::create_task(self.backend.as_ref(), params).await
    }

    #[tool(description = "Update task fields (title, notes, due date, status)")]
    async fn update_task(
        &self,
        Parameters(params): Parameters<UpdateTaskParams>,
    ) -> Result<CallToolResult, McpError> {
        handlers::update_task(self.backend.as_ref(), params).await
    }

    #[tool(description = "Mark a task as completed")]
    async fn complete_task(
        &self,
        Parameters(params): Parameters<CompleteTaskParams>,
    ) -> Result<CallToolResult, McpError> {
        handlers::complete_task(self.backend.as_ref(), params).await
    }

    #[tool(description = "Delete a task")]
    async fn delete_task(
        &self,
        Parameters(params): Parameters<DeleteTaskParams>,
    ) -> Result<CallToolResult, McpError> {
        handlers::delete_task(self.backend.as_ref(), params).await
    }

    #[tool(description = "Move a task under a parent, after a sibling, or to another list")]
    async fn move_task(
        &self,
        Parameters(params): Parameters<MoveTaskParams>,
    ) -> Result<CallToolResult, McpError> {
        handlers::move_task(self.backend.as_ref(), params).await
    }

    #[tool(description = "Permanently remove all completed tasks from a list")]
    async fn clear_completed(
        &self,
        Parameters(params): Parameters<ClearCompletedParams>,
    ) -> Result<CallToolResult, McpError> {
        handlers::clear_completed(self.backend.as_ref(), params).await
    }
}

// ============================================================================
// Server Handler Implementation
// ============================================================================

#[tool_handler]
impl rmcp::ServerHandler for GTasksMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "Task management MCP server backed by a remote task API. \
                 list_tasks and search_tasks fan out across every task list, \
                 return 20 results per page, and hand back an opaque cursor; \
                 pass the cursor unchanged to fetch the next page. Write \
                 operations default to the @default task list when no list \
                 id is given."
                    .into(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}
