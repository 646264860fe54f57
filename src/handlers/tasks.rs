//! Task handler implementations
//!
//! Read-path handlers compose the fan-out aggregator with the cursor pager;
//! write-path handlers are thin wrappers over the backend trait, defaulting
//! the task list to @default when omitted.

use rmcp::{model::CallToolResult, ErrorData as McpError};

use crate::aggregate::collect_tasks;
use crate::backend::TasksBackend;
use crate::format;
use crate::pager::paginate;
use crate::params::*;
use crate::reply::{json_success, page_success, text_success};
use crate::types::{MovePosition, Task, TaskChanges, DEFAULT_TASKLIST};

use super::backend_to_mcp_error;

/// List tasks, paginated, across one or all task lists
pub async fn list_tasks(
    backend: &dyn TasksBackend,
    params: ListTasksParams,
) -> Result<CallToolResult, McpError> {
    let filters = params.filters();
    let tasks = collect_tasks(backend, params.tasklist.as_deref(), &filters)
        .await
        .map_err(backend_to_mcp_error)?;

    let page = paginate(&tasks, params.cursor.as_deref())
        .map_err(|e| McpError::invalid_params(e.to_string(), None))?;

    page_success(format::render_task_page(&page), &page.pagination())
}

/// Search tasks by title/notes substring, then paginate the matches
pub async fn search_tasks(
    backend: &dyn TasksBackend,
    params: SearchTasksParams,
) -> Result<CallToolResult, McpError> {
    let filters = params.filters();
    let tasks = collect_tasks(backend, params.tasklist.as_deref(), &filters)
        .await
        .map_err(backend_to_mcp_error)?;

    // Narrow the full merged set before paging so page boundaries are
    // stable with respect to the filter
    let needle = params.query.to_lowercase();
    let matches: Vec<Task> = tasks
        .into_iter()
        .filter(|t| matches_query(t, &needle))
        .collect();

    let page = paginate(&matches, params.cursor.as_deref())
        .map_err(|e| McpError::invalid_params(e.to_string(), None))?;

    page_success(format::render_task_page(&page), &page.pagination())
}

/// Case-insensitive substring match against title OR notes
///
/// `needle_lower` must already be lowercased. Absent fields never match.
pub fn matches_query(task: &Task, needle_lower: &str) -> bool {
    let hit = |field: Option<&str>| {
        field
            .map(|v| v.to_lowercase().contains(needle_lower))
            .unwrap_or(false)
    };
    hit(task.title.as_deref()) || hit(task.notes.as_deref())
}

/// Fetch one task by id
pub async fn get_task(
    backend: &dyn TasksBackend,
    params: GetTaskParams,
) -> Result<CallToolResult, McpError> {
    let tasklist = params.tasklist.as_deref().unwrap_or(DEFAULT_TASKLIST);

    let task = backend
        .get_task(tasklist, &params.task_id)
        .await
        .map_err(backend_to_mcp_error)?;

    json_success(&task)
}

/// Create a new task
pub async fn create_task(
    backend: &dyn TasksBackend,
    params: CreateTaskParams,
) -> Result<CallToolResult, McpError> {
    if params.title.is_empty() {
        return Err(McpError::invalid_params("title cannot be empty", None));
    }

    let tasklist = params.tasklist.as_deref().unwrap_or(DEFAULT_TASKLIST);
    let changes = TaskChanges {
        title: Some(params.title),
        notes: params.notes,
        due: params.due,
        status: None,
    };

    let task = backend
        .insert_task(
            tasklist,
            &changes,
            params.parent.as_deref(),
            params.previous.as_deref(),
        )
        .await
        .map_err(backend_to_mcp_error)?;

    json_success(&task)
}

/// Update task fields; only provided fields change
pub async fn update_task(
    backend: &dyn TasksBackend,
    params: UpdateTaskParams,
) -> Result<CallToolResult, McpError> {
    if let Some(ref status) = params.status {
        if status != "needsAction" && status != "completed" {
            return Err(McpError::invalid_params(
                format!(
                    "Invalid status '{}': expected 'needsAction' or 'completed'",
                    status
                ),
                None,
            ));
        }
    }

    let tasklist = params.tasklist.as_deref().unwrap_or(DEFAULT_TASKLIST);
    let changes = TaskChanges {
        title: params.title,
        notes: params.notes,
        due: params.due,
        status: params.status,
    };

    let task = backend
        .patch_task(tasklist, &params.task_id, &changes)
        .await
        .map_err(backend_to_mcp_error)?;

    json_success(&task)
}

/// Mark a task completed
pub async fn complete_task(
    backend: &dyn TasksBackend,
    params: CompleteTaskParams,
) -> Result<CallToolResult, McpError> {
    let tasklist = params.tasklist.as_deref().unwrap_or(DEFAULT_TASKLIST);
    let changes = TaskChanges {
        status: Some("completed".to_string()),
        ..Default::default()
    };

    let task = backend
        .patch_task(tasklist, &params.task_id, &changes)
        .await
        .map_err(backend_to_mcp_error)?;

    json_success(&task)
}

/// Delete a task
pub async fn delete_task(
    backend: &dyn TasksBackend,
    params: DeleteTaskParams,
) -> Result<CallToolResult, McpError> {
    let tasklist = params.tasklist.as_deref().unwrap_or(DEFAULT_TASKLIST);

    backend
        .delete_task(tasklist, &params.task_id)
        .await
        .map_err(backend_to_mcp_error)?;

    Ok(text_success(format!("Task {} deleted", params.task_id)))
}

/// Reposition a task within or across lists
pub async fn move_task(
    backend: &dyn TasksBackend,
    params: MoveTaskParams,
) -> Result<CallToolResult, McpError> {
    let tasklist = params.tasklist.as_deref().unwrap_or(DEFAULT_TASKLIST);
    let position = MovePosition {
        parent: params.parent,
        previous: params.previous,
        destination_tasklist: params.destination_tasklist,
    };

    let task = backend
        .move_task(tasklist, &params.task_id, &position)
        .await
        .map_err(backend_to_mcp_error)?;

    json_success(&task)
}

/// Permanently remove all completed tasks from a list
pub async fn clear_completed(
    backend: &dyn TasksBackend,
    params: ClearCompletedParams,
) -> Result<CallToolResult, McpError> {
    let tasklist = params.tasklist.as_deref().unwrap_or(DEFAULT_TASKLIST);

    backend
        .clear_completed(tasklist)
        .await
        .map_err(backend_to_mcp_error)?;

    Ok(text_success(format!(
        "Cleared completed tasks from {}",
        tasklist
    )))
}
