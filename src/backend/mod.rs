//! Tasks backend abstraction
//!
//! The server talks to the remote task store through this trait so the
//! HTTP client is an injected dependency, never a process-wide singleton.
//! Tests swap in an in-memory implementation.

use async_trait::async_trait;

use crate::error::BackendResult;
use crate::types::{ListFilters, MovePosition, Task, TaskChanges, TaskListPage, TaskPage};

pub mod rest;

pub use rest::RestBackend;

/// One natively-paginated remote task store
///
/// `list_tasklists` and `list_tasks` each return a single native page;
/// exhaustive draining across pages lives in [`crate::aggregate`], not here.
#[async_trait]
pub trait TasksBackend: Send + Sync {
    /// List task lists (the registry), one native page at a time
    async fn list_tasklists(&self, page_token: Option<&str>) -> BackendResult<TaskListPage>;

    /// List tasks in one list with server-side filters, one native page at a time
    async fn list_tasks(
        &self,
        tasklist: &str,
        filters: &ListFilters,
        page_token: Option<&str>,
    ) -> BackendResult<TaskPage>;

    /// Fetch a single task
    async fn get_task(&self, tasklist: &str, task_id: &str) -> BackendResult<Task>;

    /// Create a task, optionally positioned under a parent / after a sibling
    async fn insert_task(
        &self,
        tasklist: &str,
        changes: &TaskChanges,
        parent: Option<&str>,
        previous: Option<&str>,
    ) -> BackendResult<Task>;

    /// Patch a task; only the provided fields change
    async fn patch_task(
        &self,
        tasklist: &str,
        task_id: &str,
        changes: &TaskChanges,
    ) -> BackendResult<Task>;

    /// Delete a task
    async fn delete_task(&self, tasklist: &str, task_id: &str) -> BackendResult<()>;

    /// Reposition a task within or across lists
    async fn move_task(
        &self,
        tasklist: &str,
        task_id: &str,
        position: &MovePosition,
    ) -> BackendResult<Task>;

    /// Permanently remove all completed tasks from a list
    async fn clear_completed(&self, tasklist: &str) -> BackendResult<()>;
}
