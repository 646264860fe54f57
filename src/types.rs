//! Type definitions for gtasks-mcp
//!
//! Task and task-list records mirror the backend's wire shape (camelCase,
//! most fields optional) and pass through the core uninterpreted; only
//! title/notes are inspected, by the search predicate.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Reserved task-list id for the caller's default list
pub const DEFAULT_TASKLIST: &str = "@default";

/// A single task as returned by the backend
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct Task {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// "needsAction" or "completed"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Due date (RFC 3339)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due: Option<String>,
    /// Completion timestamp (RFC 3339)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed: Option<String>,
    /// Last-modified timestamp (RFC 3339)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated: Option<String>,
    /// Parent task id, for subtasks
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,
    /// Backend-assigned ordering position within the list
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub self_link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deleted: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hidden: Option<bool>,
}

/// A task list (registry entry)
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct TaskList {
    /// Records without an id are skipped during fan-out
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated: Option<String>,
}

/// One native backend page of tasks
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TaskPage {
    pub items: Vec<Task>,
    pub next_page_token: Option<String>,
}

/// One native backend page of task lists
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TaskListPage {
    pub items: Vec<TaskList>,
    pub next_page_token: Option<String>,
}

/// Server-side list filters, forwarded to the backend only when set
///
/// Omitted fields mean "backend default"; the core never fills one in.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListFilters {
    pub show_completed: Option<bool>,
    pub show_hidden: Option<bool>,
    pub show_deleted: Option<bool>,
    pub show_assigned: Option<bool>,
    /// Lower bound on completion date (RFC 3339)
    pub completed_min: Option<String>,
    /// Upper bound on completion date (RFC 3339)
    pub completed_max: Option<String>,
    /// Lower bound on due date (RFC 3339)
    pub due_min: Option<String>,
    /// Upper bound on due date (RFC 3339)
    pub due_max: Option<String>,
    /// Lower bound on last-modified time (RFC 3339)
    pub updated_min: Option<String>,
}

impl ListFilters {
    /// Render the set filters as backend query parameters
    pub fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut query = Vec::new();
        if let Some(v) = self.show_completed {
            query.push(("showCompleted", v.to_string()));
        }
        if let Some(v) = self.show_hidden {
            query.push(("showHidden", v.to_string()));
        }
        if let Some(v) = self.show_deleted {
            query.push(("showDeleted", v.to_string()));
        }
        if let Some(v) = self.show_assigned {
            query.push(("showAssigned", v.to_string()));
        }
        if let Some(ref v) = self.completed_min {
            query.push(("completedMin", v.clone()));
        }
        if let Some(ref v) = self.completed_max {
            query.push(("completedMax", v.clone()));
        }
        if let Some(ref v) = self.due_min {
            query.push(("dueMin", v.clone()));
        }
        if let Some(ref v) = self.due_max {
            query.push(("dueMax", v.clone()));
        }
        if let Some(ref v) = self.updated_min {
            query.push(("updatedMin", v.clone()));
        }
        query
    }
}

/// Field changes for insert/patch operations; unset fields are left alone
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskChanges {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

/// Positioning arguments for move (and insert) operations
#[derive(Debug, Clone, Default)]
pub struct MovePosition {
    /// New parent task id (omit to move to top level)
    pub parent: Option<String>,
    /// Sibling task to place this task after (omit for first position)
    pub previous: Option<String>,
    /// Target list when moving across lists
    pub destination_tasklist: Option<String>,
}

/// Machine-readable pagination metadata attached to every list/search response
///
/// `next_cursor` serializes as `null` at the end of results, deliberately:
/// programmatic callers key off the null rather than a missing field.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub page_size: usize,
    pub total: usize,
    pub offset: usize,
    pub returned: usize,
    pub next_cursor: Option<String>,
}
