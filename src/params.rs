//! Tool parameter types
//!
//! All filter fields are optional pass-throughs; an omitted filter means the
//! backend default applies. Cursors must round-trip values returned by a
//! previous call and are never constructed by hand.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::types::ListFilters;

/// Parameters for listing tasks
#[derive(Debug, Default, Serialize, Deserialize, JsonSchema)]
pub struct ListTasksParams {
    #[schemars(description = "Task list id. Omit to list tasks across all task lists")]
    pub tasklist: Option<String>,

    #[schemars(description = "Opaque pagination cursor returned by a previous call")]
    pub cursor: Option<String>,

    #[schemars(description = "Include completed tasks")]
    pub show_completed: Option<bool>,

    #[schemars(description = "Include hidden tasks")]
    pub show_hidden: Option<bool>,

    #[schemars(description = "Include deleted tasks")]
    pub show_deleted: Option<bool>,

    #[schemars(description = "Include tasks assigned to the current user")]
    pub show_assigned: Option<bool>,

    #[schemars(description = "Only tasks completed after this RFC 3339 timestamp")]
    pub completed_min: Option<String>,

    #[schemars(description = "Only tasks completed before this RFC 3339 timestamp")]
    pub completed_max: Option<String>,

    #[schemars(description = "Only tasks due after this RFC 3339 timestamp")]
    pub due_min: Option<String>,

    #[schemars(description = "Only tasks due before this RFC 3339 timestamp")]
    pub due_max: Option<String>,

    #[schemars(description = "Only tasks updated after this RFC 3339 timestamp")]
    pub updated_min: Option<String>,
}

impl ListTasksParams {
    pub fn filters(&self) -> ListFilters {
        ListFilters {
            show_completed: self.show_completed,
            show_hidden: self.show_hidden,
            show_deleted: self.show_deleted,
            show_assigned: self.show_assigned,
            completed_min: self.completed_min.clone(),
            completed_max: self.completed_max.clone(),
            due_min: self.due_min.clone(),
            due_max: self.due_max.clone(),
            updated_min: self.updated_min.clone(),
        }
    }
}

/// Parameters for searching tasks
#[derive(Debug, Default, Serialize, Deserialize, JsonSchema)]
pub struct SearchTasksParams {
    #[schemars(description = "Case-insensitive substring matched against task titles and notes")]
    pub query: String,

    #[schemars(description = "Task list id. Omit to search across all task lists")]
    pub tasklist: Option<String>,

    #[schemars(description = "Opaque pagination cursor returned by a previous call")]
    pub cursor: Option<String>,

    #[schemars(description = "Include completed tasks")]
    pub show_completed: Option<bool>,

    #[schemars(description = "Include hidden tasks")]
    pub show_hidden: Option<bool>,

    #[schemars(description = "Include deleted tasks")]
    pub show_deleted: Option<bool>,

    #[schemars(description = "Include tasks assigned to the current user")]
    pub show_assigned: Option<bool>,

    #[schemars(description = "Only tasks completed after this RFC 3339 timestamp")]
    pub completed_min: Option<String>,

    #[schemars(description = "Only tasks completed before this RFC 3339 timestamp")]
    pub completed_max: Option<String>,

    #[schemars(description = "Only tasks due after this RFC 3339 timestamp")]
    pub due_min: Option<String>,

    #[schemars(description = "Only tasks due before this RFC 3339 timestamp")]
    pub due_max: Option<String>,

    #[schemars(description = "Only tasks updated after this RFC 3339 timestamp")]
    pub updated_min: Option<String>,
}

impl SearchTasksParams {
    pub fn filters(&self) -> ListFilters {
        ListFilters {
            show_completed: self.show_completed,
            show_hidden: self.show_hidden,
            show_deleted: self.show_deleted,
            show_assigned: self.show_assigned,
            completed_min: self.completed_min.clone(),
            completed_max: self.completed_max.clone(),
            due_min: self.due_min.clone(),
            due_max: self.due_max.clone(),
            updated_min: self.updated_min.clone(),
        }
    }
}

/// Parameters for fetching a single task
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct GetTaskParams {
    #[schemars(description = "Task list id. Defaults to the @default list")]
    pub tasklist: Option<String>,

    #[schemars(description = "Task id")]
    pub task_id: String,
}

/// Parameters for creating a task
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct CreateTaskParams {
    #[schemars(description = "Task list id. Defaults to the @default list")]
    pub tasklist: Option<String>,

    #[schemars(description = "Title for the new task")]
    pub title: String,

    #[schemars(description = "Notes for the new task")]
    pub notes: Option<String>,

    #[schemars(description = "Due date (RFC 3339)")]
    pub due: Option<String>,

    #[schemars(description = "Parent task id, to create a subtask")]
    pub parent: Option<String>,

    #[schemars(description = "Sibling task id to place the new task after")]
    pub previous: Option<String>,
}

/// Parameters for updating a task
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct UpdateTaskParams {
    #[schemars(description = "Task list id. Defaults to the @default list")]
    pub tasklist: Option<String>,

    #[schemars(description = "Task id")]
    pub task_id: String,

    #[schemars(description = "New title")]
    pub title: Option<String>,

    #[schemars(description = "New notes")]
    pub notes: Option<String>,

    #[schemars(description = "New due date (RFC 3339)")]
    pub due: Option<String>,

    #[schemars(description = "New status: 'needsAction' or 'completed'")]
    pub status: Option<String>,
}

/// Parameters for deleting a task
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct DeleteTaskParams {
    #[schemars(description = "Task list id. Defaults to the @default list")]
    pub tasklist: Option<String>,

    #[schemars(description = "Task id")]
    pub task_id: String,
}

/// Parameters for completing a task
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct CompleteTaskParams {
    #[schemars(description = "Task list id. Defaults to the @default list")]
    pub tasklist: Option<String>,

    #[schemars(description = "Task id")]
    pub task_id: String,
}

/// Parameters for moving/repositioning a task
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct MoveTaskParams {
    #[schemars(description = "Task list id the task currently lives in. Defaults to the @default list")]
    pub tasklist: Option<String>,

    #[schemars(description = "Task id")]
    pub task_id: String,

    #[schemars(description = "New parent task id. Omit to move to the top level")]
    pub parent: Option<String>,

    #[schemars(description = "Sibling task id to place the task after. Omit for first position")]
    pub previous: Option<String>,

    #[schemars(description = "Destination task list id, to move the task to another list")]
    pub destination_tasklist: Option<String>,
}

/// Parameters for clearing completed tasks from a list
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct ClearCompletedParams {
    #[schemars(description = "Task list id. Defaults to the @default list")]
    pub tasklist: Option<String>,
}
