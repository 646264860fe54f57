//! Text rendering for tool responses

use chrono::DateTime;

use crate::pager::Page;
use crate::types::{Task, TaskList};

/// Render a full list/search page: header, task bodies, cursor trailer
pub fn render_task_page(page: &Page<'_, Task>) -> String {
    if page.total == 0 {
        return "Found 0 tasks.".to_string();
    }

    let mut out = format!(
        "Found {} tasks. Showing {}-{} of {}.",
        page.total,
        page.offset + 1,
        page.offset + page.returned(),
        page.total
    );

    for task in page.items {
        out.push_str("\n\n");
        out.push_str(&render_task(task));
    }

    if let Some(cursor) = page.next_cursor() {
        out.push_str(&format!("\n\nNext cursor: {}", cursor));
    }

    out
}

/// Render one task as a short text block
pub fn render_task(task: &Task) -> String {
    let title = task.title.as_deref().unwrap_or("(untitled)");
    let done = task.status.as_deref() == Some("completed");

    let mut out = format!("- [{}] {}", if done { "x" } else { " " }, title);

    if let Some(ref due) = task.due {
        out.push_str(&format!(" (due {})", short_date(due)));
    }

    out.push_str(&format!("\n  id: {}", task.id));
    if let Some(ref parent) = task.parent {
        out.push_str(&format!("\n  parent: {}", parent));
    }

    if let Some(ref notes) = task.notes {
        if !notes.is_empty() {
            out.push_str(&format!("\n  notes: {}", notes));
        }
    }

    out
}

/// Render the task-list registry
pub fn render_tasklists(lists: &[TaskList]) -> String {
    if lists.is_empty() {
        return "Found 0 task lists.".to_string();
    }

    let mut out = format!("Found {} task lists.", lists.len());
    for list in lists {
        let id = list.id.as_deref().unwrap_or("(no id)");
        let title = list.title.as_deref().unwrap_or("(untitled)");
        out.push_str(&format!("\n- {} ({})", title, id));
    }
    out
}

/// Date-only form of an RFC 3339 timestamp; falls through on anything else
fn short_date(value: &str) -> String {
    match DateTime::parse_from_rfc3339(value) {
        Ok(dt) => dt.date_naive().to_string(),
        Err(_) => value.to_string(),
    }
}
