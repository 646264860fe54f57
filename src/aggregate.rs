//! Exhaustive fetching and multi-list aggregation
//!
//! The backend paginates natively; everything here drains that pagination
//! completely before the cursor pager re-slices the merged set. A query
//! without a target list fans out across every known list in parallel and
//! tolerates individual list failures by omission.

use futures::future::join_all;
use tracing::{debug, warn};

use crate::backend::TasksBackend;
use crate::error::BackendResult;
use crate::types::{ListFilters, Task, TaskList};

/// Drain every native page of one task list into a single sequence
///
/// Items keep the order the backend emitted them in. Any page failure fails
/// the whole fetch for this list; no partial sequence is returned.
pub async fn fetch_list_tasks(
    backend: &dyn TasksBackend,
    tasklist: &str,
    filters: &ListFilters,
) -> BackendResult<Vec<Task>> {
    let mut items = Vec::new();
    let mut page_token: Option<String> = None;

    loop {
        let page = backend
            .list_tasks(tasklist, filters, page_token.as_deref())
            .await?;
        items.extend(page.items);

        match page.next_page_token {
            Some(token) => page_token = Some(token),
            None => break,
        }
    }

    debug!(tasklist, count = items.len(), "drained task list");
    Ok(items)
}

/// Drain the task-list registry completely
pub async fn fetch_all_tasklists(backend: &dyn TasksBackend) -> BackendResult<Vec<TaskList>> {
    let mut lists = Vec::new();
    let mut page_token: Option<String> = None;

    loop {
        let page = backend.list_tasklists(page_token.as_deref()).await?;
        lists.extend(page.items);

        match page.next_page_token {
            Some(token) => page_token = Some(token),
            None => break,
        }
    }

    Ok(lists)
}

/// Produce the merged task sequence for a query
///
/// With a target list this is a plain exhaustive fetch and its errors
/// propagate. Without one, the registry is drained (a registry failure is
/// fatal), then every list is fetched concurrently; the merge walks the
/// fetches in registry order and a failed list is logged and skipped, so
/// backend degradation shows up as fewer results rather than an error.
pub async fn collect_tasks(
    backend: &dyn TasksBackend,
    tasklist: Option<&str>,
    filters: &ListFilters,
) -> BackendResult<Vec<Task>> {
    if let Some(id) = tasklist {
        return fetch_list_tasks(backend, id, filters).await;
    }

    let lists = fetch_all_tasklists(backend).await?;
    let ids: Vec<String> = lists.into_iter().filter_map(|l| l.id).collect();

    let fetches = ids.iter().map(|id| fetch_list_tasks(backend, id, filters));
    let settled = join_all(fetches).await;

    let mut merged = Vec::new();
    for (id, result) in ids.iter().zip(settled) {
        match result {
            Ok(items) => merged.extend(items),
            Err(error) => {
                warn!(tasklist = %id, %error, "skipping task list after fetch failure");
            }
        }
    }

    Ok(merged)
}
