//! REST backend
//!
//! Implements the TasksBackend trait against the Google Tasks v1 REST
//! surface. The access token arrives via configuration; acquiring or
//! refreshing it is out of scope here.

use async_trait::async_trait;
use reqwest::{Client, Response};
use url::Url;

use super::TasksBackend;
use crate::config::BackendConfig;
use crate::error::{BackendError, BackendResult};
use crate::types::{ListFilters, MovePosition, Task, TaskChanges, TaskListPage, TaskPage};

/// Items requested per native backend page
const NATIVE_PAGE_SIZE: &str = "100";

/// HTTP client for the remote tasks API
pub struct RestBackend {
    client: Client,
    base_url: String,
    token: String,
}

impl RestBackend {
    pub fn new(config: BackendConfig) -> BackendResult<Self> {
        let token = config.access_token.ok_or(BackendError::MissingAuth)?;

        // Validate up front; a bad base URL would otherwise fail on every call
        Url::parse(&config.base_url)?;

        let client = Client::builder()
            .user_agent("gtasks-mcp/0.1")
            .build()
            .map_err(BackendError::Http)?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            token,
        })
    }

    async fn check(response: Response) -> BackendResult<Response> {
        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response.text().await.unwrap_or_default();
            return Err(BackendError::Api { status, message });
        }
        Ok(response)
    }
}

#[async_trait]
impl TasksBackend for RestBackend {
    async fn list_tasklists(&self, page_token: Option<&str>) -> BackendResult<TaskListPage> {
        let url = format!("{}/users/@me/lists", self.base_url);

        let mut query = vec![("maxResults", NATIVE_PAGE_SIZE.to_string())];
        if let Some(token) = page_token {
            query.push(("pageToken", token.to_string()));
        }

        let response = self
            .client
            .get(&url)
            .bearer_auth(&self.token)
            .query(&query)
            .send()
            .await?;

        let page: TaskListPage = Self::check(response).await?.json().await?;
        Ok(page)
    }

    async fn list_tasks(
        &self,
        tasklist: &str,
        filters: &ListFilters,
        page_token: Option<&str>,
    ) -> BackendResult<TaskPage> {
        let url = format!("{}/lists/{}/tasks", self.base_url, tasklist);

        let mut query = filters.to_query();
        query.push(("maxResults", NATIVE_PAGE_SIZE.to_string()));
        if let Some(token) = page_token {
            query.push(("pageToken", token.to_string()));
        }

        let response = self
            .client
            .get(&url)
            .bearer_auth(&self.token)
            .query(&query)
            .send()
            .await?;

        let page: TaskPage = Self::check(response).await?.json().await?;
        Ok(page)
    }

    async fn get_task(&self, tasklist: &str, task_id: &str) -> BackendResult<Task> {
        let url = format!("{}/lists/{}/tasks/{}", self.base_url, tasklist, task_id);

        let response = self.client.get(&url).bearer_auth(&self.token).send().await?;

        let task: Task = Self::check(response).await?.json().await?;
        Ok(task)
    }

    async fn insert_task(
        &self,
        tasklist: &str,
        changes: &TaskChanges,
        parent: Option<&str>,
        previous: Option<&str>,
    ) -> BackendResult<Task> {
        let url = format!("{}/lists/{}/tasks", self.base_url, tasklist);

        let mut query: Vec<(&str, String)> = Vec::new();
        if let Some(parent) = parent {
            query.push(("parent", parent.to_string()));
        }
        if let Some(previous) = previous {
            query.push(("previous", previous.to_string()));
        }

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.token)
            .query(&query)
            .json(changes)
            .send()
            .await?;

        let task: Task = Self::check(response).await?.json().await?;
        Ok(task)
    }

    async fn patch_task(
        &self,
        tasklist: &str,
        task_id: &str,
        changes: &TaskChanges,
    ) -> BackendResult<Task> {
        let url = format!("{}/lists/{}/tasks/{}", self.base_url, tasklist, task_id);

        let response = self
            .client
            .patch(&url)
            .bearer_auth(&self.token)
            .json(changes)
            .send()
            .await?;

        let task: Task = Self::check(response).await?.json().await?;
        Ok(task)
    }

    async fn delete_task(&self, tasklist: &str, task_id: &str) -> BackendResult<()> {
        let url = format!("{}/lists/{}/tasks/{}", self.base_url, tasklist, task_id);

        let response = self
            .client
            .delete(&url)
            .bearer_auth(&self.token)
            .send()
            .await?;

        Self::check(response).await?;
        Ok(())
    }

    async fn move_task(
        &self,
        tasklist: &str,
        task_id: &str,
        position: &MovePosition,
    ) -> BackendResult<Task> {
        let url = format!(
            "{}/lists/{}/tasks/{}/move",
            self.base_url, tasklist, task_id
        );

        let mut query: Vec<(&str, String)> = Vec::new();
        if let Some(ref parent) = position.parent {
            query.push(("parent", parent.clone()));
        }
        if let Some(ref previous) = position.previous {
            query.push(("previous", previous.clone()));
        }
        if let Some(ref destination) = position.destination_tasklist {
            query.push(("destinationTasklist", destination.clone()));
        }

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.token)
            .query(&query)
            .send()
            .await?;

        let task: Task = Self::check(response).await?.json().await?;
        Ok(task)
    }

    async fn clear_completed(&self, tasklist: &str) -> BackendResult<()> {
        let url = format!("{}/lists/{}/clear", self.base_url, tasklist);

        let response = self.client.post(&url).bearer_auth(&self.token).send().await?;

        Self::check(response).await?;
        Ok(())
    }
}
