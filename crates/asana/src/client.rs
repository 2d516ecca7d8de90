//! REST client for the Asana v1 API.

use std::time::Duration;

use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::error::AsanaError;
use crate::models::{ApiResponse, Project, Task, TaskCompact};

/// Base URL for the Asana API.
const API_BASE_URL: &str = "https://app.asana.com/api/1.0";

/// Default timeout for API requests.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Extra attempts after a failed request (transport error or 5xx).
const MAX_RETRIES: u32 = 2;

/// Delay between retry attempts.
const RETRY_DELAY_MS: u64 = 500;

/// Task fields requested when hydrating task detail.
const TASK_FIELDS: &str = "name,completed,created_at,completed_at,due_on,assignee.name,tags.name";

/// Asana REST client.
#[derive(Debug, Clone)]
pub struct AsanaClient {
    client: Client,
    token: String,
    base_url: String,
}

impl AsanaClient {
    /// Create a new client authenticated with a Personal Access Token.
    ///
    /// # Errors
    /// Returns error if the HTTP client cannot be created.
    pub fn new(token: impl Into<String>) -> Result<Self, AsanaError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            client,
            token: token.into(),
            base_url: API_BASE_URL.to_string(),
        })
    }

    /// Create a client against a custom base URL (for tests).
    pub fn with_base_url(
        token: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Result<Self, AsanaError> {
        let mut client = Self::new(token)?;
        client.base_url = base_url.into();
        Ok(client)
    }

    /// Human-facing URL for a project.
    #[must_use]
    pub fn project_url(project_gid: &str) -> String {
        format!("https://app.asana.com/0/{project_gid}")
    }

    /// Fetch project metadata.
    pub async fn get_project(&self, project_gid: &str) -> Result<Project, AsanaError> {
        let response: ApiResponse<Project> = self.get(&format!("/projects/{project_gid}")).await?;
        debug!(project = %response.data.name, "Retrieved project");
        Ok(response.data)
    }

    /// List compact task references for a project.
    pub async fn project_tasks(&self, project_gid: &str) -> Result<Vec<TaskCompact>, AsanaError> {
        let response: ApiResponse<Vec<TaskCompact>> =
            self.get(&format!("/projects/{project_gid}/tasks")).await?;
        Ok(response.data)
    }

    /// Fetch full detail for a single task.
    ///
    /// Project listings only return compact records, so building a report
    /// takes one of these calls per task.
    pub async fn get_task(&self, task_gid: &str) -> Result<Task, AsanaError> {
        let response: ApiResponse<Task> = self
            .get(&format!("/tasks/{task_gid}?opt_fields={TASK_FIELDS}"))
            .await?;
        Ok(response.data)
    }

    /// Make an authenticated GET request with bounded retries.
    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, AsanaError> {
        let url = format!("{}{path}", self.base_url);

        let mut attempt = 0;
        loop {
            debug!(url = %url, attempt, "GET request");
            match self.try_get(&url).await {
                Ok(response) => return Ok(response),
                Err(err) if attempt < MAX_RETRIES && is_retryable(&err) => {
                    warn!(url = %url, error = %err, "Request failed, retrying");
                    attempt += 1;
                    tokio::time::sleep(Duration::from_millis(RETRY_DELAY_MS)).await;
                }
                Err(err) => return Err(err),
            }
        }
    }

    async fn try_get<T: DeserializeOwned>(&self, url: &str) -> Result<T, AsanaError> {
        let response = self
            .client
            .get(url)
            .header("Authorization", format!("Bearer {}", self.token))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(AsanaError::Api {
                status: status.as_u16(),
                message,
            });
        }

        Ok(response.json().await?)
    }
}

/// Whether a failed request is worth retrying.
fn is_retryable(err: &AsanaError) -> bool {
    match err {
        AsanaError::Http(_) => true,
        AsanaError::Api { status, .. } => *status >= 500,
        AsanaError::Json(_) | AsanaError::Io(_) => false,
    }
}
