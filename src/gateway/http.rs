//! reqwest-backed gateway speaking JSON to `{api_url}/tasks`.

use async_trait::async_trait;
use reqwest::{Client, Response, Url};
use serde_json::json;
use tracing::debug;

use super::TaskGateway;
use crate::config::Settings;
use crate::error::TaskdeckError;
use crate::models::{NewTask, TaskId, TaskRecord, TaskStatus};

const USER_AGENT: &str = concat!("taskdeck/", env!("TASKDECK_VERSION"));

pub struct HttpGateway {
    http: Client,
    base: Url,
}

impl HttpGateway {
    pub fn new(settings: &Settings) -> Result<Self, TaskdeckError> {
        let base = Url::parse(settings.api_url.trim()).map_err(|e| {
            TaskdeckError::config(format!("api_url '{}' is not a valid URL: {e}", settings.api_url))
        })?;
        if base.cannot_be_a_base() {
            return Err(TaskdeckError::config(format!(
                "api_url '{}' cannot be used as a base URL",
                settings.api_url
            )));
        }
        let http = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(settings.request_timeout())
            .build()
            .map_err(|e| TaskdeckError::config(format!("failed to build HTTP client: {e}")))?;
        Ok(Self { http, base })
    }

    /// `{base}/tasks[/{id}]`, tolerating a trailing slash on the base.
    fn tasks_url(&self, id: Option<&TaskId>) -> Url {
        let mut url = self.base.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push("tasks");
            if let Some(id) = id {
                segments.push(&id.to_string());
            }
        }
        url
    }
}

/// Non-2xx becomes `RemoteOperationFailed` carrying status and body.
async fn check_response(resp: Response) -> Result<Response, TaskdeckError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    let body = resp.text().await.unwrap_or_default();
    let body = body.trim();
    Err(TaskdeckError::remote(if body.is_empty() {
        format!("HTTP {}", status.as_u16())
    } else {
        format!("HTTP {}: {body}", status.as_u16())
    }))
}

#[async_trait]
impl TaskGateway for HttpGateway {
    async fn list(&self) -> Result<Vec<TaskRecord>, TaskdeckError> {
        let url = self.tasks_url(None);
        debug!(%url, "listing tasks");
        let resp = check_response(self.http.get(url).send().await?).await?;
        Ok(resp.json().await?)
    }

    async fn create(&self, task: &NewTask) -> Result<TaskRecord, TaskdeckError> {
        let url = self.tasks_url(None);
        debug!(%url, name = %task.name, "creating task");
        let resp = check_response(self.http.post(url).json(task).send().await?).await?;
        Ok(resp.json().await?)
    }

    async fn patch_status(
        &self,
        id: &TaskId,
        status: &TaskStatus,
    ) -> Result<Option<TaskRecord>, TaskdeckError> {
        let url = self.tasks_url(Some(id));
        debug!(%url, %status, "patching task status");
        let resp = check_response(
            self.http
                .patch(url)
                .json(&json!({ "status": status }))
                .send()
                .await?,
        )
        .await?;
        let body = resp.bytes().await?;
        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(None);
        }
        // A body that is not a task record is tolerated; only the status matters here.
        Ok(serde_json::from_slice(&body).ok())
    }

    async fn delete(&self, id: &TaskId) -> Result<(), TaskdeckError> {
        let url = self.tasks_url(Some(id));
        debug!(%url, "deleting task");
        check_response(self.http.delete(url).send().await?).await?;
        Ok(())
    }
}
