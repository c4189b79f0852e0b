use crate::api::envelope::Envelope;
use crate::libs::task::{NewTask, Task};
use crate::msg_debug;
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    /// The server could not be reached or the connection broke.
    #[error(transparent)]
    Transport(#[from] reqwest::Error),

    #[error("unexpected status code {0}")]
    UnexpectedStatus(StatusCode),

    /// The server answered with `success: false`; holds its error text.
    #[error("{0}")]
    Rejected(String),

    #[error("invalid response body: {0}")]
    InvalidBody(#[from] serde_json::Error),
}

/// HTTP client for the task API.
pub struct TaskClient {
    client: Client,
    base_url: String,
}

impl TaskClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Creates a task and returns its id.
    pub async fn create_task(&self, task: &NewTask) -> Result<i64, ClientError> {
        let url = format!("{}/tasks", self.base_url);
        msg_debug!(format!("POST {}", url));
        let res = self.client.post(url).json(task).send().await?;
        Self::read(res).await
    }

    pub async fn list_tasks(&self) -> Result<Vec<Task>, ClientError> {
        let url = format!("{}/tasks", self.base_url);
        msg_debug!(format!("GET {}", url));
        let res = self.client.get(url).send().await?;
        Self::read(res).await
    }

    /// Marks a task as done; returns the number of updated tasks (0 when the id is unknown).
    pub async fn complete_task(&self, id: i64) -> Result<usize, ClientError> {
        let url = format!("{}/tasks/{}", self.base_url, id);
        msg_debug!(format!("PUT {}", url));
        let res = self.client.put(url).send().await?;
        Self::read(res).await
    }

    /// Deletes a task; returns the number of deleted tasks (0 when the id is unknown).
    pub async fn delete_task(&self, id: i64) -> Result<usize, ClientError> {
        let url = format!("{}/tasks/{}", self.base_url, id);
        msg_debug!(format!("DELETE {}", url));
        let res = self.client.delete(url).send().await?;
        Self::read(res).await
    }

    async fn read<T: DeserializeOwned>(res: Response) -> Result<T, ClientError> {
        if res.status() != StatusCode::OK {
            return Err(ClientError::UnexpectedStatus(res.status()));
        }
        let body = res.bytes().await?;
        let envelope: Envelope<T> = serde_json::from_slice(&body)?;
        envelope.into_result().map_err(ClientError::Rejected)
    }
}
