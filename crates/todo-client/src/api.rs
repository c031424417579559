//! Task Endpoint Bindings
//!
//! REST calls against the task collection. On wasm32 reqwest goes
//! through the browser's fetch.

use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;

use crate::config::ClientConfig;
use crate::error::{ClientError, ClientResult};
use crate::models::{NewTask, Task, TaskPatch};

/// Operations the list controller needs from the backend
///
/// Futures are not `Send`: in the browser everything runs on one thread.
#[async_trait(?Send)]
pub trait TodoApi {
    /// Fetch every task, in server order
    async fn list(&self) -> ClientResult<Vec<Task>>;

    /// Create a task; the backend assigns the id
    async fn create(&self, task: &NewTask) -> ClientResult<Task>;

    /// Apply a partial update
    async fn update(&self, id: u32, patch: &TaskPatch) -> ClientResult<Task>;

    /// Remove a task
    async fn delete(&self, id: u32) -> ClientResult<()>;
}

/// reqwest-backed implementation
#[derive(Debug, Clone)]
pub struct HttpTodoApi {
    client: Client,
    config: ClientConfig,
}

impl HttpTodoApi {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }
}

/// Reject non-2xx, then decode the body as JSON
async fn decode<T: DeserializeOwned>(response: Response) -> ClientResult<T> {
    ensure_success(response.status())?;
    let body = response.text().await?;
    parse_body(&body)
}

/// Reject non-2xx and ignore the body
fn expect_success(response: Response) -> ClientResult<()> {
    ensure_success(response.status())
}

fn ensure_success(status: StatusCode) -> ClientResult<()> {
    if status.is_success() {
        Ok(())
    } else {
        Err(ClientError::Status(status.as_u16()))
    }
}

fn parse_body<T: DeserializeOwned>(body: &str) -> ClientResult<T> {
    Ok(serde_json::from_str(body)?)
}

#[async_trait(?Send)]
impl TodoApi for HttpTodoApi {
    async fn list(&self) -> ClientResult<Vec<Task>> {
        let response = self.client.get(self.config.collection_url()).send().await?;
        decode(response).await
    }

    async fn create(&self, task: &NewTask) -> ClientResult<Task> {
        let response = self
            .client
            .post(self.config.collection_url())
            .json(task)
            .send()
            .await?;
        decode(response).await
    }

    async fn update(&self, id: u32, patch: &TaskPatch) -> ClientResult<Task> {
        let response = self
            .client
            .put(self.config.item_url(id))
            .json(patch)
            .send()
            .await?;
        decode(response).await
    }

    async fn delete(&self, id: u32) -> ClientResult<()> {
        // Body is a confirmation message, not a task
        let response = self.client.delete(self.config.item_url(id)).send().await?;
        expect_success(response)
    }
}
