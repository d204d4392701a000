use reqwest::{Client, Response, StatusCode, Url};
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, warn};

use crate::models::EventFormData;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("event not found")]
    NotFound { message: Option<String> },

    #[error("event store returned status {status}")]
    Rejected {
        status: StatusCode,
        message: Option<String>,
    },

    #[error("event store request failed: {0}")]
    Transport(#[from] reqwest::Error),
}

impl StoreError {
    /// The `error` member of the store's rejection body, when it sent one.
    pub fn store_message(&self) -> Option<&str> {
        match self {
            StoreError::NotFound { message } | StoreError::Rejected { message, .. } => {
                message.as_deref()
            }
            StoreError::Transport(_) => None,
        }
    }
}

/// Client for the Remote Event Store.
///
/// Every call is a single request with no retry. No timeout is set beyond
/// reqwest's defaults.
#[derive(Clone)]
pub struct EventStoreClient {
    client: Client,
    base_url: Url,
}

impl EventStoreClient {
    pub fn new(base_url: Url) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(client: Client, base_url: Url) -> Self {
        Self { client, base_url }
    }

    pub fn events_url(&self) -> Url {
        self.endpoint(&["events"])
    }

    pub fn event_url(&self, id: &str) -> Url {
        self.endpoint(&["events", id])
    }

    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments).push("");
        }
        url
    }

    pub async fn list_events(&self) -> Result<Value, StoreError> {
        let url = self.events_url();
        debug!("GET {}", url);
        let response = check_status(self.client.get(url).send().await?).await?;
        Ok(response.json().await?)
    }

    pub async fn get_event(&self, id: &str) -> Result<Value, StoreError> {
        let url = self.event_url(id);
        debug!("GET {}", url);
        let response = check_status(self.client.get(url).send().await?).await?;
        Ok(response.json().await?)
    }

    pub async fn create_event(&self, data: &EventFormData) -> Result<Value, StoreError> {
        let url = self.events_url();
        debug!("POST {}", url);
        let response = check_status(self.client.post(url).json(data).send().await?).await?;
        Ok(response.json().await?)
    }

    pub async fn update_event(&self, id: &str, data: &EventFormData) -> Result<Value, StoreError> {
        let url = self.event_url(id);
        debug!("PUT {}", url);
        let response = check_status(self.client.put(url).json(data).send().await?).await?;
        Ok(response.json().await?)
    }

    pub async fn delete_event(&self, id: &str) -> Result<(), StoreError> {
        let url = self.event_url(id);
        debug!("DELETE {}", url);
        check_status(self.client.delete(url).send().await?).await?;
        Ok(())
    }
}

async fn check_status(response: Response) -> Result<Response, StoreError> {
    let status = response.status();

    if status.is_success() {
        return Ok(response);
    }

    let message = response
        .json::<Value>()
        .await
        .ok()
        .and_then(|body| body.get("error").and_then(Value::as_str).map(str::to_string));

    warn!("Event store answered {} ({:?})", status, message);

    if status == StatusCode::NOT_FOUND {
        return Err(StoreError::NotFound { message });
    }

    Err(StoreError::Rejected { status, message })
}
