use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode, Url};
use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;

use crate::models::{Event, EventFormData};

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("request failed with status {status}")]
    Api {
        status: StatusCode,
        message: Option<String>,
    },

    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("unexpected response body: {0}")]
    Decode(String),
}

impl ClientError {
    /// The server's `error` message when it sent one, else `default`.
    pub fn user_message(&self, default: &str) -> String {
        match self {
            ClientError::Api {
                message: Some(message),
                ..
            } if !message.is_empty() => message.clone(),
            _ => default.to_string(),
        }
    }
}

/// The browser-facing `/api/events` surface.
#[async_trait]
pub trait EventsApi: Send + Sync {
    async fn list(&self) -> Result<Vec<Event>, ClientError>;

    async fn create(&self, data: &EventFormData) -> Result<Event, ClientError>;

    async fn update(&self, id: &str, data: &EventFormData) -> Result<Event, ClientError>;

    async fn delete(&self, id: &str) -> Result<(), ClientError>;
}

#[derive(Clone)]
pub struct HttpEventsApi {
    client: Client,
    base_url: Url,
}

impl HttpEventsApi {
    pub fn new(base_url: Url) -> Self {
        Self {
            client: Client::new(),
            base_url,
        }
    }

    fn url(&self, id: Option<&str>) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(["api", "events"]);
            if let Some(id) = id {
                path.push(id);
            }
        }
        url
    }
}

#[async_trait]
impl EventsApi for HttpEventsApi {
    async fn list(&self) -> Result<Vec<Event>, ClientError> {
        let response = self.client.get(self.url(None)).send().await?;
        decode(check(response).await?).await
    }

    async fn create(&self, data: &EventFormData) -> Result<Event, ClientError> {
        let response = self.client.post(self.url(None)).json(data).send().await?;
        decode(check(response).await?).await
    }

    async fn update(&self, id: &str, data: &EventFormData) -> Result<Event, ClientError> {
        let response = self.client.put(self.url(Some(id))).json(data).send().await?;
        decode(check(response).await?).await
    }

    async fn delete(&self, id: &str) -> Result<(), ClientError> {
        let response = self.client.delete(self.url(Some(id))).send().await?;
        check(response).await?;
        Ok(())
    }
}

async fn check(response: Response) -> Result<Response, ClientError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let message = response
        .json::<Value>()
        .await
        .ok()
        .and_then(|body| body.get("error").and_then(Value::as_str).map(str::to_string));

    Err(ClientError::Api { status, message })
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ClientError> {
    let bytes = response.bytes().await?;
    serde_json::from_slice(&bytes).map_err(|e| ClientError::Decode(e.to_string()))
}
