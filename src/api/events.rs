use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde_json::{json, Value};
use tracing::{error, info, warn};

use crate::api::response::{ApiError, FIELDS_REQUIRED};
use crate::api::AppState;
use crate::config::UpstreamStatusMode;
use crate::models::EventFormData;
use crate::services::StoreError;

const FETCH_ALL_FAILED: &str = "Failed to fetch events";
const FETCH_ONE_FAILED: &str = "Failed to fetch event";
const CREATE_FAILED: &str = "Failed to create event";
const UPDATE_FAILED: &str = "Failed to update event";
const DELETE_FAILED: &str = "Failed to delete event";
const DELETED: &str = "Event deleted successfully";

type ProxyResult = Result<(StatusCode, Json<Value>), ApiError>;

pub async fn list_events(State(state): State<AppState>) -> ProxyResult {
    match state.store.list_events().await {
        Ok(events) => Ok((StatusCode::OK, Json(events))),
        Err(err) => {
            error!("Failed to fetch events: {}", err);
            Err(ApiError::internal(FETCH_ALL_FAILED))
        }
    }
}

pub async fn get_event(State(state): State<AppState>, Path(event_id): Path<String>) -> ProxyResult {
    match state.store.get_event(&event_id).await {
        Ok(event) => Ok((StatusCode::OK, Json(event))),
        Err(StoreError::NotFound { .. }) => {
            warn!("Event {} not found", event_id);
            Err(ApiError::not_found())
        }
        Err(err) => {
            error!("Failed to fetch event {}: {}", event_id, err);
            Err(ApiError::internal(FETCH_ONE_FAILED))
        }
    }
}

pub async fn create_event(State(state): State<AppState>, body: Bytes) -> ProxyResult {
    let payload = parse_payload(&body, CREATE_FAILED)?;

    match state.store.create_event(&payload).await {
        Ok(event) => {
            info!("Created event {}", event.get("id").unwrap_or(&serde_json::Value::Null));
            Ok((StatusCode::CREATED, Json(event)))
        }
        Err(err) => {
            error!("Failed to create event: {}", err);
            Err(rejection(&err, CREATE_FAILED, state.status_mode))
        }
    }
}

pub async fn update_event(
    State(state): State<AppState>,
    Path(event_id): Path<String>,
    body: Bytes,
) -> ProxyResult {
    let payload = parse_payload(&body, UPDATE_FAILED)?;

    match state.store.update_event(&event_id, &payload).await {
        Ok(event) => {
            info!("Updated event {}", event_id);
            Ok((StatusCode::OK, Json(event)))
        }
        Err(StoreError::NotFound { .. }) => {
            warn!("Event {} not found", event_id);
            Err(ApiError::not_found())
        }
        Err(err) => {
            error!("Failed to update event {}: {}", event_id, err);
            Err(rejection(&err, UPDATE_FAILED, state.status_mode))
        }
    }
}

pub async fn delete_event(State(state): State<AppState>, Path(event_id): Path<String>) -> ProxyResult {
    match state.store.delete_event(&event_id).await {
        Ok(()) => {
            info!("Deleted event {}", event_id);
            Ok((StatusCode::OK, Json(json!({ "message": DELETED }))))
        }
        Err(StoreError::NotFound { .. }) => {
            warn!("Event {} not found", event_id);
            Err(ApiError::not_found())
        }
        Err(err) => {
            error!("Failed to delete event {}: {}", event_id, err);
            Err(ApiError::internal(DELETE_FAILED))
        }
    }
}

fn parse_payload(body: &[u8], failure: &str) -> Result<EventFormData, ApiError> {
    let value: Value = serde_json::from_slice(body).map_err(|err| {
        error!("Unreadable event payload: {}", err);
        ApiError::internal(failure)
    })?;

    EventFormData::from_json_fields(&value).ok_or_else(|| {
        warn!("Rejected event payload with missing fields");
        ApiError::bad_request(FIELDS_REQUIRED)
    })
}

/// Maps a failed create/update to the response the browser sees.
fn rejection(err: &StoreError, default: &str, mode: UpstreamStatusMode) -> ApiError {
    let message = err.store_message().unwrap_or(default);

    match (mode, err) {
        (UpstreamStatusMode::Preserve, StoreError::Rejected { status, .. })
            if status.is_client_error() || status.is_server_error() =>
        {
            ApiError::new(*status, message)
        }
        (UpstreamStatusMode::Preserve, StoreError::NotFound { .. }) => {
            ApiError::new(StatusCode::NOT_FOUND, message)
        }
        _ => ApiError::internal(message),
    }
}
