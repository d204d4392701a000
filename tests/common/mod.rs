#![allow(dead_code)]

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use chrono::Utc;
use eventdesk::models::{Event, EventFormData};
use reqwest::Url;
use serde_json::json;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::Mutex;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FailureMode {
    #[default]
    Healthy,
    /// 500 with a body that has no `error` member.
    ServerError,
    /// 400 with `{"error": "Venue is double-booked"}`.
    RejectWithMessage,
    /// 404 with `{"error": "No such calendar"}`.
    MissingWithMessage,
    /// 200 with a body that is not JSON.
    Garbage,
}

#[derive(Default)]
struct Inner {
    events: Vec<Event>,
    failure: FailureMode,
    requests: usize,
}

/// In-memory stand-in for the Remote Event Store, served on an ephemeral port.
#[derive(Clone)]
pub struct MockStore {
    inner: Arc<Mutex<Inner>>,
    pub base_url: Url,
}

impl MockStore {
    pub async fn start() -> Self {
        let inner = Arc::new(Mutex::new(Inner::default()));

        let app = Router::new()
            .route("/api/events/", get(list_events).post(create_event))
            .route(
                "/api/events/{id}/",
                get(get_event).put(update_event).delete(delete_event),
            )
            .with_state(inner.clone());

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            inner,
            base_url: Url::parse(&format!("http://{}/api", addr)).unwrap(),
        }
    }

    pub async fn set_failure(&self, mode: FailureMode) {
        self.inner.lock().await.failure = mode;
    }

    pub async fn request_count(&self) -> usize {
        self.inner.lock().await.requests
    }

    pub async fn events(&self) -> Vec<Event> {
        self.inner.lock().await.events.clone()
    }

    pub async fn seed(&self, data: EventFormData) -> Event {
        let event = new_event(data);
        self.inner.lock().await.events.push(event.clone());
        event
    }
}

pub fn form(title: &str, description: &str, venue: &str, date: &str, time: &str) -> EventFormData {
    EventFormData {
        title: title.to_string(),
        description: description.to_string(),
        venue: venue.to_string(),
        date: date.to_string(),
        time: time.to_string(),
    }
}

pub fn meetup() -> EventFormData {
    form("Meetup", "A short team sync meeting", "Room 4", "2099-01-01", "10:00")
}

/// Binds and immediately releases a port, so nothing is listening there.
pub async fn dead_url() -> Url {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    Url::parse(&format!("http://{}/api", addr)).unwrap()
}

fn new_event(data: EventFormData) -> Event {
    let now = Utc::now();
    Event {
        id: Uuid::new_v4().to_string(),
        title: data.title,
        description: data.description,
        venue: data.venue,
        date: data.date,
        time: data.time,
        created_at: now,
        updated_at: now,
    }
}

type Shared = Arc<Mutex<Inner>>;

async fn begin(state: &Shared) -> Option<Response> {
    let mut inner = state.lock().await;
    inner.requests += 1;

    match inner.failure {
        FailureMode::Healthy => None,
        FailureMode::ServerError => Some(
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({"detail": "database unavailable"})),
            )
                .into_response(),
        ),
        FailureMode::RejectWithMessage => Some(
            (
                StatusCode::BAD_REQUEST,
                Json(json!({"error": "Venue is double-booked"})),
            )
                .into_response(),
        ),
        FailureMode::MissingWithMessage => Some(
            (
                StatusCode::NOT_FOUND,
                Json(json!({"error": "No such calendar"})),
            )
                .into_response(),
        ),
        FailureMode::Garbage => Some((StatusCode::OK, "<html>oops</html>").into_response()),
    }
}

fn not_found() -> Response {
    (StatusCode::NOT_FOUND, Json(json!({"detail": "Not found."}))).into_response()
}

async fn list_events(State(state): State<Shared>) -> Response {
    if let Some(failure) = begin(&state).await {
        return failure;
    }

    let mut events = state.lock().await.events.clone();
    events.sort_by(|a, b| (&a.date, &a.time).cmp(&(&b.date, &b.time)));
    Json(events).into_response()
}

async fn get_event(State(state): State<Shared>, Path(id): Path<String>) -> Response {
    if let Some(failure) = begin(&state).await {
        return failure;
    }

    let inner = state.lock().await;
    match inner.events.iter().find(|e| e.id == id) {
        Some(event) => Json(event.clone()).into_response(),
        None => not_found(),
    }
}

async fn create_event(State(state): State<Shared>, Json(data): Json<EventFormData>) -> Response {
    if let Some(failure) = begin(&state).await {
        return failure;
    }

    let event = new_event(data);
    state.lock().await.events.push(event.clone());
    (StatusCode::CREATED, Json(event)).into_response()
}

async fn update_event(
    State(state): State<Shared>,
    Path(id): Path<String>,
    Json(data): Json<EventFormData>,
) -> Response {
    if let Some(failure) = begin(&state).await {
        return failure;
    }

    let mut inner = state.lock().await;
    match inner.events.iter_mut().find(|e| e.id == id) {
        Some(event) => {
            event.title = data.title;
            event.description = data.description;
            event.venue = data.venue;
            event.date = data.date;
            event.time = data.time;
            event.updated_at = Utc::now();
            Json(event.clone()).into_response()
        }
        None => not_found(),
    }
}

async fn delete_event(State(state): State<Shared>, Path(id): Path<String>) -> Response {
    if let Some(failure) = begin(&state).await {
        return failure;
    }

    let mut inner = state.lock().await;
    let before = inner.events.len();
    inner.events.retain(|e| e.id != id);

    if inner.events.len() == before {
        not_found()
    } else {
        Json(json!({"message": "Event deleted successfully"})).into_response()
    }
}
