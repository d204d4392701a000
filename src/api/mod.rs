pub mod events;
pub mod health;
pub mod response;
pub mod ui;

use axum::{routing::get, Router};

use crate::config::UpstreamStatusMode;
use crate::services::EventStoreClient;

#[derive(Clone)]
pub struct AppState {
    pub store: EventStoreClient,
    pub status_mode: UpstreamStatusMode,
}

pub fn build_router(store: EventStoreClient, status_mode: UpstreamStatusMode) -> Router {
    let state = AppState { store, status_mode };

    Router::new()
        .route("/", get(ui::dashboard_handler))
        .route("/health", get(health::health_check))
        .route(
            "/api/events",
            get(events::list_events).post(events::create_event),
        )
        .route(
            "/api/events/{id}",
            get(events::get_event)
                .put(events::update_event)
                .delete(events::delete_event),
        )
        .with_state(state)
}
