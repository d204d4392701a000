use chrono::{DateTime, Local, NaiveDate, Utc};
use tracing::{error, info, warn};

use crate::client::api::EventsApi;
use crate::client::filter::{filter_events, partition, venue_count};
use crate::client::form::EventForm;
use crate::client::reducer;
use crate::models::Event;

#[derive(Debug, Clone, PartialEq)]
pub enum Dialog {
    Closed,
    Creating,
    Editing(Event),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub level: NotificationLevel,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyState {
    NoEvents,
    NoMatches,
}

#[derive(Debug)]
pub struct BoardView<'a> {
    pub visible: Vec<&'a Event>,
    pub upcoming: Vec<&'a Event>,
    pub past: Vec<&'a Event>,

    pub total: usize,
    pub upcoming_count: usize,
    pub venue_count: usize,

    pub empty_state: Option<EmptyState>,
}

/// In-memory mirror of the store's event list plus the UI state around it.
#[derive(Debug, Clone)]
pub struct EventBoard {
    events: Vec<Event>,
    loading: bool,
    search_query: String,
    dialog: Dialog,
    pending_delete: Option<String>,
    notifications: Vec<Notification>,
}

impl Default for EventBoard {
    fn default() -> Self {
        Self::new()
    }
}

impl EventBoard {
    pub fn new() -> Self {
        Self {
            events: Vec::new(),
            loading: true,
            search_query: String::new(),
            dialog: Dialog::Closed,
            pending_delete: None,
            notifications: Vec::new(),
        }
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.search_query = query.into();
    }

    pub fn dialog(&self) -> &Dialog {
        &self.dialog
    }

    pub fn open_create(&mut self) {
        self.dialog = Dialog::Creating;
    }

    pub fn open_edit(&mut self, event: Event) {
        self.dialog = Dialog::Editing(event);
    }

    pub fn close_dialog(&mut self) {
        self.dialog = Dialog::Closed;
    }

    pub fn pending_delete(&self) -> Option<&str> {
        self.pending_delete.as_deref()
    }

    pub fn notifications(&self) -> &[Notification] {
        &self.notifications
    }

    pub fn take_notifications(&mut self) -> Vec<Notification> {
        std::mem::take(&mut self.notifications)
    }

    fn notify(&mut self, level: NotificationLevel, message: impl Into<String>) {
        self.notifications.push(Notification {
            level,
            message: message.into(),
        });
    }

    fn apply<F>(&mut self, update: F)
    where
        F: FnOnce(Vec<Event>) -> Vec<Event>,
    {
        let events = std::mem::take(&mut self.events);
        self.events = update(events);
    }

    /// Filtered and partitioned view. Totals always count the full list.
    pub fn view(&self, now: DateTime<Utc>) -> BoardView<'_> {
        let visible = filter_events(&self.events, &self.search_query);
        let split = partition(&visible, now);

        let empty_state = if visible.is_empty() {
            if self.search_query.trim().is_empty() {
                Some(EmptyState::NoEvents)
            } else {
                Some(EmptyState::NoMatches)
            }
        } else {
            None
        };

        BoardView {
            total: self.events.len(),
            upcoming_count: split.upcoming.len(),
            venue_count: venue_count(&self.events),
            upcoming: split.upcoming,
            past: split.past,
            visible,
            empty_state,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// Validation failed; nothing was sent.
    Invalid,
    Saved(Event),
    Failed(String),
}

pub struct BoardController<A: EventsApi> {
    api: A,
    board: EventBoard,
}

impl<A: EventsApi> BoardController<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            board: EventBoard::new(),
        }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn board(&self) -> &EventBoard {
        &self.board
    }

    pub fn board_mut(&mut self) -> &mut EventBoard {
        &mut self.board
    }

    pub async fn load(&mut self) {
        match self.api.list().await {
            Ok(events) => {
                info!("Loaded {} event(s)", events.len());
                self.board.events = events;
            }
            Err(err) => {
                error!("Error fetching events: {}", err);
                self.board.notify(NotificationLevel::Error, "Failed to load events");
            }
        }
        self.board.loading = false;
    }

    pub async fn submit_create(&mut self, form: &mut EventForm) -> SubmitOutcome {
        self.submit_create_as_of(form, Local::now().date_naive()).await
    }

    pub async fn submit_create_as_of(&mut self, form: &mut EventForm, today: NaiveDate) -> SubmitOutcome {
        if !form.validate(today) {
            warn!("Create form rejected: {} field error(s)", form.errors.len());
            return SubmitOutcome::Invalid;
        }

        form.submitting = true;
        let result = self.api.create(&form.data).await;
        form.submitting = false;

        match result {
            Ok(event) => {
                info!("Created event {}", event.id);
                let saved = event.clone();
                self.board.apply(|events| reducer::created(events, event));
                self.board.close_dialog();
                self.board.notify(NotificationLevel::Success, "Event created successfully");
                SubmitOutcome::Saved(saved)
            }
            Err(err) => {
                error!("Error creating event: {}", err);
                let message = err.user_message("Failed to create event");
                self.board.notify(NotificationLevel::Error, message.clone());
                SubmitOutcome::Failed(message)
            }
        }
    }

    pub async fn submit_update(&mut self, id: &str, form: &mut EventForm) -> SubmitOutcome {
        self.submit_update_as_of(id, form, Local::now().date_naive()).await
    }

    pub async fn submit_update_as_of(
        &mut self,
        id: &str,
        form: &mut EventForm,
        today: NaiveDate,
    ) -> SubmitOutcome {
        if !form.validate(today) {
            warn!("Edit form for {} rejected: {} field error(s)", id, form.errors.len());
            return SubmitOutcome::Invalid;
        }

        form.submitting = true;
        let result = self.api.update(id, &form.data).await;
        form.submitting = false;

        match result {
            Ok(event) => {
                info!("Updated event {}", id);
                let saved = event.clone();
                self.board.apply(|events| reducer::updated(events, id, event));
                self.board.close_dialog();
                self.board.notify(NotificationLevel::Success, "Event updated successfully");
                SubmitOutcome::Saved(saved)
            }
            Err(err) => {
                error!("Error updating event {}: {}", id, err);
                let message = err.user_message("Failed to update event");
                self.board.notify(NotificationLevel::Error, message.clone());
                SubmitOutcome::Failed(message)
            }
        }
    }

    /// First step of a delete: remember what the user wants gone.
    pub fn request_delete(&mut self, id: impl Into<String>) {
        self.board.pending_delete = Some(id.into());
    }

    pub fn cancel_delete(&mut self) {
        self.board.pending_delete = None;
    }

    /// Second step: issues the delete for the pending id, if any.
    ///
    /// Returns `true` when the event was removed.
    pub async fn confirm_delete(&mut self) -> bool {
        let Some(id) = self.board.pending_delete.take() else {
            return false;
        };

        match self.api.delete(&id).await {
            Ok(()) => {
                info!("Deleted event {}", id);
                self.board.apply(|events| reducer::deleted(events, &id));
                self.board.notify(NotificationLevel::Success, "Event deleted successfully");
                true
            }
            Err(err) => {
                error!("Error deleting event {}: {}", id, err);
                let message = err.user_message("Failed to delete event");
                self.board.notify(NotificationLevel::Error, message);
                false
            }
        }
    }
}
