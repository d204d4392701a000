pub mod api;
pub mod board;
pub mod filter;
pub mod form;
pub mod reducer;

pub use api::{ClientError, EventsApi, HttpEventsApi};
pub use board::{BoardController, BoardView, Dialog, EmptyState, EventBoard, Notification, NotificationLevel, SubmitOutcome};
pub use form::{validate, EventForm, FormErrors};
