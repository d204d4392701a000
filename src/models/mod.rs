pub mod event;

pub use event::{Event, EventFormData, FormField};
