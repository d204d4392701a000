use chrono::NaiveDate;
use std::collections::BTreeMap;

use crate::models::{Event, EventFormData, FormField};

pub const TITLE_MIN_LEN: usize = 3;
pub const DESCRIPTION_MIN_LEN: usize = 10;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormErrors {
    errors: BTreeMap<FormField, String>,
}

impl FormErrors {
    pub fn get(&self, field: FormField) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    pub fn insert(&mut self, field: FormField, message: impl Into<String>) {
        self.errors.insert(field, message.into());
    }

    pub fn clear(&mut self, field: FormField) {
        self.errors.remove(&field);
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }
}

/// Checks every field and collects all applicable errors.
pub fn validate(data: &EventFormData, today: NaiveDate) -> FormErrors {
    let mut errors = FormErrors::default();

    if data.title.trim().is_empty() {
        errors.insert(FormField::Title, "Title is required");
    } else if data.title.chars().count() < TITLE_MIN_LEN {
        errors.insert(FormField::Title, "Title must be at least 3 characters");
    }

    if data.description.trim().is_empty() {
        errors.insert(FormField::Description, "Description is required");
    } else if data.description.chars().count() < DESCRIPTION_MIN_LEN {
        errors.insert(FormField::Description, "Description must be at least 10 characters");
    }

    if data.venue.trim().is_empty() {
        errors.insert(FormField::Venue, "Venue is required");
    }

    let date = data.date.trim();
    if date.is_empty() {
        errors.insert(FormField::Date, "Date is required");
    } else {
        match NaiveDate::parse_from_str(date, "%Y-%m-%d") {
            Ok(selected) if selected < today => {
                errors.insert(FormField::Date, "Date cannot be in the past");
            }
            Ok(_) => {}
            Err(_) => errors.insert(FormField::Date, "Date must be a valid calendar date"),
        }
    }

    if data.time.is_empty() {
        errors.insert(FormField::Time, "Time is required");
    }

    errors
}

#[derive(Debug, Clone, Default)]
pub struct EventForm {
    pub data: EventFormData,
    pub errors: FormErrors,
    pub submitting: bool,
}

impl EventForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn for_event(event: &Event) -> Self {
        Self {
            data: event.form_data(),
            ..Self::default()
        }
    }

    /// Editing a field drops its error without re-checking the others.
    pub fn set_field(&mut self, field: FormField, value: impl Into<String>) {
        self.data.set(field, value);
        self.errors.clear(field);
    }

    pub fn validate(&mut self, today: NaiveDate) -> bool {
        self.errors = validate(&self.data, today);
        self.errors.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 14).unwrap()
    }

    fn valid() -> EventFormData {
        EventFormData {
            title: "Meetup".to_string(),
            description: "A short team sync meeting".to_string(),
            venue: "Room 4".to_string(),
            date: "2099-01-01".to_string(),
            time: "10:00".to_string(),
        }
    }

    #[test]
    fn test_valid_form_has_no_errors() {
        assert!(validate(&valid(), today()).is_empty());
    }

    #[test]
    fn test_empty_form_reports_every_field() {
        let errors = validate(&EventFormData::default(), today());

        assert_eq!(errors.len(), 5);
        assert_eq!(errors.get(FormField::Title), Some("Title is required"));
        assert_eq!(errors.get(FormField::Description), Some("Description is required"));
        assert_eq!(errors.get(FormField::Venue), Some("Venue is required"));
        assert_eq!(errors.get(FormField::Date), Some("Date is required"));
        assert_eq!(errors.get(FormField::Time), Some("Time is required"));
    }

    #[test]
    fn test_whitespace_counts_as_empty() {
        let mut data = valid();
        data.title = "    ".to_string();
        data.venue = "\t".to_string();

        let errors = validate(&data, today());
        assert_eq!(errors.get(FormField::Title), Some("Title is required"));
        assert_eq!(errors.get(FormField::Venue), Some("Venue is required"));
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn test_minimum_lengths() {
        let mut data = valid();
        data.title = "Hi".to_string();
        data.description = "Too short".to_string();

        let errors = validate(&data, today());
        assert_eq!(errors.get(FormField::Title), Some("Title must be at least 3 characters"));
        assert_eq!(
            errors.get(FormField::Description),
            Some("Description must be at least 10 characters")
        );

        data.title = "Día".to_string();
        data.description = "Exactly 10".to_string();
        assert!(validate(&data, today()).is_empty());
    }

    #[test]
    fn test_time_only_needs_a_value() {
        let mut data = valid();

        data.time = "   ".to_string();
        assert_eq!(validate(&data, today()).get(FormField::Time), None);

        data.time = String::new();
        assert_eq!(validate(&data, today()).get(FormField::Time), Some("Time is required"));
    }

    #[test]
    fn test_date_rules() {
        let mut data = valid();

        data.date = "2026-10-14".to_string();
        assert!(validate(&data, today()).is_empty());

        data.date = "2026-10-13".to_string();
        assert_eq!(
            validate(&data, today()).get(FormField::Date),
            Some("Date cannot be in the past")
        );

        data.date = "2026-02-30".to_string();
        assert_eq!(
            validate(&data, today()).get(FormField::Date),
            Some("Date must be a valid calendar date")
        );
    }

    #[test]
    fn test_editing_clears_only_that_field() {
        let mut form = EventForm::new();
        assert!(!form.validate(today()));
        assert_eq!(form.errors.len(), 5);

        form.set_field(FormField::Title, "x");
        assert_eq!(form.errors.get(FormField::Title), None);
        assert_eq!(form.errors.len(), 4);

        assert!(!form.validate(today()));
        assert_eq!(
            form.errors.get(FormField::Title),
            Some("Title must be at least 3 characters")
        );
    }
}
