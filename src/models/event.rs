use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: String,

    pub title: String,

    pub description: String,

    pub venue: String,

    pub date: String,

    pub time: String,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Event {
    pub fn form_data(&self) -> EventFormData {
        EventFormData {
            title: self.title.clone(),
            description: self.description.clone(),
            venue: self.venue.clone(),
            date: self.date.clone(),
            time: self.time.clone(),
        }
    }
}

/// The editable subset of an [`Event`]; the store assigns everything else.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventFormData {
    pub title: String,
    pub description: String,
    pub venue: String,
    pub date: String,
    pub time: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FormField {
    Title,
    Description,
    Venue,
    Date,
    Time,
}

impl FormField {
    pub const ALL: [FormField; 5] = [
        FormField::Title,
        FormField::Description,
        FormField::Venue,
        FormField::Date,
        FormField::Time,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FormField::Title => "title",
            FormField::Description => "description",
            FormField::Venue => "venue",
            FormField::Date => "date",
            FormField::Time => "time",
        }
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl EventFormData {
    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Title => &self.title,
            FormField::Description => &self.description,
            FormField::Venue => &self.venue,
            FormField::Date => &self.date,
            FormField::Time => &self.time,
        }
    }

    pub fn set(&mut self, field: FormField, value: impl Into<String>) {
        let value = value.into();
        match field {
            FormField::Title => self.title = value,
            FormField::Description => self.description = value,
            FormField::Venue => self.venue = value,
            FormField::Date => self.date = value,
            FormField::Time => self.time = value,
        }
    }

    /// Pulls the five fields out of an arbitrary JSON request body.
    ///
    /// Returns `None` unless every field is a non-empty string. Any other
    /// members of the body are ignored.
    pub fn from_json_fields(body: &Value) -> Option<Self> {
        let object = body.as_object()?;
        let mut data = EventFormData::default();

        for field in FormField::ALL {
            match object.get(field.as_str()) {
                Some(Value::String(s)) if !s.is_empty() => data.set(field, s.clone()),
                _ => return None,
            }
        }

        Some(data)
    }
}
