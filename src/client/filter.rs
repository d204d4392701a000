use chrono::{DateTime, NaiveDate, Utc};
use std::collections::HashSet;

use crate::models::Event;

pub fn matches_query(event: &Event, query: &str) -> bool {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }

    [&event.title, &event.description, &event.venue]
        .iter()
        .any(|field| field.to_lowercase().contains(&needle))
}

/// Events whose title, description or venue contain `query`, ignoring case.
/// A blank query keeps everything.
pub fn filter_events<'a>(events: &'a [Event], query: &str) -> Vec<&'a Event> {
    events
        .iter()
        .filter(|event| matches_query(event, query))
        .collect()
}

/// The instant an event's date stands for: midnight UTC of that day.
pub fn event_instant(event: &Event) -> Option<DateTime<Utc>> {
    let raw = event.date.trim();

    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return date.and_hms_opt(0, 0, 0).map(|dt| dt.and_utc());
    }

    DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

/// Unparseable dates count as past.
pub fn is_upcoming(event: &Event, now: DateTime<Utc>) -> bool {
    event_instant(event).is_some_and(|instant| instant >= now)
}

#[derive(Debug, Default)]
pub struct Partition<'a> {
    pub upcoming: Vec<&'a Event>,
    pub past: Vec<&'a Event>,
}

pub fn partition<'a>(events: &[&'a Event], now: DateTime<Utc>) -> Partition<'a> {
    let (upcoming, past): (Vec<&'a Event>, Vec<&'a Event>) = events
        .iter()
        .copied()
        .partition(|event| is_upcoming(event, now));
    Partition { upcoming, past }
}

pub fn venue_count(events: &[Event]) -> usize {
    events
        .iter()
        .map(|event| event.venue.as_str())
        .collect::<HashSet<_>>()
        .len()
}
