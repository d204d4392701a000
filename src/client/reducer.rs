//! List updates applied after the store confirms a mutation.

use crate::models::Event;

/// Appends at the end; the list is not re-sorted.
pub fn created(mut events: Vec<Event>, event: Event) -> Vec<Event> {
    events.push(event);
    events
}

pub fn updated(events: Vec<Event>, id: &str, event: Event) -> Vec<Event> {
    events
        .into_iter()
        .map(|existing| if existing.id == id { event.clone() } else { existing })
        .collect()
}

pub fn deleted(events: Vec<Event>, id: &str) -> Vec<Event> {
    events.into_iter().filter(|event| event.id != id).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn event(id: &str, title: &str, date: &str) -> Event {
        let stamp = Utc.with_ymd_and_hms(2025, 1, 1, 12, 0, 0).unwrap();
        Event {
            id: id.to_string(),
            title: title.to_string(),
            description: "Something worth attending".to_string(),
            venue: "Room 4".to_string(),
            date: date.to_string(),
            time: "10:00".to_string(),
            created_at: stamp,
            updated_at: stamp,
        }
    }

    #[test]
    fn test_created_appends_without_sorting() {
        let events = vec![event("a", "Later", "2099-12-31")];
        let events = created(events, event("b", "Earlier", "2030-01-01"));

        let ids: Vec<&str> = events.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b"]);
    }

    #[test]
    fn test_updated_replaces_by_id_in_place() {
        let events = vec![event("a", "One", "2099-01-01"), event("b", "Two", "2099-01-02")];
        let mut replacement = event("b", "Two (moved)", "2099-02-02");
        replacement.updated_at = Utc.with_ymd_and_hms(2025, 2, 1, 8, 0, 0).unwrap();

        let events = updated(events, "b", replacement.clone());
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].title, "One");
        assert_eq!(events[1], replacement);
    }

    #[test]
    fn test_updated_unknown_id_is_noop() {
        let events = vec![event("a", "One", "2099-01-01")];
        let before = events.clone();
        assert_eq!(updated(events, "zzz", event("zzz", "Ghost", "2099-01-01")), before);
    }

    #[test]
    fn test_deleted_removes_by_id() {
        let events = vec![event("a", "One", "2099-01-01"), event("b", "Two", "2099-01-02")];
        let events = deleted(events, "a");
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].id, "b");
        assert_eq!(deleted(events, "missing").len(), 1);
    }
}
