use chrono::NaiveDate;
use log::{debug, info};
use once_cell::sync::Lazy;

use crate::error::CalendarError;
use crate::event::Event;

/// The canonical, read-only collection of club events.
///
/// Populated once from static configuration; no write operations exist after
/// construction. Every event is validated on the way in so that malformed
/// configuration fails loudly at load time.
#[derive(Debug, Clone)]
pub struct EventStore {
    events: Vec<Event>,
}

impl EventStore {
    /// Build a store from already-constructed events, enforcing the per-event
    /// invariants and id uniqueness.
    pub fn from_events(events: Vec<Event>) -> Result<Self, CalendarError> {
        for (idx, event) in events.iter().enumerate() {
            event.validate()?;

            if events[..idx].iter().any(|other| other.id == event.id) {
                return Err(CalendarError::DuplicateId(event.id.clone()));
            }
        }

        debug!("event store loaded with {} events", events.len());
        Ok(EventStore { events })
    }

    /// Build a store from a JSON array of event records.
    pub fn from_json(json: &str) -> Result<Self, CalendarError> {
        let events: Vec<Event> = serde_json::from_str(json)?;
        Self::from_events(events)
    }

    /// All events, in configuration order.
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn get(&self, id: &str) -> Option<&Event> {
        self.events.iter().find(|event| event.id == id)
    }

    /// Events filed under the given calendar date (start date match, time of
    /// day ignored), in configuration order.
    pub fn events_on(&self, date: NaiveDate) -> Vec<&Event> {
        self.events
            .iter()
            .filter(|event| event.start_date() == date)
            .collect()
    }

    /// Events starting on or after `from`, soonest first. Feeds the site's
    /// "upcoming events" list.
    pub fn upcoming(&self, from: NaiveDate) -> Vec<&Event> {
        let mut upcoming: Vec<&Event> = self
            .events
            .iter()
            .filter(|event| event.start_date() >= from)
            .collect();
        upcoming.sort_by_key(|event| event.start);
        upcoming
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

/// The club's built-in calendar, parsed once from the embedded configuration.
///
/// The seed data ships with the crate; a broken seed is a packaging defect,
/// so failing the process here is the intended load-time behavior.
pub fn club_calendar() -> &'static EventStore {
    static STORE: Lazy<EventStore> = Lazy::new(|| {
        let store = EventStore::from_json(include_str!("../data/events.json"))
            .expect("embedded club calendar data is valid");
        info!("club calendar ready: {} events", store.len());
        store
    });

    &STORE
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::Category;
    use chrono::NaiveDate;

    fn event(id: &str, day: u32, category: Category) -> Event {
        let date = NaiveDate::from_ymd_opt(2025, 6, day).unwrap();
        Event {
            id: id.into(),
            title: format!("Event {id}"),
            start: date.and_hms_opt(10, 0, 0).unwrap(),
            end: date.and_hms_opt(12, 0, 0).unwrap(),
            category,
            location: None,
            recurrence: None,
            description: None,
            registration_required: false,
            registration_url: None,
        }
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let result = EventStore::from_events(vec![
            event("a", 1, Category::Racing),
            event("a", 2, Category::Social),
        ]);
        assert!(matches!(result, Err(CalendarError::DuplicateId(id)) if id == "a"));
    }

    #[test]
    fn invalid_event_fails_store_construction() {
        let mut bad = event("a", 1, Category::Racing);
        bad.end = bad.start - chrono::Duration::hours(1);
        assert!(EventStore::from_events(vec![bad]).is_err());
    }

    #[test]
    fn lookup_by_id() {
        let store = EventStore::from_events(vec![
            event("a", 1, Category::Racing),
            event("b", 2, Category::Social),
        ])
        .unwrap();

        assert_eq!(store.get("b").unwrap().id, "b");
        assert!(store.get("c").is_none());
    }

    #[test]
    fn events_on_matches_start_date_only() {
        let mut late = event("late", 3, Category::Meeting);
        late.start = NaiveDate::from_ymd_opt(2025, 6, 3)
            .unwrap()
            .and_hms_opt(23, 30, 0)
            .unwrap();
        late.end = late.start;

        let store =
            EventStore::from_events(vec![event("a", 3, Category::Racing), late]).unwrap();

        let day = NaiveDate::from_ymd_opt(2025, 6, 3).unwrap();
        let found = store.events_on(day);
        assert_eq!(found.len(), 2);
        assert!(store
            .events_on(NaiveDate::from_ymd_opt(2025, 6, 4).unwrap())
            .is_empty());
    }

    #[test]
    fn upcoming_is_sorted_and_bounded() {
        let store = EventStore::from_events(vec![
            event("c", 20, Category::Social),
            event("a", 5, Category::Racing),
            event("b", 10, Category::Cruising),
        ])
        .unwrap();

        let from = NaiveDate::from_ymd_opt(2025, 6, 6).unwrap();
        let ids: Vec<&str> = store
            .upcoming(from)
            .iter()
            .map(|event| event.id.as_str())
            .collect();
        assert_eq!(ids, ["b", "c"]);
    }

    #[test]
    fn from_json_rejects_end_before_start() {
        let json = r#"[{
            "id": "x",
            "title": "Backwards",
            "start": "2025-03-15T13:00:00",
            "end": "2025-03-15T09:00:00",
            "category": "racing"
        }]"#;
        assert!(matches!(
            EventStore::from_json(json),
            Err(CalendarError::EndBeforeStart { .. })
        ));
    }

    #[test]
    fn builtin_calendar_loads() {
        let store = club_calendar();
        assert!(!store.is_empty());
    }
}
