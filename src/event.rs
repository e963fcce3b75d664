use std::fmt;
use std::str::FromStr;

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::error::CalendarError;

/// The closed set of event classifications used by the club calendar.
///
/// Anything outside these four is a configuration error and is rejected when
/// the event data is loaded, never silently accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Racing,
    Cruising,
    Social,
    Meeting,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Racing,
        Category::Cruising,
        Category::Social,
        Category::Meeting,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Racing => "racing",
            Category::Cruising => "cruising",
            Category::Social => "social",
            Category::Meeting => "meeting",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "racing" => Ok(Category::Racing),
            "cruising" => Ok(Category::Cruising),
            "social" => Ok(Category::Social),
            "meeting" => Ok(Category::Meeting),
            other => Err(CalendarError::UnknownCategory(other.to_string())),
        }
    }
}

/// One dated occurrence on the club calendar.
///
/// Events are created once when the static configuration is loaded and are
/// immutable afterwards; there are no update or delete operations anywhere in
/// the core.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub id: String,
    pub title: String,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub category: Category,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// Human-readable recurrence text ("Every other Wednesday"); display
    /// only, never expanded into additional occurrences.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recurrence: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub registration_required: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub registration_url: Option<String>,
}

impl Event {
    /// The calendar date an event is filed under in grid views; time of day
    /// is ignored for cell association.
    pub fn start_date(&self) -> NaiveDate {
        self.start.date()
    }

    /// Check the construction-time invariants.
    ///
    /// Called for every event entering an [`crate::EventStore`] so that
    /// malformed configuration fails at load time instead of surfacing later
    /// as a filtering anomaly.
    pub fn validate(&self) -> Result<(), CalendarError> {
        if self.title.trim().is_empty() {
            return Err(CalendarError::EmptyTitle {
                id: self.id.clone(),
            });
        }

        if self.end < self.start {
            return Err(CalendarError::EndBeforeStart {
                id: self.id.clone(),
                start: self.start,
                end: self.end,
            });
        }

        if self.registration_url.is_some() && !self.registration_required {
            return Err(CalendarError::UnexpectedRegistrationUrl {
                id: self.id.clone(),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn event(start_h: u32, end_h: u32) -> Event {
        let day = NaiveDate::from_ymd_opt(2025, 3, 15).unwrap();
        Event {
            id: "race-1".into(),
            title: "Spring Racing Kickoff".into(),
            start: day.and_hms_opt(start_h, 0, 0).unwrap(),
            end: day.and_hms_opt(end_h, 0, 0).unwrap(),
            category: Category::Racing,
            location: None,
            recurrence: None,
            description: None,
            registration_required: false,
            registration_url: None,
        }
    }

    #[test]
    fn valid_event_passes() {
        assert!(event(9, 13).validate().is_ok());
    }

    #[test]
    fn zero_length_event_is_allowed() {
        // end == start is fine, only end < start is rejected
        assert!(event(9, 9).validate().is_ok());
    }

    #[test]
    fn end_before_start_is_rejected() {
        assert!(matches!(
            event(13, 9).validate(),
            Err(CalendarError::EndBeforeStart { .. })
        ));
    }

    #[test]
    fn blank_title_is_rejected() {
        let mut ev = event(9, 13);
        ev.title = "   ".into();
        assert!(matches!(
            ev.validate(),
            Err(CalendarError::EmptyTitle { .. })
        ));
    }

    #[test]
    fn registration_url_requires_registration_flag() {
        let mut ev = event(9, 13);
        ev.registration_url = Some("https://windwardyc.example/register".into());
        assert!(matches!(
            ev.validate(),
            Err(CalendarError::UnexpectedRegistrationUrl { .. })
        ));

        ev.registration_required = true;
        assert!(ev.validate().is_ok());
    }

    #[test]
    fn category_round_trips_through_str() {
        for category in Category::ALL {
            assert_eq!(category.as_str().parse::<Category>().unwrap(), category);
        }
    }

    #[test]
    fn unknown_category_is_rejected() {
        assert!(matches!(
            "regatta".parse::<Category>(),
            Err(CalendarError::UnknownCategory(_))
        ));
    }

    #[test]
    fn unknown_category_fails_deserialization() {
        let json = r#"{
            "id": "x",
            "title": "Mystery",
            "start": "2025-03-15T09:00:00",
            "end": "2025-03-15T10:00:00",
            "category": "regatta"
        }"#;
        assert!(serde_json::from_str::<Event>(json).is_err());
    }
}
