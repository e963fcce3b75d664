use thiserror::Error;

/// Everything that can go wrong in the calendar core.
///
/// The core is pure and synchronous, so the taxonomy is narrow: malformed
/// static event configuration, or a caller handing us input that is a bug on
/// their side (an unknown view mode, an impossible month). None of these are
/// recovered from; they are surfaced immediately.
#[derive(Debug, Error)]
pub enum CalendarError {
    #[error("event `{id}` has an empty title")]
    EmptyTitle { id: String },

    #[error("event `{id}` ends before it starts ({end} < {start})")]
    EndBeforeStart {
        id: String,
        start: chrono::NaiveDateTime,
        end: chrono::NaiveDateTime,
    },

    #[error("event `{id}` has a registration URL but does not require registration")]
    UnexpectedRegistrationUrl { id: String },

    #[error("duplicate event id `{0}`")]
    DuplicateId(String),

    #[error("unknown event category `{0}`, expected one of: racing, cruising, social, meeting")]
    UnknownCategory(String),

    #[error("unknown view mode `{0}`, expected one of: month, week, day")]
    UnknownViewMode(String),

    #[error("no such month: year {year}, month {month}")]
    InvalidMonth { year: i32, month: u32 },

    #[error("malformed event configuration: {0}")]
    Config(#[from] serde_json::Error),
}
