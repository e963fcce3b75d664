//! Calendar core for the Windward Yacht Club website.
//!
//! Everything here is synchronous and pure: a validated, read-only
//! [`EventStore`], a stable category [`filter`], a Sunday-first month
//! [`grid`] builder, the [`CalendarView`] navigation state machine, and
//! iCalendar export for single events or the whole club calendar. The
//! surrounding UI owns rendering and downloads; this crate owns the data
//! shaping.

mod error;
mod event;
mod filter;
mod grid;
mod ics;
mod store;
mod view;

pub use error::CalendarError;
pub use event::{Category, Event};
pub use filter::by_category;
pub use grid::{build_month_grid, days_in_month, week_of, DayCell};
pub use crate::ics::{download_filename, export_event, export_events};
pub use store::{club_calendar, EventStore};
pub use view::{CalendarView, NavAction, ViewMode};
