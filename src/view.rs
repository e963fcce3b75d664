use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Duration, Months, NaiveDate, Utc};

use crate::error::CalendarError;
use crate::grid::{self, DayCell};

/// Display granularity of the calendar page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
    Month,
    Week,
    Day,
}

impl ViewMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ViewMode::Month => "month",
            ViewMode::Week => "week",
            ViewMode::Day => "day",
        }
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ViewMode {
    type Err = CalendarError;

    /// An unrecognized mode is a caller bug and is rejected rather than
    /// falling back to a default, which would mask it.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "month" => Ok(ViewMode::Month),
            "week" => Ok(ViewMode::Week),
            "day" => Ok(ViewMode::Day),
            other => Err(CalendarError::UnknownViewMode(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavAction {
    Prev,
    Next,
    Today,
}

/// View state for the calendar page: the current granularity and the anchor
/// date the displayed window centers on.
///
/// The state is only ever changed through [`navigate`](CalendarView::navigate)
/// and [`set_mode`](CalendarView::set_mode); render code gets read access and
/// nothing else. The controller lives for the whole page view and has no
/// terminal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarView {
    mode: ViewMode,
    anchor: NaiveDate,
}

impl CalendarView {
    /// Month view anchored on the current date.
    pub fn new() -> Self {
        Self::with_anchor(Utc::now().date_naive())
    }

    pub fn with_anchor(anchor: NaiveDate) -> Self {
        CalendarView {
            mode: ViewMode::Month,
            anchor,
        }
    }

    pub fn mode(&self) -> ViewMode {
        self.mode
    }

    pub fn anchor(&self) -> NaiveDate {
        self.anchor
    }

    /// Change granularity only; the anchor date stays put so the same date
    /// remains visible after the switch.
    pub fn set_mode(&mut self, mode: ViewMode) {
        self.mode = mode;
    }

    /// Shift the anchor by one unit of the current granularity, or reset it
    /// to today. Today never changes the mode.
    pub fn navigate(&mut self, action: NavAction) {
        self.navigate_from(action, Utc::now().date_naive());
    }

    /// [`navigate`](Self::navigate) with an explicit "today", so embedders
    /// and tests control the clock.
    pub fn navigate_from(&mut self, action: NavAction, today: NaiveDate) {
        self.anchor = match action {
            NavAction::Today => today,
            NavAction::Prev => self.step(-1),
            NavAction::Next => self.step(1),
        };
    }

    fn step(&self, direction: i64) -> NaiveDate {
        let shifted = match self.mode {
            ViewMode::Month => {
                let months = Months::new(1);
                if direction < 0 {
                    self.anchor.checked_sub_months(months)
                } else {
                    self.anchor.checked_add_months(months)
                }
            }
            ViewMode::Week => self.anchor.checked_add_signed(Duration::days(7 * direction)),
            ViewMode::Day => self.anchor.checked_add_signed(Duration::days(direction)),
        };

        // chrono's representable range is far beyond any club season; if we
        // ever hit the edge, staying put beats panicking mid-render.
        shifted.unwrap_or(self.anchor)
    }

    /// The month grid for the current anchor. Meaningful in any mode, but
    /// this is what month view renders.
    pub fn month_grid(&self) -> Vec<DayCell> {
        // The anchor's year/month always name a real month.
        grid::build_month_grid(self.anchor.year(), self.anchor.month())
            .unwrap_or_default()
    }

    /// The Sunday-aligned week around the current anchor, for week view.
    pub fn week_window(&self) -> [NaiveDate; 7] {
        grid::week_of(self.anchor)
    }
}

impl Default for CalendarView {
    fn default() -> Self {
        Self::new()
    }
}
