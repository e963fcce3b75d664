use chrono::{Datelike, Duration, NaiveDate};

use crate::error::CalendarError;
use crate::event::Event;

/// One position in a month grid: a real calendar date, or blank padding
/// before the 1st / after the last day that keeps weeks rectangular.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayCell {
    Padding,
    Day(NaiveDate),
}

impl DayCell {
    pub fn date(&self) -> Option<NaiveDate> {
        match self {
            DayCell::Padding => None,
            DayCell::Day(date) => Some(*date),
        }
    }

    pub fn is_padding(&self) -> bool {
        matches!(self, DayCell::Padding)
    }

    /// Events filed under this cell. Padding cells match nothing.
    pub fn events<'a>(&self, events: &'a [Event]) -> Vec<&'a Event> {
        match self.date() {
            Some(date) => events
                .iter()
                .filter(|event| event.start_date() == date)
                .collect(),
            None => Vec::new(),
        }
    }
}

/// Build the cell sequence for a month view, weeks starting on Sunday.
///
/// The result always has a length that is a multiple of 7: leading padding
/// places day 1 in its weekday column, then one cell per day of the month,
/// then trailing padding to complete the final week. Rebuilt fresh on every
/// call; there is no hidden state to invalidate.
pub fn build_month_grid(year: i32, month: u32) -> Result<Vec<DayCell>, CalendarError> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)
        .ok_or(CalendarError::InvalidMonth { year, month })?;

    let leading = first.weekday().num_days_from_sunday() as i64;
    let days = days_in_month(first);

    let mut cells = Vec::with_capacity((leading + days) as usize + 6);
    cells.extend(std::iter::repeat(DayCell::Padding).take(leading as usize));
    cells.extend((0..days).map(|offset| DayCell::Day(first + Duration::days(offset))));

    while cells.len() % 7 != 0 {
        cells.push(DayCell::Padding);
    }

    Ok(cells)
}

/// Number of days in the month containing `date`: the last day is one day
/// before the 1st of the following month, which also handles the December
/// wrap and leap Februaries.
pub fn days_in_month(date: NaiveDate) -> i64 {
    let (next_year, next_month) = if date.month() == 12 {
        (date.year() + 1, 1)
    } else {
        (date.year(), date.month() + 1)
    };

    // Both dates are the 1st of a real month, so construction cannot fail.
    let first = NaiveDate::from_ymd_opt(date.year(), date.month(), 1)
        .unwrap_or(date);
    let next_first = NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .unwrap_or(date);

    (next_first - first).num_days()
}

/// The Sunday-aligned week containing `anchor`, as seven consecutive dates.
pub fn week_of(anchor: NaiveDate) -> [NaiveDate; 7] {
    let sunday = anchor - Duration::days(anchor.weekday().num_days_from_sunday() as i64);
    std::array::from_fn(|offset| sunday + Duration::days(offset as i64))
}
