use ics::properties::{Categories, Description, DtEnd, DtStart, Location, Summary, URL};
use ics::ICalendar;

use crate::event::Event;

const PRODID: &str = "-//Windward Yacht Club//Events//EN";

/// iCalendar timestamp, floating local time.
fn format_stamp(stamp: chrono::NaiveDateTime) -> String {
    stamp.format("%Y%m%dT%H%M%S").to_string()
}

impl Event {
    /// Build the VEVENT block for this event. Optional fields produce no
    /// line at all when absent, never an empty one.
    pub fn to_ics(&self) -> ics::Event<'_> {
        let start = format_stamp(self.start);
        let end = format_stamp(self.end);
        let uid = format!("{}@windwardyc", self.id);

        let mut ics_event = ics::Event::new(uid, start.clone());

        ics_event.push(DtStart::new(start));
        ics_event.push(DtEnd::new(end));
        ics_event.push(Summary::new(&self.title));
        ics_event.push(Categories::new(self.category.as_str()));

        if let Some(description) = &self.description {
            ics_event.push(Description::new(description));
        }

        if let Some(location) = &self.location {
            ics_event.push(Location::new(location));
        }

        if let Some(url) = &self.registration_url {
            ics_event.push(URL::new(url));
        }

        ics_event
    }
}

/// Render a single event as a complete downloadable VCALENDAR text block.
///
/// Pure function; handing the text to a file-download mechanism is the
/// caller's business.
pub fn export_event(event: &Event) -> String {
    let mut icalendar = ICalendar::new("2.0", PRODID);
    icalendar.add_event(event.to_ics());
    icalendar.to_string()
}

/// Render many events into one VCALENDAR, in the order given. Backs the
/// "subscribe to the club calendar" download.
pub fn export_events<'a, I>(events: I) -> String
where
    I: IntoIterator<Item = &'a Event>,
{
    let mut icalendar = ICalendar::new("2.0", PRODID);

    for event in events {
        icalendar.add_event(event.to_ics());
    }

    icalendar.to_string()
}

/// File name for a downloaded event export: the title with whitespace runs
/// collapsed to single dashes, plus the `.ics` extension.
pub fn download_filename(event: &Event) -> String {
    let stem = event
        .title
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-");

    format!("{stem}.ics")
}
