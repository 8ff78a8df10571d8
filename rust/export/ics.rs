use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::scheduling::{Category, MaterializedEvent};

/// One all-day calendar-interchange entry.
///
/// The `uid` is derived from the date and the event name so repeated exports of the
/// same schedule produce byte-identical output.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct IcsEntry {
    pub uid: String,
    pub date: NaiveDate,
    pub summary: String,
}

/// Convert materialized events into interchange entries. Holidays are not exported
/// to this channel.
pub fn ics_entries(events: &[MaterializedEvent]) -> Vec<IcsEntry> {
    events
        .iter()
        .filter(|e| e.category == Category::Process)
        .map(|e| IcsEntry {
            uid: format!("{}-{}@opscal", e.date.format("%Y%m%d"), slug(&e.name)),
            date: e.date,
            summary: e.name.clone(),
        })
        .collect()
}

/// Serialize entries as an iCalendar stream of all-day `VEVENT`s.
pub fn to_ics(entries: &[IcsEntry]) -> String {
    let mut out = String::new();
    out.push_str("BEGIN:VCALENDAR\r\n");
    out.push_str("VERSION:2.0\r\n");
    out.push_str("PRODID:-//opscal//EN\r\n");
    for entry in entries {
        let end = entry.date + Days::new(1); // DTEND is exclusive for all-day events
        out.push_str("BEGIN:VEVENT\r\n");
        out.push_str(&format!("UID:{}\r\n", entry.uid));
        out.push_str(&format!("DTSTAMP:{}T000000Z\r\n", entry.date.format("%Y%m%d")));
        out.push_str(&format!(
            "DTSTART;VALUE=DATE:{}\r\n",
            entry.date.format("%Y%m%d")
        ));
        out.push_str(&format!("DTEND;VALUE=DATE:{}\r\n", end.format("%Y%m%d")));
        out.push_str(&format!("SUMMARY:{}\r\n", escape_text(&entry.summary)));
        out.push_str("END:VEVENT\r\n");
    }
    out.push_str("END:VCALENDAR\r\n");
    out
}

// Lowercased alphanumeric identifier fragment, runs of other characters collapse to '-'.
fn slug(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut gap = false;
    for c in name.chars() {
        if c.is_ascii_alphanumeric() {
            if gap && !slug.is_empty() {
                slug.push('-');
            }
            gap = false;
            slug.push(c.to_ascii_lowercase());
        } else {
            gap = true;
        }
    }
    slug
}

// TEXT escaping per RFC 5545 §3.3.11.
fn escape_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            ';' => out.push_str("\\;"),
            ',' => out.push_str("\\,"),
            '\n' => out.push_str("\\n"),
            _ => out.push(c),
        }
    }
    out
}
