//! Calendar event builder and ICS serializer.
//!
//! Each assignment becomes one 24-hour event starting at 08:00 local time
//! in the configured zone, with a single display reminder the previous
//! afternoon. Reminder triggers are encoded as signed durations relative
//! to the event start (RFC 5545 TRIGGER), not absolute instants.

use crate::errors::{AppError, AppResult};
use crate::models::Assignment;
use crate::utils::slugify;
use chrono::{Duration, NaiveDateTime, Utc};
use std::fs;
use std::path::Path;

/// Duty day starts at 08:00 local time.
const DUTY_START_HOUR: u32 = 8;
/// Reminder fires at 14:00 on the previous day.
const REMINDER_HOUR: u32 = 14;

const PRODID: &str = "-//rosterize//duty roster//TR";

#[derive(Debug, Clone)]
pub struct ReminderEvent {
    /// Deterministic: the same (person, date, area) always yields the same
    /// uid, so regeneration replaces rather than duplicates events.
    pub uid: String,
    pub summary: String,
    pub description: String,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    /// Signed offset of the reminder relative to `start`; negative when
    /// the reminder precedes the event.
    pub trigger: Duration,
}

/// Build one event per assignment. Assignments must already be sorted;
/// the builder preserves their order.
pub fn build_events(display_name: &str, assignments: &[Assignment]) -> Vec<ReminderEvent> {
    let name_slug = slugify(display_name);

    assignments
        .iter()
        .filter_map(|a| {
            let date = a.date.date();
            let start = date.and_hms_opt(DUTY_START_HOUR, 0, 0)?;
            let end = start + Duration::hours(24);
            let reminder = date
                .pred_opt()?
                .and_hms_opt(REMINDER_HOUR, 0, 0)?;

            Some(ReminderEvent {
                uid: format!(
                    "{}-{}-{}@rosterize",
                    name_slug,
                    a.date.display(),
                    slugify(&a.area)
                ),
                summary: format!("Nöbet: {}", a.area),
                description: format!("{}: {} ({})", display_name, a.area, a.date.combined()),
                start,
                end,
                trigger: reminder - start,
            })
        })
        .collect()
}

/// Serialize one person's events into an ICS file. Callers only invoke
/// this with a non-empty event list; an empty schedule produces no
/// calendar file at all.
pub fn write_calendar(
    path: &Path,
    display_name: &str,
    events: &[ReminderEvent],
    tzid: &str,
) -> AppResult<()> {
    let mut lines: Vec<String> = vec![
        "BEGIN:VCALENDAR".into(),
        "VERSION:2.0".into(),
        format!("PRODID:{}", PRODID),
        "CALSCALE:GREGORIAN".into(),
        format!("X-WR-CALNAME:{}", escape_text(display_name)),
        format!("X-WR-TIMEZONE:{}", tzid),
    ];

    let dtstamp = Utc::now().format("%Y%m%dT%H%M%SZ").to_string();

    for ev in events {
        lines.push("BEGIN:VEVENT".into());
        lines.push(format!("UID:{}", ev.uid));
        lines.push(format!("DTSTAMP:{}", dtstamp));
        lines.push(format!("DTSTART;TZID={}:{}", tzid, format_local(ev.start)));
        lines.push(format!("DTEND;TZID={}:{}", tzid, format_local(ev.end)));
        lines.push(format!("SUMMARY:{}", escape_text(&ev.summary)));
        lines.push(format!("DESCRIPTION:{}", escape_text(&ev.description)));
        lines.push("BEGIN:VALARM".into());
        lines.push("ACTION:DISPLAY".into());
        lines.push(format!("DESCRIPTION:{}", escape_text(&ev.summary)));
        lines.push(format!("TRIGGER:{}", format_trigger(ev.trigger)));
        lines.push("END:VALARM".into());
        lines.push("END:VEVENT".into());
    }

    lines.push("END:VCALENDAR".into());

    let body: String = lines
        .iter()
        .map(|l| fold_line(l))
        .collect::<Vec<_>>()
        .join("\r\n")
        + "\r\n";

    fs::write(path, body).map_err(|e| AppError::Calendar(e.to_string()))
}

/// Local wall-clock timestamp, "YYYYMMDDTHHMMSS".
fn format_local(dt: NaiveDateTime) -> String {
    dt.format("%Y%m%dT%H%M%S").to_string()
}

/// Signed ISO-8601 duration for TRIGGER, e.g. -PT18H or -P1DT6H.
pub fn format_trigger(d: Duration) -> String {
    let total_min = d.num_minutes();
    if total_min == 0 {
        return "PT0S".to_string();
    }

    let sign = if total_min < 0 { "-" } else { "" };
    let abs = total_min.abs();
    let days = abs / 1440;
    let hours = (abs % 1440) / 60;
    let minutes = abs % 60;

    let mut out = format!("{}P", sign);
    if days > 0 {
        out.push_str(&format!("{}D", days));
    }
    if hours > 0 || minutes > 0 {
        out.push('T');
        if hours > 0 {
            out.push_str(&format!("{}H", hours));
        }
        if minutes > 0 {
            out.push_str(&format!("{}M", minutes));
        }
    }
    out
}

/// RFC 5545 text escaping for property values.
fn escape_text(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace(';', "\\;")
        .replace(',', "\\,")
        .replace('\n', "\\n")
}

/// Fold content lines longer than 75 octets; continuation lines start
/// with a single space. Splits on char boundaries only.
fn fold_line(line: &str) -> String {
    if line.len() <= 75 {
        return line.to_string();
    }

    let mut out = String::new();
    let mut current = String::new();
    let mut first = true;

    for ch in line.chars() {
        let limit = if first { 75 } else { 74 };
        if current.len() + ch.len_utf8() > limit {
            out.push_str(&current);
            out.push_str("\r\n ");
            current.clear();
            first = false;
        }
        current.push(ch);
    }
    out.push_str(&current);
    out
}
