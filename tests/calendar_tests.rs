use chrono::{Duration, NaiveDate};
use rosterize::export::ics::{build_events, format_trigger, write_calendar};
use rosterize::models::{Assignment, DutyDate};
use std::fs;

fn assignment(y: i32, m: u32, d: u32, area: &str) -> Assignment {
    Assignment::new(
        DutyDate::new(NaiveDate::from_ymd_opt(y, m, d).unwrap()),
        area.to_string(),
    )
}

#[test]
fn test_event_spans_24_hours_from_08() {
    let events = build_events("Ali Veli", &[assignment(2025, 3, 1, "Poliklinik")]);
    assert_eq!(events.len(), 1);

    let ev = &events[0];
    assert_eq!(
        ev.start,
        NaiveDate::from_ymd_opt(2025, 3, 1)
            .unwrap()
            .and_hms_opt(8, 0, 0)
            .unwrap()
    );
    assert_eq!(ev.end - ev.start, Duration::hours(24));
}

#[test]
fn test_reminder_trigger_is_minus_18_hours() {
    // 14:00 the previous day, relative to an 08:00 start.
    let events = build_events("Ali Veli", &[assignment(2025, 3, 1, "Poliklinik")]);
    assert_eq!(events[0].trigger, Duration::hours(-18));
    assert_eq!(format_trigger(events[0].trigger), "-PT18H");
}

#[test]
fn test_trigger_formatting() {
    assert_eq!(format_trigger(Duration::hours(-18)), "-PT18H");
    assert_eq!(format_trigger(Duration::zero()), "PT0S");
    assert_eq!(format_trigger(Duration::minutes(-90)), "-PT1H30M");
    assert_eq!(format_trigger(Duration::hours(-30)), "-P1DT6H");
    assert_eq!(format_trigger(Duration::days(-2)), "-P2D");
    assert_eq!(format_trigger(Duration::minutes(15)), "PT15M");
}

#[test]
fn test_uids_are_deterministic_across_builds() {
    let assignments = [
        assignment(2025, 3, 1, "Poliklinik"),
        assignment(2025, 3, 2, "Acil"),
    ];

    let first: Vec<String> = build_events("Ayşe Yılmaz", &assignments)
        .into_iter()
        .map(|e| e.uid)
        .collect();
    let second: Vec<String> = build_events("Ayşe Yılmaz", &assignments)
        .into_iter()
        .map(|e| e.uid)
        .collect();

    assert_eq!(first, second);
    assert_eq!(first[0], "ayşe-yılmaz-01.03.2025-poliklinik@rosterize");
    assert_eq!(first[1], "ayşe-yılmaz-02.03.2025-acil@rosterize");
}

#[test]
fn test_written_calendar_content() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("ali-veli.ics");

    let events = build_events(
        "Ali Veli",
        &[
            assignment(2025, 3, 1, "Poliklinik"),
            assignment(2025, 3, 2, "Acil"),
        ],
    );
    write_calendar(&path, "Ali Veli", &events, "Europe/Istanbul").expect("write calendar");

    let content = fs::read_to_string(&path).expect("read calendar");
    assert!(content.starts_with("BEGIN:VCALENDAR"));
    assert_eq!(content.matches("BEGIN:VEVENT").count(), 2);
    assert!(content.contains("DTSTART;TZID=Europe/Istanbul:20250301T080000"));
    assert!(content.contains("DTEND;TZID=Europe/Istanbul:20250302T080000"));
    assert!(content.contains("TRIGGER:-PT18H"));
    assert!(content.contains("UID:ali-veli-01.03.2025-poliklinik@rosterize"));
    assert!(content.contains("END:VCALENDAR"));
}

#[test]
fn test_calendar_text_is_escaped() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("escaped.ics");

    let events = build_events("Ali Veli", &[assignment(2025, 3, 1, "Acil, Gece; Ek")]);
    write_calendar(&path, "Ali Veli", &events, "Europe/Istanbul").expect("write calendar");

    let content = fs::read_to_string(&path).expect("read calendar");
    assert!(content.contains("SUMMARY:Nöbet: Acil\\, Gece\\; Ek"));
}
