use chrono::{Datelike, NaiveDate};

/// Weekday display names, Monday first.
pub const TURKISH_DAYS: [&str; 7] = [
    "Pazartesi",
    "Salı",
    "Çarşamba",
    "Perşembe",
    "Cuma",
    "Cumartesi",
    "Pazar",
];

pub fn turkish_day_name(date: NaiveDate) -> &'static str {
    TURKISH_DAYS[date.weekday().num_days_from_monday() as usize]
}

/// Accepted text forms for roster date cells.
const DATE_FORMATS: [&str; 4] = ["%d.%m.%Y", "%d/%m/%Y", "%Y-%m-%d", "%d-%m-%Y"];

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
}

/// Convert an Excel serial number to a calendar date.
/// Excel's day zero is 1899-12-30 (serial 1 = 1900-01-01, with the
/// historical leap-year quirk folded into the epoch).
pub fn excel_serial_to_date(serial: f64) -> Option<NaiveDate> {
    if !serial.is_finite() || serial < 1.0 {
        return None;
    }
    let epoch = NaiveDate::from_ymd_opt(1899, 12, 30)?;
    epoch.checked_add_days(chrono::Days::new(serial.trunc() as u64))
}
