use crate::utils::date::turkish_day_name;
use chrono::NaiveDate;
use serde::Serialize;

/// A roster date together with its weekday display name.
/// Immutable once parsed; every formatting concern lives here so the
/// renderer and the calendar builder agree on the strings they emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct DutyDate {
    date: NaiveDate,
}

impl DutyDate {
    pub fn new(date: NaiveDate) -> Self {
        Self { date }
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// "dd.mm.yyyy"
    pub fn display(&self) -> String {
        self.date.format("%d.%m.%Y").to_string()
    }

    pub fn weekday_name(&self) -> &'static str {
        turkish_day_name(self.date)
    }

    /// "dd.mm.yyyy - Gün", the form shown in table rows.
    pub fn combined(&self) -> String {
        format!("{} - {}", self.display(), self.weekday_name())
    }
}
