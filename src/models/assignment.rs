use super::duty_date::DutyDate;
use serde::Serialize;

/// One person's duty on one date in one area. Created during extraction,
/// never mutated afterwards.
#[derive(Debug, Clone, Serialize)]
pub struct Assignment {
    pub date: DutyDate,
    pub area: String,
}

impl Assignment {
    pub fn new(date: DutyDate, area: String) -> Self {
        Self { date, area }
    }
}
