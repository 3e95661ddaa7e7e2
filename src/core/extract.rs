//! Schedule extraction: walk the configured grid region and build the
//! per-person schedule index.

use crate::config::GridLayout;
use crate::core::classify::{CellClass, ColumnRegion, classify};
use crate::core::normalize::normalize;
use crate::models::{Assignment, DutyDate, PersonSchedule, ScheduleIndex};
use crate::source::grid::{CellValue, Grid};
use crate::utils::date::{excel_serial_to_date, parse_date};
use chrono::NaiveDate;
use std::collections::HashMap;

/// Owns the in-progress index exclusively during extraction and hands out
/// an immutable [`ScheduleIndex`] when done.
#[derive(Default)]
struct ScheduleBuilder {
    people: HashMap<String, PersonSchedule>,
}

impl ScheduleBuilder {
    /// Record one assignment. The schedule is created on the first
    /// occurrence of a canonical key and keeps that occurrence's display
    /// spelling; later spellings only contribute assignments.
    fn add(&mut self, canonical: String, display: String, assignment: Assignment) {
        self.people
            .entry(canonical.clone())
            .or_insert_with(|| PersonSchedule::new(canonical, display))
            .push(assignment);
    }

    fn finish(self) -> ScheduleIndex {
        ScheduleIndex::from_map(self.people)
    }
}

/// Extract the normalized schedule model from the grid.
///
/// Rows run over `layout.start_row..layout.end_row`; a row with an
/// unparsable date cell contributes nothing. Within a valid row, every
/// name-column cell classified as a name becomes one assignment against
/// that column's area label. Cells outside the configured ranges are
/// never visited.
pub fn extract(grid: &Grid, layout: &GridLayout) -> ScheduleIndex {
    let mut builder = ScheduleBuilder::default();

    for row_idx in layout.start_row..layout.end_row {
        let date_cell = grid.cell(row_idx, layout.date_column);
        if classify(date_cell, ColumnRegion::DateColumn) != CellClass::Date {
            continue;
        }
        let Some(date) = parse_duty_date(date_cell) else {
            // Row-level skip: no partial dates, no assignments from this row.
            continue;
        };
        let duty_date = DutyDate::new(date);

        for col_idx in layout.name_start_col..layout.name_end_col {
            let cell = grid.cell(row_idx, col_idx);
            if classify(cell, ColumnRegion::NameColumn) != CellClass::Name {
                continue;
            }
            let CellValue::Text(raw) = cell else {
                continue;
            };
            let Some(name) = normalize(raw) else {
                continue;
            };
            let area = grid.area_label(col_idx);
            builder.add(
                name.canonical,
                name.display,
                Assignment::new(duty_date, area),
            );
        }
    }

    builder.finish()
}

/// Parse a date-column cell. Date-typed cells carry their own date; text
/// cells go through the accepted formats; bare numbers are treated as
/// Excel serials.
pub fn parse_duty_date(cell: &CellValue) -> Option<NaiveDate> {
    match cell {
        CellValue::Date(dt) => Some(dt.date()),
        CellValue::Text(s) => parse_date(s),
        CellValue::Number(n) => excel_serial_to_date(*n),
        CellValue::Empty => None,
    }
}
