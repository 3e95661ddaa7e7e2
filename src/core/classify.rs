//! Cell classification: what does a single grid cell represent?

use crate::source::grid::CellValue;
use crate::utils::text::strip_annotation;

/// Region of the grid a cell sits in, per the configured layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnRegion {
    DateColumn,
    NameColumn,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellClass {
    /// Candidate date cell; parsing may still fail and drop the row.
    Date,
    /// A person name, possibly with a trailing annotation.
    Name,
    /// Blank, numeric artifact or other noise. Skipped silently.
    Skip,
}

/// Classify one cell. Pure; never fails. Date-typed or numeric values in
/// name columns are noise (stray time/number artifacts leak into rosters),
/// and a name must keep at least one alphabetic character once its
/// parenthetical annotation is stripped.
pub fn classify(cell: &CellValue, region: ColumnRegion) -> CellClass {
    match region {
        ColumnRegion::DateColumn => {
            if cell.is_empty() {
                CellClass::Skip
            } else {
                CellClass::Date
            }
        }
        ColumnRegion::NameColumn => match cell {
            CellValue::Text(raw) => {
                let stripped = strip_annotation(raw);
                if stripped.chars().any(char::is_alphabetic) {
                    CellClass::Name
                } else {
                    CellClass::Skip
                }
            }
            CellValue::Date(_) | CellValue::Number(_) | CellValue::Empty => CellClass::Skip,
        },
    }
}
