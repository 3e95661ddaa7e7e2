//! Table source: reads an xlsx workbook into a [`Grid`].
//!
//! The first worksheet is the roster. A failure here is fatal for the whole
//! run; nothing downstream can produce a partial schedule from an unreadable
//! file.

use crate::errors::{AppError, AppResult};
use crate::source::grid::{CellValue, Grid};
use calamine::{Data, DataType, Reader, Xlsx, open_workbook};
use std::path::Path;

pub fn read_grid(path: &Path, header_row: usize) -> AppResult<Grid> {
    let source_err = |reason: String| AppError::Source {
        file: path.display().to_string(),
        reason,
    };

    let mut workbook: Xlsx<std::io::BufReader<std::fs::File>> =
        open_workbook(path).map_err(|e: calamine::XlsxError| source_err(e.to_string()))?;

    let sheet_name = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or_else(|| source_err("workbook contains no sheets".into()))?;

    let range = workbook
        .worksheet_range(&sheet_name)
        .map_err(|e| source_err(e.to_string()))?;

    let mut all_rows = range.rows();
    let mut headers = Vec::new();

    for _ in 0..=header_row {
        match all_rows.next() {
            Some(row) => headers = row.iter().map(header_label).collect(),
            None => {
                return Err(source_err(format!(
                    "header row {} is past the end of sheet '{}'",
                    header_row, sheet_name
                )));
            }
        }
    }

    let rows = all_rows
        .map(|row| row.iter().map(convert_cell).collect())
        .collect();

    Ok(Grid { headers, rows })
}

/// Map the library's cell type onto the closed [`CellValue`] set.
fn convert_cell(cell: &Data) -> CellValue {
    match cell {
        Data::DateTime(_) | Data::DateTimeIso(_) => cell
            .as_datetime()
            .map(CellValue::Date)
            .unwrap_or(CellValue::Empty),
        Data::Float(f) => CellValue::Number(*f),
        Data::Int(i) => CellValue::Number(*i as f64),
        Data::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                CellValue::Empty
            } else {
                CellValue::Text(s.clone())
            }
        }
        Data::Bool(b) => CellValue::Text(b.to_string()),
        Data::DurationIso(_) | Data::Error(_) | Data::Empty => CellValue::Empty,
    }
}

fn header_label(cell: &Data) -> String {
    match cell {
        Data::String(s) => s.trim().to_string(),
        Data::Empty => String::new(),
        other => other.to_string().trim().to_string(),
    }
}
