// src/export/model.rs

use crate::models::Assignment;

/// Header labels shared by the image renderer and the console listing.
pub(crate) fn table_headers() -> [&'static str; 2] {
    ["Tarih", "Alan"]
}

/// One table row per assignment: combined date string plus area label.
pub(crate) fn assignment_to_row(a: &Assignment) -> Vec<String> {
    vec![a.date.combined(), a.area.clone()]
}

/// Rows for a rendered table. An empty schedule still renders a file,
/// with a single placeholder row instead of being omitted.
pub(crate) fn table_rows(assignments: &[Assignment]) -> Vec<Vec<String>> {
    if assignments.is_empty() {
        return vec![vec!["Kayıt Yok".to_string(), String::new()]];
    }
    assignments.iter().map(assignment_to_row).collect()
}
