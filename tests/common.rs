#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use rust_xlsxwriter::Workbook;
use std::path::Path;

pub fn rosterize() -> Command {
    cargo_bin_cmd!("rosterize")
}

/// Write a roster workbook: one header row, then data rows. Empty strings
/// leave the cell blank.
pub fn write_roster(path: &Path, headers: &[&str], rows: &[Vec<&str>]) {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();

    for (c, h) in headers.iter().enumerate() {
        sheet.write(0, c as u16, *h).expect("write header");
    }
    for (r, row) in rows.iter().enumerate() {
        for (c, val) in row.iter().enumerate() {
            if !val.is_empty() {
                sheet
                    .write((r + 1) as u32, c as u16, *val)
                    .expect("write cell");
            }
        }
    }

    workbook.save(path).expect("save workbook");
}

/// Small roster exercising merging, sorting and noise skipping:
/// - "Ali Veli" appears on two dates in two areas;
/// - "Ayşe Yılmaz" appears as two case/annotation variants;
/// - one row has an unparsable date and must contribute nothing;
/// - "12345" is a numeric artifact in a name column.
pub fn basic_roster(path: &Path) {
    write_roster(
        path,
        &["Tarih", "Poliklinik", "Acil"],
        &[
            vec!["02.03.2025", "Ali Veli", ""],
            vec!["01.03.2025", "AYŞE YILMAZ (08:00-16:00)", "Ali Veli"],
            vec!["bozuk tarih", "Hayalet Kişi", ""],
            vec!["03.03.2025", "12345", "Ayşe Yılmaz"],
        ],
    );
}
