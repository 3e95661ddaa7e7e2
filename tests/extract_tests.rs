use chrono::NaiveDate;
use rosterize::config::GridLayout;
use rosterize::core::extract::{extract, parse_duty_date};
use rosterize::models::DutyDate;
use rosterize::source::grid::{CellValue, Grid};

fn text(s: &str) -> CellValue {
    CellValue::Text(s.to_string())
}

fn layout() -> GridLayout {
    GridLayout {
        header_row: 0,
        date_column: 0,
        start_row: 0,
        end_row: 32,
        name_start_col: 1,
        name_end_col: 3,
    }
}

fn roster_grid() -> Grid {
    Grid {
        headers: vec!["Tarih".into(), "Poliklinik".into(), "Acil".into()],
        rows: vec![
            vec![text("02.03.2025"), text("Ali Veli"), CellValue::Empty],
            vec![
                text("01.03.2025"),
                text("AYŞE YILMAZ (08:00-16:00)"),
                text("Ali Veli"),
            ],
            vec![text("bozuk tarih"), text("Hayalet Kişi"), CellValue::Empty],
            vec![text("03.03.2025"), text("12345"), text("Ayşe Yılmaz")],
        ],
    }
}

#[test]
fn test_case_variants_merge_with_first_seen_display() {
    let index = extract(&roster_grid(), &layout());

    assert_eq!(index.len(), 2);

    let ayse = index.get("AYŞE YILMAZ").expect("merged schedule");
    // First occurrence in row order was the annotated uppercase spelling.
    assert_eq!(ayse.display, "AYŞE YILMAZ");
    assert_eq!(ayse.assignments.len(), 2);
}

#[test]
fn test_assignments_sort_chronologically() {
    let index = extract(&roster_grid(), &layout());

    let mut ali = index.get("ALİ VELİ").expect("schedule").clone();
    ali.sort_chronological();

    let dates: Vec<String> = ali.assignments.iter().map(|a| a.date.display()).collect();
    assert_eq!(dates, vec!["01.03.2025", "02.03.2025"]);
    assert_eq!(ali.assignments[0].area, "Acil");
    assert_eq!(ali.assignments[1].area, "Poliklinik");
}

#[test]
fn test_unparsable_date_drops_whole_row() {
    let index = extract(&roster_grid(), &layout());
    assert!(index.get("HAYALET KİŞİ").is_none());
}

#[test]
fn test_numeric_name_cell_is_skipped() {
    let index = extract(&roster_grid(), &layout());
    assert!(index.get("12345").is_none());
}

#[test]
fn test_same_date_ties_keep_column_order() {
    let grid = Grid {
        headers: vec!["Tarih".into(), "Poliklinik".into(), "Acil".into()],
        rows: vec![vec![text("05.03.2025"), text("Ali"), text("Ali")]],
    };

    let index = extract(&grid, &layout());
    let mut ali = index.get("ALİ").expect("schedule").clone();
    ali.sort_chronological();

    let areas: Vec<&str> = ali.assignments.iter().map(|a| a.area.as_str()).collect();
    assert_eq!(areas, vec!["Poliklinik", "Acil"]);
}

#[test]
fn test_duplicate_assignments_are_preserved() {
    // Two columns under the same header label yield two identical
    // (date, area) assignments; no deduplication happens.
    let grid = Grid {
        headers: vec!["Tarih".into(), "Poliklinik".into(), "Poliklinik".into()],
        rows: vec![vec![text("05.03.2025"), text("Ali"), text("Ali")]],
    };

    let index = extract(&grid, &layout());
    let ali = index.get("ALİ").expect("schedule");
    assert_eq!(ali.assignments.len(), 2);
    assert_eq!(ali.assignments[0].area, ali.assignments[1].area);
}

#[test]
fn test_date_and_number_cells_in_name_columns_are_noise() {
    let dt = NaiveDate::from_ymd_opt(2025, 3, 5)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap();
    let grid = Grid {
        headers: vec!["Tarih".into(), "Poliklinik".into(), "Acil".into()],
        rows: vec![vec![
            text("05.03.2025"),
            CellValue::Date(dt),
            CellValue::Number(8.5),
        ]],
    };

    let index = extract(&grid, &layout());
    assert!(index.is_empty());
}

#[test]
fn test_columns_outside_range_are_never_visited() {
    let grid = Grid {
        headers: vec![
            "Tarih".into(),
            "Poliklinik".into(),
            "Acil".into(),
            "Yedek".into(),
        ],
        rows: vec![vec![
            text("05.03.2025"),
            CellValue::Empty,
            CellValue::Empty,
            text("Gizli Kişi"),
        ]],
    };

    // name_end_col = 3 excludes the "Yedek" column.
    let index = extract(&grid, &layout());
    assert!(index.is_empty());
}

#[test]
fn test_missing_header_falls_back_to_column_letter() {
    let grid = Grid {
        headers: vec!["Tarih".into(), "Poliklinik".into()],
        rows: vec![vec![text("05.03.2025"), CellValue::Empty, text("Ali")]],
    };

    let index = extract(&grid, &layout());
    let ali = index.get("ALİ").expect("schedule");
    assert_eq!(ali.assignments[0].area, "C");
}

#[test]
fn test_empty_grid_yields_empty_index() {
    let grid = Grid {
        headers: vec!["Tarih".into(), "Poliklinik".into()],
        rows: vec![],
    };
    assert!(extract(&grid, &layout()).is_empty());
}

#[test]
fn test_date_cell_variants_parse() {
    let expected = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();

    // Date-typed cell
    let dt = expected.and_hms_opt(0, 0, 0).unwrap();
    assert_eq!(parse_duty_date(&CellValue::Date(dt)), Some(expected));

    // Text forms
    assert_eq!(parse_duty_date(&text("01.03.2025")), Some(expected));
    assert_eq!(parse_duty_date(&text("2025-03-01")), Some(expected));
    assert_eq!(parse_duty_date(&text("01/03/2025")), Some(expected));

    // Excel serial: 45717 days after 1899-12-30
    assert_eq!(parse_duty_date(&CellValue::Number(45717.0)), Some(expected));

    assert_eq!(parse_duty_date(&text("bozuk")), None);
    assert_eq!(parse_duty_date(&CellValue::Empty), None);
}

#[test]
fn test_duty_date_display_round_trips() {
    let date = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();
    let duty = DutyDate::new(date);

    assert_eq!(duty.display(), "01.03.2025");
    assert_eq!(
        NaiveDate::parse_from_str(&duty.display(), "%d.%m.%Y").unwrap(),
        date
    );
    // 2025-03-01 is a Saturday.
    assert_eq!(duty.combined(), "01.03.2025 - Cumartesi");
}
