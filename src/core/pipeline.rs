//! Pipeline driver: source grid -> schedule index -> per-person artifacts.
//!
//! Fatal errors (unreadable source, invalid layout) abort before any
//! extraction. Everything after that favors maximal partial output: a
//! failed artifact is logged with the person and target path and the run
//! continues over the remaining people.

use crate::config::GridLayout;
use crate::core::extract::extract;
use crate::errors::AppResult;
use crate::export::fs_utils::ensure_dir;
use crate::export::model::{table_headers, table_rows};
use crate::export::{TableImage, build_events, write_calendar};
use crate::models::PersonSchedule;
use crate::source::read_grid;
use crate::ui::messages::{error, info, success};
use crate::utils::slugify;
use rayon::prelude::*;
use std::path::{Path, PathBuf};

pub struct GenerateOptions {
    pub source: PathBuf,
    pub output_dir: PathBuf,
    pub layout: GridLayout,
    pub calendar: bool,
    pub timezone: String,
}

#[derive(Debug, Default, Clone, Copy)]
pub struct RunReport {
    pub people: usize,
    pub images: usize,
    pub calendars: usize,
    pub failures: usize,
}

/// Terminal states of a run: extraction found nothing, or artifacts were
/// generated (possibly with per-artifact failures).
#[derive(Debug)]
pub enum Outcome {
    Empty,
    Done(RunReport),
}

/// Extract the schedule and return people ordered by canonical key, each
/// with assignments sorted chronologically. Shared by `list` and
/// `generate`; sorting happens here, exactly once.
pub fn extract_sorted(source: &Path, layout: &GridLayout) -> AppResult<Vec<PersonSchedule>> {
    layout.validate()?;
    let grid = read_grid(source, layout.header_row)?;
    let index = extract(&grid, layout);

    let mut people = index.into_sorted_people();
    for person in &mut people {
        person.sort_chronological();
    }
    Ok(people)
}

pub fn run(opts: &GenerateOptions) -> AppResult<Outcome> {
    info(format!("Reading roster: {}", opts.source.display()));
    let people = extract_sorted(&opts.source, &opts.layout)?;

    if people.is_empty() {
        return Ok(Outcome::Empty);
    }

    ensure_dir(&opts.output_dir)?;
    let calendar_dir = opts.output_dir.join("calendar");
    if opts.calendar {
        ensure_dir(&calendar_dir)?;
    }

    // Each person owns their schedule and writes to distinct paths, so
    // artifact generation fans out per person.
    let reports: Vec<RunReport> = people
        .into_par_iter()
        .map(|person| process_person(&person, opts, &calendar_dir))
        .collect();

    let mut total = RunReport::default();
    for r in &reports {
        total.people += 1;
        total.images += r.images;
        total.calendars += r.calendars;
        total.failures += r.failures;
    }

    Ok(Outcome::Done(total))
}

fn process_person(person: &PersonSchedule, opts: &GenerateOptions, calendar_dir: &Path) -> RunReport {
    let mut report = RunReport::default();
    let slug = slugify(&person.display);

    let image_path = opts.output_dir.join(format!("{}.png", slug));
    let headers = table_headers();
    let rows = table_rows(&person.assignments);

    match TableImage::default().render(&image_path, &person.display, &headers, &rows) {
        Ok(()) => {
            success(format!("{} -> {}", person.display, image_path.display()));
            report.images += 1;
        }
        Err(e) => {
            error(format!(
                "Image for '{}' failed ({}): {}",
                person.display,
                image_path.display(),
                e
            ));
            report.failures += 1;
        }
    }

    // No calendar file for an empty schedule, unlike the image renderer.
    if opts.calendar && !person.assignments.is_empty() {
        let events = build_events(&person.display, &person.assignments);
        let ics_path = calendar_dir.join(format!("{}.ics", slug));

        match write_calendar(&ics_path, &person.display, &events, &opts.timezone) {
            Ok(()) => {
                success(format!("{} -> {}", person.display, ics_path.display()));
                report.calendars += 1;
            }
            Err(e) => {
                error(format!(
                    "Calendar for '{}' failed ({}): {}",
                    person.display,
                    ics_path.display(),
                    e
                ));
                report.failures += 1;
            }
        }
    }

    report
}
