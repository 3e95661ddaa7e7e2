// src/export/mod.rs

pub(crate) mod fs_utils;
pub(crate) mod model;

pub mod ics;
pub mod png;

pub use ics::{ReminderEvent, build_events, write_calendar};
pub use png::TableImage;
