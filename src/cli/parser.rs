use crate::config::GridLayout;
use clap::{Args, Parser, Subcommand};

/// Command-line interface definition for rosterize
/// CLI application turning a duty roster spreadsheet into per-person artifacts
#[derive(Parser)]
#[command(
    name = "rosterize",
    version = env!("CARGO_PKG_VERSION"),
    about = "Turn a duty roster spreadsheet into per-person table images and calendar files",
    long_about = None
)]
pub struct Cli {
    /// Override configuration file path (useful for tests)
    #[arg(global = true, long = "config")]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write the default configuration file
    Init,

    /// Inspect the configuration file
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print: bool,

        #[arg(long = "check", help = "Check that the configuration file parses")]
        check: bool,
    },

    /// Extract the schedule and print it without generating artifacts
    List {
        /// Roster spreadsheet path (defaults to the configured source)
        #[arg(long = "source")]
        source: Option<String>,

        /// Print the schedule as JSON instead of tables
        #[arg(long = "json")]
        json: bool,

        #[command(flatten)]
        layout: LayoutArgs,
    },

    /// Generate per-person table images, and optionally calendar files
    Generate {
        /// Roster spreadsheet path (defaults to the configured source)
        #[arg(long = "source")]
        source: Option<String>,

        /// Output directory (defaults to the configured output_dir)
        #[arg(long = "output")]
        output: Option<String>,

        /// Also generate one calendar file per person
        #[arg(long = "calendar")]
        calendar: bool,

        #[command(flatten)]
        layout: LayoutArgs,
    },
}

/// Grid layout overrides; unset values fall back to the configuration.
#[derive(Args)]
pub struct LayoutArgs {
    #[arg(long = "header-row", help = "Header row index in the sheet")]
    pub header_row: Option<usize>,

    #[arg(long = "date-column", help = "Column index holding the dates")]
    pub date_column: Option<usize>,

    #[arg(long = "start-row", help = "First data row index to process")]
    pub start_row: Option<usize>,

    #[arg(long = "end-row", help = "Data row index to stop at (exclusive)")]
    pub end_row: Option<usize>,

    #[arg(long = "name-start-col", help = "First name column index")]
    pub name_start_col: Option<usize>,

    #[arg(long = "name-end-col", help = "Name column index to stop at (exclusive)")]
    pub name_end_col: Option<usize>,
}

impl LayoutArgs {
    /// Overlay CLI values on top of the configured layout.
    pub fn apply(&self, base: &GridLayout) -> GridLayout {
        GridLayout {
            header_row: self.header_row.unwrap_or(base.header_row),
            date_column: self.date_column.unwrap_or(base.date_column),
            start_row: self.start_row.unwrap_or(base.start_row),
            end_row: self.end_row.unwrap_or(base.end_row),
            name_start_col: self.name_start_col.unwrap_or(base.name_start_col),
            name_end_col: self.name_end_col.unwrap_or(base.name_end_col),
        }
    }
}
