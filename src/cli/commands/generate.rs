use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::pipeline::{GenerateOptions, Outcome, run};
use crate::errors::AppResult;
use crate::ui::messages::{success, warning};
use std::path::PathBuf;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Generate {
        source,
        output,
        calendar,
        layout,
    } = cmd
    {
        let opts = GenerateOptions {
            source: PathBuf::from(source.as_ref().unwrap_or(&cfg.source)),
            output_dir: PathBuf::from(output.as_ref().unwrap_or(&cfg.output_dir)),
            layout: layout.apply(&cfg.layout),
            calendar: *calendar || cfg.calendar,
            timezone: cfg.timezone.clone(),
        };

        match run(&opts)? {
            Outcome::Empty => {
                warning("No duty records found; nothing to generate.");
            }
            Outcome::Done(report) => {
                success(format!(
                    "Processed {} people: {} image(s), {} calendar file(s), {} failure(s)",
                    report.people, report.images, report.calendars, report.failures
                ));
            }
        }
    }
    Ok(())
}
