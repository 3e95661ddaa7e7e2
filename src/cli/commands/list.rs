use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::pipeline::extract_sorted;
use crate::errors::AppResult;
use crate::export::model::{assignment_to_row, table_headers};
use crate::ui::messages::{header, warning};
use crate::utils::table::Table;
use serde_json::json;
use std::path::PathBuf;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List {
        source,
        json,
        layout,
    } = cmd
    {
        let source = PathBuf::from(source.as_ref().unwrap_or(&cfg.source));
        let layout = layout.apply(&cfg.layout);

        let people = extract_sorted(&source, &layout)?;

        if people.is_empty() {
            warning("No duty records found.");
            return Ok(());
        }

        if *json {
            let value: Vec<_> = people
                .iter()
                .map(|p| {
                    json!({
                        "name": p.display,
                        "records": p
                            .assignments
                            .iter()
                            .map(assignment_to_row)
                            .collect::<Vec<_>>(),
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&value).unwrap_or_default());
            return Ok(());
        }

        for person in &people {
            header(&person.display);
            let mut table = Table::new(table_headers().iter().map(|h| h.to_string()).collect());
            for a in &person.assignments {
                table.add_row(assignment_to_row(a));
            }
            println!("{}", table.render());
        }
    }
    Ok(())
}
