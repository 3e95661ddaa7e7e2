use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};
use std::fs;
use std::path::PathBuf;

pub fn handle(cmd: &Commands, config_path: &PathBuf) -> AppResult<()> {
    if let Commands::Config { print, check } = cmd {
        if !config_path.exists() {
            warning(format!(
                "No config file at {} (run 'rosterize init' to create one); defaults are in effect",
                config_path.display()
            ));
            return Ok(());
        }

        if *print {
            info(format!("Config file: {}", config_path.display()));
            println!("{}", fs::read_to_string(config_path)?);
        }

        if *check {
            Config::load_from(config_path)?;
            success("Configuration file parses correctly");
        }
    }
    Ok(())
}
