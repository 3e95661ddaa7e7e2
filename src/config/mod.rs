use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::PathBuf;

/// Which grid positions carry which meaning. Row indices are relative to
/// the data rows (the header row is consumed by the table source);
/// `end_row` and `name_end_col` are exclusive.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GridLayout {
    #[serde(default = "default_header_row")]
    pub header_row: usize,
    #[serde(default = "default_date_column")]
    pub date_column: usize,
    #[serde(default = "default_start_row")]
    pub start_row: usize,
    #[serde(default = "default_end_row")]
    pub end_row: usize,
    #[serde(default = "default_name_start_col")]
    pub name_start_col: usize,
    #[serde(default = "default_name_end_col")]
    pub name_end_col: usize,
}

fn default_header_row() -> usize {
    0
}
fn default_date_column() -> usize {
    0
}
fn default_start_row() -> usize {
    0
}
fn default_end_row() -> usize {
    32
}
fn default_name_start_col() -> usize {
    1
}
fn default_name_end_col() -> usize {
    10
}

impl Default for GridLayout {
    fn default() -> Self {
        Self {
            header_row: default_header_row(),
            date_column: default_date_column(),
            start_row: default_start_row(),
            end_row: default_end_row(),
            name_start_col: default_name_start_col(),
            name_end_col: default_name_end_col(),
        }
    }
}

impl GridLayout {
    pub fn validate(&self) -> AppResult<()> {
        if self.start_row >= self.end_row {
            return Err(AppError::Layout(format!(
                "row range {}..{} is empty",
                self.start_row, self.end_row
            )));
        }
        if self.name_start_col >= self.name_end_col {
            return Err(AppError::Layout(format!(
                "name column range {}..{} is empty",
                self.name_start_col, self.name_end_col
            )));
        }
        if (self.name_start_col..self.name_end_col).contains(&self.date_column) {
            return Err(AppError::Layout(format!(
                "date column {} lies inside the name column range {}..{}",
                self.date_column, self.name_start_col, self.name_end_col
            )));
        }
        Ok(())
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    /// Default roster file, used when `--source` is not given.
    pub source: String,
    pub output_dir: String,
    /// TZID written into calendar files.
    #[serde(default = "default_timezone")]
    pub timezone: String,
    /// Generate calendar files by default, without `--calendar`.
    #[serde(default)]
    pub calendar: bool,
    #[serde(default)]
    pub layout: GridLayout,
}

fn default_timezone() -> String {
    "Europe/Istanbul".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source: "nobet.xlsx".to_string(),
            output_dir: "nobetler".to_string(),
            timezone: default_timezone(),
            calendar: false,
            layout: GridLayout::default(),
        }
    }
}

impl Config {
    /// Standard configuration directory depending on the platform.
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".rosterize")
    }

    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rosterize.conf")
    }

    /// Load configuration from file, or return defaults if not found.
    pub fn load_from(path: &PathBuf) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
        serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("{}: {}", path.display(), e)))
    }

    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    /// Write the default configuration file, creating the directory.
    pub fn init() -> AppResult<PathBuf> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        let path = Self::config_file();
        let yaml = serde_yaml::to_string(&Self::default()).map_err(|_| AppError::ConfigSave)?;
        let mut file = fs::File::create(&path)?;
        file.write_all(yaml.as_bytes())?;

        Ok(path)
    }
}
