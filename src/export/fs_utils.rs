// src/export/fs_utils.rs

use crate::errors::AppResult;
use std::fs;
use std::path::Path;

/// Create the output directory if missing. Artifact files inside it are
/// overwritten without prompting; re-running the pipeline regenerates
/// everything.
pub(crate) fn ensure_dir(path: &Path) -> AppResult<()> {
    fs::create_dir_all(path)?;
    Ok(())
}
