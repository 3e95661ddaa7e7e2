//! Unified application error type.
//! All modules (source, core, export, cli) return AppError to keep the error
//! handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Source grid
    // ---------------------------
    #[error("Cannot read roster file '{file}': {reason}")]
    Source { file: String, reason: String },

    #[error("Invalid grid layout: {0}")]
    Layout(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration")]
    ConfigLoad,

    #[error("Failed to save configuration")]
    ConfigSave,

    // ---------------------------
    // Artifact errors (local to one person)
    // ---------------------------
    #[error("Image rendering error: {0}")]
    Render(String),

    #[error("Calendar serialization error: {0}")]
    Calendar(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
