//! Unified application error type.
//! All modules (db, core, cli, utils) return AppError to keep the error
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
    // Storage-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Database migration error: {0}")]
    Migration(String),

    #[error("Stored value is corrupt: {0}")]
    Corrupt(String),

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),

    // ---------------------------
    // Store rules
    // ---------------------------
    #[error("Name must not be empty")]
    EmptyName,

    #[error("Group '{0}' is a default group and cannot be deleted")]
    ProtectedGroup(String),

    #[error("Invalid import file: {0}")]
    Import(String),

    #[error("Group not found: {0}")]
    GroupNotFound(String),

    #[error("Item not found: {0}")]
    ItemNotFound(String),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid priority: {0} (use HIGH, MEDIUM or LOW)")]
    InvalidPriority(String),

    #[error("Invalid icon: {0}")]
    InvalidIcon(String),

    #[error("Invalid status: {0} (use none, done or skip)")]
    InvalidStatus(String),

    #[error("Invalid language: {0} (use pt or en)")]
    InvalidLanguage(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to parse configuration: {0}")]
    ConfigParse(#[from] serde_yaml::Error),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

impl AppError {
    /// Errors the CLI reports as a warning instead of a failure.
    pub fn is_validation(&self) -> bool {
        matches!(self, AppError::EmptyName)
    }
}

pub type AppResult<T> = Result<T, AppError>;
