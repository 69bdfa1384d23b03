use std::path::PathBuf;

use thiserror::Error;

/// Store-level failures.
///
/// Variants carry row numbers and column names, never cell values: the
/// exports hold personal health information.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("settings {path}: {source}")]
    ReadSettings {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("settings {path}: {source}")]
    ParseSettings {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("settings {path}: no database path configured")]
    MissingDatabasePath { path: PathBuf },
    #[error("create {path}: {source}")]
    CreateDatabaseDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("column {0:?} not found in export header")]
    MissingColumn(String),
    #[error("row {row}: required field {column:?} is empty")]
    MissingField { row: usize, column: String },
    #[error("row {row}: {column:?} is not a number")]
    InvalidNumber { row: usize, column: String },
    #[error(transparent)]
    Sqlite(#[from] rusqlite::Error),
}
