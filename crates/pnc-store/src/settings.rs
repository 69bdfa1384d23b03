//! Process-wide settings for registry sessions.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use crate::error::StoreError;

/// Settings file contents (JSON). The one required entry is the registry
/// database path:
///
/// ```json
/// { "database": "registry.db" }
/// ```
#[derive(Debug, Clone)]
pub struct Settings {
    pub database: PathBuf,
}

#[derive(Debug, Deserialize)]
struct RawSettings {
    database: Option<PathBuf>,
}

impl Settings {
    /// Load and validate the settings file.
    ///
    /// A missing or unreadable file, invalid JSON, or an absent `database`
    /// entry is fatal for the session that asked for it.
    pub fn load(path: &Path) -> Result<Self, StoreError> {
        let contents = fs::read_to_string(path).map_err(|source| StoreError::ReadSettings {
            path: path.to_path_buf(),
            source,
        })?;
        let raw: RawSettings =
            serde_json::from_str(&contents).map_err(|source| StoreError::ParseSettings {
                path: path.to_path_buf(),
                source,
            })?;
        let database = raw.database.ok_or_else(|| StoreError::MissingDatabasePath {
            path: path.to_path_buf(),
        })?;
        debug!(database = %database.display(), "settings loaded");
        Ok(Self { database })
    }
}
