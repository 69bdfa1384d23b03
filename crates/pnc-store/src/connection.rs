//! Registry connection management.

use std::path::Path;

use rusqlite::Connection;
use tracing::debug;

use crate::error::StoreError;

/// Open (creating if absent) the registry database file.
///
/// The parent directory is created when missing, and foreign-key
/// enforcement is switched on for the connection. The connection closes
/// when the handle drops, on every exit path.
pub fn open_database(path: &Path) -> Result<Connection, StoreError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|source| StoreError::CreateDatabaseDir {
                path: parent.to_path_buf(),
                source,
            })?;
        }
    }
    let conn = Connection::open(path)?;
    conn.execute_batch("PRAGMA foreign_keys=ON;")?;
    debug!(path = %path.display(), "opened registry database");
    Ok(conn)
}

/// In-memory registry with the same connection settings; used by tests.
pub fn open_memory_database() -> Result<Connection, StoreError> {
    let conn = Connection::open_in_memory()?;
    conn.execute_batch("PRAGMA foreign_keys=ON;")?;
    Ok(conn)
}
