//! Analyst account management.
//!
//! Analyst rows are never fed by the CSV load; accounts are registered
//! through this module and linked to pregnancies later by hand.

use rusqlite::{Connection, params};
use tracing::info;

use pnc_model::AnalystId;

use crate::error::StoreError;

/// Register an analyst account. Usernames are unique within the registry;
/// inserting a taken name surfaces the constraint violation.
pub fn insert_analyst(
    conn: &Connection,
    username: &str,
    password: &str,
) -> Result<AnalystId, StoreError> {
    conn.execute(
        "INSERT INTO Analyst (username, password) VALUES (?1, ?2)",
        params![username, password],
    )?;
    let id = AnalystId::new(conn.last_insert_rowid());
    info!(analyst = username, "analyst registered");
    Ok(id)
}
