//! Registry schema creation.

use rusqlite::Connection;
use tracing::{debug, info};

use crate::error::StoreError;

/// CREATE TABLE statements, ordered so referenced tables come first.
const TABLES: [(&str, &str); 5] = [
    (
        "Hospital",
        "CREATE TABLE IF NOT EXISTS Hospital (
            id   INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL
        )",
    ),
    (
        "Analyst",
        "CREATE TABLE IF NOT EXISTS Analyst (
            id       INTEGER PRIMARY KEY AUTOINCREMENT,
            username TEXT NOT NULL UNIQUE,
            password TEXT NOT NULL
        )",
    ),
    (
        "Woman",
        "CREATE TABLE IF NOT EXISTS Woman (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            name        TEXT NOT NULL,
            birth_date  TEXT,
            blood_type  TEXT,
            hospital_id INTEGER NOT NULL REFERENCES Hospital(id)
        )",
    ),
    (
        "Pregnancy",
        "CREATE TABLE IF NOT EXISTS Pregnancy (
            id                        INTEGER PRIMARY KEY AUTOINCREMENT,
            woman_id                  INTEGER NOT NULL REFERENCES Woman(id),
            analyst_id                INTEGER REFERENCES Analyst(id),
            first_registration_date  TEXT,
            delivery_date             TEXT,
            baby_gender               TEXT,
            delivery_type             TEXT,
            number_of_checkups        INTEGER,
            number_of_missed_checkups INTEGER
        )",
    ),
    (
        "Checkup",
        "CREATE TABLE IF NOT EXISTS Checkup (
            id                     INTEGER PRIMARY KEY AUTOINCREMENT,
            pregnancy_id           INTEGER NOT NULL REFERENCES Pregnancy(id),
            date                   TEXT,
            time                   TEXT,
            weight                 REAL,
            blood_pressure         TEXT,
            bp_category            TEXT,
            gestational_age        INTEGER,
            fetal_heart_rate       INTEGER,
            anomaly_presence       TEXT,
            maternal_mental_health TEXT
        )",
    ),
];

/// Create every registry table inside one transaction.
///
/// Creation is idempotent: tables that already exist are left untouched.
/// If any statement fails, the transaction rolls back and no table from
/// this call remains.
pub fn create_tables(conn: &mut Connection) -> Result<(), StoreError> {
    let tx = conn.transaction()?;
    for (name, sql) in TABLES {
        debug!(table = name, "creating table");
        tx.execute(sql, [])?;
    }
    tx.commit()?;
    info!(tables = TABLES.len(), "registry schema ready");
    Ok(())
}
