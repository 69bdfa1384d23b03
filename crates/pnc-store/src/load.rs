//! Transactional bulk load of checkup exports.

use std::collections::HashMap;

use rusqlite::{Connection, OptionalExtension, Transaction, params};
use tracing::{debug, info};

use pnc_model::{
    CheckupId, CheckupRecord, CsvTable, HospitalId, PregnancyId, PregnancyRecord, WomanId,
    WomanRecord, columns,
};

use crate::error::StoreError;

/// Per-table insert counts for one load session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadSummary {
    pub records: usize,
    pub hospitals: usize,
    pub women: usize,
    pub pregnancies: usize,
    pub checkups: usize,
}

/// Session-scoped hospital-name deduplication cache.
///
/// Populated lazily: first sight of a name resolves it against the table
/// (insert on miss) and later rows reuse the mapping. The cache lives for
/// one load session only.
#[derive(Debug, Default)]
struct HospitalCache {
    by_name: HashMap<String, HospitalId>,
}

/// Header indices resolved once before the first insert.
///
/// The loader accepts raw and transformed exports, so the columns that
/// exist on only one side are optional and load as NULL when absent.
struct LoaderColumns {
    hospital_name: usize,
    name: usize,
    date_of_birth: usize,
    mother_blood_type: usize,
    registration_date: usize,
    checkup_date: usize,
    checkup_time: usize,
    delivery_date: usize,
    baby_gender: usize,
    delivery_type: usize,
    weight: usize,
    blood_pressure: usize,
    gestational_age: usize,
    fetal_heart_rate: usize,
    anomaly: usize,
    maternal_mental_health: usize,
    no_of_checkups: Option<usize>,
    no_of_missed_checkups: Option<usize>,
    bp_category: Option<usize>,
}

impl LoaderColumns {
    fn resolve(table: &CsvTable) -> Result<Self, StoreError> {
        let require = |name: &str| {
            table
                .column_index(name)
                .ok_or_else(|| StoreError::MissingColumn(name.to_string()))
        };
        Ok(Self {
            hospital_name: require(columns::HOSPITAL_NAME)?,
            name: require(columns::NAME)?,
            date_of_birth: require(columns::DATE_OF_BIRTH)?,
            mother_blood_type: require(columns::MOTHER_BLOOD_TYPE)?,
            registration_date: require(columns::USER_REGISTRATION_DATE)?,
            checkup_date: require(columns::LAST_CHECKUP_DATE)?,
            checkup_time: require(columns::LAST_CHECKUP_TIME)?,
            delivery_date: require(columns::DELIVERY_DATE)?,
            baby_gender: require(columns::BABY_GENDER)?,
            delivery_type: require(columns::DELIVERY_TYPE)?,
            weight: require(columns::WEIGHT)?,
            blood_pressure: require(columns::BLOOD_PRESSURE)?,
            gestational_age: require(columns::GESTATIONAL_AGE)?,
            fetal_heart_rate: require(columns::FETAL_HEART_RATE)?,
            anomaly: require(columns::ANOMALY)?,
            maternal_mental_health: require(columns::MATERNAL_MENTAL_HEALTH)?,
            no_of_checkups: table.column_index(columns::NO_OF_CHECKUPS),
            no_of_missed_checkups: table.column_index(columns::NO_OF_MISSED_CHECKUPS),
            bp_category: table.column_index(columns::BP_CATEGORY),
        })
    }
}

/// Insert one row-group per source record inside a single transaction.
///
/// Insertion order per record is Hospital (deduplicated) → Woman →
/// Pregnancy → Checkup, threading each new identifier as the next foreign
/// key. Any per-record failure rolls back the entire pass: the registry
/// keeps no partial rows from this session. Re-running against a populated
/// registry duplicates data rows; the loader performs no cross-run dedup.
pub fn populate(conn: &mut Connection, table: &CsvTable) -> Result<LoadSummary, StoreError> {
    let cols = LoaderColumns::resolve(table)?;
    let tx = conn.transaction()?;
    let mut cache = HospitalCache::default();
    let mut summary = LoadSummary::default();
    for (index, row) in table.rows.iter().enumerate() {
        insert_record(&tx, &cols, row, index + 1, &mut cache, &mut summary)?;
        summary.records += 1;
    }
    tx.commit()?;
    info!(
        records = summary.records,
        hospitals = summary.hospitals,
        women = summary.women,
        "load committed"
    );
    Ok(summary)
}

fn insert_record(
    tx: &Transaction<'_>,
    cols: &LoaderColumns,
    row: &[String],
    row_number: usize,
    cache: &mut HospitalCache,
    summary: &mut LoadSummary,
) -> Result<(), StoreError> {
    let hospital_name = required(row, cols.hospital_name, columns::HOSPITAL_NAME, row_number)?;
    let hospital_id = resolve_hospital(tx, cache, hospital_name, summary)?;

    let woman = WomanRecord {
        name: required(row, cols.name, columns::NAME, row_number)?.to_string(),
        birth_date: optional(row, cols.date_of_birth),
        blood_type: optional(row, cols.mother_blood_type),
        hospital_id,
    };
    let woman_id = insert_woman(tx, &woman)?;
    summary.women += 1;

    let pregnancy = PregnancyRecord {
        woman_id,
        analyst_id: None,
        first_registration_date: optional(row, cols.registration_date),
        delivery_date: optional(row, cols.delivery_date),
        baby_gender: optional(row, cols.baby_gender),
        delivery_type: optional(row, cols.delivery_type),
        number_of_checkups: optional_integer_at(
            row,
            cols.no_of_checkups,
            columns::NO_OF_CHECKUPS,
            row_number,
        )?,
        number_of_missed_checkups: optional_integer_at(
            row,
            cols.no_of_missed_checkups,
            columns::NO_OF_MISSED_CHECKUPS,
            row_number,
        )?,
    };
    let pregnancy_id = insert_pregnancy(tx, &pregnancy)?;
    summary.pregnancies += 1;

    let checkup = CheckupRecord {
        pregnancy_id,
        date: optional(row, cols.checkup_date),
        time: optional(row, cols.checkup_time),
        weight: optional_real(row, cols.weight, columns::WEIGHT, row_number)?,
        blood_pressure: optional(row, cols.blood_pressure),
        bp_category: cols.bp_category.and_then(|idx| optional(row, idx)),
        gestational_age: optional_integer(
            row,
            cols.gestational_age,
            columns::GESTATIONAL_AGE,
            row_number,
        )?,
        fetal_heart_rate: optional_integer(
            row,
            cols.fetal_heart_rate,
            columns::FETAL_HEART_RATE,
            row_number,
        )?,
        anomaly_presence: optional(row, cols.anomaly),
        maternal_mental_health: optional(row, cols.maternal_mental_health),
    };
    insert_checkup(tx, &checkup)?;
    summary.checkups += 1;
    Ok(())
}

/// Resolve a hospital name to its identifier, inserting on first sight.
fn resolve_hospital(
    tx: &Transaction<'_>,
    cache: &mut HospitalCache,
    name: &str,
    summary: &mut LoadSummary,
) -> Result<HospitalId, StoreError> {
    if let Some(&id) = cache.by_name.get(name) {
        return Ok(id);
    }
    let existing: Option<i64> = tx
        .query_row(
            "SELECT id FROM Hospital WHERE name = ?1",
            params![name],
            |row| row.get(0),
        )
        .optional()?;
    let id = match existing {
        Some(id) => HospitalId::new(id),
        None => {
            tx.execute("INSERT INTO Hospital (name) VALUES (?1)", params![name])?;
            summary.hospitals += 1;
            let id = HospitalId::new(tx.last_insert_rowid());
            debug!(hospital = %id, "hospital registered");
            id
        }
    };
    cache.by_name.insert(name.to_string(), id);
    Ok(id)
}

fn insert_woman(tx: &Transaction<'_>, woman: &WomanRecord) -> Result<WomanId, StoreError> {
    tx.execute(
        "INSERT INTO Woman (name, birth_date, blood_type, hospital_id)
         VALUES (?1, ?2, ?3, ?4)",
        params![
            woman.name,
            woman.birth_date,
            woman.blood_type,
            woman.hospital_id.as_i64(),
        ],
    )?;
    Ok(WomanId::new(tx.last_insert_rowid()))
}

fn insert_pregnancy(
    tx: &Transaction<'_>,
    pregnancy: &PregnancyRecord,
) -> Result<PregnancyId, StoreError> {
    tx.execute(
        "INSERT INTO Pregnancy (woman_id, analyst_id, first_registration_date, delivery_date,
                                baby_gender, delivery_type, number_of_checkups,
                                number_of_missed_checkups)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
        params![
            pregnancy.woman_id.as_i64(),
            pregnancy.analyst_id.map(|id| id.as_i64()),
            pregnancy.first_registration_date,
            pregnancy.delivery_date,
            pregnancy.baby_gender,
            pregnancy.delivery_type,
            pregnancy.number_of_checkups,
            pregnancy.number_of_missed_checkups,
        ],
    )?;
    Ok(PregnancyId::new(tx.last_insert_rowid()))
}

fn insert_checkup(tx: &Transaction<'_>, checkup: &CheckupRecord) -> Result<CheckupId, StoreError> {
    tx.execute(
        "INSERT INTO Checkup (pregnancy_id, date, time, weight, blood_pressure, bp_category,
                              gestational_age, fetal_heart_rate, anomaly_presence,
                              maternal_mental_health)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)",
        params![
            checkup.pregnancy_id.as_i64(),
            checkup.date,
            checkup.time,
            checkup.weight,
            checkup.blood_pressure,
            checkup.bp_category,
            checkup.gestational_age,
            checkup.fetal_heart_rate,
            checkup.anomaly_presence,
            checkup.maternal_mental_health,
        ],
    )?;
    Ok(CheckupId::new(tx.last_insert_rowid()))
}

fn cell(row: &[String], idx: usize) -> &str {
    row.get(idx).map(String::as_str).unwrap_or("")
}

fn required<'a>(
    row: &'a [String],
    idx: usize,
    column: &str,
    row_number: usize,
) -> Result<&'a str, StoreError> {
    let value = cell(row, idx);
    if value.is_empty() {
        return Err(StoreError::MissingField {
            row: row_number,
            column: column.to_string(),
        });
    }
    Ok(value)
}

fn optional(row: &[String], idx: usize) -> Option<String> {
    let value = cell(row, idx);
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

fn optional_integer(
    row: &[String],
    idx: usize,
    column: &str,
    row_number: usize,
) -> Result<Option<i64>, StoreError> {
    let value = cell(row, idx);
    if value.is_empty() {
        return Ok(None);
    }
    value
        .parse::<i64>()
        .map(Some)
        .map_err(|_| StoreError::InvalidNumber {
            row: row_number,
            column: column.to_string(),
        })
}

fn optional_integer_at(
    row: &[String],
    idx: Option<usize>,
    column: &str,
    row_number: usize,
) -> Result<Option<i64>, StoreError> {
    match idx {
        Some(idx) => optional_integer(row, idx, column, row_number),
        None => Ok(None),
    }
}

fn optional_real(
    row: &[String],
    idx: usize,
    column: &str,
    row_number: usize,
) -> Result<Option<f64>, StoreError> {
    let value = cell(row, idx);
    if value.is_empty() {
        return Ok(None);
    }
    value
        .parse::<f64>()
        .map(Some)
        .map_err(|_| StoreError::InvalidNumber {
            row: row_number,
            column: column.to_string(),
        })
}
