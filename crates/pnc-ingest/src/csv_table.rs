use std::path::Path;

use csv::{ReaderBuilder, WriterBuilder};
use tracing::debug;

use pnc_model::CsvTable;

use crate::error::IngestError;

fn normalize_cell(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_string()
}

/// Read a checkup export: first non-blank line is the header, every later
/// line one record.
///
/// Cells are trimmed (including a BOM on the first header cell), fully
/// blank lines are skipped, and short rows are padded to header width so
/// downstream passes can index by column. Cells beyond the header width
/// are discarded.
pub fn read_csv_table(path: &Path) -> Result<CsvTable, IngestError> {
    let read_err = |source: csv::Error| IngestError::Read {
        path: path.to_path_buf(),
        source,
    };
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .map_err(read_err)?;
    let mut records: Vec<Vec<String>> = Vec::new();
    for record in reader.records() {
        let record = record.map_err(read_err)?;
        let row: Vec<String> = record.iter().map(normalize_cell).collect();
        if row.iter().all(|value| value.is_empty()) {
            continue;
        }
        records.push(row);
    }
    if records.is_empty() {
        return Ok(CsvTable::default());
    }
    let headers = records.remove(0);
    let mut table = CsvTable::new(headers);
    for record in records {
        let mut row = Vec::with_capacity(table.headers.len());
        for idx in 0..table.headers.len() {
            row.push(record.get(idx).cloned().unwrap_or_default());
        }
        table.push_row(row);
    }
    debug!(
        path = %path.display(),
        rows = table.rows.len(),
        columns = table.headers.len(),
        "read csv table"
    );
    Ok(table)
}

/// Write a table as UTF-8 CSV: header line first, then one line per row.
///
/// Fields are quoted only when they require it.
pub fn write_csv_table(path: &Path, table: &CsvTable) -> Result<(), IngestError> {
    let write_err = |source: csv::Error| IngestError::Write {
        path: path.to_path_buf(),
        source,
    };
    let mut writer = WriterBuilder::new().from_path(path).map_err(write_err)?;
    writer.write_record(&table.headers).map_err(write_err)?;
    for row in &table.rows {
        writer.write_record(row).map_err(write_err)?;
    }
    writer.flush().map_err(|source| IngestError::Write {
        path: path.to_path_buf(),
        source: source.into(),
    })?;
    debug!(path = %path.display(), rows = table.rows.len(), "wrote csv table");
    Ok(())
}
