//! The reshape pass over a checkup export.

use tracing::{debug, info};

use pnc_model::{BpCategory, CsvTable, columns};

use crate::error::TransformError;
use crate::normalization::{DatePairOrder, bp, compare_date_pair, parse_i64};

/// Which rows the registration/checkup date correction applies to.
///
/// Both policies exist in the wild for this export format; see DESIGN.md.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DateSwapPolicy {
    /// Correct every row with a reversed pair.
    #[default]
    Always,
    /// Correct only rows whose gender field equals "female" (trimmed,
    /// case-insensitive).
    FemaleOnly,
}

#[derive(Debug, Clone, Default)]
pub struct TransformOptions {
    pub date_swap_policy: DateSwapPolicy,
}

/// Counters for one reshape pass, reported to the operator afterwards.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TransformReport {
    pub rows: usize,
    pub swapped_date_pairs: usize,
    pub degraded_checkup_counts: usize,
    pub unknown_bp_readings: usize,
}

/// Header indices resolved once per pass.
struct SourceColumns {
    gender: Option<usize>,
    registration_date: usize,
    registration_time: usize,
    checkup_date: usize,
    checkup_time: usize,
    no_of_checkups: usize,
    no_of_missed_checkups: usize,
    blood_pressure: usize,
    /// Indices surviving the drop-set, in original order.
    kept: Vec<usize>,
}

impl SourceColumns {
    fn resolve(table: &CsvTable, policy: DateSwapPolicy) -> Result<Self, TransformError> {
        let require = |name: &str| {
            table
                .column_index(name)
                .ok_or_else(|| TransformError::MissingColumn(name.to_string()))
        };
        let gender = match policy {
            DateSwapPolicy::Always => None,
            DateSwapPolicy::FemaleOnly => Some(require(columns::GENDER)?),
        };
        let kept = table
            .headers
            .iter()
            .enumerate()
            .filter(|(_, header)| !columns::DROPPED.contains(&header.as_str()))
            .map(|(idx, _)| idx)
            .collect();
        Ok(Self {
            gender,
            registration_date: require(columns::USER_REGISTRATION_DATE)?,
            registration_time: require(columns::USER_REGISTRATION_TIME)?,
            checkup_date: require(columns::LAST_CHECKUP_DATE)?,
            checkup_time: require(columns::LAST_CHECKUP_TIME)?,
            no_of_checkups: require(columns::NO_OF_CHECKUPS)?,
            no_of_missed_checkups: require(columns::NO_OF_MISSED_CHECKUPS)?,
            blood_pressure: require(columns::BLOOD_PRESSURE)?,
            kept,
        })
    }

    fn swap_candidate(&self, policy: DateSwapPolicy, row: &[String]) -> bool {
        match policy {
            DateSwapPolicy::Always => true,
            DateSwapPolicy::FemaleOnly => self
                .gender
                .map(|idx| row[idx].trim().eq_ignore_ascii_case("female"))
                .unwrap_or(false),
        }
    }
}

/// Produce the derived export from a source export.
///
/// Row count and order are preserved 1:1. The derived header is the source
/// header minus the drop-set (original order), with `Checkup` and
/// `BP_Category` appended. Malformed rows degrade per field (empty marker,
/// `Unknown` category) and never abort the pass; only a column missing
/// from the header is an error.
pub fn reshape_table(
    table: &CsvTable,
    options: &TransformOptions,
) -> Result<(CsvTable, TransformReport), TransformError> {
    let cols = SourceColumns::resolve(table, options.date_swap_policy)?;

    let mut headers: Vec<String> = cols
        .kept
        .iter()
        .map(|&idx| table.headers[idx].clone())
        .collect();
    headers.push(columns::CHECKUP.to_string());
    headers.push(columns::BP_CATEGORY.to_string());

    let mut derived = CsvTable::new(headers);
    let mut report = TransformReport {
        rows: table.rows.len(),
        ..TransformReport::default()
    };

    for (index, source_row) in table.rows.iter().enumerate() {
        let row_number = index + 1;
        let mut row = source_row.clone();
        // Short rows read as empty cells from here on.
        row.resize(table.headers.len().max(row.len()), String::new());

        if cols.swap_candidate(options.date_swap_policy, &row) {
            let order = compare_date_pair(&row[cols.registration_date], &row[cols.checkup_date]);
            if order == DatePairOrder::Reversed {
                row.swap(cols.registration_date, cols.checkup_date);
                row.swap(cols.registration_time, cols.checkup_time);
                report.swapped_date_pairs += 1;
            }
        }

        let attended = match (
            parse_i64(&row[cols.no_of_checkups]),
            parse_i64(&row[cols.no_of_missed_checkups]),
        ) {
            (Some(total), Some(missed)) => (total - missed).to_string(),
            _ => {
                report.degraded_checkup_counts += 1;
                debug!(row = row_number, "checkup counts not integers; emitting empty marker");
                String::new()
            }
        };

        let category = bp::categorize(&row[cols.blood_pressure]);
        if category == BpCategory::Unknown {
            report.unknown_bp_readings += 1;
        }

        let mut out: Vec<String> = cols.kept.iter().map(|&idx| row[idx].clone()).collect();
        out.push(attended);
        out.push(category.as_str().to_string());
        derived.push_row(out);
    }

    info!(
        rows = report.rows,
        swapped = report.swapped_date_pairs,
        degraded = report.degraded_checkup_counts,
        unknown_bp = report.unknown_bp_readings,
        "reshape pass finished"
    );
    Ok((derived, report))
}
