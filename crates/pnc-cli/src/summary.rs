//! End-of-run summary tables.

use std::path::Path;

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Cell, CellAlignment, ContentArrangement, Table};

use pnc_transform::TransformReport;

use crate::types::{LoadOutcome, RunOutcome};

pub fn print_transform_report(output: &Path, report: &TransformReport) {
    println!("Derived export: {}", output.display());
    let mut table = Table::new();
    apply_table_style(&mut table);
    table.set_header(vec![
        "Rows",
        "Swapped date pairs",
        "Degraded checkup counts",
        "Unknown BP readings",
    ]);
    table.add_row(vec![
        Cell::new(report.rows),
        Cell::new(report.swapped_date_pairs),
        Cell::new(report.degraded_checkup_counts),
        Cell::new(report.unknown_bp_readings),
    ]);
    for index in 0..4 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    println!("{table}");
}

pub fn print_load_outcome(outcome: &LoadOutcome) {
    println!("Registry: {}", outcome.database.display());
    let Some(summary) = &outcome.summary else {
        println!("Schema ready; no rows loaded.");
        return;
    };
    let mut table = Table::new();
    apply_table_style(&mut table);
    table.set_header(vec!["Table", "Inserted"]);
    for (name, count) in [
        ("Hospital", summary.hospitals),
        ("Woman", summary.women),
        ("Pregnancy", summary.pregnancies),
        ("Checkup", summary.checkups),
    ] {
        table.add_row(vec![Cell::new(name), Cell::new(count)]);
    }
    align_column(&mut table, 1, CellAlignment::Right);
    println!("{table}");
    println!("{} source record(s) loaded.", summary.records);
}

pub fn print_run_outcome(outcome: &RunOutcome) {
    print_transform_report(&outcome.derived, &outcome.report);
    print_load_outcome(&outcome.load);
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}
