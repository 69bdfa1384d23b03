//! Command orchestration for the registry ETL.

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use tracing::{info, info_span};

use pnc_ingest::{read_csv_table, write_csv_table};
use pnc_model::AnalystId;
use pnc_store::{Settings, create_tables, insert_analyst, open_database, populate};
use pnc_transform::{TransformOptions, TransformReport, reshape_table};

use crate::cli::{AddAnalystArgs, LoadArgs, RunArgs, StoreArgs, TransformArgs};
use crate::types::{LoadOutcome, RunOutcome};

pub fn run_transform(args: &TransformArgs) -> Result<TransformReport> {
    let span = info_span!("transform", input = %args.input.display());
    let _guard = span.enter();
    let table = read_csv_table(&args.input).context("read source export")?;
    let options = TransformOptions {
        date_swap_policy: args.date_swap_policy.into(),
    };
    let (derived, report) = reshape_table(&table, &options).context("reshape export")?;
    write_csv_table(&args.output, &derived).context("write derived export")?;
    info!(
        rows = report.rows,
        swapped = report.swapped_date_pairs,
        "transform finished"
    );
    Ok(report)
}

pub fn run_load(args: &LoadArgs) -> Result<LoadOutcome> {
    let database = resolve_database(&args.store)?;
    let span = info_span!("load", database = %database.display());
    let _guard = span.enter();
    let mut conn = open_database(&database).context("open registry database")?;
    create_tables(&mut conn).context("create registry schema")?;
    if args.schema_only {
        return Ok(LoadOutcome {
            database,
            summary: None,
        });
    }
    let table = read_csv_table(&args.input).context("read export")?;
    let summary = populate(&mut conn, &table).context("load export")?;
    Ok(LoadOutcome {
        database,
        summary: Some(summary),
    })
}

pub fn run_pipeline(args: &RunArgs) -> Result<RunOutcome> {
    let report = run_transform(&TransformArgs {
        input: args.input.clone(),
        output: args.output.clone(),
        date_swap_policy: args.date_swap_policy,
    })?;
    let load = run_load(&LoadArgs {
        input: args.output.clone(),
        store: args.store.clone(),
        schema_only: false,
    })?;
    Ok(RunOutcome {
        report,
        derived: args.output.clone(),
        load,
    })
}

pub fn run_add_analyst(args: &AddAnalystArgs) -> Result<AnalystId> {
    let database = resolve_database(&args.store)?;
    let mut conn = open_database(&database).context("open registry database")?;
    create_tables(&mut conn).context("create registry schema")?;
    insert_analyst(&conn, &args.username, &args.password).context("insert analyst")
}

/// Resolve the registry database path: the flag wins, then the settings
/// file; neither configured is a fatal configuration error.
fn resolve_database(store: &StoreArgs) -> Result<PathBuf> {
    if let Some(path) = &store.database {
        return Ok(path.clone());
    }
    if let Some(settings_path) = &store.settings {
        let settings = Settings::load(settings_path).context("load settings")?;
        return Ok(settings.database);
    }
    bail!("no registry database configured; pass --database or --settings")
}
