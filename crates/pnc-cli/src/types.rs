use std::path::PathBuf;

use pnc_store::LoadSummary;
use pnc_transform::TransformReport;

/// Result of a load session.
#[derive(Debug)]
pub struct LoadOutcome {
    pub database: PathBuf,
    /// None when only the schema was created.
    pub summary: Option<LoadSummary>,
}

/// Result of a combined transform-then-load run.
#[derive(Debug)]
pub struct RunOutcome {
    pub report: TransformReport,
    pub derived: PathBuf,
    pub load: LoadOutcome,
}
