//! CLI argument definitions for the registry ETL.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use pnc_transform::DateSwapPolicy;

#[derive(Parser)]
#[command(
    name = "pnc-etl",
    version,
    about = "Prenatal-care registry ETL - reshape checkup exports and load the registry",
    long_about = "Reshape prenatal checkup CSV exports (date-pair correction, attended-checkup\n\
                  counts, blood-pressure categories) and load them into the single-file\n\
                  registry database inside all-or-nothing transactions."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Reshape a checkup export into the derived CSV.
    Transform(TransformArgs),

    /// Create the registry schema and load an export.
    Load(LoadArgs),

    /// Transform an export, then load the result.
    Run(RunArgs),

    /// Register an analyst account in the registry.
    AddAnalyst(AddAnalystArgs),
}

#[derive(Args)]
pub struct TransformArgs {
    /// Path to the source checkup export.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Path of the derived CSV to write.
    #[arg(value_name = "OUTPUT")]
    pub output: PathBuf,

    /// Which rows the registration/checkup date correction applies to.
    #[arg(
        long = "date-swap-policy",
        value_enum,
        default_value = "always"
    )]
    pub date_swap_policy: DateSwapPolicyArg,
}

/// Registry location flags shared by the store-touching subcommands.
#[derive(Args, Clone)]
pub struct StoreArgs {
    /// Registry database file (overrides the settings file).
    #[arg(long = "database", value_name = "PATH")]
    pub database: Option<PathBuf>,

    /// JSON settings file providing the database path.
    #[arg(long = "settings", value_name = "PATH")]
    pub settings: Option<PathBuf>,
}

#[derive(Args)]
pub struct LoadArgs {
    /// Path to the (raw or transformed) export to load.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    #[command(flatten)]
    pub store: StoreArgs,

    /// Create the schema and stop without loading rows.
    #[arg(long = "schema-only")]
    pub schema_only: bool,
}

#[derive(Args)]
pub struct RunArgs {
    /// Path to the source checkup export.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Path of the derived CSV to write (and then load).
    #[arg(value_name = "OUTPUT")]
    pub output: PathBuf,

    #[command(flatten)]
    pub store: StoreArgs,

    /// Which rows the registration/checkup date correction applies to.
    #[arg(
        long = "date-swap-policy",
        value_enum,
        default_value = "always"
    )]
    pub date_swap_policy: DateSwapPolicyArg,
}

#[derive(Args)]
pub struct AddAnalystArgs {
    /// Account name; unique within the registry.
    #[arg(value_name = "USERNAME")]
    pub username: String,

    /// Account password.
    #[arg(value_name = "PASSWORD")]
    pub password: String,

    #[command(flatten)]
    pub store: StoreArgs,
}

/// CLI date-swap policy choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum DateSwapPolicyArg {
    /// Correct every reversed pair.
    Always,
    /// Correct reversed pairs on rows whose gender is "female".
    FemaleOnly,
}

impl From<DateSwapPolicyArg> for DateSwapPolicy {
    fn from(value: DateSwapPolicyArg) -> Self {
        match value {
            DateSwapPolicyArg::Always => Self::Always,
            DateSwapPolicyArg::FemaleOnly => Self::FemaleOnly,
        }
    }
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
