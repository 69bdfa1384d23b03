//! CLI library components for the prenatal-care registry ETL.

pub mod cli;
pub mod commands;
pub mod logging;
pub mod summary;
pub mod types;
