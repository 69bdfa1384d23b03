//! Record transformer for prenatal checkup exports.
//!
//! One linear pass over a [`pnc_model::CsvTable`]: correct reversed
//! registration/checkup date pairs, derive the attended-checkup count and
//! the blood-pressure category, and drop the columns the registry does not
//! keep.

mod error;
pub mod normalization;
pub mod reshape;

pub use error::TransformError;
pub use reshape::{DateSwapPolicy, TransformOptions, TransformReport, reshape_table};
