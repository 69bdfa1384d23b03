//! Normalization functions for checkup export fields.
//!
//! - **bp**: blood-pressure categorization
//! - **datetime**: calendar parsing and date-pair ordering
//! - **numeric**: integer parsing with empty-as-missing semantics

pub mod bp;
pub mod datetime;
pub mod numeric;

pub use bp::categorize;
pub use datetime::{DatePairOrder, compare_date_pair, parse_timestamp};
pub use numeric::parse_i64;
