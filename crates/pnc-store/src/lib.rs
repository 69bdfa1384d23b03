//! SQLite registry for prenatal checkup exports.
//!
//! Schema creation and bulk loading each run inside their own transaction:
//! either every statement of the unit lands, or none does. The connection
//! and its statements are scoped resources released on every exit path.

pub mod analyst;
pub mod connection;
mod error;
pub mod load;
pub mod schema;
pub mod settings;

pub use analyst::insert_analyst;
pub use connection::{open_database, open_memory_database};
pub use error::StoreError;
pub use load::{LoadSummary, populate};
pub use schema::create_tables;
pub use settings::Settings;
