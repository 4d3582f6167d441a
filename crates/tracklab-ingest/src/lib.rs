//! Activity export ingestion.
//!
//! Reads Garmin Connect CSV exports into untyped [`CsvTable`] string tables.
//! Typing and cleaning happen downstream in `tracklab-transform`.

pub mod csv_table;

pub use csv_table::{CsvTable, read_csv_table};
