//! Activity export cleaning and table assembly.
//!
//! - **normalization**: cell-level parsers (clock durations, grouped
//!   decimals, activity dates)
//! - **detect**: raw column content classification
//! - **cleaner**: raw export to typed frame
//! - **concat**: row-wise union of cleaned frames

pub mod cleaner;
pub mod concat;
pub mod detect;
pub mod normalization;

pub use cleaner::clean_table;
pub use concat::concat_tables;
pub use detect::{ColumnClass, classify_column, is_missing};
pub use normalization::date::{format_iso_date, parse_activity_date};
pub use normalization::duration::parse_duration;
pub use normalization::numeric::{parse_grouped_f64, round2};
