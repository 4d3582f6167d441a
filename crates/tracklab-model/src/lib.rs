//! Core domain types for the activity export toolkit.
//!
//! Holds the fixed Garmin Connect export schema (column drop list, sentinel
//! value, coercion exemptions), the range-summary vocabulary shared by the
//! report and CLI layers, and the crate-wide error type.

pub mod error;
pub mod range;
pub mod schema;

pub use error::{Result, TracklabError};
pub use range::{RangeKind, RangeRequest, RangeSummary, SummaryRow, format_clock};
