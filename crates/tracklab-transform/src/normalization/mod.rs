//! Cell-level normalization for raw export values.
//!
//! - **duration**: colon-separated clock strings to minutes or seconds
//! - **numeric**: thousands-separated decimals
//! - **date**: activity timestamps to calendar dates

pub mod date;
pub mod duration;
pub mod numeric;

pub use date::{format_iso_date, parse_activity_date};
pub use duration::parse_duration;
pub use numeric::{parse_grouped_f64, round2};
