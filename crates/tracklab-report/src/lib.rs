//! Reporting over cleaned activity tables.
//!
//! - **ranges**: fixed-width bucket means (pace and power summaries)
//! - **writer**: cleaned-table CSV plus summary CSV/JSON output

pub mod ranges;
pub mod writer;

pub use ranges::create_ranges;
pub use writer::{
    summary_to_csv, summary_to_json, write_clean_csv, write_summary_csv, write_summary_json,
};
