//! Activity timestamp parsing.
//!
//! Garmin exports carry a full timestamp in the Date column; only the
//! calendar date survives cleaning.

use chrono::NaiveDate;

const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%d",
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y %H:%M",
    "%m/%d/%Y",
];

/// Parses a timestamp in any of the shapes the export uses and keeps the
/// calendar date. Time-of-day parts are consumed and discarded.
pub fn parse_activity_date(value: &str) -> Option<NaiveDate> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    for fmt in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, fmt) {
            return Some(date);
        }
    }
    None
}

pub fn format_iso_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timestamps_reduce_to_dates() {
        let date = NaiveDate::from_ymd_opt(2023, 6, 4).unwrap();
        assert_eq!(parse_activity_date("2023-06-04 17:12:33"), Some(date));
        assert_eq!(parse_activity_date("2023-06-04T17:12:33"), Some(date));
        assert_eq!(parse_activity_date("2023-06-04"), Some(date));
        assert_eq!(parse_activity_date("06/04/2023 17:12"), Some(date));
    }

    #[test]
    fn garbage_dates_are_rejected() {
        assert_eq!(parse_activity_date(""), None);
        assert_eq!(parse_activity_date("--"), None);
        assert_eq!(parse_activity_date("yesterday"), None);
        assert_eq!(parse_activity_date("2023-13-01"), None);
    }

    #[test]
    fn iso_output_is_zero_padded() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
        assert_eq!(format_iso_date(date), "2024-01-05");
    }
}
