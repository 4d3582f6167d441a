//! Column vocabulary of the Garmin Connect activity export.

/// Cell value Garmin writes when a measurement is absent.
pub const MISSING_SENTINEL: &str = "--";

/// Columns stripped from every export before typing. They are either
/// free-text, dive-only, or duplicated by a better column.
pub const DROPPED_COLUMNS: &[&str] = &[
    "Favorite",
    "Title",
    "Avg GAP",
    "Decompression",
    "Surface Interval",
    "Dive Time",
    "Total Reps",
    "Flow",
    "Grit",
    "Best Lap Time",
    "Avg GCT Balance",
];

/// Columns that stay textual instead of being coerced to numbers.
pub const COERCION_EXEMPT: &[&str] = &["Activity Type", "Date", "L/R Balance"];

pub const ACTIVITY_TYPE: &str = "Activity Type";
pub const DATE: &str = "Date";
pub const DISTANCE: &str = "Distance";

/// Columns an export must carry for cleaning to make sense.
pub const REQUIRED_COLUMNS: &[&str] = &[DISTANCE, ACTIVITY_TYPE, DATE];

pub fn is_dropped(column: &str) -> bool {
    DROPPED_COLUMNS.contains(&column)
}

pub fn is_coercion_exempt(column: &str) -> bool {
    COERCION_EXEMPT.contains(&column)
}

/// Whether an activity type denotes a swim. Swim distances arrive in
/// meters and are converted to kilometres during cleaning.
pub fn is_swim(activity_type: &str) -> bool {
    activity_type.contains("Swim")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn swim_detection_matches_variants() {
        assert!(is_swim("Pool Swim"));
        assert!(is_swim("Open Water Swimming"));
        assert!(!is_swim("Running"));
        assert!(!is_swim("swim"));
    }

    #[test]
    fn exempt_columns_are_not_dropped() {
        for column in COERCION_EXEMPT {
            assert!(!is_dropped(column));
        }
    }

    #[test]
    fn required_columns_are_exempt_or_numeric() {
        assert!(is_coercion_exempt(ACTIVITY_TYPE));
        assert!(is_coercion_exempt(DATE));
        assert!(!is_coercion_exempt(DISTANCE));
    }
}
