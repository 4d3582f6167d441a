//! Range-summary vocabulary: bucket requests, labels and result rows.

use serde::{Deserialize, Serialize};

/// How bucket bounds are rendered in summary labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RangeKind {
    /// Bounds are second counts (pace, lap time), shown as clock strings.
    Pace,
    /// Bounds are watts, shown as "200-250 W".
    Power,
}

/// One bucketed-mean aggregation over a cleaned table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RangeRequest {
    /// Numeric column the buckets are built over.
    pub source_column: String,
    /// Numeric column averaged inside each bucket.
    pub value_column: String,
    pub min: f64,
    pub max: f64,
    pub step: f64,
    pub kind: RangeKind,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryRow {
    pub range: String,
    pub mean: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RangeSummary {
    pub source_column: String,
    pub value_column: String,
    pub rows: Vec<SummaryRow>,
}

impl RangeSummary {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Formats a second count as a clock string: 275 becomes "4:35".
///
/// Minutes are unpadded, seconds always two digits, matching how pace
/// values appear in the Garmin export itself.
pub fn format_clock(seconds: i64) -> String {
    let minutes = seconds / 60;
    let rest = seconds % 60;
    format!("{minutes}:{rest:02}")
}

impl RangeKind {
    /// Renders the label for a bucket spanning `lo..=hi`.
    pub fn label(self, lo: f64, hi: f64) -> String {
        match self {
            RangeKind::Pace => {
                format!("{} - {}", format_clock(lo as i64), format_clock(hi as i64))
            }
            RangeKind::Power => format!("{}-{} W", format_bound(lo), format_bound(hi)),
        }
    }
}

fn format_bound(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}
