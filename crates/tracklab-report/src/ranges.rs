//! Fixed-width bucket aggregation over cleaned tables.

use anyhow::Result;
use polars::prelude::DataFrame;
use tracing::debug;

use tracklab_model::{RangeRequest, RangeSummary, SummaryRow};
use tracklab_transform::round2;

/// Builds bucketed means of one column against ranges of another.
///
/// Buckets are `[lo, lo + step]` for `lo = min, min + step, ...` while
/// `lo < max`, inclusive at both ends: a sample sitting exactly on a
/// shared boundary counts in the bucket on each side. The bucket mean
/// ignores null values and is rounded to two decimals; buckets that end
/// up with nothing to average are left out of the summary.
///
/// The caller must pass `step > 0`. `min >= max` yields an empty summary.
/// Both columns must exist and be Float64.
pub fn create_ranges(df: &DataFrame, request: &RangeRequest) -> Result<RangeSummary> {
    let source = df.column(&request.source_column)?.f64()?;
    let values = df.column(&request.value_column)?.f64()?;

    let mut rows = Vec::new();
    let mut lo = request.min;
    while lo < request.max {
        let hi = lo + request.step;
        let mut sum = 0.0;
        let mut count = 0usize;
        for idx in 0..df.height() {
            let Some(sample) = source.get(idx) else {
                continue;
            };
            if !(lo..=hi).contains(&sample) {
                continue;
            }
            if let Some(value) = values.get(idx) {
                sum += value;
                count += 1;
            }
        }
        if count > 0 {
            rows.push(SummaryRow {
                range: request.kind.label(lo, hi),
                mean: round2(sum / count as f64),
            });
        }
        lo = hi;
    }
    debug!(
        source = %request.source_column,
        value = %request.value_column,
        buckets = rows.len(),
        "built range summary"
    );
    Ok(RangeSummary {
        source_column: request.source_column.clone(),
        value_column: request.value_column.clone(),
        rows,
    })
}
