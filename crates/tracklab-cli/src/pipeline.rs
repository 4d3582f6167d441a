//! Export processing pipeline with explicit stages.
//!
//! Every command runs a short chain of the same stages:
//! 1. **Read**: parse a raw export into an untyped table
//! 2. **Clean**: drop noise columns, coerce cells, build a typed frame
//! 3. **Combine**: union cleaned frames row-wise (clean command only)
//! 4. **Report**: bucket a metric (ranges) or describe columns (inspect)
//!
//! Each stage takes the output of the previous stage and returns typed results.

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use polars::prelude::DataFrame;
use tracing::{info, info_span};

use tracklab_ingest::{CsvTable, read_csv_table};
use tracklab_model::schema;
use tracklab_model::{RangeRequest, RangeSummary};
use tracklab_report::create_ranges;
use tracklab_transform::{ColumnClass, classify_column, clean_table, concat_tables, is_missing};

/// Shape bookkeeping for one cleaned export file.
#[derive(Debug, Clone)]
pub struct FileReport {
    pub path: PathBuf,
    pub raw_rows: usize,
    pub raw_columns: usize,
    pub clean_columns: usize,
}

/// A cleaned export together with its shape report.
pub struct CleanedExport {
    pub report: FileReport,
    pub frame: DataFrame,
}

/// How one raw column would be interpreted during cleaning.
#[derive(Debug, Clone)]
pub struct ColumnReport {
    pub name: String,
    pub class: ColumnClass,
    pub populated: usize,
    pub missing: usize,
    pub dropped: bool,
}

/// Column-by-column description of a raw export file.
#[derive(Debug)]
pub struct FileInspection {
    pub path: PathBuf,
    pub rows: usize,
    pub columns: Vec<ColumnReport>,
}

/// Read one export and clean it into a typed frame.
pub fn clean_file(path: &Path) -> Result<CleanedExport> {
    let table = read_csv_table(path)?;
    let frame = clean_table(&table).with_context(|| format!("clean {}", path.display()))?;
    Ok(CleanedExport {
        report: FileReport {
            path: path.to_path_buf(),
            raw_rows: table.height(),
            raw_columns: table.width(),
            clean_columns: frame.width(),
        },
        frame,
    })
}

/// Clean every export and union them into a single frame.
pub fn clean_files(paths: &[PathBuf]) -> Result<(Vec<FileReport>, DataFrame)> {
    let span = info_span!("clean", file_count = paths.len());
    let _guard = span.enter();
    let start = Instant::now();
    let mut reports = Vec::with_capacity(paths.len());
    let mut frames = Vec::with_capacity(paths.len());
    for path in paths {
        let cleaned = clean_file(path)?;
        reports.push(cleaned.report);
        frames.push(cleaned.frame);
    }
    let combined = concat_tables(frames)?;
    info!(
        file_count = paths.len(),
        rows = combined.height(),
        columns = combined.width(),
        duration_ms = start.elapsed().as_millis(),
        "clean complete"
    );
    Ok((reports, combined))
}

/// Clean one export and bucket one of its metrics against another.
pub fn summarize_file(path: &Path, request: &RangeRequest) -> Result<RangeSummary> {
    let span = info_span!("ranges", source_column = %request.source_column);
    let _guard = span.enter();
    let start = Instant::now();
    let cleaned = clean_file(path)?;
    let summary = create_ranges(&cleaned.frame, request)
        .with_context(|| format!("summarize {}", path.display()))?;
    info!(
        source_column = %request.source_column,
        value_column = %request.value_column,
        buckets = summary.len(),
        duration_ms = start.elapsed().as_millis(),
        "ranges complete"
    );
    Ok(summary)
}

/// Describe every column of a raw export without cleaning it.
pub fn inspect_file(path: &Path) -> Result<FileInspection> {
    let table = read_csv_table(path)?;
    let columns = table
        .headers
        .iter()
        .map(|name| column_report(&table, name))
        .collect();
    Ok(FileInspection {
        path: path.to_path_buf(),
        rows: table.height(),
        columns,
    })
}

fn column_report(table: &CsvTable, name: &str) -> ColumnReport {
    let values = table.column_values(name).unwrap_or_default();
    let populated = values.iter().filter(|cell| !is_missing(cell)).count();
    ColumnReport {
        name: name.to_string(),
        class: classify_column(&values),
        populated,
        missing: table.height() - populated,
        dropped: schema::is_dropped(name),
    }
}

/// Default output path for a cleaned export set.
///
/// A single input lands next to itself as `<stem>_clean.csv`; several
/// inputs combine into `activities_clean.csv` next to the first one.
pub fn default_clean_path(inputs: &[PathBuf]) -> PathBuf {
    let Some(first) = inputs.first() else {
        return PathBuf::from("activities_clean.csv");
    };
    let dir = first.parent().map(Path::to_path_buf).unwrap_or_default();
    if inputs.len() == 1 {
        let stem = first
            .file_stem()
            .and_then(|stem| stem.to_str())
            .unwrap_or("activities");
        dir.join(format!("{stem}_clean.csv"))
    } else {
        dir.join("activities_clean.csv")
    }
}
