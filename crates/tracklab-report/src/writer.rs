//! Cleaned-table and summary persistence.

use std::fs::{self, File};
use std::path::Path;

use anyhow::{Context, Result};
use csv::WriterBuilder;
use polars::prelude::{CsvWriter, DataFrame, SerWriter};
use tracing::info;

use tracklab_model::RangeSummary;

/// Writes a cleaned frame back to CSV. Nulls become empty cells.
pub fn write_clean_csv(df: &mut DataFrame, path: &Path) -> Result<()> {
    let file = File::create(path).with_context(|| format!("create {}", path.display()))?;
    CsvWriter::new(file).include_header(true).finish(df)?;
    info!(path = %path.display(), rows = df.height(), "wrote cleaned table");
    Ok(())
}

/// Renders a range summary as a two-column CSV headed by the source and
/// value column names, one bucket per row.
pub fn summary_to_csv(summary: &RangeSummary) -> Result<String> {
    let mut buffer = Vec::new();
    {
        let mut writer = WriterBuilder::new().from_writer(&mut buffer);
        writer.write_record([
            summary.source_column.as_str(),
            summary.value_column.as_str(),
        ])?;
        for row in &summary.rows {
            writer.write_record([row.range.clone(), row.mean.to_string()])?;
        }
        writer.flush()?;
    }
    String::from_utf8(buffer).context("summary csv is not utf-8")
}

/// Renders the whole summary, column names included, as pretty JSON.
pub fn summary_to_json(summary: &RangeSummary) -> Result<String> {
    Ok(serde_json::to_string_pretty(summary)?)
}

pub fn write_summary_csv(summary: &RangeSummary, path: &Path) -> Result<()> {
    let rendered = summary_to_csv(summary)?;
    fs::write(path, rendered).with_context(|| format!("write {}", path.display()))?;
    info!(path = %path.display(), buckets = summary.len(), "wrote summary csv");
    Ok(())
}

pub fn write_summary_json(summary: &RangeSummary, path: &Path) -> Result<()> {
    let rendered = summary_to_json(summary)?;
    fs::write(path, rendered).with_context(|| format!("write {}", path.display()))?;
    info!(path = %path.display(), buckets = summary.len(), "wrote summary json");
    Ok(())
}
