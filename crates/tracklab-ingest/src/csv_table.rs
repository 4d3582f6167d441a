use std::path::Path;

use anyhow::{Context, Result};
use csv::ReaderBuilder;
use tracing::debug;

/// A raw activity export: trimmed string cells under their column headers.
///
/// Nothing is typed at this stage. Ragged data rows are padded with empty
/// cells to header width and fully empty rows are skipped.
#[derive(Debug, Clone)]
pub struct CsvTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl CsvTable {
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    pub fn width(&self) -> usize {
        self.headers.len()
    }

    /// Position of a header, exact match.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|header| header == name)
    }

    /// All cells of one column, top to bottom.
    pub fn column_values(&self, name: &str) -> Option<Vec<&str>> {
        let idx = self.column_index(name)?;
        Some(
            self.rows
                .iter()
                .map(|row| row.get(idx).map(String::as_str).unwrap_or(""))
                .collect(),
        )
    }
}

fn normalize_header(raw: &str) -> String {
    // Strip a UTF-8 BOM on the first header and collapse inner runs of
    // whitespace so "Avg  Pace" and "Avg Pace" name the same column.
    let trimmed = raw.trim().trim_matches('\u{feff}');
    trimmed.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn normalize_cell(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_string()
}

pub fn read_csv_table(path: &Path) -> Result<CsvTable> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("read csv: {}", path.display()))?;
    let headers: Vec<String> = reader
        .headers()
        .with_context(|| format!("read headers: {}", path.display()))?
        .iter()
        .map(normalize_header)
        .collect();
    let mut rows: Vec<Vec<String>> = Vec::new();
    for record in reader.records() {
        let record = record.with_context(|| format!("read record: {}", path.display()))?;
        if record.iter().all(|value| value.trim().is_empty()) {
            continue;
        }
        let mut row = Vec::with_capacity(headers.len());
        for idx in 0..headers.len() {
            row.push(normalize_cell(record.get(idx).unwrap_or("")));
        }
        rows.push(row);
    }
    debug!(
        path = %path.display(),
        rows = rows.len(),
        columns = headers.len(),
        "loaded activity export"
    );
    Ok(CsvTable { headers, rows })
}
