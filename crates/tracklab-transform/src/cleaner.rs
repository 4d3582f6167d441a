//! Export cleaning: prune, de-sentinel, coerce, convert.
//!
//! Turns a raw [`CsvTable`] into a typed frame where every column is
//! either Float64 or String, both nullable. Cell-level problems become
//! nulls; only structural problems (a required column missing, duplicate
//! headers) fail the clean.

use anyhow::Result;
use polars::prelude::{Column, DataFrame};
use tracing::debug;

use tracklab_ingest::CsvTable;
use tracklab_model::TracklabError;
use tracklab_model::schema;

use crate::detect::{has_duration_cells, is_missing};
use crate::normalization::date::{format_iso_date, parse_activity_date};
use crate::normalization::duration::parse_duration;
use crate::normalization::numeric::{parse_grouped_f64, round2};

/// Typed contents of one cleaned column.
enum CleanColumn {
    Numbers(Vec<Option<f64>>),
    Text(Vec<Option<String>>),
}

/// Cleans one raw activity export into a typed frame.
///
/// Steps, in order: drop the fixed junk columns, require the core
/// columns, null out `--` sentinels, coerce every non-exempt column to
/// Float64 (durations by the colon rule, everything else as grouped
/// decimals rounded to 2), convert swim distances from meters to
/// kilometres, and reduce the Date column to ISO calendar dates.
///
/// Row count and column order are preserved.
pub fn clean_table(table: &CsvTable) -> Result<DataFrame> {
    for required in schema::REQUIRED_COLUMNS {
        if table.column_index(required).is_none() {
            return Err(TracklabError::ColumnNotFound((*required).to_string()).into());
        }
    }

    let kept: Vec<usize> = (0..table.headers.len())
        .filter(|&idx| !schema::is_dropped(&table.headers[idx]))
        .collect();

    let mut names: Vec<&str> = Vec::with_capacity(kept.len());
    let mut columns: Vec<CleanColumn> = Vec::with_capacity(kept.len());
    let mut duration_columns = 0usize;
    for &col_idx in &kept {
        let name = table.headers[col_idx].as_str();
        let cells: Vec<&str> = table
            .rows
            .iter()
            .map(|row| row.get(col_idx).map(String::as_str).unwrap_or(""))
            .collect();
        let column = if schema::is_coercion_exempt(name) {
            CleanColumn::Text(
                cells
                    .iter()
                    .map(|cell| populated(cell).map(str::to_string))
                    .collect(),
            )
        } else if has_duration_cells(&cells) {
            duration_columns += 1;
            CleanColumn::Numbers(
                cells
                    .iter()
                    .map(|cell| populated(cell).and_then(parse_duration))
                    .collect(),
            )
        } else {
            CleanColumn::Numbers(
                cells
                    .iter()
                    .map(|cell| populated(cell).and_then(parse_grouped_f64).map(round2))
                    .collect(),
            )
        };
        names.push(name);
        columns.push(column);
    }

    convert_swim_distances(&names, &mut columns);
    normalize_dates(&names, &mut columns);

    let frame_columns: Vec<Column> = names
        .iter()
        .zip(columns)
        .map(|(name, column)| match column {
            CleanColumn::Numbers(values) => Column::new((*name).into(), values),
            CleanColumn::Text(values) => Column::new((*name).into(), values),
        })
        .collect();
    let df = DataFrame::new(frame_columns)?;
    debug!(
        rows = df.height(),
        columns = df.width(),
        dropped = table.headers.len() - kept.len(),
        duration_columns,
        "cleaned activity export"
    );
    Ok(df)
}

fn populated(cell: &str) -> Option<&str> {
    if is_missing(cell) { None } else { Some(cell.trim()) }
}

/// Swim distances arrive in meters; everything else is already in
/// kilometres. Rows with a missing activity type are left alone.
fn convert_swim_distances(names: &[&str], columns: &mut [CleanColumn]) {
    let Some(type_idx) = names.iter().position(|name| *name == schema::ACTIVITY_TYPE) else {
        return;
    };
    let Some(dist_idx) = names.iter().position(|name| *name == schema::DISTANCE) else {
        return;
    };
    let swim_rows: Vec<bool> = match &columns[type_idx] {
        CleanColumn::Text(values) => values
            .iter()
            .map(|value| value.as_deref().is_some_and(schema::is_swim))
            .collect(),
        CleanColumn::Numbers(_) => return,
    };
    if let CleanColumn::Numbers(distances) = &mut columns[dist_idx] {
        for (distance, is_swim) in distances.iter_mut().zip(&swim_rows) {
            if *is_swim && let Some(meters) = *distance {
                *distance = Some(round2(meters / 1000.0));
            }
        }
    }
}

fn normalize_dates(names: &[&str], columns: &mut [CleanColumn]) {
    let Some(date_idx) = names.iter().position(|name| *name == schema::DATE) else {
        return;
    };
    if let CleanColumn::Text(values) = &mut columns[date_idx] {
        for value in values.iter_mut() {
            *value = value
                .as_deref()
                .and_then(parse_activity_date)
                .map(format_iso_date);
        }
    }
}
