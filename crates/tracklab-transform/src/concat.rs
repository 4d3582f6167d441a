//! Row-wise union of cleaned tables.

use anyhow::Result;
use polars::prelude::{DataFrame, DataType, PlSmallStr, Series};
use tracing::debug;

use tracklab_model::TracklabError;

/// Stacks cleaned tables on top of each other.
///
/// Column order follows first appearance across the inputs; a table that
/// lacks a column contributes nulls for it. Dtypes of a shared column
/// must agree. Row order within and across tables is preserved.
pub fn concat_tables(frames: Vec<DataFrame>) -> Result<DataFrame> {
    let mut schema: Vec<(PlSmallStr, DataType)> = Vec::new();
    for frame in &frames {
        for column in frame.get_columns() {
            if !schema.iter().any(|(name, _)| name == column.name()) {
                schema.push((column.name().clone(), column.dtype().clone()));
            }
        }
    }

    let mut combined: Option<DataFrame> = None;
    for mut frame in frames {
        for (name, dtype) in &schema {
            if frame.column(name.as_str()).is_err() {
                let filler = Series::full_null(name.clone(), frame.height(), dtype);
                frame.with_column(filler)?;
            }
        }
        let aligned = frame.select(schema.iter().map(|(name, _)| name.clone()))?;
        match &mut combined {
            None => combined = Some(aligned),
            Some(acc) => {
                acc.vstack_mut(&aligned)?;
            }
        }
    }

    match combined {
        Some(df) => {
            debug!(rows = df.height(), columns = df.width(), "concatenated tables");
            Ok(df)
        }
        None => Err(TracklabError::Message("no tables to concatenate".to_string()).into()),
    }
}
