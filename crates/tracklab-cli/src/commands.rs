//! Command entry points for the tracklab CLI.

use anyhow::{Result, bail};
use tracing::warn;

use tracklab_model::{RangeKind, RangeRequest};
use tracklab_report::{
    summary_to_csv, summary_to_json, write_clean_csv, write_summary_csv, write_summary_json,
};

use crate::cli::{CleanArgs, InspectArgs, RangeKindArg, RangesArgs, SummaryFormatArg};
use crate::pipeline::{clean_files, default_clean_path, inspect_file, summarize_file};
use crate::types::{CleanResult, InspectResult, RangesResult};

pub fn run_clean(args: &CleanArgs) -> Result<CleanResult> {
    let (files, mut combined) = clean_files(&args.files)?;
    let output = args
        .output
        .clone()
        .unwrap_or_else(|| default_clean_path(&args.files));
    write_clean_csv(&mut combined, &output)?;
    Ok(CleanResult {
        files,
        output,
        rows: combined.height(),
        columns: combined.width(),
    })
}

pub fn run_ranges(args: &RangesArgs) -> Result<RangesResult> {
    if args.step <= 0.0 {
        bail!("--step must be positive, got {}", args.step);
    }
    if matches!(args.format, SummaryFormatArg::Table) && args.output.is_some() {
        bail!("--output requires --format csv or --format json");
    }
    let request = RangeRequest {
        source_column: args.source.clone(),
        value_column: args.values.clone(),
        min: args.min,
        max: args.max,
        step: args.step,
        kind: match args.kind {
            RangeKindArg::Pace => RangeKind::Pace,
            RangeKindArg::Power => RangeKind::Power,
        },
    };
    let summary = summarize_file(&args.file, &request)?;
    if summary.is_empty() {
        warn!(
            source_column = %summary.source_column,
            "no samples fell inside the requested buckets"
        );
    }
    let mut written = None;
    match (args.format, args.output.as_deref()) {
        (SummaryFormatArg::Table, _) => {}
        (SummaryFormatArg::Csv, Some(path)) => {
            write_summary_csv(&summary, path)?;
            written = Some(path.to_path_buf());
        }
        (SummaryFormatArg::Csv, None) => print!("{}", summary_to_csv(&summary)?),
        (SummaryFormatArg::Json, Some(path)) => {
            write_summary_json(&summary, path)?;
            written = Some(path.to_path_buf());
        }
        (SummaryFormatArg::Json, None) => println!("{}", summary_to_json(&summary)?),
    }
    Ok(RangesResult {
        summary,
        format: args.format,
        written,
    })
}

pub fn run_inspect(args: &InspectArgs) -> Result<InspectResult> {
    let mut files = Vec::with_capacity(args.files.len());
    for path in &args.files {
        files.push(inspect_file(path)?);
    }
    Ok(InspectResult { files })
}
