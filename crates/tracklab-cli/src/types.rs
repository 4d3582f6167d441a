use std::path::PathBuf;

use tracklab_model::RangeSummary;

use crate::cli::SummaryFormatArg;
use crate::pipeline::{FileInspection, FileReport};

#[derive(Debug)]
pub struct CleanResult {
    pub files: Vec<FileReport>,
    pub output: PathBuf,
    pub rows: usize,
    pub columns: usize,
}

#[derive(Debug)]
pub struct RangesResult {
    pub summary: RangeSummary,
    pub format: SummaryFormatArg,
    pub written: Option<PathBuf>,
}

#[derive(Debug)]
pub struct InspectResult {
    pub files: Vec<FileInspection>,
}
