//! CLI argument definitions for the activity export toolkit.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "tracklab",
    version,
    about = "Tracklab - Clean Garmin Connect activity exports and summarize them",
    long_about = "Clean Garmin Connect activity CSV exports into analysis-ready tables.\n\n\
                  Clock durations become minutes, paces become seconds per kilometre,\n\
                  swim distances become kilometres, and range reports bucket one\n\
                  metric against the mean of another."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Clean one or more activity exports into a single analysis-ready CSV.
    Clean(CleanArgs),

    /// Bucket one cleaned metric against another and report per-bucket means.
    Ranges(RangesArgs),

    /// Show the columns of an export and how each would be interpreted.
    Inspect(InspectArgs),
}

#[derive(Parser)]
pub struct CleanArgs {
    /// Activity CSV exports to clean (concatenated in argument order).
    #[arg(value_name = "FILES", required = true)]
    pub files: Vec<PathBuf>,

    /// Output path for the cleaned CSV (default: next to the first input).
    #[arg(short = 'o', long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,
}

#[derive(Parser)]
pub struct RangesArgs {
    /// Activity CSV export to summarize (cleaned automatically first).
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Column whose values define the buckets (e.g. "Avg Pace").
    #[arg(long = "source", value_name = "COLUMN")]
    pub source: String,

    /// Column averaged within each bucket (e.g. "Avg HR").
    #[arg(long = "values", value_name = "COLUMN")]
    pub values: String,

    /// Lower bound of the first bucket.
    #[arg(long = "min", value_name = "N")]
    pub min: f64,

    /// Upper bound of the last bucket.
    #[arg(long = "max", value_name = "N")]
    pub max: f64,

    /// Bucket width (must be positive).
    #[arg(long = "step", value_name = "N")]
    pub step: f64,

    /// Bucket label style.
    #[arg(long = "kind", value_enum)]
    pub kind: RangeKindArg,

    /// Report format.
    #[arg(long = "format", value_enum, default_value = "table")]
    pub format: SummaryFormatArg,

    /// Write the report to a file instead of stdout (csv and json only).
    #[arg(short = 'o', long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,
}

#[derive(Parser)]
pub struct InspectArgs {
    /// Activity CSV exports to inspect.
    #[arg(value_name = "FILES", required = true)]
    pub files: Vec<PathBuf>,
}

/// Bucket label styles for range reports.
#[derive(Clone, Copy, ValueEnum)]
pub enum RangeKindArg {
    /// Clock labels such as "4:00 - 4:30" for pace seconds.
    Pace,
    /// Watt labels such as "200-250 W".
    Power,
}

/// Range report output formats.
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum SummaryFormatArg {
    Table,
    Csv,
    Json,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
