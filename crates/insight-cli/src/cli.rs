//! CLI argument definitions for the dataset profiler.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use insight_ingest::DEFAULT_SAMPLE_ROWS;

#[derive(Parser)]
#[command(
    name = "insight",
    version,
    about = "Data Insight - profile tabular datasets",
    long_about = "Profile tabular datasets and suggest next steps.\n\n\
                  Reads JSON arrays of row objects, CSV, and Excel workbooks.\n\
                  Reports column types, missing values, a data quality score,\n\
                  category frequencies, and preprocessing recommendations."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
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
    /// Profile a JSON, CSV, or Excel file.
    Analyze(AnalyzeArgs),

    /// Generate synthetic order data and profile it.
    Sample(SampleArgs),
}

#[derive(Parser)]
pub struct AnalyzeArgs {
    /// Dataset file (.json, .csv, .xls, .xlsx, .xlsm, .xlsb, .ods).
    #[arg(value_name = "FILE")]
    pub input: PathBuf,

    #[command(flatten)]
    pub report: ReportArgs,

    /// CSV field separator (overrides the settings file).
    #[arg(long = "delimiter", value_name = "CHAR")]
    pub delimiter: Option<char>,

    /// Include keys that first appear after the first row.
    ///
    /// By default the first row fixes the column set and later keys are
    /// ignored. With this flag every key seen in any row becomes a column,
    /// counted missing in rows that lack it.
    #[arg(long = "union-columns")]
    pub union_columns: bool,
}

#[derive(Parser)]
pub struct SampleArgs {
    /// Number of rows to generate.
    #[arg(long = "rows", value_name = "N", default_value_t = DEFAULT_SAMPLE_ROWS)]
    pub rows: usize,

    /// Seed for reproducible data.
    #[arg(long = "seed", value_name = "SEED")]
    pub seed: Option<u64>,

    #[command(flatten)]
    pub report: ReportArgs,

    /// Also write the generated rows as a JSON array.
    #[arg(long = "save-data", value_name = "PATH")]
    pub save_data: Option<PathBuf>,
}

/// Output options shared by every command.
#[derive(Args)]
pub struct ReportArgs {
    /// How to print the report on stdout.
    #[arg(long = "format", value_enum, default_value = "table")]
    pub format: OutputFormatArg,

    /// Also write the report JSON to this file.
    #[arg(long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// TOML settings file with [profile], [templates], and [csv] tables.
    #[arg(long = "config", value_name = "PATH")]
    pub config: Option<PathBuf>,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum OutputFormatArg {
    Table,
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
