//! CLI argument definitions for kinlink.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{InfoLevel, Verbosity};
use colorchoice_clap::Color;
use kinlink_ingest::{DEFAULT_INPUT_PATH, DEFAULT_MAX_RECORDS};
use kinlink_report::DEFAULT_OUTPUT_PATH;
use kinlink_validate::DEFAULT_MAX_FIELD_LEN;

#[derive(Parser)]
#[command(
    name = "kinlink",
    version,
    about = "Find related persons by last name in a CSV of person records",
    long_about = "Read person records from a CSV file, validate their fields, and report\n\
                  which people are related by last name.\n\n\
                  Two people are related when their last names are equal, share a\n\
                  hyphen segment, or one is a segment of the other.\n\n\
                  Without a subcommand, `run` is executed with its defaults."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for warnings only).
    #[command(flatten)]
    pub verbosity: Verbosity<InfoLevel>,

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
    /// Read, validate and link person records, then write the report.
    Run(RunArgs),

    /// List the validation rules in the order they are applied.
    Rules,
}

#[derive(Parser)]
pub struct RunArgs {
    /// CSV file with a header row and person records.
    #[arg(long = "input", value_name = "PATH", default_value = DEFAULT_INPUT_PATH)]
    pub input: PathBuf,

    /// Report file to create (existing content is replaced).
    #[arg(long = "output", value_name = "PATH", default_value = DEFAULT_OUTPUT_PATH)]
    pub output: PathBuf,

    /// Maximum number of records read after the header.
    #[arg(long = "max-records", value_name = "N", default_value_t = DEFAULT_MAX_RECORDS)]
    pub max_records: usize,

    /// Report format to write.
    #[arg(long = "format", value_enum, default_value = "text")]
    pub format: ReportFormatArg,

    /// Records with a longer field are dropped.
    #[arg(long = "max-field-len", value_name = "N", default_value_t = DEFAULT_MAX_FIELD_LEN)]
    pub max_field_len: usize,

    /// Do not print the run summary table.
    #[arg(long = "no-summary")]
    pub no_summary: bool,
}

impl Default for RunArgs {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT_PATH),
            output: PathBuf::from(DEFAULT_OUTPUT_PATH),
            max_records: DEFAULT_MAX_RECORDS,
            format: ReportFormatArg::Text,
            max_field_len: DEFAULT_MAX_FIELD_LEN,
            no_summary: false,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ReportFormatArg {
    Text,
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
