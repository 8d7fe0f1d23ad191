//! CLI argument definitions for GradeSync.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "gradesync",
    version,
    about = "GradeSync - reconcile quiz-platform grades into an LMS import file",
    long_about = "Reconcile a quiz-platform gradebook export (e.g. MyOpenMath) with an \
                  LMS gradebook export (e.g. Canvas) into a single importable CSV.\n\n\
                  Students are matched by identifier first, then by normalized name. \
                  Unmatched rows are reported, never dropped."
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

    /// Allow student names and identifiers in log output.
    ///
    /// Off by default: rosters are student PII, so row-level values are
    /// redacted from logs unless this flag is set.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Merge a source export into a target gradebook and write the import CSV.
    Merge(MergeArgs),

    /// Show the structure of a single gradebook export.
    Inspect(InspectArgs),
}

#[derive(Parser)]
pub struct MergeArgs {
    /// The quiz-platform export providing grades (e.g. MyOpenMath CSV).
    #[arg(value_name = "SOURCE_CSV")]
    pub source: PathBuf,

    /// The LMS export used as roster and output template (e.g. Canvas CSV).
    #[arg(value_name = "TARGET_CSV")]
    pub target: PathBuf,

    /// Path for the generated import file.
    #[arg(long = "output", value_name = "PATH", default_value = "canvas_import_ready.csv")]
    pub output: PathBuf,

    /// Use a saved mapping plan (JSON) instead of the automatic proposal.
    #[arg(long = "plan", value_name = "JSON")]
    pub plan: Option<PathBuf>,

    /// Save the mapping plan that was used (proposed or loaded) to a JSON file.
    #[arg(long = "save-plan", value_name = "JSON")]
    pub save_plan: Option<PathBuf>,

    /// Report the merge without writing the import file.
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Request an advisory narrative for the grade statistics.
    ///
    /// Advisory output never affects the import file; without a configured
    /// service it degrades to a placeholder message.
    #[arg(long = "advisory")]
    pub advisory: bool,
}

#[derive(Parser)]
pub struct InspectArgs {
    /// Gradebook CSV to inspect.
    #[arg(value_name = "CSV")]
    pub file: PathBuf,
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
