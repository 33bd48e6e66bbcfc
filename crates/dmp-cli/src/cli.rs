//! CLI argument definitions for the research output schema mapper.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use dmp_model::StandardFieldId;

#[derive(Parser)]
#[command(
    name = "dmp-schema",
    version,
    about = "Convert research output table questions between editor state and schema JSON",
    long_about = "Convert research output table questions between question-builder \
                  editor state and the persisted question schema.\n\n\
                  Standards (template, initial fields, output types) are embedded and \
                  can be replaced with --standards-dir or DMP_STANDARDS_DIR."
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

    /// Directory holding the standards files (overrides DMP_STANDARDS_DIR).
    #[arg(long = "standards-dir", value_name = "DIR", global = true)]
    pub standards_dir: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Convert editor state JSON into a question schema.
    Export(ExportArgs),

    /// Rebuild editor state JSON from a question schema.
    Import(ImportArgs),

    /// Print a fresh answer row for a question.
    EmptyRow(QuestionArgs),

    /// Show the display summary of an answer row.
    RowInfo(RowInfoArgs),

    /// List the default standard fields.
    Fields(FieldsArgs),

    /// Print the default question template.
    Template,
}

#[derive(Parser)]
pub struct ExportArgs {
    /// Editor state JSON (standardFields, additionalFields).
    #[arg(long = "state", value_name = "FILE")]
    pub state: PathBuf,

    /// JSON array of default output types ({name, value}); defaults to the bundled catalog.
    #[arg(long = "output-types", value_name = "FILE")]
    pub output_types: Option<PathBuf>,

    /// Write the question here instead of stdout.
    #[arg(long = "out", value_name = "FILE")]
    pub out: Option<PathBuf>,
}

#[derive(Parser)]
pub struct ImportArgs {
    /// Question schema JSON.
    #[arg(long = "question", value_name = "FILE")]
    pub question: PathBuf,

    /// Write the editor state here instead of stdout.
    #[arg(long = "out", value_name = "FILE")]
    pub out: Option<PathBuf>,
}

#[derive(Parser)]
pub struct QuestionArgs {
    /// Question schema JSON.
    #[arg(long = "question", value_name = "FILE")]
    pub question: PathBuf,
}

#[derive(Parser)]
pub struct RowInfoArgs {
    /// Question schema JSON.
    #[arg(long = "question", value_name = "FILE")]
    pub question: PathBuf,

    /// Answer row JSON.
    #[arg(long = "row", value_name = "FILE")]
    pub row: PathBuf,

    /// Print JSON instead of a table.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Parser)]
pub struct FieldsArgs {
    /// Show only this field (e.g. repoSelector).
    #[arg(long = "field", value_name = "ID")]
    pub field: Option<StandardFieldId>,
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
