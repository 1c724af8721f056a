//! CLI argument definitions for the MOBI header inspector.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use mobi_cli::{InspectConfig, ReportFormat};
use mobi_header::ByteOrder;

#[derive(Parser)]
#[command(
    name = "mobi-inspect",
    version,
    about = "Decode and print the PalmDOC and MOBI headers of an e-book",
    long_about = "Decode and print the PalmDOC and MOBI headers of an e-book.\n\n\
                  Reads the two fixed-size records at the start of the file and reports\n\
                  every field. Text is not decompressed and EXTH metadata is not parsed."
)]
pub struct Cli {
    /// MOBI file to inspect.
    #[arg(short = 'f', long = "filename", value_name = "FILE")]
    pub filename: PathBuf,

    /// Bytes to skip before the PalmDOC header.
    #[arg(long = "skip", value_name = "BYTES", default_value_t = 0)]
    pub skip: u64,

    /// Byte order for multi-byte fields.
    #[arg(long = "byte-order", value_enum, default_value = "little")]
    pub byte_order: ByteOrderArg,

    /// Report format.
    #[arg(long = "format", value_enum, default_value = "table")]
    pub format: OutputFormatArg,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(long = "log-format", value_enum, default_value = "pretty")]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// The inspection settings carried by these arguments.
    pub fn inspect_config(&self) -> InspectConfig {
        InspectConfig {
            path: self.filename.clone(),
            skip: self.skip,
            byte_order: match self.byte_order {
                ByteOrderArg::Little => ByteOrder::Little,
                ByteOrderArg::Big => ByteOrder::Big,
            },
            format: match self.format {
                OutputFormatArg::Table => ReportFormat::Table,
                OutputFormatArg::Text => ReportFormat::Text,
                OutputFormatArg::Json => ReportFormat::Json,
            },
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ByteOrderArg {
    Little,
    Big,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum OutputFormatArg {
    Table,
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
