//! CLI argument definitions for the bait trial report.

use std::io::{self, IsTerminal};
use std::path::PathBuf;

use clap::{Args, ColorChoice, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use tracing::level_filters::LevelFilter;

use bait_core::EmptyRowPolicy;

use crate::logging::{LogConfig, LogFormat};

#[derive(Parser)]
#[command(
    name = "bait-report",
    version,
    about = "Preliminary findings report for a bait-preference trial",
    long_about = "Load bait station observation files and report interaction counts\n\
                  by bait type and station group, plus per-animal proportions of\n\
                  interaction types for each bait."
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

    /// Prefix log lines with timestamps.
    #[arg(long = "log-timestamps", global = true)]
    pub log_timestamps: bool,

    /// Include the emitting module in log lines.
    #[arg(long = "log-target", global = true)]
    pub log_target: bool,
}

impl Cli {
    /// Logging configuration with consistent precedence: `--log-level`
    /// beats `-v`/`-q`, and either disables `RUST_LOG`.
    pub fn log_config(&self) -> LogConfig {
        let level_filter = match self.log_level {
            Some(LogLevelArg::Error) => LevelFilter::ERROR,
            Some(LogLevelArg::Warn) => LevelFilter::WARN,
            Some(LogLevelArg::Info) => LevelFilter::INFO,
            Some(LogLevelArg::Debug) => LevelFilter::DEBUG,
            Some(LogLevelArg::Trace) => LevelFilter::TRACE,
            None => self.verbosity.tracing_level_filter(),
        };
        let format = match self.log_format {
            LogFormatArg::Pretty => LogFormat::Pretty,
            LogFormatArg::Compact => LogFormat::Compact,
            LogFormatArg::Json => LogFormat::Json,
        };
        let with_ansi = match self.color.color {
            ColorChoice::Always => true,
            ColorChoice::Never => false,
            ColorChoice::Auto => self.log_file.is_none() && io::stderr().is_terminal(),
        };

        let mut config = LogConfig::default()
            .with_level(level_filter)
            .with_format(format)
            .with_timestamps(self.log_timestamps)
            .with_target(self.log_target)
            .with_ansi(with_ansi)
            .with_log_file(self.log_file.clone());
        config.use_env_filter = !(self.verbosity.is_present() || self.log_level.is_some());
        config
    }
}

#[derive(Subcommand)]
pub enum Command {
    /// Aggregate observation files and print the report.
    Report(ReportArgs),

    /// List the observation files the pattern selects.
    Files(InputArgs),
}

/// Where observation files are found.
#[derive(Args, Clone)]
pub struct InputArgs {
    /// Folder containing the observation CSV files.
    #[arg(value_name = "DATA_DIR", default_value = ".")]
    pub data_dir: PathBuf,

    /// File name pattern (`*` and `?` wildcards), e.g. "kakapo*.csv".
    #[arg(long = "pattern", value_name = "GLOB")]
    pub pattern: Option<String>,

    /// TOML configuration file (default: <DATA_DIR>/bait-report.toml if present).
    #[arg(long = "config", value_name = "PATH")]
    pub config: Option<PathBuf>,
}

#[derive(Args)]
pub struct ReportArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// How to treat animals whose only interactions were accidental touches.
    #[arg(long = "empty-rows", value_enum)]
    pub empty_rows: Option<EmptyRowsArg>,

    /// Also write the report as JSON.
    #[arg(long = "json", value_name = "PATH")]
    pub json: Option<PathBuf>,

    /// Also write the report as Markdown.
    #[arg(long = "markdown", value_name = "PATH")]
    pub markdown: Option<PathBuf>,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum EmptyRowsArg {
    Fail,
    Omit,
    ZeroFill,
}

impl From<EmptyRowsArg> for EmptyRowPolicy {
    fn from(arg: EmptyRowsArg) -> Self {
        match arg {
            EmptyRowsArg::Fail => EmptyRowPolicy::Fail,
            EmptyRowsArg::Omit => EmptyRowPolicy::Omit,
            EmptyRowsArg::ZeroFill => EmptyRowPolicy::ZeroFill,
        }
    }
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
