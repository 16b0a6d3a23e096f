//! CLI argument definitions for `navsync`.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "navsync",
    version,
    about = "Inspect and replay browser history state for the table demo",
    long_about = "Encode view states into history records and URLs, parse URLs back,\n\
                  and replay scripted sessions against an in-memory browser history."
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

    /// Coordinator configuration file (TOML).
    #[arg(long = "config", value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Path the application is mounted at (overrides the config file).
    #[arg(long = "base", value_name = "PATH", global = true)]
    pub base: Option<String>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Show the history record, payload and URL for a view state.
    Encode(EncodeArgs),

    /// Parse an application URL into a history record and view state.
    Parse(ParseArgs),

    /// Replay a session script and print the resulting history stack.
    Replay(ReplayArgs),
}

#[derive(Args)]
pub struct EncodeArgs {
    #[arg(long = "view", value_enum, default_value = "table")]
    pub view: ViewArg,

    /// Selected table row.
    #[arg(long = "row", value_name = "ID")]
    pub row: Option<u32>,
}

#[derive(Args)]
pub struct ParseArgs {
    /// URL path, optionally with a query string.
    #[arg(value_name = "URL")]
    pub url: String,
}

#[derive(Args)]
pub struct ReplayArgs {
    /// Session script, one step per line.
    #[arg(value_name = "SCRIPT")]
    pub script: PathBuf,

    /// How the first history entry is seeded (overrides the config file).
    #[arg(long = "strategy", value_enum)]
    pub strategy: Option<StrategyArg>,

    /// Number of rows in the demo table.
    #[arg(long = "rows", default_value_t = 20)]
    pub rows: u32,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ViewArg {
    Table,
    About,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum StrategyArg {
    Default,
    Url,
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
