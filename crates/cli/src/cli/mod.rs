//! CLI command definitions.

pub mod pattern;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand, ValueEnum};

pub use pattern::{parse_month, Day, Frequency, LimitArgs, PatternArgs};

/// Generate the dates produced by a recurring calendar pattern.
#[derive(Debug, Parser)]
#[command(name = "recurra")]
#[command(version, about = "Generate dates for recurring calendar patterns", long_about = None)]
pub struct Cli {
    /// Output format.
    #[arg(long, global = true, default_value = "pretty")]
    pub format: OutputFormat,

    /// Suppress non-essential output.
    #[arg(long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format options.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// Raw JSON output.
    Json,
    /// Human-readable output.
    #[default]
    Pretty,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List the dates a pattern produces.
    Generate(GenerateCommand),
    /// Print a one-line description of a pattern.
    Describe(DescribeCommand),
    /// Show a month calendar with the pattern's dates marked.
    Preview(PreviewCommand),
}

#[derive(Debug, Args)]
pub struct GenerateCommand {
    #[command(flatten)]
    pub pattern: PatternArgs,
    #[command(flatten)]
    pub limits: LimitArgs,
}

#[derive(Debug, Args)]
pub struct DescribeCommand {
    #[command(flatten)]
    pub pattern: PatternArgs,
}

#[derive(Debug, Args)]
pub struct PreviewCommand {
    /// Month to show (YYYY-MM). Defaults to the start date's month.
    #[arg(long, value_parser = parse_month)]
    pub month: Option<NaiveDate>,
    #[command(flatten)]
    pub pattern: PatternArgs,
    #[command(flatten)]
    pub limits: LimitArgs,
}
