//! recurra_cli - command line front end for recurra_core.

pub mod cli;
pub mod error;
pub mod output;

pub use error::{CliError, Result};

use recurra_core::recurrence::{build_month_grid, generate, RecurrencePatternRequest};

use crate::cli::{Cli, Commands, OutputFormat};
use crate::output::{format_output, pretty, DescribeReport, GenerateReport, PreviewReport};

/// Runs a parsed command and returns the text to print.
pub fn run(cli: &Cli) -> Result<String> {
    match &cli.command {
        Commands::Generate(cmd) => {
            let pattern = cmd.pattern.to_pattern()?;
            let occurrences = generate(&pattern, &cmd.limits.to_options())?;
            let report = GenerateReport {
                pattern: RecurrencePatternRequest::from_pattern(&pattern),
                summary: pattern.to_string(),
                count: occurrences.len(),
                occurrences,
            };
            Ok(match cli.format {
                OutputFormat::Json => format_output(&report, cli.format)?,
                OutputFormat::Pretty => pretty::format_occurrences(&report, cli.quiet),
            })
        }
        Commands::Describe(cmd) => {
            let pattern = cmd.pattern.to_pattern()?;
            let report = DescribeReport {
                pattern: RecurrencePatternRequest::from_pattern(&pattern),
                summary: pattern.to_string(),
            };
            Ok(match cli.format {
                OutputFormat::Json => format_output(&report, cli.format)?,
                OutputFormat::Pretty => report.summary,
            })
        }
        Commands::Preview(cmd) => {
            let pattern = cmd.pattern.to_pattern()?;
            let occurrences = generate(&pattern, &cmd.limits.to_options())?;
            let month = cmd.month.unwrap_or(pattern.start_date);
            let report = PreviewReport {
                month,
                summary: pattern.to_string(),
                weeks: build_month_grid(month, &pattern, &occurrences),
            };
            Ok(match cli.format {
                OutputFormat::Json => format_output(&report, cli.format)?,
                OutputFormat::Pretty => pretty::format_preview(&report),
            })
        }
    }
}
