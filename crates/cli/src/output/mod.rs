//! Output formatting functions.

pub mod json;
pub mod pretty;

use chrono::NaiveDate;
use recurra_core::recurrence::{PreviewDay, RecurrencePatternRequest};
use serde::Serialize;

use crate::cli::OutputFormat;
use crate::error::Result;

/// Format a value for output.
pub fn format_output<T: Serialize>(value: &T, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => json::format_json(value),
        OutputFormat::Pretty => Ok(serde_json::to_string_pretty(value)?),
    }
}

/// Result of the `generate` command.
#[derive(Debug, Serialize)]
pub struct GenerateReport {
    pub pattern: RecurrencePatternRequest,
    pub summary: String,
    pub count: usize,
    pub occurrences: Vec<NaiveDate>,
}

/// Result of the `describe` command.
#[derive(Debug, Serialize)]
pub struct DescribeReport {
    pub pattern: RecurrencePatternRequest,
    pub summary: String,
}

/// Result of the `preview` command.
#[derive(Debug, Serialize)]
pub struct PreviewReport {
    pub month: NaiveDate,
    pub summary: String,
    pub weeks: Vec<Vec<PreviewDay>>,
}
