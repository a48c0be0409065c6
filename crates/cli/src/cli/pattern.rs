//! Pattern input arguments shared by every command.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, ValueEnum};
use recurra_core::recurrence::{
    GenerateOptions, RecurrencePattern, RecurrencePatternRequest, RecurrenceType,
    DEFAULT_LOOKAHEAD_YEARS, DEFAULT_MAX_OCCURRENCES,
};

use crate::error::{CliError, Result};

/// CLI recurrence type (with clap ValueEnum).
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum Frequency {
    #[default]
    Daily,
    Weekly,
    Monthly,
    Yearly,
}

impl From<Frequency> for RecurrenceType {
    fn from(f: Frequency) -> Self {
        match f {
            Frequency::Daily => RecurrenceType::Daily,
            Frequency::Weekly => RecurrenceType::Weekly,
            Frequency::Monthly => RecurrenceType::Monthly,
            Frequency::Yearly => RecurrenceType::Yearly,
        }
    }
}

/// CLI weekday names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Day {
    Sun,
    Mon,
    Tue,
    Wed,
    Thu,
    Fri,
    Sat,
}

impl Day {
    /// Sunday-based index used by pattern requests.
    pub fn index(self) -> u8 {
        match self {
            Day::Sun => 0,
            Day::Mon => 1,
            Day::Tue => 2,
            Day::Wed => 3,
            Day::Thu => 4,
            Day::Fri => 5,
            Day::Sat => 6,
        }
    }
}

/// Pattern definition, either from flags or from a JSON file.
#[derive(Debug, Clone, Args)]
pub struct PatternArgs {
    /// Read the pattern from a JSON file instead of flags.
    #[arg(
        long,
        value_name = "FILE",
        conflicts_with_all = [
            "recurrence_type",
            "interval",
            "start",
            "end",
            "week_days",
            "month_day",
            "week_of_month",
            "day_of_week",
        ]
    )]
    pub pattern: Option<PathBuf>,

    /// Recurrence frequency.
    #[arg(long = "type", value_enum)]
    pub recurrence_type: Option<Frequency>,

    /// Step between occurrences, in units of the frequency.
    #[arg(long, default_value = "1", allow_negative_numbers = true)]
    pub interval: i64,

    /// Start date (YYYY-MM-DD).
    #[arg(long, required_unless_present = "pattern")]
    pub start: Option<NaiveDate>,

    /// Inclusive end date (YYYY-MM-DD).
    #[arg(long)]
    pub end: Option<NaiveDate>,

    /// Weekday for weekly patterns. Repeat for several days.
    #[arg(long = "week-day", value_enum)]
    pub week_days: Vec<Day>,

    /// Fixed day of month (1-31) for monthly patterns.
    #[arg(long)]
    pub month_day: Option<u32>,

    /// Week of month (1-4, or 5 for last) for monthly patterns.
    #[arg(long, requires = "day_of_week")]
    pub week_of_month: Option<u8>,

    /// Weekday used together with --week-of-month.
    #[arg(long, value_enum, requires = "week_of_month")]
    pub day_of_week: Option<Day>,
}

impl PatternArgs {
    /// Builds the pattern request from the file or the individual flags.
    pub fn to_request(&self) -> Result<RecurrencePatternRequest> {
        if let Some(path) = &self.pattern {
            let contents = std::fs::read_to_string(path).map_err(|source| CliError::PatternFile {
                path: path.clone(),
                source,
            })?;
            tracing::debug!(path = %path.display(), "Loaded pattern file");
            return Ok(serde_json::from_str(&contents)?);
        }

        let start = self
            .start
            .ok_or_else(|| CliError::InvalidInput("--start is required".to_string()))?;
        let recurrence_type = self.recurrence_type.unwrap_or_default();

        let mut request = RecurrencePatternRequest::new(recurrence_type.into(), start)
            .with_interval(self.interval)
            .with_week_days(self.week_days.iter().map(|day| day.index()));
        request.end_date = self.end;
        request.month_day = self.month_day;
        request.week_of_month = self.week_of_month;
        request.day_of_week = self.day_of_week.map(Day::index);
        Ok(request)
    }

    /// Builds and validates the pattern.
    pub fn to_pattern(&self) -> Result<RecurrencePattern> {
        Ok(self.to_request()?.into_pattern()?)
    }
}

/// Generation limits.
#[derive(Debug, Clone, Args)]
pub struct LimitArgs {
    /// Maximum number of occurrences to produce.
    #[arg(long, env = "RECURRA_MAX_OCCURRENCES", default_value_t = DEFAULT_MAX_OCCURRENCES)]
    pub max_occurrences: usize,

    /// Lookahead window in years when the pattern has no end date.
    #[arg(long, env = "RECURRA_LOOKAHEAD_YEARS", default_value_t = DEFAULT_LOOKAHEAD_YEARS)]
    pub lookahead_years: u32,
}

impl LimitArgs {
    pub fn to_options(&self) -> GenerateOptions {
        GenerateOptions::new()
            .with_max_occurrences(self.max_occurrences)
            .with_lookahead_years(self.lookahead_years)
    }
}

/// Parses a `YYYY-MM` month argument into the first day of that month.
pub fn parse_month(s: &str) -> std::result::Result<NaiveDate, String> {
    NaiveDate::parse_from_str(&format!("{}-01", s.trim()), "%Y-%m-%d")
        .map_err(|_| format!("invalid month '{}', expected YYYY-MM", s))
}
