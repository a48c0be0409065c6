use chrono::NaiveDate;
use thiserror::Error;

/// Errors raised when a recurrence pattern violates its invariants.
///
/// Validation happens once, before any date is generated, so a pattern either
/// produces a complete result or one of these errors.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PatternError {
    #[error("Interval must be at least 1 (got {0})")]
    InvalidInterval(i64),
    #[error("Week of month and day of week must be set together")]
    IncompleteNthWeekday,
    #[error("Month day must be between 1 and 31 (got {0})")]
    InvalidMonthDay(u32),
    #[error("Week of month must be between 1 and 5 (got {0})")]
    InvalidWeekOfMonth(u8),
    #[error("Weekday index must be between 0 and 6 (got {0})")]
    InvalidWeekdayIndex(u8),
    #[error("End date {end} is before start date {start}")]
    EndBeforeStart { start: NaiveDate, end: NaiveDate },
    #[error("Unknown recurrence type: {0}")]
    UnknownRecurrenceType(String),
}
