//! Occurrence generation for recurrence patterns.
//!
//! Generation walks a single cursor date forward from the pattern's start
//! date. At each cursor the pattern decides whether the day belongs to it,
//! then the cursor advances by a step that depends on the frequency. The loop
//! stops when the occurrence cap is reached or the cursor passes the
//! effective end bound, so every call is bounded.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use super::error::PatternError;
use super::types::{MonthlyRule, RecurrencePattern, RecurrenceRule, WeekOfMonth};
use crate::calendar::{
    add_days, add_months, add_weeks, add_years, day_of_month, day_of_week, days_in_month,
    end_of_month, next_weekday_on_or_after, previous_weekday_on_or_before, start_of_month,
};

/// Default maximum number of occurrences returned by one generation call.
pub const DEFAULT_MAX_OCCURRENCES: usize = 50;

/// Default lookahead window, in years, for patterns without an end date.
pub const DEFAULT_LOOKAHEAD_YEARS: u32 = 1;

/// Limits applied to a generation call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateOptions {
    /// Results beyond this count are silently dropped.
    pub max_occurrences: usize,
    /// Generation ceiling after the start date when the pattern has no end date.
    pub lookahead_years: u32,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            max_occurrences: DEFAULT_MAX_OCCURRENCES,
            lookahead_years: DEFAULT_LOOKAHEAD_YEARS,
        }
    }
}

impl GenerateOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_occurrences(mut self, max_occurrences: usize) -> Self {
        self.max_occurrences = max_occurrences;
        self
    }

    pub fn with_lookahead_years(mut self, lookahead_years: u32) -> Self {
        self.lookahead_years = lookahead_years;
        self
    }
}

/// Returns the last date generation may reach: the pattern's end date, or
/// the start date plus the lookahead window.
pub fn effective_end(pattern: &RecurrencePattern, options: &GenerateOptions) -> NaiveDate {
    pattern.end_date.unwrap_or_else(|| {
        let years = i32::try_from(options.lookahead_years).unwrap_or(i32::MAX);
        add_years(pattern.start_date, years)
    })
}

/// Generates the ordered occurrences of a pattern.
///
/// The pattern is validated before any iteration. The result is strictly
/// increasing, never holds a date before the start date or after the
/// effective end bound, and holds at most `options.max_occurrences` dates.
pub fn generate(
    pattern: &RecurrencePattern,
    options: &GenerateOptions,
) -> Result<Vec<NaiveDate>, PatternError> {
    pattern.validate()?;

    let end = effective_end(pattern, options);
    let mut cursor = Cursor::new(pattern);
    let mut occurrences = Vec::new();

    while occurrences.len() < options.max_occurrences && cursor.date <= end {
        let matched = occurs_on(pattern, cursor.date);
        if matched && cursor.date >= pattern.start_date {
            occurrences.push(cursor.date);
        }
        if !cursor.advance(matched) {
            break;
        }
    }

    if occurrences.len() == options.max_occurrences && cursor.date <= end {
        tracing::trace!(
            max_occurrences = options.max_occurrences,
            "Occurrence cap reached before end bound"
        );
    }
    tracing::debug!(
        recurrence_type = %pattern.recurrence_type(),
        interval = pattern.interval,
        start = %pattern.start_date,
        end = %end,
        count = occurrences.len(),
        "Generated occurrences"
    );

    Ok(occurrences)
}

/// Generates occurrences with the default cap and lookahead window.
pub fn generate_default(pattern: &RecurrencePattern) -> Result<Vec<NaiveDate>, PatternError> {
    generate(pattern, &GenerateOptions::default())
}

impl RecurrencePattern {
    /// Shorthand for [`generate`].
    pub fn occurrences(&self, options: &GenerateOptions) -> Result<Vec<NaiveDate>, PatternError> {
        generate(self, options)
    }
}

/// Returns true if `date` belongs to the pattern, ignoring date bounds.
pub fn occurs_on(pattern: &RecurrencePattern, date: NaiveDate) -> bool {
    let start = pattern.start_date;
    match &pattern.rule {
        RecurrenceRule::Daily => true,
        RecurrenceRule::Weekly { weekdays } if weekdays.is_empty() => {
            day_of_week(date) == day_of_week(start)
        }
        RecurrenceRule::Weekly { weekdays } => weekdays.contains(&day_of_week(date)),
        RecurrenceRule::Monthly { rule } => match *rule {
            MonthlyRule::NthWeekday { week, weekday } => {
                is_nth_weekday_of_month(date, week, weekday)
            }
            MonthlyRule::FixedDay { day } => day_of_month(date) == day,
            MonthlyRule::StartDateAnchored => day_of_month(date) == day_of_month(start),
        },
        RecurrenceRule::Yearly => date.month() == start.month() && date.day() == start.day(),
    }
}

/// Returns the `week`-th `weekday` in the month containing `date`.
///
/// `WeekOfMonth::Last` counts backward from the end of the month, so it is the
/// final such weekday whether the month holds four or five of them.
pub fn nth_weekday_of_month(date: NaiveDate, week: WeekOfMonth, weekday: Weekday) -> NaiveDate {
    match week {
        WeekOfMonth::Last => previous_weekday_on_or_before(end_of_month(date), weekday),
        _ => {
            let first = next_weekday_on_or_after(start_of_month(date), weekday);
            add_weeks(first, i64::from(week.index()) - 1)
        }
    }
}

/// Returns true if `date` is the `week`-th `weekday` of its month.
pub fn is_nth_weekday_of_month(date: NaiveDate, week: WeekOfMonth, weekday: Weekday) -> bool {
    day_of_week(date) == weekday && nth_weekday_of_month(date, week, weekday) == date
}

/// The generation cursor.
///
/// Month and year steps are taken from the pattern's anchor rather than from
/// the previous cursor, so clamping a short month (Jan 31 -> Feb 29) never
/// shifts the day used for later months.
struct Cursor<'a> {
    pattern: &'a RecurrencePattern,
    date: NaiveDate,
    step: i64,
}

impl<'a> Cursor<'a> {
    fn new(pattern: &'a RecurrencePattern) -> Self {
        let date = match pattern.rule {
            RecurrenceRule::Monthly {
                rule: MonthlyRule::FixedDay { day },
            } => day_in_month(start_of_month(pattern.start_date), day),
            _ => pattern.start_date,
        };
        Self {
            pattern,
            date,
            step: 0,
        }
    }

    /// Moves the cursor forward. Returns false if the cursor could not move,
    /// which only happens at the end of the representable date range.
    fn advance(&mut self, matched: bool) -> bool {
        let pattern = self.pattern;
        let interval = i64::from(pattern.interval);
        let start = pattern.start_date;

        let next = match &pattern.rule {
            RecurrenceRule::Daily => add_days(self.date, interval),
            RecurrenceRule::Weekly { weekdays } if weekdays.is_empty() => {
                add_weeks(self.date, interval)
            }
            RecurrenceRule::Weekly { .. } => add_days(self.date, 1),
            RecurrenceRule::Monthly { rule } => match *rule {
                MonthlyRule::NthWeekday { .. } if matched => {
                    add_months(start_of_month(self.date), to_i32(interval))
                }
                MonthlyRule::NthWeekday { .. } => add_days(self.date, 1),
                MonthlyRule::FixedDay { day } => {
                    self.step += 1;
                    let month = add_months(start_of_month(start), to_i32(self.step * interval));
                    day_in_month(month, day)
                }
                MonthlyRule::StartDateAnchored => {
                    self.step += 1;
                    add_months(start, to_i32(self.step * interval))
                }
            },
            RecurrenceRule::Yearly => {
                self.step += 1;
                add_years(start, to_i32(self.step * interval))
            }
        };

        if next <= self.date {
            return false;
        }
        self.date = next;
        true
    }
}

/// The given day of the month containing `month`, clamped to the month's
/// last day. A clamped date fails the fixed-day membership check, so months
/// without that day are skipped.
fn day_in_month(month: NaiveDate, day: u32) -> NaiveDate {
    month
        .with_day(day.min(days_in_month(month)))
        .unwrap_or_else(|| end_of_month(month))
}

fn to_i32(count: i64) -> i32 {
    i32::try_from(count).unwrap_or(i32::MAX)
}
