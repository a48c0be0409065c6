//! Flat pattern payload as submitted by a form, CLI, or API caller.
//!
//! Following the Functional Core pattern, this is pure data: it carries the
//! raw field values and converts into a validated [`RecurrencePattern`].

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::error::PatternError;
use super::types::{MonthlyRule, RecurrencePattern, RecurrenceRule, RecurrenceType, WeekOfMonth};
use crate::calendar::{weekday_from_index, weekday_index};
use crate::serde::{deserialize_optional_date, deserialize_optional_number};

fn default_recurrence_type() -> String {
    RecurrenceType::Daily.as_str().to_string()
}

fn default_interval() -> i64 {
    1
}

/// Request payload describing a recurrence pattern.
///
/// Weekday indices use 0 = Sunday .. 6 = Saturday. `weekOfMonth` 5 means the
/// last occurrence in the month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecurrencePatternRequest {
    #[serde(default = "default_recurrence_type")]
    pub recurrence_type: String,
    #[serde(default = "default_interval")]
    pub interval: i64,
    pub start_date: NaiveDate,
    #[serde(
        default,
        deserialize_with = "deserialize_optional_date",
        skip_serializing_if = "Option::is_none"
    )]
    pub end_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub week_days: Vec<u8>,
    #[serde(
        default,
        deserialize_with = "deserialize_optional_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub month_day: Option<u32>,
    #[serde(
        default,
        deserialize_with = "deserialize_optional_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub week_of_month: Option<u8>,
    #[serde(
        default,
        deserialize_with = "deserialize_optional_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub day_of_week: Option<u8>,
}

impl RecurrencePatternRequest {
    /// Create a request for the given type and start date, with interval 1.
    pub fn new(recurrence_type: RecurrenceType, start_date: NaiveDate) -> Self {
        Self {
            recurrence_type: recurrence_type.as_str().to_string(),
            interval: 1,
            start_date,
            end_date: None,
            week_days: Vec::new(),
            month_day: None,
            week_of_month: None,
            day_of_week: None,
        }
    }

    /// Set the interval.
    pub fn with_interval(mut self, interval: i64) -> Self {
        self.interval = interval;
        self
    }

    /// Set the end date.
    pub fn with_end_date(mut self, end_date: NaiveDate) -> Self {
        self.end_date = Some(end_date);
        self
    }

    /// Set the weekday indices for a weekly pattern.
    pub fn with_week_days(mut self, week_days: impl IntoIterator<Item = u8>) -> Self {
        self.week_days = week_days.into_iter().collect();
        self
    }

    /// Set a fixed day of month.
    pub fn with_month_day(mut self, month_day: u32) -> Self {
        self.month_day = Some(month_day);
        self
    }

    /// Set the nth-weekday pair.
    pub fn with_nth_weekday(mut self, week_of_month: u8, day_of_week: u8) -> Self {
        self.week_of_month = Some(week_of_month);
        self.day_of_week = Some(day_of_week);
        self
    }

    /// Convert into a validated pattern.
    ///
    /// When both a month day and the nth-weekday pair are present, the
    /// nth-weekday rule wins.
    pub fn into_pattern(self) -> Result<RecurrencePattern, PatternError> {
        let recurrence_type: RecurrenceType = self.recurrence_type.parse()?;

        if self.interval < 1 {
            return Err(PatternError::InvalidInterval(self.interval));
        }
        let interval =
            u32::try_from(self.interval).map_err(|_| PatternError::InvalidInterval(self.interval))?;

        let nth_weekday = match (self.week_of_month, self.day_of_week) {
            (Some(week), Some(day)) => {
                let week =
                    WeekOfMonth::from_index(week).ok_or(PatternError::InvalidWeekOfMonth(week))?;
                let weekday =
                    weekday_from_index(day).ok_or(PatternError::InvalidWeekdayIndex(day))?;
                Some((week, weekday))
            }
            (None, None) => None,
            _ => return Err(PatternError::IncompleteNthWeekday),
        };

        if let Some(day) = self.month_day {
            if !(1..=31).contains(&day) {
                return Err(PatternError::InvalidMonthDay(day));
            }
        }

        let rule = match recurrence_type {
            RecurrenceType::Daily => RecurrenceRule::Daily,
            RecurrenceType::Weekly => {
                let weekdays = self
                    .week_days
                    .iter()
                    .map(|&index| {
                        weekday_from_index(index).ok_or(PatternError::InvalidWeekdayIndex(index))
                    })
                    .collect::<Result<Vec<_>, _>>()?;
                RecurrenceRule::weekly(weekdays)
            }
            RecurrenceType::Monthly => {
                let rule = match (nth_weekday, self.month_day) {
                    (Some((week, weekday)), _) => MonthlyRule::NthWeekday { week, weekday },
                    (None, Some(day)) => MonthlyRule::FixedDay { day },
                    (None, None) => MonthlyRule::StartDateAnchored,
                };
                RecurrenceRule::Monthly { rule }
            }
            RecurrenceType::Yearly => RecurrenceRule::Yearly,
        };

        let pattern = RecurrencePattern {
            rule,
            interval,
            start_date: self.start_date,
            end_date: self.end_date,
        };
        pattern.validate()?;
        Ok(pattern)
    }

    /// Build the flat request form of a pattern.
    pub fn from_pattern(pattern: &RecurrencePattern) -> Self {
        let mut request = Self::new(pattern.recurrence_type(), pattern.start_date)
            .with_interval(i64::from(pattern.interval));
        request.end_date = pattern.end_date;

        match &pattern.rule {
            RecurrenceRule::Weekly { weekdays } => {
                request.week_days = weekdays.iter().map(|day| weekday_index(*day)).collect();
            }
            RecurrenceRule::Monthly {
                rule: MonthlyRule::FixedDay { day },
            } => {
                request.month_day = Some(*day);
            }
            RecurrenceRule::Monthly {
                rule: MonthlyRule::NthWeekday { week, weekday },
            } => {
                request.week_of_month = Some(week.index());
                request.day_of_week = Some(weekday_index(*weekday));
            }
            _ => {}
        }

        request
    }
}

impl TryFrom<RecurrencePatternRequest> for RecurrencePattern {
    type Error = PatternError;

    fn try_from(request: RecurrencePatternRequest) -> Result<Self, Self::Error> {
        request.into_pattern()
    }
}
