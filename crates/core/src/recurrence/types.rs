use std::fmt;
use std::str::FromStr;

use chrono::{NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use super::error::PatternError;
use crate::calendar::weekday_index;

/// The base frequency of a recurrence pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecurrenceType {
    Daily,
    Weekly,
    Monthly,
    Yearly,
}

impl RecurrenceType {
    /// Returns the lowercase name used in requests ("daily").
    pub fn as_str(&self) -> &'static str {
        match self {
            RecurrenceType::Daily => "daily",
            RecurrenceType::Weekly => "weekly",
            RecurrenceType::Monthly => "monthly",
            RecurrenceType::Yearly => "yearly",
        }
    }

    /// Returns the unit noun for this frequency ("day", "week", ...).
    pub fn unit(&self) -> &'static str {
        match self {
            RecurrenceType::Daily => "day",
            RecurrenceType::Weekly => "week",
            RecurrenceType::Monthly => "month",
            RecurrenceType::Yearly => "year",
        }
    }
}

impl fmt::Display for RecurrenceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RecurrenceType {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "daily" => Ok(RecurrenceType::Daily),
            "weekly" => Ok(RecurrenceType::Weekly),
            "monthly" => Ok(RecurrenceType::Monthly),
            "yearly" => Ok(RecurrenceType::Yearly),
            _ => Err(PatternError::UnknownRecurrenceType(s.to_string())),
        }
    }
}

/// Which occurrence of a weekday inside a month. `Last` always means the
/// final one, whether the month holds four or five of that weekday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeekOfMonth {
    First,
    Second,
    Third,
    Fourth,
    Last,
}

impl WeekOfMonth {
    /// Converts the 1-5 form index (5 = last).
    pub fn from_index(index: u8) -> Option<Self> {
        match index {
            1 => Some(WeekOfMonth::First),
            2 => Some(WeekOfMonth::Second),
            3 => Some(WeekOfMonth::Third),
            4 => Some(WeekOfMonth::Fourth),
            5 => Some(WeekOfMonth::Last),
            _ => None,
        }
    }

    /// Returns the 1-5 form index.
    pub fn index(&self) -> u8 {
        match self {
            WeekOfMonth::First => 1,
            WeekOfMonth::Second => 2,
            WeekOfMonth::Third => 3,
            WeekOfMonth::Fourth => 4,
            WeekOfMonth::Last => 5,
        }
    }

    pub fn ordinal_name(&self) -> &'static str {
        match self {
            WeekOfMonth::First => "first",
            WeekOfMonth::Second => "second",
            WeekOfMonth::Third => "third",
            WeekOfMonth::Fourth => "fourth",
            WeekOfMonth::Last => "last",
        }
    }
}

/// How a monthly pattern picks its day inside each month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "mode")]
pub enum MonthlyRule {
    /// Same day of month as the start date.
    StartDateAnchored,
    /// A fixed day of month (1-31).
    FixedDay { day: u32 },
    /// The nth (or last) given weekday of the month.
    NthWeekday { week: WeekOfMonth, weekday: Weekday },
}

/// The frequency-specific part of a pattern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "type")]
pub enum RecurrenceRule {
    Daily,
    /// Empty `weekdays` means "same weekday as the start date".
    Weekly { weekdays: Vec<Weekday> },
    Monthly { rule: MonthlyRule },
    Yearly,
}

impl RecurrenceRule {
    /// Builds a weekly rule, sorting weekdays Sunday first and dropping duplicates.
    pub fn weekly(weekdays: impl IntoIterator<Item = Weekday>) -> Self {
        let mut weekdays: Vec<Weekday> = weekdays.into_iter().collect();
        weekdays.sort_by_key(|day| weekday_index(*day));
        weekdays.dedup();
        RecurrenceRule::Weekly { weekdays }
    }

    pub fn recurrence_type(&self) -> RecurrenceType {
        match self {
            RecurrenceRule::Daily => RecurrenceType::Daily,
            RecurrenceRule::Weekly { .. } => RecurrenceType::Weekly,
            RecurrenceRule::Monthly { .. } => RecurrenceType::Monthly,
            RecurrenceRule::Yearly => RecurrenceType::Yearly,
        }
    }
}

/// A repeating calendar pattern anchored at a start date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecurrencePattern {
    pub rule: RecurrenceRule,
    /// Step between occurrences, in units of the rule's frequency.
    pub interval: u32,
    pub start_date: NaiveDate,
    /// Inclusive upper bound. When absent, generation stops at a lookahead window.
    pub end_date: Option<NaiveDate>,
}

impl RecurrencePattern {
    /// Creates a pattern with an interval of 1 and no end date.
    pub fn new(rule: RecurrenceRule, start_date: NaiveDate) -> Self {
        Self {
            rule,
            interval: 1,
            start_date,
            end_date: None,
        }
    }

    pub fn daily(start_date: NaiveDate) -> Self {
        Self::new(RecurrenceRule::Daily, start_date)
    }

    /// Weekly on the start date's weekday.
    pub fn weekly(start_date: NaiveDate) -> Self {
        Self::new(RecurrenceRule::weekly([]), start_date)
    }

    /// Weekly on each of the given weekdays.
    pub fn weekly_on(start_date: NaiveDate, weekdays: impl IntoIterator<Item = Weekday>) -> Self {
        Self::new(RecurrenceRule::weekly(weekdays), start_date)
    }

    /// Monthly on the start date's day of month.
    pub fn monthly(start_date: NaiveDate) -> Self {
        Self::new(
            RecurrenceRule::Monthly {
                rule: MonthlyRule::StartDateAnchored,
            },
            start_date,
        )
    }

    /// Monthly on a fixed day of month.
    pub fn monthly_on_day(start_date: NaiveDate, day: u32) -> Self {
        Self::new(
            RecurrenceRule::Monthly {
                rule: MonthlyRule::FixedDay { day },
            },
            start_date,
        )
    }

    /// Monthly on the nth weekday ("second Tuesday", "last Friday").
    pub fn monthly_on_nth(start_date: NaiveDate, week: WeekOfMonth, weekday: Weekday) -> Self {
        Self::new(
            RecurrenceRule::Monthly {
                rule: MonthlyRule::NthWeekday { week, weekday },
            },
            start_date,
        )
    }

    pub fn yearly(start_date: NaiveDate) -> Self {
        Self::new(RecurrenceRule::Yearly, start_date)
    }

    /// Sets the interval.
    pub fn with_interval(mut self, interval: u32) -> Self {
        self.interval = interval;
        self
    }

    /// Sets the inclusive end date.
    pub fn with_end_date(mut self, end_date: NaiveDate) -> Self {
        self.end_date = Some(end_date);
        self
    }

    pub fn recurrence_type(&self) -> RecurrenceType {
        self.rule.recurrence_type()
    }

    /// Checks the invariants that the type system does not already enforce.
    pub fn validate(&self) -> Result<(), PatternError> {
        if self.interval < 1 {
            return Err(PatternError::InvalidInterval(self.interval.into()));
        }
        if let Some(end) = self.end_date {
            if end < self.start_date {
                return Err(PatternError::EndBeforeStart {
                    start: self.start_date,
                    end,
                });
            }
        }
        if let RecurrenceRule::Monthly {
            rule: MonthlyRule::FixedDay { day },
        } = self.rule
        {
            if !(1..=31).contains(&day) {
                return Err(PatternError::InvalidMonthDay(day));
            }
        }
        Ok(())
    }
}
