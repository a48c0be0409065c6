use std::fmt;

use chrono::Datelike;

use super::types::{MonthlyRule, RecurrencePattern, RecurrenceRule};
use crate::calendar::{day_of_month, format_date, weekday_name};

/// Describes a pattern in plain English, e.g. "Repeats every 2 weeks on
/// Monday, Wednesday" or "Repeats monthly on the last Friday".
pub fn summary(pattern: &RecurrencePattern) -> String {
    let unit = pattern.recurrence_type().unit();
    let mut text = if pattern.interval == 1 {
        format!("Repeats {}", frequency_adverb(pattern))
    } else {
        format!("Repeats every {} {}s", pattern.interval, unit)
    };

    match &pattern.rule {
        RecurrenceRule::Weekly { weekdays } if !weekdays.is_empty() => {
            let names: Vec<&str> = weekdays.iter().map(|day| weekday_name(*day)).collect();
            text.push_str(&format!(" on {}", names.join(", ")));
        }
        RecurrenceRule::Weekly { .. } => {
            text.push_str(&format!(" on {}", weekday_name(pattern.start_date.weekday())));
        }
        RecurrenceRule::Monthly { rule } => match rule {
            MonthlyRule::NthWeekday { week, weekday } => {
                text.push_str(&format!(
                    " on the {} {}",
                    week.ordinal_name(),
                    weekday_name(*weekday)
                ));
            }
            MonthlyRule::FixedDay { day } => text.push_str(&format!(" on day {}", day)),
            MonthlyRule::StartDateAnchored => {
                text.push_str(&format!(" on day {}", day_of_month(pattern.start_date)))
            }
        },
        RecurrenceRule::Yearly => {
            text.push_str(&format!(" on {}", pattern.start_date.format("%B %-d")));
        }
        RecurrenceRule::Daily => {}
    }

    if let Some(end) = pattern.end_date {
        text.push_str(&format!(" until {}", format_date(end)));
    }
    text
}

/// Describes how many dates a generation produced.
pub fn occurrence_count_text(count: usize) -> String {
    let plural = if count == 1 { "" } else { "s" };
    format!("This pattern will generate {} occurrence{}.", count, plural)
}

fn frequency_adverb(pattern: &RecurrencePattern) -> &'static str {
    match pattern.rule {
        RecurrenceRule::Daily => "daily",
        RecurrenceRule::Weekly { .. } => "weekly",
        RecurrenceRule::Monthly { .. } => "monthly",
        RecurrenceRule::Yearly => "yearly",
    }
}

impl fmt::Display for RecurrencePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&summary(self))
    }
}
