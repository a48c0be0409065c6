//! Calendar arithmetic on plain dates.
//!
//! All functions are pure and operate on [`NaiveDate`], so there is no
//! time-of-day or timezone to discard. Month and year addition clamp to the
//! last valid day of the target month: Jan 31 + 1 month is Feb 29 in a leap
//! year, Feb 29 + 1 year is Feb 28.

use chrono::{Datelike, Duration, Months, NaiveDate, Weekday};

/// Returns the weekday of a date.
pub fn day_of_week(date: NaiveDate) -> Weekday {
    date.weekday()
}

/// Returns the day of the month (1-31).
pub fn day_of_month(date: NaiveDate) -> u32 {
    date.day()
}

/// Returns the first day of the date's month.
pub fn start_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

/// Returns the last day of the date's month.
pub fn end_of_month(date: NaiveDate) -> NaiveDate {
    let first = start_of_month(date);
    first
        .checked_add_months(Months::new(1))
        .and_then(|next| next.pred_opt())
        .unwrap_or(NaiveDate::MAX)
}

/// Returns the number of days in the date's month.
pub fn days_in_month(date: NaiveDate) -> u32 {
    end_of_month(date).day()
}

/// Adds (or subtracts, when negative) a number of days.
///
/// Saturates at the representable date range instead of overflowing.
pub fn add_days(date: NaiveDate, days: i64) -> NaiveDate {
    Duration::try_days(days)
        .and_then(|delta| date.checked_add_signed(delta))
        .unwrap_or(if days < 0 { NaiveDate::MIN } else { NaiveDate::MAX })
}

/// Adds a number of weeks.
pub fn add_weeks(date: NaiveDate, weeks: i64) -> NaiveDate {
    add_days(date, weeks.saturating_mul(7))
}

/// Adds a number of months, clamping the day to the target month's length.
pub fn add_months(date: NaiveDate, months: i32) -> NaiveDate {
    let shifted = if months >= 0 {
        date.checked_add_months(Months::new(months.unsigned_abs()))
    } else {
        date.checked_sub_months(Months::new(months.unsigned_abs()))
    };
    shifted.unwrap_or(if months < 0 { NaiveDate::MIN } else { NaiveDate::MAX })
}

/// Adds a number of years, clamping Feb 29 to Feb 28 in common years.
pub fn add_years(date: NaiveDate, years: i32) -> NaiveDate {
    add_months(date, years.saturating_mul(12))
}

/// Returns true if both dates fall on the same calendar day.
pub fn is_same_day(a: NaiveDate, b: NaiveDate) -> bool {
    a == b
}

/// Returns true if `a` is strictly after `b`.
pub fn is_after(a: NaiveDate, b: NaiveDate) -> bool {
    a > b
}

/// Returns true if `a` is strictly before `b`.
pub fn is_before(a: NaiveDate, b: NaiveDate) -> bool {
    a < b
}

/// Returns the first date on or after `date` that falls on `weekday`.
pub fn next_weekday_on_or_after(date: NaiveDate, weekday: Weekday) -> NaiveDate {
    let offset = (7 + weekday.num_days_from_sunday() as i64
        - date.weekday().num_days_from_sunday() as i64)
        % 7;
    add_days(date, offset)
}

/// Returns the last date on or before `date` that falls on `weekday`.
pub fn previous_weekday_on_or_before(date: NaiveDate, weekday: Weekday) -> NaiveDate {
    let offset = (7 + date.weekday().num_days_from_sunday() as i64
        - weekday.num_days_from_sunday() as i64)
        % 7;
    add_days(date, -offset)
}

/// Returns the Sunday that starts the week containing `date`.
pub fn start_of_week(date: NaiveDate) -> NaiveDate {
    previous_weekday_on_or_before(date, Weekday::Sun)
}

/// Returns the Saturday that ends the week containing `date`.
pub fn end_of_week(date: NaiveDate) -> NaiveDate {
    next_weekday_on_or_after(date, Weekday::Sat)
}
