use chrono::{NaiveDate, Weekday};

const DAY_NAMES: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

const FULL_DAY_NAMES: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

/// Converts a Sunday-based index (0 = Sunday .. 6 = Saturday) into a weekday.
pub fn weekday_from_index(index: u8) -> Option<Weekday> {
    match index {
        0 => Some(Weekday::Sun),
        1 => Some(Weekday::Mon),
        2 => Some(Weekday::Tue),
        3 => Some(Weekday::Wed),
        4 => Some(Weekday::Thu),
        5 => Some(Weekday::Fri),
        6 => Some(Weekday::Sat),
        _ => None,
    }
}

/// Returns the Sunday-based index (0-6) of a weekday.
pub fn weekday_index(weekday: Weekday) -> u8 {
    weekday.num_days_from_sunday() as u8
}

/// Short day names, Sunday first.
pub fn day_names() -> [&'static str; 7] {
    DAY_NAMES
}

/// Full day names, Sunday first.
pub fn full_day_names() -> [&'static str; 7] {
    FULL_DAY_NAMES
}

/// Returns the full English name of a weekday ("Tuesday").
pub fn weekday_name(weekday: Weekday) -> &'static str {
    FULL_DAY_NAMES[weekday_index(weekday) as usize]
}

/// Formats a date as `YYYY-MM-DD`.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Formats a date as `Jan 05, 2024`.
pub fn format_display_date(date: NaiveDate) -> String {
    date.format("%b %d, %Y").to_string()
}

/// Formats a date as `Fri, Jan 05, 2024`.
pub fn format_long_date(date: NaiveDate) -> String {
    date.format("%a, %b %d, %Y").to_string()
}

/// Formats a month heading as `January 2024`.
pub fn format_month_heading(date: NaiveDate) -> String {
    date.format("%B %Y").to_string()
}
