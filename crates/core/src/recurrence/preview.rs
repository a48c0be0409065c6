use std::collections::HashSet;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use super::types::RecurrencePattern;
use crate::calendar::{end_of_month, end_of_week, start_of_month, start_of_week};

/// One cell of a month preview grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreviewDay {
    pub date: NaiveDate,
    /// False for the leading and trailing days borrowed from adjacent months.
    pub is_current_month: bool,
    pub is_occurrence: bool,
    pub is_start_date: bool,
    pub is_end_date: bool,
}

/// Builds the Sunday-started weeks covering the month that contains `month`,
/// flagging the days that appear in `occurrences`.
pub fn build_month_grid(
    month: NaiveDate,
    pattern: &RecurrencePattern,
    occurrences: &[NaiveDate],
) -> Vec<Vec<PreviewDay>> {
    let first = start_of_month(month);
    let grid_start = start_of_week(first);
    let grid_end = end_of_week(end_of_month(first));
    let occurrence_set: HashSet<&NaiveDate> = occurrences.iter().collect();

    let mut weeks = Vec::new();
    let mut week = Vec::with_capacity(7);
    let mut current = grid_start;

    loop {
        week.push(PreviewDay {
            date: current,
            is_current_month: current.month() == first.month() && current.year() == first.year(),
            is_occurrence: occurrence_set.contains(&current),
            is_start_date: current == pattern.start_date,
            is_end_date: pattern.end_date == Some(current),
        });
        if week.len() == 7 {
            weeks.push(std::mem::take(&mut week));
        }
        // The grid is cut short at the end of the representable date range
        match current.succ_opt() {
            Some(next) if current < grid_end => current = next,
            _ => break,
        }
    }
    if !week.is_empty() {
        weeks.push(week);
    }

    weeks
}
