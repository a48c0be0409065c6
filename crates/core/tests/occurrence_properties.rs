//! Properties every generated occurrence list must satisfy.

use chrono::{Datelike, NaiveDate, Weekday};
use recurra_core::calendar::{add_days, add_years, end_of_month, weekday_from_index};
use recurra_core::recurrence::{
    generate, generate_default, GenerateOptions, PatternError, RecurrencePattern,
    RecurrencePatternRequest, RecurrenceType, WeekOfMonth,
};

fn make_date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

fn start_dates() -> Vec<NaiveDate> {
    vec![
        make_date(2024, 1, 1),
        make_date(2024, 1, 31),
        make_date(2024, 2, 29),
        make_date(2023, 6, 15),
        make_date(2025, 12, 28),
    ]
}

fn sample_patterns() -> Vec<RecurrencePattern> {
    let mut patterns = Vec::new();
    for start in start_dates() {
        for interval in [1, 2, 5] {
            patterns.push(RecurrencePattern::daily(start).with_interval(interval));
            patterns.push(RecurrencePattern::weekly(start).with_interval(interval));
            patterns.push(
                RecurrencePattern::weekly_on(start, [Weekday::Sun, Weekday::Wed, Weekday::Sat])
                    .with_interval(interval),
            );
            patterns.push(RecurrencePattern::monthly(start).with_interval(interval));
            patterns.push(RecurrencePattern::monthly_on_day(start, 31).with_interval(interval));
            patterns.push(
                RecurrencePattern::monthly_on_nth(start, WeekOfMonth::Third, Weekday::Mon)
                    .with_interval(interval),
            );
            patterns.push(
                RecurrencePattern::monthly_on_nth(start, WeekOfMonth::Last, Weekday::Fri)
                    .with_interval(interval),
            );
            patterns.push(RecurrencePattern::yearly(start).with_interval(interval));
        }
    }
    patterns
}

#[test]
fn test_results_are_ordered_bounded_and_capped() {
    let options = GenerateOptions::new().with_max_occurrences(40).with_lookahead_years(3);
    for pattern in sample_patterns() {
        let dates = generate(&pattern, &options).unwrap();
        let ceiling = add_years(pattern.start_date, 3);

        assert!(dates.len() <= 40, "{pattern:?}");
        assert!(dates.windows(2).all(|w| w[0] < w[1]), "{pattern:?}");
        assert!(dates.iter().all(|d| *d >= pattern.start_date), "{pattern:?}");
        assert!(dates.iter().all(|d| *d <= ceiling), "{pattern:?}");
    }
}

#[test]
fn test_results_respect_end_date() {
    for pattern in sample_patterns() {
        let end = add_days(pattern.start_date, 200);
        let pattern = pattern.with_end_date(end);
        let dates = generate_default(&pattern).unwrap();
        assert!(dates.iter().all(|d| *d <= end), "{pattern:?}");
    }
}

#[test]
fn test_generation_is_idempotent() {
    for pattern in sample_patterns() {
        assert_eq!(generate_default(&pattern), generate_default(&pattern));
    }
}

#[test]
fn test_daily_steps_equal_interval() {
    for interval in 1..=7u32 {
        let pattern = RecurrencePattern::daily(make_date(2024, 3, 3)).with_interval(interval);
        let dates = generate_default(&pattern).unwrap();
        assert!(dates
            .windows(2)
            .all(|w| (w[1] - w[0]).num_days() == i64::from(interval)));
    }
}

#[test]
fn test_weekly_weekdays_are_respected() {
    for start in start_dates() {
        let pattern = RecurrencePattern::weekly(start);
        let dates = generate_default(&pattern).unwrap();
        assert!(dates.iter().all(|d| d.weekday() == start.weekday()));

        let days = [Weekday::Tue, Weekday::Thu];
        let pattern = RecurrencePattern::weekly_on(start, days);
        let dates = generate_default(&pattern).unwrap();
        assert!(!dates.is_empty());
        assert!(dates.iter().all(|d| days.contains(&d.weekday())));
    }
}

#[test]
fn test_nth_weekday_results_match_weekday() {
    for index in 0..7u8 {
        let weekday = weekday_from_index(index).unwrap();
        let start = make_date(2024, 1, 1);
        let pattern = RecurrencePattern::monthly_on_nth(start, WeekOfMonth::Last, weekday)
            .with_end_date(make_date(2025, 12, 31));
        let dates = generate_default(&pattern).unwrap();

        assert_eq!(dates.len(), 24);
        for date in dates {
            assert_eq!(date.weekday(), weekday);
            // Last means no later date in the month has the same weekday
            assert!(add_days(date, 7) > end_of_month(date));
        }
    }
}

#[test]
fn test_second_tuesday_scenario() {
    let request = RecurrencePatternRequest::new(RecurrenceType::Monthly, make_date(2024, 1, 1))
        .with_nth_weekday(2, 2)
        .with_end_date(make_date(2024, 6, 30));
    let dates = generate_default(&request.into_pattern().unwrap()).unwrap();

    assert_eq!(
        dates,
        vec![
            make_date(2024, 1, 9),
            make_date(2024, 2, 13),
            make_date(2024, 3, 12),
            make_date(2024, 4, 9),
            make_date(2024, 5, 14),
            make_date(2024, 6, 11),
        ]
    );
}

#[test]
fn test_weekly_scenario_from_json() {
    let json = r#"{
        "recurrenceType": "weekly",
        "interval": 1,
        "startDate": "2024-01-01",
        "endDate": "2024-01-07",
        "weekDays": [1, 3, 5]
    }"#;
    let request: RecurrencePatternRequest = serde_json::from_str(json).unwrap();
    let dates = generate_default(&request.into_pattern().unwrap()).unwrap();

    assert_eq!(
        dates,
        vec![make_date(2024, 1, 1), make_date(2024, 1, 3), make_date(2024, 1, 5)]
    );
}

#[test]
fn test_without_end_date_stays_within_a_year() {
    let start = make_date(2024, 5, 17);
    for pattern in [
        RecurrencePattern::daily(start),
        RecurrencePattern::weekly(start),
        RecurrencePattern::monthly(start),
        RecurrencePattern::yearly(start),
    ] {
        let dates = generate_default(&pattern).unwrap();
        assert!(dates.len() <= 50);
        assert!(dates.iter().all(|d| *d <= add_years(start, 1)));
    }
}

#[test]
fn test_empty_window_is_not_an_error() {
    // No 31st between April 1 and April 30
    let pattern = RecurrencePattern::monthly_on_day(make_date(2024, 4, 1), 31)
        .with_end_date(make_date(2024, 4, 30));
    assert_eq!(generate_default(&pattern), Ok(vec![]));
}

#[test]
fn test_invalid_pattern_fails_before_generation() {
    let start = make_date(2024, 1, 10);
    let end = make_date(2024, 1, 1);
    let pattern = RecurrencePattern::daily(start).with_end_date(end);
    assert_eq!(
        generate_default(&pattern),
        Err(PatternError::EndBeforeStart { start, end })
    );
}
