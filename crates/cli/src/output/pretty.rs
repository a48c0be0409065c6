//! Pretty output formatting.

use recurra_core::calendar::{day_names, format_long_date, format_month_heading};
use recurra_core::recurrence::occurrence_count_text;

use chrono::Datelike;

use super::{GenerateReport, PreviewReport};

/// Format generated occurrences for display.
pub fn format_occurrences(report: &GenerateReport, quiet: bool) -> String {
    if quiet {
        return report
            .occurrences
            .iter()
            .map(|date| date.to_string())
            .collect::<Vec<_>>()
            .join("\n");
    }

    let mut output = format!("{}\n", report.summary);
    if report.occurrences.is_empty() {
        output.push_str("No occurrences found.");
        return output;
    }
    output.push_str(&format!("OCCURRENCES ({})\n", report.count));
    output.push_str(&"-".repeat(40));
    for (position, date) in report.occurrences.iter().enumerate() {
        output.push_str(&format!("\n{:>3}. {}", position + 1, format_long_date(*date)));
    }
    output.push('\n');
    output.push_str(&occurrence_count_text(report.count));
    output
}

/// Format a month preview grid. Occurrences are marked with `*`, the start
/// date with `S` and the end date with `E`; days outside the month are blank.
pub fn format_preview(report: &PreviewReport) -> String {
    let mut output = format!("{}\n{}\n", format_month_heading(report.month), report.summary);
    output.push_str(
        &day_names()
            .iter()
            .map(|name| format!("{:>4}", name))
            .collect::<String>(),
    );

    for week in &report.weeks {
        output.push('\n');
        for day in week {
            if !day.is_current_month {
                output.push_str("    ");
                continue;
            }
            let marker = if day.is_occurrence {
                '*'
            } else if day.is_start_date {
                'S'
            } else if day.is_end_date {
                'E'
            } else {
                ' '
            };
            output.push_str(&format!("{:>3}{}", day.date.day(), marker));
        }
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use recurra_core::recurrence::{build_month_grid, RecurrencePattern, RecurrencePatternRequest};

    fn make_date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn report(occurrences: Vec<NaiveDate>) -> GenerateReport {
        let pattern = RecurrencePattern::daily(make_date(2024, 1, 1));
        GenerateReport {
            pattern: RecurrencePatternRequest::from_pattern(&pattern),
            summary: pattern.to_string(),
            count: occurrences.len(),
            occurrences,
        }
    }

    #[test]
    fn test_format_occurrences() {
        let dates = vec![make_date(2024, 1, 1), make_date(2024, 1, 2)];
        let output = format_occurrences(&report(dates), false);
        assert!(output.starts_with("Repeats daily\nOCCURRENCES (2)"));
        assert!(output.contains("  1. Mon, Jan 01, 2024"));
        assert!(output.contains("  2. Tue, Jan 02, 2024"));
        assert!(output.ends_with("This pattern will generate 2 occurrences."));
    }

    #[test]
    fn test_format_occurrences_quiet() {
        let dates = vec![make_date(2024, 1, 1), make_date(2024, 1, 2)];
        let output = format_occurrences(&report(dates), true);
        assert_eq!(output, "2024-01-01\n2024-01-02");
    }

    #[test]
    fn test_format_occurrences_empty() {
        let output = format_occurrences(&report(vec![]), false);
        assert!(output.ends_with("No occurrences found."));
    }

    #[test]
    fn test_format_preview() {
        let pattern = RecurrencePattern::weekly(make_date(2024, 2, 5))
            .with_end_date(make_date(2024, 2, 19));
        let occurrences = vec![
            make_date(2024, 2, 5),
            make_date(2024, 2, 12),
            make_date(2024, 2, 19),
        ];
        let month = make_date(2024, 2, 1);
        let preview = PreviewReport {
            month,
            summary: pattern.to_string(),
            weeks: build_month_grid(month, &pattern, &occurrences),
        };

        let output = format_preview(&preview);
        assert!(output.starts_with("February 2024\n"));
        assert!(output.contains(" Sun Mon Tue Wed Thu Fri Sat"));
        assert!(output.contains("  5*"));
        assert!(output.contains(" 12*"));
        assert!(output.contains(" 29 "));
    }
}
