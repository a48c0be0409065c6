//! Pure recurrence logic - no I/O, no async, no side effects.
//!
//! This crate provides:
//! - Calendar arithmetic on plain dates (`calendar`)
//! - Recurrence patterns, validation, and occurrence generation (`recurrence`)
//! - Serde helpers for form-style payloads (`serde`)
//!
//! # Example
//!
//! ```
//! use chrono::{NaiveDate, Weekday};
//! use recurra_core::recurrence::{generate_default, RecurrencePattern, WeekOfMonth};
//!
//! let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
//! let end = NaiveDate::from_ymd_opt(2024, 3, 31).unwrap();
//! let pattern = RecurrencePattern::monthly_on_nth(start, WeekOfMonth::Last, Weekday::Tue)
//!     .with_end_date(end);
//!
//! let dates = generate_default(&pattern).unwrap();
//! assert_eq!(dates.len(), 3);
//! assert_eq!(dates[0], NaiveDate::from_ymd_opt(2024, 1, 30).unwrap());
//! ```

pub mod calendar;
pub mod recurrence;
pub mod serde;
