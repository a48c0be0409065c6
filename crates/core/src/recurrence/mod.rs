mod engine;
mod error;
mod preview;
mod requests;
mod summary;
mod types;

pub use engine::{
    effective_end, generate, generate_default, is_nth_weekday_of_month, nth_weekday_of_month,
    occurs_on, GenerateOptions, DEFAULT_LOOKAHEAD_YEARS, DEFAULT_MAX_OCCURRENCES,
};
pub use error::PatternError;
pub use preview::{build_month_grid, PreviewDay};
pub use requests::RecurrencePatternRequest;
pub use summary::{occurrence_count_text, summary};
pub use types::{MonthlyRule, RecurrencePattern, RecurrenceRule, RecurrenceType, WeekOfMonth};
