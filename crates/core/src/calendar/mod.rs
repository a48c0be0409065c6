mod format;
mod math;

pub use format::{
    day_names, format_date, format_display_date, format_long_date, format_month_heading,
    full_day_names, weekday_from_index, weekday_index, weekday_name,
};
pub use math::{
    add_days, add_months, add_weeks, add_years, day_of_month, day_of_week, days_in_month,
    end_of_month, end_of_week, is_after, is_before, is_same_day, next_weekday_on_or_after,
    previous_weekday_on_or_before, start_of_month, start_of_week,
};
