//! Date formatting for task-service queries and report headers.
//!
//! The task service and the report both use the day-first `DD/MM/YYYY`
//! format. Holidays in the configuration file use ISO `YYYY-MM-DD`
//! (see [`crate::libs::calendar::HOLIDAY_FORMAT`]).
//!
//! ## Examples
//!
//! ```rust
//! use chrono::NaiveDate;
//! use standup::libs::formatter::{format_date, parse_date};
//!
//! let date = NaiveDate::from_ymd_opt(2021, 5, 7).unwrap();
//! assert_eq!(format_date(&date), "07/05/2021");
//! assert_eq!(parse_date("07/05/2021"), Some(date));
//! ```

use chrono::NaiveDate;

/// Day-first date format understood by the task service.
pub const DATE_FORMAT: &str = "%d/%m/%Y";

pub fn format_date(date: &NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Parses a `DD/MM/YYYY` date, ignoring surrounding whitespace.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).ok()
}

/// Formats a task name as a Markdown bullet.
pub fn format_bullet(name: &str) -> String {
    format!("    - {}", name)
}
