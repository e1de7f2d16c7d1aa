//! Business-day calendar used to size the "previous work day" window.
//!
//! A [`WorkingCalendar`] is an immutable value: a set of working weekdays and
//! a set of explicit holidays. A date is a working day iff its weekday is a
//! working weekday and it is not a holiday.
//!
//! ## Usage
//!
//! ```rust
//! use chrono::{NaiveDate, Weekday};
//! use standup::libs::calendar::WorkingCalendar;
//!
//! let calendar = WorkingCalendar::new(
//!     [Weekday::Mon, Weekday::Tue, Weekday::Wed, Weekday::Thu, Weekday::Fri],
//!     Vec::<NaiveDate>::new(),
//! )
//! .unwrap();
//!
//! let monday = NaiveDate::from_ymd_opt(2021, 5, 17).unwrap();
//! let window = calendar.window(monday);
//! assert_eq!(window.previous_working_day, NaiveDate::from_ymd_opt(2021, 5, 14).unwrap());
//! assert!(window.has_gap);
//! ```

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use std::collections::{BTreeSet, HashSet};
use thiserror::Error;

/// Format of holiday dates in the configuration file.
pub const HOLIDAY_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CalendarError {
    #[error("working calendar has no working weekdays")]
    NoWorkingWeekdays,
    #[error("invalid weekday index {0}, expected 0 (Sunday) to 6 (Saturday)")]
    InvalidWeekday(u32),
    #[error("invalid holiday date '{0}', expected YYYY-MM-DD")]
    InvalidHoliday(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkingCalendar {
    working_weekdays: HashSet<Weekday>,
    holidays: BTreeSet<NaiveDate>,
}

/// The dates a standup report is built around.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StandupWindow {
    pub reference: NaiveDate,
    pub previous_working_day: NaiveDate,
    /// Non-working days lie strictly between `previous_working_day` and `reference`.
    pub has_gap: bool,
}

impl WorkingCalendar {
    /// Builds a calendar, failing fast when no weekday is a working day.
    pub fn new<W, H>(working_weekdays: W, holidays: H) -> Result<Self, CalendarError>
    where
        W: IntoIterator<Item = Weekday>,
        H: IntoIterator<Item = NaiveDate>,
    {
        let working_weekdays: HashSet<Weekday> = working_weekdays.into_iter().collect();
        if working_weekdays.is_empty() {
            return Err(CalendarError::NoWorkingWeekdays);
        }
        Ok(Self {
            working_weekdays,
            holidays: holidays.into_iter().collect(),
        })
    }

    /// Builds a calendar from configuration values: weekday indices counted
    /// from Sunday (0) and holidays formatted `YYYY-MM-DD`.
    pub fn from_config(weekday_indices: &[u32], holidays: &[String]) -> Result<Self, CalendarError> {
        let weekdays = weekday_indices.iter().map(|&index| weekday_from_index(index)).collect::<Result<Vec<_>, _>>()?;
        let holidays = holidays
            .iter()
            .map(|holiday| {
                NaiveDate::parse_from_str(holiday.trim(), HOLIDAY_FORMAT).map_err(|_| CalendarError::InvalidHoliday(holiday.clone()))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(weekdays, holidays)
    }

    pub fn is_holiday(&self, date: NaiveDate) -> bool {
        self.holidays.contains(&date)
    }

    pub fn is_working_day(&self, date: NaiveDate) -> bool {
        self.working_weekdays.contains(&date.weekday()) && !self.is_holiday(date)
    }

    /// Walks back from `date` to the closest earlier working day.
    ///
    /// Terminates because the weekday set is never empty and holidays are finite.
    pub fn previous_working_day(&self, date: NaiveDate) -> NaiveDate {
        let mut day = date - Duration::days(1);
        while !self.is_working_day(day) {
            day = day - Duration::days(1);
        }
        day
    }

    pub fn window(&self, reference: NaiveDate) -> StandupWindow {
        let previous_working_day = self.previous_working_day(reference);
        StandupWindow {
            reference,
            previous_working_day,
            has_gap: has_non_working_gap(previous_working_day, reference),
        }
    }
}

/// True when at least one calendar day lies strictly between the two dates.
pub fn has_non_working_gap(previous_working_day: NaiveDate, reference: NaiveDate) -> bool {
    (reference - previous_working_day).num_days() - 1 > 0
}

/// Maps a Sunday-based weekday index (0 = Sunday .. 6 = Saturday).
pub fn weekday_from_index(index: u32) -> Result<Weekday, CalendarError> {
    match index {
        0 => Ok(Weekday::Sun),
        1 => Ok(Weekday::Mon),
        2 => Ok(Weekday::Tue),
        3 => Ok(Weekday::Wed),
        4 => Ok(Weekday::Thu),
        5 => Ok(Weekday::Fri),
        6 => Ok(Weekday::Sat),
        other => Err(CalendarError::InvalidWeekday(other)),
    }
}
