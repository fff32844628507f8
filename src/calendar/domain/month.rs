//! Month arithmetic: lengths, leap years, weekday offsets and navigation.

use super::CalendarError;
use chrono::{Datelike, NaiveDate, Weekday};
use serde::Serialize;
use std::fmt;

/// Earliest supported calendar year.
pub const MIN_YEAR: i32 = 1;
/// Latest supported calendar year.
pub const MAX_YEAR: i32 = 9999;

const DAYS_PER_WEEK: u32 = 7;

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Returns whether `year` is a Gregorian leap year.
#[must_use]
pub fn is_leap_year(year: i32) -> bool {
    NaiveDate::from_ymd_opt(year, 2, 29).is_some()
}

/// Returns the number of days in the month with 0-based `month_index` of
/// `year`.
///
/// # Errors
///
/// Returns [`CalendarError::MonthOutOfRange`] when `month_index > 11`.
pub fn days_in_month(year: i32, month_index: u32) -> Result<u32, CalendarError> {
    match month_index {
        1 if is_leap_year(year) => Ok(29),
        1 => Ok(28),
        3 | 5 | 8 | 10 => Ok(30),
        0 | 2 | 4 | 6 | 7 | 9 | 11 => Ok(31),
        other => Err(CalendarError::MonthOutOfRange(other)),
    }
}

/// Number of grid columns between `week_start` and `weekday`, in `0..=6`.
#[must_use]
pub fn weekday_offset(weekday: Weekday, week_start: Weekday) -> u32 {
    let raw = weekday.num_days_from_sunday() + DAYS_PER_WEEK - week_start.num_days_from_sunday();
    if raw >= DAYS_PER_WEEK {
        raw - DAYS_PER_WEEK
    } else {
        raw
    }
}

/// A month of a specific year. Months are indexed from 0 (January) to 11
/// (December).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(into = "MonthKey")]
pub struct CalendarMonth {
    first_day: NaiveDate,
}

#[derive(Serialize)]
struct MonthKey {
    month: u32,
    year: i32,
}

impl From<CalendarMonth> for MonthKey {
    fn from(value: CalendarMonth) -> Self {
        Self {
            month: value.month_index(),
            year: value.year(),
        }
    }
}

impl CalendarMonth {
    /// Creates a month from a year and 0-based month index.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::MonthOutOfRange`] or
    /// [`CalendarError::YearOutOfRange`] for values outside the supported
    /// range.
    pub fn new(year: i32, month_index: u32) -> Result<Self, CalendarError> {
        if month_index > 11 {
            return Err(CalendarError::MonthOutOfRange(month_index));
        }
        if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            return Err(CalendarError::YearOutOfRange(year));
        }
        let first_day = NaiveDate::from_ymd_opt(year, month_index + 1, 1)
            .ok_or(CalendarError::YearOutOfRange(year))?;
        Ok(Self { first_day })
    }

    /// Returns the month containing `date`.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::YearOutOfRange`] when `date` lies outside the
    /// supported years.
    pub fn containing(date: NaiveDate) -> Result<Self, CalendarError> {
        Self::new(date.year(), date.month0())
    }

    /// Parses a month index and year from text.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidMonth`] or
    /// [`CalendarError::InvalidYear`] for non-numeric input, or a range error
    /// from [`Self::new`].
    pub fn parse(month: &str, year: &str) -> Result<Self, CalendarError> {
        let month_index = month
            .trim()
            .parse::<u32>()
            .map_err(|_| CalendarError::InvalidMonth(month.to_owned()))?;
        let parsed_year = year
            .trim()
            .parse::<i32>()
            .map_err(|_| CalendarError::InvalidYear(year.to_owned()))?;
        Self::new(parsed_year, month_index)
    }

    /// Resolves optional month and year query values, falling back to the
    /// month or year of `today` for each component that is missing or
    /// invalid. A fallback year outside the supported range is clamped to
    /// the nearest supported year.
    #[must_use]
    pub fn from_query(month: Option<&str>, year: Option<&str>, today: NaiveDate) -> Self {
        let month_index = month
            .and_then(|raw| raw.trim().parse::<u32>().ok())
            .filter(|index| *index <= 11)
            .unwrap_or_else(|| today.month0());
        let resolved_year = year
            .and_then(|raw| raw.trim().parse::<i32>().ok())
            .filter(|value| (MIN_YEAR..=MAX_YEAR).contains(value))
            .unwrap_or_else(|| today.year().clamp(MIN_YEAR, MAX_YEAR));
        // Both components are range-checked above.
        Self::new(resolved_year, month_index).unwrap_or_else(|_| Self {
            first_day: NaiveDate::default(),
        })
    }

    /// Returns the year.
    #[must_use]
    pub fn year(self) -> i32 {
        self.first_day.year()
    }

    /// Returns the 0-based month index.
    #[must_use]
    pub fn month_index(self) -> u32 {
        self.first_day.month0()
    }

    /// Returns the English month name.
    #[must_use]
    pub fn name(self) -> &'static str {
        usize::try_from(self.month_index())
            .ok()
            .and_then(|index| MONTH_NAMES.get(index))
            .copied()
            .unwrap_or_default()
    }

    /// Returns the first day of the month.
    #[must_use]
    pub const fn first_day(self) -> NaiveDate {
        self.first_day
    }

    /// Returns the number of days in the month.
    #[must_use]
    pub fn days_in_month(self) -> u32 {
        days_in_month(self.year(), self.month_index()).unwrap_or(31)
    }

    /// Returns the number of empty grid cells before day 1 when weeks start
    /// on `week_start`. Always in `0..=6`.
    #[must_use]
    pub fn first_weekday_offset(self, week_start: Weekday) -> u32 {
        weekday_offset(self.first_day.weekday(), week_start)
    }

    /// Returns the date of `day` (1-based) within the month.
    #[must_use]
    pub fn day(self, day: u32) -> Option<NaiveDate> {
        self.first_day.with_day(day)
    }

    /// Returns whether `date` falls within the month.
    #[must_use]
    pub fn contains(self, date: NaiveDate) -> bool {
        date.year() == self.year() && date.month0() == self.month_index()
    }

    /// Returns the preceding month. January wraps to December of the
    /// previous year.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::YearOutOfRange`] before year 1.
    pub fn previous(self) -> Result<Self, CalendarError> {
        match self.month_index() {
            0 => Self::new(self.year() - 1, 11),
            index => Self::new(self.year(), index - 1),
        }
    }

    /// Returns the following month. December wraps to January of the next
    /// year.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::YearOutOfRange`] after year 9999.
    pub fn next(self) -> Result<Self, CalendarError> {
        match self.month_index() {
            11 => Self::new(self.year() + 1, 0),
            index => Self::new(self.year(), index + 1),
        }
    }
}

impl fmt::Display for CalendarMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.name(), self.year())
    }
}
