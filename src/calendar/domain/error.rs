//! Error types for calendar month parsing and navigation.

use thiserror::Error;

/// Errors returned while building calendar months.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CalendarError {
    /// The month value is not an integer.
    #[error("invalid month '{0}', expected an index from 0 to 11")]
    InvalidMonth(String),

    /// The year value is not an integer.
    #[error("invalid year '{0}'")]
    InvalidYear(String),

    /// The month index is outside `0..=11`.
    #[error("month index {0} out of range, expected 0 to 11")]
    MonthOutOfRange(u32),

    /// The year is outside the supported range.
    #[error("year {0} out of range, expected 1 to 9999")]
    YearOutOfRange(i32),
}
