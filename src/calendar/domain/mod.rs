//! Domain model for the calendar month view.
//!
//! Sessions and tasks are projected into [`CalendarEvent`]s keyed by a
//! plain [`chrono::NaiveDate`], then bucketed per day of a [`CalendarMonth`].

mod aggregate;
mod error;
mod event;
mod grid;
mod month;

pub use aggregate::aggregate;
pub use error::CalendarError;
pub use event::{CalendarEvent, EventKind, EventSource, EventStatus, project_events};
pub use grid::{CalendarGrid, DayBucket, GridCell};
pub use month::{
    CalendarMonth, MAX_YEAR, MIN_YEAR, days_in_month, is_leap_year, weekday_offset,
};
