//! Application services for the calendar.

mod month_view;

pub use month_view::{
    CalendarRequest, CalendarService, CalendarServiceError, CalendarServiceResult,
};
