//! Application services for session records.

mod scheduling;

pub use scheduling::{
    DEFAULT_DURATION_MINUTES, ScheduleSessionRequest, SessionSchedulingError,
    SessionSchedulingResult, SessionSchedulingService,
};
