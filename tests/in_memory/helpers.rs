//! Shared test helpers for in-memory integration tests.

use std::sync::Arc;

use caseboard::{
    calendar::services::CalendarService,
    client::{ClientId, ClientRef},
    session::{adapters::memory::InMemorySessionRepository, services::SessionSchedulingService},
    task::{adapters::memory::InMemoryTaskRepository, services::TaskLifecycleService},
};
use chrono::{NaiveDate, NaiveDateTime};
use mockable::DefaultClock;
use rstest::fixture;

/// Task service over an in-memory store.
pub type TaskService = TaskLifecycleService<InMemoryTaskRepository, DefaultClock>;
/// Session service over an in-memory store.
pub type SessionService = SessionSchedulingService<InMemorySessionRepository, DefaultClock>;
/// Calendar service over both in-memory stores.
pub type MonthService =
    CalendarService<InMemorySessionRepository, InMemoryTaskRepository, DefaultClock>;

/// Services sharing one pair of stores.
pub struct Practice {
    pub tasks: TaskService,
    pub sessions: SessionService,
    pub calendar: MonthService,
}

/// Provides services wired to fresh in-memory stores.
#[fixture]
pub fn practice() -> Practice {
    let task_store = Arc::new(InMemoryTaskRepository::new());
    let session_store = Arc::new(InMemorySessionRepository::new());
    let clock = Arc::new(DefaultClock);

    Practice {
        tasks: TaskLifecycleService::new(Arc::clone(&task_store), Arc::clone(&clock)),
        sessions: SessionSchedulingService::new(Arc::clone(&session_store), Arc::clone(&clock)),
        calendar: CalendarService::new(session_store, task_store, clock),
    }
}

/// Builds a calendar date, panicking on invalid input.
pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid test date")
}

/// Builds a local wall-clock start time.
pub fn starts_at(year: i32, month: u32, day: u32, hour: u32) -> NaiveDateTime {
    date(year, month, day)
        .and_hms_opt(hour, 0, 0)
        .expect("valid test time")
}

/// Creates a client reference with a fresh identifier.
pub fn client(name: &str) -> ClientRef {
    ClientRef::new(ClientId::new(), name)
}
