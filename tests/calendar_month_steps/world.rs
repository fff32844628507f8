//! Shared world state for calendar month BDD scenarios.

use std::sync::Arc;

use caseboard::{
    calendar::{
        domain::CalendarGrid,
        services::{CalendarService, CalendarServiceError},
    },
    session::{adapters::memory::InMemorySessionRepository, services::SessionSchedulingService},
    task::{adapters::memory::InMemoryTaskRepository, services::TaskLifecycleService},
};
use chrono::NaiveDate;
use mockable::DefaultClock;
use rstest::fixture;

/// Scenario world for calendar month behaviour tests.
pub struct CalendarWorld {
    pub tasks: TaskLifecycleService<InMemoryTaskRepository, DefaultClock>,
    pub sessions: SessionSchedulingService<InMemorySessionRepository, DefaultClock>,
    pub calendar: CalendarService<InMemorySessionRepository, InMemoryTaskRepository, DefaultClock>,
    pub last_grid: Option<Result<CalendarGrid, CalendarServiceError>>,
}

impl CalendarWorld {
    /// Creates a world with empty stores.
    #[must_use]
    pub fn new() -> Self {
        let task_store = Arc::new(InMemoryTaskRepository::new());
        let session_store = Arc::new(InMemorySessionRepository::new());
        let clock = Arc::new(DefaultClock);
        Self {
            tasks: TaskLifecycleService::new(Arc::clone(&task_store), Arc::clone(&clock)),
            sessions: SessionSchedulingService::new(Arc::clone(&session_store), Arc::clone(&clock)),
            calendar: CalendarService::new(session_store, task_store, clock),
            last_grid: None,
        }
    }

    /// Returns the grid from the last successful request.
    pub fn grid(&self) -> Result<&CalendarGrid, eyre::Report> {
        match self.last_grid.as_ref() {
            Some(Ok(grid)) => Ok(grid),
            Some(Err(err)) => Err(eyre::eyre!("calendar request failed: {err}")),
            None => Err(eyre::eyre!("no calendar requested in scenario")),
        }
    }
}

impl Default for CalendarWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> CalendarWorld {
    CalendarWorld::default()
}

/// Parses an ISO `YYYY-MM-DD` date from a step.
pub fn parse_date(raw: &str) -> Result<NaiveDate, eyre::Report> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|err| eyre::eyre!("invalid scenario date {raw}: {err}"))
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
