//! Service assembling month views from the session and task stores.

use crate::{
    calendar::domain::{CalendarError, CalendarGrid, CalendarMonth, aggregate, project_events},
    config::CalendarConfig,
    session::{
        domain::SessionFilter,
        ports::{SessionRepository, SessionRepositoryError},
    },
    task::{
        domain::TaskFilter,
        ports::{TaskRepository, TaskRepositoryError},
    },
};
use chrono::{Days, NaiveDate};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use tracing::debug;

/// Request for one month of the calendar.
///
/// Optional filters narrow each record stream before bucketing. Their date
/// ranges are intersected with the month window, so a filter bounded to
/// overdue tasks shows only the overdue tasks within the month.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarRequest {
    month: CalendarMonth,
    task_filter: TaskFilter,
    session_filter: SessionFilter,
}

impl CalendarRequest {
    /// Creates an unfiltered request for `month`.
    #[must_use]
    pub fn new(month: CalendarMonth) -> Self {
        Self {
            month,
            task_filter: TaskFilter::new(),
            session_filter: SessionFilter::new(),
        }
    }

    /// Restricts the tasks shown.
    #[must_use]
    pub fn with_task_filter(mut self, filter: TaskFilter) -> Self {
        self.task_filter = filter;
        self
    }

    /// Restricts the sessions shown.
    #[must_use]
    pub fn with_session_filter(mut self, filter: SessionFilter) -> Self {
        self.session_filter = filter;
        self
    }

    /// Returns the requested month.
    #[must_use]
    pub const fn month(&self) -> CalendarMonth {
        self.month
    }
}

/// Errors returned while building a month view.
#[derive(Debug, Clone, Error)]
pub enum CalendarServiceError {
    /// The requested month could not be resolved.
    #[error(transparent)]
    Calendar(#[from] CalendarError),
    /// Reading sessions failed.
    #[error("failed to load sessions: {0}")]
    Sessions(#[from] SessionRepositoryError),
    /// Reading tasks failed.
    #[error("failed to load tasks: {0}")]
    Tasks(#[from] TaskRepositoryError),
}

/// Result type for calendar service operations.
pub type CalendarServiceResult<T> = Result<T, CalendarServiceError>;

/// Builds month grids from live session and task records.
///
/// Each call reads both stores afresh, so a view always reflects the most
/// recent persisted state.
#[derive(Clone)]
pub struct CalendarService<S, T, C>
where
    S: SessionRepository,
    T: TaskRepository,
    C: Clock + Send + Sync,
{
    sessions: Arc<S>,
    tasks: Arc<T>,
    clock: Arc<C>,
    config: CalendarConfig,
}

impl<S, T, C> CalendarService<S, T, C>
where
    S: SessionRepository,
    T: TaskRepository,
    C: Clock + Send + Sync,
{
    /// Creates a service with the default configuration.
    #[must_use]
    pub fn new(sessions: Arc<S>, tasks: Arc<T>, clock: Arc<C>) -> Self {
        Self {
            sessions,
            tasks,
            clock,
            config: CalendarConfig::default(),
        }
    }

    /// Replaces the rendering configuration.
    #[must_use]
    pub const fn with_config(mut self, config: CalendarConfig) -> Self {
        self.config = config;
        self
    }

    /// Returns the rendering configuration.
    #[must_use]
    pub const fn config(&self) -> &CalendarConfig {
        &self.config
    }

    /// Returns the current local date.
    #[must_use]
    pub fn today(&self) -> NaiveDate {
        self.clock.local().date_naive()
    }

    /// Builds the grid for the requested month.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarServiceError`] when either store fails.
    pub async fn month_view(&self, request: &CalendarRequest) -> CalendarServiceResult<CalendarGrid> {
        let month = request.month;
        let window_start = Some(month.first_day());
        let window_end = month
            .first_day()
            .checked_add_days(Days::new(u64::from(month.days_in_month())));

        let session_filter = request.session_filter.clone().with_date_range(
            later_start(window_start, request.session_filter.starts_from()),
            earlier_end(window_end, request.session_filter.starts_before()),
        );
        let task_filter = request.task_filter.clone().with_due_range(
            later_start(window_start, request.task_filter.due_from()),
            earlier_end(window_end, request.task_filter.due_before()),
        );

        let sessions = self.sessions.list(&session_filter).await?;
        let tasks = self.tasks.list(&task_filter).await?;
        debug!(
            %month,
            sessions = sessions.len(),
            tasks = tasks.len(),
            "building calendar month view"
        );

        let events = project_events(&sessions, &tasks);
        Ok(aggregate(month, &self.config, events, Some(self.today())))
    }

    /// Builds the grid for raw month and year query values, falling back
    /// to the current month or year for each missing or invalid component.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarServiceError`] when either store fails.
    pub async fn month_view_from_query(
        &self,
        month: Option<&str>,
        year: Option<&str>,
    ) -> CalendarServiceResult<CalendarGrid> {
        let resolved = CalendarMonth::from_query(month, year, self.today());
        self.month_view(&CalendarRequest::new(resolved)).await
    }

    /// Builds the grid for the month containing today.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarServiceError`] when today lies outside the
    /// supported years or either store fails.
    pub async fn current_month(&self) -> CalendarServiceResult<CalendarGrid> {
        let month = CalendarMonth::containing(self.today())?;
        self.month_view(&CalendarRequest::new(month)).await
    }
}

/// Tighter of two inclusive lower bounds. `None` is unbounded.
fn later_start(a: Option<NaiveDate>, b: Option<NaiveDate>) -> Option<NaiveDate> {
    a.max(b)
}

/// Tighter of two exclusive upper bounds. `None` is unbounded.
fn earlier_end(a: Option<NaiveDate>, b: Option<NaiveDate>) -> Option<NaiveDate> {
    match (a, b) {
        (Some(left), Some(right)) => Some(left.min(right)),
        (bound, None) | (None, bound) => bound,
    }
}
