//! Task list filtering.

use super::{ParseDueWindowError, Task, TaskPriority, TaskStatus};
use crate::{client::ClientId, session::domain::SessionId};
use chrono::{Days, NaiveDate};
use std::fmt;

/// Relative due-date windows offered by the task list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DueWindow {
    /// Due before today and not yet completed.
    Overdue,
    /// Due today.
    Today,
    /// Due today or within the following seven days.
    Upcoming,
}

impl DueWindow {
    /// Number of days after today covered by [`DueWindow::Upcoming`].
    pub const UPCOMING_DAYS: u64 = 7;

    /// Returns the canonical query representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Overdue => "overdue",
            Self::Today => "today",
            Self::Upcoming => "upcoming",
        }
    }
}

impl fmt::Display for DueWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for DueWindow {
    type Error = ParseDueWindowError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "overdue" => Ok(Self::Overdue),
            "today" => Ok(Self::Today),
            "upcoming" => Ok(Self::Upcoming),
            _ => Err(ParseDueWindowError(value.to_owned())),
        }
    }
}

/// Criteria applied when listing tasks. The default filter matches every
/// task.
///
/// Due-date bounds are a half-open range `[due_from, due_before)`; a missing
/// bound is unbounded on that side.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskFilter {
    status: Option<TaskStatus>,
    priority: Option<TaskPriority>,
    client_id: Option<ClientId>,
    session_id: Option<SessionId>,
    assignee: Option<String>,
    due_from: Option<NaiveDate>,
    due_before: Option<NaiveDate>,
    exclude_completed: bool,
}

impl TaskFilter {
    /// Creates a filter matching every task.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Restricts to one status.
    #[must_use]
    pub const fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Restricts to one priority.
    #[must_use]
    pub const fn with_priority(mut self, priority: TaskPriority) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Restricts to tasks related to one client.
    #[must_use]
    pub const fn with_client(mut self, client_id: ClientId) -> Self {
        self.client_id = Some(client_id);
        self
    }

    /// Restricts to tasks related to one session.
    #[must_use]
    pub const fn with_session(mut self, session_id: SessionId) -> Self {
        self.session_id = Some(session_id);
        self
    }

    /// Restricts to one assignee (exact match after trimming).
    #[must_use]
    pub fn with_assignee(mut self, assignee: impl Into<String>) -> Self {
        let raw: String = assignee.into();
        self.assignee = Some(raw.trim().to_owned());
        self
    }

    /// Restricts due dates to the half-open range `[from, before)`.
    #[must_use]
    pub const fn with_due_range(mut self, from: Option<NaiveDate>, before: Option<NaiveDate>) -> Self {
        self.due_from = from;
        self.due_before = before;
        self
    }

    /// Restricts due dates to `window`, resolved against `today`.
    #[must_use]
    pub fn with_due_window(mut self, window: DueWindow, today: NaiveDate) -> Self {
        match window {
            DueWindow::Overdue => {
                self.due_from = None;
                self.due_before = Some(today);
                self.exclude_completed = true;
            }
            DueWindow::Today => {
                self.due_from = Some(today);
                self.due_before = today.succ_opt();
            }
            DueWindow::Upcoming => {
                self.due_from = Some(today);
                self.due_before = today.checked_add_days(Days::new(DueWindow::UPCOMING_DAYS + 1));
            }
        }
        self
    }

    /// Returns the status restriction.
    #[must_use]
    pub const fn status(&self) -> Option<TaskStatus> {
        self.status
    }

    /// Returns the priority restriction.
    #[must_use]
    pub const fn priority(&self) -> Option<TaskPriority> {
        self.priority
    }

    /// Returns the client restriction.
    #[must_use]
    pub const fn client_id(&self) -> Option<ClientId> {
        self.client_id
    }

    /// Returns the session restriction.
    #[must_use]
    pub const fn session_id(&self) -> Option<SessionId> {
        self.session_id
    }

    /// Returns the assignee restriction.
    #[must_use]
    pub fn assignee(&self) -> Option<&str> {
        self.assignee.as_deref()
    }

    /// Returns the inclusive lower due-date bound.
    #[must_use]
    pub const fn due_from(&self) -> Option<NaiveDate> {
        self.due_from
    }

    /// Returns the exclusive upper due-date bound.
    #[must_use]
    pub const fn due_before(&self) -> Option<NaiveDate> {
        self.due_before
    }

    /// Returns whether completed tasks are excluded.
    #[must_use]
    pub const fn excludes_completed(&self) -> bool {
        self.exclude_completed
    }

    /// Returns whether `task` satisfies every criterion.
    #[must_use]
    pub fn matches(&self, task: &Task) -> bool {
        let due = task.due_date();
        self.status.is_none_or(|status| task.status() == status)
            && self.priority.is_none_or(|priority| task.priority() == priority)
            && self
                .client_id
                .is_none_or(|id| task.client().is_some_and(|client| client.id() == id))
            && self
                .session_id
                .is_none_or(|id| task.session_id() == Some(id))
            && self
                .assignee
                .as_deref()
                .is_none_or(|assignee| task.assignee() == assignee)
            && self.due_from.is_none_or(|from| due >= from)
            && self.due_before.is_none_or(|before| due < before)
            && !(self.exclude_completed && task.status() == TaskStatus::Completed)
    }
}
