//! Task aggregate root and related lifecycle types.

use super::{TaskDomainError, TaskId, TaskPriority, TaskStatus, TaskTitle, TransitionPolicy};
use crate::{client::ClientRef, session::domain::SessionId};
use chrono::{DateTime, NaiveDate, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Default assignee recorded when a request leaves it blank.
pub const DEFAULT_ASSIGNEE: &str = "admin";

/// Result of applying a status transition to a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionOutcome {
    /// The task already had the requested status; nothing changed.
    Unchanged,
    /// The status changed.
    Changed {
        /// Status held before the transition.
        from: TaskStatus,
    },
}

impl TransitionOutcome {
    /// Returns `true` when the task status changed.
    #[must_use]
    pub const fn is_changed(self) -> bool {
        matches!(self, Self::Changed { .. })
    }
}

/// Task aggregate root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    title: TaskTitle,
    description: String,
    status: TaskStatus,
    priority: TaskPriority,
    due_date: NaiveDate,
    client: Option<ClientRef>,
    session_id: Option<SessionId>,
    assignee: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Parameter object for creating a new task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTaskData {
    /// Validated task title.
    pub title: TaskTitle,
    /// Free-form description, may be empty.
    pub description: String,
    /// Initial lifecycle status.
    pub status: TaskStatus,
    /// Task priority.
    pub priority: TaskPriority,
    /// Calendar date the task is due.
    pub due_date: NaiveDate,
    /// Related client, if any.
    pub client: Option<ClientRef>,
    /// Related session, if any.
    pub session_id: Option<SessionId>,
    /// Person responsible for the task.
    pub assignee: String,
}

/// Parameter object for reconstructing a persisted task aggregate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTaskData {
    /// Persisted task identifier.
    pub id: TaskId,
    /// Persisted title.
    pub title: TaskTitle,
    /// Persisted description.
    pub description: String,
    /// Persisted lifecycle status.
    pub status: TaskStatus,
    /// Persisted priority.
    pub priority: TaskPriority,
    /// Persisted due date.
    pub due_date: NaiveDate,
    /// Persisted client reference, if any.
    pub client: Option<ClientRef>,
    /// Persisted session reference, if any.
    pub session_id: Option<SessionId>,
    /// Persisted assignee.
    pub assignee: String,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted latest modification timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Field edits applied to an existing task. Status is deliberately absent:
/// it only changes through [`Task::transition_to`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskEdit {
    title: Option<TaskTitle>,
    description: Option<String>,
    priority: Option<TaskPriority>,
    due_date: Option<NaiveDate>,
    client: Option<Option<ClientRef>>,
    session_id: Option<Option<SessionId>>,
    assignee: Option<String>,
}

impl TaskEdit {
    /// Creates an empty edit.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the title.
    #[must_use]
    pub fn with_title(mut self, title: TaskTitle) -> Self {
        self.title = Some(title);
        self
    }

    /// Replaces the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Replaces the priority.
    #[must_use]
    pub const fn with_priority(mut self, priority: TaskPriority) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Replaces the due date.
    #[must_use]
    pub const fn with_due_date(mut self, due_date: NaiveDate) -> Self {
        self.due_date = Some(due_date);
        self
    }

    /// Replaces or clears the client reference.
    #[must_use]
    pub fn with_client(mut self, client: Option<ClientRef>) -> Self {
        self.client = Some(client);
        self
    }

    /// Replaces or clears the session reference.
    #[must_use]
    pub const fn with_session(mut self, session_id: Option<SessionId>) -> Self {
        self.session_id = Some(session_id);
        self
    }

    /// Replaces the assignee.
    #[must_use]
    pub fn with_assignee(mut self, assignee: impl Into<String>) -> Self {
        self.assignee = Some(assignee.into());
        self
    }

    /// Returns `true` when the edit changes nothing.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.priority.is_none()
            && self.due_date.is_none()
            && self.client.is_none()
            && self.session_id.is_none()
            && self.assignee.is_none()
    }
}

impl Task {
    /// Creates a new task.
    #[must_use]
    pub fn new(data: NewTaskData, clock: &impl Clock) -> Self {
        let timestamp = clock.utc();
        Self {
            id: TaskId::new(),
            title: data.title,
            description: data.description,
            status: data.status,
            priority: data.priority,
            due_date: data.due_date,
            client: data.client,
            session_id: data.session_id,
            assignee: normalize_assignee(data.assignee),
            created_at: timestamp,
            updated_at: timestamp,
        }
    }

    /// Reconstructs a task from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        Self {
            id: data.id,
            title: data.title,
            description: data.description,
            status: data.status,
            priority: data.priority,
            due_date: data.due_date,
            client: data.client,
            session_id: data.session_id,
            assignee: data.assignee,
            created_at: data.created_at,
            updated_at: data.updated_at,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the task title.
    #[must_use]
    pub const fn title(&self) -> &TaskTitle {
        &self.title
    }

    /// Returns the task description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the lifecycle status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the task priority.
    #[must_use]
    pub const fn priority(&self) -> TaskPriority {
        self.priority
    }

    /// Returns the due date.
    #[must_use]
    pub const fn due_date(&self) -> NaiveDate {
        self.due_date
    }

    /// Returns the related client, if any.
    #[must_use]
    pub const fn client(&self) -> Option<&ClientRef> {
        self.client.as_ref()
    }

    /// Returns the related session, if any.
    #[must_use]
    pub const fn session_id(&self) -> Option<SessionId> {
        self.session_id
    }

    /// Returns the assignee.
    #[must_use]
    pub fn assignee(&self) -> &str {
        &self.assignee
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the latest modification timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Moves the task to `target` when `policy` permits it.
    ///
    /// Requesting the current status succeeds without touching the task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::TransitionNotAllowed`] when the policy
    /// rejects the move. The task is left unchanged.
    pub fn transition_to(
        &mut self,
        target: TaskStatus,
        policy: &TransitionPolicy,
        clock: &impl Clock,
    ) -> Result<TransitionOutcome, TaskDomainError> {
        let from = self.status;
        if from == target {
            return Ok(TransitionOutcome::Unchanged);
        }
        if !policy.allows(from, target) {
            return Err(TaskDomainError::TransitionNotAllowed {
                task_id: self.id,
                from,
                to: target,
            });
        }
        self.status = target;
        self.touch(clock);
        Ok(TransitionOutcome::Changed { from })
    }

    /// Applies field edits. An empty edit leaves the timestamp untouched.
    pub fn apply_edit(&mut self, edit: TaskEdit, clock: &impl Clock) {
        if edit.is_empty() {
            return;
        }
        let TaskEdit {
            title,
            description,
            priority,
            due_date,
            client,
            session_id,
            assignee,
        } = edit;

        if let Some(value) = title {
            self.title = value;
        }
        if let Some(value) = description {
            self.description = value;
        }
        if let Some(value) = priority {
            self.priority = value;
        }
        if let Some(value) = due_date {
            self.due_date = value;
        }
        if let Some(value) = client {
            self.client = value;
        }
        if let Some(value) = session_id {
            self.session_id = value;
        }
        if let Some(value) = assignee {
            self.assignee = normalize_assignee(value);
        }
        self.touch(clock);
    }

    /// Updates the `updated_at` timestamp to the current clock time.
    fn touch(&mut self, clock: &impl Clock) {
        self.updated_at = clock.utc();
    }
}

fn normalize_assignee(value: String) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        DEFAULT_ASSIGNEE.to_owned()
    } else {
        trimmed.to_owned()
    }
}
