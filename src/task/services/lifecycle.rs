//! Service layer for task creation, editing, status transitions and the
//! kanban board.

use crate::{
    client::{ClientId, ClientRef},
    session::domain::SessionId,
    task::{
        domain::{
            DueWindow, KanbanColumns, NewTaskData, ParseDueWindowError, ParseTaskPriorityError,
            ParseTaskStatusError, Task, TaskDomainError, TaskEdit, TaskFilter, TaskId,
            TaskPriority, TaskStatus, TaskTitle, TransitionOutcome, TransitionPolicy,
            partition_by_status,
        },
        ports::{TaskRepository, TaskRepositoryError},
    },
};
use chrono::NaiveDate;
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Request payload for creating a task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTaskRequest {
    title: String,
    due_date: NaiveDate,
    description: Option<String>,
    status: Option<String>,
    priority: Option<String>,
    client: Option<ClientRef>,
    session_id: Option<SessionId>,
    assignee: Option<String>,
}

impl CreateTaskRequest {
    /// Creates a request with the required fields.
    #[must_use]
    pub fn new(title: impl Into<String>, due_date: NaiveDate) -> Self {
        Self {
            title: title.into(),
            due_date,
            description: None,
            status: None,
            priority: None,
            client: None,
            session_id: None,
            assignee: None,
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the initial status. Defaults to `todo`.
    #[must_use]
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    /// Sets the priority. Defaults to `medium`.
    #[must_use]
    pub fn with_priority(mut self, priority: impl Into<String>) -> Self {
        self.priority = Some(priority.into());
        self
    }

    /// Relates the task to a client.
    #[must_use]
    pub fn with_client(mut self, client: ClientRef) -> Self {
        self.client = Some(client);
        self
    }

    /// Relates the task to a session.
    #[must_use]
    pub const fn with_session(mut self, session_id: SessionId) -> Self {
        self.session_id = Some(session_id);
        self
    }

    /// Sets the assignee.
    #[must_use]
    pub fn with_assignee(mut self, assignee: impl Into<String>) -> Self {
        self.assignee = Some(assignee.into());
        self
    }
}

/// Request payload for editing task fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditTaskRequest {
    task_id: TaskId,
    title: Option<String>,
    description: Option<String>,
    priority: Option<String>,
    due_date: Option<NaiveDate>,
    client: Option<Option<ClientRef>>,
    session_id: Option<Option<SessionId>>,
    assignee: Option<String>,
}

impl EditTaskRequest {
    /// Creates an edit request that changes nothing yet.
    #[must_use]
    pub const fn new(task_id: TaskId) -> Self {
        Self {
            task_id,
            title: None,
            description: None,
            priority: None,
            due_date: None,
            client: None,
            session_id: None,
            assignee: None,
        }
    }

    /// Replaces the title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
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
    pub fn with_priority(mut self, priority: impl Into<String>) -> Self {
        self.priority = Some(priority.into());
        self
    }

    /// Replaces the due date.
    #[must_use]
    pub const fn with_due_date(mut self, due_date: NaiveDate) -> Self {
        self.due_date = Some(due_date);
        self
    }

    /// Replaces or clears the client.
    #[must_use]
    pub fn with_client(mut self, client: Option<ClientRef>) -> Self {
        self.client = Some(client);
        self
    }

    /// Replaces or clears the session.
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
}

/// Request payload for moving a task to another status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionTaskRequest {
    task_id: TaskId,
    target_status: String,
}

impl TransitionTaskRequest {
    /// Creates a transition request.
    #[must_use]
    pub fn new(task_id: TaskId, target_status: impl Into<String>) -> Self {
        Self {
            task_id,
            target_status: target_status.into(),
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn task_id(&self) -> TaskId {
        self.task_id
    }

    /// Returns the requested status string.
    #[must_use]
    pub fn target_status(&self) -> &str {
        &self.target_status
    }
}

/// Task list filters as submitted by a list view. Blank values mean "any".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskListRequest {
    status: String,
    priority: String,
    due: String,
    assignee: String,
    client_id: Option<ClientId>,
}

impl TaskListRequest {
    /// Creates a request that lists every task.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Filters by status.
    #[must_use]
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    /// Filters by priority.
    #[must_use]
    pub fn with_priority(mut self, priority: impl Into<String>) -> Self {
        self.priority = priority.into();
        self
    }

    /// Filters by due window (`overdue`, `today` or `upcoming`).
    #[must_use]
    pub fn with_due(mut self, due: impl Into<String>) -> Self {
        self.due = due.into();
        self
    }

    /// Filters by assignee.
    #[must_use]
    pub fn with_assignee(mut self, assignee: impl Into<String>) -> Self {
        self.assignee = assignee.into();
        self
    }

    /// Filters by client.
    #[must_use]
    pub const fn with_client(mut self, client_id: ClientId) -> Self {
        self.client_id = Some(client_id);
        self
    }

    /// Resolves the request into a repository filter.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::InvalidStatus`],
    /// [`TaskLifecycleError::InvalidPriority`] or
    /// [`TaskLifecycleError::InvalidDueWindow`] for malformed values.
    pub fn to_filter(&self, today: NaiveDate) -> TaskLifecycleResult<TaskFilter> {
        let mut filter = TaskFilter::new();
        if let Some(status) = non_blank(&self.status) {
            filter = filter.with_status(TaskStatus::try_from(status)?);
        }
        if let Some(priority) = non_blank(&self.priority) {
            filter = filter.with_priority(TaskPriority::try_from(priority)?);
        }
        if let Some(due) = non_blank(&self.due) {
            filter = filter.with_due_window(DueWindow::try_from(due)?, today);
        }
        if let Some(assignee) = non_blank(&self.assignee) {
            filter = filter.with_assignee(assignee);
        }
        if let Some(client_id) = self.client_id {
            filter = filter.with_client(client_id);
        }
        Ok(filter)
    }
}

fn non_blank(value: &str) -> Option<&str> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}

/// Service-level errors for task lifecycle operations.
#[derive(Debug, Error)]
pub enum TaskLifecycleError {
    /// The requested status is not a lifecycle state.
    #[error(transparent)]
    InvalidStatus(#[from] ParseTaskStatusError),
    /// The requested priority is unknown.
    #[error(transparent)]
    InvalidPriority(#[from] ParseTaskPriorityError),
    /// The requested due window is unknown.
    #[error(transparent)]
    InvalidDueWindow(#[from] ParseDueWindowError),
    /// No task exists with the identifier.
    #[error("task not found: {0}")]
    NotFound(TaskId),
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] TaskDomainError),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] TaskRepositoryError),
}

impl TaskLifecycleError {
    /// Returns `true` when the record store failed to complete a read or
    /// write.
    #[must_use]
    pub const fn is_persistence_failure(&self) -> bool {
        matches!(self, Self::Repository(TaskRepositoryError::Persistence(_)))
    }

    fn from_repository(err: TaskRepositoryError) -> Self {
        match err {
            TaskRepositoryError::NotFound(id) => Self::NotFound(id),
            other => Self::Repository(other),
        }
    }
}

/// Result type for task lifecycle service operations.
pub type TaskLifecycleResult<T> = Result<T, TaskLifecycleError>;

/// Task lifecycle orchestration service.
///
/// Every write goes to the repository before any derived view is rebuilt.
/// Nothing is cached between calls, so a failed write can never leave a
/// board out of step with storage. Concurrent transitions of one task are
/// not serialized; the store keeps the last write.
#[derive(Clone)]
pub struct TaskLifecycleService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
    policy: TransitionPolicy,
}

impl<R, C> TaskLifecycleService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    /// Creates a service with an unrestricted transition policy.
    #[must_use]
    pub fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self {
            repository,
            clock,
            policy: TransitionPolicy::unrestricted(),
        }
    }

    /// Replaces the transition policy.
    #[must_use]
    pub fn with_policy(mut self, policy: TransitionPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Returns the active transition policy.
    #[must_use]
    pub const fn policy(&self) -> &TransitionPolicy {
        &self.policy
    }

    /// Creates and stores a new task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError`] when input validation fails or the
    /// repository rejects persistence.
    pub async fn create_task(&self, request: CreateTaskRequest) -> TaskLifecycleResult<Task> {
        let CreateTaskRequest {
            title,
            due_date,
            description,
            status,
            priority,
            client,
            session_id,
            assignee,
        } = request;

        let data = NewTaskData {
            title: TaskTitle::new(title)?,
            description: description.unwrap_or_default(),
            status: status
                .as_deref()
                .map(TaskStatus::try_from)
                .transpose()?
                .unwrap_or_default(),
            priority: priority
                .as_deref()
                .map(TaskPriority::try_from)
                .transpose()?
                .unwrap_or_default(),
            due_date,
            client,
            session_id,
            assignee: assignee.unwrap_or_default(),
        };

        let task = Task::new(data, &*self.clock);
        self.repository.store(&task).await?;
        info!(task_id = %task.id(), status = %task.status(), "task created");
        Ok(task)
    }

    /// Applies field edits to an existing task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::NotFound`] when the task does not exist,
    /// a validation error for malformed fields, or
    /// [`TaskLifecycleError::Repository`] when persistence fails.
    pub async fn edit_task(&self, request: EditTaskRequest) -> TaskLifecycleResult<Task> {
        let EditTaskRequest {
            task_id,
            title,
            description,
            priority,
            due_date,
            client,
            session_id,
            assignee,
        } = request;

        let mut edit = TaskEdit::new();
        if let Some(value) = title {
            edit = edit.with_title(TaskTitle::new(value)?);
        }
        if let Some(value) = description {
            edit = edit.with_description(value);
        }
        if let Some(value) = priority {
            edit = edit.with_priority(TaskPriority::try_from(value.as_str())?);
        }
        if let Some(value) = due_date {
            edit = edit.with_due_date(value);
        }
        if let Some(value) = client {
            edit = edit.with_client(value);
        }
        if let Some(value) = session_id {
            edit = edit.with_session(value);
        }
        if let Some(value) = assignee {
            edit = edit.with_assignee(value);
        }

        let mut task = self.load(task_id).await?;
        if edit.is_empty() {
            return Ok(task);
        }
        task.apply_edit(edit, &*self.clock);
        self.repository
            .update(&task)
            .await
            .map_err(TaskLifecycleError::from_repository)?;
        info!(task_id = %task_id, "task edited");
        Ok(task)
    }

    /// Moves a task to the requested status and persists the change.
    ///
    /// The target is validated before any read or write. Requesting the
    /// current status returns the stored task without writing.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::InvalidStatus`] for an unknown target,
    /// [`TaskLifecycleError::NotFound`] when the task does not exist,
    /// [`TaskLifecycleError::Domain`] when the policy forbids the move, or
    /// [`TaskLifecycleError::Repository`] when the write does not complete.
    /// On any error the stored status is unchanged.
    pub async fn transition_task(
        &self,
        request: TransitionTaskRequest,
    ) -> TaskLifecycleResult<Task> {
        let target = TaskStatus::try_from(request.target_status())?;
        let task_id = request.task_id();

        let mut task = self.load(task_id).await?;
        let outcome = task.transition_to(target, &self.policy, &*self.clock)?;
        let TransitionOutcome::Changed { from } = outcome else {
            debug!(task_id = %task_id, status = %target, "transition is a no-op");
            return Ok(task);
        };

        let written = self
            .repository
            .update_status(task_id, target, task.updated_at())
            .await
            .inspect_err(|err| {
                warn!(task_id = %task_id, to = %target, error = %err, "status write failed");
            })?;
        if !written {
            warn!(task_id = %task_id, "task vanished before status write");
            return Err(TaskLifecycleError::NotFound(task_id));
        }

        info!(task_id = %task_id, from = %from, to = %target, "task status transitioned");
        Ok(task)
    }

    /// Handles a kanban card drop: one status write followed by a fresh
    /// read of the whole board.
    ///
    /// # Errors
    ///
    /// Returns the same errors as [`Self::transition_task`], or a repository
    /// error when the board cannot be re-read. No board is returned on
    /// failure; callers keep showing their previous one.
    pub async fn move_card(
        &self,
        task_id: TaskId,
        target_status: &str,
    ) -> TaskLifecycleResult<KanbanColumns> {
        self.transition_task(TransitionTaskRequest::new(task_id, target_status))
            .await?;
        self.kanban_board().await
    }

    /// Deletes a task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::NotFound`] when the task does not exist
    /// or [`TaskLifecycleError::Repository`] when persistence fails.
    pub async fn delete_task(&self, task_id: TaskId) -> TaskLifecycleResult<()> {
        let deleted = self.repository.delete(task_id).await?;
        if !deleted {
            return Err(TaskLifecycleError::NotFound(task_id));
        }
        info!(task_id = %task_id, "task deleted");
        Ok(())
    }

    /// Retrieves a task by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Repository`] when lookup fails.
    pub async fn find_task(&self, task_id: TaskId) -> TaskLifecycleResult<Option<Task>> {
        Ok(self.repository.find_by_id(task_id).await?)
    }

    /// Lists tasks matching the request filters.
    ///
    /// # Errors
    ///
    /// Returns a validation error for malformed filters, checked before the
    /// repository is queried, or [`TaskLifecycleError::Repository`] when
    /// the read fails.
    pub async fn list_tasks(&self, request: &TaskListRequest) -> TaskLifecycleResult<Vec<Task>> {
        let today = self.clock.local().date_naive();
        let filter = request.to_filter(today)?;
        Ok(self.repository.list(&filter).await?)
    }

    /// Builds the kanban board from the current task records.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Repository`] when the read fails.
    pub async fn kanban_board(&self) -> TaskLifecycleResult<KanbanColumns> {
        let tasks = self.repository.list(&TaskFilter::new()).await?;
        Ok(partition_by_status(tasks))
    }

    async fn load(&self, task_id: TaskId) -> TaskLifecycleResult<Task> {
        self.repository
            .find_by_id(task_id)
            .await?
            .ok_or(TaskLifecycleError::NotFound(task_id))
    }
}
