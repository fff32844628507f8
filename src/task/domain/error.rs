//! Error types for task domain validation and parsing.

use super::{TaskId, TaskStatus};
use thiserror::Error;

/// Errors returned while constructing or mutating domain task values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The task title is empty after trimming.
    #[error("task title must not be empty")]
    EmptyTitle,

    /// The task title exceeds the storable length.
    #[error("task title is {length} characters long, the limit is {max}")]
    TitleTooLong {
        /// Length of the rejected title in characters.
        length: usize,
        /// Maximum permitted length.
        max: usize,
    },

    /// The requested status value is not one of the lifecycle states.
    #[error(transparent)]
    InvalidStatus(#[from] ParseTaskStatusError),

    /// The configured transition policy forbids the requested move.
    #[error("task {task_id} cannot transition from {from} to {to}")]
    TransitionNotAllowed {
        /// Task whose transition was rejected.
        task_id: TaskId,
        /// Current lifecycle status.
        from: TaskStatus,
        /// Requested lifecycle status.
        to: TaskStatus,
    },
}

/// Error returned while parsing task statuses from requests or persistence.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task status: {0}")]
pub struct ParseTaskStatusError(pub String);

/// Error returned while parsing task priorities.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task priority: {0}")]
pub struct ParseTaskPriorityError(pub String);

/// Error returned while parsing due-date filter windows.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown due window: {0}")]
pub struct ParseDueWindowError(pub String);
