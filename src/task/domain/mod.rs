//! Domain model for the task lifecycle.
//!
//! Tasks carry a single authoritative status. Kanban columns and filtered
//! lists are derived from it on demand and never stored.

mod error;
mod filter;
mod ids;
mod kanban;
mod lifecycle;
mod policy;
mod status;
mod task;

pub use error::{ParseDueWindowError, ParseTaskPriorityError, ParseTaskStatusError, TaskDomainError};
pub use filter::{DueWindow, TaskFilter};
pub use ids::{TaskId, TaskTitle};
pub use kanban::{KanbanColumns, partition_by_status};
pub use lifecycle::transition;
pub use policy::TransitionPolicy;
pub use status::{TaskPriority, TaskStatus};
pub use task::{
    DEFAULT_ASSIGNEE, NewTaskData, PersistedTaskData, Task, TaskEdit, TransitionOutcome,
};
