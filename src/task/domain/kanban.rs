//! Kanban column partitioning.

use super::{Task, TaskId, TaskStatus};
use serde::Serialize;

/// All tasks grouped into one column per status.
///
/// Columns are derived from each task's single authoritative status; the
/// board holds no state of its own. Rebuild it after every write.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct KanbanColumns {
    todo: Vec<Task>,
    #[serde(rename = "in-progress")]
    in_progress: Vec<Task>,
    completed: Vec<Task>,
}

impl KanbanColumns {
    /// Returns the tasks in the column for `status`.
    #[must_use]
    pub fn column(&self, status: TaskStatus) -> &[Task] {
        match status {
            TaskStatus::Todo => &self.todo,
            TaskStatus::InProgress => &self.in_progress,
            TaskStatus::Completed => &self.completed,
        }
    }

    /// Returns the number of tasks in the column for `status`.
    #[must_use]
    pub fn count(&self, status: TaskStatus) -> usize {
        self.column(status).len()
    }

    /// Returns the total number of tasks on the board.
    #[must_use]
    pub fn len(&self) -> usize {
        self.todo.len() + self.in_progress.len() + self.completed.len()
    }

    /// Returns `true` when the board holds no tasks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterates the columns in display order.
    pub fn iter(&self) -> impl Iterator<Item = (TaskStatus, &[Task])> {
        TaskStatus::ALL
            .into_iter()
            .map(move |status| (status, self.column(status)))
    }

    /// Returns the status of the column holding `task_id`, if present.
    #[must_use]
    pub fn status_of(&self, task_id: TaskId) -> Option<TaskStatus> {
        self.iter().find_map(|(status, tasks)| {
            tasks
                .iter()
                .any(|task| task.id() == task_id)
                .then_some(status)
        })
    }

    fn column_mut(&mut self, status: TaskStatus) -> &mut Vec<Task> {
        match status {
            TaskStatus::Todo => &mut self.todo,
            TaskStatus::InProgress => &mut self.in_progress,
            TaskStatus::Completed => &mut self.completed,
        }
    }
}

/// Partitions `tasks` by status in a single pass.
///
/// The partition is stable: tasks keep their input order within a column.
#[must_use]
pub fn partition_by_status(tasks: impl IntoIterator<Item = Task>) -> KanbanColumns {
    let mut columns = KanbanColumns::default();
    for task in tasks {
        columns.column_mut(task.status()).push(task);
    }
    columns
}
