//! Pure status transition over a task snapshot.

use super::{Task, TaskDomainError, TaskStatus, TransitionPolicy};
use mockable::Clock;

/// Returns a copy of `task` moved to the status named by `target`.
///
/// The target is parsed before anything else, so a malformed value never
/// produces a partially updated task. Moving to the current status returns
/// an identical copy.
///
/// # Errors
///
/// Returns [`TaskDomainError::InvalidStatus`] when `target` is not a known
/// status, or [`TaskDomainError::TransitionNotAllowed`] when `policy`
/// forbids the move.
pub fn transition(
    task: &Task,
    target: &str,
    policy: &TransitionPolicy,
    clock: &impl Clock,
) -> Result<Task, TaskDomainError> {
    let status = TaskStatus::try_from(target)?;
    let mut next = task.clone();
    next.transition_to(status, policy, clock)?;
    Ok(next)
}
