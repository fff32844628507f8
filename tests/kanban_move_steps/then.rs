//! Then steps for kanban card move BDD scenarios.

use super::world::{KanbanWorld, run_async};
use caseboard::task::{
    domain::{TaskDomainError, TaskStatus},
    services::TaskLifecycleError,
};
use rstest_bdd_macros::then;

fn expected_status(raw: &str) -> Result<TaskStatus, eyre::Report> {
    TaskStatus::try_from(raw).map_err(|err| eyre::eyre!("invalid status in scenario: {err}"))
}

#[then(r#"the "{status}" column count is {count:usize}"#)]
fn column_count_is(world: &KanbanWorld, status: String, count: usize) -> Result<(), eyre::Report> {
    let column = expected_status(&status)?;
    let board = match world.last_move_result.as_ref() {
        Some(Ok(board)) => board,
        other => return Err(eyre::eyre!("expected a rebuilt board, got {other:?}")),
    };
    let actual = board.count(column);
    if actual != count {
        return Err(eyre::eyre!("expected {count} tasks in {status}, found {actual}"));
    }
    Ok(())
}

#[then(r#"task "{title}" is in "{status}""#)]
fn task_is_in(world: &KanbanWorld, title: String, status: String) -> Result<(), eyre::Report> {
    let expected = expected_status(&status)?;
    let task_id = world.task_id(&title)?;
    let stored = run_async(world.service.find_task(task_id))
        .map_err(|err| eyre::eyre!("lookup failed: {err}"))?
        .ok_or_else(|| eyre::eyre!("task {title} missing from store"))?;

    if stored.status() != expected {
        return Err(eyre::eyre!(
            "expected {title} in {expected}, found {}",
            stored.status()
        ));
    }
    Ok(())
}

#[then("the move fails with an invalid status error")]
fn move_fails_with_invalid_status(world: &KanbanWorld) -> Result<(), eyre::Report> {
    let result = world
        .last_move_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing move result"))?;

    if !matches!(result, Err(TaskLifecycleError::InvalidStatus(_))) {
        return Err(eyre::eyre!("expected InvalidStatus error, got {result:?}"));
    }
    Ok(())
}

#[then("the move fails with a transition not allowed error")]
fn move_fails_with_transition_not_allowed(world: &KanbanWorld) -> Result<(), eyre::Report> {
    let result = world
        .last_move_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing move result"))?;

    if !matches!(
        result,
        Err(TaskLifecycleError::Domain(
            TaskDomainError::TransitionNotAllowed { .. }
        ))
    ) {
        return Err(eyre::eyre!(
            "expected TransitionNotAllowed error, got {result:?}"
        ));
    }
    Ok(())
}
