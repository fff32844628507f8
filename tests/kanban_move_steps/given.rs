//! Given steps for kanban card move BDD scenarios.

use std::sync::Arc;

use super::world::{KanbanWorld, run_async};
use caseboard::task::{
    adapters::memory::InMemoryTaskRepository, domain::TransitionPolicy,
    services::{CreateTaskRequest, TaskLifecycleService},
};
use chrono::NaiveDate;
use eyre::WrapErr;
use mockable::DefaultClock;
use rstest_bdd_macros::given;

#[given("a sequential board")]
fn sequential_board(world: &mut KanbanWorld) {
    world.service = TaskLifecycleService::new(
        Arc::new(InMemoryTaskRepository::new()),
        Arc::new(DefaultClock),
    )
    .with_policy(TransitionPolicy::sequential());
}

#[given(r#"tasks "{first}", "{second}" and "{third}" in todo"#)]
fn tasks_in_todo(
    world: &mut KanbanWorld,
    first: String,
    second: String,
    third: String,
) -> Result<(), eyre::Report> {
    let due = NaiveDate::from_ymd_opt(2024, 5, 2)
        .ok_or_else(|| eyre::eyre!("invalid scenario due date"))?;
    for title in [first, second, third] {
        let task = run_async(
            world
                .service
                .create_task(CreateTaskRequest::new(title, due)),
        )
        .wrap_err("create task for kanban scenario")?;
        world.tasks.push(task);
    }
    Ok(())
}
