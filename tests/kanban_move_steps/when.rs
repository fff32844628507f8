//! When steps for kanban card move BDD scenarios.

use super::world::{KanbanWorld, run_async};
use rstest_bdd_macros::when;

#[when(r#"card "{title}" is moved to "{target}""#)]
fn move_card(world: &mut KanbanWorld, title: String, target: String) -> Result<(), eyre::Report> {
    let task_id = world.task_id(&title)?;
    let result = run_async(world.service.move_card(task_id, &target));
    world.last_move_result = Some(result);
    Ok(())
}
