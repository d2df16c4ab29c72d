//! When steps for task deletion BDD scenarios.

use super::world::{TaskDeletionWorld, run_async};
use rstest_bdd_macros::when;

#[when(r#""{name}" deletes the task titled "{title}""#)]
fn delete_task(
    world: &mut TaskDeletionWorld,
    name: String,
    title: String,
) -> Result<(), eyre::Report> {
    let actor = world.actor(&name)?.clone();
    let task_id = world.task_id(&title)?;
    let result = run_async(world.service.delete(&actor, task_id));
    world.last_deletion = Some(result);
    Ok(())
}
