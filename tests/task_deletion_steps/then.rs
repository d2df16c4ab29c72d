//! Then steps for task deletion BDD scenarios.

use super::world::{TaskDeletionWorld, run_async};
use eyre::{WrapErr, ensure};
use rstest_bdd_macros::then;
use taskboard::task::services::TaskLifecycleError;

#[then("the deletion is permitted")]
fn deletion_permitted(world: &TaskDeletionWorld) -> Result<(), eyre::Report> {
    match world.last_deletion.as_ref() {
        Some(Ok(())) => Ok(()),
        Some(Err(err)) => Err(eyre::eyre!("expected deletion to succeed, got: {err}")),
        None => Err(eyre::eyre!("no deletion was attempted")),
    }
}

#[then("the deletion is forbidden")]
fn deletion_forbidden(world: &TaskDeletionWorld) -> Result<(), eyre::Report> {
    match world.last_deletion.as_ref() {
        Some(Err(TaskLifecycleError::Forbidden { .. })) => Ok(()),
        Some(other) => Err(eyre::eyre!("expected forbidden deletion, got: {other:?}")),
        None => Err(eyre::eyre!("no deletion was attempted")),
    }
}

#[then(r#"no task titled "{title}" remains"#)]
fn task_removed(world: &TaskDeletionWorld, title: String) -> Result<(), eyre::Report> {
    let task_id = world.task_id(&title)?;
    let found = run_async(world.service.find_by_id(task_id)).wrap_err("look up deleted task")?;
    ensure!(found.is_none(), "task {title} should have been removed");
    Ok(())
}

#[then(r#"the task titled "{title}" remains"#)]
fn task_retained(world: &TaskDeletionWorld, title: String) -> Result<(), eyre::Report> {
    let task_id = world.task_id(&title)?;
    let found = run_async(world.service.find_by_id(task_id)).wrap_err("look up retained task")?;
    ensure!(found.is_some(), "task {title} should still exist");
    Ok(())
}

#[then(r#"the task titled "{title}" is done"#)]
fn task_is_done(world: &TaskDeletionWorld, title: String) -> Result<(), eyre::Report> {
    let task_id = world.task_id(&title)?;
    let task = run_async(world.service.find_by_id(task_id))
        .wrap_err("look up toggled task")?
        .ok_or_else(|| eyre::eyre!("task {title} should still exist"))?;
    ensure!(task.is_done(), "task {title} should be done");
    Ok(())
}
