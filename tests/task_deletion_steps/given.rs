//! Given steps for task deletion BDD scenarios.

use super::world::{TaskDeletionWorld, run_async};
use eyre::WrapErr;
use rstest_bdd_macros::given;
use taskboard::security::{Actor, UserId};
use taskboard::task::services::CreateTaskRequest;

#[given(r#"a regular user "{name}""#)]
fn regular_user(world: &mut TaskDeletionWorld, name: String) {
    world.actors.insert(name, Actor::regular(UserId::new()));
}

#[given(r#"an administrator "{name}""#)]
fn administrator(world: &mut TaskDeletionWorld, name: String) {
    world
        .actors
        .insert(name, Actor::administrator(UserId::new()));
}

#[given(r#""{name}" owns a task titled "{title}""#)]
fn owned_task(
    world: &mut TaskDeletionWorld,
    name: String,
    title: String,
) -> Result<(), eyre::Report> {
    let owner = world.actor(&name)?.clone();
    let created = run_async(
        world
            .service
            .create(CreateTaskRequest::new(title.clone(), "scenario body"), Some(&owner)),
    )
    .wrap_err("create owned task for deletion scenario")?;
    world.tasks.insert(title, created.id());
    Ok(())
}

#[given(r#"an anonymous task titled "{title}""#)]
fn anonymous_task(world: &mut TaskDeletionWorld, title: String) -> Result<(), eyre::Report> {
    let created = run_async(
        world
            .service
            .create(CreateTaskRequest::new(title.clone(), "scenario body"), None),
    )
    .wrap_err("create anonymous task for deletion scenario")?;
    world.tasks.insert(title, created.id());
    Ok(())
}

#[given(r#"the task titled "{title}" has been toggled"#)]
fn toggled_task(world: &mut TaskDeletionWorld, title: String) -> Result<(), eyre::Report> {
    let task_id = world.task_id(&title)?;
    run_async(world.service.toggle(task_id)).wrap_err("toggle task for deletion scenario")?;
    Ok(())
}
