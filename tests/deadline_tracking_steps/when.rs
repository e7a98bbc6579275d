//! When steps for deadline tracking BDD scenarios.

use super::world::{DeadlineWorld, run_async};
use eyre::WrapErr;
use rstest_bdd_macros::when;

#[when("the tasks are projected")]
fn tasks_are_projected(world: &mut DeadlineWorld) -> Result<(), eyre::Report> {
    let service = world.service()?;
    world.tasks = run_async(service.tasks()).wrap_err("project tasks")?;
    Ok(())
}

#[when(r#"the task for "{responsible}" is marked as completed"#)]
fn task_marked_completed(
    world: &mut DeadlineWorld,
    responsible: String,
) -> Result<(), eyre::Report> {
    set_completion(world, &responsible, true)
}

#[when(r#"the task for "{responsible}" is reopened"#)]
fn task_reopened(world: &mut DeadlineWorld, responsible: String) -> Result<(), eyre::Report> {
    set_completion(world, &responsible, false)
}

fn set_completion(
    world: &mut DeadlineWorld,
    responsible: &str,
    completed: bool,
) -> Result<(), eyre::Report> {
    tasks_are_projected(world)?;
    let task_id = world.task_for(responsible)?.id().clone();
    let service = world.service()?;

    run_async(service.set_completion(&task_id, completed)).wrap_err("update completion")?;
    world.tasks = run_async(service.tasks()).wrap_err("project tasks")?;
    Ok(())
}
