//! Then steps for deadline tracking BDD scenarios.

use super::world::{DeadlineWorld, run_async};
use atas::{
    ata::{domain::Assignment, ports::AtaRepository},
    deadline::TaskStatus,
};
use eyre::WrapErr;
use rstest_bdd_macros::then;

#[then("there are {count:usize} tasks")]
fn task_count(world: &DeadlineWorld, count: usize) -> Result<(), eyre::Report> {
    if world.tasks.len() != count {
        return Err(eyre::eyre!(
            "expected {count} tasks, found {}",
            world.tasks.len()
        ));
    }
    Ok(())
}

#[then(r#"the task for "{responsible}" is "{status}" with description "{description}""#)]
fn task_status_and_description(
    world: &DeadlineWorld,
    responsible: String,
    status: String,
    description: String,
) -> Result<(), eyre::Report> {
    let expected = TaskStatus::try_from(status.as_str())
        .map_err(|err| eyre::eyre!("invalid expected status in scenario: {err}"))?;
    let task = world.task_for(&responsible)?;

    if task.status() != expected {
        return Err(eyre::eyre!(
            "expected status {expected} for {responsible}, found {}",
            task.status()
        ));
    }
    if task.description() != description {
        return Err(eyre::eyre!(
            "expected description {description}, found {}",
            task.description()
        ));
    }
    Ok(())
}

#[then(r#"the task order is "{order}""#)]
fn task_order(world: &DeadlineWorld, order: String) -> Result<(), eyre::Report> {
    let expected: Vec<&str> = order.split(", ").collect();
    let actual: Vec<&str> = world.tasks.iter().map(|task| task.responsible()).collect();

    if actual != expected {
        return Err(eyre::eyre!("expected order {expected:?}, found {actual:?}"));
    }
    Ok(())
}

#[then(r#"the stored completion date for "{responsible}" is "{date}""#)]
fn stored_completion_date(
    world: &DeadlineWorld,
    responsible: String,
    date: String,
) -> Result<(), eyre::Report> {
    let assignment = stored_assignment(world, &responsible)?;

    if assignment.completion_date.as_deref() != Some(date.as_str()) {
        return Err(eyre::eyre!(
            "expected completion date {date}, found {:?}",
            assignment.completion_date
        ));
    }
    Ok(())
}

#[then(r#"the stored completion date for "{responsible}" is empty"#)]
fn stored_completion_date_empty(
    world: &DeadlineWorld,
    responsible: String,
) -> Result<(), eyre::Report> {
    let assignment = stored_assignment(world, &responsible)?;

    if assignment.completed || assignment.completion_date.is_some() {
        return Err(eyre::eyre!(
            "expected an open assignment, found completed={} date={:?}",
            assignment.completed,
            assignment.completion_date
        ));
    }
    Ok(())
}

fn stored_assignment(world: &DeadlineWorld, responsible: &str) -> Result<Assignment, eyre::Report> {
    let records = run_async(world.repository.load_all()).wrap_err("load records")?;
    records
        .into_iter()
        .flat_map(|record| record.agenda)
        .flat_map(|item| item.assignments)
        .find(|assignment| assignment.responsible == responsible)
        .ok_or_else(|| eyre::eyre!("no stored assignment for {responsible}"))
}
