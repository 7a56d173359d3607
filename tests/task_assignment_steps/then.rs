//! Then steps for task assignment BDD scenarios.

use super::world::{AssignmentWorld, run_async};
use rstest_bdd_macros::then;
use taskboard::{domain::EntityRef, services::ServiceError};

#[then(r#"the task is assigned to "{developer}""#)]
fn task_is_assigned_to(world: &AssignmentWorld, developer: String) -> Result<(), eyre::Report> {
    let developer_id = world.developer(&developer)?;
    let task = run_async(world.tasks.get_by_id(world.task()?))?;

    if task.assigned_to_id != Some(developer_id) {
        return Err(eyre::eyre!(
            "expected assignee {developer_id:?}, found {:?}",
            task.assigned_to_id
        ));
    }
    if task.assigned_to_name.as_deref() != Some(developer.as_str()) {
        return Err(eyre::eyre!(
            "expected assignee name {developer}, found {:?}",
            task.assigned_to_name
        ));
    }

    Ok(())
}

#[then("the assignment fails with a cross-project error")]
fn assignment_fails_cross_project(world: &AssignmentWorld) -> Result<(), eyre::Report> {
    let result = world
        .last_assignment
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing assignment result"))?;

    if !matches!(result, Err(ServiceError::CrossProjectAssignment { .. })) {
        return Err(eyre::eyre!(
            "expected CrossProjectAssignment error, got {result:?}"
        ));
    }

    Ok(())
}

#[then("the task has no assignee")]
fn task_has_no_assignee(world: &AssignmentWorld) -> Result<(), eyre::Report> {
    let task = run_async(world.tasks.get_by_id(world.task()?))?;

    if let Some(assignee) = task.assigned_to_id {
        return Err(eyre::eyre!("expected no assignee, found {assignee:?}"));
    }

    Ok(())
}

#[then("the deletion fails because {count:u64} task depends on it")]
fn deletion_fails_with_dependents(world: &AssignmentWorld, count: u64) -> Result<(), eyre::Report> {
    let result = world
        .last_deletion
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing deletion result"))?;

    match result {
        Err(ServiceError::HasDependents {
            entity: EntityRef::Developer(_),
            tasks,
            ..
        }) if *tasks == count => Ok(()),
        other => Err(eyre::eyre!(
            "expected HasDependents with {count} task(s), got {other:?}"
        )),
    }
}
