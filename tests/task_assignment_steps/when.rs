//! When steps for task assignment BDD scenarios.

use super::world::{AssignmentWorld, run_async};
use rstest_bdd_macros::when;

#[when(r#"the task is assigned to "{developer}""#)]
fn assign_task(world: &mut AssignmentWorld, developer: String) -> Result<(), eyre::Report> {
    let developer_id = world.developer(&developer)?;
    let task_id = world.task()?;

    let result = run_async(world.tasks.assign_to_developer(task_id, developer_id));
    world.last_assignment = Some(result);
    Ok(())
}

#[when(r#"developer "{developer}" is deleted"#)]
fn delete_developer(world: &mut AssignmentWorld, developer: String) -> Result<(), eyre::Report> {
    let developer_id = world.developer(&developer)?;

    let result = run_async(world.developers.delete(developer_id));
    world.last_deletion = Some(result);
    Ok(())
}
