//! Given steps for task assignment BDD scenarios.

use super::world::{AssignmentWorld, run_async};
use eyre::WrapErr;
use rstest_bdd_macros::given;
use taskboard::services::{CreateDeveloperRequest, CreateProjectRequest, CreateTaskRequest};

#[given(r#"a project named "{name}""#)]
fn project_named(world: &mut AssignmentWorld, name: String) -> Result<(), eyre::Report> {
    let created = run_async(world.projects.create(CreateProjectRequest::new(name.clone())))
        .wrap_err("create project for assignment scenario")?;
    world.project_ids.insert(name, created.id);
    Ok(())
}

#[given(r#"a developer "{name}" with email "{email}" in project "{project}""#)]
fn developer_in_project(
    world: &mut AssignmentWorld,
    name: String,
    email: String,
    project: String,
) -> Result<(), eyre::Report> {
    let project_id = world.project(&project)?;
    let request = CreateDeveloperRequest::new(name.clone(), email).with_project(project_id);
    let created = run_async(world.developers.create(request))
        .wrap_err("create project member for assignment scenario")?;
    world.developer_ids.insert(name, created.id);
    Ok(())
}

#[given(r#"a developer "{name}" with email "{email}" without a project"#)]
fn developer_without_project(
    world: &mut AssignmentWorld,
    name: String,
    email: String,
) -> Result<(), eyre::Report> {
    let created = run_async(
        world
            .developers
            .create(CreateDeveloperRequest::new(name.clone(), email)),
    )
    .wrap_err("create unassigned developer for assignment scenario")?;
    world.developer_ids.insert(name, created.id);
    Ok(())
}

#[given(r#"a task "{title}" in project "{project}""#)]
fn task_in_project(
    world: &mut AssignmentWorld,
    title: String,
    project: String,
) -> Result<(), eyre::Report> {
    let project_id = world.project(&project)?;
    let created = run_async(world.tasks.create(CreateTaskRequest::new(title, project_id)))
        .wrap_err("create task for assignment scenario")?;
    world.current_task = Some(created.id);
    Ok(())
}

#[given(r#""{developer}" joins project "{project}""#)]
fn developer_joins_project(
    world: &mut AssignmentWorld,
    developer: String,
    project: String,
) -> Result<(), eyre::Report> {
    let developer_id = world.developer(&developer)?;
    let project_id = world.project(&project)?;
    run_async(world.developers.assign_to_project(developer_id, project_id))
        .wrap_err("assign developer to project in scenario setup")?;
    Ok(())
}

#[given(r#"the task has been assigned to "{developer}""#)]
fn task_has_been_assigned(
    world: &mut AssignmentWorld,
    developer: String,
) -> Result<(), eyre::Report> {
    let developer_id = world.developer(&developer)?;
    let task_id = world.task()?;
    run_async(world.tasks.assign_to_developer(task_id, developer_id))
        .wrap_err("assign task in scenario setup")?;
    Ok(())
}
