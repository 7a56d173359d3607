//! End-to-end board scenarios.

use super::helpers::{Board, board};
use rstest::rstest;
use serde_json::Value;
use taskboard::{
    domain::{EntityRef, TaskStatus},
    services::{CreateDeveloperRequest, CreateProjectRequest, CreateTaskRequest, ServiceError},
};

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn alpha_bob_carol_assignment_flow(board: Board) {
    let alpha = board
        .projects
        .create(CreateProjectRequest::new("Alpha"))
        .await
        .expect("create Alpha");
    let bob = board
        .developers
        .create(CreateDeveloperRequest::new("Bob", "bob@x.com"))
        .await
        .expect("create Bob");

    let bob_in_alpha = board
        .developers
        .assign_to_project(bob.id, alpha.id)
        .await
        .expect("Bob joins Alpha");
    assert_eq!(bob_in_alpha.project_id, Some(alpha.id));

    let task = board
        .tasks
        .create(CreateTaskRequest::new("Fix bug", alpha.id))
        .await
        .expect("create task");
    assert_eq!(task.status, TaskStatus::Backlog);

    let assigned = board
        .tasks
        .assign_to_developer(task.id, bob.id)
        .await
        .expect("assign to Bob");
    assert_eq!(assigned.assigned_to_id, Some(bob.id));

    let carol = board
        .developers
        .create(CreateDeveloperRequest::new("Carol", "carol@x.com"))
        .await
        .expect("create Carol");
    let rejected = board.tasks.assign_to_developer(task.id, carol.id).await;

    assert!(matches!(
        rejected,
        Err(ServiceError::CrossProjectAssignment { developer, task_project, .. })
            if developer == carol.id && task_project == alpha.id
    ));
    let still_bob = board.tasks.get_by_id(task.id).await.expect("fetch task");
    assert_eq!(still_bob.assigned_to_name.as_deref(), Some("Bob"));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn second_project_named_x_is_rejected(board: Board) {
    board
        .projects
        .create(CreateProjectRequest::new("X"))
        .await
        .expect("first X");

    let second = board.projects.create(CreateProjectRequest::new("X")).await;

    assert!(matches!(second, Err(ServiceError::DuplicateName(_))));
    assert_eq!(board.projects.list().await.expect("list").len(), 1);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn teardown_requires_dependents_to_be_removed_first(board: Board) {
    let alpha = board
        .projects
        .create(CreateProjectRequest::new("Alpha"))
        .await
        .expect("alpha");
    let bob = board
        .developers
        .create(CreateDeveloperRequest::new("Bob", "bob@x.com").with_project(alpha.id))
        .await
        .expect("bob");
    let task = board
        .tasks
        .create(CreateTaskRequest::new("Fix bug", alpha.id).with_assignee(bob.id))
        .await
        .expect("task");

    assert!(matches!(
        board.projects.delete(alpha.id).await,
        Err(ServiceError::HasDependents { entity: EntityRef::Project(_), developers: 1, tasks: 1 })
    ));
    assert!(matches!(
        board.developers.delete(bob.id).await,
        Err(ServiceError::HasDependents { entity: EntityRef::Developer(_), tasks: 1, .. })
    ));

    board.tasks.delete(task.id).await.expect("delete task");
    board.developers.delete(bob.id).await.expect("delete developer");
    board.projects.delete(alpha.id).await.expect("delete project");

    assert!(board.projects.list().await.expect("projects").is_empty());
    assert!(board.developers.list().await.expect("developers").is_empty());
    assert!(board.tasks.list().await.expect("tasks").is_empty());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn developer_leaving_project_keeps_task_assignments(board: Board) {
    let alpha = board
        .projects
        .create(CreateProjectRequest::new("Alpha"))
        .await
        .expect("alpha");
    let bob = board
        .developers
        .create(CreateDeveloperRequest::new("Bob", "bob@x.com").with_project(alpha.id))
        .await
        .expect("bob");
    let task = board
        .tasks
        .create(CreateTaskRequest::new("Fix bug", alpha.id).with_assignee(bob.id))
        .await
        .expect("task");

    let departed = board
        .developers
        .unassign_from_project(bob.id)
        .await
        .expect("unassign");

    assert_eq!(departed.project_id, None);
    assert_eq!(departed.task_count, 1);
    let kept = board.tasks.get_by_id(task.id).await.expect("task");
    assert_eq!(kept.assigned_to_id, Some(bob.id));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn views_serialise_with_camel_case_fields(board: Board) {
    let alpha = board
        .projects
        .create(CreateProjectRequest::new("Alpha"))
        .await
        .expect("alpha");
    let bob = board
        .developers
        .create(CreateDeveloperRequest::new("Bob", "bob@x.com").with_project(alpha.id))
        .await
        .expect("bob");
    let task = board
        .tasks
        .create(
            CreateTaskRequest::new("Fix bug", alpha.id)
                .with_status(TaskStatus::InProgress)
                .with_assignee(bob.id),
        )
        .await
        .expect("task");
    let project = board.projects.get_by_id(alpha.id).await.expect("project");

    let project_json = serde_json::to_value(&project).expect("project json");
    let task_json = serde_json::to_value(&task).expect("task json");

    assert_eq!(project_json.get("developerCount"), Some(&Value::from(1)));
    assert_eq!(project_json.get("taskCount"), Some(&Value::from(1)));
    assert_eq!(task_json.get("status"), Some(&Value::from("IN_PROGRESS")));
    assert_eq!(task_json.get("projectName"), Some(&Value::from("Alpha")));
    assert_eq!(task_json.get("assignedToName"), Some(&Value::from("Bob")));
    assert_eq!(task_json.get("assignedToId"), Some(&Value::from(bob.id.value())));
    assert!(task_json.get("dueDate").is_some_and(Value::is_null));
}
