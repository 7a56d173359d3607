//! Rule properties that hold for every project, developer, and task.

use super::helpers::{Board, board};
use rstest::rstest;
use taskboard::{
    domain::TaskStatus,
    services::{
        CreateDeveloperRequest, CreateProjectRequest, CreateTaskRequest, ServiceError,
    },
};

#[rstest]
#[case("Alpha", "Alpha")]
#[case("Alpha", "  Alpha ")]
#[case("Beta", "Beta\t")]
#[tokio::test(flavor = "multi_thread")]
async fn live_project_name_cannot_be_reused(
    board: Board,
    #[case] existing: &str,
    #[case] requested: &str,
) {
    board
        .projects
        .create(CreateProjectRequest::new(existing))
        .await
        .expect("first project");

    let result = board.projects.create(CreateProjectRequest::new(requested)).await;

    assert!(matches!(result, Err(ServiceError::DuplicateName(_))));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn deleted_project_name_becomes_available(board: Board) {
    let first = board
        .projects
        .create(CreateProjectRequest::new("Alpha"))
        .await
        .expect("first project");
    board.projects.delete(first.id).await.expect("delete");

    let second = board.projects.create(CreateProjectRequest::new("Alpha")).await;

    assert!(second.is_ok_and(|view| view.id != first.id));
}

#[rstest]
#[case(0)]
#[case(1)]
#[tokio::test(flavor = "multi_thread")]
async fn assigned_developer_cannot_join_any_project_until_unassigned(
    board: Board,
    #[case] target_index: usize,
) {
    let alpha = board
        .projects
        .create(CreateProjectRequest::new("Alpha"))
        .await
        .expect("alpha");
    let beta = board
        .projects
        .create(CreateProjectRequest::new("Beta"))
        .await
        .expect("beta");
    let targets = [alpha.id, beta.id];
    let target = *targets.get(target_index).expect("known target");
    let bob = board
        .developers
        .create(CreateDeveloperRequest::new("Bob", "bob@x.com"))
        .await
        .expect("bob");
    board
        .developers
        .assign_to_project(bob.id, alpha.id)
        .await
        .expect("first assignment");

    let blocked = board.developers.assign_to_project(bob.id, target).await;
    board
        .developers
        .unassign_from_project(bob.id)
        .await
        .expect("unassign");
    let allowed = board.developers.assign_to_project(bob.id, target).await;

    assert!(matches!(blocked, Err(ServiceError::AlreadyAssigned { .. })));
    assert_eq!(allowed.expect("reassignment").project_id, Some(target));
}

#[rstest]
#[case(Some(0), true)]
#[case(Some(1), false)]
#[case(None, false)]
#[tokio::test(flavor = "multi_thread")]
async fn task_assignment_succeeds_iff_developer_shares_project(
    board: Board,
    #[case] developer_project: Option<usize>,
    #[case] should_succeed: bool,
) {
    let alpha = board
        .projects
        .create(CreateProjectRequest::new("Alpha"))
        .await
        .expect("alpha");
    let beta = board
        .projects
        .create(CreateProjectRequest::new("Beta"))
        .await
        .expect("beta");
    let projects = [alpha.id, beta.id];
    let base = CreateDeveloperRequest::new("Dana", "dana@x.com");
    let request = match developer_project {
        Some(index) => base.with_project(*projects.get(index).expect("known project")),
        None => base,
    };
    let dana = board.developers.create(request).await.expect("developer");
    let task = board
        .tasks
        .create(CreateTaskRequest::new("Fix bug", alpha.id))
        .await
        .expect("task");

    let result = board.tasks.assign_to_developer(task.id, dana.id).await;

    if should_succeed {
        assert_eq!(result.expect("assignment").assigned_to_id, Some(dana.id));
    } else {
        assert!(matches!(
            result,
            Err(ServiceError::CrossProjectAssignment { .. })
        ));
    }
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn membership_is_checked_at_call_time(board: Board) {
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
        .create(CreateTaskRequest::new("Fix bug", alpha.id))
        .await
        .expect("task");
    board
        .developers
        .unassign_from_project(bob.id)
        .await
        .expect("unassign");

    let result = board.tasks.assign_to_developer(task.id, bob.id).await;

    assert!(matches!(
        result,
        Err(ServiceError::CrossProjectAssignment {
            developer_project: None,
            ..
        })
    ));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn unassigning_an_unassigned_task_is_not_a_no_op(board: Board) {
    let alpha = board
        .projects
        .create(CreateProjectRequest::new("Alpha"))
        .await
        .expect("alpha");
    let task = board
        .tasks
        .create(CreateTaskRequest::new("Fix bug", alpha.id))
        .await
        .expect("task");

    let result = board.tasks.unassign(task.id).await;

    assert!(matches!(result, Err(ServiceError::NotAssigned(_))));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn created_project_round_trips(board: Board) {
    let created = board
        .projects
        .create(CreateProjectRequest::new("Alpha").with_description("First"))
        .await
        .expect("create");

    let fetched = board.projects.get_by_id(created.id).await.expect("fetch");

    assert_eq!(fetched, created);
    assert_eq!(fetched.name, "Alpha");
    assert_eq!(fetched.description.as_deref(), Some("First"));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn created_developer_round_trips(board: Board) {
    let created = board
        .developers
        .create(CreateDeveloperRequest::new("Bob", "bob@x.com").with_role("backend"))
        .await
        .expect("create");

    let fetched = board.developers.get_by_id(created.id).await.expect("fetch");

    assert_eq!(fetched, created);
    assert_eq!(
        (fetched.name.as_str(), fetched.email.as_str(), fetched.role.as_deref()),
        ("Bob", "bob@x.com", Some("backend"))
    );
}

#[rstest]
#[case(None)]
#[case(Some(TaskStatus::InProgress))]
#[tokio::test(flavor = "multi_thread")]
async fn created_task_round_trips(board: Board, #[case] status: Option<TaskStatus>) {
    let alpha = board
        .projects
        .create(CreateProjectRequest::new("Alpha"))
        .await
        .expect("alpha");
    let base = CreateTaskRequest::new("Fix bug", alpha.id).with_description("Crash");
    let request = match status {
        Some(initial) => base.with_status(initial),
        None => base,
    };

    let created = board.tasks.create(request).await.expect("create");
    let fetched = board.tasks.get_by_id(created.id).await.expect("fetch");

    assert_eq!(fetched, created);
    assert_eq!(fetched.status, status.unwrap_or(TaskStatus::Backlog));
    assert_eq!(fetched.description.as_deref(), Some("Crash"));
}
