//! Shared fixtures wiring the three services onto one in-memory store.

use std::sync::Arc;

use crate::{
    adapters::memory::{
        InMemoryDeveloperRepository, InMemoryProjectRepository, InMemoryTaskRepository,
    },
    domain::ProjectId,
    services::{
        CreateDeveloperRequest, CreateProjectRequest, CreateTaskRequest, DeveloperService,
        DeveloperView, ProjectService, ProjectView, TaskService, TaskView,
    },
};
use mockable::DefaultClock;
use rstest::fixture;

pub(super) type TestProjectService = ProjectService<
    InMemoryProjectRepository,
    InMemoryDeveloperRepository,
    InMemoryTaskRepository,
    DefaultClock,
>;
pub(super) type TestDeveloperService = DeveloperService<
    InMemoryProjectRepository,
    InMemoryDeveloperRepository,
    InMemoryTaskRepository,
    DefaultClock,
>;
pub(super) type TestTaskService = TaskService<
    InMemoryProjectRepository,
    InMemoryDeveloperRepository,
    InMemoryTaskRepository,
    DefaultClock,
>;

/// The three services sharing one set of repositories.
pub(super) struct Board {
    pub(super) projects: TestProjectService,
    pub(super) developers: TestDeveloperService,
    pub(super) tasks: TestTaskService,
}

#[fixture]
pub(super) fn board() -> Board {
    let projects = Arc::new(InMemoryProjectRepository::new());
    let developers = Arc::new(InMemoryDeveloperRepository::new());
    let tasks = Arc::new(InMemoryTaskRepository::new());
    let clock = Arc::new(DefaultClock);

    Board {
        projects: ProjectService::new(
            Arc::clone(&projects),
            Arc::clone(&developers),
            Arc::clone(&tasks),
            Arc::clone(&clock),
        ),
        developers: DeveloperService::new(
            Arc::clone(&projects),
            Arc::clone(&developers),
            Arc::clone(&tasks),
            Arc::clone(&clock),
        ),
        tasks: TaskService::new(projects, developers, tasks, clock),
    }
}

impl Board {
    pub(super) async fn project(&self, name: &str) -> ProjectView {
        self.projects
            .create(CreateProjectRequest::new(name))
            .await
            .expect("project creation should succeed")
    }

    pub(super) async fn developer(
        &self,
        name: &str,
        email: &str,
        project: Option<ProjectId>,
    ) -> DeveloperView {
        let request = CreateDeveloperRequest::new(name, email);
        let with_project = match project {
            Some(project_id) => request.with_project(project_id),
            None => request,
        };
        self.developers
            .create(with_project)
            .await
            .expect("developer creation should succeed")
    }

    pub(super) async fn task(&self, title: &str, project: ProjectId) -> TaskView {
        self.tasks
            .create(CreateTaskRequest::new(title, project))
            .await
            .expect("task creation should succeed")
    }
}
