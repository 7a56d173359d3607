//! Shared world state for task assignment BDD scenarios.

use std::{collections::HashMap, sync::Arc};

use mockable::DefaultClock;
use rstest::fixture;
use taskboard::{
    adapters::memory::{
        InMemoryDeveloperRepository, InMemoryProjectRepository, InMemoryTaskRepository,
    },
    domain::{DeveloperId, ProjectId, TaskId},
    services::{DeveloperService, ProjectService, ServiceError, TaskService, TaskView},
};

/// Project service used by the BDD world.
pub type WorldProjects = ProjectService<
    InMemoryProjectRepository,
    InMemoryDeveloperRepository,
    InMemoryTaskRepository,
    DefaultClock,
>;

/// Developer service used by the BDD world.
pub type WorldDevelopers = DeveloperService<
    InMemoryProjectRepository,
    InMemoryDeveloperRepository,
    InMemoryTaskRepository,
    DefaultClock,
>;

/// Task service used by the BDD world.
pub type WorldTasks = TaskService<
    InMemoryProjectRepository,
    InMemoryDeveloperRepository,
    InMemoryTaskRepository,
    DefaultClock,
>;

/// Scenario world for task assignment behaviour tests.
pub struct AssignmentWorld {
    pub projects: WorldProjects,
    pub developers: WorldDevelopers,
    pub tasks: WorldTasks,
    pub project_ids: HashMap<String, ProjectId>,
    pub developer_ids: HashMap<String, DeveloperId>,
    pub current_task: Option<TaskId>,
    pub last_assignment: Option<Result<TaskView, ServiceError>>,
    pub last_deletion: Option<Result<(), ServiceError>>,
}

impl AssignmentWorld {
    /// Creates a world over an empty in-memory store.
    #[must_use]
    pub fn new() -> Self {
        let projects = Arc::new(InMemoryProjectRepository::new());
        let developers = Arc::new(InMemoryDeveloperRepository::new());
        let tasks = Arc::new(InMemoryTaskRepository::new());
        let clock = Arc::new(DefaultClock);

        Self {
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
            project_ids: HashMap::new(),
            developer_ids: HashMap::new(),
            current_task: None,
            last_assignment: None,
            last_deletion: None,
        }
    }

    /// Looks up a project created earlier in the scenario.
    pub fn project(&self, name: &str) -> Result<ProjectId, eyre::Report> {
        self.project_ids
            .get(name)
            .copied()
            .ok_or_else(|| eyre::eyre!("unknown project {name} in scenario world"))
    }

    /// Looks up a developer created earlier in the scenario.
    pub fn developer(&self, name: &str) -> Result<DeveloperId, eyre::Report> {
        self.developer_ids
            .get(name)
            .copied()
            .ok_or_else(|| eyre::eyre!("unknown developer {name} in scenario world"))
    }

    /// Returns the task under test.
    pub fn task(&self) -> Result<TaskId, eyre::Report> {
        self.current_task
            .ok_or_else(|| eyre::eyre!("missing task in scenario world"))
    }
}

impl Default for AssignmentWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> AssignmentWorld {
    AssignmentWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
