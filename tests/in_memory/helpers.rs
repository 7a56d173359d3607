//! Shared fixtures for the in-memory integration tests.

use std::sync::Arc;

use mockable::DefaultClock;
use rstest::fixture;
use taskboard::{
    adapters::memory::{
        InMemoryDeveloperRepository, InMemoryProjectRepository, InMemoryTaskRepository,
    },
    services::{DeveloperService, ProjectService, TaskService},
};

/// Project service over the in-memory adapters.
pub type Projects = ProjectService<
    InMemoryProjectRepository,
    InMemoryDeveloperRepository,
    InMemoryTaskRepository,
    DefaultClock,
>;

/// Developer service over the in-memory adapters.
pub type Developers = DeveloperService<
    InMemoryProjectRepository,
    InMemoryDeveloperRepository,
    InMemoryTaskRepository,
    DefaultClock,
>;

/// Task service over the in-memory adapters.
pub type Tasks = TaskService<
    InMemoryProjectRepository,
    InMemoryDeveloperRepository,
    InMemoryTaskRepository,
    DefaultClock,
>;

/// The three board services wired onto one shared store.
pub struct Board {
    /// Project rules.
    pub projects: Projects,
    /// Developer rules.
    pub developers: Developers,
    /// Task rules.
    pub tasks: Tasks,
}

/// Provides a fresh, empty board for each test.
#[fixture]
pub fn board() -> Board {
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
