//! Repository port for task persistence and filtered lookups.

use super::RepositoryResult;
use crate::domain::{DeveloperId, NewTask, ProjectId, Task, TaskId, TaskStatus};
use async_trait::async_trait;

/// Task persistence contract.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Stores a new task and returns it with its assigned identity.
    ///
    /// # Errors
    ///
    /// Returns [`super::RepositoryError::ReferentialIntegrity`] when the
    /// referenced project or developer does not exist in storage.
    async fn insert(&self, task: &NewTask) -> RepositoryResult<Task>;

    /// Persists changes to an existing task.
    ///
    /// # Errors
    ///
    /// Returns [`super::RepositoryError::NotFound`] when the task does not
    /// exist.
    async fn update(&self, task: &Task) -> RepositoryResult<()>;

    /// Finds a task by identifier.
    async fn find_by_id(&self, id: TaskId) -> RepositoryResult<Option<Task>>;

    /// Returns whether a task with the identifier exists.
    async fn exists_by_id(&self, id: TaskId) -> RepositoryResult<bool>;

    /// Deletes a task.
    ///
    /// # Errors
    ///
    /// Returns [`super::RepositoryError::NotFound`] when the task does not
    /// exist.
    async fn delete_by_id(&self, id: TaskId) -> RepositoryResult<()>;

    /// Returns all tasks ordered by identifier.
    async fn list_all(&self) -> RepositoryResult<Vec<Task>>;

    /// Returns the tasks of a project ordered by identifier.
    async fn list_by_project(&self, project_id: ProjectId) -> RepositoryResult<Vec<Task>>;

    /// Returns the tasks assigned to a developer ordered by identifier.
    async fn list_by_developer(&self, developer_id: DeveloperId) -> RepositoryResult<Vec<Task>>;

    /// Returns the tasks in a status ordered by identifier.
    async fn list_by_status(&self, status: TaskStatus) -> RepositoryResult<Vec<Task>>;

    /// Returns the tasks of a project in a status ordered by identifier.
    async fn list_by_project_and_status(
        &self,
        project_id: ProjectId,
        status: TaskStatus,
    ) -> RepositoryResult<Vec<Task>>;

    /// Counts the tasks of a project.
    async fn count_by_project(&self, project_id: ProjectId) -> RepositoryResult<u64>;

    /// Counts the tasks assigned to a developer.
    async fn count_by_developer(&self, developer_id: DeveloperId) -> RepositoryResult<u64>;
}
