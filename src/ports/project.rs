//! Repository port for project persistence.

use super::RepositoryResult;
use crate::domain::{NewProject, Project, ProjectId, ProjectName};
use async_trait::async_trait;

/// Project persistence contract.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProjectRepository: Send + Sync {
    /// Stores a new project and returns it with its assigned identity.
    ///
    /// # Errors
    ///
    /// Returns [`super::RepositoryError::DuplicateName`] when the name is
    /// already taken.
    async fn insert(&self, project: &NewProject) -> RepositoryResult<Project>;

    /// Persists changes to an existing project.
    ///
    /// # Errors
    ///
    /// Returns [`super::RepositoryError::NotFound`] when the project does not
    /// exist or [`super::RepositoryError::DuplicateName`] when the new name
    /// belongs to another project.
    async fn update(&self, project: &Project) -> RepositoryResult<()>;

    /// Finds a project by identifier.
    ///
    /// Returns `None` when the project does not exist.
    async fn find_by_id(&self, id: ProjectId) -> RepositoryResult<Option<Project>>;

    /// Finds a project by its unique name.
    async fn find_by_name(&self, name: &ProjectName) -> RepositoryResult<Option<Project>>;

    /// Returns whether a project with the identifier exists.
    async fn exists_by_id(&self, id: ProjectId) -> RepositoryResult<bool>;

    /// Returns whether a project with the name exists.
    async fn exists_by_name(&self, name: &ProjectName) -> RepositoryResult<bool>;

    /// Deletes a project.
    ///
    /// # Errors
    ///
    /// Returns [`super::RepositoryError::NotFound`] when the project does not
    /// exist or [`super::RepositoryError::ReferentialIntegrity`] when storage
    /// refuses because dependents remain.
    async fn delete_by_id(&self, id: ProjectId) -> RepositoryResult<()>;

    /// Returns all projects ordered by identifier.
    async fn list_all(&self) -> RepositoryResult<Vec<Project>>;
}
