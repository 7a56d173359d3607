//! Repository port for developer persistence and membership queries.

use super::RepositoryResult;
use crate::domain::{Developer, DeveloperId, EmailAddress, NewDeveloper, ProjectId};
use async_trait::async_trait;

/// Developer persistence contract.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DeveloperRepository: Send + Sync {
    /// Stores a new developer and returns it with its assigned identity.
    ///
    /// # Errors
    ///
    /// Returns [`super::RepositoryError::DuplicateEmail`] when the email is
    /// already registered or [`super::RepositoryError::ReferentialIntegrity`]
    /// when the referenced project does not exist in storage.
    async fn insert(&self, developer: &NewDeveloper) -> RepositoryResult<Developer>;

    /// Persists profile and membership changes of an existing developer.
    ///
    /// # Errors
    ///
    /// Returns [`super::RepositoryError::NotFound`] when the developer does
    /// not exist or [`super::RepositoryError::DuplicateEmail`] when the new
    /// email belongs to another developer.
    async fn update(&self, developer: &Developer) -> RepositoryResult<()>;

    /// Finds a developer by identifier.
    async fn find_by_id(&self, id: DeveloperId) -> RepositoryResult<Option<Developer>>;

    /// Finds a developer by unique email.
    async fn find_by_email(&self, email: &EmailAddress) -> RepositoryResult<Option<Developer>>;

    /// Returns whether a developer with the identifier exists.
    async fn exists_by_id(&self, id: DeveloperId) -> RepositoryResult<bool>;

    /// Returns whether a developer with the email exists.
    async fn exists_by_email(&self, email: &EmailAddress) -> RepositoryResult<bool>;

    /// Deletes a developer.
    ///
    /// # Errors
    ///
    /// Returns [`super::RepositoryError::NotFound`] when the developer does
    /// not exist.
    async fn delete_by_id(&self, id: DeveloperId) -> RepositoryResult<()>;

    /// Returns all developers ordered by identifier.
    async fn list_all(&self) -> RepositoryResult<Vec<Developer>>;

    /// Returns the members of a project ordered by identifier.
    async fn list_by_project(&self, project_id: ProjectId) -> RepositoryResult<Vec<Developer>>;

    /// Returns developers without a project ordered by identifier.
    async fn list_unassigned(&self) -> RepositoryResult<Vec<Developer>>;

    /// Counts the members of a project.
    async fn count_by_project(&self, project_id: ProjectId) -> RepositoryResult<u64>;
}
