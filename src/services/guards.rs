//! Existence checks and rule-violation reporting shared by the services.

use super::{ServiceError, ServiceResult};
use crate::{
    domain::{Developer, DeveloperId, EntityRef, Project, ProjectId, Task, TaskId},
    ports::{DeveloperRepository, ProjectRepository, RepositoryError, TaskRepository},
};
use tracing::warn;

/// Logs a business-rule violation and hands it back for returning.
pub(super) fn violation(err: impl Into<ServiceError>) -> ServiceError {
    let error: ServiceError = err.into();
    warn!(%error, "rule violation");
    error
}

pub(super) fn not_found(entity: impl Into<EntityRef>) -> ServiceError {
    violation(ServiceError::NotFound(entity.into()))
}

/// Converts a repository failure, logging it when it is a rule violation.
pub(super) fn repository_failure(err: RepositoryError) -> ServiceError {
    let error = ServiceError::from(err);
    if error.is_rule_violation() {
        warn!(%error, "rule violation reported by storage");
    }
    error
}

pub(super) async fn require_project<P>(projects: &P, id: ProjectId) -> ServiceResult<Project>
where
    P: ProjectRepository + ?Sized,
{
    projects
        .find_by_id(id)
        .await
        .map_err(repository_failure)?
        .ok_or_else(|| not_found(id))
}

pub(super) async fn require_developer<D>(
    developers: &D,
    id: DeveloperId,
) -> ServiceResult<Developer>
where
    D: DeveloperRepository + ?Sized,
{
    developers
        .find_by_id(id)
        .await
        .map_err(repository_failure)?
        .ok_or_else(|| not_found(id))
}

pub(super) async fn require_task<T>(tasks: &T, id: TaskId) -> ServiceResult<Task>
where
    T: TaskRepository + ?Sized,
{
    tasks
        .find_by_id(id)
        .await
        .map_err(repository_failure)?
        .ok_or_else(|| not_found(id))
}

/// Fails with [`ServiceError::NotFound`] unless the project exists.
pub(super) async fn ensure_project_exists<P>(projects: &P, id: ProjectId) -> ServiceResult<()>
where
    P: ProjectRepository + ?Sized,
{
    if projects.exists_by_id(id).await.map_err(repository_failure)? {
        return Ok(());
    }
    Err(not_found(id))
}
