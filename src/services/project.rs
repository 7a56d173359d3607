//! Service layer for project lifecycle operations.
//!
//! Provides [`ProjectService`], which enforces project name uniqueness and
//! the restrict-on-delete policy for projects that still have developers or
//! tasks attached.

use super::{
    ServiceError, ServiceResult,
    guards::{not_found, repository_failure, require_project, violation},
    views::{ProjectView, project_view},
};
use crate::{
    domain::{EntityRef, NewProject, ProjectId, ProjectName},
    ports::{DeveloperRepository, ProjectRepository, RepositoryError, TaskRepository},
};
use mockable::Clock;
use std::sync::Arc;
use tracing::{debug, info};

/// Request payload for creating a project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateProjectRequest {
    name: String,
    description: Option<String>,
}

impl CreateProjectRequest {
    /// Creates a request for a project without a description.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
        }
    }

    /// Sets the project description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Request payload for replacing a project's details.
///
/// Both fields are replaced; an absent description clears the stored one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateProjectRequest {
    name: String,
    description: Option<String>,
}

impl UpdateProjectRequest {
    /// Creates a request that sets the name and clears the description.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
        }
    }

    /// Sets the project description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Project lifecycle orchestration service.
#[derive(Clone)]
pub struct ProjectService<P, D, T, C>
where
    P: ProjectRepository,
    D: DeveloperRepository,
    T: TaskRepository,
    C: Clock + Send + Sync,
{
    projects: Arc<P>,
    developers: Arc<D>,
    tasks: Arc<T>,
    clock: Arc<C>,
}

impl<P, D, T, C> ProjectService<P, D, T, C>
where
    P: ProjectRepository,
    D: DeveloperRepository,
    T: TaskRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new project service.
    #[must_use]
    pub const fn new(projects: Arc<P>, developers: Arc<D>, tasks: Arc<T>, clock: Arc<C>) -> Self {
        Self {
            projects,
            developers,
            tasks,
            clock,
        }
    }

    /// Creates a project with a unique name.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::Domain`] when the name is invalid,
    /// [`ServiceError::DuplicateName`] when the name is taken, or
    /// [`ServiceError::Repository`] when persistence fails.
    pub async fn create(&self, request: CreateProjectRequest) -> ServiceResult<ProjectView> {
        let CreateProjectRequest { name, description } = request;
        let project_name = ProjectName::new(name).map_err(violation)?;

        if self.projects.exists_by_name(&project_name).await? {
            return Err(violation(ServiceError::DuplicateName(project_name)));
        }

        let draft = NewProject::new(project_name, description, &*self.clock);
        let project = self
            .projects
            .insert(&draft)
            .await
            .map_err(repository_failure)?;
        info!(project_id = %project.id(), name = %project.name(), "project created");
        Ok(ProjectView::new(&project, 0, 0))
    }

    /// Replaces the name and description of a project.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::NotFound`] when the project does not exist,
    /// [`ServiceError::DuplicateName`] when the new name belongs to another
    /// project, [`ServiceError::Domain`] when the name is invalid, or
    /// [`ServiceError::Repository`] when persistence fails.
    pub async fn update(
        &self,
        id: ProjectId,
        request: UpdateProjectRequest,
    ) -> ServiceResult<ProjectView> {
        let UpdateProjectRequest { name, description } = request;
        let mut project = require_project(&*self.projects, id).await?;
        let project_name = ProjectName::new(name).map_err(violation)?;

        if project.name() != &project_name && self.projects.exists_by_name(&project_name).await? {
            return Err(violation(ServiceError::DuplicateName(project_name)));
        }

        project.update_details(project_name, description, &*self.clock);
        self.projects
            .update(&project)
            .await
            .map_err(repository_failure)?;
        info!(project_id = %id, "project updated");
        project_view(&project, &*self.developers, &*self.tasks).await
    }

    /// Deletes a project that no developer or task references.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::NotFound`] when the project does not exist,
    /// [`ServiceError::HasDependents`] while developers or tasks still
    /// reference it, or [`ServiceError::Repository`] when persistence fails.
    pub async fn delete(&self, id: ProjectId) -> ServiceResult<()> {
        if !self.projects.exists_by_id(id).await? {
            return Err(not_found(id));
        }
        let (developers, tasks) = self.count_dependents(id).await?;
        if developers > 0 || tasks > 0 {
            return Err(has_dependents(id, developers, tasks));
        }

        match self.projects.delete_by_id(id).await {
            Ok(()) => {
                info!(project_id = %id, "project deleted");
                Ok(())
            }
            // A developer or task was attached after the dependents check.
            Err(RepositoryError::ReferentialIntegrity(_)) => {
                let (late_developers, late_tasks) = self.count_dependents(id).await?;
                Err(has_dependents(id, late_developers, late_tasks))
            }
            Err(err) => Err(repository_failure(err)),
        }
    }

    /// Lists all projects in ascending identifier order.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::Repository`] when persistence fails.
    pub async fn list(&self) -> ServiceResult<Vec<ProjectView>> {
        let projects = self.projects.list_all().await?;
        debug!(count = projects.len(), "listed projects");

        let mut views = Vec::with_capacity(projects.len());
        for project in &projects {
            views.push(project_view(project, &*self.developers, &*self.tasks).await?);
        }
        Ok(views)
    }

    /// Returns the project with the given identifier.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::NotFound`] when the project does not exist or
    /// [`ServiceError::Repository`] when persistence fails.
    pub async fn get_by_id(&self, id: ProjectId) -> ServiceResult<ProjectView> {
        debug!(project_id = %id, "fetching project");
        let project = require_project(&*self.projects, id).await?;
        project_view(&project, &*self.developers, &*self.tasks).await
    }

    /// Finds the project with the given name.
    ///
    /// The name is validated and trimmed before the lookup. Returns
    /// `Ok(None)` when no project has the name.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::Domain`] when the name is invalid or
    /// [`ServiceError::Repository`] when persistence fails.
    pub async fn find_by_name(&self, name: &str) -> ServiceResult<Option<ProjectView>> {
        let project_name = ProjectName::new(name).map_err(violation)?;
        debug!(name = %project_name, "fetching project by name");

        match self.projects.find_by_name(&project_name).await? {
            Some(project) => Ok(Some(
                project_view(&project, &*self.developers, &*self.tasks).await?,
            )),
            None => Ok(None),
        }
    }

    async fn count_dependents(&self, id: ProjectId) -> ServiceResult<(u64, u64)> {
        let developers = self.developers.count_by_project(id).await?;
        let tasks = self.tasks.count_by_project(id).await?;
        Ok((developers, tasks))
    }
}

fn has_dependents(id: ProjectId, developers: u64, tasks: u64) -> ServiceError {
    violation(ServiceError::HasDependents {
        entity: EntityRef::Project(id),
        developers,
        tasks,
    })
}
