//! Service layer for developer lifecycle and project membership.

use super::{
    ServiceError, ServiceResult,
    guards::{
        ensure_project_exists, not_found, repository_failure, require_developer, violation,
    },
    views::{DeveloperView, developer_view},
};
use crate::{
    domain::{
        Developer, DeveloperId, DeveloperName, EmailAddress, EntityRef, NewDeveloper, ProjectId,
    },
    ports::{DeveloperRepository, ProjectRepository, RepositoryError, TaskRepository},
};
use mockable::Clock;
use std::sync::Arc;
use tracing::{debug, info};

/// Request payload for creating a developer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateDeveloperRequest {
    name: String,
    email: String,
    role: Option<String>,
    project_id: Option<ProjectId>,
}

impl CreateDeveloperRequest {
    /// Creates a request for an unassigned developer without a role.
    #[must_use]
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            role: None,
            project_id: None,
        }
    }

    /// Sets the developer role.
    #[must_use]
    pub fn with_role(mut self, role: impl Into<String>) -> Self {
        self.role = Some(role.into());
        self
    }

    /// Places the developer in a project at creation.
    #[must_use]
    pub const fn with_project(mut self, project_id: ProjectId) -> Self {
        self.project_id = Some(project_id);
        self
    }
}

/// Request payload for replacing a developer's profile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateDeveloperRequest {
    name: String,
    email: String,
    role: Option<String>,
}

impl UpdateDeveloperRequest {
    /// Creates a request that sets name and email and clears the role.
    #[must_use]
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            role: None,
        }
    }

    /// Sets the developer role.
    #[must_use]
    pub fn with_role(mut self, role: impl Into<String>) -> Self {
        self.role = Some(role.into());
        self
    }
}

/// Developer lifecycle and project membership service.
#[derive(Clone)]
pub struct DeveloperService<P, D, T, C>
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

impl<P, D, T, C> DeveloperService<P, D, T, C>
where
    P: ProjectRepository,
    D: DeveloperRepository,
    T: TaskRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new developer service.
    #[must_use]
    pub const fn new(projects: Arc<P>, developers: Arc<D>, tasks: Arc<T>, clock: Arc<C>) -> Self {
        Self {
            projects,
            developers,
            tasks,
            clock,
        }
    }

    /// Creates a developer with a unique email, optionally inside a project.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::Domain`] when a field is invalid,
    /// [`ServiceError::DuplicateEmail`] when the email is taken,
    /// [`ServiceError::NotFound`] when the requested project does not exist,
    /// or [`ServiceError::Repository`] when persistence fails.
    pub async fn create(&self, request: CreateDeveloperRequest) -> ServiceResult<DeveloperView> {
        let CreateDeveloperRequest {
            name,
            email,
            role,
            project_id,
        } = request;
        let developer_name = DeveloperName::new(name).map_err(violation)?;
        let email_address = EmailAddress::new(email).map_err(violation)?;

        if self.developers.exists_by_email(&email_address).await? {
            return Err(violation(ServiceError::DuplicateEmail(email_address)));
        }
        if let Some(project) = project_id {
            ensure_project_exists(&*self.projects, project).await?;
        }

        let draft = NewDeveloper::new(
            developer_name,
            email_address,
            role,
            project_id,
            &*self.clock,
        );
        let developer = self
            .developers
            .insert(&draft)
            .await
            .map_err(repository_failure)?;
        info!(
            developer_id = %developer.id(),
            project_id = ?developer.project_id(),
            "developer created"
        );
        self.view(&developer).await
    }

    /// Replaces the name, email, and role of a developer.
    ///
    /// Project membership is not changed.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::NotFound`] when the developer does not exist,
    /// [`ServiceError::DuplicateEmail`] when the new email belongs to another
    /// developer, [`ServiceError::Domain`] when a field is invalid, or
    /// [`ServiceError::Repository`] when persistence fails.
    pub async fn update(
        &self,
        id: DeveloperId,
        request: UpdateDeveloperRequest,
    ) -> ServiceResult<DeveloperView> {
        let UpdateDeveloperRequest { name, email, role } = request;
        let mut developer = require_developer(&*self.developers, id).await?;
        let developer_name = DeveloperName::new(name).map_err(violation)?;
        let email_address = EmailAddress::new(email).map_err(violation)?;

        if developer.email() != &email_address
            && self.developers.exists_by_email(&email_address).await?
        {
            return Err(violation(ServiceError::DuplicateEmail(email_address)));
        }

        developer.update_profile(developer_name, email_address, role);
        self.save(&developer).await?;
        info!(developer_id = %id, "developer updated");
        self.view(&developer).await
    }

    /// Deletes a developer with no assigned tasks.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::NotFound`] when the developer does not exist,
    /// [`ServiceError::HasDependents`] while tasks are still assigned to the
    /// developer, or [`ServiceError::Repository`] when persistence fails.
    pub async fn delete(&self, id: DeveloperId) -> ServiceResult<()> {
        if !self.developers.exists_by_id(id).await? {
            return Err(not_found(id));
        }
        let assigned = self.tasks.count_by_developer(id).await?;
        if assigned > 0 {
            return Err(has_assigned_tasks(id, assigned));
        }

        match self.developers.delete_by_id(id).await {
            Ok(()) => {
                info!(developer_id = %id, "developer deleted");
                Ok(())
            }
            // A task was assigned after the dependents check.
            Err(RepositoryError::ReferentialIntegrity(_)) => {
                let late = self.tasks.count_by_developer(id).await?;
                Err(has_assigned_tasks(id, late))
            }
            Err(err) => Err(repository_failure(err)),
        }
    }

    /// Makes an unassigned developer a member of a project.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::NotFound`] when the developer or the project
    /// does not exist (checked in that order),
    /// [`ServiceError::AlreadyAssigned`] when the developer already belongs
    /// to any project, or [`ServiceError::Repository`] when persistence
    /// fails.
    pub async fn assign_to_project(
        &self,
        developer_id: DeveloperId,
        project_id: ProjectId,
    ) -> ServiceResult<DeveloperView> {
        let mut developer = require_developer(&*self.developers, developer_id).await?;
        ensure_project_exists(&*self.projects, project_id).await?;

        developer
            .assign_to_project(project_id)
            .map_err(violation)?;
        self.save(&developer).await?;
        info!(developer_id = %developer_id, project_id = %project_id, "developer joined project");
        self.view(&developer).await
    }

    /// Removes a developer from their project.
    ///
    /// Tasks assigned to the developer keep their assignment.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::NotFound`] when the developer does not exist,
    /// [`ServiceError::NotAssigned`] when the developer has no project, or
    /// [`ServiceError::Repository`] when persistence fails.
    pub async fn unassign_from_project(
        &self,
        developer_id: DeveloperId,
    ) -> ServiceResult<DeveloperView> {
        let mut developer = require_developer(&*self.developers, developer_id).await?;
        let previous = developer.unassign_from_project().map_err(violation)?;
        self.save(&developer).await?;
        info!(developer_id = %developer_id, project_id = %previous, "developer left project");
        self.view(&developer).await
    }

    /// Lists all developers in ascending identifier order.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::Repository`] when persistence fails.
    pub async fn list(&self) -> ServiceResult<Vec<DeveloperView>> {
        let developers = self.developers.list_all().await?;
        debug!(count = developers.len(), "listed developers");
        self.views(&developers).await
    }

    /// Returns the developer with the given identifier.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::NotFound`] when the developer does not exist
    /// or [`ServiceError::Repository`] when persistence fails.
    pub async fn get_by_id(&self, id: DeveloperId) -> ServiceResult<DeveloperView> {
        debug!(developer_id = %id, "fetching developer");
        let developer = require_developer(&*self.developers, id).await?;
        self.view(&developer).await
    }

    /// Lists the members of a project.
    ///
    /// An unknown project yields an empty list.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::Repository`] when persistence fails.
    pub async fn list_by_project(&self, project_id: ProjectId) -> ServiceResult<Vec<DeveloperView>> {
        let developers = self.developers.list_by_project(project_id).await?;
        debug!(project_id = %project_id, count = developers.len(), "listed project members");
        self.views(&developers).await
    }

    /// Lists developers that belong to no project.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::Repository`] when persistence fails.
    pub async fn list_unassigned(&self) -> ServiceResult<Vec<DeveloperView>> {
        let developers = self.developers.list_unassigned().await?;
        debug!(count = developers.len(), "listed unassigned developers");
        self.views(&developers).await
    }

    /// Finds the developer with the given email address.
    ///
    /// Returns `Ok(None)` when no developer has the email.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::Domain`] when the email is invalid or
    /// [`ServiceError::Repository`] when persistence fails.
    pub async fn find_by_email(&self, email: &str) -> ServiceResult<Option<DeveloperView>> {
        let email_address = EmailAddress::new(email).map_err(violation)?;
        debug!(email = %email_address, "fetching developer by email");

        match self.developers.find_by_email(&email_address).await? {
            Some(developer) => Ok(Some(self.view(&developer).await?)),
            None => Ok(None),
        }
    }

    async fn save(&self, developer: &Developer) -> ServiceResult<()> {
        self.developers
            .update(developer)
            .await
            .map_err(repository_failure)
    }

    async fn view(&self, developer: &Developer) -> ServiceResult<DeveloperView> {
        developer_view(developer, &*self.projects, &*self.tasks).await
    }

    async fn views(&self, developers: &[Developer]) -> ServiceResult<Vec<DeveloperView>> {
        let mut views = Vec::with_capacity(developers.len());
        for developer in developers {
            views.push(self.view(developer).await?);
        }
        Ok(views)
    }
}

fn has_assigned_tasks(id: DeveloperId, tasks: u64) -> ServiceError {
    violation(ServiceError::HasDependents {
        entity: EntityRef::Developer(id),
        developers: 0,
        tasks,
    })
}
