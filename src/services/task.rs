//! Service layer for tasks, their workflow status, and their assignee.
//!
//! Provides [`TaskService`]. A task may only be assigned to a developer who
//! is a member of the task's project at the time of assignment.

use super::{
    ServiceResult,
    guards::{
        ensure_project_exists, not_found, repository_failure, require_developer, require_task,
        violation,
    },
    views::{TaskView, task_view},
};
use crate::{
    domain::{DeveloperId, NewTask, ProjectId, Task, TaskId, TaskStatus, TaskTitle},
    ports::{DeveloperRepository, ProjectRepository, TaskRepository},
};
use chrono::NaiveDate;
use mockable::Clock;
use std::sync::Arc;
use tracing::{debug, info};

/// Request payload for creating a task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTaskRequest {
    title: String,
    description: Option<String>,
    status: Option<TaskStatus>,
    due_date: Option<NaiveDate>,
    project_id: ProjectId,
    assigned_to: Option<DeveloperId>,
}

impl CreateTaskRequest {
    /// Creates a request for an unassigned backlog task in `project_id`.
    #[must_use]
    pub fn new(title: impl Into<String>, project_id: ProjectId) -> Self {
        Self {
            title: title.into(),
            description: None,
            status: None,
            due_date: None,
            project_id,
            assigned_to: None,
        }
    }

    /// Sets the task description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the initial status instead of the backlog default.
    #[must_use]
    pub const fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Sets the due date.
    #[must_use]
    pub const fn with_due_date(mut self, due_date: NaiveDate) -> Self {
        self.due_date = Some(due_date);
        self
    }

    /// Assigns the task to a developer at creation.
    #[must_use]
    pub const fn with_assignee(mut self, developer_id: DeveloperId) -> Self {
        self.assigned_to = Some(developer_id);
        self
    }
}

/// Request payload for replacing a task's details.
///
/// All four fields are replaced, so omitting the description or due date
/// clears them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateTaskRequest {
    title: String,
    description: Option<String>,
    status: TaskStatus,
    due_date: Option<NaiveDate>,
}

impl UpdateTaskRequest {
    /// Creates a request with a title and status and no description or due
    /// date.
    #[must_use]
    pub fn new(title: impl Into<String>, status: TaskStatus) -> Self {
        Self {
            title: title.into(),
            description: None,
            status,
            due_date: None,
        }
    }

    /// Sets the task description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the due date.
    #[must_use]
    pub const fn with_due_date(mut self, due_date: NaiveDate) -> Self {
        self.due_date = Some(due_date);
        self
    }
}

/// Task lifecycle, workflow, and assignment service.
#[derive(Clone)]
pub struct TaskService<P, D, T, C>
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

impl<P, D, T, C> TaskService<P, D, T, C>
where
    P: ProjectRepository,
    D: DeveloperRepository,
    T: TaskRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new task service.
    #[must_use]
    pub const fn new(projects: Arc<P>, developers: Arc<D>, tasks: Arc<T>, clock: Arc<C>) -> Self {
        Self {
            projects,
            developers,
            tasks,
            clock,
        }
    }

    /// Creates a task in an existing project.
    ///
    /// # Errors
    ///
    /// Returns [`super::ServiceError::Domain`] when the title is invalid,
    /// [`super::ServiceError::NotFound`] when the project or requested
    /// assignee does not exist,
    /// [`super::ServiceError::CrossProjectAssignment`] when the assignee is
    /// not a member of the project, or [`super::ServiceError::Repository`]
    /// when persistence fails.
    pub async fn create(&self, request: CreateTaskRequest) -> ServiceResult<TaskView> {
        let CreateTaskRequest {
            title,
            description,
            status,
            due_date,
            project_id,
            assigned_to,
        } = request;
        let task_title = TaskTitle::new(title).map_err(violation)?;
        ensure_project_exists(&*self.projects, project_id).await?;

        let unassigned = NewTask::new(
            task_title,
            description,
            status,
            due_date,
            project_id,
            &*self.clock,
        );
        let draft = match assigned_to {
            Some(developer_id) => {
                let developer = require_developer(&*self.developers, developer_id).await?;
                unassigned.with_assignee(&developer).map_err(violation)?
            }
            None => unassigned,
        };

        let task = self
            .tasks
            .insert(&draft)
            .await
            .map_err(repository_failure)?;
        info!(
            task_id = %task.id(),
            project_id = %project_id,
            status = %task.status(),
            "task created"
        );
        self.view(&task).await
    }

    /// Replaces the title, description, status, and due date of a task.
    ///
    /// The owning project and the assignee are not changed.
    ///
    /// # Errors
    ///
    /// Returns [`super::ServiceError::NotFound`] when the task does not
    /// exist, [`super::ServiceError::Domain`] when the title is invalid, or
    /// [`super::ServiceError::Repository`] when persistence fails.
    pub async fn update(&self, id: TaskId, request: UpdateTaskRequest) -> ServiceResult<TaskView> {
        let UpdateTaskRequest {
            title,
            description,
            status,
            due_date,
        } = request;
        let mut task = require_task(&*self.tasks, id).await?;
        let task_title = TaskTitle::new(title).map_err(violation)?;

        task.update_details(task_title, description, status, due_date, &*self.clock);
        self.save(&task).await?;
        info!(task_id = %id, status = %status, "task updated");
        self.view(&task).await
    }

    /// Deletes a task.
    ///
    /// # Errors
    ///
    /// Returns [`super::ServiceError::NotFound`] when the task does not
    /// exist or [`super::ServiceError::Repository`] when persistence fails.
    pub async fn delete(&self, id: TaskId) -> ServiceResult<()> {
        if !self.tasks.exists_by_id(id).await? {
            return Err(not_found(id));
        }
        self.tasks
            .delete_by_id(id)
            .await
            .map_err(repository_failure)?;
        info!(task_id = %id, "task deleted");
        Ok(())
    }

    /// Sets the workflow status of a task. Any status may follow any other.
    ///
    /// # Errors
    ///
    /// Returns [`super::ServiceError::NotFound`] when the task does not
    /// exist or [`super::ServiceError::Repository`] when persistence fails.
    pub async fn update_status(&self, id: TaskId, status: TaskStatus) -> ServiceResult<TaskView> {
        let mut task = require_task(&*self.tasks, id).await?;
        let previous = task.status();
        task.set_status(status, &*self.clock);
        self.save(&task).await?;
        info!(task_id = %id, from = %previous, to = %status, "task status changed");
        self.view(&task).await
    }

    /// Assigns a task to a member of its project, replacing any previous
    /// assignee.
    ///
    /// # Errors
    ///
    /// Returns [`super::ServiceError::NotFound`] when the task or developer
    /// does not exist, [`super::ServiceError::CrossProjectAssignment`] when
    /// the developer is not a member of the task's project, or
    /// [`super::ServiceError::Repository`] when persistence fails.
    pub async fn assign_to_developer(
        &self,
        task_id: TaskId,
        developer_id: DeveloperId,
    ) -> ServiceResult<TaskView> {
        let mut task = require_task(&*self.tasks, task_id).await?;
        let developer = require_developer(&*self.developers, developer_id).await?;

        let previous = task.assigned_to();
        task.assign_to(&developer, &*self.clock).map_err(violation)?;
        self.save(&task).await?;
        info!(
            task_id = %task_id,
            developer_id = %developer_id,
            previous_assignee = ?previous,
            "task assigned"
        );
        self.view(&task).await
    }

    /// Clears the assignee of a task.
    ///
    /// # Errors
    ///
    /// Returns [`super::ServiceError::NotFound`] when the task does not
    /// exist, [`super::ServiceError::NotAssigned`] when it has no assignee,
    /// or [`super::ServiceError::Repository`] when persistence fails.
    pub async fn unassign(&self, task_id: TaskId) -> ServiceResult<TaskView> {
        let mut task = require_task(&*self.tasks, task_id).await?;
        let previous = task.unassign(&*self.clock).map_err(violation)?;
        self.save(&task).await?;
        info!(task_id = %task_id, developer_id = %previous, "task unassigned");
        self.view(&task).await
    }

    /// Lists all tasks in ascending identifier order.
    ///
    /// # Errors
    ///
    /// Returns [`super::ServiceError::Repository`] when persistence fails.
    pub async fn list(&self) -> ServiceResult<Vec<TaskView>> {
        let tasks = self.tasks.list_all().await?;
        debug!(count = tasks.len(), "listed tasks");
        self.views(&tasks).await
    }

    /// Returns the task with the given identifier.
    ///
    /// # Errors
    ///
    /// Returns [`super::ServiceError::NotFound`] when the task does not
    /// exist or [`super::ServiceError::Repository`] when persistence fails.
    pub async fn get_by_id(&self, id: TaskId) -> ServiceResult<TaskView> {
        debug!(task_id = %id, "fetching task");
        let task = require_task(&*self.tasks, id).await?;
        self.view(&task).await
    }

    /// Lists the tasks owned by a project.
    ///
    /// # Errors
    ///
    /// Returns [`super::ServiceError::Repository`] when persistence fails.
    pub async fn list_by_project(&self, project_id: ProjectId) -> ServiceResult<Vec<TaskView>> {
        let tasks = self.tasks.list_by_project(project_id).await?;
        debug!(project_id = %project_id, count = tasks.len(), "listed project tasks");
        self.views(&tasks).await
    }

    /// Lists the tasks assigned to a developer.
    ///
    /// # Errors
    ///
    /// Returns [`super::ServiceError::Repository`] when persistence fails.
    pub async fn list_by_developer(
        &self,
        developer_id: DeveloperId,
    ) -> ServiceResult<Vec<TaskView>> {
        let tasks = self.tasks.list_by_developer(developer_id).await?;
        debug!(developer_id = %developer_id, count = tasks.len(), "listed developer tasks");
        self.views(&tasks).await
    }

    /// Lists the tasks in a workflow status.
    ///
    /// # Errors
    ///
    /// Returns [`super::ServiceError::Repository`] when persistence fails.
    pub async fn list_by_status(&self, status: TaskStatus) -> ServiceResult<Vec<TaskView>> {
        let tasks = self.tasks.list_by_status(status).await?;
        debug!(status = %status, count = tasks.len(), "listed tasks by status");
        self.views(&tasks).await
    }

    /// Lists the tasks of a project that are in a workflow status.
    ///
    /// # Errors
    ///
    /// Returns [`super::ServiceError::Repository`] when persistence fails.
    pub async fn list_by_project_and_status(
        &self,
        project_id: ProjectId,
        status: TaskStatus,
    ) -> ServiceResult<Vec<TaskView>> {
        let tasks = self
            .tasks
            .list_by_project_and_status(project_id, status)
            .await?;
        debug!(
            project_id = %project_id,
            status = %status,
            count = tasks.len(),
            "listed project tasks by status"
        );
        self.views(&tasks).await
    }

    async fn save(&self, task: &Task) -> ServiceResult<()> {
        self.tasks.update(task).await.map_err(repository_failure)
    }

    async fn view(&self, task: &Task) -> ServiceResult<TaskView> {
        task_view(task, &*self.projects, &*self.developers).await
    }

    async fn views(&self, tasks: &[Task]) -> ServiceResult<Vec<TaskView>> {
        let mut views = Vec::with_capacity(tasks.len());
        for task in tasks {
            views.push(self.view(task).await?);
        }
        Ok(views)
    }
}
