//! Task aggregate and the same-project assignment rule.

use super::{AssignmentError, Developer, DeveloperId, ProjectId, TaskId, TaskStatus, TaskTitle};
use chrono::{DateTime, NaiveDate, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Checks that `developer` belongs to `task_project`.
fn ensure_same_project(
    task_project: ProjectId,
    developer: &Developer,
) -> Result<(), AssignmentError> {
    if developer.project_id() == Some(task_project) {
        return Ok(());
    }
    Err(AssignmentError::CrossProjectAssignment {
        developer: developer.id(),
        task_project,
        developer_project: developer.project_id(),
    })
}

/// A task that has not been persisted yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTask {
    title: TaskTitle,
    description: Option<String>,
    status: TaskStatus,
    due_date: Option<NaiveDate>,
    project_id: ProjectId,
    assigned_to: Option<DeveloperId>,
    created_at: DateTime<Utc>,
}

impl NewTask {
    /// Creates an unsaved, unassigned task owned by `project_id`.
    ///
    /// `status` defaults to [`TaskStatus::Backlog`] when omitted.
    #[must_use]
    pub fn new(
        title: TaskTitle,
        description: Option<String>,
        status: Option<TaskStatus>,
        due_date: Option<NaiveDate>,
        project_id: ProjectId,
        clock: &impl Clock,
    ) -> Self {
        Self {
            title,
            description,
            status: status.unwrap_or_default(),
            due_date,
            project_id,
            assigned_to: None,
            created_at: clock.utc(),
        }
    }

    /// Assigns the task to `developer` before it is first stored.
    ///
    /// # Errors
    ///
    /// Returns [`AssignmentError::CrossProjectAssignment`] unless the
    /// developer belongs to the task's project.
    pub fn with_assignee(mut self, developer: &Developer) -> Result<Self, AssignmentError> {
        ensure_same_project(self.project_id, developer)?;
        self.assigned_to = Some(developer.id());
        Ok(self)
    }

    /// Returns the task title.
    #[must_use]
    pub const fn title(&self) -> &TaskTitle {
        &self.title
    }

    /// Returns the task description, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the initial status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the due date, if any.
    #[must_use]
    pub const fn due_date(&self) -> Option<NaiveDate> {
        self.due_date
    }

    /// Returns the owning project.
    #[must_use]
    pub const fn project_id(&self) -> ProjectId {
        self.project_id
    }

    /// Returns the initial assignee, if any.
    #[must_use]
    pub const fn assigned_to(&self) -> Option<DeveloperId> {
        self.assigned_to
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Binds the storage-assigned identity, producing a persisted task.
    #[must_use]
    pub fn into_task(self, id: TaskId) -> Task {
        Task {
            id,
            title: self.title,
            description: self.description,
            status: self.status,
            due_date: self.due_date,
            project_id: self.project_id,
            assigned_to: self.assigned_to,
            created_at: self.created_at,
            updated_at: self.created_at,
        }
    }
}

/// Task aggregate root.
///
/// The owning project is fixed at creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    title: TaskTitle,
    description: Option<String>,
    status: TaskStatus,
    due_date: Option<NaiveDate>,
    project_id: ProjectId,
    assigned_to: Option<DeveloperId>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTaskData {
    /// Persisted task identifier.
    pub id: TaskId,
    /// Persisted title.
    pub title: TaskTitle,
    /// Persisted description.
    pub description: Option<String>,
    /// Persisted workflow status.
    pub status: TaskStatus,
    /// Persisted due date.
    pub due_date: Option<NaiveDate>,
    /// Persisted owning project.
    pub project_id: ProjectId,
    /// Persisted assignee.
    pub assigned_to: Option<DeveloperId>,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted latest update timestamp.
    pub updated_at: DateTime<Utc>,
}

impl Task {
    /// Reconstructs a task from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        Self {
            id: data.id,
            title: data.title,
            description: data.description,
            status: data.status,
            due_date: data.due_date,
            project_id: data.project_id,
            assigned_to: data.assigned_to,
            created_at: data.created_at,
            updated_at: data.updated_at,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the task title.
    #[must_use]
    pub const fn title(&self) -> &TaskTitle {
        &self.title
    }

    /// Returns the task description, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the workflow status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the due date, if any.
    #[must_use]
    pub const fn due_date(&self) -> Option<NaiveDate> {
        self.due_date
    }

    /// Returns the owning project.
    #[must_use]
    pub const fn project_id(&self) -> ProjectId {
        self.project_id
    }

    /// Returns the assigned developer, if any.
    #[must_use]
    pub const fn assigned_to(&self) -> Option<DeveloperId> {
        self.assigned_to
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the latest update timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Replaces title, description, status, and due date.
    ///
    /// Project and assignee are left untouched.
    pub fn update_details(
        &mut self,
        title: TaskTitle,
        description: Option<String>,
        status: TaskStatus,
        due_date: Option<NaiveDate>,
        clock: &impl Clock,
    ) {
        self.title = title;
        self.description = description;
        self.status = status;
        self.due_date = due_date;
        self.touch(clock);
    }

    /// Sets the workflow status. Every transition is permitted.
    pub fn set_status(&mut self, status: TaskStatus, clock: &impl Clock) {
        self.status = status;
        self.touch(clock);
    }

    /// Assigns the task to `developer`, replacing any previous assignee.
    ///
    /// # Errors
    ///
    /// Returns [`AssignmentError::CrossProjectAssignment`] unless the
    /// developer currently belongs to the task's project.
    pub fn assign_to(
        &mut self,
        developer: &Developer,
        clock: &impl Clock,
    ) -> Result<(), AssignmentError> {
        ensure_same_project(self.project_id, developer)?;
        self.assigned_to = Some(developer.id());
        self.touch(clock);
        Ok(())
    }

    /// Clears the assignee and returns it.
    ///
    /// # Errors
    ///
    /// Returns [`AssignmentError::NotAssigned`] when the task has no
    /// assignee.
    pub fn unassign(&mut self, clock: &impl Clock) -> Result<DeveloperId, AssignmentError> {
        let previous = self
            .assigned_to
            .take()
            .ok_or(AssignmentError::NotAssigned(self.id.into()))?;
        self.touch(clock);
        Ok(previous)
    }

    /// Updates the `updated_at` timestamp to the current clock time.
    fn touch(&mut self, clock: &impl Clock) {
        self.updated_at = clock.utc();
    }
}
