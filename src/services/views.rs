//! Read-oriented projections returned by the board services.
//!
//! Views flatten an aggregate together with its derived fields (member and
//! task counts, denormalised names). Derived fields are computed through the
//! repository ports at the time the view is built, so they are never stale
//! with respect to the storage collaborator at that instant.

use super::ServiceResult;
use crate::{
    domain::{Developer, DeveloperId, Project, ProjectId, Task, TaskId, TaskStatus},
    ports::{DeveloperRepository, ProjectRepository, TaskRepository},
};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Flat view of a project with member and task counts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectView {
    /// Project identifier.
    pub id: ProjectId,
    /// Unique project name.
    pub name: String,
    /// Optional description.
    pub description: Option<String>,
    /// Number of developers currently in the project.
    pub developer_count: u64,
    /// Number of tasks owned by the project.
    pub task_count: u64,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Flat view of a developer with their project name and task count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeveloperView {
    /// Developer identifier.
    pub id: DeveloperId,
    /// Developer name.
    pub name: String,
    /// Unique email address.
    pub email: String,
    /// Optional role.
    pub role: Option<String>,
    /// Project the developer belongs to, if any.
    pub project_id: Option<ProjectId>,
    /// Name of that project, if any.
    pub project_name: Option<String>,
    /// Number of tasks assigned to the developer.
    pub task_count: u64,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

/// Flat view of a task with its project and assignee names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskView {
    /// Task identifier.
    pub id: TaskId,
    /// Task title.
    pub title: String,
    /// Optional description.
    pub description: Option<String>,
    /// Workflow status.
    pub status: TaskStatus,
    /// Optional due date.
    pub due_date: Option<NaiveDate>,
    /// Owning project.
    pub project_id: ProjectId,
    /// Name of the owning project.
    pub project_name: Option<String>,
    /// Assigned developer, if any.
    pub assigned_to_id: Option<DeveloperId>,
    /// Name of the assigned developer, if any.
    pub assigned_to_name: Option<String>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

impl ProjectView {
    /// Builds a view from a project and its dependent counts.
    #[must_use]
    pub fn new(project: &Project, developer_count: u64, task_count: u64) -> Self {
        Self {
            id: project.id(),
            name: project.name().as_str().to_owned(),
            description: project.description().map(str::to_owned),
            developer_count,
            task_count,
            created_at: project.created_at(),
            updated_at: project.updated_at(),
        }
    }
}

impl DeveloperView {
    /// Builds a view from a developer, the name of their project, and the
    /// number of tasks assigned to them.
    #[must_use]
    pub fn new(developer: &Developer, project_name: Option<String>, task_count: u64) -> Self {
        Self {
            id: developer.id(),
            name: developer.name().as_str().to_owned(),
            email: developer.email().as_str().to_owned(),
            role: developer.role().map(str::to_owned),
            project_id: developer.project_id(),
            project_name,
            task_count,
            created_at: developer.created_at(),
        }
    }
}

impl TaskView {
    /// Builds a view from a task and the names of its project and assignee.
    #[must_use]
    pub fn new(task: &Task, project_name: Option<String>, assigned_to_name: Option<String>) -> Self {
        Self {
            id: task.id(),
            title: task.title().as_str().to_owned(),
            description: task.description().map(str::to_owned),
            status: task.status(),
            due_date: task.due_date(),
            project_id: task.project_id(),
            project_name,
            assigned_to_id: task.assigned_to(),
            assigned_to_name,
            created_at: task.created_at(),
            updated_at: task.updated_at(),
        }
    }
}

pub(super) async fn project_view<D, T>(
    project: &Project,
    developers: &D,
    tasks: &T,
) -> ServiceResult<ProjectView>
where
    D: DeveloperRepository + ?Sized,
    T: TaskRepository + ?Sized,
{
    let developer_count = developers.count_by_project(project.id()).await?;
    let task_count = tasks.count_by_project(project.id()).await?;
    Ok(ProjectView::new(project, developer_count, task_count))
}

pub(super) async fn developer_view<P, T>(
    developer: &Developer,
    projects: &P,
    tasks: &T,
) -> ServiceResult<DeveloperView>
where
    P: ProjectRepository + ?Sized,
    T: TaskRepository + ?Sized,
{
    let project_name = match developer.project_id() {
        Some(project_id) => project_name(projects, project_id).await?,
        None => None,
    };
    let task_count = tasks.count_by_developer(developer.id()).await?;
    Ok(DeveloperView::new(developer, project_name, task_count))
}

pub(super) async fn task_view<P, D>(
    task: &Task,
    projects: &P,
    developers: &D,
) -> ServiceResult<TaskView>
where
    P: ProjectRepository + ?Sized,
    D: DeveloperRepository + ?Sized,
{
    let project_name = project_name(projects, task.project_id()).await?;
    let assigned_to_name = match task.assigned_to() {
        Some(developer_id) => developers
            .find_by_id(developer_id)
            .await?
            .map(|developer| developer.name().as_str().to_owned()),
        None => None,
    };
    Ok(TaskView::new(task, project_name, assigned_to_name))
}

async fn project_name<P>(projects: &P, id: ProjectId) -> ServiceResult<Option<String>>
where
    P: ProjectRepository + ?Sized,
{
    Ok(projects
        .find_by_id(id)
        .await?
        .map(|project| project.name().as_str().to_owned()))
}
