//! Error types for domain validation, parsing, and assignment rules.

use super::{DeveloperId, EntityRef, ProjectId};
use thiserror::Error;

/// Errors returned while constructing domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DomainError {
    /// A storage identifier was zero or negative.
    #[error("invalid identifier {0}, expected a positive integer")]
    InvalidId(i64),

    /// The project name is empty after trimming.
    #[error("project name must not be empty")]
    EmptyProjectName,

    /// The project name exceeds the storage limit.
    #[error("project name exceeds {max} character limit: {value}")]
    ProjectNameTooLong {
        /// Rejected raw value.
        value: String,
        /// Maximum accepted length in characters.
        max: usize,
    },

    /// The developer name is empty after trimming.
    #[error("developer name must not be empty")]
    EmptyDeveloperName,

    /// The email address is empty after trimming.
    #[error("email address must not be empty")]
    EmptyEmail,

    /// The email address is not of the form `local@domain`.
    #[error("invalid email address '{0}'")]
    InvalidEmail(String),

    /// The email address exceeds the storage limit.
    #[error("email address exceeds {max} character limit: {value}")]
    EmailTooLong {
        /// Rejected raw value.
        value: String,
        /// Maximum accepted length in characters.
        max: usize,
    },

    /// The task title is empty after trimming.
    #[error("task title must not be empty")]
    EmptyTaskTitle,

    /// The task title exceeds the storage limit.
    #[error("task title exceeds {max} character limit: {value}")]
    TaskTitleTooLong {
        /// Rejected raw value.
        value: String,
        /// Maximum accepted length in characters.
        max: usize,
    },
}

/// Error returned while parsing a task status from persistence or input.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task status: {0}")]
pub struct ParseTaskStatusError(pub String);

/// Violations of the assignment rules between developers, projects, and
/// tasks.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum AssignmentError {
    /// The developer already belongs to a project and must be unassigned
    /// before joining another one.
    #[error("developer {developer} is already assigned to project {project}")]
    AlreadyAssigned {
        /// Developer that was asked to join a project.
        developer: DeveloperId,
        /// Project the developer currently belongs to.
        project: ProjectId,
    },

    /// The entity has no assignment to clear.
    #[error("{0} is not assigned")]
    NotAssigned(EntityRef),

    /// The developer does not belong to the task's project.
    #[error(
        "developer {developer} must belong to project {task_project} to be assigned this task"
    )]
    CrossProjectAssignment {
        /// Developer that was asked to take the task.
        developer: DeveloperId,
        /// Project that owns the task.
        task_project: ProjectId,
        /// Project the developer currently belongs to, if any.
        developer_project: Option<ProjectId>,
    },
}
