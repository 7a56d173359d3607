//! Error type shared by the board services.

use crate::{
    domain::{
        AssignmentError, DeveloperId, DomainError, EmailAddress, EntityRef, ProjectId, ProjectName,
    },
    ports::RepositoryError,
};
use thiserror::Error;

/// Result type for board service operations.
pub type ServiceResult<T> = Result<T, ServiceError>;

/// Failures reported by the board services.
///
/// Every variant except [`ServiceError::Repository`] is a deterministic
/// business-rule violation; retrying the same call yields the same error.
#[derive(Debug, Clone, Error)]
pub enum ServiceError {
    /// The referenced record does not exist.
    #[error("{0} not found")]
    NotFound(EntityRef),

    /// Another project already uses the name.
    #[error("project name '{0}' is already taken")]
    DuplicateName(ProjectName),

    /// Another developer already uses the email address.
    #[error("developer email '{0}' is already taken")]
    DuplicateEmail(EmailAddress),

    /// The developer must leave their current project first.
    #[error("developer {developer} is already assigned to project {project}")]
    AlreadyAssigned {
        /// Developer that was asked to join a project.
        developer: DeveloperId,
        /// Project the developer currently belongs to.
        project: ProjectId,
    },

    /// The developer or task has no assignment to clear.
    #[error("{0} is not assigned")]
    NotAssigned(EntityRef),

    /// The developer is not a member of the task's project.
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

    /// Other records still reference the entity being deleted.
    #[error("{entity} still has {} attached", dependents_summary(.developers, .tasks))]
    HasDependents {
        /// Entity whose deletion was refused.
        entity: EntityRef,
        /// Developers that still reference the entity.
        developers: u64,
        /// Tasks that still reference the entity.
        tasks: u64,
    },

    /// Input failed domain validation.
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// The storage collaborator failed.
    #[error(transparent)]
    Repository(RepositoryError),
}

impl ServiceError {
    /// Returns `true` for business-rule violations and `false` for
    /// infrastructure failures.
    #[must_use]
    pub const fn is_rule_violation(&self) -> bool {
        !matches!(self, Self::Repository(_))
    }
}

impl From<RepositoryError> for ServiceError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound(entity) | RepositoryError::ReferentialIntegrity(entity) => {
                Self::NotFound(entity)
            }
            RepositoryError::DuplicateName(name) => Self::DuplicateName(name),
            RepositoryError::DuplicateEmail(email) => Self::DuplicateEmail(email),
            other @ (RepositoryError::InvalidPersistedData(_)
            | RepositoryError::Persistence(_)) => Self::Repository(other),
        }
    }
}

impl From<AssignmentError> for ServiceError {
    fn from(err: AssignmentError) -> Self {
        match err {
            AssignmentError::AlreadyAssigned { developer, project } => {
                Self::AlreadyAssigned { developer, project }
            }
            AssignmentError::NotAssigned(entity) => Self::NotAssigned(entity),
            AssignmentError::CrossProjectAssignment {
                developer,
                task_project,
                developer_project,
            } => Self::CrossProjectAssignment {
                developer,
                task_project,
                developer_project,
            },
        }
    }
}

/// Lists the non-zero dependent counts, for example "2 developer(s)".
#[expect(
    clippy::trivially_copy_pass_by_ref,
    reason = "thiserror hands format arguments over by reference"
)]
fn dependents_summary(developers: &u64, tasks: &u64) -> String {
    match (*developers, *tasks) {
        (0, 0) => "dependents".to_owned(),
        (0, _) => format!("{tasks} task(s)"),
        (_, 0) => format!("{developers} developer(s)"),
        _ => format!("{developers} developer(s) and {tasks} task(s)"),
    }
}
