//! Identifier types for projects, developers, and tasks.
//!
//! Identities are assigned by the storage collaborator when a record is first
//! inserted, so the domain never generates them.

use super::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Storage-assigned identifier of a project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProjectId(i64);

impl ProjectId {
    /// Creates a validated project identifier.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidId`] when the value is not positive.
    pub const fn new(value: i64) -> Result<Self, DomainError> {
        if value <= 0 {
            return Err(DomainError::InvalidId(value));
        }
        Ok(Self(value))
    }

    /// Returns the underlying numeric value.
    #[must_use]
    pub const fn value(self) -> i64 {
        self.0
    }
}

impl fmt::Display for ProjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Storage-assigned identifier of a developer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DeveloperId(i64);

impl DeveloperId {
    /// Creates a validated developer identifier.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidId`] when the value is not positive.
    pub const fn new(value: i64) -> Result<Self, DomainError> {
        if value <= 0 {
            return Err(DomainError::InvalidId(value));
        }
        Ok(Self(value))
    }

    /// Returns the underlying numeric value.
    #[must_use]
    pub const fn value(self) -> i64 {
        self.0
    }
}

impl fmt::Display for DeveloperId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Storage-assigned identifier of a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(i64);

impl TaskId {
    /// Creates a validated task identifier.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidId`] when the value is not positive.
    pub const fn new(value: i64) -> Result<Self, DomainError> {
        if value <= 0 {
            return Err(DomainError::InvalidId(value));
        }
        Ok(Self(value))
    }

    /// Returns the underlying numeric value.
    #[must_use]
    pub const fn value(self) -> i64 {
        self.0
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Typed reference to any record kind, used in error reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "id", rename_all = "snake_case")]
pub enum EntityRef {
    /// A project record.
    Project(ProjectId),
    /// A developer record.
    Developer(DeveloperId),
    /// A task record.
    Task(TaskId),
}

impl From<ProjectId> for EntityRef {
    fn from(id: ProjectId) -> Self {
        Self::Project(id)
    }
}

impl From<DeveloperId> for EntityRef {
    fn from(id: DeveloperId) -> Self {
        Self::Developer(id)
    }
}

impl From<TaskId> for EntityRef {
    fn from(id: TaskId) -> Self {
        Self::Task(id)
    }
}

impl fmt::Display for EntityRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Project(id) => write!(f, "project {id}"),
            Self::Developer(id) => write!(f, "developer {id}"),
            Self::Task(id) => write!(f, "task {id}"),
        }
    }
}
