//! Project aggregate.

use super::{ProjectId, ProjectName};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// A project that has not been persisted yet and so has no identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProject {
    name: ProjectName,
    description: Option<String>,
    created_at: DateTime<Utc>,
}

impl NewProject {
    /// Creates an unsaved project stamped with the current clock time.
    #[must_use]
    pub fn new(name: ProjectName, description: Option<String>, clock: &impl Clock) -> Self {
        Self {
            name,
            description,
            created_at: clock.utc(),
        }
    }

    /// Returns the project name.
    #[must_use]
    pub const fn name(&self) -> &ProjectName {
        &self.name
    }

    /// Returns the project description, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Binds the storage-assigned identity, producing a persisted project.
    #[must_use]
    pub fn into_project(self, id: ProjectId) -> Project {
        Project {
            id,
            name: self.name,
            description: self.description,
            created_at: self.created_at,
            updated_at: self.created_at,
        }
    }
}

/// Project aggregate root.
///
/// Developers and tasks point at a project; the project itself stores no
/// back-references.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    id: ProjectId,
    name: ProjectName,
    description: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedProjectData {
    /// Persisted project identifier.
    pub id: ProjectId,
    /// Persisted project name.
    pub name: ProjectName,
    /// Persisted description.
    pub description: Option<String>,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted latest update timestamp.
    pub updated_at: DateTime<Utc>,
}

impl Project {
    /// Reconstructs a project from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedProjectData) -> Self {
        Self {
            id: data.id,
            name: data.name,
            description: data.description,
            created_at: data.created_at,
            updated_at: data.updated_at,
        }
    }

    /// Returns the project identifier.
    #[must_use]
    pub const fn id(&self) -> ProjectId {
        self.id
    }

    /// Returns the project name.
    #[must_use]
    pub const fn name(&self) -> &ProjectName {
        &self.name
    }

    /// Returns the project description, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
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

    /// Replaces the name and description.
    pub fn update_details(
        &mut self,
        name: ProjectName,
        description: Option<String>,
        clock: &impl Clock,
    ) {
        self.name = name;
        self.description = description;
        self.updated_at = clock.utc();
    }
}
