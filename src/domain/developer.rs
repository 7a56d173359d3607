//! Developer aggregate and its project membership rules.

use super::{AssignmentError, DeveloperId, DeveloperName, EmailAddress, ProjectId};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// A developer that has not been persisted yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewDeveloper {
    name: DeveloperName,
    email: EmailAddress,
    role: Option<String>,
    project_id: Option<ProjectId>,
    created_at: DateTime<Utc>,
}

impl NewDeveloper {
    /// Creates an unsaved developer.
    ///
    /// A new developer may join a project immediately; there is no previous
    /// membership to guard against.
    #[must_use]
    pub fn new(
        name: DeveloperName,
        email: EmailAddress,
        role: Option<String>,
        project_id: Option<ProjectId>,
        clock: &impl Clock,
    ) -> Self {
        Self {
            name,
            email,
            role,
            project_id,
            created_at: clock.utc(),
        }
    }

    /// Returns the developer name.
    #[must_use]
    pub const fn name(&self) -> &DeveloperName {
        &self.name
    }

    /// Returns the developer email.
    #[must_use]
    pub const fn email(&self) -> &EmailAddress {
        &self.email
    }

    /// Returns the developer role, if any.
    #[must_use]
    pub fn role(&self) -> Option<&str> {
        self.role.as_deref()
    }

    /// Returns the initial project membership.
    #[must_use]
    pub const fn project_id(&self) -> Option<ProjectId> {
        self.project_id
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Binds the storage-assigned identity, producing a persisted developer.
    #[must_use]
    pub fn into_developer(self, id: DeveloperId) -> Developer {
        Developer {
            id,
            name: self.name,
            email: self.email,
            role: self.role,
            project_id: self.project_id,
            created_at: self.created_at,
        }
    }
}

/// Developer aggregate root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Developer {
    id: DeveloperId,
    name: DeveloperName,
    email: EmailAddress,
    role: Option<String>,
    project_id: Option<ProjectId>,
    created_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted developer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedDeveloperData {
    /// Persisted developer identifier.
    pub id: DeveloperId,
    /// Persisted developer name.
    pub name: DeveloperName,
    /// Persisted unique email.
    pub email: EmailAddress,
    /// Persisted role.
    pub role: Option<String>,
    /// Persisted project membership.
    pub project_id: Option<ProjectId>,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl Developer {
    /// Reconstructs a developer from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedDeveloperData) -> Self {
        Self {
            id: data.id,
            name: data.name,
            email: data.email,
            role: data.role,
            project_id: data.project_id,
            created_at: data.created_at,
        }
    }

    /// Returns the developer identifier.
    #[must_use]
    pub const fn id(&self) -> DeveloperId {
        self.id
    }

    /// Returns the developer name.
    #[must_use]
    pub const fn name(&self) -> &DeveloperName {
        &self.name
    }

    /// Returns the developer email.
    #[must_use]
    pub const fn email(&self) -> &EmailAddress {
        &self.email
    }

    /// Returns the developer role, if any.
    #[must_use]
    pub fn role(&self) -> Option<&str> {
        self.role.as_deref()
    }

    /// Returns the project the developer belongs to, if any.
    #[must_use]
    pub const fn project_id(&self) -> Option<ProjectId> {
        self.project_id
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Replaces the profile fields. Project membership is left untouched.
    pub fn update_profile(&mut self, name: DeveloperName, email: EmailAddress, role: Option<String>) {
        self.name = name;
        self.email = email;
        self.role = role;
    }

    /// Makes the developer a member of `project_id`.
    ///
    /// # Errors
    ///
    /// Returns [`AssignmentError::AlreadyAssigned`] when the developer already
    /// belongs to a project, including `project_id` itself.
    pub const fn assign_to_project(&mut self, project_id: ProjectId) -> Result<(), AssignmentError> {
        if let Some(current) = self.project_id {
            return Err(AssignmentError::AlreadyAssigned {
                developer: self.id,
                project: current,
            });
        }
        self.project_id = Some(project_id);
        Ok(())
    }

    /// Removes the developer from their project and returns it.
    ///
    /// Tasks assigned to the developer are not affected.
    ///
    /// # Errors
    ///
    /// Returns [`AssignmentError::NotAssigned`] when the developer has no
    /// project.
    pub fn unassign_from_project(&mut self) -> Result<ProjectId, AssignmentError> {
        self.project_id
            .take()
            .ok_or(AssignmentError::NotAssigned(self.id.into()))
    }
}
