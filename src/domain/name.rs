//! Validated name and title types.

use super::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Maximum length for a project name, matching the `VARCHAR(100)` column.
const MAX_PROJECT_NAME_LENGTH: usize = 100;

/// Maximum length for a task title, matching the `VARCHAR(200)` column.
const MAX_TASK_TITLE_LENGTH: usize = 200;

/// Trims `raw` and rejects the result when empty.
fn trimmed_non_empty(raw: &str, empty: DomainError) -> Result<String, DomainError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(empty);
    }
    Ok(trimmed.to_owned())
}

/// Unique, human-readable project name.
///
/// Names are compared exactly after trimming surrounding whitespace.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProjectName(String);

impl ProjectName {
    /// Creates a validated project name.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::EmptyProjectName`] when the value is blank or
    /// [`DomainError::ProjectNameTooLong`] when it exceeds 100 characters.
    pub fn new(value: impl Into<String>) -> Result<Self, DomainError> {
        let raw = value.into();
        let normalized = trimmed_non_empty(&raw, DomainError::EmptyProjectName)?;
        if normalized.chars().count() > MAX_PROJECT_NAME_LENGTH {
            return Err(DomainError::ProjectNameTooLong {
                value: raw,
                max: MAX_PROJECT_NAME_LENGTH,
            });
        }
        Ok(Self(normalized))
    }

    /// Returns the name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for ProjectName {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for ProjectName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Display name of a developer. Not required to be unique.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DeveloperName(String);

impl DeveloperName {
    /// Creates a validated developer name.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::EmptyDeveloperName`] when the value is blank.
    pub fn new(value: impl Into<String>) -> Result<Self, DomainError> {
        let raw = value.into();
        trimmed_non_empty(&raw, DomainError::EmptyDeveloperName).map(Self)
    }

    /// Returns the name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for DeveloperName {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for DeveloperName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Short title of a task.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskTitle(String);

impl TaskTitle {
    /// Creates a validated task title.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::EmptyTaskTitle`] when the value is blank or
    /// [`DomainError::TaskTitleTooLong`] when it exceeds 200 characters.
    pub fn new(value: impl Into<String>) -> Result<Self, DomainError> {
        let raw = value.into();
        let normalized = trimmed_non_empty(&raw, DomainError::EmptyTaskTitle)?;
        if normalized.chars().count() > MAX_TASK_TITLE_LENGTH {
            return Err(DomainError::TaskTitleTooLong {
                value: raw,
                max: MAX_TASK_TITLE_LENGTH,
            });
        }
        Ok(Self(normalized))
    }

    /// Returns the title as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for TaskTitle {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for TaskTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
