//! Error type shared by all repository ports.

use crate::domain::{EmailAddress, EntityRef, ProjectName};
use std::sync::Arc;
use thiserror::Error;

/// Result type for repository operations.
pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Errors returned by repository implementations.
#[derive(Debug, Clone, Error)]
pub enum RepositoryError {
    /// The record to update or delete does not exist.
    #[error("{0} not found")]
    NotFound(EntityRef),

    /// A project with the same name already exists.
    #[error("duplicate project name: {0}")]
    DuplicateName(ProjectName),

    /// A developer with the same email already exists.
    #[error("duplicate developer email: {0}")]
    DuplicateEmail(EmailAddress),

    /// A foreign key rejected the write, because the referenced record is
    /// missing or dependents still point at the record being deleted.
    #[error("referential integrity violated for {0}")]
    ReferentialIntegrity(EntityRef),

    /// Persisted data could not be reconstructed into domain types.
    #[error("invalid persisted data: {0}")]
    InvalidPersistedData(Arc<dyn std::error::Error + Send + Sync>),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl RepositoryError {
    /// Wraps a data-quality or deserialization error from persisted rows.
    pub fn invalid_persisted_data(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::InvalidPersistedData(Arc::new(err))
    }

    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
