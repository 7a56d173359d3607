//! Port contracts for the storage collaborator.
//!
//! Ports define infrastructure-agnostic interfaces used by the board
//! services. Each entity has its own repository; all of them report failures
//! through [`RepositoryError`].

pub mod developer;
pub mod error;
pub mod project;
pub mod task;

pub use developer::DeveloperRepository;
pub use error::{RepositoryError, RepositoryResult};
pub use project::ProjectRepository;
pub use task::TaskRepository;

#[cfg(test)]
pub use developer::MockDeveloperRepository;
#[cfg(test)]
pub use project::MockProjectRepository;
#[cfg(test)]
pub use task::MockTaskRepository;
