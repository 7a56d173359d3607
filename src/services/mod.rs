//! Consistency rules engine for projects, developers, and tasks.
//!
//! Each service holds `Arc` handles to the repository ports and a clock,
//! checks the board's uniqueness, existence, and assignment rules, and
//! returns flat views with derived fields. Multi-step checks are not wrapped
//! in a transaction; concurrent writers are last-write-wins apart from what
//! the storage collaborator enforces itself.

mod developer;
mod error;
mod guards;
mod project;
mod task;
mod views;

pub use developer::{CreateDeveloperRequest, DeveloperService, UpdateDeveloperRequest};
pub use error::{ServiceError, ServiceResult};
pub use project::{CreateProjectRequest, ProjectService, UpdateProjectRequest};
pub use task::{CreateTaskRequest, TaskService, UpdateTaskRequest};
pub use views::{DeveloperView, ProjectView, TaskView};
