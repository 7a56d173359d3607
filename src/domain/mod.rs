//! Domain model for projects, developers, and tasks.
//!
//! Aggregates hold plain references by identifier; back-references such as
//! "tasks of a developer" are never stored and are derived through the
//! repository ports instead. All infrastructure concerns are kept outside the
//! domain boundary.

mod developer;
mod email;
mod error;
mod ids;
mod name;
mod project;
mod status;
mod task;

pub use developer::{Developer, NewDeveloper, PersistedDeveloperData};
pub use email::EmailAddress;
pub use error::{AssignmentError, DomainError, ParseTaskStatusError};
pub use ids::{DeveloperId, EntityRef, ProjectId, TaskId};
pub use name::{DeveloperName, ProjectName, TaskTitle};
pub use project::{NewProject, PersistedProjectData, Project};
pub use status::TaskStatus;
pub use task::{NewTask, PersistedTaskData, Task};
