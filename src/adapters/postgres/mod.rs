//! `PostgreSQL` adapters for the board repositories.
//!
//! The schema is managed by the Diesel migrations under `migrations/`.
//! Unique indexes and `ON DELETE RESTRICT` foreign keys back the service
//! pre-checks when concurrent writers race.

mod blocking;
mod conversion;
mod developer;
mod models;
mod project;
mod schema;
mod task;

pub use blocking::PgPool;
pub use developer::PostgresDeveloperRepository;
pub use project::PostgresProjectRepository;
pub use task::PostgresTaskRepository;
