//! Taskboard: project, developer, and task management backend.
//!
//! This crate provides the consistency rules for a small project board:
//! developers join at most one project, every task belongs to exactly one
//! project, and a task may only be assigned to a member of its project.
//!
//! # Architecture
//!
//! Taskboard follows hexagonal architecture principles:
//!
//! - **Domain**: Entities and validated values with no infrastructure
//!   dependencies
//! - **Ports**: Repository traits for the storage collaborator
//! - **Adapters**: In-memory and `PostgreSQL` implementations of the ports
//! - **Services**: The rules engine that request handlers call
//!
//! # Modules
//!
//! - [`domain`]: Projects, developers, tasks, and their value types
//! - [`ports`]: Repository contracts and their error type
//! - [`adapters`]: Repository implementations
//! - [`services`]: Rule-enforcing services and the views they return
//! - [`config`]: `PostgreSQL` pool settings
//! - [`telemetry`]: Tracing subscriber installation

pub mod adapters;
pub mod config;
pub mod domain;
pub mod ports;
pub mod services;
pub mod telemetry;

#[cfg(test)]
mod tests;
