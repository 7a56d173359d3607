//! Diesel row models for board persistence.

use super::schema::{developers, projects, tasks};
use chrono::{DateTime, NaiveDate, Utc};
use diesel::prelude::*;

/// Query result row for project records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = projects)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct ProjectRow {
    /// Storage-assigned identifier.
    pub id: i64,
    /// Unique project name.
    pub name: String,
    /// Optional description.
    pub description: Option<String>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Insert model for project records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = projects)]
pub struct NewProjectRow {
    /// Unique project name.
    pub name: String,
    /// Optional description.
    pub description: Option<String>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Query result row for developer records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = developers)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct DeveloperRow {
    /// Storage-assigned identifier.
    pub id: i64,
    /// Display name.
    pub name: String,
    /// Unique email address.
    pub email: String,
    /// Optional role.
    pub role: Option<String>,
    /// Project membership.
    pub project_id: Option<i64>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

/// Insert model for developer records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = developers)]
pub struct NewDeveloperRow {
    /// Display name.
    pub name: String,
    /// Unique email address.
    pub email: String,
    /// Optional role.
    pub role: Option<String>,
    /// Project membership.
    pub project_id: Option<i64>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

/// Query result row for task records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = tasks)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct TaskRow {
    /// Storage-assigned identifier.
    pub id: i64,
    /// Task title.
    pub title: String,
    /// Optional description.
    pub description: Option<String>,
    /// Workflow status.
    pub status: String,
    /// Optional due date.
    pub due_date: Option<NaiveDate>,
    /// Owning project.
    pub project_id: i64,
    /// Assigned developer.
    pub assigned_to_id: Option<i64>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Insert model for task records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = tasks)]
pub struct NewTaskRow {
    /// Task title.
    pub title: String,
    /// Optional description.
    pub description: Option<String>,
    /// Workflow status.
    pub status: String,
    /// Optional due date.
    pub due_date: Option<NaiveDate>,
    /// Owning project.
    pub project_id: i64,
    /// Assigned developer.
    pub assigned_to_id: Option<i64>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}
