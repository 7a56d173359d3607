//! Conversions between Diesel rows and domain aggregates.

use super::models::{
    DeveloperRow, NewDeveloperRow, NewProjectRow, NewTaskRow, ProjectRow, TaskRow,
};
use crate::{
    domain::{
        Developer, DeveloperId, DeveloperName, EmailAddress, NewDeveloper, NewProject, NewTask,
        PersistedDeveloperData, PersistedProjectData, PersistedTaskData, Project, ProjectId,
        ProjectName, Task, TaskId, TaskStatus, TaskTitle,
    },
    ports::{RepositoryError, RepositoryResult},
};

pub(super) fn to_new_project_row(project: &NewProject) -> NewProjectRow {
    NewProjectRow {
        name: project.name().as_str().to_owned(),
        description: project.description().map(str::to_owned),
        created_at: project.created_at(),
        updated_at: project.created_at(),
    }
}

pub(super) fn row_to_project(row: ProjectRow) -> RepositoryResult<Project> {
    let ProjectRow {
        id,
        name,
        description,
        created_at,
        updated_at,
    } = row;

    let data = PersistedProjectData {
        id: ProjectId::new(id).map_err(RepositoryError::invalid_persisted_data)?,
        name: ProjectName::new(name).map_err(RepositoryError::invalid_persisted_data)?,
        description,
        created_at,
        updated_at,
    };
    Ok(Project::from_persisted(data))
}

pub(super) fn to_new_developer_row(developer: &NewDeveloper) -> NewDeveloperRow {
    NewDeveloperRow {
        name: developer.name().as_str().to_owned(),
        email: developer.email().as_str().to_owned(),
        role: developer.role().map(str::to_owned),
        project_id: developer.project_id().map(ProjectId::value),
        created_at: developer.created_at(),
    }
}

pub(super) fn row_to_developer(row: DeveloperRow) -> RepositoryResult<Developer> {
    let DeveloperRow {
        id,
        name,
        email,
        role,
        project_id,
        created_at,
    } = row;

    let data = PersistedDeveloperData {
        id: DeveloperId::new(id).map_err(RepositoryError::invalid_persisted_data)?,
        name: DeveloperName::new(name).map_err(RepositoryError::invalid_persisted_data)?,
        email: EmailAddress::new(email).map_err(RepositoryError::invalid_persisted_data)?,
        role,
        project_id: project_id
            .map(ProjectId::new)
            .transpose()
            .map_err(RepositoryError::invalid_persisted_data)?,
        created_at,
    };
    Ok(Developer::from_persisted(data))
}

pub(super) fn to_new_task_row(task: &NewTask) -> NewTaskRow {
    NewTaskRow {
        title: task.title().as_str().to_owned(),
        description: task.description().map(str::to_owned),
        status: task.status().as_str().to_owned(),
        due_date: task.due_date(),
        project_id: task.project_id().value(),
        assigned_to_id: task.assigned_to().map(DeveloperId::value),
        created_at: task.created_at(),
        updated_at: task.created_at(),
    }
}

pub(super) fn row_to_task(row: TaskRow) -> RepositoryResult<Task> {
    let TaskRow {
        id,
        title,
        description,
        status,
        due_date,
        project_id,
        assigned_to_id,
        created_at,
        updated_at,
    } = row;

    let data = PersistedTaskData {
        id: TaskId::new(id).map_err(RepositoryError::invalid_persisted_data)?,
        title: TaskTitle::new(title).map_err(RepositoryError::invalid_persisted_data)?,
        description,
        status: TaskStatus::try_from(status.as_str())
            .map_err(RepositoryError::invalid_persisted_data)?,
        due_date,
        project_id: ProjectId::new(project_id).map_err(RepositoryError::invalid_persisted_data)?,
        assigned_to: assigned_to_id
            .map(DeveloperId::new)
            .transpose()
            .map_err(RepositoryError::invalid_persisted_data)?,
        created_at,
        updated_at,
    };
    Ok(Task::from_persisted(data))
}

/// Converts a SQL `COUNT(*)` result into a repository count.
pub(super) fn to_count(value: i64) -> RepositoryResult<u64> {
    u64::try_from(value).map_err(RepositoryError::invalid_persisted_data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, TimeZone, Utc};
    use rstest::rstest;

    fn timestamp() -> chrono::DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 14, 9, 30, 0)
            .single()
            .expect("valid timestamp")
    }

    fn task_row(status: &str) -> TaskRow {
        TaskRow {
            id: 7,
            title: "Fix bug".to_owned(),
            description: None,
            status: status.to_owned(),
            due_date: NaiveDate::from_ymd_opt(2026, 4, 1),
            project_id: 3,
            assigned_to_id: Some(5),
            created_at: timestamp(),
            updated_at: timestamp(),
        }
    }

    #[rstest]
    fn project_row_converts_to_domain() {
        let row = ProjectRow {
            id: 1,
            name: "Alpha".to_owned(),
            description: Some("First".to_owned()),
            created_at: timestamp(),
            updated_at: timestamp(),
        };

        let project = row_to_project(row).expect("valid row");

        assert_eq!(project.id().value(), 1);
        assert_eq!(project.name().as_str(), "Alpha");
        assert_eq!(project.description(), Some("First"));
    }

    #[rstest]
    fn developer_row_without_project_is_unassigned() {
        let row = DeveloperRow {
            id: 4,
            name: "Bob".to_owned(),
            email: "bob@x.com".to_owned(),
            role: Some("backend".to_owned()),
            project_id: None,
            created_at: timestamp(),
        };

        let developer = row_to_developer(row).expect("valid row");

        assert_eq!(developer.email().as_str(), "bob@x.com");
        assert!(developer.project_id().is_none());
    }

    #[rstest]
    fn task_row_keeps_links_and_status() {
        let task = row_to_task(task_row("IN_PROGRESS")).expect("valid row");

        assert_eq!(task.status(), TaskStatus::InProgress);
        assert_eq!(task.project_id().value(), 3);
        assert_eq!(task.assigned_to().map(DeveloperId::value), Some(5));
    }

    #[rstest]
    fn unknown_persisted_status_is_invalid_data() {
        let result = row_to_task(task_row("ARCHIVED"));

        assert!(matches!(
            result,
            Err(RepositoryError::InvalidPersistedData(_))
        ));
    }

    #[rstest]
    fn blank_persisted_email_is_invalid_data() {
        let row = DeveloperRow {
            id: 4,
            name: "Bob".to_owned(),
            email: "   ".to_owned(),
            role: None,
            project_id: None,
            created_at: timestamp(),
        };

        assert!(matches!(
            row_to_developer(row),
            Err(RepositoryError::InvalidPersistedData(_))
        ));
    }

    #[rstest]
    #[case(0, Some(0))]
    #[case(12, Some(12))]
    #[case(-1, None)]
    fn sql_counts_are_converted(#[case] raw: i64, #[case] expected: Option<u64>) {
        assert_eq!(to_count(raw).ok(), expected);
    }
}
