//! `PostgreSQL` repository implementation for tasks.

use super::{
    blocking::{PgPool, run_blocking, violated_constraint},
    conversion::{row_to_task, to_count, to_new_task_row},
    models::TaskRow,
    schema::tasks,
};
use crate::{
    domain::{DeveloperId, EntityRef, NewTask, ProjectId, Task, TaskId, TaskStatus},
    ports::{RepositoryError, RepositoryResult, TaskRepository},
};
use async_trait::async_trait;
use diesel::dsl::{exists, select};
use diesel::prelude::*;
use diesel::result::{DatabaseErrorKind, Error as DieselError};

const PROJECT_FOREIGN_KEY: &str = "fk_tasks_project";
const ASSIGNEE_FOREIGN_KEY: &str = "fk_tasks_assigned_to";

/// `PostgreSQL`-backed task repository.
#[derive(Debug, Clone)]
pub struct PostgresTaskRepository {
    pool: PgPool,
}

impl PostgresTaskRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Maps foreign key violations onto the record the task points at.
fn map_write_error(
    err: DieselError,
    project_id: ProjectId,
    assigned_to: Option<DeveloperId>,
) -> RepositoryError {
    match (violated_constraint(&err), assigned_to) {
        (Some((DatabaseErrorKind::ForeignKeyViolation, PROJECT_FOREIGN_KEY)), _) => {
            RepositoryError::ReferentialIntegrity(project_id.into())
        }
        (Some((DatabaseErrorKind::ForeignKeyViolation, ASSIGNEE_FOREIGN_KEY)), Some(developer)) => {
            RepositoryError::ReferentialIntegrity(EntityRef::Developer(developer))
        }
        _ => RepositoryError::persistence(err),
    }
}

fn load_filtered<F>(connection: &mut PgConnection, filter: F) -> RepositoryResult<Vec<Task>>
where
    F: FnOnce(
        tasks::BoxedQuery<'static, diesel::pg::Pg>,
    ) -> tasks::BoxedQuery<'static, diesel::pg::Pg>,
{
    let rows = filter(tasks::table.into_boxed())
        .order(tasks::id.asc())
        .select(TaskRow::as_select())
        .load::<TaskRow>(connection)
        .map_err(RepositoryError::persistence)?;
    rows.into_iter().map(row_to_task).collect()
}

fn count_filtered<F>(connection: &mut PgConnection, filter: F) -> RepositoryResult<u64>
where
    F: FnOnce(
        tasks::BoxedQuery<'static, diesel::pg::Pg>,
    ) -> tasks::BoxedQuery<'static, diesel::pg::Pg>,
{
    let count = filter(tasks::table.into_boxed())
        .count()
        .get_result::<i64>(connection)
        .map_err(RepositoryError::persistence)?;
    to_count(count)
}

#[async_trait]
impl TaskRepository for PostgresTaskRepository {
    async fn insert(&self, task: &NewTask) -> RepositoryResult<Task> {
        let project_id = task.project_id();
        let assigned_to = task.assigned_to();
        let new_row = to_new_task_row(task);

        run_blocking(&self.pool, move |connection| {
            let row = diesel::insert_into(tasks::table)
                .values(&new_row)
                .returning(TaskRow::as_returning())
                .get_result::<TaskRow>(connection)
                .map_err(|err| map_write_error(err, project_id, assigned_to))?;
            row_to_task(row)
        })
        .await
    }

    async fn update(&self, task: &Task) -> RepositoryResult<()> {
        let task_id = task.id();
        let project_id = task.project_id();
        let title = task.title().as_str().to_owned();
        let description = task.description().map(str::to_owned);
        let status = task.status().as_str();
        let due_date = task.due_date();
        let assigned_to = task.assigned_to();
        let updated_at = task.updated_at();

        run_blocking(&self.pool, move |connection| {
            let updated_count = diesel::update(tasks::table.filter(tasks::id.eq(task_id.value())))
                .set((
                    tasks::title.eq(&title),
                    tasks::description.eq(description),
                    tasks::status.eq(status),
                    tasks::due_date.eq(due_date),
                    tasks::assigned_to_id.eq(assigned_to.map(DeveloperId::value)),
                    tasks::updated_at.eq(updated_at),
                ))
                .execute(connection)
                .map_err(|err| map_write_error(err, project_id, assigned_to))?;

            if updated_count == 0 {
                return Err(RepositoryError::NotFound(task_id.into()));
            }
            Ok(())
        })
        .await
    }

    async fn find_by_id(&self, id: TaskId) -> RepositoryResult<Option<Task>> {
        run_blocking(&self.pool, move |connection| {
            let row = tasks::table
                .filter(tasks::id.eq(id.value()))
                .select(TaskRow::as_select())
                .first::<TaskRow>(connection)
                .optional()
                .map_err(RepositoryError::persistence)?;
            row.map(row_to_task).transpose()
        })
        .await
    }

    async fn exists_by_id(&self, id: TaskId) -> RepositoryResult<bool> {
        run_blocking(&self.pool, move |connection| {
            select(exists(tasks::table.filter(tasks::id.eq(id.value()))))
                .get_result::<bool>(connection)
                .map_err(RepositoryError::persistence)
        })
        .await
    }

    async fn delete_by_id(&self, id: TaskId) -> RepositoryResult<()> {
        run_blocking(&self.pool, move |connection| {
            let deleted = diesel::delete(tasks::table.filter(tasks::id.eq(id.value())))
                .execute(connection)
                .map_err(RepositoryError::persistence)?;

            if deleted == 0 {
                return Err(RepositoryError::NotFound(id.into()));
            }
            Ok(())
        })
        .await
    }

    async fn list_all(&self) -> RepositoryResult<Vec<Task>> {
        run_blocking(&self.pool, move |connection| {
            load_filtered(connection, |query| query)
        })
        .await
    }

    async fn list_by_project(&self, project_id: ProjectId) -> RepositoryResult<Vec<Task>> {
        run_blocking(&self.pool, move |connection| {
            load_filtered(connection, |query| {
                query.filter(tasks::project_id.eq(project_id.value()))
            })
        })
        .await
    }

    async fn list_by_developer(&self, developer_id: DeveloperId) -> RepositoryResult<Vec<Task>> {
        run_blocking(&self.pool, move |connection| {
            load_filtered(connection, |query| {
                query.filter(tasks::assigned_to_id.eq(developer_id.value()))
            })
        })
        .await
    }

    async fn list_by_status(&self, status: TaskStatus) -> RepositoryResult<Vec<Task>> {
        run_blocking(&self.pool, move |connection| {
            load_filtered(connection, |query| {
                query.filter(tasks::status.eq(status.as_str()))
            })
        })
        .await
    }

    async fn list_by_project_and_status(
        &self,
        project_id: ProjectId,
        status: TaskStatus,
    ) -> RepositoryResult<Vec<Task>> {
        run_blocking(&self.pool, move |connection| {
            load_filtered(connection, |query| {
                query
                    .filter(tasks::project_id.eq(project_id.value()))
                    .filter(tasks::status.eq(status.as_str()))
            })
        })
        .await
    }

    async fn count_by_project(&self, project_id: ProjectId) -> RepositoryResult<u64> {
        run_blocking(&self.pool, move |connection| {
            count_filtered(connection, |query| {
                query.filter(tasks::project_id.eq(project_id.value()))
            })
        })
        .await
    }

    async fn count_by_developer(&self, developer_id: DeveloperId) -> RepositoryResult<u64> {
        run_blocking(&self.pool, move |connection| {
            count_filtered(connection, |query| {
                query.filter(tasks::assigned_to_id.eq(developer_id.value()))
            })
        })
        .await
    }
}
